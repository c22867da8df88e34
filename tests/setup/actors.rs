/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

//! Actor implementations shared by the integration tests.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use anyhow::{anyhow, bail};
use async_trait::async_trait;
use tokio::sync::Notify;

use sequent::prelude::*;

use crate::setup::messages::{Detonate, Explode, FaultKind, Record, SpawnChild, SpawnLink};

/// A log shared between a test and the actor it observes.
pub type SharedLog = Arc<Mutex<Vec<u64>>>;

/// Appends every `Record` value it receives to a shared log.
#[derive(Debug, Default)]
pub struct Recorder {
    core: ActorCore,
    pub log: SharedLog,
}

impl Recorder {
    pub fn with_log(log: SharedLog) -> Self {
        Self {
            core: ActorCore::default(),
            log,
        }
    }
}

#[async_trait]
impl Actor for Recorder {
    fn core(&self) -> &ActorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        &mut self.core
    }

    async fn receive(&mut self, envelope: Envelope) -> anyhow::Result<()> {
        assert!(self.running(), "receive ran outside the alive window");
        if let Some(Record(value)) = envelope.downcast_ref::<Record>() {
            self.log.lock().unwrap().push(*value);
        }
        Ok(())
    }
}

/// Like `Recorder`, but its first message blocks until the test releases it.
/// Used to observe that mailbox acceptance does not wait on execution.
#[derive(Debug, Default)]
pub struct GatedRecorder {
    core: ActorCore,
    pub log: SharedLog,
    pub gate: Arc<Notify>,
    /// Set once the first receive has entered, so tests can synchronize on
    /// "a message is executing right now".
    pub entered: Arc<AtomicBool>,
}

impl GatedRecorder {
    pub fn new(log: SharedLog, gate: Arc<Notify>, entered: Arc<AtomicBool>) -> Self {
        Self {
            core: ActorCore::default(),
            log,
            gate,
            entered,
        }
    }
}

#[async_trait]
impl Actor for GatedRecorder {
    fn core(&self) -> &ActorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        &mut self.core
    }

    async fn receive(&mut self, envelope: Envelope) -> anyhow::Result<()> {
        let first = self.log.lock().unwrap().is_empty();
        if first {
            self.entered.store(true, Ordering::Release);
            self.gate.notified().await;
        }
        if let Some(Record(value)) = envelope.downcast_ref::<Record>() {
            self.log.lock().unwrap().push(*value);
        }
        Ok(())
    }
}

/// Records values until told to `Explode`, at which point `receive` returns
/// an error and the actor terminates.
#[derive(Debug, Default)]
pub struct Brittle {
    core: ActorCore,
    pub log: SharedLog,
}

impl Brittle {
    pub fn with_log(log: SharedLog) -> Self {
        Self {
            core: ActorCore::default(),
            log,
        }
    }
}

#[async_trait]
impl Actor for Brittle {
    fn core(&self) -> &ActorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        &mut self.core
    }

    async fn receive(&mut self, envelope: Envelope) -> anyhow::Result<()> {
        if envelope.downcast_ref::<Explode>().is_some() {
            bail!("exploded on purpose");
        }
        if let Some(Record(value)) = envelope.downcast_ref::<Record>() {
            self.log.lock().unwrap().push(*value);
        }
        Ok(())
    }
}

/// Records values until told to `Detonate`, at which point `receive` panics
/// with the requested payload kind.
#[derive(Debug, Default)]
pub struct Panicky {
    core: ActorCore,
    pub log: SharedLog,
}

impl Panicky {
    pub fn with_log(log: SharedLog) -> Self {
        Self {
            core: ActorCore::default(),
            log,
        }
    }
}

#[async_trait]
impl Actor for Panicky {
    fn core(&self) -> &ActorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        &mut self.core
    }

    async fn receive(&mut self, envelope: Envelope) -> anyhow::Result<()> {
        if let Some(Detonate(kind)) = envelope.downcast_ref::<Detonate>() {
            match kind {
                FaultKind::Text => panic!("deliberate panic"),
                FaultKind::Structured => std::panic::panic_any(anyhow!("typed failure")),
            }
        }
        if let Some(Record(value)) = envelope.downcast_ref::<Record>() {
            self.log.lock().unwrap().push(*value);
        }
        Ok(())
    }
}

/// Raises a flag at deactivation, so tests can observe a loop terminating
/// without any stop request.
#[derive(Debug, Default)]
pub struct Sentinel {
    core: ActorCore,
    pub down: Arc<AtomicBool>,
}

impl Sentinel {
    pub fn with_flag(down: Arc<AtomicBool>) -> Self {
        Self {
            core: ActorCore::default(),
            down,
        }
    }
}

#[async_trait]
impl Actor for Sentinel {
    fn core(&self) -> &ActorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        &mut self.core
    }

    fn deactivate(&mut self) {
        self.down.store(true, Ordering::Release);
    }

    async fn receive(&mut self, _envelope: Envelope) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Records each `Record` value alongside the liveness flag observed inside
/// `receive` at that moment.
#[derive(Debug, Default)]
pub struct StatusRecorder {
    core: ActorCore,
    pub log: Arc<Mutex<Vec<(u64, bool)>>>,
}

impl StatusRecorder {
    pub fn with_log(log: Arc<Mutex<Vec<(u64, bool)>>>) -> Self {
        Self {
            core: ActorCore::default(),
            log,
        }
    }
}

#[async_trait]
impl Actor for StatusRecorder {
    fn core(&self) -> &ActorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        &mut self.core
    }

    async fn receive(&mut self, envelope: Envelope) -> anyhow::Result<()> {
        if let Some(Record(value)) = envelope.downcast_ref::<Record>() {
            let alive = self.running();
            self.log.lock().unwrap().push((*value, alive));
        }
        Ok(())
    }
}

/// A supervising actor: starts `Brittle` children or links on request,
/// publishes their handles through `slot`, and collects `ChildExit`
/// notifications.
#[derive(Debug, Default)]
pub struct Parent {
    core: ActorCore,
    /// Where the most recently started child/link handle is published.
    pub slot: Arc<Mutex<Option<ActorHandle>>>,
    /// Supervision notifications observed through the normal receive path.
    pub notices: Arc<Mutex<Vec<ChildExit>>>,
    /// True when the most recent `ChildExit` arrived with its supervision
    /// entry already removed.
    pub pruned: Arc<AtomicBool>,
    pub log: SharedLog,
}

#[async_trait]
impl Actor for Parent {
    fn core(&self) -> &ActorCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ActorCore {
        &mut self.core
    }

    async fn receive(&mut self, envelope: Envelope) -> anyhow::Result<()> {
        if envelope.downcast_ref::<SpawnChild>().is_some() {
            let child = self.start_child(Brittle::default())?;
            *self.slot.lock().unwrap() = Some(child);
        } else if envelope.downcast_ref::<SpawnLink>().is_some() {
            let link = self.start_link(Brittle::default())?;
            *self.slot.lock().unwrap() = Some(link);
        } else if let Some(exit) = envelope.downcast_ref::<ChildExit>() {
            let gone = self.core().find_child(&exit.sender.id()).is_none();
            self.pruned.store(gone, Ordering::Release);
            self.notices.lock().unwrap().push(exit.clone());
        } else if let Some(Record(value)) = envelope.downcast_ref::<Record>() {
            self.log.lock().unwrap().push(*value);
        }
        Ok(())
    }
}
