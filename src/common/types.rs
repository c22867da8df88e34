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

//! Defines common internal type aliases and supporting structures.
//!
//! This module centralizes type definitions for the channels that make up an
//! actor's address and control loop, the baton chain, and actor identity, to
//! improve readability and keep channel payload types in one place.

use std::fmt;
use std::sync::atomic::AtomicBool;

use tokio::sync::{mpsc, oneshot, watch};
use uuid::Uuid;

use crate::common::ActorHandle;
use crate::message::{Envelope, ExitReason, StopRequest};

/// Crate-internal: sender half of an actor's mailbox.
pub(crate) type MailboxSender = mpsc::Sender<Envelope>;

/// Crate-internal: receiver half of an actor's mailbox, owned by its control loop.
pub(crate) type MailboxReceiver = mpsc::Receiver<Envelope>;

/// Crate-internal: sender half of an actor's stop-request input.
pub(crate) type SignalSender = mpsc::Sender<StopRequest>;

/// Crate-internal: receiver half of an actor's stop-request input.
pub(crate) type SignalReceiver = mpsc::Receiver<StopRequest>;

/// Crate-internal: non-owning mailbox sender, held by the actor itself so it
/// does not keep its own mailbox open.
pub(crate) type WeakMailboxSender = mpsc::WeakSender<Envelope>;

/// Crate-internal: non-owning stop-request sender, held by the actor itself.
pub(crate) type WeakSignalSender = mpsc::WeakSender<StopRequest>;

/// Crate-internal: path on which workers report `receive` failures back to the loop.
pub(crate) type FaultSender = mpsc::Sender<anyhow::Error>;

/// Crate-internal: receiver half of the fault path.
pub(crate) type FaultReceiver = mpsc::Receiver<anyhow::Error>;

/// Crate-internal: producer side of the stored termination report.
pub(crate) type ExitSender = watch::Sender<Option<ExitReason>>;

/// Crate-internal: consumer side of the stored termination report. Cloneable,
/// so any number of watchers resolve with the same reason.
pub(crate) type ExitReceiver = watch::Receiver<Option<ExitReason>>;

/// Crate-internal: a baton awaited by worker *k* and produced by worker *k-1*,
/// forcing sequential `receive` execution across concurrently dispatched workers.
pub(crate) type Baton = oneshot::Receiver<()>;

/// Crate-internal: atomic flag raised once the loop begins terminating, so
/// workers holding an unredeemed baton abandon their message.
pub(crate) type HaltSignal = AtomicBool;

// --- Public Type Aliases ---

/// A type alias for an [`ActorHandle`] referring to a supervising actor.
pub type ParentRef = ActorHandle;

/// A type alias for an [`ActorHandle`] referring to a supervised child or link.
pub type ChildRef = ActorHandle;

/// Unique identity of an actor, assigned once at spawn.
///
/// Identity never migrates: a handle compares equal only to clones of itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActorId(Uuid);

impl ActorId {
    pub(crate) fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
