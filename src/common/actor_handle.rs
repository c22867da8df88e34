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
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use tokio_util::task::TaskTracker;
use tracing::{instrument, trace, warn};

use crate::common::types::{
    ActorId, ExitReceiver, MailboxSender, SignalSender, WeakMailboxSender, WeakSignalSender,
};
use crate::message::{Envelope, ExitReason, StopRequest};
use crate::traits::SequentMessage;

/// The externally visible address of an actor.
///
/// A handle is created once at spawn and is owned by exactly one control
/// loop for its whole lifetime; clones address the same actor. It carries
/// three one-directional paths: the mailbox input, the stop-request input,
/// and the stored termination report.
#[derive(Debug, Clone)]
pub struct ActorHandle {
    /// The unique identifier for the actor behind this handle.
    pub(crate) id: ActorId,
    /// The mailbox input read solely by the owning control loop.
    pub(crate) mailbox: MailboxSender,
    /// The stop-request input, shared by `stop` and link relays.
    pub(crate) signal: SignalSender,
    /// The stored termination report; resolves for any number of watchers.
    pub(crate) exit: ExitReceiver,
    /// Tracks the control loop's message workers.
    tracker: TaskTracker,
}

impl PartialEq for ActorHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ActorHandle {}

impl Hash for ActorHandle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl ActorHandle {
    pub(crate) fn new(
        id: ActorId,
        mailbox: MailboxSender,
        signal: SignalSender,
        exit: ExitReceiver,
        tracker: TaskTracker,
    ) -> Self {
        Self {
            id,
            mailbox,
            signal,
            exit,
            tracker,
        }
    }

    /// The actor's unique identity.
    pub fn id(&self) -> ActorId {
        self.id
    }

    /// Delivers a payload asynchronously to the owning control loop.
    ///
    /// The call suspends until the mailbox accepts the envelope, so delivery
    /// order at this handle is the order in which `send` calls complete. A
    /// message sent to a terminated actor is dropped with a warning; callers
    /// must not rely on sends against a known-dead handle.
    #[instrument(skip(self, payload), fields(actor = %self.id))]
    pub async fn send(&self, payload: impl SequentMessage) {
        let envelope = Envelope::new(Arc::new(payload));
        if self.mailbox.send(envelope).await.is_err() {
            warn!(actor = %self.id, "message to terminated actor was dropped");
        }
    }

    /// Requests termination and completes once the stop handshake finishes.
    ///
    /// Does not preempt a message currently executing; messages accepted but
    /// not yet begun are abandoned. Stopping an already-terminated actor
    /// completes immediately.
    #[instrument(skip(self), fields(actor = %self.id))]
    pub async fn stop(&self) {
        trace!(actor = %self.id, "requesting stop");
        let _ = self.signal.send(StopRequest::graceful()).await;
        self.watch().await;
        // Let the chained workers settle before reporting completion.
        self.tracker.wait().await;
        trace!(actor = %self.id, "stop handshake finished");
    }

    /// Resolves to the actor's termination outcome.
    ///
    /// The report is stored state: every watcher resolves with the same
    /// [`ExitReason`], whether it began waiting before or after termination.
    pub async fn watch(&self) -> ExitReason {
        let mut exit = self.exit.clone();
        let observed = exit.wait_for(|report| report.is_some()).await;
        match observed {
            Ok(report) => report.clone().unwrap_or_default(),
            // The loop dropped its sender without reporting; surface that
            // rather than hanging a watcher forever.
            Err(_) => ExitReason::from_error(anyhow::anyhow!(
                "control loop for actor {} exited without a termination report",
                self.id
            )),
        }
    }

    /// True once the actor has terminated.
    pub fn is_terminated(&self) -> bool {
        self.exit.borrow().is_some()
    }

    /// A non-owning form of this handle, for the actor's own use.
    pub(crate) fn downgrade(&self) -> SelfRef {
        SelfRef {
            id: self.id,
            mailbox: self.mailbox.downgrade(),
            signal: self.signal.downgrade(),
            exit: self.exit.clone(),
            tracker: self.tracker.clone(),
        }
    }
}

/// The address an actor holds to itself.
///
/// Channel inputs are kept downgraded: an actor storing its own address must
/// not hold its own mailbox open, otherwise the control loop could never
/// observe that every external [`ActorHandle`] is gone and would leak.
/// Deliveries through a `SelfRef` are best-effort; once the actor has begun
/// terminating they are dropped.
#[derive(Debug, Clone)]
pub(crate) struct SelfRef {
    id: ActorId,
    mailbox: WeakMailboxSender,
    signal: WeakSignalSender,
    exit: ExitReceiver,
    tracker: TaskTracker,
}

impl SelfRef {
    /// Rebuilds a full handle, or `None` once the mailbox has closed.
    pub(crate) fn upgrade(&self) -> Option<ActorHandle> {
        let mailbox = self.mailbox.upgrade()?;
        let signal = self.signal.upgrade()?;
        Some(ActorHandle::new(
            self.id,
            mailbox,
            signal,
            self.exit.clone(),
            self.tracker.clone(),
        ))
    }

    /// Delivers a payload into the actor's own mailbox.
    pub(crate) async fn send(&self, payload: impl SequentMessage) {
        let Some(mailbox) = self.mailbox.upgrade() else {
            trace!(actor = %self.id, "self-addressed message after termination was dropped");
            return;
        };
        let envelope = Envelope::new(Arc::new(payload));
        if mailbox.send(envelope).await.is_err() {
            trace!(actor = %self.id, "self-addressed message raced termination and was dropped");
        }
    }

    /// Forwards a relayed exit reason into the actor's stop-request path.
    pub(crate) async fn relay_stop(&self, reason: ExitReason) {
        let Some(signal) = self.signal.upgrade() else {
            return;
        };
        let _ = signal.send(StopRequest::carrying(reason)).await;
    }
}
