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

use std::any::Any;
use std::mem;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use std::panic::AssertUnwindSafe;
use tokio::sync::{mpsc, oneshot, watch, Mutex};
use tokio::time;
use tokio_util::task::TaskTracker;
use tracing::{debug, instrument, trace};

use crate::common::{
    ActorHandle, ActorId, Baton, ExitSender, FaultReceiver, FaultSender, HaltSignal,
    MailboxReceiver, SignalReceiver, CONFIG,
};
use crate::message::{Envelope, ExitReason};
use crate::traits::Actor;

/// Creates a new actor and returns its handle.
///
/// Wires the mailbox, stop, and termination paths, binds the handle into the
/// actor via [`Actor::initialize`], primes the first baton, and starts the
/// actor's control loop on its own task. The handle and the actor instance
/// live and die together; there is no restart.
///
/// Must be called from within a tokio runtime.
pub fn spawn<A: Actor>(mut actor: A) -> ActorHandle {
    let config = &*CONFIG;
    let (mailbox_tx, mailbox_rx) = mpsc::channel(config.limits.mailbox_capacity.max(1));
    let (signal_tx, signal_rx) = mpsc::channel(config.limits.signal_capacity.max(1));
    let (exit_tx, exit_rx) = watch::channel(None);
    let (fault_tx, fault_rx) = mpsc::channel(1);
    let tracker = TaskTracker::new();

    let id = ActorId::new();
    let handle = ActorHandle::new(id, mailbox_tx, signal_tx, exit_rx, tracker.clone());
    actor.initialize(handle.clone());

    // Prime the chain so the first accepted message runs immediately.
    let (first_baton, primed) = oneshot::channel();
    let _ = first_baton.send(());

    let control = ControlLoop {
        id,
        actor: Arc::new(Mutex::new(actor)),
        mailbox: mailbox_rx,
        signal: signal_rx,
        faults: fault_tx,
        fault_reports: fault_rx,
        exit: exit_tx,
        halt: Arc::new(HaltSignal::new(false)),
        tracker,
        baton: primed,
        idle_window: config.idle_warning(),
    };
    tokio::spawn(control.run());

    handle
}

/// The per-actor execution context.
///
/// Exactly one control loop ever reads a given handle's mailbox. The loop
/// accepts messages without waiting for earlier ones to finish executing,
/// while the baton chain keeps `receive` execution strictly in acceptance
/// order.
pub(crate) struct ControlLoop<A: Actor> {
    id: ActorId,
    actor: Arc<Mutex<A>>,
    mailbox: MailboxReceiver,
    signal: SignalReceiver,
    /// Sender side of the fault path, cloned into each worker. The loop keeps
    /// one clone so the channel never closes while it is selecting.
    faults: FaultSender,
    fault_reports: FaultReceiver,
    exit: ExitSender,
    halt: Arc<HaltSignal>,
    tracker: TaskTracker,
    /// Tail of the baton chain: redeemed by the next accepted message's worker.
    baton: Baton,
    idle_window: Duration,
}

impl<A: Actor> ControlLoop<A> {
    #[instrument(skip(self), fields(actor = %self.id))]
    pub(crate) async fn run(mut self) {
        let reason = loop {
            tokio::select! {
                request = self.signal.recv() => {
                    match request {
                        Some(request) => {
                            trace!(actor = %self.id, "stop requested");
                            break request.reason;
                        }
                        // Every handle dropped with no stop pending.
                        None => break ExitReason::Normal,
                    }
                }
                Some(fault) = self.fault_reports.recv() => {
                    trace!(actor = %self.id, %fault, "receive failed");
                    break ExitReason::from_error(fault);
                }
                accepted = self.mailbox.recv() => {
                    match accepted {
                        Some(envelope) => self.dispatch(envelope),
                        None => {
                            trace!(actor = %self.id, "all handles dropped, terminating");
                            break ExitReason::Normal;
                        }
                    }
                }
                _ = time::sleep(self.idle_window) => {
                    debug!(actor = %self.id, "no events in {:?}", self.idle_window);
                }
            }
        };
        self.shutdown(reason).await;
    }

    /// Accepts one envelope: immediately hands it to a fresh worker and
    /// returns to event selection. The worker redeems its predecessor's baton
    /// before invoking `receive` and passes the next baton on success, so
    /// acceptance stays concurrent while execution stays serialized.
    #[instrument(skip(self, envelope), fields(actor = %self.id))]
    fn dispatch(&mut self, envelope: Envelope) {
        let (next_baton, successor) = oneshot::channel();
        let baton = mem::replace(&mut self.baton, successor);
        let actor = Arc::clone(&self.actor);
        let faults = self.faults.clone();
        let halt = Arc::clone(&self.halt);
        let id = self.id;

        self.tracker.spawn(async move {
            // A dropped predecessor baton means the chain is broken: the
            // prior message failed or the loop is gone. Abandon, and let the
            // drop of `next_baton` cascade.
            if baton.await.is_err() {
                trace!(actor = %id, "baton chain broken, message abandoned");
                return;
            }
            let outcome = {
                let mut actor = actor.lock().await;
                // Checked under the lock: shutdown raises halt before taking
                // it, so a worker that wins the lock afterwards must abandon
                // rather than run `receive` against a deactivated actor.
                if halt.load(Ordering::Acquire) {
                    trace!(actor = %id, "actor terminating, message abandoned");
                    return;
                }
                AssertUnwindSafe(actor.receive(envelope)).catch_unwind().await
            };

            match outcome {
                Ok(Ok(())) => {
                    let _ = next_baton.send(());
                }
                Ok(Err(error)) => {
                    let _ = faults.send(error).await;
                }
                Err(payload) => {
                    let _ = faults.send(recover_fault(payload)).await;
                }
            }
        });
    }

    /// Runs exactly once. Marks the actor no longer alive, delivers the
    /// termination report, and lets accepted-but-unexecuted messages lapse.
    #[instrument(skip(self, reason), fields(actor = %self.id))]
    async fn shutdown(self, reason: ExitReason) {
        self.halt.store(true, Ordering::Release);
        self.tracker.close();
        {
            // Waits out a currently executing receive; the running flag is
            // only ever mutated by this loop.
            let mut actor = self.actor.lock().await;
            actor.deactivate();
            actor.core_mut().clear();
        }
        trace!(actor = %self.id, %reason, "terminated");
        self.exit.send_replace(Some(reason));
    }
}

/// Coerces a recovered panic payload into an error, preserving structure
/// where the payload already is an error value and stringifying only
/// genuinely untyped payloads.
fn recover_fault(payload: Box<dyn Any + Send>) -> anyhow::Error {
    match payload.downcast::<anyhow::Error>() {
        Ok(error) => *error,
        Err(payload) => match payload.downcast::<String>() {
            Ok(text) => anyhow::Error::msg(*text),
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(text) => anyhow::Error::msg(*text),
                Err(_) => anyhow::Error::msg("receive panicked with a non-error payload"),
            },
        },
    }
}
