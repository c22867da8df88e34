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
use anyhow::Context;
use async_trait::async_trait;
use tracing::trace;

use crate::actor::{spawn, ActorCore};
use crate::common::{ActorHandle, ChildRef};
use crate::message::{ChildExit, Envelope};

/// The capability set an actor implementer supplies.
///
/// Concrete actors embed an [`ActorCore`], expose it through `core` /
/// `core_mut`, and implement [`receive`](Actor::receive); everything else is
/// provided. The runtime drives `initialize` at spawn and `deactivate` at
/// termination; between the two, [`running`](Actor::running) is true.
///
/// State behind `&mut self` is private to the actor: the control loop
/// guarantees `receive` runs for one message at a time, in acceptance order.
#[async_trait]
pub trait Actor: Send + 'static {
    /// The embedded base state.
    fn core(&self) -> &ActorCore;

    /// The embedded base state, mutably.
    fn core_mut(&mut self) -> &mut ActorCore;

    /// Processes exactly one message.
    ///
    /// Returning an error requests termination: the actor terminates with
    /// that error and accepted-but-unexecuted messages are abandoned. A panic
    /// inside `receive` is treated the same way.
    async fn receive(&mut self, envelope: Envelope) -> anyhow::Result<()>;

    /// Stores the actor's own handle and marks it alive. Called by the
    /// spawner, once, before the control loop starts.
    fn initialize(&mut self, handle: ActorHandle) {
        self.core_mut().bind(handle);
    }

    /// True strictly between initialization and termination.
    fn running(&self) -> bool {
        self.core().is_running()
    }

    /// Termination hook. Called by the control loop exactly once, after the
    /// last `receive` has finished and before the termination report is
    /// published. The default does nothing.
    fn deactivate(&mut self) {}

    /// Spawns a supervised child.
    ///
    /// When the child terminates — cleanly or not — a [`ChildExit`] carrying
    /// the child's handle and exit reason is sent into this actor's own
    /// mailbox, so child failure is observed as an ordinary message through
    /// the normal `receive` path. A child notification never terminates the
    /// parent. The supervision entry is removed once the child has exited.
    fn start_child<A>(&self, child: A) -> anyhow::Result<ChildRef>
    where
        A: Actor,
        Self: Sized,
    {
        let parent = self
            .core()
            .address()
            .context("start_child requires an initialized actor")?;
        let child_handle = spawn(child);
        self.core().track_child(child_handle.clone());
        let registry = self.core().child_registry();

        let watched = child_handle.clone();
        tokio::spawn(async move {
            let reason = watched.watch().await;
            registry.remove(&watched.id());
            trace!(child = %watched.id(), %reason, "relaying child exit to parent mailbox");
            parent.send(ChildExit::new(watched.clone(), reason)).await;
        });
        Ok(child_handle)
    }

    /// Spawns a linked actor.
    ///
    /// When the link terminates, its exit reason is forwarded directly into
    /// this actor's stop-request path: a failed link terminates this actor
    /// with the same error, a cleanly stopped link stops it cleanly.
    /// Propagation is one-directional; stopping the parent does not stop the
    /// link.
    fn start_link<A>(&self, link: A) -> anyhow::Result<ChildRef>
    where
        A: Actor,
        Self: Sized,
    {
        let parent = self
            .core()
            .address()
            .context("start_link requires an initialized actor")?;
        let link_handle = spawn(link);
        self.core().track_child(link_handle.clone());
        let registry = self.core().child_registry();

        let watched = link_handle.clone();
        tokio::spawn(async move {
            let reason = watched.watch().await;
            registry.remove(&watched.id());
            trace!(link = %watched.id(), %reason, "relaying link exit to parent stop path");
            parent.relay_stop(reason).await;
        });
        Ok(link_handle)
    }
}
