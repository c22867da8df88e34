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

use std::sync::Arc;

use dashmap::DashMap;

use crate::common::{ActorHandle, ActorId, ChildRef, SelfRef};

/// The base state every actor embeds: its own address, a running flag, and
/// the handles of actors it supervises.
///
/// The address is bound once at spawn and kept in non-owning form, so an
/// actor does not hold its own mailbox open. The running flag is mutated only
/// by the owning control loop: it is true strictly between initialization and
/// termination.
#[derive(Debug, Default)]
pub struct ActorCore {
    address: Option<SelfRef>,
    running: bool,
    children: Arc<DashMap<ActorId, ChildRef>>,
}

impl ActorCore {
    /// Stores a downgraded copy of the actor's own handle and marks it
    /// running. Called by the spawner before the control loop starts.
    pub(crate) fn bind(&mut self, handle: ActorHandle) {
        self.address = Some(handle.downgrade());
        self.running = true;
    }

    /// Clears the running flag. Called by the control loop exactly once, at
    /// termination.
    pub(crate) fn clear(&mut self) {
        self.running = false;
    }

    /// The actor's own handle, once bound. `None` before initialization and
    /// again once the actor has begun terminating.
    pub fn handle(&self) -> Option<ActorHandle> {
        self.address.as_ref().and_then(SelfRef::upgrade)
    }

    pub(crate) fn address(&self) -> Option<SelfRef> {
        self.address.clone()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Handles of the actors this one has started via `start_child` or
    /// `start_link`, keyed by their id.
    pub fn children(&self) -> &DashMap<ActorId, ChildRef> {
        &self.children
    }

    /// Finds a supervised actor by its id.
    pub fn find_child(&self, id: &ActorId) -> Option<ChildRef> {
        self.children.get(id).map(|item| item.value().clone())
    }

    pub(crate) fn track_child(&self, child: ChildRef) {
        self.children.insert(child.id(), child);
    }

    /// A shareable view of the supervision map, handed to the exit relays so
    /// a terminated child's entry is removed rather than accumulating.
    pub(crate) fn child_registry(&self) -> Arc<DashMap<ActorId, ChildRef>> {
        Arc::clone(&self.children)
    }
}
