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
use crate::message::ExitReason;

/// Request to terminate an actor, delivered on its stop-request input.
///
/// Carries the reason the actor will terminate with: [`ExitReason::Normal`]
/// for an external [`stop`](crate::common::ActorHandle::stop), or a linked
/// actor's own exit reason when relayed by
/// [`start_link`](crate::traits::Actor::start_link).
#[derive(Debug, Clone, Default)]
pub(crate) struct StopRequest {
    pub(crate) reason: ExitReason,
}

impl StopRequest {
    /// A graceful stop; the actor terminates cleanly.
    pub(crate) fn graceful() -> Self {
        Self::default()
    }

    /// A stop carrying a relayed exit reason.
    pub(crate) fn carrying(reason: ExitReason) -> Self {
        Self { reason }
    }
}
