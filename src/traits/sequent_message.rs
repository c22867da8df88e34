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
use std::fmt::Debug;

use dyn_clone::DynClone;
use static_assertions::assert_obj_safe;

/// Marker for anything an actor can be sent.
///
/// The blanket impl below makes every `Clone + Debug + Send + Sync + 'static`
/// type a message; nothing implements this by hand. The two accessors let a
/// type-erased payload inside an [`Envelope`](crate::message::Envelope) be
/// viewed as its concrete type again.
///
/// Payloads travel behind an `Arc` and are immutable by convention once
/// handed to [`ActorHandle::send`](crate::common::ActorHandle::send); the
/// runtime does not enforce that, so interior mutability in a payload is the
/// sender's own responsibility.
pub trait SequentMessage: DynClone + Any + Send + Sync + Debug {
    /// The payload as `Any`, for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// The payload as mutable `Any`.
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

assert_obj_safe!(SequentMessage);

impl<T> SequentMessage for T
where
    T: Any + DynClone + Debug + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
