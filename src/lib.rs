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

#![forbid(unsafe_code)]
//! Sequent Runtime Library
//!
//! A minimal actor runtime: isolated units of state addressed only by their
//! handles, communicating through asynchronous messages. Each actor processes
//! its messages one at a time and in acceptance order, even though every
//! accepted message is dispatched onto its own concurrent worker task.
//!
//! Failures inside one actor never corrupt another; they surface through the
//! actor's termination report and, optionally, through one level of
//! supervision (child notification or link propagation).

/// Common utilities and structures used throughout the Sequent runtime.
pub(crate) mod common;

pub(crate) mod actor;
pub(crate) mod message;
/// Trait definitions used in the Sequent runtime.
pub(crate) mod traits;

/// Prelude module for convenient imports.
///
/// Re-exports everything an embedding program needs: the [`Actor`] trait and
/// its [`ActorCore`] base state, [`spawn`], the [`ActorHandle`] address type,
/// and the message/termination vocabulary.
pub mod prelude {
    pub use async_trait;

    pub use crate::actor::{spawn, ActorCore};
    pub use crate::common::{
        ActorHandle, ActorId, ChildRef, LimitsConfig, ParentRef, RuntimeConfig, TimeoutConfig,
        CONFIG,
    };
    pub use crate::message::{ChildExit, Envelope, ExitReason};
    pub use crate::traits::{Actor, SequentMessage};
}
