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

//! Defines the core traits that establish the fundamental contracts of the runtime.
//!
//! # Key Traits
//!
//! *   [`SequentMessage`]: A marker trait required for all types used as message
//!     payloads. Ensures payloads are `Send`, `Sync`, `Debug`, cloneable, and
//!     support downcasting via `Any`.
//! *   [`Actor`]: The capability set an actor implementer supplies: process one
//!     message at a time (`receive`), plus provided lifecycle and supervision
//!     methods backed by the embedded [`ActorCore`](crate::actor::ActorCore).

// --- Public Re-exports ---
pub use actor::Actor;
pub use sequent_message::SequentMessage;

// --- Submodules ---

/// Defines the [`Actor`] capability trait.
mod actor;
/// Defines the [`SequentMessage`] marker trait.
mod sequent_message;
