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

//! Defines the components that create and run actors.
//!
//! # Key Components
//!
//! *   [`spawn`]: Allocates an actor's handle, wires its channels, and starts
//!     its control loop. The sole way an actor comes into existence.
//! *   [`ActorCore`]: The base state every actor embeds — its own handle, the
//!     alive flag, and supervised children.
//! *   `ControlLoop` (crate-internal): the per-actor execution context that
//!     accepts messages concurrently while serializing `receive` execution
//!     through the baton chain.

pub use actor_core::ActorCore;
pub use control_loop::spawn;

/// Contains the `ActorCore` base state.
mod actor_core;
/// Contains `spawn` and the control loop.
mod control_loop;
