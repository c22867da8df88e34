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

//! Message payloads shared by the integration tests.

/// Append a value to the receiving actor's log.
#[derive(Debug, Clone, PartialEq)]
pub struct Record(pub u64);

/// Ask a `Brittle` actor to return an error from `receive`.
#[derive(Debug, Clone)]
pub struct Explode;

/// Ask a `Panicky` actor to panic inside `receive`.
#[derive(Debug, Clone)]
pub struct Detonate(pub FaultKind);

/// What a `Panicky` actor should panic with.
#[derive(Debug, Clone)]
pub enum FaultKind {
    /// `panic!` with a plain string payload.
    Text,
    /// `panic_any` with an `anyhow::Error` payload.
    Structured,
}

/// Ask a `Parent` actor to start a supervised child.
#[derive(Debug, Clone)]
pub struct SpawnChild;

/// Ask a `Parent` actor to start a linked actor.
#[derive(Debug, Clone)]
pub struct SpawnLink;
