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
use std::fmt;
use std::sync::Arc;

use derive_new::new;

use crate::common::ChildRef;

/// The outcome an actor terminated with, as reported through
/// [`ActorHandle::watch`](crate::common::ActorHandle::watch).
///
/// The error variant holds its failure behind an `Arc` so the same reason can
/// be handed to every watcher and relayed through supervision unchanged.
#[derive(Debug, Clone, Default)]
pub enum ExitReason {
    /// Clean shutdown: an external stop request, or every handle dropped.
    #[default]
    Normal,
    /// The actor's `receive` returned an error or panicked.
    Error(Arc<anyhow::Error>),
}

impl ExitReason {
    /// Wraps a failure into an exit reason.
    pub fn from_error(error: anyhow::Error) -> Self {
        Self::Error(Arc::new(error))
    }

    /// True for a clean shutdown.
    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }

    /// The failure this actor terminated with, if any.
    pub fn error(&self) -> Option<&anyhow::Error> {
        match self {
            Self::Normal => None,
            Self::Error(error) => Some(error),
        }
    }
}

impl fmt::Display for ExitReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Error(error) => write!(f, "error: {error}"),
        }
    }
}

/// Supervision notification delivered into a parent's mailbox when a child
/// started with [`Actor::start_child`](crate::traits::Actor::start_child)
/// terminates.
///
/// The parent observes it as an ordinary message through its `receive` path;
/// a notification alone never terminates the parent.
#[derive(new, Debug, Clone)]
pub struct ChildExit {
    /// Handle of the terminated child.
    pub sender: ChildRef,
    /// How the child terminated. [`ExitReason::Normal`] for a clean stop.
    pub reason: ExitReason,
}
