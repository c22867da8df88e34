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
use std::time::SystemTime;

use static_assertions::assert_impl_all;

use crate::traits::SequentMessage;

/// An envelope carrying one opaque message payload into an actor's mailbox.
///
/// The payload has no identity beyond itself; the timestamp records when the
/// envelope was handed to `send`.
#[derive(Debug, Clone)]
pub struct Envelope {
    /// The payload contained in the envelope.
    pub message: Arc<dyn SequentMessage + Send + Sync + 'static>,
    /// The time when the payload was handed to `send`.
    pub timestamp: SystemTime,
}

impl Envelope {
    /// Wraps a payload for delivery.
    pub fn new(message: Arc<dyn SequentMessage + Send + Sync + 'static>) -> Self {
        Envelope {
            message,
            timestamp: SystemTime::now(),
        }
    }

    /// Borrows the payload as a concrete type, if it is one.
    pub fn downcast_ref<M: SequentMessage>(&self) -> Option<&M> {
        self.message.as_ref().as_any().downcast_ref::<M>()
    }
}

// Ensures that Envelope implements the Send trait.
assert_impl_all!(Envelope: Send);
