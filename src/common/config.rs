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

use std::time::Duration;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

/// Configuration for the Sequent runtime.
///
/// Loaded from a TOML file in XDG-compliant directories, with defaults for
/// every value so a missing or partial file is never an error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RuntimeConfig {
    /// Timeout configuration
    pub timeouts: TimeoutConfig,
    /// Limits and capacity configuration
    pub limits: LimitsConfig,
}

/// Timeout-related configuration values
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Idle window after which a control loop emits a diagnostic, in milliseconds.
    /// Purely informational; no timeout-driven termination occurs.
    pub idle_warning_ms: u64,
}

/// Limits and capacity configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Mailbox channel capacity. The default of 1 keeps `send` a near-rendezvous:
    /// a caller suspends until the control loop has drained the slot.
    pub mailbox_capacity: usize,
    /// Stop-request channel capacity.
    pub signal_capacity: usize,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            idle_warning_ms: 5_000,
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            mailbox_capacity: 1,
            signal_capacity: 1,
        }
    }
}

impl RuntimeConfig {
    /// Convert the idle warning window to a Duration.
    pub const fn idle_warning(&self) -> Duration {
        Duration::from_millis(self.timeouts.idle_warning_ms)
    }

    /// Load configuration from XDG-compliant locations.
    ///
    /// Looks for `sequent/config.toml` under the XDG config directories. If no
    /// configuration file is found, returns the default configuration. If a
    /// configuration file exists but is malformed, logs an error and uses
    /// defaults.
    pub fn load() -> Self {
        use tracing::{error, info};

        let xdg_dirs = match xdg::BaseDirectories::with_prefix("sequent") {
            Ok(dirs) => dirs,
            Err(e) => {
                error!("Failed to initialize XDG directories: {}", e);
                return Self::default();
            }
        };

        let config_path = xdg_dirs.find_config_file("config.toml");

        if let Some(path) = config_path {
            info!("Loading configuration from: {}", path.display());
            match std::fs::read_to_string(&path) {
                Ok(config_str) => match toml::from_str::<Self>(&config_str) {
                    Ok(config) => config,
                    Err(e) => {
                        error!("Failed to parse configuration file {}: {}", path.display(), e);
                        Self::default()
                    }
                },
                Err(e) => {
                    error!("Failed to read configuration file {}: {}", path.display(), e);
                    Self::default()
                }
            }
        } else {
            Self::default()
        }
    }
}

lazy_static! {
    /// Global configuration instance loaded from XDG-compliant locations.
    pub static ref CONFIG: RuntimeConfig = RuntimeConfig::load();
}
