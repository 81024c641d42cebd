// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Skylight Lib - A Rust library to control Skylight lamps.
//!
//! Skylight lamps expose an undocumented command protocol over plain
//! HTTP: one query parameter per request (`params` or `ctrl`) on
//! `/scheduleSettings`, and a tab-delimited status telegram on
//! `/statusPage`. This library provides the command encoding, the
//! tolerant telegram decoder, and a stateful per-lamp controller on top.
//!
//! # Supported Features
//!
//! - **Mode control**: auto (schedule), off, demo, and manual via presets
//! - **Channel control**: single and all-channel PWM levels, PWM frequency
//! - **Presets**: named command templates parameterized by output power
//! - **Schedule transfer**: legacy and safe chunked uploads
//! - **Topology**: master/clone registration by hardware address
//! - **Diagnostics**: firmware version, status telegram, raw reads
//!
//! # Quick Start
//!
//! ```no_run
//! use skylight_lib::Controller;
//!
//! #[tokio::main]
//! async fn main() -> skylight_lib::Result<()> {
//!     let controller = Controller::new("192.168.1.42")?;
//!
//!     // Apply a preset at 75% output power
//!     controller.set_power(75);
//!     controller.apply_preset(Some("A2")).await?;
//!
//!     // Back to the stored schedule
//!     controller.set_auto_mode().await?;
//!
//!     // Fetch diagnostics (rate-limited to one round-trip per second)
//!     controller.refresh_diagnostics().await?;
//!     if let Some(status) = controller.state().status {
//!         println!("channel 0 at {:?}%", status.pwm0);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! # Lower-level access
//!
//! The [`command`] encoders and the [`protocol::HttpClient`] are public
//! for callers that want to speak the wire protocol directly:
//!
//! ```no_run
//! use skylight_lib::command::ModeCommand;
//! use skylight_lib::protocol::HttpClient;
//!
//! # async fn example() -> Result<(), skylight_lib::error::ProtocolError> {
//! let client = HttpClient::new("192.168.1.42")?;
//! client.send_command(&ModeCommand::Demo).await?;
//! # Ok(())
//! # }
//! ```

pub mod command;
pub mod controller;
pub mod error;
pub mod presets;
pub mod protocol;
pub mod telemetry;
pub mod types;

pub use command::{
    ChannelCommand, ClockCommand, CloneCommand, Command, DiagnosticCommand, FirmwareCommand,
    ManualTimeoutCommand, ModeCommand, NightModeCommand, QueryKey, ScheduleCommand,
};
pub use controller::{Controller, ControllerState};
pub use error::{Error, ProtocolError, Result, ValueError};
pub use protocol::{HttpClient, HttpConfig};
pub use telemetry::{DeviceStatus, parse_status_page};
pub use types::{Channel, LampMode, MacAddress, PowerLevel, PwmFrequency};
