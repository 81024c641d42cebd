// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Skylight command definitions.
//!
//! The lamp accepts commands as a single query parameter on its
//! `/scheduleSettings` endpoint, keyed by either `params` or `ctrl`
//! depending on the operation. Each command here encodes one logical
//! operation into its wire value and the key it must travel under.
//!
//! # Available Commands
//!
//! | Command Type | Purpose | Key |
//! |-------------|---------|-----|
//! | [`ModeCommand`] | Switch operating mode (auto/off/demo) | `params` |
//! | [`ChannelCommand`] | PWM channel levels and frequency | `ctrl` |
//! | [`ScheduleCommand`] | Schedule lifecycle and transfer | `params` |
//! | [`CloneCommand`] | Master/clone topology | `params` |
//! | [`DiagnosticCommand`] | Diagnostic reads | `ctrl` |
//! | [`FirmwareCommand`] | Firmware version reads | `params` |
//! | [`ClockCommand`] | RTC sync and timezone | `ctrl` |
//! | [`NightModeCommand`] | Night mode on/off | `ctrl` |
//! | [`ManualTimeoutCommand`] | Manual-mode timeout | `ctrl` |
//!
//! # Examples
//!
//! ```
//! use skylight_lib::command::{ChannelCommand, Command, ModeCommand, QueryKey};
//! use skylight_lib::types::Channel;
//!
//! let cmd = ModeCommand::Auto;
//! assert_eq!(cmd.key(), QueryKey::Params);
//! assert_eq!(cmd.value(), "a");
//!
//! let cmd = ChannelCommand::Set {
//!     channel: Channel::new(1).unwrap(),
//!     value: 62.5,
//! };
//! assert_eq!(cmd.key(), QueryKey::Ctrl);
//! assert_eq!(cmd.value(), "7162.5");
//! ```

mod clock;
mod clone;
mod light;
mod mode;
mod schedule;
mod status;

pub use clock::ClockCommand;
pub use clone::CloneCommand;
pub use light::ChannelCommand;
pub use mode::{ManualTimeoutCommand, ModeCommand, NightModeCommand};
pub use schedule::ScheduleCommand;
pub use status::{DiagnosticCommand, FirmwareCommand};

/// The query-parameter key a command is sent under.
///
/// The two keys are mutually exclusive; which one applies is fixed per
/// operation by the device firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryKey {
    /// The `params` query key.
    Params,
    /// The `ctrl` query key.
    Ctrl,
}

impl QueryKey {
    /// Returns the literal query-parameter name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Params => "params",
            Self::Ctrl => "ctrl",
        }
    }
}

/// A command that can be sent to a Skylight lamp.
///
/// Encoding is pure and total: any value of a command type maps to exactly
/// one wire string. Range and format validation happens when the command's
/// typed arguments are constructed, never here.
pub trait Command {
    /// Returns the query key this command travels under.
    fn key(&self) -> QueryKey;

    /// Returns the wire value for this command.
    fn value(&self) -> String;

    /// Returns the `(key, value)` pair for the HTTP request.
    fn to_query_pair(&self) -> (QueryKey, String) {
        (self.key(), self.value())
    }
}

/// Renders a float in its shortest round-trippable decimal form.
///
/// The lamp's grammar has no tolerance for trailing zeros: `50` not
/// `50.0`, `12.5` not `12.50`. Rust's `f64` Display already produces the
/// shortest representation that parses back to the same value.
pub(crate) fn format_float(value: f64) -> String {
    value.to_string()
}
