// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! LED PWM channel commands.
//!
//! All channel commands travel under the `ctrl` key. Numeric values are
//! rendered in shortest decimal form; the single-letter separators in the
//! all-channel command (`h`, `i`, `j`, `k`, `l`, `m`) are fixed by the
//! firmware grammar.

use crate::command::{Command, QueryKey, format_float};
use crate::error::ValueError;
use crate::types::{Channel, PwmFrequency};

/// Command to drive the lamp's PWM channels.
///
/// # Examples
///
/// ```
/// use skylight_lib::command::{ChannelCommand, Command};
/// use skylight_lib::types::Channel;
///
/// let cmd = ChannelCommand::Set {
///     channel: Channel::new(0).unwrap(),
///     value: 50.0,
/// };
/// assert_eq!(cmd.value(), "7050");
///
/// let cmd = ChannelCommand::SetAll {
///     channels: [10.0, 20.5, 30.0, 40.0],
///     color_code: 2,
///     intensity: 80.0,
/// };
/// assert_eq!(cmd.value(), "7410h20.5i30j40k2l80m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChannelCommand {
    /// Set one channel's level in percent.
    Set {
        /// Channel to set.
        channel: Channel,
        /// Level in percent.
        value: f64,
    },
    /// Set all four channels together with a color code and a global
    /// intensity.
    SetAll {
        /// Levels for channels 0-3 in percent.
        channels: [f64; 4],
        /// Firmware color code.
        color_code: i32,
        /// Global intensity in percent.
        intensity: f64,
    },
    /// Set the PWM base frequency.
    SetFrequency(PwmFrequency),
    /// Read back the PWM base frequency.
    GetFrequency,
    /// Re-initialize the PWM driver.
    Init,
}

impl ChannelCommand {
    /// Creates a frequency-set command.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidFrequency` if `hz` is zero.
    pub fn set_frequency(hz: u32) -> Result<Self, ValueError> {
        Ok(Self::SetFrequency(PwmFrequency::new(hz)?))
    }
}

impl Command for ChannelCommand {
    fn key(&self) -> QueryKey {
        QueryKey::Ctrl
    }

    fn value(&self) -> String {
        match self {
            Self::Set { channel, value } => {
                format!("7{}{}", channel.value(), format_float(*value))
            }
            Self::SetAll {
                channels,
                color_code,
                intensity,
            } => format!(
                "74{}h{}i{}j{}k{}l{}m",
                format_float(channels[0]),
                format_float(channels[1]),
                format_float(channels[2]),
                format_float(channels[3]),
                color_code,
                format_float(*intensity),
            ),
            Self::SetFrequency(hz) => format!("75{hz}"),
            Self::GetFrequency => "76".to_string(),
            Self::Init => "78".to_string(),
        }
    }
}
