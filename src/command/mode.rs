// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Operating-mode commands.

use crate::command::{Command, QueryKey};

/// Command to switch the lamp's operating mode.
///
/// `Off` doubles as "disable manual mode": the firmware uses the same wire
/// command (`params=9`) for both, so applying a preset starts with an
/// [`ModeCommand::Off`] round-trip.
///
/// # Examples
///
/// ```
/// use skylight_lib::command::{Command, ModeCommand, QueryKey};
///
/// assert_eq!(ModeCommand::Auto.value(), "a");
/// assert_eq!(ModeCommand::Off.value(), "9");
/// assert_eq!(ModeCommand::Demo.value(), "c");
/// assert_eq!(ModeCommand::Auto.key(), QueryKey::Params);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeCommand {
    /// Follow the stored schedule.
    Auto,
    /// Turn the lamp off / leave manual mode.
    Off,
    /// Run the built-in demo cycle.
    Demo,
}

impl Command for ModeCommand {
    fn key(&self) -> QueryKey {
        QueryKey::Params
    }

    fn value(&self) -> String {
        match self {
            Self::Auto => "a",
            Self::Off => "9",
            Self::Demo => "c",
        }
        .to_string()
    }
}

/// Command to enable or disable night mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NightModeCommand(pub bool);

impl Command for NightModeCommand {
    fn key(&self) -> QueryKey {
        QueryKey::Ctrl
    }

    fn value(&self) -> String {
        if self.0 { "gt01" } else { "gt00" }.to_string()
    }
}

/// Command to set how long the lamp stays in manual mode before reverting
/// to its schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualTimeoutCommand {
    /// Revert after one hour.
    OneHour,
    /// Revert after the firmware default timeout.
    Default,
}

impl Command for ManualTimeoutCommand {
    fn key(&self) -> QueryKey {
        QueryKey::Ctrl
    }

    fn value(&self) -> String {
        match self {
            Self::OneHour => "gu1",
            Self::Default => "gu3",
        }
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_wire_values() {
        assert_eq!(ModeCommand::Auto.value(), "a");
        assert_eq!(ModeCommand::Off.value(), "9");
        assert_eq!(ModeCommand::Demo.value(), "c");
    }

    #[test]
    fn mode_uses_params_key() {
        assert_eq!(ModeCommand::Off.key(), QueryKey::Params);
    }

    #[test]
    fn night_mode_values() {
        assert_eq!(NightModeCommand(true).value(), "gt01");
        assert_eq!(NightModeCommand(false).value(), "gt00");
        assert_eq!(NightModeCommand(true).key(), QueryKey::Ctrl);
    }

    #[test]
    fn manual_timeout_values() {
        assert_eq!(ManualTimeoutCommand::OneHour.value(), "gu1");
        assert_eq!(ManualTimeoutCommand::Default.value(), "gu3");
        assert_eq!(ManualTimeoutCommand::OneHour.key(), QueryKey::Ctrl);
    }
}
