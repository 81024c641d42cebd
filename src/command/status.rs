// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Diagnostic read commands.

use crate::command::{Command, QueryKey};

/// Command reading one of the lamp's diagnostic strings.
///
/// These all travel under `ctrl` and return a plain-text body that the
/// caller surfaces verbatim (trimmed).
///
/// # Examples
///
/// ```
/// use skylight_lib::command::{Command, DiagnosticCommand};
///
/// assert_eq!(DiagnosticCommand::Description.value(), "g0");
/// assert_eq!(DiagnosticCommand::ScheduleStatus.value(), "g30");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticCommand {
    /// Device description string.
    Description,
    /// LED driver status.
    LedStatus,
    /// Schedule engine status.
    ScheduleStatus,
    /// Raw schedule string.
    ScheduleString,
    /// Extended device info.
    ExtendedInfo,
}

impl Command for DiagnosticCommand {
    fn key(&self) -> QueryKey {
        QueryKey::Ctrl
    }

    fn value(&self) -> String {
        match self {
            Self::Description => "g0",
            Self::LedStatus => "g2",
            Self::ScheduleStatus => "g30",
            Self::ScheduleString => "g31",
            Self::ExtendedInfo => "g8",
        }
        .to_string()
    }
}

/// Command reading the firmware version.
///
/// Newer firmware answers `params=n1`; older firmware only knows
/// `params=n`. The transport tries `Primary` first and falls back to
/// `Fallback` on any failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirmwareCommand {
    /// `params=n1`, understood by current firmware.
    Primary,
    /// `params=n`, the legacy form.
    Fallback,
}

impl Command for FirmwareCommand {
    fn key(&self) -> QueryKey {
        QueryKey::Params
    }

    fn value(&self) -> String {
        match self {
            Self::Primary => "n1",
            Self::Fallback => "n",
        }
        .to_string()
    }
}
