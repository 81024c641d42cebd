// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Clock commands.

use crate::command::{Command, QueryKey};

/// Command adjusting the lamp's real-time clock.
///
/// The timezone value is passed through verbatim; the firmware accepts
/// several formats (offsets, POSIX TZ strings) and validates on its side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockCommand {
    /// Sync the lamp's RTC.
    RtcSync,
    /// Set the lamp's timezone.
    SetTimezone(String),
}

impl Command for ClockCommand {
    fn key(&self) -> QueryKey {
        QueryKey::Ctrl
    }

    fn value(&self) -> String {
        match self {
            Self::RtcSync => "6".to_string(),
            Self::SetTimezone(tz) => format!("b{tz}"),
        }
    }
}
