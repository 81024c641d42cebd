// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Schedule lifecycle commands.
//!
//! Schedules are uploaded in chunks. The lamp supports two transfer
//! protocols: the legacy one (`7_`/`g_`) used by older firmware, and the
//! "safe" one (`p_`/`s_`) that acknowledges each chunk. Either transfer is
//! opened with an item count and fed payload chunks afterwards.

use crate::command::{Command, QueryKey};

/// Command controlling the lamp's stored schedule.
///
/// # Examples
///
/// ```
/// use skylight_lib::command::{Command, ScheduleCommand};
///
/// assert_eq!(ScheduleCommand::Clear.value(), "4");
/// assert_eq!(ScheduleCommand::StartSafeTransfer(12).value(), "p_12");
/// assert_eq!(
///     ScheduleCommand::SafeChunk("0600FF".to_string()).value(),
///     "s_0600FF"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScheduleCommand {
    /// Erase the stored schedule.
    Clear,
    /// Persist the working schedule to flash.
    Save,
    /// Open a legacy transfer of `n` schedule items.
    StartLegacyTransfer(u32),
    /// Send one legacy payload chunk.
    LegacyChunk(String),
    /// Open a safe transfer of `n` schedule items.
    StartSafeTransfer(u32),
    /// Send one safe payload chunk.
    SafeChunk(String),
    /// Start following a freshly uploaded schedule.
    StartNew,
}

impl Command for ScheduleCommand {
    fn key(&self) -> QueryKey {
        QueryKey::Params
    }

    fn value(&self) -> String {
        match self {
            Self::Clear => "4".to_string(),
            Self::Save => "6".to_string(),
            Self::StartLegacyTransfer(n) => format!("7_{n}"),
            Self::LegacyChunk(payload) => format!("g_{payload}"),
            Self::StartSafeTransfer(n) => format!("p_{n}"),
            Self::SafeChunk(payload) => format!("s_{payload}"),
            Self::StartNew => "r".to_string(),
        }
    }
}
