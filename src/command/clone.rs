// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Master/clone topology commands.
//!
//! A clone lamp mirrors a master's output. Clones are addressed by their
//! hardware address; [`MacAddress`] guarantees the 12-hex-character form
//! the firmware expects.

use crate::command::{Command, QueryKey};
use crate::types::MacAddress;

/// Command managing the lamp's master/clone topology.
///
/// # Examples
///
/// ```
/// use skylight_lib::command::{CloneCommand, Command};
/// use skylight_lib::types::MacAddress;
///
/// let mac: MacAddress = "aa:bb:cc:dd:ee:ff".parse().unwrap();
/// assert_eq!(CloneCommand::Add(mac).value(), "kAABBCCDDEEFF");
/// assert_eq!(CloneCommand::ClearTopology.value(), "j");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CloneCommand {
    /// Register a clone on this master.
    Add(MacAddress),
    /// Remove a clone from this master.
    Remove(MacAddress),
    /// Clear master and clone assignments.
    ClearTopology,
    /// Put this lamp into clone mode.
    EnterCloneMode,
}

impl Command for CloneCommand {
    fn key(&self) -> QueryKey {
        QueryKey::Params
    }

    fn value(&self) -> String {
        match self {
            Self::Add(mac) => format!("k{mac}"),
            Self::Remove(mac) => format!("l{mac}"),
            Self::ClearTopology => "j".to_string(),
            Self::EnterCloneMode => "i".to_string(),
        }
    }
}
