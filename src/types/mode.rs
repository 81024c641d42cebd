// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Logical lamp mode.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValueError;

/// The lamp's logical operating mode as tracked by the controller.
///
/// `Auto` means the lamp follows its stored schedule; `Manual` means the
/// output was last set by a direct command or preset; `Demo` runs the
/// built-in demonstration cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LampMode {
    /// Lamp output off (schedule disabled).
    Off,
    /// Following the stored schedule.
    Auto,
    /// Direct manual control.
    Manual,
    /// Built-in demo cycle.
    Demo,
}

impl LampMode {
    /// Returns the lowercase string form.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Auto => "auto",
            Self::Manual => "manual",
            Self::Demo => "demo",
        }
    }
}

impl fmt::Display for LampMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LampMode {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "off" => Ok(Self::Off),
            "auto" => Ok(Self::Auto),
            "manual" => Ok(Self::Manual),
            "demo" => Ok(Self::Demo),
            _ => Err(ValueError::UnknownMode(s.to_string())),
        }
    }
}
