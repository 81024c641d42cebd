// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Output power level type.

use std::fmt;

use serde::Serialize;

use crate::error::ValueError;

/// Output power as a percentage (0-100).
///
/// This is the value substituted into the trailing intensity field of a
/// preset command when it is applied.
///
/// # Examples
///
/// ```
/// use skylight_lib::types::PowerLevel;
///
/// let power = PowerLevel::new(75).unwrap();
/// assert_eq!(power.value(), 75);
///
/// // Clamping constructor never fails
/// assert_eq!(PowerLevel::clamped(150).value(), 100);
///
/// assert!(PowerLevel::new(101).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct PowerLevel(u8);

impl PowerLevel {
    /// Minimum power (0%).
    pub const MIN: Self = Self(0);

    /// Maximum power (100%).
    pub const MAX: Self = Self(100);

    /// Creates a power level.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidPowerLevel` if `value` exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::InvalidPowerLevel(value));
        }
        Ok(Self(value))
    }

    /// Creates a power level, clamping values above 100 down to 100.
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > 100 { Self(100) } else { Self(value) }
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Default for PowerLevel {
    fn default() -> Self {
        Self::MAX
    }
}

impl fmt::Display for PowerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
