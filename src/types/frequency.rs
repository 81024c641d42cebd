// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! PWM base frequency type.

use std::fmt;

use crate::error::ValueError;

/// PWM base frequency in Hz, at least 1.
///
/// # Examples
///
/// ```
/// use skylight_lib::types::PwmFrequency;
///
/// let hz = PwmFrequency::new(2000).unwrap();
/// assert_eq!(hz.value(), 2000);
///
/// // Zero would stall the PWM driver
/// assert!(PwmFrequency::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PwmFrequency(u32);

impl PwmFrequency {
    /// Creates a frequency value.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidFrequency` if `hz` is zero.
    pub fn new(hz: u32) -> Result<Self, ValueError> {
        if hz == 0 {
            return Err(ValueError::InvalidFrequency(hz));
        }
        Ok(Self(hz))
    }

    /// Returns the frequency in Hz.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for PwmFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
