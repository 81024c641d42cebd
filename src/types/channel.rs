// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! PWM channel index type.

use std::fmt;

use crate::error::ValueError;

/// One of the lamp's four LED PWM channels (0-3).
///
/// # Examples
///
/// ```
/// use skylight_lib::types::Channel;
///
/// let ch = Channel::new(2).unwrap();
/// assert_eq!(ch.value(), 2);
///
/// // Out-of-range indexes return an error
/// assert!(Channel::new(4).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Channel(u8);

impl Channel {
    /// Number of PWM channels on the lamp.
    pub const COUNT: u8 = 4;

    /// Creates a channel index.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidChannel` if `value` is not 0-3.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value >= Self::COUNT {
            return Err(ValueError::InvalidChannel(value));
        }
        Ok(Self(value))
    }

    /// Returns the channel index.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
