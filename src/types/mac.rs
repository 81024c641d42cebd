// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Hardware address type for master/clone topology commands.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

/// A lamp hardware address, normalized to 12 uppercase hex characters.
///
/// The lamp's clone commands want the bare hex form without separators;
/// `:` and `-` separators are accepted on input and stripped.
///
/// # Examples
///
/// ```
/// use skylight_lib::types::MacAddress;
///
/// let mac: MacAddress = "aa:bb:cc:dd:ee:ff".parse().unwrap();
/// assert_eq!(mac.as_str(), "AABBCCDDEEFF");
///
/// assert!("aa:bb:cc".parse::<MacAddress>().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MacAddress(String);

impl MacAddress {
    /// Parses a MAC address, stripping `:`/`-` separators and uppercasing.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidMac` unless the stripped input is
    /// exactly 12 hex characters.
    pub fn parse(input: &str) -> Result<Self, ValueError> {
        let stripped: String = input
            .chars()
            .filter(|c| *c != ':' && *c != '-')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if stripped.len() != 12 || !stripped.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ValueError::InvalidMac(input.to_string()));
        }
        Ok(Self(stripped))
    }

    /// Returns the normalized 12-hex-character form.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for MacAddress {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
