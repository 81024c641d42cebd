// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the Skylight library.
//!
//! Failures fall into two families: argument validation, which is caught
//! before any network traffic, and transport failures, where the lamp is
//! unreachable or rejected the request.

use thiserror::Error;

/// The main error type for this library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation. Never involves the network.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The lamp was unreachable or rejected the command.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),
}

/// Errors related to value validation and constraints.
///
/// These errors are raised before any command is sent to the lamp.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A PWM channel index outside 0-3.
    #[error("invalid channel: {0} (expected 0-3)")]
    InvalidChannel(u8),

    /// A MAC address that does not contain exactly 12 hex characters.
    #[error("invalid MAC address: {0:?} (expected 12 hex characters)")]
    InvalidMac(String),

    /// A PWM frequency of zero.
    #[error("invalid PWM frequency: {0} Hz (expected at least 1)")]
    InvalidFrequency(u32),

    /// A power level above 100 percent.
    #[error("power level {0} is out of range [0, 100]")]
    InvalidPowerLevel(u8),

    /// A preset name that is not in the preset table.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// A mode string that does not name a lamp mode.
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    /// A raw command must carry exactly one of `params` or `ctrl`.
    #[error("provide exactly one of params or ctrl")]
    AmbiguousRawCommand,
}

/// Errors related to HTTP communication with the lamp.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// Request failed at the network level (connect error, timeout, ...).
    #[error("cannot connect to lamp: {0}")]
    Http(#[from] reqwest::Error),

    /// The lamp answered with a non-success HTTP status.
    #[error("lamp returned HTTP {status}: {body}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Response body as sent by the lamp.
        body: String,
    },

    /// Invalid URL or address.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
}

/// A specialized Result type for this library.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_error_display() {
        let err = ValueError::InvalidChannel(7);
        assert_eq!(err.to_string(), "invalid channel: 7 (expected 0-3)");
    }

    #[test]
    fn error_from_value_error() {
        let value_err = ValueError::UnknownPreset("Z9".to_string());
        let err: Error = value_err.into();
        assert!(matches!(err, Error::Value(ValueError::UnknownPreset(_))));
    }

    #[test]
    fn rejected_display() {
        let err = ProtocolError::Rejected {
            status: 500,
            body: "ERR".to_string(),
        };
        assert_eq!(err.to_string(), "lamp returned HTTP 500: ERR");
    }

    #[test]
    fn ambiguous_raw_command_display() {
        let err = ValueError::AmbiguousRawCommand;
        assert_eq!(err.to_string(), "provide exactly one of params or ctrl");
    }
}
