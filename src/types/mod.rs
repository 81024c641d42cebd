// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validated value types used across commands and controller state.
//!
//! Constructors return [`ValueError`](crate::error::ValueError) for values
//! the lamp would not accept, so a malformed argument never reaches the
//! wire.

mod channel;
mod frequency;
mod mac;
mod mode;
mod power;

pub use channel::Channel;
pub use frequency::PwmFrequency;
pub use mac::MacAddress;
pub use mode::LampMode;
pub use power::PowerLevel;
