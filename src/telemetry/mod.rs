// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Status telegram decoding.
//!
//! The `/statusPage` endpoint returns a short tab/newline-delimited
//! telegram whose line and field counts vary across firmware revisions.
//! Decoding therefore never fails: anything missing or malformed simply
//! leaves the corresponding [`DeviceStatus`] field unset.

mod status_parser;

pub use status_parser::{DeviceStatus, parse_status_page};
