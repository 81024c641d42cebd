// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP transport for the Skylight lamp.
//!
//! The lamp exposes two endpoints: `/scheduleSettings` takes one command
//! per request as a `params` or `ctrl` query parameter, and `/statusPage`
//! returns the diagnostic telegram. There is no authentication and no
//! TLS; the transport performs exactly one GET per call and translates
//! every network error, timeout, or HTTP status >= 400 into a
//! [`ProtocolError`](crate::error::ProtocolError).

mod http;

pub use http::{HttpClient, HttpConfig};
