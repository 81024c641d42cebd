// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Parser for the lamp's `/statusPage` telegram.

use chrono::{NaiveDate, NaiveTime};
use serde::Serialize;

/// Decoded status snapshot from `/statusPage`.
///
/// Every field is optional: an absent or empty token in the telegram is a
/// distinct state from zero or false. Snapshots are replaced wholesale on
/// each refresh, never merged, so a short telegram surfaces as fields
/// reverting to `None` rather than as stale values.
///
/// # Examples
///
/// ```
/// use skylight_lib::telemetry::parse_status_page;
///
/// let status = parse_status_page("Lamp\t4D6F64656C00\n1\t2024-01-01\t12:00:00");
/// assert_eq!(status.name.as_deref(), Some("Lamp"));
/// assert_eq!(status.model.as_deref(), Some("Model"));
/// assert_eq!(status.sntp_enabled, Some(true));
/// assert_eq!(status.pwm_freq, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceStatus {
    /// Device name, hex-decoded when the firmware sends it hex-encoded.
    pub name: Option<String>,
    /// Device model, hex-decoded when the firmware sends it hex-encoded.
    pub model: Option<String>,
    /// Hardware address of this lamp.
    pub mac: Option<String>,
    /// Whether this lamp is a master in a master/clone topology.
    pub is_master: Option<bool>,
    /// Hardware address of the master, for clones.
    pub master_mac: Option<String>,
    /// Number of clones registered on this master, as reported.
    pub clone_count: Option<i32>,
    /// Whether SNTP time sync is enabled.
    pub sntp_enabled: Option<bool>,
    /// Device date string as reported.
    pub date: Option<String>,
    /// Device time string as reported.
    pub time: Option<String>,
    /// PWM base frequency in Hz.
    pub pwm_freq: Option<u32>,
    /// Channel 0 level in percent, one decimal.
    pub pwm0: Option<f64>,
    /// Channel 1 level in percent, one decimal.
    pub pwm1: Option<f64>,
    /// Channel 2 level in percent, one decimal.
    pub pwm2: Option<f64>,
    /// Channel 3 level in percent, one decimal.
    pub pwm3: Option<f64>,
    /// Manual-mode intensity.
    pub manual_intensity: Option<f64>,
    /// Manual-mode color code.
    pub manual_color: Option<f64>,
    /// Calibration PWM value.
    pub calib_pwm: Option<i32>,
    /// Whether night mode is active.
    pub night_mode_enabled: Option<bool>,
    /// Whether the schedule engine is active.
    pub schedule_enabled: Option<bool>,
    /// Number of stored schedule items, as reported.
    pub schedule_items_count: Option<i32>,
    /// Index of the currently active schedule item.
    pub schedule_active_item_idx: Option<i32>,
}

impl DeviceStatus {
    /// Device date as a typed value.
    ///
    /// The telegram carries the date as `YYYY-MM-DD`; anything else, or an
    /// absent field, comes back as `None`. The raw string stays available
    /// in [`date`](Self::date).
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.as_deref()?, "%Y-%m-%d").ok()
    }

    /// Device time as a typed value.
    ///
    /// The telegram carries the time as `HH:MM:SS`; anything else, or an
    /// absent field, comes back as `None`. The raw string stays available
    /// in [`time`](Self::time).
    #[must_use]
    pub fn parsed_time(&self) -> Option<NaiveTime> {
        NaiveTime::parse_from_str(self.time.as_deref()?, "%H:%M:%S").ok()
    }
}

/// Parses a `/statusPage` response body into a [`DeviceStatus`].
///
/// Never fails: lines beyond the telegram's length and tokens beyond a
/// line's length leave their fields unset, as do empty or non-numeric
/// tokens. Worst case every field is `None`.
#[must_use]
pub fn parse_status_page(raw: &str) -> DeviceStatus {
    let mut status = DeviceStatus::default();
    let lines: Vec<Vec<&str>> = raw
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.split('\t').collect())
        .collect();

    if let Some(parts) = lines.first() {
        status.name = token(parts, 0).and_then(decode_hex_text);
        status.model = token(parts, 1).and_then(decode_hex_text);
        status.mac = text(parts, 2);
        status.is_master = flag(parts, 3);
        status.master_mac = text(parts, 4);
        status.clone_count = parse_num(parts, 5);
    }

    if let Some(parts) = lines.get(1) {
        status.sntp_enabled = flag(parts, 0);
        status.date = text(parts, 1);
        status.time = text(parts, 2);
    }

    if let Some(parts) = lines.get(2) {
        status.pwm_freq = parse_num(parts, 0);
        status.pwm0 = raw_pwm_to_percent(parts, 1);
        status.pwm1 = raw_pwm_to_percent(parts, 2);
        status.pwm2 = raw_pwm_to_percent(parts, 3);
        status.pwm3 = raw_pwm_to_percent(parts, 4);
        status.manual_intensity = parse_num(parts, 5);
        status.manual_color = parse_num(parts, 6);
        status.calib_pwm = parse_num(parts, 7);
        status.night_mode_enabled = flag(parts, 8);
    }

    if let Some(parts) = lines.get(3) {
        status.schedule_enabled = flag(parts, 0);
        status.schedule_items_count = parse_num(parts, 1);
        status.schedule_active_item_idx = parse_num(parts, 2);
    }

    status
}

/// Raw token at `idx`, present or not. Empty tokens are still returned so
/// each decoder can treat emptiness by its own rule.
fn token<'a>(parts: &[&'a str], idx: usize) -> Option<&'a str> {
    parts.get(idx).copied()
}

/// Non-empty text token.
fn text(parts: &[&str], idx: usize) -> Option<String> {
    token(parts, idx)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}

/// Boolean-coded token: `"1"` is true, any other non-empty token is false,
/// an empty token stays unset.
fn flag(parts: &[&str], idx: usize) -> Option<bool> {
    token(parts, idx).filter(|t| !t.is_empty()).map(|t| t == "1")
}

/// Numeric token; empty or junk stays unset.
fn parse_num<T: std::str::FromStr>(parts: &[&str], idx: usize) -> Option<T> {
    token(parts, idx).and_then(|t| t.parse().ok())
}

/// Raw 0-255 PWM token converted to percent, clamped and rounded to one
/// decimal.
fn raw_pwm_to_percent(parts: &[&str], idx: usize) -> Option<f64> {
    let raw: f64 = parse_num(parts, idx)?;
    let percent = (raw * 100.0 / 255.0).clamp(0.0, 100.0);
    Some((percent * 10.0).round() / 10.0)
}

/// Decodes a possibly hex-encoded text token.
///
/// Even-length tokens are interpreted as hex bytes, decoded as ASCII with
/// non-ASCII bytes dropped and NUL padding stripped. Odd-length tokens and
/// tokens with non-hex pairs pass through unmodified. Empty tokens stay
/// unset.
fn decode_hex_text(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    if value.len() % 2 != 0 {
        return Some(value.to_string());
    }
    match hex_bytes(value) {
        Some(bytes) => {
            let ascii: String = bytes
                .into_iter()
                .filter(|b| b.is_ascii())
                .map(char::from)
                .collect();
            Some(ascii.trim_matches('\0').to_string())
        }
        None => Some(value.to_string()),
    }
}

fn hex_bytes(value: &str) -> Option<Vec<u8>> {
    debug_assert_eq!(value.len() % 2, 0);
    value
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            let pair = std::str::from_utf8(pair).ok()?;
            u8::from_str_radix(pair, 16).ok()
        })
        .collect()
}
