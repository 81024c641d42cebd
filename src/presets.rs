// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Static preset table.
//!
//! A preset is a named, pre-built `ctrl` command template in the
//! all-channel grammar (`74{c0}h{c1}i{c2}j{c3}k{color}l{intensity}m`).
//! At apply time the trailing intensity field `l<number>m` is replaced
//! with the controller's configured output power; templates that do not
//! end in that field are sent verbatim with their baked-in power.

use crate::types::PowerLevel;

/// Preset name selected by a fresh controller.
pub const DEFAULT_PRESET: &str = "A1";

/// Name -> ctrl template. Channel mixes per the vendor app's built-in
/// scenes; the trailing `l0m` is a placeholder overwritten on apply.
static PRESETS: &[(&str, &str)] = &[
    ("A1", "7435h55i100j20k1l0m"),
    ("A2", "7445h65i90j30k1l0m"),
    ("A3", "7460h75i80j40k1l0m"),
    ("B1", "7420h40i100j10k2l0m"),
    ("B2", "7430h50i95j15k2l0m"),
    ("B3", "7450h70i85j25k2l0m"),
    ("C1", "7480h85i70j60k3l0m"),
    ("C2", "74100h90i60j80k3l0m"),
];

/// Returns the ctrl template for a preset name, if known.
#[must_use]
pub fn template(name: &str) -> Option<&'static str> {
    PRESETS
        .iter()
        .find(|(preset, _)| *preset == name)
        .map(|(_, ctrl)| *ctrl)
}

/// Returns all preset names in table order.
#[must_use]
pub fn names() -> Vec<&'static str> {
    PRESETS.iter().map(|(name, _)| *name).collect()
}

/// Substitutes the configured power into a preset template.
///
/// The trailing intensity field is the pattern `l<number>m` anchored at
/// the end of the template (optional minus, digits, optional decimal
/// fraction). When the template does not carry that field the template is
/// returned unchanged; a warning is logged only when it also does not end
/// in `m`, matching the firmware convention check this grammar grew out
/// of.
#[must_use]
pub fn with_power(template: &str, power: PowerLevel) -> String {
    match power_field_start(template) {
        Some(start) => format!("{}l{}m", &template[..start], power.value()),
        None => {
            if !template.ends_with('m') {
                tracing::warn!(template, "preset has unexpected ctrl format");
            }
            template.to_string()
        }
    }
}

/// Returns the byte offset of the trailing `l<number>m` field, if present.
fn power_field_start(template: &str) -> Option<usize> {
    let body = template.strip_suffix('m')?;
    let start = body.rfind('l')?;
    let number = body[start + 1..].strip_prefix('-').unwrap_or(&body[start + 1..]);

    let mut parts = number.splitn(2, '.');
    let int_part = parts.next().unwrap_or("");
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if let Some(frac) = parts.next()
        && (frac.is_empty() || !frac.bytes().all(|b| b.is_ascii_digit()))
    {
        return None;
    }
    Some(start)
}
