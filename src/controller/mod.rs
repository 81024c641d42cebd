// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Runtime controller for one lamp.
//!
//! The controller owns the session state machine (mode, selected preset,
//! output power) and composes command encoding with the HTTP transport
//! into higher-level operations. One instance is shared by all
//! collaborators of a single lamp; state updates happen only after the
//! corresponding command round-trip succeeded, so a failed operation
//! leaves the state untouched.
//!
//! Every operation may block for up to the transport timeout. Callers
//! must not hold their own locks across a call.

use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tokio::sync::Mutex;

use crate::command::{
    ChannelCommand, ClockCommand, CloneCommand, Command, DiagnosticCommand, ManualTimeoutCommand,
    ModeCommand, NightModeCommand, QueryKey, ScheduleCommand,
};
use crate::error::{Error, Result, ValueError};
use crate::presets;
use crate::protocol::HttpClient;
use crate::telemetry::{DeviceStatus, parse_status_page};
use crate::types::{Channel, LampMode, MacAddress, PowerLevel};

/// Minimum interval between two diagnostic refreshes that hit the network.
const REFRESH_INTERVAL: Duration = Duration::from_secs(1);

/// Controller-side session state for one lamp.
///
/// `mode` and `auto_mode` stay consistent: after any successful
/// mode-changing operation `auto_mode` is true iff `mode` is
/// [`LampMode::Auto`]. A diagnostic refresh may overwrite both from the
/// device's schedule-enabled report.
#[derive(Debug, Clone)]
pub struct ControllerState {
    /// Current logical mode.
    pub mode: LampMode,
    /// Whether the lamp is following its schedule. Redundant cache of
    /// `mode == Auto`, kept in sync with it.
    pub auto_mode: bool,
    /// Currently selected preset name, always a key of the preset table.
    pub selected_preset: String,
    /// Output power applied to presets.
    pub power: PowerLevel,
    /// Firmware version, unknown until the first diagnostic refresh.
    pub firmware_version: Option<String>,
    /// Trimmed body of the last raw or read command.
    pub last_raw_response: Option<String>,
    /// Most recent decoded status snapshot.
    pub status: Option<DeviceStatus>,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            mode: LampMode::Off,
            auto_mode: false,
            selected_preset: presets::DEFAULT_PRESET.to_string(),
            power: PowerLevel::default(),
            firmware_version: None,
            last_raw_response: None,
            status: None,
        }
    }
}

/// Stateful controller for one Skylight lamp.
///
/// # Examples
///
/// ```no_run
/// use skylight_lib::Controller;
///
/// # async fn example() -> skylight_lib::Result<()> {
/// let controller = Controller::new("192.168.1.42")?;
/// controller.apply_preset(Some("B2")).await?;
/// controller.refresh_diagnostics().await?;
///
/// let state = controller.state();
/// println!("firmware: {:?}", state.firmware_version);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Controller {
    client: HttpClient,
    state: RwLock<ControllerState>,
    // Guards the refresh critical section and carries the monotonic
    // timestamp of the last successful refresh.
    refresh_gate: Mutex<Option<Instant>>,
}

impl Controller {
    /// Creates a controller for the lamp at `host`.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self> {
        Ok(Self::with_client(HttpClient::new(host)?))
    }

    /// Creates a controller around an existing client.
    #[must_use]
    pub fn with_client(client: HttpClient) -> Self {
        Self {
            client,
            state: RwLock::new(ControllerState::default()),
            refresh_gate: Mutex::new(None),
        }
    }

    /// Returns a snapshot of the current controller state.
    #[must_use]
    pub fn state(&self) -> ControllerState {
        self.state.read().clone()
    }

    // ========== Power and presets ==========

    /// Stores the output power, clamped to 0-100. Does not touch the lamp.
    pub fn set_power(&self, power: u8) {
        self.state.write().power = PowerLevel::clamped(power);
    }

    /// Updates the power and immediately re-applies the selected preset so
    /// it takes effect on the lamp.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn set_power_and_apply(&self, power: u8) -> Result<()> {
        self.set_power(power);
        self.apply_preset(None).await
    }

    /// Applies a preset, leaving schedule mode first.
    ///
    /// With `None`, re-applies the currently selected preset. The preset's
    /// trailing intensity field is substituted with the configured power
    /// before sending. On success the controller is in [`LampMode::Manual`]
    /// with the preset recorded as selected.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::UnknownPreset` for names not in the preset
    /// table, or a protocol error if the lamp is unreachable.
    pub async fn apply_preset(&self, preset: Option<&str>) -> Result<()> {
        let target = match preset {
            Some(name) => name.to_string(),
            None => self.state.read().selected_preset.clone(),
        };
        let template = presets::template(&target)
            .ok_or_else(|| ValueError::UnknownPreset(target.clone()))?;
        let ctrl = presets::with_power(template, self.state.read().power);

        // The firmware wants schedule mode disabled before a manual ctrl
        // write; the disable command is wire-identical to OFF.
        self.client.send_command(&ModeCommand::Off).await?;
        self.client.send_raw(QueryKey::Ctrl, &ctrl).await?;

        let mut state = self.state.write();
        state.selected_preset = target;
        state.mode = LampMode::Manual;
        state.auto_mode = false;
        Ok(())
    }

    // ========== Modes ==========

    /// Switches the lamp to automatic schedule mode.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn set_auto_mode(&self) -> Result<()> {
        self.client.send_command(&ModeCommand::Auto).await?;
        self.enter_mode(LampMode::Auto);
        Ok(())
    }

    /// Turns the lamp off by disabling schedule mode.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn set_off_mode(&self) -> Result<()> {
        self.client.send_command(&ModeCommand::Off).await?;
        self.enter_mode(LampMode::Off);
        Ok(())
    }

    /// Enables the built-in demo cycle.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn set_demo_mode(&self) -> Result<()> {
        self.client.send_command(&ModeCommand::Demo).await?;
        self.enter_mode(LampMode::Demo);
        Ok(())
    }

    /// Switches to the given mode. [`LampMode::Manual`] re-applies the
    /// currently selected preset.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn set_mode(&self, mode: LampMode) -> Result<()> {
        match mode {
            LampMode::Auto => self.set_auto_mode().await,
            LampMode::Off => self.set_off_mode().await,
            LampMode::Demo => self.set_demo_mode().await,
            LampMode::Manual => self.apply_preset(None).await,
        }
    }

    // ========== Channels ==========

    /// Sets one LED PWM channel (0-3) in percent.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidChannel` for indexes outside 0-3, or a
    /// protocol error if the lamp is unreachable.
    pub async fn set_channel_pwm(&self, channel: u8, value: f64) -> Result<()> {
        let cmd = ChannelCommand::Set {
            channel: Channel::new(channel)?,
            value,
        };
        self.manual_command(&cmd).await
    }

    /// Sets all four channels with a color code and global intensity.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn set_all_channels(
        &self,
        channels: [f64; 4],
        color_code: i32,
        intensity: f64,
    ) -> Result<()> {
        let cmd = ChannelCommand::SetAll {
            channels,
            color_code,
            intensity,
        };
        self.manual_command(&cmd).await
    }

    /// Sets the PWM base frequency in Hz.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidFrequency` for zero, or a protocol
    /// error if the lamp is unreachable.
    pub async fn set_pwm_frequency(&self, hz: u32) -> Result<()> {
        let cmd = ChannelCommand::set_frequency(hz)?;
        self.client.send_command(&cmd).await?;
        Ok(())
    }

    /// Reads back the PWM base frequency.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn get_pwm_frequency(&self) -> Result<String> {
        self.read(&ChannelCommand::GetFrequency).await
    }

    /// Re-initializes the PWM driver.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn init_pwm(&self) -> Result<()> {
        self.client.send_command(&ChannelCommand::Init).await?;
        Ok(())
    }

    // ========== Clock ==========

    /// Syncs the lamp's RTC.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn rtc_sync(&self) -> Result<()> {
        self.client.send_command(&ClockCommand::RtcSync).await?;
        Ok(())
    }

    /// Sets the lamp's timezone. The value is passed through verbatim.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn set_timezone(&self, timezone: &str) -> Result<()> {
        let cmd = ClockCommand::SetTimezone(timezone.to_string());
        self.client.send_command(&cmd).await?;
        Ok(())
    }

    // ========== Schedule ==========

    /// Erases the stored schedule.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn clear_schedule(&self) -> Result<()> {
        self.client.send_command(&ScheduleCommand::Clear).await?;
        Ok(())
    }

    /// Persists the working schedule to flash.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn save_schedule(&self) -> Result<()> {
        self.client.send_command(&ScheduleCommand::Save).await?;
        Ok(())
    }

    /// Opens a legacy schedule transfer of `count` items.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn start_legacy_schedule_transfer(&self, count: u32) -> Result<()> {
        let cmd = ScheduleCommand::StartLegacyTransfer(count);
        self.client.send_command(&cmd).await?;
        Ok(())
    }

    /// Sends one legacy schedule payload chunk.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn send_legacy_schedule_chunk(&self, payload: &str) -> Result<()> {
        let cmd = ScheduleCommand::LegacyChunk(payload.to_string());
        self.client.send_command(&cmd).await?;
        Ok(())
    }

    /// Opens a safe schedule transfer of `count` items.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn start_safe_schedule_transfer(&self, count: u32) -> Result<()> {
        let cmd = ScheduleCommand::StartSafeTransfer(count);
        self.client.send_command(&cmd).await?;
        Ok(())
    }

    /// Sends one safe schedule payload chunk.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn send_safe_schedule_chunk(&self, payload: &str) -> Result<()> {
        let cmd = ScheduleCommand::SafeChunk(payload.to_string());
        self.client.send_command(&cmd).await?;
        Ok(())
    }

    /// Starts following a freshly uploaded schedule. On success the
    /// controller is in [`LampMode::Auto`].
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn start_new_schedule(&self) -> Result<()> {
        self.client.send_command(&ScheduleCommand::StartNew).await?;
        self.enter_mode(LampMode::Auto);
        Ok(())
    }

    // ========== Topology ==========

    /// Registers a clone lamp on this master.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidMac` for malformed addresses, or a
    /// protocol error if the lamp is unreachable.
    pub async fn add_clone(&self, mac: &str) -> Result<()> {
        let cmd = CloneCommand::Add(MacAddress::parse(mac)?);
        self.client.send_command(&cmd).await?;
        Ok(())
    }

    /// Removes a clone lamp from this master.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::InvalidMac` for malformed addresses, or a
    /// protocol error if the lamp is unreachable.
    pub async fn remove_clone(&self, mac: &str) -> Result<()> {
        let cmd = CloneCommand::Remove(MacAddress::parse(mac)?);
        self.client.send_command(&cmd).await?;
        Ok(())
    }

    /// Clears master and clone assignments.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn clear_master_and_clone(&self) -> Result<()> {
        let cmd = CloneCommand::ClearTopology;
        self.client.send_command(&cmd).await?;
        Ok(())
    }

    /// Puts this lamp into clone mode.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn set_clone_mode(&self) -> Result<()> {
        let cmd = CloneCommand::EnterCloneMode;
        self.client.send_command(&cmd).await?;
        Ok(())
    }

    // ========== Night mode and manual timeout ==========

    /// Enables or disables night mode.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn set_night_mode(&self, enabled: bool) -> Result<()> {
        self.client.send_command(&NightModeCommand(enabled)).await?;
        Ok(())
    }

    /// Keeps the lamp in manual mode for one hour.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn manual_mode_1h(&self) -> Result<()> {
        self.manual_command(&ManualTimeoutCommand::OneHour).await
    }

    /// Restores the firmware-default manual-mode timeout.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn manual_mode_default(&self) -> Result<()> {
        self.manual_command(&ManualTimeoutCommand::Default).await
    }

    // ========== Raw and read operations ==========

    /// Sends a raw command and returns the response body.
    ///
    /// Exactly one of `params` or `ctrl` must be given; the other must be
    /// `None`. The trimmed response is recorded as the last raw response,
    /// and the lamp is considered to have left schedule mode.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::AmbiguousRawCommand` when both or neither
    /// selector is given (before any network call), or a protocol error if
    /// the lamp is unreachable.
    pub async fn send_raw(&self, params: Option<&str>, ctrl: Option<&str>) -> Result<String> {
        // An empty selector counts as absent.
        let params = params.filter(|v| !v.is_empty());
        let ctrl = ctrl.filter(|v| !v.is_empty());
        let (key, value) = match (params, ctrl) {
            (Some(value), None) => (QueryKey::Params, value),
            (None, Some(value)) => (QueryKey::Ctrl, value),
            _ => return Err(Error::Value(ValueError::AmbiguousRawCommand)),
        };
        let response = self.client.send_raw(key, value).await?;

        let mut state = self.state.write();
        state.last_raw_response = Some(response.trim().to_string());
        state.mode = LampMode::Manual;
        state.auto_mode = false;
        drop(state);
        Ok(response)
    }

    /// Reads the device description string.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn read_description(&self) -> Result<String> {
        self.read(&DiagnosticCommand::Description).await
    }

    /// Reads the LED driver status string.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn read_led_status(&self) -> Result<String> {
        self.read(&DiagnosticCommand::LedStatus).await
    }

    /// Reads the schedule engine status string.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn read_schedule_status(&self) -> Result<String> {
        self.read(&DiagnosticCommand::ScheduleStatus).await
    }

    /// Reads the raw schedule string.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn read_schedule_string(&self) -> Result<String> {
        self.read(&DiagnosticCommand::ScheduleString).await
    }

    /// Reads the extended device info string.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn read_extended_info(&self) -> Result<String> {
        self.read(&DiagnosticCommand::ExtendedInfo).await
    }

    // ========== Diagnostics refresh ==========

    /// Fetches firmware version and status telegram from the lamp.
    ///
    /// This is the only operation with internal mutual exclusion: the
    /// whole fetch runs inside one critical section, and a call arriving
    /// less than one second (monotonic) after the last successful refresh
    /// returns immediately with the cached snapshot, making no network
    /// calls. The snapshot is replaced wholesale; if the lamp reports the
    /// schedule engine state, the auto flag is overwritten from it, and
    /// mode is forced to [`LampMode::Auto`] when the schedule is active.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable; the cached state stays
    /// unchanged in that case.
    pub async fn refresh_diagnostics(&self) -> Result<()> {
        let mut last_refresh = self.refresh_gate.lock().await;
        if let Some(last) = *last_refresh
            && last.elapsed() < REFRESH_INTERVAL
        {
            return Ok(());
        }

        let firmware = self.client.firmware_version().await?;
        let raw = self.client.status_page().await?;
        let status = parse_status_page(&raw);

        {
            let mut state = self.state.write();
            state.firmware_version = Some(firmware);
            if let Some(enabled) = status.schedule_enabled {
                state.auto_mode = enabled;
                if enabled {
                    state.mode = LampMode::Auto;
                }
            }
            state.status = Some(status);
        }
        *last_refresh = Some(Instant::now());
        Ok(())
    }

    // ========== Helpers ==========

    /// Sends a command that implicitly leaves schedule mode on the device.
    async fn manual_command<C: Command + Sync>(&self, command: &C) -> Result<()> {
        self.client.send_command(command).await?;
        self.enter_mode(LampMode::Manual);
        Ok(())
    }

    /// Reads a diagnostic string, trims it, and records it as the last
    /// raw response.
    async fn read<C: Command + Sync>(&self, command: &C) -> Result<String> {
        let response = self.client.send_command(command).await?;
        let trimmed = response.trim().to_string();
        self.state.write().last_raw_response = Some(trimmed.clone());
        Ok(trimmed)
    }

    fn enter_mode(&self, mode: LampMode) {
        let mut state = self.state.write();
        state.mode = mode;
        state.auto_mode = mode == LampMode::Auto;
    }
}
