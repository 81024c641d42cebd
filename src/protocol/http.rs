// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP client for the Skylight lamp's command protocol.

use std::time::Duration;

use reqwest::Client;

use crate::command::{Command, FirmwareCommand, QueryKey};
use crate::error::ProtocolError;

/// Configuration for a lamp's HTTP connection.
///
/// The protocol is stateless plain HTTP: each command is an independent
/// request, so the only knobs are host, port, and timeout.
///
/// # Examples
///
/// ```
/// use skylight_lib::protocol::HttpConfig;
/// use std::time::Duration;
///
/// let config = HttpConfig::new("192.168.1.42")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5));
/// assert_eq!(config.base_url(), "http://192.168.1.42:8080");
/// ```
#[derive(Debug, Clone)]
pub struct HttpConfig {
    host: String,
    port: u16,
    timeout: Duration,
}

impl HttpConfig {
    /// Default HTTP port.
    pub const DEFAULT_PORT: u16 = 80;
    /// Default request timeout. The lamp's web server is slow to answer
    /// while it is writing flash, so this is generous.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

    /// Creates a configuration for the given lamp host (IP or hostname).
    #[must_use]
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: Self::DEFAULT_PORT,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Sets a custom port.
    #[must_use]
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the host.
    #[must_use]
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Returns the port.
    #[must_use]
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Returns the timeout.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Builds the base URL from this configuration.
    #[must_use]
    pub fn base_url(&self) -> String {
        if self.port == Self::DEFAULT_PORT {
            format!("http://{}", self.host)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// Creates an [`HttpClient`] from this configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the host is empty or the HTTP client cannot be
    /// created.
    pub fn into_client(self) -> Result<HttpClient, ProtocolError> {
        if self.host.is_empty() {
            return Err(ProtocolError::InvalidAddress("host is required".to_string()));
        }
        let base_url = self.base_url();
        let client = Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(ProtocolError::Http)?;
        Ok(HttpClient { base_url, client })
    }
}

/// HTTP client for communicating with one lamp.
///
/// Commands go to `/scheduleSettings?<key>=<value>`; the diagnostic
/// telegram comes from `/statusPage`. Response bodies are returned
/// verbatim; read helpers on the controller trim them.
///
/// # Examples
///
/// ```no_run
/// use skylight_lib::command::ModeCommand;
/// use skylight_lib::protocol::HttpClient;
///
/// # async fn example() -> Result<(), skylight_lib::error::ProtocolError> {
/// let client = HttpClient::new("192.168.1.42")?;
/// client.send_command(&ModeCommand::Auto).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct HttpClient {
    base_url: String,
    client: Client,
}

impl HttpClient {
    /// Creates a client for the given host with default settings.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client cannot be created.
    pub fn new(host: impl Into<String>) -> Result<Self, ProtocolError> {
        HttpConfig::new(host).into_client()
    }

    /// Returns the base URL of the lamp.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one encoded command and returns the raw response body.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable or rejected the command.
    pub async fn send_command<C: Command + Sync>(
        &self,
        command: &C,
    ) -> Result<String, ProtocolError> {
        self.send_raw(command.key(), &command.value()).await
    }

    /// Sends a raw command value under the given query key.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable or rejected the command.
    pub async fn send_raw(&self, key: QueryKey, value: &str) -> Result<String, ProtocolError> {
        self.get(self.command_url(key, value)).await
    }

    /// Fetches the raw diagnostic telegram from `/statusPage`.
    ///
    /// # Errors
    ///
    /// Returns error if the lamp is unreachable.
    pub async fn status_page(&self) -> Result<String, ProtocolError> {
        self.get(format!("{}/statusPage", self.base_url)).await
    }

    /// Reads the firmware version, falling back to the legacy command.
    ///
    /// Tries `params=n1` first; on any transport failure retries once with
    /// `params=n`. The second failure is the one surfaced.
    ///
    /// # Errors
    ///
    /// Returns error if both version commands fail.
    pub async fn firmware_version(&self) -> Result<String, ProtocolError> {
        match self.send_command(&FirmwareCommand::Primary).await {
            Ok(body) => Ok(body.trim().to_string()),
            Err(err) => {
                tracing::debug!(error = %err, "n1 version read failed, retrying with n");
                let body = self.send_command(&FirmwareCommand::Fallback).await?;
                Ok(body.trim().to_string())
            }
        }
    }

    /// Builds the command URL for a key/value pair.
    fn command_url(&self, key: QueryKey, value: &str) -> String {
        format!(
            "{}/scheduleSettings?{}={}",
            self.base_url,
            key.as_str(),
            urlencoding::encode(value)
        )
    }

    async fn get(&self, url: String) -> Result<String, ProtocolError> {
        tracing::debug!(url = %url, "Sending lamp request");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(ProtocolError::Http)?;

        let status = response.status();
        let body = response.text().await.map_err(ProtocolError::Http)?;

        // Only 4xx/5xx is a rejection; informational and redirect statuses
        // pass the body through.
        if status.as_u16() >= 400 {
            return Err(ProtocolError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(body = %body, "Received lamp response");
        Ok(body)
    }
}
