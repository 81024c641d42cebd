// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Integration tests for the HTTP transport and controller using wiremock.

use std::time::Duration;

use skylight_lib::command::{ModeCommand, QueryKey};
use skylight_lib::protocol::HttpClient;
use skylight_lib::{Controller, Error, LampMode, ProtocolError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> HttpClient {
    HttpClient::new(server.uri().replace("http://", "")).unwrap()
}

fn controller_for(server: &MockServer) -> Controller {
    Controller::with_client(client_for(server))
}

// ============================================================================
// HttpClient Tests
// ============================================================================

mod http_client {
    use super::*;

    #[tokio::test]
    async fn send_mode_command_under_params_key() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/scheduleSettings"))
            .and(query_param("params", "a"))
            .respond_with(ResponseTemplate::new(200).set_body_string("OK"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let body = client.send_command(&ModeCommand::Auto).await.unwrap();
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn body_is_returned_verbatim() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("ctrl", "g0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("  Skylight v2  \n"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let body = client.send_raw(QueryKey::Ctrl, "g0").await.unwrap();
        // Trimming is the read operations' job, not the transport's.
        assert_eq!(body, "  Skylight v2  \n");
    }

    #[tokio::test]
    async fn http_error_status_is_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.send_command(&ModeCommand::Off).await.unwrap_err();
        match err {
            ProtocolError::Rejected { status, body } => {
                assert_eq!(status, 500);
                assert_eq!(body, "boom");
            }
            other => panic!("expected Rejected, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn non_error_status_below_400_is_not_rejected() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(304))
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        // Only 4xx/5xx counts as a rejection; a 304 passes through.
        let body = client.send_command(&ModeCommand::Auto).await.unwrap();
        assert_eq!(body, "");
    }

    #[tokio::test]
    async fn unreachable_lamp_is_a_transport_error() {
        // Dropping a wiremock `MockServer` returns it to wiremock's server
        // pool where the listener stays alive, so its port is not actually
        // unreachable. Bind-and-drop a plain listener to get a dead port.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client = HttpClient::new(addr.to_string()).unwrap();
        let err = client.send_command(&ModeCommand::Auto).await.unwrap_err();
        assert!(matches!(err, ProtocolError::Http(_)));
    }

    #[tokio::test]
    async fn firmware_version_primary_command() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("params", "n1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("1.4.2\n"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        assert_eq!(client.firmware_version().await.unwrap(), "1.4.2");
    }

    #[tokio::test]
    async fn firmware_version_falls_back_once() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("params", "n1"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("params", "n"))
            .respond_with(ResponseTemplate::new(200).set_body_string("0.9.1"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        assert_eq!(client.firmware_version().await.unwrap(), "0.9.1");
    }

    #[tokio::test]
    async fn firmware_version_surfaces_second_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("params", "n1"))
            .respond_with(ResponseTemplate::new(500).set_body_string("first"))
            .expect(1)
            .mount(&mock_server)
            .await;
        Mock::given(method("GET"))
            .and(query_param("params", "n"))
            .respond_with(ResponseTemplate::new(500).set_body_string("second"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = client_for(&mock_server);
        let err = client.firmware_version().await.unwrap_err();
        match err {
            ProtocolError::Rejected { body, .. } => assert_eq!(body, "second"),
            other => panic!("expected Rejected, got {other:?}"),
        }
    }
}

// ============================================================================
// Controller Tests
// ============================================================================

mod controller {
    use super::*;

    const TELEGRAM: &str = "Lamp\t4D6F64656C00\tAABBCCDDEEFF\t1\t\t0\n\
                            1\t2024-01-01\t12:00:00\n\
                            2000\t128\t64\t0\t255\t50\t30\t5\t1\n\
                            1\t3\t1";

    async fn mount_diagnostics(server: &MockServer, telegram: &str, expected_hits: u64) {
        Mock::given(method("GET"))
            .and(query_param("params", "n1"))
            .respond_with(ResponseTemplate::new(200).set_body_string("1.4.2"))
            .expect(expected_hits)
            .mount(server)
            .await;
        Mock::given(method("GET"))
            .and(path("/statusPage"))
            .respond_with(ResponseTemplate::new(200).set_body_string(telegram))
            .expect(expected_hits)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn apply_preset_disables_manual_mode_then_sends_ctrl() {
        let mock_server = MockServer::start().await;

        // Leaving schedule mode shares the OFF wire command.
        Mock::given(method("GET"))
            .and(query_param("params", "9"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;
        // A2 template with power 75 substituted into the trailing field.
        Mock::given(method("GET"))
            .and(query_param("ctrl", "7445h65i90j30k1l75m"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let controller = controller_for(&mock_server);
        controller.set_power(75);
        controller.apply_preset(Some("A2")).await.unwrap();

        let state = controller.state();
        assert_eq!(state.mode, LampMode::Manual);
        assert!(!state.auto_mode);
        assert_eq!(state.selected_preset, "A2");
    }

    #[tokio::test]
    async fn failed_preset_apply_leaves_state_unchanged() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let controller = controller_for(&mock_server);
        let err = controller.apply_preset(Some("B1")).await.unwrap_err();
        assert!(matches!(err, Error::Protocol(_)));

        let state = controller.state();
        assert_eq!(state.mode, LampMode::Off);
        assert_eq!(state.selected_preset, "A1");
    }

    #[tokio::test]
    async fn set_power_and_apply_reapplies_selected_preset() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("params", "9"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;
        // Default preset A1 with the new power.
        Mock::given(method("GET"))
            .and(query_param("ctrl", "7435h55i100j20k1l30m"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let controller = controller_for(&mock_server);
        controller.set_power_and_apply(30).await.unwrap();
        assert_eq!(controller.state().power.value(), 30);
        assert_eq!(controller.state().mode, LampMode::Manual);
    }

    #[tokio::test]
    async fn mode_commands_update_state() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&mock_server)
            .await;

        let controller = controller_for(&mock_server);

        controller.set_auto_mode().await.unwrap();
        assert_eq!(controller.state().mode, LampMode::Auto);
        assert!(controller.state().auto_mode);

        controller.set_demo_mode().await.unwrap();
        assert_eq!(controller.state().mode, LampMode::Demo);
        assert!(!controller.state().auto_mode);

        controller.set_off_mode().await.unwrap();
        assert_eq!(controller.state().mode, LampMode::Off);
        assert!(!controller.state().auto_mode);
    }

    #[tokio::test]
    async fn channel_write_enters_manual_mode() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("ctrl", "7262.5"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let controller = controller_for(&mock_server);
        controller.set_channel_pwm(2, 62.5).await.unwrap();

        let state = controller.state();
        assert_eq!(state.mode, LampMode::Manual);
        assert!(!state.auto_mode);
    }

    #[tokio::test]
    async fn start_new_schedule_enters_auto_mode() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("params", "r"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let controller = controller_for(&mock_server);
        controller.start_new_schedule().await.unwrap();

        let state = controller.state();
        assert_eq!(state.mode, LampMode::Auto);
        assert!(state.auto_mode);
    }

    #[tokio::test]
    async fn send_raw_records_trimmed_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("ctrl", "g2"))
            .respond_with(ResponseTemplate::new(200).set_body_string("LED OK\n"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let controller = controller_for(&mock_server);
        let body = controller.send_raw(None, Some("g2")).await.unwrap();
        assert_eq!(body, "LED OK\n");
        assert_eq!(
            controller.state().last_raw_response.as_deref(),
            Some("LED OK")
        );
    }

    #[tokio::test]
    async fn ambiguous_raw_command_makes_no_network_call() {
        let mock_server = MockServer::start().await;

        let controller = controller_for(&mock_server);
        assert!(controller.send_raw(Some("a"), Some("g0")).await.is_err());
        assert!(controller.send_raw(None, None).await.is_err());

        assert!(mock_server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn refresh_diagnostics_populates_state() {
        let mock_server = MockServer::start().await;
        mount_diagnostics(&mock_server, TELEGRAM, 1).await;

        let controller = controller_for(&mock_server);
        controller.refresh_diagnostics().await.unwrap();

        let state = controller.state();
        assert_eq!(state.firmware_version.as_deref(), Some("1.4.2"));

        let status = state.status.unwrap();
        assert_eq!(status.name.as_deref(), Some("Lamp"));
        assert_eq!(status.clone_count, Some(0));
        assert_eq!(status.pwm0, Some(50.2));
        assert_eq!(status.night_mode_enabled, Some(true));
        assert_eq!(status.schedule_items_count, Some(3));

        // Lamp reports its schedule engine active: mode follows.
        assert_eq!(state.mode, LampMode::Auto);
        assert!(state.auto_mode);
    }

    #[tokio::test]
    async fn refresh_without_schedule_report_keeps_mode() {
        let mock_server = MockServer::start().await;
        // Two-line telegram: no schedule line at all.
        mount_diagnostics(&mock_server, "Lamp\n1\t2024-01-01\t12:00:00", 1).await;

        let controller = controller_for(&mock_server);
        controller.refresh_diagnostics().await.unwrap();

        let state = controller.state();
        assert_eq!(state.mode, LampMode::Off);
        assert!(!state.auto_mode);
        assert_eq!(state.status.unwrap().schedule_enabled, None);
    }

    #[tokio::test]
    async fn refresh_is_rate_limited_to_one_round_trip() {
        let mock_server = MockServer::start().await;
        mount_diagnostics(&mock_server, TELEGRAM, 1).await;

        let controller = controller_for(&mock_server);
        controller.refresh_diagnostics().await.unwrap();
        // Second call within a second must reuse the cached snapshot.
        controller.refresh_diagnostics().await.unwrap();

        assert_eq!(mock_server.received_requests().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn refresh_after_interval_hits_network_again() {
        let mock_server = MockServer::start().await;
        mount_diagnostics(&mock_server, TELEGRAM, 2).await;

        let controller = controller_for(&mock_server);
        controller.refresh_diagnostics().await.unwrap();
        tokio::time::sleep(Duration::from_millis(1100)).await;
        controller.refresh_diagnostics().await.unwrap();

        // Mock expectations (2 hits each) are verified on drop.
    }

    #[tokio::test]
    async fn failed_refresh_does_not_arm_rate_limiter() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let controller = controller_for(&mock_server);
        assert!(controller.refresh_diagnostics().await.is_err());
        assert!(controller.state().firmware_version.is_none());

        // An immediate retry must still reach the network.
        assert!(controller.refresh_diagnostics().await.is_err());
        // Each attempt sends n1 and the n fallback.
        assert_eq!(mock_server.received_requests().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn diagnostic_reads_record_last_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("ctrl", "g30"))
            .respond_with(ResponseTemplate::new(200).set_body_string(" running \n"))
            .mount(&mock_server)
            .await;

        let controller = controller_for(&mock_server);
        let status = controller.read_schedule_status().await.unwrap();
        assert_eq!(status, "running");
        assert_eq!(
            controller.state().last_raw_response.as_deref(),
            Some("running")
        );
    }

    #[tokio::test]
    async fn clone_commands_send_normalized_mac() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(query_param("params", "kAABBCCDDEEFF"))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&mock_server)
            .await;

        let controller = controller_for(&mock_server);
        controller.add_clone("aa:bb:cc:dd:ee:ff").await.unwrap();
    }
}
