#![allow(clippy::unwrap_used)]
// Integration tests for the domain clients against a mock reader.

use std::sync::Arc;

use serde_json::json;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use rfidctl_api::{
    Credentials, NetworkConfig, PeripheryConfig, RfidConfig, SystemCommands, TagIdentity,
    Transport, Verdict,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Arc<Transport>) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let transport = Transport::new(base_url, Credentials::new("admin", "admin")).unwrap();
    (server, Arc::new(transport))
}

fn smartboard_body(port_enable: serde_json::Value, port_depends: serde_json::Value) -> serde_json::Value {
    json!({
        "smartboard": {
            "enable": true,
            "port_enable": port_enable,
            "port_depends": port_depends,
        }
    })
}

// ── RF domain ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_continuous_scanning_returns_echo_unchanged() {
    let (server, transport) = setup().await;
    let rfid = RfidConfig::new(transport);

    let echo = json!({"infiniteinventory": true});
    Mock::given(method("GET"))
        .and(path("/rfidconfig"))
        .and(query_param("infiniteinventory", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&echo))
        .mount(&server)
        .await;

    let body = rfid.set_continuous_scanning(true).await.unwrap();
    assert_eq!(body, echo);
}

#[tokio::test]
async fn test_antenna_power_key_carries_channel() {
    let (server, transport) = setup().await;
    let rfid = RfidConfig::new(transport);

    Mock::given(method("GET"))
        .and(path("/rfidconfig"))
        .and(query_param("pwrant2", "27"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pwrant2": 27})))
        .expect(1)
        .mount(&server)
        .await;

    rfid.set_power_antenna(27, 2).await.unwrap();
}

#[tokio::test]
async fn test_enable_antenna_lowercase_bool() {
    let (server, transport) = setup().await;
    let rfid = RfidConfig::new(transport);

    Mock::given(method("GET"))
        .and(path("/rfidconfig"))
        .and(query_param("enant1", "false"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    rfid.set_enable_antenna(false, 1).await.unwrap();
}

// ── Periphery domain: verified relay writes ─────────────────────────

#[tokio::test]
async fn test_relay_enable_confirmed() {
    let (server, transport) = setup().await;
    let periphery = PeripheryConfig::new(transport);

    Mock::given(method("GET"))
        .and(path("/peripheryconfig"))
        .and(query_param("smartboard_port1_enable", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(smartboard_body(json!([true, false]), json!([1, 2]))),
        )
        .mount(&server)
        .await;

    let verdict = periphery.set_relay_enable(true, 1).await.unwrap();
    assert_eq!(verdict, Verdict::Confirmed);
}

#[tokio::test]
async fn test_relay_enable_mismatch_when_board_disagrees() {
    let (server, transport) = setup().await;
    let periphery = PeripheryConfig::new(transport);

    // Board echoes channel 2 still enabled despite the disable request.
    Mock::given(method("GET"))
        .and(path("/peripheryconfig"))
        .and(query_param("smartboard_port2_enable", "false"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(smartboard_body(json!([true, true]), json!([1, 2]))),
        )
        .mount(&server)
        .await;

    let verdict = periphery.set_relay_enable(false, 2).await.unwrap();
    assert_eq!(
        verdict,
        Verdict::Mismatch {
            expected: json!(false),
            actual: json!(true),
            channel: 2,
        }
    );
}

#[tokio::test]
async fn test_relay_antennas_verified_against_depends() {
    let (server, transport) = setup().await;
    let periphery = PeripheryConfig::new(transport);

    Mock::given(method("GET"))
        .and(path("/peripheryconfig"))
        .and(query_param("smartboard_port1_ants", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(smartboard_body(json!([true, true]), json!([1, 2]))),
        )
        .mount(&server)
        .await;

    let verdict = periphery.set_relay_antennas(2, 1).await.unwrap();
    assert_eq!(verdict, Verdict::Confirmed);
}

#[tokio::test]
async fn test_relay_antennas_mismatch_names_missing_value() {
    let (server, transport) = setup().await;
    let periphery = PeripheryConfig::new(transport);

    Mock::given(method("GET"))
        .and(path("/peripheryconfig"))
        .and(query_param("smartboard_port1_ants", "3"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(smartboard_body(json!([true, true]), json!([1, 2]))),
        )
        .mount(&server)
        .await;

    let verdict = periphery.set_relay_antennas(3, 1).await.unwrap();
    assert_eq!(
        verdict,
        Verdict::Mismatch {
            expected: json!(3),
            actual: json!([1, 2]),
            channel: 1,
        }
    );
}

#[tokio::test]
async fn test_relay_enable_without_smartboard_echo_is_decode_error() {
    let (server, transport) = setup().await;
    let periphery = PeripheryConfig::new(transport);

    Mock::given(method("GET"))
        .and(path("/peripheryconfig"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let result = periphery.set_relay_enable(true, 1).await;
    assert!(
        matches!(result, Err(rfidctl_api::Error::Decode { .. })),
        "got: {result:?}"
    );
}

// ── Tag identity domain ─────────────────────────────────────────────

#[tokio::test]
async fn test_rssi_filter_value_is_negated() {
    let (server, transport) = setup().await;
    let tags = TagIdentity::new(transport);

    Mock::given(method("GET"))
        .and(path("/tagidentity"))
        .and(query_param("rssi_filter_value", "-10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"rssi_filter_value": -10})))
        .expect(1)
        .mount(&server)
        .await;

    tags.set_rssi_filter_value(10).await.unwrap();
}

#[tokio::test]
async fn test_tag_list_uses_query_flag() {
    let (server, transport) = setup().await;
    let tags = TagIdentity::new(transport);

    Mock::given(method("GET"))
        .and(path("/tagidentity"))
        .and(query_param("taglist", "true"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"tags": [{"epc": "e2003412", "rssi": -52}]})),
        )
        .mount(&server)
        .await;

    let body = tags.get_tag_list().await.unwrap();
    assert_eq!(body["tags"][0]["epc"], "e2003412");
}

#[tokio::test]
async fn test_epc_filter_keys_carry_filter_id() {
    let (server, transport) = setup().await;
    let tags = TagIdentity::new(transport);

    Mock::given(method("GET"))
        .and(path("/tagidentity"))
        .and(query_param("epc_filter_enable2", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    tags.set_epc_filter_enable(true, 2).await.unwrap();
}

// ── Network domain ──────────────────────────────────────────────────

#[tokio::test]
async fn test_wifi_connect_carries_all_params() {
    let (server, transport) = setup().await;
    let net = NetworkConfig::new(transport);

    Mock::given(method("GET"))
        .and(path("/wificonnect"))
        .and(query_param("ssid", "warehouse"))
        .and(query_param("pass", "hunter2"))
        .and(query_param("safe", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"connecting": true})))
        .expect(1)
        .mount(&server)
        .await;

    net.connect_wifi("warehouse", "hunter2", true).await.unwrap();
}

#[tokio::test]
async fn test_wifi_scan() {
    let (server, transport) = setup().await;
    let net = NetworkConfig::new(transport);

    Mock::given(method("GET"))
        .and(path("/scan"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"networks": ["warehouse", "office"]})),
        )
        .mount(&server)
        .await;

    let body = net.scan_wifi().await.unwrap();
    assert_eq!(body["networks"][0], "warehouse");
}

// ── Control commands ────────────────────────────────────────────────

#[tokio::test]
async fn test_control_commands_hit_fixed_endpoints() {
    let (server, transport) = setup().await;
    let system = SystemCommands::new(transport);

    for endpoint in [
        "logout",
        "messagelog",
        "version",
        "reboot",
        "beepdevice",
        "inventory_once",
        "makedump",
        "relay1",
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/{endpoint}")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;
    }

    system.logout().await.unwrap();
    system.get_message_log().await.unwrap();
    system.get_version().await.unwrap();
    system.reboot().await.unwrap();
    system.beep().await.unwrap();
    system.inventory_once().await.unwrap();
    system.save_settings().await.unwrap();
    system.trigger_relay().await.unwrap();
}
