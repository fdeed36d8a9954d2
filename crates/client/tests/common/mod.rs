//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock expectations (use wiremock directly in tests)

#[allow(unused_imports)]
pub use auditlog_client::{ActionType, AuditLogClient, ClientError, Event, Metadata};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

use secrecy::SecretString;

/// Path the mock events endpoint is mounted on.
#[allow(dead_code)]
pub const EVENTS_PATH: &str = "/events";

/// API key used by test clients.
#[allow(dead_code)]
pub const TEST_API_KEY: &str = "sk_test_123";

/// Build a client pointed at the mock server's events endpoint.
#[allow(dead_code)]
pub fn client_for(server: &MockServer, global_metadata: Metadata) -> AuditLogClient {
    AuditLogClient::builder()
        .endpoint(format!("{}{}", server.uri(), EVENTS_PATH))
        .api_key(SecretString::new(TEST_API_KEY.to_string().into()))
        .global_metadata(global_metadata)
        .build()
        .expect("test client should build")
}

/// A representative event with every required field set.
#[allow(dead_code)]
pub fn sample_event() -> Event {
    Event::new("document.viewed", ActionType::Create)
        .with_actor("Jairo Kunde", "user_01DGZ0FAXN978HCET66Q98QMTQ")
        .with_group("abstract.com")
        .with_location("55.27.223.26")
        .with_target("central.class", "doc_01DGZ0FAXP4HA4X0BVFKS0ZH4Y")
}
