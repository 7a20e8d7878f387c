mod client;
mod error;
mod resource;

pub use error::RelayError;
pub use resource::*;

use crate::validation::rules::is_valid_email;
use client::{Client, SEND_PATH};
use log::*;

/// Responsible for delivering contact records through the third-party email
/// relay. Re-checks required fields and the sender address independently of
/// the form so both layers reject the same input.
///
pub struct Relay {
    settings: RelaySettings,
    client: Client,
}

impl Relay {
    /// Returns a new instance for the given settings.
    ///
    pub fn new(settings: RelaySettings) -> Relay {
        debug!(
            "Initializing email relay client for {} (configured: {})...",
            settings.base_url(),
            settings.status().is_configured
        );
        Relay {
            client: Client::new(settings.base_url()),
            settings,
        }
    }

    /// Returns a summary of the current settings without the public key.
    ///
    pub fn status(&self) -> RelayStatus {
        self.settings.status()
    }

    /// Merge new settings, rebuilding the HTTP client if the endpoint moved.
    ///
    pub fn update_settings(&mut self, update: RelaySettingsUpdate) -> &mut Self {
        let previous_url = self.settings.base_url().to_owned();
        self.settings.merge(update);
        if self.settings.base_url() != previous_url {
            self.client = Client::new(self.settings.base_url());
        }
        self
    }

    /// Send a contact record. Returns once the relay acknowledged delivery.
    ///
    pub async fn send_contact(&self, record: &ContactRecord) -> Result<(), RelayError> {
        if !self.settings.has_credentials() {
            return Err(RelayError::NotConfigured);
        }

        if record.name.is_empty() || record.email.is_empty() || record.message.is_empty() {
            return Err(RelayError::MissingFields);
        }
        if !is_valid_email(&record.email) {
            return Err(RelayError::InvalidEmail);
        }

        let body = SendRequest {
            service_id: self.settings.service_id.as_deref().unwrap_or_default(),
            template_id: self.settings.template_id.as_deref().unwrap_or_default(),
            user_id: self.settings.public_key.as_deref().unwrap_or_default(),
            template_params: TemplateParams::new(record, self.settings.to_email.as_deref()),
        };
        info!("Sending contact message from {}...", record.email);
        self.client.post(SEND_PATH, &body).await?;
        info!("Contact message sent.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fake::faker::internet::en::SafeEmail;
    use fake::faker::name::en::Name;
    use fake::uuid::UUIDv4;
    use fake::Fake;
    use httpmock::MockServer;
    use serde_json::json;
    use uuid::Uuid;

    fn settings(base_url: &str, public_key: &str) -> RelaySettings {
        RelaySettings {
            service_id: Some("service_portfolio".to_string()),
            template_id: Some("template_contact".to_string()),
            public_key: Some(public_key.to_string()),
            to_email: Some("owner@example.com".to_string()),
            base_url: Some(base_url.to_string()),
        }
    }

    #[tokio::test]
    async fn send_contact_success() -> Result<(), RelayError> {
        let key: Uuid = UUIDv4.fake();
        let name: String = Name().fake();
        let email: String = SafeEmail().fake();
        let record = ContactRecord::new(&name, &email, "", "Hello from the terminal");

        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST")
                    .path("/api/v1.0/email/send")
                    .json_body(json!({
                        "service_id": "service_portfolio",
                        "template_id": "template_contact",
                        "user_id": key.to_string(),
                        "template_params": {
                            "from_name": record.name,
                            "from_email": record.email,
                            "subject": "Message from portfolio",
                            "message": "Hello from the terminal",
                            "to_email": "owner@example.com",
                            "reply_to": record.email,
                        }
                    }));
                then.status(200).body("OK");
            })
            .await;

        let relay = Relay::new(settings(&server.base_url(), &key.to_string()));
        relay.send_contact(&record).await?;
        mock.assert_async().await;
        Ok(())
    }

    #[tokio::test]
    async fn send_contact_server_error() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/api/v1.0/email/send");
                then.status(400).body("The public key is invalid");
            })
            .await;

        let relay = Relay::new(settings(&server.base_url(), "bad-key"));
        let record = ContactRecord::new("Ada", "ada@example.com", "Hi", "Hello there");
        match relay.send_contact(&record).await {
            Err(RelayError::Status { status, message }) => {
                assert_eq!(status, 400);
                assert!(message.contains("public key"));
            }
            other => panic!("unexpected result: {:?}", other),
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn send_contact_not_configured() {
        let relay = Relay::new(RelaySettings::default());
        let record = ContactRecord::new("Ada", "ada@example.com", "", "Hello there");
        assert!(matches!(
            relay.send_contact(&record).await,
            Err(RelayError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn send_contact_empty_key_not_configured() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST");
                then.status(200);
            })
            .await;

        let relay = Relay::new(settings(&server.base_url(), ""));
        let record = ContactRecord::new("Ada", "ada@example.com", "", "Hello there");
        assert!(matches!(
            relay.send_contact(&record).await,
            Err(RelayError::NotConfigured)
        ));
        mock.assert_hits_async(0).await;
    }

    #[tokio::test]
    async fn send_contact_rejects_before_request() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST");
                then.status(200);
            })
            .await;
        let relay = Relay::new(settings(&server.base_url(), "key"));

        let missing = ContactRecord::new("Ada", "ada@example.com", "", "   ");
        assert!(matches!(
            relay.send_contact(&missing).await,
            Err(RelayError::MissingFields)
        ));

        let bad_email = ContactRecord::new("Ada", "a@b", "", "Hello there");
        assert!(matches!(
            relay.send_contact(&bad_email).await,
            Err(RelayError::InvalidEmail)
        ));
        mock.assert_hits_async(0).await;
    }

    #[test]
    fn update_settings_merges() {
        let mut relay = Relay::new(RelaySettings::default());
        assert!(!relay.status().is_configured);
        relay.update_settings(RelaySettingsUpdate {
            service_id: Some("service_1".to_string()),
            template_id: Some("template_1".to_string()),
            public_key: Some("key".to_string()),
            base_url: Some("http://localhost:9".to_string()),
            ..RelaySettingsUpdate::default()
        });
        assert!(relay.status().is_configured);
        assert_eq!(relay.client.base_url, "http://localhost:9");
    }
}
