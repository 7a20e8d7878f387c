use crate::relay::{ContactRecord, Relay};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    SendContact(ContactRecord),
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    relay: &'a Relay,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, relay: &'a Relay) -> Self {
        Handler { state, relay }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::SendContact(record) => self.send_contact(record).await?,
        }
        Ok(())
    }

    /// Deliver a contact message and report the outcome to state.
    ///
    async fn send_contact(&mut self, record: ContactRecord) -> Result<()> {
        let result = self.relay.send_contact(&record).await;
        let mut state = self.state.lock().await;
        match result {
            Ok(()) => {
                state.on_submit_success();
                Ok(())
            }
            Err(err) => {
                state.on_submit_failure(err.to_string());
                Err(err.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::relay::RelaySettings;
    use crate::state::{ContactField, SubmitStatus};
    use httpmock::MockServer;

    fn relay(base_url: &str) -> Relay {
        Relay::new(RelaySettings {
            service_id: Some("service_portfolio".to_string()),
            template_id: Some("template_contact".to_string()),
            public_key: Some("public_key".to_string()),
            to_email: None,
            base_url: Some(base_url.to_string()),
        })
    }

    fn record() -> ContactRecord {
        ContactRecord::new("Ada", "ada@example.com", "", "Hello there, friend")
    }

    #[tokio::test]
    async fn send_contact_success_resets_form() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/api/v1.0/email/send");
                then.status(200).body("OK");
            })
            .await;
        let relay = relay(&server.base_url());
        let state = Arc::new(Mutex::new(State::default()));
        state
            .lock()
            .await
            .change_field("name", "Ada")
            .expect("known field");

        let mut handler = Handler::new(&state, &relay);
        handler
            .handle(Event::SendContact(record()))
            .await
            .expect("send succeeds");

        mock.assert_async().await;
        let state = state.lock().await;
        assert_eq!(state.get_submit_status(), SubmitStatus::Success);
        assert_eq!(state.get_contact_form().value(ContactField::Name), "");
    }

    #[tokio::test]
    async fn send_contact_failure_reports_error() {
        let server = MockServer::start();
        let mock = server
            .mock_async(|when, then| {
                when.method("POST").path("/api/v1.0/email/send");
                then.status(500).body("Service unavailable");
            })
            .await;
        let relay = relay(&server.base_url());
        let state = Arc::new(Mutex::new(State::default()));
        state
            .lock()
            .await
            .change_field("name", "Ada")
            .expect("known field");

        let mut handler = Handler::new(&state, &relay);
        assert!(handler.handle(Event::SendContact(record())).await.is_err());

        mock.assert_async().await;
        let state = state.lock().await;
        assert_eq!(state.get_submit_status(), SubmitStatus::Error);
        assert!(state
            .get_submit_error()
            .map_or(false, |reason| reason.contains("Service unavailable")));
        assert_eq!(state.get_contact_form().value(ContactField::Name), "Ada");
    }
}
