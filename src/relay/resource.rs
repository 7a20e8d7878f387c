use serde::{Deserialize, Serialize};

/// Subject used when the visitor leaves it empty.
///
pub const DEFAULT_SUBJECT: &str = "Message from portfolio";

/// Default relay endpoint host.
///
pub const DEFAULT_BASE_URL: &str = "https://api.emailjs.com";

const PLACEHOLDER_SERVICE_ID: &str = "YOUR_SERVICE_ID";
const PLACEHOLDER_TEMPLATE_ID: &str = "YOUR_TEMPLATE_ID";
const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

/// Defines contact record handed to the relay.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactRecord {
    /// Return a record with every field trimmed and the subject defaulted
    /// when empty.
    ///
    pub fn new(name: &str, email: &str, subject: &str, message: &str) -> Self {
        let subject = match subject.trim() {
            "" => DEFAULT_SUBJECT,
            trimmed => trimmed,
        };
        ContactRecord {
            name: name.trim().to_owned(),
            email: email.trim().to_owned(),
            subject: subject.to_owned(),
            message: message.trim().to_owned(),
        }
    }
}

/// Defines relay credentials and endpoint.
///
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelaySettings {
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub template_id: Option<String>,
    #[serde(default)]
    pub public_key: Option<String>,
    #[serde(default)]
    pub to_email: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl RelaySettings {
    /// Return settings holding placeholder credentials, written to new
    /// configuration files for the owner to fill in.
    ///
    pub fn placeholder() -> Self {
        RelaySettings {
            service_id: Some(PLACEHOLDER_SERVICE_ID.to_string()),
            template_id: Some(PLACEHOLDER_TEMPLATE_ID.to_string()),
            public_key: Some(PLACEHOLDER_PUBLIC_KEY.to_string()),
            to_email: None,
            base_url: None,
        }
    }

    /// Return the endpoint host, falling back to the public relay.
    ///
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Return true if every credential is present, regardless of whether it
    /// is still a placeholder.
    ///
    pub fn has_credentials(&self) -> bool {
        [&self.service_id, &self.template_id, &self.public_key]
            .iter()
            .all(|value| value.as_deref().map_or(false, |v| !v.is_empty()))
    }

    /// Merge a partial update, keeping current values for unset fields.
    ///
    pub fn merge(&mut self, update: RelaySettingsUpdate) -> &mut Self {
        if update.service_id.is_some() {
            self.service_id = update.service_id;
        }
        if update.template_id.is_some() {
            self.template_id = update.template_id;
        }
        if update.public_key.is_some() {
            self.public_key = update.public_key;
        }
        if update.to_email.is_some() {
            self.to_email = update.to_email;
        }
        if update.base_url.is_some() {
            self.base_url = update.base_url;
        }
        self
    }

    /// Return a summary safe to display: no public key.
    ///
    pub fn status(&self) -> RelayStatus {
        let real = |value: &Option<String>, placeholder: &str| {
            value
                .as_deref()
                .map_or(false, |v| !v.is_empty() && v != placeholder)
        };
        RelayStatus {
            is_configured: real(&self.service_id, PLACEHOLDER_SERVICE_ID)
                && real(&self.template_id, PLACEHOLDER_TEMPLATE_ID)
                && real(&self.public_key, PLACEHOLDER_PUBLIC_KEY),
            service_id: self.service_id.clone(),
            template_id: self.template_id.clone(),
            to_email: self.to_email.clone(),
        }
    }
}

/// Partial relay settings update.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelaySettingsUpdate {
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
    pub to_email: Option<String>,
    pub base_url: Option<String>,
}

/// Defines relay configuration summary.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RelayStatus {
    pub is_configured: bool,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub to_email: Option<String>,
}

/// Parameters filled into the relay's email template.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateParams {
    pub from_name: String,
    pub from_email: String,
    pub subject: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_email: Option<String>,
    pub reply_to: String,
}

impl TemplateParams {
    pub fn new(record: &ContactRecord, to_email: Option<&str>) -> Self {
        TemplateParams {
            from_name: record.name.clone(),
            from_email: record.email.clone(),
            subject: record.subject.clone(),
            message: record.message.clone(),
            to_email: to_email.map(str::to_owned),
            reply_to: record.email.clone(),
        }
    }
}

/// Body of a send request.
///
#[derive(Clone, Debug, Serialize)]
pub(super) struct SendRequest<'a> {
    pub service_id: &'a str,
    pub template_id: &'a str,
    pub user_id: &'a str,
    pub template_params: TemplateParams,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contact_record_trims_and_defaults_subject() {
        let record = ContactRecord::new("  Ada ", " ada@example.com ", "   ", " Hello there \n");
        assert_eq!(record.name, "Ada");
        assert_eq!(record.email, "ada@example.com");
        assert_eq!(record.subject, "Message from portfolio");
        assert_eq!(record.message, "Hello there");
    }

    #[test]
    fn contact_record_keeps_subject() {
        let record = ContactRecord::new("Ada", "ada@example.com", " Hiring ", "Hello");
        assert_eq!(record.subject, "Hiring");
    }

    #[test]
    fn status_treats_placeholders_as_unconfigured() {
        let settings = RelaySettings {
            service_id: Some("YOUR_SERVICE_ID".to_string()),
            template_id: Some("template_1".to_string()),
            public_key: Some("key".to_string()),
            ..RelaySettings::default()
        };
        assert!(settings.has_credentials());
        assert!(!settings.status().is_configured);
    }

    #[test]
    fn status_when_configured() {
        let settings = RelaySettings {
            service_id: Some("service_1".to_string()),
            template_id: Some("template_1".to_string()),
            public_key: Some("key".to_string()),
            to_email: Some("me@example.com".to_string()),
            base_url: None,
        };
        let status = settings.status();
        assert!(status.is_configured);
        assert_eq!(status.service_id.as_deref(), Some("service_1"));
        assert_eq!(status.to_email.as_deref(), Some("me@example.com"));
    }

    #[test]
    fn merge_keeps_unset_fields() {
        let mut settings = RelaySettings {
            service_id: Some("service_1".to_string()),
            template_id: Some("template_1".to_string()),
            ..RelaySettings::default()
        };
        settings.merge(RelaySettingsUpdate {
            template_id: Some("template_2".to_string()),
            public_key: Some("key".to_string()),
            ..RelaySettingsUpdate::default()
        });
        assert_eq!(settings.service_id.as_deref(), Some("service_1"));
        assert_eq!(settings.template_id.as_deref(), Some("template_2"));
        assert_eq!(settings.public_key.as_deref(), Some("key"));
        assert_eq!(settings.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn template_params_reply_to_sender() {
        let record = ContactRecord::new("Ada", "ada@example.com", "", "Hello");
        let params = TemplateParams::new(&record, Some("me@example.com"));
        assert_eq!(params.reply_to, "ada@example.com");
        assert_eq!(params.to_email.as_deref(), Some("me@example.com"));
        let json = serde_json::to_value(TemplateParams::new(&record, None)).unwrap();
        assert!(json.get("to_email").is_none());
    }
}
