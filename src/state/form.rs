//! Contact form state types.
//!
//! This module contains the contact form's field keys, its validation schema,
//! and the submission status shown to the visitor.

use crate::relay::ContactRecord;
use crate::validation::{rules, FieldConfig, Form, FormFields, FormSchema};

/// Specifying contact form fields.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Return the placeholder shown while the field is empty.
    ///
    pub fn placeholder(&self) -> &'static str {
        match self {
            ContactField::Name => "Your Name",
            ContactField::Email => "Your Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Your Message",
        }
    }

    /// Return the next field, wrapping around.
    ///
    pub fn next(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Subject,
            ContactField::Subject => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    /// Return the previous field, wrapping around.
    ///
    pub fn previous(&self) -> ContactField {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Subject => ContactField::Email,
            ContactField::Message => ContactField::Subject,
        }
    }
}

impl FormFields for ContactField {
    const ALL: &'static [Self] = &[
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    fn name(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }
}

/// Specifying contact submission status.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Success,
    Error,
}

/// Build the contact form schema.
///
pub fn contact_schema() -> FormSchema<ContactField> {
    FormSchema::new(|field: ContactField| match field {
        ContactField::Name => FieldConfig::required()
            .rule(rules::no_empty_spaces())
            .rule(rules::max_length(100)),
        ContactField::Email => FieldConfig::required().rule(rules::email()),
        ContactField::Subject => FieldConfig::optional().rule(rules::max_length(150)),
        ContactField::Message => FieldConfig::required()
            .rule(rules::min_length(10))
            .rule(rules::max_length(2000)),
    })
}

/// Build the record handed to the relay from the current form values.
///
pub fn contact_record(form: &Form<ContactField>) -> ContactRecord {
    ContactRecord::new(
        form.value(ContactField::Name),
        form.value(ContactField::Email),
        form.value(ContactField::Subject),
        form.value(ContactField::Message),
    )
}
