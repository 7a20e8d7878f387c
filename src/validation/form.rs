//! Per-form validation state.
//!
//! A [`Form`] owns one value slot per configured field and tracks whether the
//! user has interacted with it. Errors are only produced for touched fields or
//! when the whole form is validated on a submission attempt.

use super::error::FormError;
use super::rules::Rule;
use log::*;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Message used for required fields left empty.
///
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// A fixed set of field keys for one kind of form.
///
pub trait FormFields: Copy + Eq + Hash + Debug + Send + 'static {
    /// Every field of the form, in validation order.
    const ALL: &'static [Self];

    /// Input name of the field.
    fn name(&self) -> &'static str;

    /// Resolve an input name to its field.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|field| field.name() == name)
    }
}

/// Validation configuration for a single field.
///
#[derive(Clone, Debug, Default)]
pub struct FieldConfig {
    pub required: bool,
    pub rules: Vec<Rule>,
}

impl FieldConfig {
    /// Return a configuration for a field that must not be left empty.
    ///
    pub fn required() -> Self {
        FieldConfig {
            required: true,
            rules: vec![],
        }
    }

    /// Return a configuration for a field that may be left empty.
    ///
    pub fn optional() -> Self {
        FieldConfig::default()
    }

    /// Append a rule, evaluated after the ones already added.
    ///
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }
}

/// Immutable mapping from every field of `F` to its configuration.
///
#[derive(Clone, Debug)]
pub struct FormSchema<F: FormFields> {
    fields: HashMap<F, FieldConfig>,
}

impl<F: FormFields> FormSchema<F> {
    /// Build a schema by asking for the configuration of each field in
    /// `F::ALL`, so no field can be left unconfigured.
    ///
    pub fn new(configure: impl Fn(F) -> FieldConfig) -> Self {
        FormSchema {
            fields: F::ALL
                .iter()
                .map(|field| (*field, configure(*field)))
                .collect(),
        }
    }

    pub fn config(&self, field: F) -> Option<&FieldConfig> {
        self.fields.get(&field)
    }
}

/// Whether the user has interacted with a field yet.
///
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum Interaction {
    #[default]
    Untouched,
    Touched,
}

#[derive(Debug, Clone, Default)]
struct FieldState {
    value: String,
    interaction: Interaction,
    error: Option<String>,
}

/// Field values keyed by field.
///
pub type FormValues<F> = HashMap<F, String>;

/// Validation state for one form instance.
///
#[derive(Debug, Clone)]
pub struct Form<F: FormFields> {
    schema: FormSchema<F>,
    initial: FormValues<F>,
    fields: HashMap<F, FieldState>,
}

impl<F: FormFields> Form<F> {
    /// Return a new form with every field empty.
    ///
    pub fn new(schema: FormSchema<F>) -> Self {
        Form::with_values(schema, HashMap::new())
    }

    /// Return a new form starting from the given values. Fields missing from
    /// `values` start empty.
    ///
    pub fn with_values(schema: FormSchema<F>, values: FormValues<F>) -> Self {
        let initial: FormValues<F> = F::ALL
            .iter()
            .map(|field| (*field, values.get(field).cloned().unwrap_or_default()))
            .collect();
        let mut form = Form {
            schema,
            initial,
            fields: HashMap::new(),
        };
        form.reset();
        form
    }

    pub fn schema(&self) -> &FormSchema<F> {
        &self.schema
    }

    /// Get the current value of a field.
    ///
    pub fn value(&self, field: F) -> &str {
        self.fields
            .get(&field)
            .map(|state| state.value.as_str())
            .unwrap_or_default()
    }

    /// Get a copy of all current values.
    ///
    pub fn values(&self) -> FormValues<F> {
        self.fields
            .iter()
            .map(|(field, state)| (*field, state.value.clone()))
            .collect()
    }

    /// Get the displayed error of a field, if any. An empty message counts as
    /// no error.
    ///
    pub fn error(&self, field: F) -> Option<&str> {
        self.fields
            .get(&field)
            .and_then(|state| state.error.as_deref())
            .filter(|error| !error.is_empty())
    }

    /// Get every field that currently carries an error.
    ///
    pub fn errors(&self) -> HashMap<F, &str> {
        self.fields
            .iter()
            .filter_map(|(field, state)| match state.error.as_deref() {
                Some(error) if !error.is_empty() => Some((*field, error)),
                _ => None,
            })
            .collect()
    }

    pub fn interaction(&self, field: F) -> Interaction {
        self.fields
            .get(&field)
            .map(|state| state.interaction)
            .unwrap_or_default()
    }

    pub fn is_touched(&self, field: F) -> bool {
        self.interaction(field) == Interaction::Touched
    }

    /// Get the touched fields in form order.
    ///
    pub fn touched(&self) -> Vec<F> {
        F::ALL
            .iter()
            .copied()
            .filter(|field| self.is_touched(*field))
            .collect()
    }

    /// True when no configured field carries a non-empty error.
    ///
    pub fn is_valid(&self) -> bool {
        F::ALL
            .iter()
            .all(|field| self.error(*field).map_or(true, str::is_empty))
    }

    /// Store a new value. Touched fields are re-validated right away; untouched
    /// fields stay silent until their first interaction.
    ///
    pub fn set_value(&mut self, field: F, value: &str) -> &mut Self {
        let state = self.fields.entry(field).or_default();
        state.value = value.to_owned();
        if state.interaction == Interaction::Touched {
            self.validate_field(field);
        }
        self
    }

    /// Store a value for the field with the given input name.
    ///
    pub fn handle_change(&mut self, name: &str, value: &str) -> Result<&mut Self, FormError> {
        let field = F::from_name(name).ok_or_else(|| FormError::UnknownField(name.to_owned()))?;
        Ok(self.set_value(field, value))
    }

    /// Mark a field as touched and validate it.
    ///
    pub fn touch(&mut self, field: F) -> bool {
        self.fields.entry(field).or_default().interaction = Interaction::Touched;
        self.validate_field(field)
    }

    /// Validate one field, updating its error. Returns true if valid.
    ///
    pub fn validate_field(&mut self, field: F) -> bool {
        let error = match self.schema.config(field) {
            Some(config) => check(config, self.value(field)),
            None => {
                warn!("Validating unconfigured field {:?}.", field);
                None
            }
        };
        let valid = error.as_deref().map_or(true, str::is_empty);
        self.fields.entry(field).or_default().error = error;
        valid
    }

    /// Validate and touch every field so all errors become visible at once.
    /// Returns true only if every field is valid.
    ///
    pub fn validate_form(&mut self) -> bool {
        let mut valid = true;
        for field in F::ALL {
            if !self.validate_field(*field) {
                valid = false;
            }
            self.fields.entry(*field).or_default().interaction = Interaction::Touched;
        }
        debug!(
            "Validated form: {} ({} errors)",
            if valid { "valid" } else { "invalid" },
            self.errors().len()
        );
        valid
    }

    /// Restore initial values and clear every error and touched flag.
    ///
    pub fn reset(&mut self) -> &mut Self {
        self.fields = self
            .initial
            .iter()
            .map(|(field, value)| {
                (
                    *field,
                    FieldState {
                        value: value.clone(),
                        ..FieldState::default()
                    },
                )
            })
            .collect();
        self
    }
}

/// Run the field checks in order and return the first failure message.
///
fn check(config: &FieldConfig, value: &str) -> Option<String> {
    if value.trim().is_empty() {
        return if config.required {
            Some(REQUIRED_MESSAGE.to_owned())
        } else {
            None
        };
    }
    config
        .rules
        .iter()
        .find(|rule| !rule.check(value))
        .map(|rule| rule.message().to_owned())
}
