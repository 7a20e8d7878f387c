//! Validation rules and the built-in rule set.

use regex::Regex;
use std::fmt;
use std::sync::{Arc, OnceLock};

/// Pattern accepted by the email rule: one `@` and a dot after it, no
/// whitespace anywhere.
///
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const NO_EMPTY_SPACES_MESSAGE: &str = "Field cannot be empty or contain only spaces";

type Predicate = dyn Fn(&str) -> bool + Send + Sync;

/// A named predicate over a field value plus the message shown when it fails.
///
#[derive(Clone)]
pub struct Rule {
    name: String,
    message: String,
    predicate: Arc<Predicate>,
}

impl Rule {
    /// Return a new rule from a predicate returning true when the value is
    /// valid.
    ///
    pub fn new<P>(name: &str, message: &str, predicate: P) -> Self
    where
        P: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Rule {
            name: name.to_owned(),
            message: message.to_owned(),
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the rule against a value.
    ///
    pub fn check(&self, value: &str) -> bool {
        (self.predicate)(value)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("name", &self.name)
            .field("message", &self.message)
            .finish()
    }
}

fn email_regex() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"))
}

/// Return true if the value passes the permissive email check. Shared with
/// the relay so both layers agree on what a valid address is.
///
pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Single `@`, a dot after it, no whitespace. Not RFC validation.
///
pub fn email() -> Rule {
    Rule::new("email", EMAIL_MESSAGE, is_valid_email)
}

/// Value must have at least `length` characters.
///
pub fn min_length(length: usize) -> Rule {
    Rule::new(
        "min_length",
        &format!("Must be at least {} characters long", length),
        move |value| value.chars().count() >= length,
    )
}

/// Value must have at most `length` characters.
///
pub fn max_length(length: usize) -> Rule {
    Rule::new(
        "max_length",
        &format!("Must be no more than {} characters long", length),
        move |value| value.chars().count() <= length,
    )
}

/// Value must contain something other than whitespace.
///
pub fn no_empty_spaces() -> Rule {
    Rule::new("no_empty_spaces", NO_EMPTY_SPACES_MESSAGE, |value| {
        !value.trim().is_empty()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_accepts_and_rejects() {
        let rule = email();
        assert!(rule.check("user@example.com"));
        assert!(rule.check("a@b.c"));
        assert!(!rule.check("not-an-email"));
        assert!(!rule.check("a@b"));
        assert!(!rule.check("a b@example.com"));
        assert!(!rule.check("a@@example.com"));
        assert_eq!(rule.message(), "Please enter a valid email address");
    }

    #[test]
    fn min_length_boundary() {
        let rule = min_length(5);
        assert!(!rule.check("abcd"));
        assert!(rule.check("abcde"));
        assert_eq!(rule.message(), "Must be at least 5 characters long");
    }

    #[test]
    fn max_length_boundary() {
        let rule = max_length(3);
        assert!(rule.check("abc"));
        assert!(!rule.check("abcd"));
        assert_eq!(rule.message(), "Must be no more than 3 characters long");
    }

    #[test]
    fn length_counts_characters() {
        assert!(min_length(3).check("ñáé"));
        assert!(max_length(3).check("ñáé"));
    }

    #[test]
    fn no_empty_spaces_rejects_blank() {
        let rule = no_empty_spaces();
        assert!(!rule.check("   "));
        assert!(!rule.check("\t\n"));
        assert!(rule.check(" x "));
        assert_eq!(rule.message(), "Field cannot be empty or contain only spaces");
    }

    #[test]
    fn custom_rule() {
        let rule = Rule::new("digits", "Digits only", |v| v.chars().all(|c| c.is_ascii_digit()));
        assert!(rule.check("1234"));
        assert!(!rule.check("12a4"));
        assert_eq!(rule.name(), "digits");
    }
}
