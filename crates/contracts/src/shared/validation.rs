//! Client-side form validation
//!
//! Field-scoped checks that run before any request is issued. A non-empty
//! [`FieldErrors`] blocks submission; nothing here ever touches the network.

use std::collections::BTreeMap;

/// Mapping from field name to a human-readable error message.
///
/// Backed by a `BTreeMap` so error rendering order is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(|s| s.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Turn the accumulated errors into a `Result`, empty meaning valid.
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Synchronous, per-record validation run by the form controller before save.
pub trait Validate {
    fn validate(&self) -> Result<(), FieldErrors>;
}

/// Required non-empty check (whitespace counts as empty).
pub fn check_required(errors: &mut FieldErrors, field: &'static str, value: &str, label: &str) {
    if value.trim().is_empty() {
        errors.push(field, format!("{label} is required"));
    }
}

/// Minimum length check, counted in characters, applied after trimming.
pub fn check_min_length(
    errors: &mut FieldErrors,
    field: &'static str,
    value: &str,
    min: usize,
    label: &str,
) {
    if value.trim().chars().count() < min {
        errors.push(field, format!("{label} must be at least {min} characters"));
    }
}

/// Letters and spaces only. Accepts any alphabetic character, not just ASCII,
/// so accented names pass.
pub fn check_letters_only(errors: &mut FieldErrors, field: &'static str, value: &str, label: &str) {
    let ok = !value.trim().is_empty()
        && value.chars().all(|c| c.is_alphabetic() || c.is_whitespace());
    if !ok {
        errors.push(
            field,
            format!("{label} must contain letters only, no digits or special characters"),
        );
    }
}

/// Shape check for email addresses: `local@domain.tld`, no spaces.
/// Deliberately loose — the server owns real validation.
pub fn check_email_shape(errors: &mut FieldErrors, field: &'static str, value: &str) {
    let value = value.trim();
    let valid = (|| {
        let (local, domain) = value.split_once('@')?;
        if local.is_empty() || value.contains(' ') || domain.contains('@') {
            return None;
        }
        let (host, tld) = domain.rsplit_once('.')?;
        (!host.is_empty() && tld.chars().count() >= 2).then_some(())
    })()
    .is_some();
    if !valid {
        errors.push(field, "Enter a valid email address".to_string());
    }
}

/// Strictly positive quantity check for numeric line-item fields.
pub fn check_positive(errors: &mut FieldErrors, field: &'static str, value: i64, label: &str) {
    if value <= 0 {
        errors.push(field, format!("{label} must be greater than zero"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank_and_whitespace() {
        let mut errors = FieldErrors::new();
        check_required(&mut errors, "name", "", "Name");
        check_required(&mut errors, "contact", "   ", "Contact");
        check_required(&mut errors, "advisor", "ok", "Advisor");
        assert_eq!(errors.len(), 2);
        assert!(errors.get("name").is_some());
        assert!(errors.get("contact").is_some());
        assert!(errors.get("advisor").is_none());
    }

    #[test]
    fn min_length_counts_characters() {
        let mut errors = FieldErrors::new();
        check_min_length(&mut errors, "password", "abcd", 5, "Password");
        assert!(errors.get("password").is_some());

        let mut ok = FieldErrors::new();
        check_min_length(&mut ok, "password", "abcde", 5, "Password");
        assert!(ok.is_empty());
    }

    #[test]
    fn letters_only_rejects_digits_and_symbols() {
        for bad in ["ann4", "a!b", "", "  "] {
            let mut errors = FieldErrors::new();
            check_letters_only(&mut errors, "name", bad, "Name");
            assert!(errors.get("name").is_some(), "expected rejection for {bad:?}");
        }
        for good in ["Ana", "María José", "Jean Luc"] {
            let mut errors = FieldErrors::new();
            check_letters_only(&mut errors, "name", good, "Name");
            assert!(errors.is_empty(), "expected acceptance for {good:?}");
        }
    }

    #[test]
    fn email_shape_matrix() {
        for bad in ["", "plain", "a@b", "@no-local.com", "a b@c.com", "a@b.c"] {
            let mut errors = FieldErrors::new();
            check_email_shape(&mut errors, "email", bad);
            assert!(errors.get("email").is_some(), "expected rejection for {bad:?}");
        }
        for good in ["user@example.com", "a.b+c@mail.example.org"] {
            let mut errors = FieldErrors::new();
            check_email_shape(&mut errors, "email", good);
            assert!(errors.is_empty(), "expected acceptance for {good:?}");
        }
    }

    #[test]
    fn first_message_per_field_wins() {
        let mut errors = FieldErrors::new();
        check_required(&mut errors, "name", "", "Name");
        check_min_length(&mut errors, "name", "", 3, "Name");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Name is required"));
    }

    #[test]
    fn positive_rejects_zero_and_negative() {
        let mut errors = FieldErrors::new();
        check_positive(&mut errors, "quantity", 0, "Quantity");
        assert!(errors.get("quantity").is_some());

        let mut ok = FieldErrors::new();
        check_positive(&mut ok, "quantity", 3, "Quantity");
        assert!(ok.is_empty());
    }
}
