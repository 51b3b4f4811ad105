use regex::Regex;
use std::{collections::BTreeSet, str::FromStr, sync::LazyLock};
use validator::{Validate, ValidationError, ValidationErrors};
use vkit_shared::contact::FieldRole;

use crate::FieldSpec;

/// Whitespace as browsers define it for `trim` and `\s`: Unicode space
/// separators, line terminators, tab/VT/FF and the BOM, but not U+0085.
const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    let part = format!("[^{WHITESPACE_CLASS}@]+");
    Regex::new(&format!(r"^{part}@{part}\.{part}$")).unwrap()
});
static RE_PHONE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").unwrap());
static RE_PHONE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!(r"[{WHITESPACE_CLASS}\-]")).unwrap());

fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Length of `value` once trimmed, in UTF-16 code units.
fn trimmed_len(value: &str) -> usize {
    value.trim_matches(is_form_whitespace).encode_utf16().count()
}

pub fn validate_name(name: &str) -> bool {
    trimmed_len(name) >= 2
}

pub fn validate_email(email: &str) -> bool {
    RE_EMAIL.is_match(email)
}

/// Indian mobile format: 10 digits starting with 6-9, spaces and hyphens ignored.
pub fn validate_phone(phone: &str) -> bool {
    RE_PHONE.is_match(&RE_PHONE_SEPARATORS.replace_all(phone, ""))
}

pub fn validate_message(message: &str) -> bool {
    trimmed_len(message) >= 10
}

pub fn validate_field(role: FieldRole, value: &str) -> bool {
    match role {
        FieldRole::Name => validate_name(value),
        FieldRole::Email => validate_email(value),
        FieldRole::Phone => validate_phone(value),
        FieldRole::Message => validate_message(value),
    }
}

/// Message shown when the field described by `spec` loses focus holding `value`.
pub fn blur_error(spec: FieldSpec, value: &str) -> Option<&'static str> {
    if !spec.required && value.is_empty() {
        return None;
    }

    (!validate_field(spec.role, value)).then(|| spec.role.blur_message())
}

fn check_name(name: &str) -> Result<(), ValidationError> {
    if !validate_name(name) {
        return Err(ValidationError::new("name_length")
            .with_message(FieldRole::Name.submit_message().into()));
    }

    Ok(())
}

fn check_phone(phone: &str) -> Result<(), ValidationError> {
    if !validate_phone(phone) {
        return Err(ValidationError::new("phone_format")
            .with_message(FieldRole::Phone.submit_message().into()));
    }

    Ok(())
}

fn check_message(message: &str) -> Result<(), ValidationError> {
    if !validate_message(message) {
        return Err(ValidationError::new("message_length")
            .with_message(FieldRole::Message.submit_message().into()));
    }

    Ok(())
}

/// Field values as read at submit time. `None` means the field is skipped:
/// either not bound on the form, or optional and left empty.
#[derive(Validate, Debug, Default)]
pub struct ContactInput {
    #[validate(custom(function = "check_name"))]
    pub name: Option<String>,
    #[validate(regex(path = *RE_EMAIL, message = "Please enter a valid email address"))]
    pub email: Option<String>,
    #[validate(custom(function = "check_phone"))]
    pub phone: Option<String>,
    #[validate(custom(function = "check_message"))]
    pub message: Option<String>,
}

impl ContactInput {
    pub fn set(&mut self, role: FieldRole, value: Option<String>) {
        match role {
            FieldRole::Name => self.name = value,
            FieldRole::Email => self.email = value,
            FieldRole::Phone => self.phone = value,
            FieldRole::Message => self.message = value,
        }
    }

    /// Roles whose value failed validation, empty when the input is valid.
    pub fn failing_roles(&self) -> BTreeSet<FieldRole> {
        match self.validate() {
            Ok(()) => BTreeSet::new(),
            Err(errors) => failing_roles(errors),
        }
    }
}

pub fn failing_roles(errors: ValidationErrors) -> BTreeSet<FieldRole> {
    errors
        .field_errors()
        .into_iter()
        .filter_map(|(field, _)| FieldRole::from_str(&field).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_requires_two_trimmed_characters() {
        assert!(validate_name("Al"));
        assert!(validate_name("  Al  "));
        assert!(!validate_name("A"));
        assert!(!validate_name("  A   "));
        assert!(!validate_name(""));
        assert!(validate_name("Jö"));
    }

    #[test]
    fn test_length_counts_utf16_units() {
        assert!(validate_name("😀"));
        assert!(!validate_name("é"));
        assert!(validate_message("😀😀😀😀😀"));
        assert!(!validate_message("😀😀😀😀"));
    }

    #[test]
    fn test_trim_strips_bom_but_not_next_line() {
        assert!(!validate_name("\u{feff}A"));
        assert!(!validate_name("\u{3000}A\u{2028}"));
        assert!(validate_name("\u{85}A"));
        assert!(!validate_message("\u{feff}123456789\u{feff}"));
    }

    #[test]
    fn test_message_requires_ten_trimmed_characters() {
        assert!(validate_message("0123456789"));
        assert!(validate_message("   0123456789   "));
        assert!(!validate_message("012345678"));
        assert!(!validate_message("     12345      "));
    }

    #[test]
    fn test_email_shape() {
        assert!(validate_email("a@b.co"));
        assert!(validate_email("first.last@mail.example.org"));
        assert!(!validate_email("a@b"));
        assert!(!validate_email("noatsign"));
        assert!(!validate_email("a b@c.de"));
        assert!(!validate_email("a@@b.co"));
        assert!(!validate_email(""));
        assert!(!validate_email("a\u{feff}b@c.de"));
        assert!(!validate_email("a@c\u{3000}d.de"));
        assert!(validate_email("a\u{85}b@c.de"));
    }

    #[test]
    fn test_phone_indian_mobile() {
        assert!(validate_phone("9876543210"));
        assert!(validate_phone("98765 43210"));
        assert!(validate_phone("987-654-3210"));
        assert!(validate_phone("6000000000"));
        assert!(!validate_phone("5876543210"));
        assert!(!validate_phone("98765432"));
        assert!(!validate_phone("98765432101"));
        assert!(!validate_phone("98765abcde"));
        assert!(!validate_phone("९८७६५४३२१०"));
        assert!(!validate_phone(""));
        assert!(validate_phone("98765\u{feff}43210"));
    }

    #[test]
    fn test_failing_roles_skips_absent_fields() {
        let input = ContactInput {
            name: Some("Ada Lovelace".to_owned()),
            email: Some("ada@b".to_owned()),
            phone: None,
            message: Some("I would like a quote".to_owned()),
        };

        assert_eq!(
            input.failing_roles().into_iter().collect::<Vec<_>>(),
            vec![FieldRole::Email]
        );
        assert!(ContactInput::default().failing_roles().is_empty());
    }

    #[test]
    fn test_failing_roles_reports_every_field() {
        let input = ContactInput {
            name: Some("A".to_owned()),
            email: Some("nope".to_owned()),
            phone: Some("123".to_owned()),
            message: Some("short".to_owned()),
        };

        assert_eq!(input.failing_roles().len(), 4);
    }
}
