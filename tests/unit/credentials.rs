//! Login and registration form rules.

use namekeys::model::{is_valid_email, CredentialsError, CredentialsForm};

fn form(email: &str, password: &str, confirm: Option<&str>) -> CredentialsForm {
    CredentialsForm {
        email: email.to_string(),
        password: password.to_string(),
        password_confirm: confirm.map(str::to_string),
    }
}

#[test]
fn email_addresses() {
    for valid in ["ana.pop@example.com", "a@b.co", "\"odd name\"@example.org", "x@[10.0.0.1]"] {
        assert!(is_valid_email(valid), "{valid}");
    }
    for invalid in ["", "ana", "ana@", "@example.com", "ana@example", "a b@example.com"] {
        assert!(!is_valid_email(invalid), "{invalid}");
    }
}

#[test]
fn login_rules() {
    assert_eq!(form("ana@example.com", "secret", None).validate_login(), Ok(()));
    assert_eq!(
        form("nope", "secret", None).validate_login(),
        Err(CredentialsError::EmailInvalid)
    );
    assert_eq!(
        form("ana@example.com", "", None).validate_login(),
        Err(CredentialsError::PasswordRequired)
    );
}

#[test]
fn registration_rules() {
    let ok = form("ana@example.com", "secret", Some("secret"));
    assert_eq!(ok.validate_registration(), Ok(()));

    let missing = form("ana@example.com", "secret", None);
    assert_eq!(missing.validate_registration(), Err(CredentialsError::ConfirmationRequired));

    let differ = form("ana@example.com", "secret", Some("secrets"));
    assert_eq!(differ.validate_registration(), Err(CredentialsError::PasswordsDiffer));
    assert_eq!(CredentialsError::PasswordsDiffer.to_string(), "Passwords must match");
}
