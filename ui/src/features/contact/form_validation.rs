use crate::features::contact::types::{ContactFormState, ValidationErrors};

/// Loose syntactic email check: a non-empty local part, a single `@`, and a
/// dotted domain. Deliberately not RFC 5322; it mirrors the classic
/// `\S+@\S+\.\S+` shape.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    if email.is_empty() || email.contains(char::is_whitespace) {
        return false;
    }

    let Some((local_part, domain_part)) = email.split_once('@') else {
        return false;
    };
    if local_part.is_empty() {
        return false;
    }

    match domain_part.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Validates all required contact form fields. Returns an error mapping with
/// entries only for fields that currently fail; `department` is optional and
/// never produces an error.
pub fn validate(state: &ContactFormState) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if state.your_name.trim().is_empty() {
        errors.your_name = Some("Name is required".to_string());
    }

    if state.email_address.trim().is_empty() {
        errors.email_address = Some("Email is required".to_string());
    } else if !is_valid_email(&state.email_address) {
        errors.email_address = Some("Email is not valid".to_string());
    }

    if state.subject.trim().is_empty() {
        errors.subject = Some("Subject is required".to_string());
    }

    if state.message.trim().is_empty() {
        errors.message = Some("Please ask your question".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_state() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.your_name = "Ada Lovelace".to_string();
        state.email_address = "ada@example.com".to_string();
        state.subject = "Booking question".to_string();
        state.message = "Do you have weekend rates?".to_string();
        state
    }

    #[test]
    fn test_all_fields_empty_reports_every_required_field() {
        let errors = validate(&ContactFormState::default());

        assert!(!errors.is_empty());
        assert_eq!(errors.your_name.as_deref(), Some("Name is required"));
        assert_eq!(errors.email_address.as_deref(), Some("Email is required"));
        assert_eq!(errors.subject.as_deref(), Some("Subject is required"));
        assert_eq!(errors.message.as_deref(), Some("Please ask your question"));
    }

    #[test]
    fn test_valid_state_has_no_errors() {
        assert!(validate(&valid_state()).is_empty());
    }

    #[test]
    fn test_each_missing_required_field_errors_alone() {
        let mut state = valid_state();
        state.your_name = "   ".to_string();
        let errors = validate(&state);
        assert_eq!(errors.your_name.as_deref(), Some("Name is required"));
        assert!(errors.email_address.is_none());
        assert!(errors.subject.is_none());
        assert!(errors.message.is_none());

        let mut state = valid_state();
        state.subject.clear();
        let errors = validate(&state);
        assert_eq!(errors.subject.as_deref(), Some("Subject is required"));
        assert!(errors.your_name.is_none());
        assert!(errors.message.is_none());

        let mut state = valid_state();
        state.message.clear();
        let errors = validate(&state);
        assert_eq!(errors.message.as_deref(), Some("Please ask your question"));
        assert!(errors.subject.is_none());
    }

    #[test]
    fn test_department_is_never_validated() {
        // Empty department on an otherwise valid form
        let state = valid_state();
        assert!(state.department.is_empty());
        assert!(validate(&state).is_empty());
    }

    #[test]
    fn test_malformed_email_fails_with_specific_message() {
        let mut state = valid_state();
        state.email_address = "not-an-email".to_string();

        let errors = validate(&state);
        assert_eq!(errors.email_address.as_deref(), Some("Email is not valid"));
        assert!(errors.your_name.is_none());
        assert!(errors.subject.is_none());
        assert!(errors.message.is_none());
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("ada.lovelace@mail.example.com"));

        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada lovelace@example.com"));
        assert!(!is_valid_email(""));
    }
}
