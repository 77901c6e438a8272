// Core types for the contact form - no dioxus imports needed here

/// Coarse lifecycle of the outstanding submit attempt.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum SubmissionStatus {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Per-field validation error messages. A `Some` means the field currently
/// fails validation. `department` is optional and never validated, so it has
/// no slot here.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct ValidationErrors {
    pub your_name: Option<String>,
    pub email_address: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.your_name.is_none()
            && self.email_address.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

// Action enum for state mutations
#[derive(Clone, Debug)]
pub enum ContactAction {
    // Field setters - merge only, no validation side effect
    SetYourName(String),
    SetEmailAddress(String),
    SetSubject(String),
    SetDepartment(String),
    SetMessage(String),

    // Validation result
    SetValidationErrors(ValidationErrors),

    // Submission lifecycle
    BeginSubmit,
    SubmitSucceeded,
    SubmitFailed,
}

/// All state owned by the contact form: field values, validation errors,
/// and the submission lifecycle.
#[derive(Clone, PartialEq, Debug)]
pub struct ContactFormState {
    pub your_name: String,
    pub email_address: String,
    pub subject: String,
    pub department: String,
    pub message: String,

    pub errors: ValidationErrors,
    pub status: SubmissionStatus,
    pub response_message: String,
}

impl Default for ContactFormState {
    fn default() -> Self {
        Self {
            your_name: String::new(),
            email_address: String::new(),
            subject: String::new(),
            department: String::new(),
            message: String::new(),
            errors: ValidationErrors::default(),
            status: SubmissionStatus::Idle,
            response_message: String::new(),
        }
    }
}

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to send the message. Please try again.";

impl ContactFormState {
    /// A new submission may start only when no request is in flight. The
    /// submit button is disabled on this same condition, so an overlapping
    /// second submit is a no-op.
    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Submitting
    }

    fn clear_fields(&mut self) {
        self.your_name.clear();
        self.email_address.clear();
        self.subject.clear();
        self.department.clear();
        self.message.clear();
    }

    /// Reduce an action into state in place, preserving Dioxus Signal
    /// reactivity when called through `Signal::with_mut`.
    pub fn reduce_in_place(&mut self, action: ContactAction) {
        match action {
            ContactAction::SetYourName(value) => {
                self.your_name = value;
            }
            ContactAction::SetEmailAddress(value) => {
                self.email_address = value;
            }
            ContactAction::SetSubject(value) => {
                self.subject = value;
            }
            ContactAction::SetDepartment(value) => {
                self.department = value;
            }
            ContactAction::SetMessage(value) => {
                self.message = value;
            }

            ContactAction::SetValidationErrors(errors) => {
                self.errors = errors;
            }

            ContactAction::BeginSubmit => {
                self.status = SubmissionStatus::Submitting;
                self.response_message.clear();
            }
            ContactAction::SubmitSucceeded => {
                self.status = SubmissionStatus::Succeeded;
                self.response_message = SUCCESS_MESSAGE.to_string();
                self.errors = ValidationErrors::default();
                self.clear_fields();
            }
            ContactAction::SubmitFailed => {
                // Fields are kept so the user can retry without retyping.
                self.status = SubmissionStatus::Failed;
                self.response_message = FAILURE_MESSAGE.to_string();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_state() -> ContactFormState {
        let mut state = ContactFormState::default();
        state.your_name = "Ada Lovelace".to_string();
        state.email_address = "ada@example.com".to_string();
        state.subject = "Booking question".to_string();
        state.department = "Sales".to_string();
        state.message = "Do you have weekend rates?".to_string();
        state
    }

    #[test]
    fn test_field_setters_merge_without_touching_status() {
        let mut state = ContactFormState::default();

        state.reduce_in_place(ContactAction::SetYourName("Ada".to_string()));
        state.reduce_in_place(ContactAction::SetEmailAddress("ada@example.com".to_string()));
        state.reduce_in_place(ContactAction::SetDepartment("Support".to_string()));

        assert_eq!(state.your_name, "Ada");
        assert_eq!(state.email_address, "ada@example.com");
        assert_eq!(state.department, "Support");
        assert_eq!(state.status, SubmissionStatus::Idle);
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_begin_submit_clears_previous_response_message() {
        let mut state = filled_state();
        state.response_message = FAILURE_MESSAGE.to_string();

        state.reduce_in_place(ContactAction::BeginSubmit);

        assert_eq!(state.status, SubmissionStatus::Submitting);
        assert!(state.response_message.is_empty());
        // Field values survive entering the submitting state
        assert_eq!(state.your_name, "Ada Lovelace");
    }

    #[test]
    fn test_success_resets_all_fields() {
        let mut state = filled_state();
        state.reduce_in_place(ContactAction::BeginSubmit);
        state.reduce_in_place(ContactAction::SubmitSucceeded);

        assert_eq!(state.status, SubmissionStatus::Succeeded);
        assert_eq!(state.response_message, SUCCESS_MESSAGE);
        assert!(state.your_name.is_empty());
        assert!(state.email_address.is_empty());
        assert!(state.subject.is_empty());
        assert!(state.department.is_empty());
        assert!(state.message.is_empty());
        assert!(state.errors.is_empty());
    }

    #[test]
    fn test_failure_preserves_fields_for_retry() {
        let mut state = filled_state();
        let before = state.clone();

        state.reduce_in_place(ContactAction::BeginSubmit);
        state.reduce_in_place(ContactAction::SubmitFailed);

        assert_eq!(state.status, SubmissionStatus::Failed);
        assert_eq!(state.response_message, FAILURE_MESSAGE);
        assert_eq!(state.your_name, before.your_name);
        assert_eq!(state.email_address, before.email_address);
        assert_eq!(state.subject, before.subject);
        assert_eq!(state.department, before.department);
        assert_eq!(state.message, before.message);
    }

    #[test]
    fn test_second_submit_is_blocked_while_in_flight() {
        let mut state = filled_state();
        assert!(state.can_submit());

        state.reduce_in_place(ContactAction::BeginSubmit);
        assert!(!state.can_submit());

        state.reduce_in_place(ContactAction::SubmitFailed);
        assert!(state.can_submit());

        state.reduce_in_place(ContactAction::BeginSubmit);
        state.reduce_in_place(ContactAction::SubmitSucceeded);
        assert!(state.can_submit());
    }
}
