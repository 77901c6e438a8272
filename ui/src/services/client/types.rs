use serde::{Deserialize, Serialize};

use crate::features::contact::ContactFormState;

/// Sentinel sent in place of an empty department so the transmitted payload
/// never carries an empty value.
pub const DEPARTMENT_NOT_APPLICABLE: &str = "N/A";

/// Wire payload for the contact-us endpoint. Field names are camelCase on
/// the wire.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub your_name: String,
    pub email_address: String,
    pub subject: String,
    pub department: String,
    pub message: String,
}

impl ContactRequest {
    /// Build the outgoing payload from validated form state.
    pub fn from_state(state: &ContactFormState) -> Self {
        let department = if state.department.is_empty() {
            DEPARTMENT_NOT_APPLICABLE.to_string()
        } else {
            state.department.clone()
        };

        Self {
            your_name: state.your_name.clone(),
            email_address: state.email_address.clone(),
            subject: state.subject.clone(),
            department,
            message: state.message.clone(),
        }
    }
}
