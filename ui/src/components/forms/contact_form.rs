use dioxus::prelude::*;

use crate::components::{
    display::SubmissionNotice,
    inputs::{DepartmentSelect, InputType, MessageTextArea, ValidatedInput},
};
use crate::features::contact::{validate, ContactAction, ContactFormState};
use crate::services::client::{ContactClient, ContactRequest};
use crate::utils::validation::field_class;
use crate::{console_error, console_info, console_warn};

#[derive(Props, PartialEq, Clone)]
pub struct ContactFormComponentProps {
    pub state: Signal<ContactFormState>,
    pub dispatch: EventHandler<ContactAction>,
}

#[component]
pub fn ContactFormComponent(props: ContactFormComponentProps) -> Element {
    let state = props.state;
    let dispatch = props.dispatch;

    let submitting = !state().can_submit();

    rsx! {
        div {
            class: "contact-form",

            // Name and Email Row
            div {
                class: "name-email-row",

                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        "Your Name (*)"
                    }
                    ValidatedInput {
                        name: "yourName".to_string(),
                        value: state().your_name,
                        input_type: InputType::Text,
                        input_class: field_class(&state().errors.your_name).to_string(),
                        disabled: submitting,
                        on_change: move |data: String| {
                            dispatch.call(ContactAction::SetYourName(data));
                        }
                    }
                    if let Some(error) = state().errors.your_name {
                        p { class: "field-error", "{error}" }
                    }
                }

                div {
                    class: "input-section",
                    label {
                        class: "input-label",
                        "Your Email (*)"
                    }
                    ValidatedInput {
                        name: "emailAddress".to_string(),
                        value: state().email_address,
                        input_type: InputType::Text,
                        input_class: field_class(&state().errors.email_address).to_string(),
                        disabled: submitting,
                        on_change: move |data: String| {
                            dispatch.call(ContactAction::SetEmailAddress(data));
                        }
                    }
                    if let Some(error) = state().errors.email_address {
                        p { class: "field-error", "{error}" }
                    }
                }
            }

            // Subject
            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Subject (*)"
                }
                ValidatedInput {
                    name: "subject".to_string(),
                    value: state().subject,
                    input_type: InputType::Text,
                    input_class: field_class(&state().errors.subject).to_string(),
                    disabled: submitting,
                    on_change: move |data: String| {
                        dispatch.call(ContactAction::SetSubject(data));
                    }
                }
                if let Some(error) = state().errors.subject {
                    p { class: "field-error", "{error}" }
                }
            }

            // Department (optional, no validation)
            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Department"
                }
                DepartmentSelect {
                    value: state().department,
                    disabled: submitting,
                    on_change: move |data: String| {
                        dispatch.call(ContactAction::SetDepartment(data));
                    }
                }
            }

            // Message
            div {
                class: "input-section",
                label {
                    class: "input-label",
                    "Your Message (*)"
                }
                MessageTextArea {
                    name: "message".to_string(),
                    value: state().message,
                    rows: 7,
                    disabled: submitting,
                    on_change: move |data: String| {
                        dispatch.call(ContactAction::SetMessage(data));
                    }
                }
                if let Some(error) = state().errors.message {
                    p { class: "field-error", "{error}" }
                }
            }

            // Submit Button
            div {
                class: "button-section",
                button {
                    class: "submit-button",
                    disabled: submitting,
                    onclick: move |_| {
                        let current_state = state();

                        // Guard against overlapping submissions; the button
                        // is disabled on the same condition.
                        if !current_state.can_submit() {
                            return;
                        }

                        let errors = validate(&current_state);
                        let is_valid = errors.is_empty();
                        dispatch.call(ContactAction::SetValidationErrors(errors));
                        if !is_valid {
                            console_warn!("Contact form blocked by validation errors");
                            return;
                        }

                        let request = ContactRequest::from_state(&current_state);
                        dispatch.call(ContactAction::BeginSubmit);

                        spawn(async move {
                            let client = ContactClient::new();
                            match client.send_message(&request).await {
                                Ok(()) => {
                                    console_info!("Contact message sent");
                                    dispatch.call(ContactAction::SubmitSucceeded);
                                }
                                Err(e) => {
                                    console_error!("Contact submission failed: {}", e);
                                    dispatch.call(ContactAction::SubmitFailed);
                                }
                            }
                        });
                    },
                    if submitting {
                        "Sending..."
                    } else {
                        "Submit"
                    }
                }
            }

            // Submission Result
            SubmissionNotice {
                status: state().status,
                message: state().response_message
            }
        }
    }
}
