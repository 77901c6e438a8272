use dioxus::prelude::*;

use crate::features::contact::SubmissionStatus;

#[derive(Props, PartialEq, Clone)]
pub struct SubmissionNoticeProps {
    pub status: SubmissionStatus,
    pub message: String,
}

/// Banner under the form reflecting the outcome of the last submission.
/// Empty until a submission resolves; `BeginSubmit` clears the message again.
#[component]
pub fn SubmissionNotice(props: SubmissionNoticeProps) -> Element {
    if props.message.is_empty() {
        return rsx! {};
    }

    match props.status {
        SubmissionStatus::Succeeded => rsx! {
            div {
                class: "submission-notice success",
                "✓ {props.message}"
            }
        },
        SubmissionStatus::Failed => rsx! {
            div {
                class: "submission-notice error",
                "✗ {props.message}"
            }
        },
        _ => rsx! {},
    }
}
