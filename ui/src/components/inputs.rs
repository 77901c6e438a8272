//! Input components for the contact form

use dioxus::prelude::*;

#[derive(PartialEq, Clone, Debug)]
pub enum InputType {
    Text,
    Email,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct ValidatedInputProps {
    pub name: String,
    pub value: String,
    pub input_type: InputType,
    pub input_class: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

/// Controlled single-line input. Validation itself lives with the form
/// state; this component only reports value changes upward.
#[component]
pub fn ValidatedInput(props: ValidatedInputProps) -> Element {
    rsx! {
        input {
            class: "{props.input_class}",
            name: "{props.name}",
            r#type: "{props.input_type.as_str()}",
            value: "{props.value}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct MessageTextAreaProps {
    pub name: String,
    pub value: String,
    pub rows: u32,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

#[component]
pub fn MessageTextArea(props: MessageTextAreaProps) -> Element {
    rsx! {
        textarea {
            class: "input-field input-textarea",
            name: "{props.name}",
            rows: "{props.rows}",
            value: "{props.value}",
            disabled: props.disabled,
            oninput: move |event| props.on_change.call(event.value())
        }
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct DepartmentSelectProps {
    pub value: String,
    pub disabled: bool,
    pub on_change: EventHandler<String>,
}

/// Department picker. The empty option is the "no department" sentinel; the
/// submission payload replaces it with "N/A".
#[component]
pub fn DepartmentSelect(props: DepartmentSelectProps) -> Element {
    rsx! {
        select {
            class: "input-field input-select",
            name: "department",
            value: "{props.value}",
            disabled: props.disabled,
            onchange: move |event| props.on_change.call(event.value()),

            option { value: "", "Select Department" }
            option { value: "Sales", "Sales" }
            option { value: "Support", "Support" }
            option { value: "General", "General" }
        }
    }
}
