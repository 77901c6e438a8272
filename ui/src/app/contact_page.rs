use dioxus::prelude::*;

use crate::components::forms::ContactFormComponent;
use crate::features::contact::{ContactAction, ContactFormState};

const CONTACT_PAGE_CSS: Asset = asset!("/assets/styling/contact_page.css");

#[component]
pub fn ContactPage() -> Element {
    // Consolidated state management for the single form instance
    let mut state = use_signal(ContactFormState::default);

    // Dispatch function for actions - using in-place reduction to preserve
    // Dioxus Signal reactivity
    let dispatch = EventHandler::new(move |action: ContactAction| {
        state.with_mut(|s| {
            s.reduce_in_place(action);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: CONTACT_PAGE_CSS }

        div {
            class: "contact-page-container",

            div {
                class: "get-in-touch",
                div {
                    class: "contact-badge",
                    "Contact us today"
                }
                h1 {
                    class: "contact-heading",
                    "Get in touch with us and ask your "
                    span { class: "heading-accent", "questions!" }
                }
            }

            div {
                class: "form-container",
                ContactFormComponent {
                    state: state,
                    dispatch: dispatch
                }
            }
        }
    }
}
