// Client-side HTTP boundary for the contact form.
//
// One outbound operation exists: a single best-effort POST of the contact
// payload to the remote contact-us endpoint. Fully browser-based; there is
// no server-side component in this repo.

pub mod contact_client;
pub mod errors;
pub mod types;

// Re-export core types for easy access
pub use contact_client::{ContactClient, CONTACT_US_URL};
pub use errors::{ClientError, ClientResult};
pub use types::{ContactRequest, DEPARTMENT_NOT_APPLICABLE};
