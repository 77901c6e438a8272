pub mod form_validation;
pub mod types;

pub use form_validation::*;
pub use types::*;
