pub mod contact_page;

pub use contact_page::ContactPage;
