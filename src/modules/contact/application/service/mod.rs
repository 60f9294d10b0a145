mod submit_contact_service;

pub use submit_contact_service::{ContactInbox, SubmitContactService};
