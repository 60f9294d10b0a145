mod submit_contact;

pub use submit_contact::{SubmitContactCommand, SubmitContactError, SubmitContactUseCase};
