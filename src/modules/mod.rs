pub mod admin;
pub mod blog;
pub mod contact;
pub mod course;
pub mod email;
pub mod job;
