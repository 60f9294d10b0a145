pub mod api;
pub mod content;
