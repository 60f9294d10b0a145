//! Building blocks shared by the blog, course and job modules.

mod flexible_date;
mod page;
mod patch_field;
mod publication_status;
mod required_fields;
mod search;
mod tags;

pub use flexible_date::FlexibleDate;
pub use page::{PageRequest, PageResult};
pub use patch_field::{InvalidField, PatchField};
pub use publication_status::PublicationStatus;
pub use required_fields::{MissingFields, RequiredFields};
pub use search::contains_pattern;
pub use tags::{normalize_tags, TagsInput};
