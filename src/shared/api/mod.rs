mod json_config;
mod path_id;
mod response;

pub use json_config::{custom_json_config, custom_query_config};
pub use path_id::parse_record_id;
pub use response::{ApiError, ApiResponse};
