use actix_web::HttpResponse;
use uuid::Uuid;

use crate::shared::api::ApiResponse;

/// Parses a record id taken from the URL path.
///
/// Ids that are not UUIDs answer 400 with the caller's code, before any
/// storage access happens.
pub fn parse_record_id(raw: &str, code: &str, message: &str) -> Result<Uuid, HttpResponse> {
    Uuid::parse_str(raw.trim()).map_err(|_| ApiResponse::bad_request(code, message))
}
