pub mod comment;
pub mod page;
pub mod post;

use crate::error::AppError;

/// Path ids that are not integers name a record that cannot exist.
pub(crate) fn parse_id(raw: &str, not_found: &str) -> Result<i64, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(not_found.to_string()))
}
