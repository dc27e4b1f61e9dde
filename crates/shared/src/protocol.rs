use serde::{Deserialize, Serialize};

use crate::domain::PhotoId;

pub const PHOTOS_ROUTE: &str = "/photos";
pub const COMMENTS_ROUTE: &str = "/comments";

pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentsQuery {
    pub photo_id: PhotoId,
}

/// Body of an action-button POST. `photo_id` is `null` when the button's
/// `data-id` is not numeric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRequest {
    pub photo_id: Option<serde_json::Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionTotal {
    pub total: serde_json::Number,
}
