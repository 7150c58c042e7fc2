/**
 * Blog Form Types
 */

use serde::Deserialize;

/// Article submission form
///
/// Both fields are required; empty strings are accepted.
#[derive(Deserialize, Debug)]
pub struct NewArticleForm {
    pub title: String,
    pub content: String,
}
