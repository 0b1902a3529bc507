use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct PostReviewRequest {
    pub review: String,
    pub rating: i16,
}
