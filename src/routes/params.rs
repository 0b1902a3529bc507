use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_LIMIT: i64 = 20;
pub const MAX_LIMIT: i64 = 100;
pub const DEFAULT_DESCRIPTION_LENGTH: i64 = 200;

#[derive(Debug, Default, Clone, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    /// Page number, default 1
    pub page: Option<i64>,
    /// Rows per page, default 20, at most 100
    pub limit: Option<i64>,
    /// Characters of description to return, default 200
    pub description_length: Option<i64>,
}

impl Pagination {
    /// Returns `(page, limit, offset)`.
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(DEFAULT_PAGE).max(1);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        let offset = (page - 1).saturating_mul(limit);
        (page, limit, offset)
    }

    pub fn description_length(&self) -> i32 {
        self.description_length
            .unwrap_or(DEFAULT_DESCRIPTION_LENGTH)
            .clamp(0, i32::MAX as i64) as i32
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DescriptionQuery {
    /// Characters of description to return, default 200
    pub description_length: Option<i64>,
}

impl DescriptionQuery {
    pub fn description_length(&self) -> i32 {
        Pagination {
            description_length: self.description_length,
            ..Pagination::default()
        }
        .description_length()
    }
}

// Query extraction does not support `#[serde(flatten)]` with numeric fields,
// so the pagination fields are repeated here.
#[derive(Debug, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchQuery {
    pub query_string: Option<String>,
    /// `on` also matches against the description
    pub all_words: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
    pub description_length: Option<i64>,
}

impl SearchQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            limit: self.limit,
            description_length: self.description_length,
        }
    }

    pub fn matches_description(&self) -> bool {
        self.all_words.as_deref() == Some("on")
    }
}
