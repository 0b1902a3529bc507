use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMeta {
    pub current_page: i64,
    pub current_page_size: i64,
    pub total_pages: i64,
    pub total_records: i64,
}

impl PaginationMeta {
    pub fn new(page: i64, limit: i64, total: i64) -> Self {
        Self {
            current_page: page,
            current_page_size: limit,
            total_pages: total_pages(total, limit),
            total_records: total,
        }
    }
}

/// `ceil(total / limit)`; a non-positive limit yields zero pages.
pub fn total_pages(total: i64, limit: i64) -> i64 {
    if limit <= 0 || total <= 0 {
        return 0;
    }
    (total + limit - 1) / limit
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Paginated<T> {
    #[serde(rename = "paginationMeta")]
    pub pagination_meta: PaginationMeta,
    pub rows: Vec<T>,
}

impl<T: Serialize> Paginated<T> {
    pub fn new(rows: Vec<T>, meta: PaginationMeta) -> Self {
        Self {
            pagination_meta: meta,
            rows,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct Rows<T> {
    pub rows: Vec<T>,
}

impl<T: Serialize> From<Vec<T>> for Rows<T> {
    fn from(rows: Vec<T>) -> Self {
        Self { rows }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorDetail {
    pub status: u16,
    pub code: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 20), 0);
        assert_eq!(total_pages(1, 20), 1);
        assert_eq!(total_pages(20, 20), 1);
        assert_eq!(total_pages(21, 20), 2);
        assert_eq!(total_pages(101, 7), 15);
    }

    #[test]
    fn total_pages_matches_ceil_for_a_range_of_inputs() {
        for total in 0..200_i64 {
            for limit in 1..30_i64 {
                let expected = (total as f64 / limit as f64).ceil() as i64;
                assert_eq!(total_pages(total, limit), expected, "total={total} limit={limit}");
            }
        }
    }

    #[test]
    fn meta_serializes_in_camel_case() {
        let meta = PaginationMeta::new(2, 10, 35);
        let json = serde_json::to_value(Paginated::new(vec![1, 2], meta)).unwrap();
        assert_eq!(json["paginationMeta"]["currentPage"], 2);
        assert_eq!(json["paginationMeta"]["currentPageSize"], 10);
        assert_eq!(json["paginationMeta"]["totalPages"], 4);
        assert_eq!(json["paginationMeta"]["totalRecords"], 35);
        assert_eq!(json["rows"].as_array().map(Vec::len), Some(2));
    }
}
