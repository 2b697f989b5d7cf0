use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const MAX_LIMIT: u32 = 100;

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// Number of records to skip
    #[serde(default)]
    pub skip: u32,
    /// Maximum number of records to return
    #[serde(default = "default_limit")]
    #[param(minimum = 1, maximum = 100)]
    pub limit: u32,
}

fn default_limit() -> u32 {
    10
}

impl PaginationParams {
    #[cfg(test)]
    pub(crate) fn new(skip: u32, limit: u32) -> Self {
        Self { skip, limit }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.limit < 1 || self.limit > MAX_LIMIT {
            return Err(format!("limit must be between 1 and {}", MAX_LIMIT));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub skip: u32,
    pub limit: u32,
    pub page: u32,
    pub total_items: i64,
    pub total_pages: u32,
}

impl PaginationMeta {
    pub fn new(params: PaginationParams, total_items: i64) -> Self {
        let PaginationParams { skip, limit } = params;
        let (page, total_pages) = if limit == 0 {
            (1, 0)
        } else {
            let total = total_items.max(0) as u64;
            (skip / limit + 1, total.div_ceil(limit as u64) as u32)
        };

        Self {
            skip,
            limit,
            page,
            total_items,
            total_pages,
        }
    }
}

/// One page of results together with its position in the full result set
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedResponse<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

impl<T> PaginatedResponse<T> {
    pub fn new(data: Vec<T>, params: PaginationParams, total_items: i64) -> Self {
        Self {
            data,
            pagination: PaginationMeta::new(params, total_items),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.skip, 0);
        assert_eq!(params.limit, 10);
        assert!(params.validate().is_ok());
    }

    #[test]
    fn test_limit_bounds() {
        assert!(PaginationParams::new(0, 0).validate().is_err());
        assert!(PaginationParams::new(0, 1).validate().is_ok());
        assert!(PaginationParams::new(0, MAX_LIMIT).validate().is_ok());
        assert!(PaginationParams::new(0, MAX_LIMIT + 1).validate().is_err());
    }

    #[test]
    fn test_meta_rounds_pages_up() {
        let meta = PaginationMeta::new(PaginationParams::new(10, 10), 15);
        assert_eq!(meta.page, 2);
        assert_eq!(meta.total_pages, 2);
        assert_eq!(meta.total_items, 15);
    }

    #[test]
    fn test_meta_empty_set() {
        let meta = PaginationMeta::new(PaginationParams::new(0, 10), 0);
        assert_eq!(meta.page, 1);
        assert_eq!(meta.total_pages, 0);
    }

    #[test]
    fn test_meta_exact_multiple() {
        let meta = PaginationMeta::new(PaginationParams::new(0, 5), 20);
        assert_eq!(meta.total_pages, 4);
    }
}
