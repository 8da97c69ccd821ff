use serde::{Deserialize, Serialize};

/// One page of a server-side paginated collection.
///
/// `total_pages` is echoed by some endpoints only; consumers derive the page
/// count from `total` and `limit` instead of trusting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u64,
    pub limit: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_pages: Option<u64>,
}

impl<T> Default for PaginatedResponse<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: 1,
            limit: 0,
            total_pages: None,
        }
    }
}

/// Error payload returned by the API on non-2xx responses.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_response_without_total_pages() {
        let json = r#"{"items":[1,2,3],"total":47,"page":1,"limit":20}"#;
        let page: PaginatedResponse<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.items, vec![1, 2, 3]);
        assert_eq!(page.total, 47);
        assert_eq!(page.total_pages, None);
    }

    #[test]
    fn test_paginated_response_with_total_pages() {
        let json = r#"{"items":[],"total":0,"page":1,"limit":10,"totalPages":0}"#;
        let page: PaginatedResponse<u32> = serde_json::from_str(json).unwrap();
        assert_eq!(page.total_pages, Some(0));
    }

    #[test]
    fn test_error_body_message_optional() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.message, None);

        let body: ErrorBody =
            serde_json::from_str(r#"{"message":"Cannot delete: referenced elsewhere","statusCode":409}"#)
                .unwrap();
        assert_eq!(body.message.as_deref(), Some("Cannot delete: referenced elsewhere"));
    }
}
