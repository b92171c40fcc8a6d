//! Pagination and sorting options, and their encoding into a request URL.
//!
//! The One API takes the sort key as the literal parameter name
//! (`?name=asc`), not a generic `sort=` parameter. Parameters are always
//! emitted in the order limit, page, offset, sort so identical options give
//! byte-identical URLs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Page size sent when the caller does not set one.
pub const DEFAULT_LIMIT: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort by `key` in `order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sort {
    pub key: String,
    pub order: SortOrder,
}

impl Sort {
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            order: SortOrder::Asc,
        }
    }

    pub fn desc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            order: SortOrder::Desc,
        }
    }
}

/// Query options for list endpoints. Every field is optional; an unset
/// `limit` becomes `DEFAULT_LIMIT`, the others are left to the server.
///
/// Values are passed through unchecked, so a zero or negative limit reaches
/// the server as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    pub sort: Option<Sort>,
    pub limit: Option<i64>,
    pub page: Option<i64>,
    pub offset: Option<i64>,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_offset(mut self, offset: i64) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = Some(sort);
        self
    }

    /// The query string without the leading `?`.
    pub fn to_query(&self) -> String {
        let mut query = format!("limit={}", self.limit.unwrap_or(DEFAULT_LIMIT));
        if let Some(page) = self.page {
            query.push_str(&format!("&page={page}"));
        }
        if let Some(offset) = self.offset {
            query.push_str(&format!("&offset={offset}"));
        }
        if let Some(sort) = &self.sort {
            query.push_str(&format!("&{}={}", urlencoding::encode(&sort.key), sort.order));
        }
        query
    }
}

/// Join `base_url`, `path` and the encoded options into a request URL.
///
/// `path` is expected to start with `/`. With no options the query is
/// exactly `limit=10`.
pub fn build_url(base_url: &str, path: &str, options: Option<&QueryOptions>) -> String {
    let query = match options {
        Some(options) => options.to_query(),
        None => format!("limit={DEFAULT_LIMIT}"),
    };
    format!("{base_url}{path}?{query}")
}
