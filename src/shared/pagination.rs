use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Anything other than `asc` sorts newest first.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(|s| s.trim().to_ascii_lowercase()) {
            Some(ref s) if s == "asc" => SortOrder::Asc,
            _ => SortOrder::Desc,
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    pub fn as_mongo(&self) -> i32 {
        match self {
            SortOrder::Asc => 1,
            SortOrder::Desc => -1,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Query-string DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListParams {
    /// 1-based page number
    pub page: Option<u64>,
    /// Page size, capped at 100
    pub limit: Option<u64>,
    pub sort_by: Option<String>,
    /// `asc` or `desc`
    pub order: Option<String>,
    pub search: Option<String>,
}

/// Normalized list request. `sort_by` is always one of the keys the
/// resource declared sortable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u64,
    pub limit: u64,
    pub sort_by: &'static str,
    pub order: SortOrder,
    pub search: Option<String>,
}

impl ListQuery {
    pub fn from_params(
        params: ListParams,
        sortable: &[&'static str],
        default_sort: &'static str,
    ) -> Self {
        let page = params.page.filter(|p| *p > 0).unwrap_or(1);
        let limit = params
            .limit
            .filter(|l| *l > 0)
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .min(MAX_PAGE_SIZE);

        let sort_by = params
            .sort_by
            .as_deref()
            .map(str::trim)
            .and_then(|wanted| sortable.iter().find(|key| **key == wanted).copied())
            .unwrap_or(default_sort);

        let search = params
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Self {
            page,
            limit,
            sort_by,
            order: SortOrder::parse(params.order.as_deref()),
            search,
        }
    }

    /// Unfiltered first page, used by internal callers.
    pub fn first_page(default_sort: &'static str) -> Self {
        Self {
            page: 1,
            limit: MAX_PAGE_SIZE,
            sort_by: default_sort,
            order: SortOrder::Desc,
            search: None,
        }
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1) * self.limit
    }

    /// `%term%` for ILIKE, with LIKE wildcards in the term escaped.
    pub fn like_pattern(&self) -> Option<String> {
        self.search.as_ref().map(|s| {
            let escaped = s
                .replace('\\', "\\\\")
                .replace('%', "\\%")
                .replace('_', "\\_");
            format!("%{}%", escaped)
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MetaInfo {
    pub page: u64,
    pub limit: u64,
    pub total: u64,
    pub pages: u64,
    pub sort_by: String,
    pub order: SortOrder,
    pub search: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub meta: MetaInfo,
}

impl<T> PageResult<T> {
    pub fn new(items: Vec<T>, total: u64, query: &ListQuery) -> Self {
        let pages = if total == 0 {
            0
        } else {
            total.div_ceil(query.limit)
        };

        Self {
            items,
            meta: MetaInfo {
                page: query.page,
                limit: query.limit,
                total,
                pages,
                sort_by: query.sort_by.to_string(),
                order: query.order,
                search: query.search.clone().unwrap_or_default(),
            },
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PageResult<U> {
        PageResult {
            items: self.items.into_iter().map(f).collect(),
            meta: self.meta,
        }
    }
}
