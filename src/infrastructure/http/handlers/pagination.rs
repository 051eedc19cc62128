//! Pagination Handler
//!
//! 为列表视图计算页码窗口和翻页按钮状态

use axum::{
    extract::{Query, State},
    Json,
};
use std::sync::Arc;

use crate::application::ApplicationError;
use crate::domain::pagination::{Pagination, PaginationError, PAGE_SIZE_OPTIONS};
use crate::infrastructure::http::dto::{
    ApiResponse, ItemRangeDto, PaginationQuery, PaginationResponse, WindowStyle,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// GET /api/pagination/window
///
/// `total_pages` 优先；缺失时按 `total_items` 和每页条数推导。
/// `new_page_size` 优先于 `target_page`：切换每页条数后回到第 1 页；
/// 目标页越界或等于当前页时保持不变，`page_changed` 为 false。
pub async fn page_window(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PaginationQuery>,
) -> Result<Json<ApiResponse<PaginationResponse>>, ApiError> {
    let policy = state.pagination_policy;
    let page_size = policy.resolve_page_size(query.page_size);
    let requested = build_pagination(&query, page_size)?;

    let pagination = match (query.new_page_size, query.target_page) {
        (Some(size), _) => requested.change_page_size(policy.resolve_page_size(Some(size))),
        (None, Some(target)) => match u32::try_from(target).ok().and_then(|t| requested.go_to(t)) {
            Some(page) => Pagination {
                current_page: page,
                ..requested
            },
            None => requested,
        },
        (None, None) => requested,
    };
    let page_changed = pagination.current_page != requested.current_page;

    let markers = match query.style {
        WindowStyle::Classic => pagination.window(),
        WindowStyle::Sliding => pagination.sliding_window(),
    };

    let item_range = pagination.item_range().map(|(first, last)| ItemRangeDto {
        first,
        last,
        total: pagination.total_items.unwrap_or_default(),
    });

    Ok(Json(ApiResponse::success(PaginationResponse {
        current_page: pagination.current_page,
        total_pages: pagination.total_pages,
        page_size: pagination.page_size,
        visible: pagination.is_visible(),
        markers,
        can_go_back: pagination.can_go_back(),
        can_go_forward: pagination.can_go_forward(),
        previous_page: pagination.previous(),
        next_page: pagination.next(),
        page_changed,
        item_range,
        page_size_options: &PAGE_SIZE_OPTIONS,
    })))
}

fn build_pagination(
    query: &PaginationQuery,
    page_size: u32,
) -> Result<Pagination, ApplicationError> {
    let invalid = |total: i64| PaginationError::InvalidInput {
        current_page: query.current_page,
        total_pages: total,
    };

    let current_page = u32::try_from(query.current_page)
        .map_err(|_| invalid(query.total_pages.unwrap_or_default()))?;

    let total_items = query
        .total_items
        .map(|n| u64::try_from(n).map_err(|_| invalid(n)))
        .transpose()?;

    let pagination = match (query.total_pages, total_items) {
        (Some(total_pages), items) => {
            let total_pages = u32::try_from(total_pages).map_err(|_| invalid(total_pages))?;
            let pagination = Pagination::new(current_page, total_pages).with_page_size(page_size);
            match items {
                Some(items) => pagination.with_total_items(items),
                None => pagination,
            }
        }
        (None, Some(items)) => Pagination::from_items(current_page, items, page_size),
        (None, None) => {
            return Err(ApplicationError::validation(
                "either total_pages or total_items is required",
            ))
        }
    };

    Ok(pagination)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::infrastructure::http::error::errno;
    use crate::infrastructure::http::handlers::test_support::{get_json, test_app};

    #[tokio::test]
    async fn test_classic_window_in_middle() {
        let app = test_app(None);

        let body = get_json(&app.router, "/api/pagination/window?current_page=5&total_pages=10").await;
        assert_eq!(body["errno"], 0);
        assert_eq!(body["data"]["markers"], json!([1, "...", 4, 5, 6, "...", 10]));
        assert_eq!(body["data"]["visible"], true);
        assert_eq!(body["data"]["can_go_back"], true);
        assert_eq!(body["data"]["can_go_forward"], true);
    }

    #[tokio::test]
    async fn test_single_page_is_hidden() {
        let app = test_app(None);

        let body = get_json(&app.router, "/api/pagination/window?current_page=1&total_pages=1").await;
        assert_eq!(body["data"]["markers"], json!([]));
        assert_eq!(body["data"]["visible"], false);
        assert_eq!(body["data"]["can_go_forward"], false);
    }

    #[tokio::test]
    async fn test_total_pages_from_items() {
        let app = test_app(None);

        let body = get_json(
            &app.router,
            "/api/pagination/window?current_page=3&total_items=95&page_size=10",
        )
        .await;
        assert_eq!(body["data"]["total_pages"], 10);
        assert_eq!(body["data"]["page_size"], 10);
        assert_eq!(body["data"]["item_range"], json!({ "first": 21, "last": 30, "total": 95 }));
        assert_eq!(body["data"]["page_size_options"], json!([10, 20, 50, 100]));
    }

    #[tokio::test]
    async fn test_sliding_style() {
        let app = test_app(None);

        let body = get_json(
            &app.router,
            "/api/pagination/window?current_page=1&total_pages=10&style=sliding",
        )
        .await;
        assert_eq!(body["data"]["markers"], json!([1, 2, 3, 4, 5, "...", 10]));
    }

    #[tokio::test]
    async fn test_navigation_pages() {
        let app = test_app(None);

        let body = get_json(&app.router, "/api/pagination/window?current_page=1&total_pages=3").await;
        assert!(body["data"]["previous_page"].is_null());
        assert_eq!(body["data"]["next_page"], 2);
        assert_eq!(body["data"]["page_changed"], false);
    }

    #[tokio::test]
    async fn test_target_page_moves_window() {
        let app = test_app(None);

        let body = get_json(
            &app.router,
            "/api/pagination/window?current_page=1&total_pages=10&target_page=5",
        )
        .await;
        assert_eq!(body["data"]["current_page"], 5);
        assert_eq!(body["data"]["page_changed"], true);
        assert_eq!(body["data"]["markers"], json!([1, "...", 4, 5, 6, "...", 10]));
        assert_eq!(body["data"]["previous_page"], 4);
        assert_eq!(body["data"]["next_page"], 6);
    }

    #[tokio::test]
    async fn test_invalid_target_page_keeps_current() {
        let app = test_app(None);

        for target in ["0", "11", "3", "-2"] {
            let uri = format!(
                "/api/pagination/window?current_page=3&total_pages=10&target_page={}",
                target
            );
            let body = get_json(&app.router, &uri).await;
            assert_eq!(body["errno"], 0);
            assert_eq!(body["data"]["current_page"], 3);
            assert_eq!(body["data"]["page_changed"], false);
        }
    }

    #[tokio::test]
    async fn test_new_page_size_resets_to_first_page() {
        let app = test_app(None);

        let body = get_json(
            &app.router,
            "/api/pagination/window?current_page=4&total_items=95&page_size=10&new_page_size=50",
        )
        .await;
        assert_eq!(body["data"]["current_page"], 1);
        assert_eq!(body["data"]["page_size"], 50);
        assert_eq!(body["data"]["total_pages"], 2);
        assert_eq!(body["data"]["page_changed"], true);
        assert_eq!(body["data"]["item_range"], json!({ "first": 1, "last": 50, "total": 95 }));
    }

    #[tokio::test]
    async fn test_negative_input_rejected() {
        let app = test_app(None);

        let body = get_json(&app.router, "/api/pagination/window?current_page=-1&total_pages=10").await;
        assert_eq!(body["errno"], errno::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_missing_totals_rejected() {
        let app = test_app(None);

        let body = get_json(&app.router, "/api/pagination/window?current_page=2").await;
        assert_eq!(body["errno"], errno::BAD_REQUEST);
    }
}
