//! Pagination Context - Errors

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaginationError {
    #[error("Invalid pagination input: current_page={current_page}, total_pages={total_pages}")]
    InvalidInput { current_page: i64, total_pages: i64 },
}
