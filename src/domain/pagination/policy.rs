//! 服务端分页策略
//!
//! 查询参数 `page_size` 的默认值与上限由策略决定。

/// 分页策略
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationPolicy {
    pub default_page_size: u32,
    pub max_page_size: u32,
}

impl PaginationPolicy {
    /// 大多数列表接口
    pub const STANDARD: Self = Self {
        default_page_size: 20,
        max_page_size: 100,
    };

    /// 解析请求的每页条数：缺失或为 0 使用默认值，超过上限取上限
    ///
    /// 结果至少为 1，策略字段为 0 时也不会得到空页。
    pub fn resolve_page_size(&self, requested: Option<u32>) -> u32 {
        let size = match requested {
            None | Some(0) => self.default_page_size,
            Some(size) => size.min(self.max_page_size),
        };
        size.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pagination::Pagination;

    #[test]
    fn test_resolve_page_size() {
        let policy = PaginationPolicy::STANDARD;
        assert_eq!(policy.resolve_page_size(None), 20);
        assert_eq!(policy.resolve_page_size(Some(0)), 20);
        assert_eq!(policy.resolve_page_size(Some(50)), 50);
        assert_eq!(policy.resolve_page_size(Some(500)), 100);
    }

    #[test]
    fn test_zero_sized_policy_still_yields_pages() {
        let policy = PaginationPolicy {
            default_page_size: 0,
            max_page_size: 0,
        };
        assert_eq!(policy.resolve_page_size(None), 1);
        assert_eq!(policy.resolve_page_size(Some(30)), 1);

        let pagination = Pagination::from_items(1, 7, policy.resolve_page_size(None));
        assert_eq!(pagination.total_pages, 7);
    }
}
