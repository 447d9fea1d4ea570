//! 搜索模块：对原始记录逐条归一化并做大小写无关的子串匹配
pub mod category;
pub mod display;

pub use self::category::category_index;
pub use self::display::{display_name, DisplayPage};

use crate::catalog::{normalize, Entry, RawRecord};
use crate::config::DEFAULT_BASE_URL;

/// 查询前置校验：空白查询返回 None；否则原样返回（首尾空格参与匹配）
pub fn accept_keyword(keyword: &str) -> Option<&str> {
    if keyword.trim().is_empty() {
        None
    } else {
        Some(keyword)
    }
}

/// 按关键词搜索（使用默认资源前缀）
///
/// 空关键词会匹配所有可归一化的记录，调用方需在调用前拒绝空查询。
pub fn search(records: &[RawRecord], keyword: &str) -> Vec<Entry> {
    search_with_base(records, keyword, DEFAULT_BASE_URL)
}

/// 按关键词搜索，结果保持原始顺序，不去重、不排序
pub fn search_with_base(records: &[RawRecord], keyword: &str, base_url: &str) -> Vec<Entry> {
    let keyword = keyword.to_lowercase();

    records
        .iter()
        .filter_map(|raw| normalize(raw, base_url))
        .filter(|entry| matches_keyword(entry, &keyword))
        .collect()
}

/// `keyword` 需已转小写
#[inline]
fn matches_keyword(entry: &Entry, keyword: &str) -> bool {
    entry.name.to_lowercase().contains(keyword) || entry.category.to_lowercase().contains(keyword)
}
