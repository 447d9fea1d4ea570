//! 单条记录归一化
//! 将路径字符串 / 松散对象统一转换为 Entry，纯函数，不修改输入

use serde_json::{Map, Value};

use super::model::{Entry, RawRecord};
use crate::config::DEFAULT_BASE_URL;

/// 绝对地址前缀标记（http / https 均以此开头）
pub const ABSOLUTE_SCHEME_MARKER: &str = "http";
/// 路径中只有一段时使用的分类
pub const OTHER_CATEGORY: &str = "其他";
/// 对象记录缺少 category 字段时使用的分类
pub const UNCATEGORIZED: &str = "未分类";

/// 是否已是绝对地址
#[inline]
pub fn is_absolute(url: &str) -> bool {
    url.starts_with(ABSOLUTE_SCHEME_MARKER)
}

/// 相对路径补全为绝对地址；已是绝对地址则原样返回
pub fn resolve_url(path: &str, base_url: &str) -> String {
    if is_absolute(path) {
        path.to_string()
    } else {
        format!("{}{}", base_url, path)
    }
}

/// 归一化单条记录
///
/// # 返回值
/// - `Some(Entry)`: 字符串或对象记录
/// - `None`: 其它 JSON 值（不是错误，搜索时直接跳过）
pub fn normalize(raw: &RawRecord, base_url: &str) -> Option<Entry> {
    match raw {
        RawRecord::Text(path) => Some(normalize_path(path, base_url)),
        RawRecord::Object(fields) => Some(normalize_object(fields, base_url)),
        RawRecord::Other(_) => None,
    }
}

/// 路径形式：首段为分类，末段为名称
fn normalize_path(path: &str, base_url: &str) -> Entry {
    let segments: Vec<&str> = path.split('/').collect();
    let (category, name) = match segments.as_slice() {
        [first, .., last] => (*first, *last),
        _ => (OTHER_CATEGORY, path),
    };

    Entry::new(name, category, resolve_url(path, base_url))
}

/// 对象形式：字段缺失或非字符串时使用默认值
fn normalize_object(fields: &Map<String, Value>, base_url: &str) -> Entry {
    let name = str_field(fields, "name").unwrap_or_default();
    let category = str_field(fields, "category").unwrap_or(UNCATEGORIZED);
    let url = match str_field(fields, "url") {
        Some(url) if !url.is_empty() => resolve_url(url, base_url),
        _ => String::new(),
    };

    Entry::new(name, category, url)
}

#[inline]
fn str_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields.get(key).and_then(Value::as_str)
}

impl RawRecord {
    /// 使用默认资源前缀归一化
    pub fn normalize(&self) -> Option<Entry> {
        normalize(self, DEFAULT_BASE_URL)
    }
}
