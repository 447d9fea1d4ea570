//! 索引数据模型定义
//! 仅存储数据，归一化与搜索逻辑见 normalizer / search 模块

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 远程索引中的原始记录（未归一化）
///
/// 上游数据形态不受本项目控制，可能是路径字符串、松散对象，
/// 也可能混入其它 JSON 值；后者原样保留，归一化时视为“无结果”。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawRecord {
    /// 路径形式，如 `"cat/funny1.jpg"`
    Text(String),
    /// 对象形式，可选字段 `url` / `name` / `category`
    Object(Map<String, Value>),
    /// 其它任意 JSON 值（数字、布尔、null、嵌套数组）
    Other(Value),
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        match value {
            Value::String(s) => RawRecord::Text(s),
            Value::Object(map) => RawRecord::Object(map),
            other => RawRecord::Other(other),
        }
    }
}

impl From<&str> for RawRecord {
    fn from(s: &str) -> Self {
        RawRecord::Text(s.to_string())
    }
}

/// 归一化后的表情条目（可直接用于展示）
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Entry {
    pub name: String,
    pub category: String,
    pub url: String,
}

impl Entry {
    pub fn new(name: impl Into<String>, category: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            url: url.into(),
        }
    }
}

// ======== 为 Entry 实现 Display trait（用于 CLI 输出） ========
impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.name)
    }
}

/// 一次拉取得到的完整索引（有序，整体替换，不落盘）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    records: Vec<RawRecord>,
}

impl Catalog {
    pub fn new(records: Vec<RawRecord>) -> Self {
        Self { records }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 取前 n 条记录（不足 n 条时返回全部）
    pub fn sample(&self, n: usize) -> &[RawRecord] {
        &self.records[..n.min(self.records.len())]
    }
}

/// 加载结果：索引本体 + 面向用户的异常提示（仅网络/解析失败时存在）
#[derive(Debug, Clone, Default)]
pub struct LoadReport {
    pub catalog: Arc<Catalog>,
    pub notice: Option<String>,
}

impl LoadReport {
    pub fn loaded(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            notice: None,
        }
    }

    /// 降级为空索引，可附带提示
    pub fn degraded(notice: Option<String>) -> Self {
        Self {
            catalog: Arc::new(Catalog::empty()),
            notice,
        }
    }

    pub fn records(&self) -> &[RawRecord] {
        self.catalog.records()
    }

    /// 索引非空时返回自身；空索引（无论是否附带提示）一律视为加载失败
    pub fn into_available(self) -> Option<Self> {
        if self.catalog.is_empty() {
            None
        } else {
            Some(self)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_record_deserialize_variants() {
        let records: Vec<RawRecord> =
            serde_json::from_value(json!(["a/b.jpg", {"name": "x"}, 42, null, [1, 2]])).unwrap();

        assert_eq!(records[0], RawRecord::Text("a/b.jpg".to_string()));
        assert!(matches!(&records[1], RawRecord::Object(map) if map.get("name") == Some(&json!("x"))));
        assert_eq!(records[2], RawRecord::Other(json!(42)));
        assert_eq!(records[3], RawRecord::Other(Value::Null));
        assert_eq!(records[4], RawRecord::Other(json!([1, 2])));
    }

    #[test]
    fn test_raw_record_from_value_matches_deserialize() {
        for value in [json!("x/y.png"), json!({"url": "z.png"}), json!(true)] {
            let via_from = RawRecord::from(value.clone());
            let via_serde: RawRecord = serde_json::from_value(value).unwrap();
            assert_eq!(via_from, via_serde);
        }
    }

    #[test]
    fn test_catalog_sample_is_bounded() {
        let catalog = Catalog::new(vec!["a".into(), "b".into(), "c".into()]);
        assert_eq!(catalog.sample(2).len(), 2);
        assert_eq!(catalog.sample(10).len(), 3);
        assert!(Catalog::empty().sample(5).is_empty());
    }

    #[test]
    fn test_empty_report_is_unavailable_even_without_notice() {
        // 非 2xx 降级时没有提示，但仍然不可用
        assert!(LoadReport::degraded(None).into_available().is_none());
        assert!(LoadReport::degraded(Some("网络请求异常: x".to_string())).into_available().is_none());
        assert!(LoadReport::loaded(Catalog::empty()).into_available().is_none());

        let report = LoadReport::loaded(Catalog::new(vec!["a/b.jpg".into()]));
        assert_eq!(report.into_available().map(|r| r.catalog.len()), Some(1));
    }

    #[test]
    fn test_entry_display() {
        let entry = Entry::new("a.jpg", "cats", "https://x/a.jpg");
        assert_eq!(entry.to_string(), "[cats] a.jpg");
    }
}
