//! 展示辅助：结果截断与名称清理

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::catalog::Entry;

static IMAGE_EXT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\.(jpg|png|gif)$").unwrap_or_else(|e| panic!("图片扩展名正则无效：{}", e))
});

/// 去掉名称末尾的 .jpg / .png / .gif（不区分大小写）
pub fn display_name(name: &str) -> &str {
    match IMAGE_EXT.find(name) {
        Some(m) => &name[..m.start()],
        None => name,
    }
}

/// 一页展示结果：只保留前 `limit` 条，防止终端刷屏
#[derive(Debug, Clone, Serialize)]
pub struct DisplayPage {
    pub total: usize,
    pub truncated: bool,
    pub entries: Vec<Entry>,
}

impl DisplayPage {
    pub fn new(mut results: Vec<Entry>, limit: usize) -> Self {
        let total = results.len();
        let truncated = total > limit;
        results.truncate(limit);

        Self {
            total,
            truncated,
            entries: results,
        }
    }

    pub fn shown(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
