//! 热门分类提取

use std::collections::HashSet;

use crate::catalog::{Catalog, RawRecord};

/// 从索引前 `sample` 条记录中提取不重复的非空分类，按首次出现顺序，最多 `limit` 个
pub fn category_index(catalog: &Catalog, sample: usize, limit: usize) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut categories = Vec::new();

    for entry in catalog.sample(sample).iter().filter_map(RawRecord::normalize) {
        if categories.len() >= limit {
            break;
        }
        if entry.category.is_empty() || seen.contains(&entry.category) {
            continue;
        }
        seen.insert(entry.category.clone());
        categories.push(entry.category);
    }

    categories
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{OTHER_CATEGORY, UNCATEGORIZED};
    use serde_json::json;

    #[test]
    fn test_distinct_in_first_seen_order() {
        let records: Vec<RawRecord> = serde_json::from_value(json!([
            "dogs/1.jpg", "cats/2.jpg", "dogs/3.jpg", 5, {"name": "x"}, "single.png", "/empty-category.png"
        ]))
        .unwrap();

        assert_eq!(
            category_index(&Catalog::new(records), 2000, 15),
            vec!["dogs", "cats", UNCATEGORIZED, OTHER_CATEGORY]
        );
    }

    #[test]
    fn test_limit_truncates() {
        let records: Vec<RawRecord> = (0..40).map(|i| RawRecord::Text(format!("c{}/x.jpg", i))).collect();
        let categories = category_index(&Catalog::new(records), 2000, 15);
        assert_eq!(categories.len(), 15);
        assert_eq!(categories.first().map(String::as_str), Some("c0"));
        assert_eq!(categories.last().map(String::as_str), Some("c14"));
    }

    #[test]
    fn test_only_sample_prefix_is_examined() {
        let mut records: Vec<RawRecord> = vec![RawRecord::from("early/a.jpg"); 3];
        records.push(RawRecord::from("late/b.jpg"));
        assert_eq!(category_index(&Catalog::new(records), 3, 15), vec!["early"]);
    }
}
