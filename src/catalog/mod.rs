//! 索引模块：负责远程索引的加载、缓存、数据模型与单条归一化
pub mod model;
pub mod normalizer;
pub mod cache;
pub mod loader;

// 导出核心接口
pub use self::model::{Catalog, Entry, LoadReport, RawRecord};
pub use self::normalizer::{
    normalize, resolve_url, is_absolute, ABSOLUTE_SCHEME_MARKER, OTHER_CATEGORY, UNCATEGORIZED,
};
pub use self::cache::{is_expired, CacheState, CatalogCache};
pub use self::loader::{flatten_feed, CatalogLoader, CatalogSource, HttpCatalogSource};
