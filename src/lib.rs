//! bqbsearch - ChineseBQB 表情包索引搜索工具

// 导出全局错误类型
pub use self::error::{BqbError, BqbResult};

// 导出配置模块
pub use self::config::{GlobalConfig, ConfigManager, CustomConfigBuilder};

// 导出索引模块核心接口
pub use self::catalog::{
    Catalog, Entry, LoadReport, RawRecord, CatalogLoader, CatalogSource, HttpCatalogSource,
    CatalogCache, normalize, flatten_feed,
};

// 导出搜索模块核心接口
pub use self::search::{search, search_with_base, accept_keyword, category_index, display_name, DisplayPage};

// 导出全局加载器接口
pub use self::global::{init_global_loader, load_catalog};

// 声明所有子模块
pub mod config;
pub mod error;
pub mod catalog;
pub mod search;
pub mod global;
