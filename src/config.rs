//! 全局配置管理,存储所有可配置项

use std::time::Duration;

/// 远程索引地址（jsDelivr 镜像的 ChineseBQB 仓库）
pub const DEFAULT_ENDPOINT_URL: &str =
    "https://cdn.jsdelivr.net/gh/zhaoolee/ChineseBQB@master/chinesebqb_github.json";
/// 相对路径资源的前缀，与索引地址同属一个仓库根
pub const DEFAULT_BASE_URL: &str = "https://cdn.jsdelivr.net/gh/zhaoolee/ChineseBQB@master/";

/// 全局配置
#[derive(Debug, Clone)]
pub struct GlobalConfig {
    // 远程索引地址
    pub endpoint_url: String,
    // 相对资源路径前缀
    pub base_url: String,
    // 超时配置（单位：秒）
    pub http_timeout: u64,
    // 索引缓存有效期（单位：秒）
    pub cache_ttl: u64,
    // 单次最多展示的结果数
    pub display_limit: usize,
    // 提取分类时采样的记录数
    pub category_sample: usize,
    // 展示的分类数上限
    pub category_limit: usize,
    // 是否启用详细日志
    pub verbose: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            endpoint_url: DEFAULT_ENDPOINT_URL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_timeout: 15,
            cache_ttl: 3600,
            display_limit: 50,
            category_sample: 2000,
            category_limit: 15,
            verbose: false,
        }
    }
}

impl GlobalConfig {
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }
}

/// 配置管理器
pub struct ConfigManager;

impl ConfigManager {
    /// 获取默认配置
    pub fn get_default() -> GlobalConfig {
        GlobalConfig::default()
    }

    /// 自定义配置
    pub fn custom() -> CustomConfigBuilder {
        CustomConfigBuilder::new()
    }
}

/// 配置构建器（便于自定义配置）
#[derive(Debug, Clone, Default)]
pub struct CustomConfigBuilder {
    config: GlobalConfig,
}

impl CustomConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: GlobalConfig::default(),
        }
    }

    pub fn endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.config.endpoint_url = url.into();
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = url.into();
        self
    }

    pub fn http_timeout(mut self, timeout: u64) -> Self {
        self.config.http_timeout = timeout;
        self
    }

    pub fn cache_ttl(mut self, ttl: u64) -> Self {
        self.config.cache_ttl = ttl;
        self
    }

    pub fn display_limit(mut self, limit: usize) -> Self {
        self.config.display_limit = limit;
        self
    }

    pub fn category_sample(mut self, sample: usize) -> Self {
        self.config.category_sample = sample;
        self
    }

    pub fn category_limit(mut self, limit: usize) -> Self {
        self.config.category_limit = limit;
        self
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.config.verbose = verbose;
        self
    }

    pub fn build(self) -> GlobalConfig {
        self.config
    }
}
