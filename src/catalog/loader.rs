//! 索引加载管理器
//! 负责拉取远程索引、兼容多种数据形态，并在内存中按有效期缓存结果

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error, warn};

use super::cache::CatalogCache;
use super::model::{Catalog, LoadReport, RawRecord};
use crate::config::GlobalConfig;
use crate::error::{BqbError, BqbResult};

/// 远程数据源抽象：返回解码后的 JSON 文档
#[async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch(&self) -> BqbResult<Value>;
}

/// 基于 reqwest 的 HTTP 数据源
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(config: &GlobalConfig) -> BqbResult<Self> {
        let client = Client::builder()
            .timeout(config.http_timeout())
            .build()?;

        Ok(Self::with_client(client, config.endpoint_url.clone()))
    }

    /// 使用外部构建的客户端（自定义代理、证书等）
    pub fn with_client(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch(&self) -> BqbResult<Value> {
        debug!("开始拉取远程索引，URL：{}", self.url);
        let response = self.client.get(&self.url)
            .header("User-Agent", concat!("bqbsearch/", env!("CARGO_PKG_VERSION")))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BqbError::UnexpectedStatus {
                url: self.url.clone(),
                status: response.status().as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        debug!("远程索引下载完成，大小：{} 字节", bytes.len());
        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// 将远程文档统一展开为记录列表
///
/// - 数组：原样返回
/// - 含 `data` 数组的对象：返回该数组
/// - 其它对象：按键的原始顺序返回所有值（丢弃键）
/// - 其它 JSON 值：空列表
pub fn flatten_feed(body: Value) -> Vec<RawRecord> {
    match body {
        Value::Array(items) => items.into_iter().map(RawRecord::from).collect(),
        Value::Object(map) => {
            if let Some(Value::Array(items)) = map.get("data") {
                return items.iter().cloned().map(RawRecord::from).collect();
            }
            map.into_iter().map(|(_, value)| RawRecord::from(value)).collect()
        }
        _ => Vec::new(),
    }
}

/// 索引加载器：持有数据源与缓存，任何失败都降级为空索引
pub struct CatalogLoader<S = HttpCatalogSource> {
    source: S,
    cache: CatalogCache,
}

impl CatalogLoader<HttpCatalogSource> {
    /// 使用 HTTP 数据源创建加载器
    pub fn new(config: &GlobalConfig) -> BqbResult<Self> {
        let source = HttpCatalogSource::new(config)?;
        Ok(Self::with_source(source, config.cache_ttl()))
    }
}

impl<S: CatalogSource> CatalogLoader<S> {
    pub fn with_source(source: S, ttl: Duration) -> Self {
        Self {
            source,
            cache: CatalogCache::new(ttl),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// 加载索引（缓存有效则直接返回，否则重新拉取）
    pub async fn load(&mut self) -> LoadReport {
        self.load_at(Instant::now()).await
    }

    /// 以指定时刻判断缓存有效期并加载
    pub async fn load_at(&mut self, now: Instant) -> LoadReport {
        if let Some(report) = self.cache.get(now) {
            debug!("命中索引缓存，记录数：{}", report.catalog.len());
            return report;
        }

        let report = self.fetch_report().await;
        self.cache.store(report.clone(), now);
        report
    }

    async fn fetch_report(&self) -> LoadReport {
        match self.source.fetch().await {
            Ok(body) => {
                let records = flatten_feed(body);
                if records.is_empty() {
                    warn!("远程索引为空或数据形态无法识别");
                } else {
                    debug!("远程索引解析成功，记录总数：{}", records.len());
                }
                LoadReport::loaded(Catalog::new(records))
            }
            Err(e) if e.is_status_error() => {
                warn!("拉取远程索引失败：{}", e);
                LoadReport::degraded(None)
            }
            Err(e) => {
                error!("网络请求异常：{}", e);
                LoadReport::degraded(Some(format!("网络请求异常: {}", e)))
            }
        }
    }
}
