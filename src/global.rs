//! 全局索引加载器单例管理
//! 生命周期：进程启动时为空；首次加载时创建；缓存过期后由加载器整体替换索引；无显式销毁

use once_cell::sync::Lazy;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

use crate::catalog::{CatalogLoader, LoadReport};
use crate::config::{ConfigManager, GlobalConfig};
use crate::error::BqbResult;

type LoaderSlot = Mutex<Option<CatalogLoader>>;

/// 全局加载器实例（异步互斥，保证同一时刻只有一次加载）
static GLOBAL_LOADER: Lazy<LoaderSlot> = Lazy::new(|| Mutex::new(None));

/// 带自定义配置初始化全局加载器；已初始化则直接返回
pub async fn init_global_loader(config: &GlobalConfig) -> BqbResult<()> {
    init_in(&GLOBAL_LOADER, config).await
}

/// 通过全局加载器获取索引（未初始化时使用默认配置懒加载）
///
/// 不会返回错误：任何失败都降级为空索引，并在 `notice` 中附带提示。
pub async fn load_catalog() -> LoadReport {
    load_in(&GLOBAL_LOADER, &ConfigManager::get_default()).await
}

async fn init_in(slot: &LoaderSlot, config: &GlobalConfig) -> BqbResult<()> {
    let mut guard = slot.lock().await;
    if guard.is_some() {
        debug!("全局加载器已初始化，跳过");
        return Ok(());
    }

    let loader = CatalogLoader::new(config)?;
    info!("全局加载器初始化完成，索引地址：{}", loader.source().url());
    *guard = Some(loader);
    Ok(())
}

/// `fallback` 仅在槽位为空时用于创建加载器
async fn load_in(slot: &LoaderSlot, fallback: &GlobalConfig) -> LoadReport {
    let mut guard = slot.lock().await;
    if guard.is_none() {
        match CatalogLoader::new(fallback) {
            Ok(loader) => *guard = Some(loader),
            Err(e) => {
                error!("全局加载器初始化失败：{}", e);
                return LoadReport::degraded(Some(format!("网络请求异常: {}", e)));
            }
        }
    }

    match guard.as_mut() {
        Some(loader) => loader.load().await,
        None => LoadReport::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn empty_slot() -> LoaderSlot {
        Mutex::new(None)
    }

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let slot = empty_slot();
        let first = ConfigManager::custom().endpoint_url("http://127.0.0.1:9/first.json").build();
        let second = ConfigManager::custom().endpoint_url("http://127.0.0.1:9/second.json").build();

        init_in(&slot, &first).await.unwrap();
        init_in(&slot, &second).await.unwrap();

        let guard = slot.lock().await;
        let url = guard.as_ref().map(|loader| loader.source().url().to_string());
        assert_eq!(url.as_deref(), Some("http://127.0.0.1:9/first.json"));
    }

    #[tokio::test]
    async fn test_load_degrades_and_caches_on_bad_endpoint() {
        // 非法 URL 在发请求前即失败，不产生任何网络访问
        let slot = empty_slot();
        let config = ConfigManager::custom().endpoint_url("not a url").build();

        let first = load_in(&slot, &config).await;
        assert!(first.catalog.is_empty());
        let notice = first.notice.clone().unwrap();
        assert!(notice.starts_with("网络请求异常"), "{}", notice);
        assert!(first.clone().into_available().is_none());

        // 降级结果同样进入缓存，有效期内不再重新拉取
        let second = load_in(&slot, &config).await;
        assert!(Arc::ptr_eq(&first.catalog, &second.catalog));
        assert_eq!(second.notice, first.notice);
    }

    #[tokio::test]
    async fn test_load_lazily_creates_loader_from_fallback() {
        let slot = empty_slot();
        let config = ConfigManager::custom().endpoint_url("not a url").build();

        load_in(&slot, &config).await;
        let guard = slot.lock().await;
        assert_eq!(guard.as_ref().map(|loader| loader.source().url()), Some("not a url"));
    }
}
