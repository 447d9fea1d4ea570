//! 索引内存缓存
//! 仅在进程内保存最近一次加载结果，按固定时长过期，不落盘

use std::time::{Duration, Instant};

use tracing::debug;

use super::model::LoadReport;

/// 缓存状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheState {
    Fresh,
    Expired,
}

/// 判断缓存是否过期（纯函数）
#[inline]
pub fn is_expired(now: Instant, fetched_at: Instant, ttl: Duration) -> bool {
    now.saturating_duration_since(fetched_at) >= ttl
}

#[derive(Debug, Clone)]
struct CachedCatalog {
    report: LoadReport,
    fetched_at: Instant,
}

/// 索引缓存：进程启动时为空，过期后整体替换，无显式销毁
#[derive(Debug, Clone)]
pub struct CatalogCache {
    entry: Option<CachedCatalog>,
    ttl: Duration,
}

impl CatalogCache {
    pub fn new(ttl: Duration) -> Self {
        Self { entry: None, ttl }
    }

    /// 当前状态；从未写入视为已过期
    pub fn state(&self, now: Instant) -> CacheState {
        match &self.entry {
            Some(cached) if !is_expired(now, cached.fetched_at, self.ttl) => CacheState::Fresh,
            _ => CacheState::Expired,
        }
    }

    /// 读取未过期的缓存
    pub fn get(&self, now: Instant) -> Option<LoadReport> {
        match self.state(now) {
            CacheState::Fresh => self.entry.as_ref().map(|cached| cached.report.clone()),
            CacheState::Expired => None,
        }
    }

    /// 写入新的加载结果（整体替换旧值）
    pub fn store(&mut self, report: LoadReport, now: Instant) {
        debug!("索引缓存已更新，记录数：{}", report.catalog.len());
        self.entry = Some(CachedCatalog {
            report,
            fetched_at: now,
        });
    }
}
