//! 全局错误类型定义

use thiserror::Error;
use serde_json::Error as SerdeJsonError;

#[derive(Error, Debug)]
pub enum BqbError {
    // 索引加载相关错误
    #[error("URL {url} 返回状态码 {status}")]
    UnexpectedStatus { url: String, status: u16 },

    // 网络相关错误
    #[error("网络请求失败：{0}")]
    HttpError(#[from] reqwest::Error),

    // 序列化/反序列化错误
    #[error("JSON解析失败：{0}")]
    JsonError(#[from] SerdeJsonError),
}

impl BqbError {
    /// 是否为“服务端返回非 2xx”类错误（此类错误静默降级，不向用户提示）
    pub fn is_status_error(&self) -> bool {
        matches!(self, BqbError::UnexpectedStatus { .. })
    }
}

// 全局Result类型
pub type BqbResult<T> = Result<T, BqbError>;
