//! # 统一错误处理模块
//!
//! 定义 calcout 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// calcout 统一错误类型
#[derive(Error, Debug)]
pub enum CalcoutError {
    // ─────────────────────────────────────────────────────────────
    // 能力错误
    // ─────────────────────────────────────────────────────────────
    #[error("Backend '{backend}' does not support operation: {operation}")]
    Unsupported { backend: String, operation: String },

    // ─────────────────────────────────────────────────────────────
    // 提取错误
    // ─────────────────────────────────────────────────────────────
    #[error("Marker '{marker}' not found in output file: {path}")]
    MarkerNotFound { marker: String, path: String },

    #[error("Malformed output in file: {path}\nLine: {line}\nReason: {reason}")]
    MalformedOutput {
        path: String,
        line: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CalcoutError>;
