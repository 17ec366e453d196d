//! # 统一错误处理模块
//!
//! 定义 codecipher 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 包装 `codes/` 的 `DecodeError`

use crate::codes::DecodeError;
use thiserror::Error;

/// codecipher 统一错误类型
#[derive(Error, Debug)]
pub enum CodecipherError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 表格错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Table has no header row: {path}")]
    EmptyTable { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解码错误
    // ─────────────────────────────────────────────────────────────
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("{failed} of {total} codes could not be decoded")]
    DecodeFailures { failed: usize, total: usize },

    // ─────────────────────────────────────────────────────────────
    // 参数与交互错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read confirmation from terminal")]
    PromptError(#[source] std::io::Error),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, CodecipherError>;
