//! # 代码解码模块
//!
//! 燃料代码与技术代码的纯函数解码。
//!
//! ## 依赖关系
//! - 被 `table/` 和 `commands/decode.rs` 使用
//! - 子模块: tables, decoder

pub mod decoder;
pub mod tables;

pub use decoder::{decode_code, DecodeError};
