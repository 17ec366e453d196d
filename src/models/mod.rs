//! # 数据模型模块
//!
//! 定义代码解码结果的数据模型。
//!
//! ## 依赖关系
//! - 被 `codes/`, `table/` 和 `commands/` 使用
//! - 子模块: code

pub mod code;

pub use code::{Category, CodeKind, DecodedCode, Segment};
