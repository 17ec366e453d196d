//! # decode 子命令 CLI 定义
//!
//! 解码命令行给出的燃料代码或技术代码
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/decode.rs`

use clap::Args;
use std::path::PathBuf;

/// decode 子命令参数
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Codes to decode (4-char fuel or 9-char technology codes)
    #[arg(required = true)]
    pub codes: Vec<String>,

    /// Show a per-segment breakdown table
    #[arg(short, long, default_value_t = false)]
    pub table: bool,

    /// Write the per-segment breakdown to a CSV file
    #[arg(short, long)]
    pub export: Option<PathBuf>,
}
