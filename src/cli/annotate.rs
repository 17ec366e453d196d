//! # annotate 子命令 CLI 定义
//!
//! 为 CSV 文件追加代码描述列
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/annotate.rs`

use clap::Args;
use std::path::PathBuf;

/// annotate 子命令参数
#[derive(Args, Debug)]
pub struct AnnotateArgs {
    /// Input CSV file (first row is the header)
    pub input: PathBuf,

    /// Output CSV file (defaults to overwriting the input after confirmation)
    pub output: Option<PathBuf>,

    /// Confirm overwriting the input file without prompting
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,

    /// Zero-based index of the column holding the codes
    #[arg(short, long, default_value_t = 0)]
    pub code_column: usize,
}
