//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `codes/`, `table/`, `utils/`
//! - 子模块: annotate, decode

pub mod annotate;
pub mod decode;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Annotate(args) => annotate::execute(args),
        Commands::Decode(args) => decode::execute(args),
    }
}
