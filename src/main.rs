//! # codecipher - 能源系统代码解码工具
//!
//! 将 4 位燃料代码与 9 位技术代码解码为可读描述，并为 CSV 数据表追加描述列。
//!
//! ## 子命令
//! - `annotate` - 为 CSV 追加 `description` 列
//! - `decode`   - 解码命令行给出的代码
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── codes/   (代码查找表与解码器)
//!   │     ├── table/   (CSV 读写与增补)
//!   │     └── models/  (数据模型)
//!   ├── utils/      (输出与交互确认)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod codes;
mod commands;
mod error;
mod models;
mod table;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
