//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `annotate`: 为 CSV 追加代码描述列
//! - `decode`: 解码命令行给出的代码
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: annotate, decode

pub mod annotate;
pub mod decode;

use clap::{Parser, Subcommand};

/// codecipher - 能源系统代码解码工具
#[derive(Parser)]
#[command(name = "codecipher")]
#[command(version)]
#[command(about = "Decode energy-system fuel and technology codes", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Append a decoded description column to a CSV file
    Annotate(annotate::AnnotateArgs),

    /// Decode one or more fuel (4-char) or technology (9-char) codes
    Decode(decode::DecodeArgs),
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_annotate() {
        let cli = Cli::try_parse_from(["codecipher", "annotate", "FUEL.csv"]).unwrap();
        match cli.command {
            Commands::Annotate(args) => {
                assert_eq!(args.input.to_str(), Some("FUEL.csv"));
                assert!(args.output.is_none());
                assert!(!args.yes);
                assert_eq!(args.code_column, 0);
            }
            Commands::Decode(_) => panic!("expected annotate"),
        }
    }

    #[test]
    fn test_parse_decode() {
        let cli =
            Cli::try_parse_from(["codecipher", "decode", "DEBF", "DEBFCCP11", "--table"]).unwrap();
        match cli.command {
            Commands::Decode(args) => {
                assert_eq!(args.codes, vec!["DEBF", "DEBFCCP11"]);
                assert!(args.table);
                assert!(args.export.is_none());
            }
            Commands::Annotate(_) => panic!("expected decode"),
        }
    }

    #[test]
    fn test_decode_requires_code() {
        assert!(Cli::try_parse_from(["codecipher", "decode"]).is_err());
        assert!(Cli::try_parse_from(["codecipher", "annotate"]).is_err());
    }
}
