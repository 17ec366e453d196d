//! # annotate 命令实现
//!
//! 为 CSV 文件追加代码描述列。
//!
//! ## 功能
//! - 读取 CSV 并解码代码列
//! - 输出到新文件，或确认后覆盖原文件
//! - 汇总无效代码与未知代码段
//!
//! ## 依赖关系
//! - 使用 `cli/annotate.rs` 定义的参数
//! - 使用 `table/`
//! - 使用 `utils/output.rs`, `utils/prompt.rs`

use crate::cli::annotate::AnnotateArgs;
use crate::error::{CodecipherError, Result};
use crate::table::{self, AugmentOptions, AugmentSummary, Outcome};
use crate::utils::{output, prompt};

use std::path::Path;

/// 最多逐条列出的问题行数
const MAX_LISTED_ROWS: usize = 10;

/// 执行 annotate 命令
pub fn execute(args: AnnotateArgs) -> Result<()> {
    output::print_header("Annotating Codes");

    if let Some(out) = &args.output {
        if out.is_dir() {
            return Err(CodecipherError::InvalidArgument(format!(
                "output path is a directory: {}",
                out.display()
            )));
        }
    }

    let options = AugmentOptions {
        code_column: args.code_column,
    };

    let assume_yes = args.yes;
    let annotation = table::annotate_file(&args.input, args.output.as_deref(), options, |path| {
        if assume_yes {
            return Ok(true);
        }
        confirm_overwrite(path)
    })?;

    print_summary(&annotation.summary);
    output::print_separator();

    match annotation.outcome {
        Outcome::Written => output::print_done(&format!(
            "Code descriptions saved to '{}'",
            annotation.destination.display()
        )),
        Outcome::Overwritten => output::print_done(&format!(
            "Code descriptions added to '{}'",
            annotation.destination.display()
        )),
        Outcome::Declined => output::print_skip(&format!(
            "'{}' left unchanged",
            annotation.destination.display()
        )),
    }

    Ok(())
}

fn confirm_overwrite(path: &Path) -> Result<bool> {
    prompt::confirm_on_terminal(&format!("Overwrite '{}'?", path.display()))
        .map_err(CodecipherError::PromptError)
}

fn print_summary(summary: &AugmentSummary) {
    output::print_info(&format!(
        "{} rows: {} technology, {} fuel, {} blank, {} invalid",
        summary.rows,
        summary.technology,
        summary.fuel,
        summary.blank,
        summary.invalid.len()
    ));

    for (line, err) in summary.invalid.iter().take(MAX_LISTED_ROWS) {
        output::print_warning(&format!("line {}: {}", line, err));
    }
    if summary.invalid.len() > MAX_LISTED_ROWS {
        output::print_warning(&format!(
            "... and {} more invalid codes",
            summary.invalid.len() - MAX_LISTED_ROWS
        ));
    }

    if !summary.with_unknown.is_empty() {
        let listed: Vec<String> = summary
            .with_unknown
            .iter()
            .take(MAX_LISTED_ROWS)
            .map(|(line, code)| format!("{} (line {})", code, line))
            .collect();
        output::print_warning(&format!(
            "{} codes contain unknown segments: {}",
            summary.with_unknown.len(),
            listed.join(", ")
        ));
    }
}
