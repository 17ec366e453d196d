//! # decode 命令实现
//!
//! 解码命令行给出的代码并输出描述。
//!
//! ## 功能
//! - 逐个解码，失败的代码单独报告，不影响其余代码
//! - 可选分段表格显示
//! - 可选导出分段 CSV
//!
//! ## 依赖关系
//! - 使用 `cli/decode.rs` 定义的参数
//! - 使用 `codes/decoder.rs`
//! - 使用 `utils/output.rs`

use crate::cli::decode::DecodeArgs;
use crate::codes::decode_code;
use crate::error::{CodecipherError, Result};
use crate::models::DecodedCode;
use crate::utils::output;

use serde::Serialize;
use std::path::Path;
use tabled::{Table, Tabled};

/// 分段明细行
#[derive(Debug, Clone, PartialEq, Eq, Tabled, Serialize)]
struct SegmentRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Raw")]
    raw: String,
    #[tabled(rename = "Description")]
    label: String,
}

/// 执行 decode 命令
pub fn execute(args: DecodeArgs) -> Result<()> {
    // 单个代码直接返回解码错误
    if let [code] = args.codes.as_slice() {
        let decoded = decode_code(code)?;
        return report(&[decoded], &args);
    }

    let mut decoded = Vec::with_capacity(args.codes.len());
    let mut failed = 0;

    for code in &args.codes {
        match decode_code(code) {
            Ok(d) => decoded.push(d),
            Err(e) => {
                output::print_failure(code, &e.to_string());
                failed += 1;
            }
        }
    }

    report(&decoded, &args)?;

    if failed > 0 {
        return Err(CodecipherError::DecodeFailures {
            failed,
            total: args.codes.len(),
        });
    }

    Ok(())
}

fn report(decoded: &[DecodedCode], args: &DecodeArgs) -> Result<()> {
    for d in decoded {
        output::print_decoded(&d.code, &d.description());
    }

    if decoded.is_empty() {
        return Ok(());
    }

    let rows = segment_rows(decoded);

    if args.table {
        output::print_header("Segment Breakdown");
        println!("{}", Table::new(&rows));
    }

    if let Some(path) = &args.export {
        export_segments(&rows, path)?;
        output::print_success(&format!("Segments saved to '{}'", path.display()));
    }

    Ok(())
}

fn segment_rows(decoded: &[DecodedCode]) -> Vec<SegmentRow> {
    decoded
        .iter()
        .flat_map(|d| {
            d.segments.iter().map(move |s| SegmentRow {
                code: d.code.clone(),
                category: s.category.to_string(),
                raw: s.raw.clone(),
                label: s.label.clone(),
            })
        })
        .collect()
}

/// 导出分段明细到 CSV
fn export_segments(rows: &[SegmentRow], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush().map_err(|e| CodecipherError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
