//! # 表格增补
//!
//! 为每行追加代码描述列的纯变换，不涉及文件读写。
//!
//! ## 规则
//! - 表头行追加 `description`
//! - 代码为空：追加空单元格
//! - 代码长度为 4 或 9：追加 `#<描述>`
//! - 其他长度：追加 `#ERROR: <原因>`
//!
//! ## 依赖关系
//! - 被 `table/mod.rs` 调用
//! - 使用 `codes/decoder.rs`

use crate::codes::{self, DecodeError};
use crate::models::{CodeKind, DecodedCode};

use csv::StringRecord;

/// 追加列的表头
pub const DESCRIPTION_HEADER: &str = "description";

/// 描述单元格前缀标记
pub const DESCRIPTION_MARKER: char = '#';

/// 增补选项
#[derive(Debug, Clone, Copy, Default)]
pub struct AugmentOptions {
    /// 代码所在列（从 0 开始）
    pub code_column: usize,
}

/// 单行处理结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome {
    Blank,
    Decoded(DecodedCode),
    Invalid(DecodeError),
}

impl RowOutcome {
    /// 生成追加单元格内容
    pub fn cell(&self) -> String {
        match self {
            RowOutcome::Blank => String::new(),
            RowOutcome::Decoded(decoded) => format!("{}{}", DESCRIPTION_MARKER, decoded),
            RowOutcome::Invalid(err) => format!("{}ERROR: {}", DESCRIPTION_MARKER, err),
        }
    }
}

/// 增补统计
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AugmentSummary {
    /// 数据行数（不含表头）
    pub rows: usize,
    pub fuel: usize,
    pub technology: usize,
    pub blank: usize,
    /// 无法解码的行: (行号, 错误)，行号从 1 开始并计入表头
    pub invalid: Vec<(usize, DecodeError)>,
    /// 含未知段的行: (行号, 代码)
    pub with_unknown: Vec<(usize, String)>,
}

impl AugmentSummary {
    fn record(&mut self, line: usize, outcome: &RowOutcome) {
        self.rows += 1;
        match outcome {
            RowOutcome::Blank => self.blank += 1,
            RowOutcome::Decoded(decoded) => {
                match decoded.kind {
                    CodeKind::Fuel => self.fuel += 1,
                    CodeKind::Technology => self.technology += 1,
                }
                if decoded.has_unknown() {
                    self.with_unknown.push((line, decoded.code.clone()));
                }
            }
            RowOutcome::Invalid(err) => self.invalid.push((line, err.clone())),
        }
    }
}

/// 增补后的表格
#[derive(Debug, Clone)]
pub struct AugmentedTable {
    pub records: Vec<StringRecord>,
    pub summary: AugmentSummary,
}

/// 解码单个单元格；空白视为缺失
pub fn decode_cell(cell: Option<&str>) -> RowOutcome {
    let code = match cell.map(str::trim) {
        Some(code) if !code.is_empty() => code,
        _ => return RowOutcome::Blank,
    };

    match codes::decode_code(code) {
        Ok(decoded) => RowOutcome::Decoded(decoded),
        Err(err) => RowOutcome::Invalid(err),
    }
}

fn padded(record: &StringRecord, width: usize) -> StringRecord {
    let mut record = record.clone();
    while record.len() < width {
        record.push_field("");
    }
    record
}

/// 为表格追加描述列，首行视为表头
pub fn augment_records(records: &[StringRecord], options: AugmentOptions) -> AugmentedTable {
    let mut summary = AugmentSummary::default();
    let mut augmented = Vec::with_capacity(records.len());

    let Some((header, rows)) = records.split_first() else {
        return AugmentedTable {
            records: augmented,
            summary,
        };
    };

    // 短行补齐空字段，保证描述列对齐
    let width = records.iter().map(StringRecord::len).max().unwrap_or(0);

    let mut header = padded(header, width);
    header.push_field(DESCRIPTION_HEADER);
    augmented.push(header);

    for (idx, row) in rows.iter().enumerate() {
        let outcome = decode_cell(row.get(options.code_column));
        summary.record(idx + 2, &outcome);

        let mut row = padded(row, width);
        row.push_field(&outcome.cell());
        augmented.push(row);
    }

    AugmentedTable {
        records: augmented,
        summary,
    }
}
