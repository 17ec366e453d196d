//! # 定长代码解码器
//!
//! 将 4 位燃料代码和 9 位技术代码按位置切分并查表解码。
//!
//! ## 代码布局
//! ```text
//! 燃料代码: [0:2] 国家  [2:4] 商品
//! 技术代码: [0:2] 国家  [2:4] 商品  [4:6] 技术  [6] 能源层级  [7] 年代  [8] 规模
//! ```
//!
//! ## 依赖关系
//! - 使用 `codes/tables.rs` 查找表
//! - 产出 `models::DecodedCode`

use super::tables;
use crate::models::{Category, CodeKind, DecodedCode, Segment};

use std::ops::Range;
use thiserror::Error;

/// 解码错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Code '{code}' has length {length} (expected {expected})")]
    InvalidLength {
        code: String,
        length: usize,
        expected: String,
    },
}

impl DecodeError {
    fn invalid_length(code: &str, expected: &str) -> Self {
        DecodeError::InvalidLength {
            code: code.to_string(),
            length: code.chars().count(),
            expected: expected.to_string(),
        }
    }
}

/// 解码 4 位或 9 位代码
pub fn decode_code(code: &str) -> Result<DecodedCode, DecodeError> {
    match CodeKind::classify(code) {
        Some(CodeKind::Technology) => decode_tech(code),
        Some(CodeKind::Fuel) => decode_fuel(code),
        None => Err(DecodeError::invalid_length(code, "4 or 9")),
    }
}

/// 解码 9 位技术代码
pub fn decode_tech(code: &str) -> Result<DecodedCode, DecodeError> {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != CodeKind::TECHNOLOGY_LEN {
        return Err(DecodeError::invalid_length(code, "9"));
    }

    let country = slice(&chars, 0..2);
    let commodity = slice(&chars, 2..4);
    let technology = slice(&chars, 4..6);
    let energy_level = slice(&chars, 6..7);
    let age = slice(&chars, 7..8);
    let size = slice(&chars, 8..9);

    let segments = vec![
        looked_up(Category::Country, country, tables::lookup_country),
        looked_up(Category::Commodity, commodity, tables::lookup_commodity),
        technology_segment(technology),
        looked_up(Category::EnergyLevel, energy_level, tables::lookup_energy_level),
        Segment::verbatim(Category::Age, age),
        Segment::verbatim(Category::Size, size),
    ];

    Ok(DecodedCode::new(code, CodeKind::Technology, segments))
}

/// 解码 4 位燃料代码
pub fn decode_fuel(code: &str) -> Result<DecodedCode, DecodeError> {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != CodeKind::FUEL_LEN {
        return Err(DecodeError::invalid_length(code, "4"));
    }

    let segments = vec![
        looked_up(Category::Country, slice(&chars, 0..2), tables::lookup_country),
        looked_up(Category::Commodity, slice(&chars, 2..4), tables::lookup_commodity),
    ];

    Ok(DecodedCode::new(code, CodeKind::Fuel, segments))
}

fn slice(chars: &[char], range: Range<usize>) -> String {
    chars[range].iter().collect()
}

fn looked_up(
    category: Category,
    raw: String,
    lookup: fn(&str) -> Option<&'static str>,
) -> Segment {
    match lookup(&raw) {
        Some(label) => Segment::new(category, raw, label),
        None => Segment::unknown(category, raw),
    }
}

/// 技术段：技术表未命中时，若为国家代码则解释为跨国连接
fn technology_segment(raw: String) -> Segment {
    if let Some(label) = tables::lookup_technology(&raw) {
        return Segment::new(Category::Technology, raw, label);
    }
    match tables::lookup_country(&raw) {
        Some(country) => Segment::new(Category::Technology, raw, format!("connected to {country}")),
        None => Segment::unknown(Category::Technology, raw),
    }
}
