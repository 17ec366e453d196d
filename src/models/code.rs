//! # 代码解码结果数据模型
//!
//! 描述燃料代码（4 位）与技术代码（9 位）的解码结果。
//!
//! ## 依赖关系
//! - 被 `codes/decoder.rs` 构造
//! - 被 `table/`, `commands/decode.rs` 使用

use std::fmt;

/// 段之间的分隔符
pub const SEGMENT_SEPARATOR: &str = "| ";

/// 代码类型（按长度区分）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    /// 4 位燃料代码：国家 + 能源商品
    Fuel,
    /// 9 位技术代码：国家 + 商品 + 技术 + 能源层级 + 年代 + 规模
    Technology,
}

impl CodeKind {
    pub const FUEL_LEN: usize = 4;
    pub const TECHNOLOGY_LEN: usize = 9;

    /// 按字符长度分类，其他长度返回 None
    pub fn classify(code: &str) -> Option<CodeKind> {
        match code.chars().count() {
            Self::FUEL_LEN => Some(CodeKind::Fuel),
            Self::TECHNOLOGY_LEN => Some(CodeKind::Technology),
            _ => None,
        }
    }
}

/// 段类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Country,
    Commodity,
    Technology,
    EnergyLevel,
    Age,
    Size,
}

impl Category {
    /// 类别名称，用于 "Unknown <category>" 占位符
    pub fn name(self) -> &'static str {
        match self {
            Category::Country => "country",
            Category::Commodity => "commodity",
            Category::Technology => "technology",
            Category::EnergyLevel => "energy level",
            Category::Age => "age",
            Category::Size => "size",
        }
    }

    /// 查表未命中时的占位描述
    pub fn unknown_label(self) -> String {
        format!("Unknown {}", self.name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 解码后的单个段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub category: Category,
    /// 原始代码片段
    pub raw: String,
    /// 可读描述
    pub label: String,
    /// 描述是否来自查表命中
    pub known: bool,
}

impl Segment {
    pub fn new(category: Category, raw: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            category,
            raw: raw.into(),
            label: label.into(),
            known: true,
        }
    }

    /// 查表未命中的段
    pub fn unknown(category: Category, raw: impl Into<String>) -> Self {
        Self {
            category,
            raw: raw.into(),
            label: category.unknown_label(),
            known: false,
        }
    }

    /// 原样输出的数字段（年代、规模）
    pub fn verbatim(category: Category, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            category,
            label: format!("{} {}", category.name(), raw),
            raw,
            known: true,
        }
    }

    fn is_verbatim(&self) -> bool {
        matches!(self.category, Category::Age | Category::Size)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_verbatim() {
            write!(f, "{}", self.label)
        } else {
            write!(f, "{} ({})", self.label, self.raw)
        }
    }
}

/// 完整解码结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedCode {
    /// 原始代码
    pub code: String,
    pub kind: CodeKind,
    /// 固定顺序的段列表
    pub segments: Vec<Segment>,
}

impl DecodedCode {
    pub fn new(code: impl Into<String>, kind: CodeKind, segments: Vec<Segment>) -> Self {
        Self {
            code: code.into(),
            kind,
            segments,
        }
    }

    /// 是否存在查表未命中的段
    pub fn has_unknown(&self) -> bool {
        self.segments.iter().any(|s| !s.known)
    }

    /// 生成描述字符串
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DecodedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(SEGMENT_SEPARATOR)?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}
