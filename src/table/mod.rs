//! # 表格增补模块
//!
//! 读取 CSV，逐行解码代码列，追加描述列并写回。
//!
//! ## 流程
//! 1. 读取完整表格（失败时不产生任何输出）
//! 2. 内存中追加描述列
//! 3. 目标为空或与输入相同时，先征求确认
//! 4. 写入同目录临时文件后替换目标
//!
//! ## 依赖关系
//! - 被 `commands/annotate.rs` 调用
//! - 子模块: augment, io

pub mod augment;
pub mod io;

pub use augment::{augment_records, AugmentOptions, AugmentSummary};

use crate::error::Result;

use std::fs;
use std::path::{Path, PathBuf};

/// 写出结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// 写入新文件
    Written,
    /// 确认后覆盖输入文件
    Overwritten,
    /// 用户拒绝覆盖，未写入
    Declined,
}

/// 一次增补的结果
#[derive(Debug)]
pub struct Annotation {
    pub destination: PathBuf,
    pub outcome: Outcome,
    pub summary: AugmentSummary,
}

/// 判断两个路径是否指向同一文件
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    if a == b {
        return true;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// 为 CSV 文件追加描述列
///
/// `output` 为空或与 `input` 相同时调用 `confirm`，返回 false 则不写入。
pub fn annotate_file<F>(
    input: &Path,
    output: Option<&Path>,
    options: AugmentOptions,
    confirm: F,
) -> Result<Annotation>
where
    F: FnOnce(&Path) -> Result<bool>,
{
    let records = io::read_table(input)?;
    let table = augment_records(&records, options);

    let (destination, in_place) = match output {
        Some(path) if !is_same_file(input, path) => (path.to_path_buf(), false),
        _ => (input.to_path_buf(), true),
    };

    let outcome = if in_place {
        if confirm(&destination)? {
            io::write_table(&destination, &table.records)?;
            Outcome::Overwritten
        } else {
            Outcome::Declined
        }
    } else {
        io::write_table(&destination, &table.records)?;
        Outcome::Written
    };

    Ok(Annotation {
        destination,
        outcome,
        summary: table.summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CodecipherError;
    use tempfile::tempdir;

    const SOURCE: &str = "VALUE\nDEBFCCP11\nDEBF\n\n";

    #[test]
    fn test_annotate_to_new_file() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("TECHNOLOGY.csv");
        let output = dir.path().join("tech_codes.csv");
        fs::write(&input, "VALUE,YEAR\nDEBF,2020\n,2021\n").unwrap();

        let options = AugmentOptions::default();
        let annotation = annotate_file(&input, Some(output.as_path()), options, |_| {
            panic!("no confirmation expected")
        })
        .unwrap();

        assert_eq!(annotation.outcome, Outcome::Written);
        assert_eq!(annotation.destination, output);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "VALUE,YEAR,description\nDEBF,2020,#Germany (DE)| Biofuel (BF)\n,2021,\n"
        );
        assert_eq!(
            fs::read_to_string(&input).unwrap(),
            "VALUE,YEAR\nDEBF,2020\n,2021\n"
        );
    }

    #[test]
    fn test_short_row_description_stays_under_header() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("FUEL.csv");
        let output = dir.path().join("fuel_codes.csv");
        fs::write(&input, "VALUE,NOTE\nDEBF\nUKWI,x\n").unwrap();

        annotate_file(&input, Some(output.as_path()), AugmentOptions::default(), |_| {
            Ok(false)
        })
        .unwrap();

        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "VALUE,NOTE,description\nDEBF,,#Germany (DE)| Biofuel (BF)\n\
             UKWI,x,#United Kingdom (UK)| Wind (WI)\n"
        );
    }

    #[test]
    fn test_declined_overwrite_leaves_source() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("FUEL.csv");
        fs::write(&input, SOURCE).unwrap();
        let before = fs::read(&input).unwrap();

        let annotation =
            annotate_file(&input, None, AugmentOptions::default(), |_| Ok(false)).unwrap();

        assert_eq!(annotation.outcome, Outcome::Declined);
        assert_eq!(fs::read(&input).unwrap(), before);
    }

    #[test]
    fn test_confirmed_overwrite_when_output_equals_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("FUEL.csv");
        fs::write(&input, "VALUE\nDEBF\n").unwrap();

        let mut asked = None;
        let options = AugmentOptions::default();
        let annotation = annotate_file(&input, Some(input.as_path()), options, |p| {
            asked = Some(p.to_path_buf());
            Ok(true)
        })
        .unwrap();

        assert_eq!(asked, Some(input.clone()));
        assert_eq!(annotation.outcome, Outcome::Overwritten);
        assert_eq!(
            fs::read_to_string(&input).unwrap(),
            "VALUE,description\nDEBF,#Germany (DE)| Biofuel (BF)\n"
        );
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("missing.csv");
        let output = dir.path().join("out.csv");

        let options = AugmentOptions::default();
        let err = annotate_file(&input, Some(output.as_path()), options, |_| Ok(true)).unwrap_err();

        assert!(matches!(err, CodecipherError::FileNotFound { .. }));
        assert!(!output.exists());
    }

    #[test]
    fn test_prompt_error_propagates() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("FUEL.csv");
        fs::write(&input, SOURCE).unwrap();

        let err = annotate_file(&input, None, AugmentOptions::default(), |_| {
            Err(CodecipherError::InvalidArgument("closed".to_string()))
        })
        .unwrap_err();

        assert!(matches!(err, CodecipherError::InvalidArgument(_)));
        assert_eq!(fs::read_to_string(&input).unwrap(), SOURCE);
    }

    #[test]
    fn test_same_file_through_relative_segment() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("FUEL.csv");
        fs::write(&input, SOURCE).unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        assert!(is_same_file(&input, &sub.join("..").join("FUEL.csv")));
        assert!(!is_same_file(&input, &dir.path().join("other.csv")));
    }
}
