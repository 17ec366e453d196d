//! # CSV 表格读写
//!
//! 以原始字符串字段读取整个 CSV，并一次性写出。
//!
//! ## 依赖关系
//! - 被 `table/mod.rs` 调用
//! - 使用 `csv` 库读写 CSV

use crate::error::{CodecipherError, Result};

use csv::StringRecord;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// 读取 CSV 所有行（包括表头），行宽可不一致
pub fn read_table(path: &Path) -> Result<Vec<StringRecord>> {
    if !path.is_file() {
        return Err(CodecipherError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let file = File::open(path).map_err(|e| CodecipherError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let records = rdr
        .records()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    if records.is_empty() {
        return Err(CodecipherError::EmptyTable {
            path: path.display().to_string(),
        });
    }

    Ok(records)
}

/// 将表格序列化为 CSV 字节
pub fn to_csv_bytes(records: &[StringRecord]) -> Result<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    for record in records {
        wtr.write_record(record)?;
    }

    wtr.into_inner()
        .map_err(|e| CodecipherError::CsvError(e.into_error().into()))
}

/// 写出表格：先写入同目录临时文件，成功后再替换目标文件
///
/// 写入失败时目标文件保持原样。
pub fn write_table(path: &Path, records: &[StringRecord]) -> Result<()> {
    let bytes = to_csv_bytes(records)?;
    let write_error = |e: std::io::Error| CodecipherError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_error)?;
    tmp.write_all(&bytes).map_err(write_error)?;
    tmp.as_file().sync_all().map_err(write_error)?;

    // 覆盖已有文件时保留其权限
    if let Ok(meta) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(meta.permissions())
            .map_err(write_error)?;
    }

    tmp.persist(path).map_err(|e| write_error(e.error))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_read_flexible_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("FUEL.csv");
        fs::write(&path, "VALUE,NOTE\nDEBF\n\"UKWI\",\"x, y\"\n").unwrap();

        let records = read_table(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].len(), 1);
        assert_eq!(records[2].get(1), Some("x, y"));
    }

    #[test]
    fn test_read_missing_file() {
        let dir = tempdir().unwrap();
        let err = read_table(&dir.path().join("missing.csv")).unwrap_err();
        assert!(matches!(err, CodecipherError::FileNotFound { .. }));
    }

    #[test]
    fn test_read_empty_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();

        let err = read_table(&path).unwrap_err();
        assert!(matches!(err, CodecipherError::EmptyTable { .. }));
    }

    #[test]
    fn test_write_quotes_separators() {
        let records = vec![
            StringRecord::from(vec!["VALUE", "description"]),
            StringRecord::from(vec!["DEBF", "#Germany (DE), Biofuel (BF)"]),
        ];
        let bytes = to_csv_bytes(&records).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "VALUE,description\nDEBF,\"#Germany (DE), Biofuel (BF)\"\n"
        );
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("FUEL.csv");
        fs::write(&path, "VALUE\nDEBF\nDEBFCCP11\nUKWI\n").unwrap();

        let records = vec![
            StringRecord::from(vec!["VALUE", "description"]),
            StringRecord::from(vec!["DEBF", "#Germany (DE)| Biofuel (BF)"]),
        ];
        write_table(&path, &records).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "VALUE,description\nDEBF,#Germany (DE)| Biofuel (BF)\n"
        );
        // 临时文件已被重命名，目录中只剩目标文件
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let records = vec![StringRecord::from(vec!["VALUE"])];

        let err = write_table(&path, &records).unwrap_err();
        assert!(matches!(err, CodecipherError::FileWriteError { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("FUEL.csv");
        fs::write(&path, "VALUE\nDEBF\n\nDEBFCCP11\n").unwrap();

        let records = read_table(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].get(0), Some("DEBFCCP11"));
    }

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let records = vec![
            StringRecord::from(vec!["VALUE", "description"]),
            StringRecord::from(vec!["DEBF", "#Germany (DE)| Biofuel (BF)"]),
        ];
        write_table(&path, &records).unwrap();
        assert_eq!(read_table(&path).unwrap(), records);
    }
}
