// src/file.rs
//
// JSON export. Always the filtered (not paginated) table, without the derived
// thumbnail column. Plain overwrite; no temp file, no backup.

use std::{
    fs,
    io,
    path::{Path, PathBuf},
};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::config::consts::{EXPORT_FILE, EXPORT_MIME};
use crate::config::options::ExportOptions;
use crate::data::{BookRecord, BookTable};

#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("cannot serialize export: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("{path}: {source}")]
    Io { path: PathBuf, source: io::Error },
}

fn io_err(path: &Path) -> impl FnOnce(io::Error) -> ExportError + '_ {
    move |source| ExportError::Io { path: path.to_path_buf(), source }
}

/// Export bytes offered for download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Download {
    pub file_name: &'static str,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// JSON array of objects, 4-space indent, UTF-8.
pub fn to_json(table: &BookTable) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::with_capacity(table.len() * 256);
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    table.records().serialize(&mut ser)?;
    Ok(buf)
}

pub fn from_json(bytes: &[u8]) -> Result<Vec<BookRecord>, ExportError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Write the export, replacing whatever was there. Returns the bytes written.
pub fn write_export(path: &Path, table: &BookTable) -> Result<Vec<u8>, ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    let bytes = to_json(table)?;
    fs::write(path, &bytes).map_err(io_err(path))?;
    Ok(bytes)
}

/// Current export file as a download payload.
pub fn read_download(path: &Path) -> Result<Download, ExportError> {
    let bytes = fs::read(path).map_err(io_err(path))?;
    Ok(Download { file_name: EXPORT_FILE, mime: EXPORT_MIME, bytes })
}

/// Save a download under its fixed file name inside `export`'s download dir.
pub fn save_download(export: &ExportOptions, download: &Download) -> Result<PathBuf, ExportError> {
    let dir = export.download_dir();
    ensure_directory(dir)?;
    let path = dir.join(download.file_name);
    fs::write(&path, &download.bytes).map_err(io_err(&path))?;
    Ok(path)
}

pub fn ensure_directory(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() && !dir.is_dir() {
        return Err(ExportError::Io {
            path: dir.to_path_buf(),
            source: io::Error::new(io::ErrorKind::AlreadyExists, "path exists but is not a directory"),
        });
    }
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(io_err(dir))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Rating;

    #[test]
    fn json_uses_four_space_indent_and_field_order() {
        let t: BookTable = vec![
            BookRecord::new("A", "£1.00", Rating::Two, "In stock", "https://x/a.jpg").unwrap(),
        ]
        .into_iter()
        .collect();
        let s = String::from_utf8(to_json(&t).unwrap()).unwrap();
        let expected = "[\n    {\n        \"title\": \"A\",\n        \"price\": \"£1.00\",\n        \"rating\": \"Two\",\n        \"stock\": \"In stock\",\n        \"image_url\": \"https://x/a.jpg\"\n    }\n]";
        assert_eq!(s, expected);
    }

    #[test]
    fn empty_table_exports_empty_array() {
        assert_eq!(to_json(&BookTable::empty()).unwrap(), b"[]");
    }
}
