//! Plain-text document loading.
//!
//! The engine only reads text. Office and PDF documents are rejected here,
//! before any extraction runs.

use crate::error::{CliError, Result};
use std::io::Read;
use std::path::Path;

/// Extensions of formats that need a converter first
const UNSUPPORTED_EXTENSIONS: &[&str] = &["pdf", "docx", "doc"];

/// A loaded daily log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Where the text came from (a path, or `<stdin>`)
    pub source: String,

    /// Full document text
    pub text: String,
}

/// Load one file as UTF-8 text.
pub fn load_file(path: &Path) -> Result<Document> {
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        if UNSUPPORTED_EXTENSIONS.contains(&ext.to_lowercase().as_str()) {
            return Err(CliError::UnsupportedFormat(format!(
                "{} (.{} files must be converted to plain text first)",
                path.display(),
                ext
            )));
        }
    }

    let source = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|e| CliError::Read {
        path: source.clone(),
        source: e,
    })?;
    decode(source, bytes)
}

/// Load one document from a reader.
pub fn load_reader(mut reader: impl Read, source: &str) -> Result<Document> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes).map_err(|e| CliError::Read {
        path: source.to_string(),
        source: e,
    })?;
    decode(source.to_string(), bytes)
}

fn decode(source: String, bytes: Vec<u8>) -> Result<Document> {
    let text = String::from_utf8(bytes)
        .map_err(|e| CliError::InvalidInput(format!("{} is not UTF-8 text: {}", source, e)))?;
    Ok(Document { source, text })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_text_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        writeln!(file, "Daily Site Log - SEDRA Residential").unwrap();

        let doc = load_file(file.path()).unwrap();
        assert_eq!(doc.text, "Daily Site Log - SEDRA Residential\n");
        assert_eq!(doc.source, file.path().display().to_string());
    }

    #[test]
    fn test_office_and_pdf_rejected() {
        for name in ["log.pdf", "log.docx", "log.doc", "LOG.PDF"] {
            let result = load_file(Path::new(name));
            assert!(matches!(result, Err(CliError::UnsupportedFormat(_))), "{}", name);
        }
    }

    #[test]
    fn test_non_utf8_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x44, 0x61, 0xff, 0xfe, 0x79]).unwrap();
        assert!(matches!(load_file(file.path()), Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_file(Path::new("/nonexistent/log.txt"));
        assert!(matches!(result, Err(CliError::Read { .. })));
    }

    #[test]
    fn test_load_reader() {
        let doc = load_reader("Date: 15/10/2025\n".as_bytes(), "<stdin>").unwrap();
        assert_eq!(doc.source, "<stdin>");
        assert_eq!(doc.text, "Date: 15/10/2025\n");
    }
}
