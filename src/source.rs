// Input acquisition for the command-line front end. The engine itself only
// ever sees plain text.
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{EngineError, Result};

/// Extensions the loader knows how to turn into text.
pub const SUPPORTED_EXTENSIONS: [&str; 5] = ["txt", "md", "csv", "json", "pdf"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    Inline(String),
    File(PathBuf),
    Url(String),
}

impl TextSource {
    pub fn load(&self) -> Result<String> {
        match self {
            TextSource::Inline(text) => Ok(text.clone()),
            TextSource::File(path) => read_file(path),
            TextSource::Url(url) => Err(EngineError::NotImplemented(format!(
                "fetching remote text from {}",
                url
            ))),
        }
    }
}

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

pub fn read_file(path: &Path) -> Result<String> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    debug!(path = %path.display(), ext = %ext, "loading text");

    match ext.as_str() {
        "txt" | "md" | "csv" | "json" => {
            let mut file = File::open(path)?;
            let mut content = String::new();
            file.read_to_string(&mut content)?;
            Ok(content)
        }
        "pdf" => pdf_extract::extract_text(path).map_err(|e| {
            EngineError::Unsupported(format!("PDF extraction failed for {}: {}", path.display(), e))
        }),
        _ => Err(EngineError::Unsupported(ext)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_read_text_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("test.txt");
        let mut file = File::create(&file_path)?;
        writeln!(file, "Hello, World!")?;

        let content = TextSource::File(file_path).load()?;
        assert_eq!(content, "Hello, World!\n");
        Ok(())
    }

    #[test]
    fn test_markdown_is_plain_text() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("notes.MD");
        std::fs::write(&file_path, "# Notes")?;
        assert_eq!(read_file(&file_path)?, "# Notes");
        Ok(())
    }

    #[test]
    fn test_unsupported_extension() {
        let err = read_file(Path::new("/tmp/image.png")).unwrap_err();
        assert!(matches!(err, EngineError::Unsupported(ext) if ext == "png"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = read_file(Path::new("/definitely/not/here.txt")).unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }

    #[test]
    fn test_url_not_implemented() {
        let err = TextSource::Url("https://example.com".into()).load().unwrap_err();
        assert!(matches!(err, EngineError::NotImplemented(_)));
    }

    #[test]
    fn test_inline_passthrough() {
        let text = TextSource::Inline("abc".into()).load().unwrap();
        assert_eq!(text, "abc");
    }

    #[test]
    fn test_is_supported() {
        assert!(is_supported(Path::new("a/b.txt")));
        assert!(is_supported(Path::new("report.PDF")));
        assert!(!is_supported(Path::new("binary.exe")));
        assert!(!is_supported(Path::new("README")));
    }
}
