//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a word list: one word per line, blank lines skipped
    pub fn read_words(path: &Path) -> Result<Vec<String>> {
        Ok(Self::words(&Self::read_text(path)?))
    }

    /// Split `content` into trimmed, non-empty lines
    pub fn words(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::TempDir;

    #[test]
    fn test_read_text_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        let content = "¿Dónde está el perro?\nNo lo sé.";
        fs::write(&file_path, content).unwrap();

        let result = FileReader::read_text(&file_path).unwrap();
        assert_eq!(result, content);
    }

    #[test]
    fn test_read_text_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let result = FileReader::read_text(path);

        assert!(result.is_err());
        let err_msg = result.unwrap_err().to_string();
        assert!(err_msg.contains("Failed to read file"));
    }

    #[test]
    fn test_read_words() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("words.txt");

        fs::write(&file_path, "palabra\n\n  cohete \r\naire\n").unwrap();

        let words = FileReader::read_words(&file_path).unwrap();
        assert_eq!(words, vec!["palabra", "cohete", "aire"]);
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");

        File::create(&file_path).unwrap();

        assert_eq!(FileReader::read_text(&file_path).unwrap(), "");
        assert!(FileReader::read_words(&file_path).unwrap().is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_invalid_utf8_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("latin1.txt");

        fs::write(&file_path, [b'a', 0xf1, b'o']).unwrap();

        assert!(FileReader::read_text(&file_path).is_err());
    }
}
