use crate::models::TestCaseRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Extensions accepted for scenario import files.
pub const SCENARIO_EXTENSIONS: [&str; 2] = ["feature", "txt"];

/// Separator placed between scenarios in exported files.
pub const SCENARIO_SEPARATOR: &str = "\n\n";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Unsupported scenario file {0}: expected .feature or .txt")]
    UnsupportedExtension(PathBuf),
    #[error("Invalid scenario directory: {0}")]
    InvalidDir(String),
}

/// True if `path` has one of the [`SCENARIO_EXTENSIONS`], in any case.
pub fn is_scenario_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SCENARIO_EXTENSIONS.iter().any(|e| e.eq_ignore_ascii_case(ext)))
}

/// Read a scenario file as UTF-8 text, without a leading byte-order mark
pub fn read_scenario_file(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    if !is_scenario_file(path) {
        return Err(IoError::UnsupportedExtension(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    Ok(match content.strip_prefix('\u{feff}') {
        Some(rest) => rest.to_string(),
        None => content,
    })
}

/// Write content to a file
pub fn write_file(path: &Path, content: &str) -> Result<(), IoError> {
    // Create parent directories if they don't exist
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(path, content).map_err(IoError::Io)
}

/// The export file body: every record's content, separated by a blank line.
pub fn export_content(records: &[TestCaseRecord]) -> String {
    records
        .iter()
        .map(|r| r.content.as_str())
        .collect::<Vec<_>>()
        .join(SCENARIO_SEPARATOR)
}

/// Scan a directory tree for scenario files, sorted by path
pub fn scan_scenario_files(dir: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !dir.is_dir() {
        return Err(IoError::InvalidDir(format!(
            "{} is not a directory",
            dir.display()
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(dir, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    let entries = fs::read_dir(dir).map_err(IoError::Io)?;

    for entry in entries {
        let entry = entry.map_err(IoError::Io)?;
        let path = entry.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if is_scenario_file(&path) {
            files.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsing::FALLBACK_TITLE;
    use crate::tests::{create_test_file, create_test_store_dir};

    #[test]
    fn test_read_scenario_file_success() {
        let dir = create_test_store_dir();
        let path = create_test_file(&dir, "login.feature", "Scenario: Login\nGiven x");

        let content = read_scenario_file(&path).unwrap();
        assert_eq!(content, "Scenario: Login\nGiven x");
    }

    #[test]
    fn test_read_scenario_file_not_found() {
        let dir = create_test_store_dir();
        let result = read_scenario_file(&dir.path().join("missing.feature"));
        assert!(matches!(result, Err(IoError::NotFound(_))));
    }

    #[test]
    fn test_read_rejects_other_extensions() {
        let dir = create_test_store_dir();
        let path = create_test_file(&dir, "notes.md", "Scenario: A");
        let result = read_scenario_file(&path);
        assert!(matches!(result, Err(IoError::UnsupportedExtension(_))));
    }

    #[test]
    fn test_read_strips_byte_order_mark() {
        let dir = create_test_store_dir();
        let path = create_test_file(&dir, "bom.feature", "\u{feff}Scenario: Login\nGiven x");

        let content = read_scenario_file(&path).unwrap();
        assert_eq!(content, "Scenario: Login\nGiven x");
    }

    #[test]
    fn test_extensions_match_in_any_case() {
        assert!(is_scenario_file(Path::new("LOGIN.FEATURE")));
        assert!(is_scenario_file(Path::new("notes.Txt")));
        assert!(!is_scenario_file(Path::new("login.features")));
        assert!(!is_scenario_file(Path::new("feature")));
    }

    #[test]
    fn test_read_invalid_utf8_is_io_error() {
        let dir = create_test_store_dir();
        let path = dir.path().join("binary.txt");
        std::fs::write(&path, [0xff, 0xfe, 0x00]).unwrap();

        let result = read_scenario_file(&path);
        assert!(matches!(result, Err(IoError::Io(_))));
    }

    #[test]
    fn test_write_file_creates_parent_directories() {
        let dir = create_test_store_dir();
        let path = dir.path().join("out/nested/all.feature");

        write_file(&path, "Scenario: A").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "Scenario: A");
    }

    #[test]
    fn test_export_content_joins_with_blank_line() {
        let records = vec![
            TestCaseRecord::new("Scenario: A\nGiven x", FALLBACK_TITLE),
            TestCaseRecord::new("Scenario: B\nGiven y", FALLBACK_TITLE),
        ];
        assert_eq!(
            export_content(&records),
            "Scenario: A\nGiven x\n\nScenario: B\nGiven y"
        );
        assert_eq!(export_content(&[]), "");
    }

    #[test]
    fn test_scan_finds_feature_and_txt_files_only() {
        let dir = create_test_store_dir();
        create_test_file(&dir, "a.feature", "Scenario: A");
        create_test_file(&dir, "b.txt", "Scenario: B");
        create_test_file(&dir, "c.json", "[]");
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("d.feature"), "Scenario: D").unwrap();

        let files = scan_scenario_files(dir.path()).unwrap();

        let names: Vec<_> = files
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.feature", "b.txt", "d.feature"]);
    }

    #[test]
    fn test_scan_rejects_missing_directory() {
        let result = scan_scenario_files(Path::new("/this/path/does/not/exist"));
        assert!(matches!(result, Err(IoError::InvalidDir(_))));
    }
}
