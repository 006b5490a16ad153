use std::fs;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::utils::error::RustyllError;

/// Read a source file to a string, tagging failures with the path
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String, RustyllError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| RustyllError::file(path, e))
}

/// Check whether a file opens with a YAML front matter fence.
///
/// Only the first line is read, so binary assets are cheap to test.
pub fn has_yaml_header<P: AsRef<Path>>(path: P) -> io::Result<bool> {
    let file = fs::File::open(path.as_ref())?;
    let mut reader = BufReader::new(file);
    let mut first_line = Vec::new();
    reader.read_until(b'\n', &mut first_line)?;

    if !first_line.ends_with(b"\n") || !first_line.starts_with(b"---") {
        return Ok(false);
    }

    Ok(first_line[3..].iter().all(|b| b.is_ascii_whitespace()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_has_yaml_header() {
        let dir = TempDir::new().unwrap();

        let with = dir.path().join("with.md");
        fs::write(&with, "---\ntitle: Hi\n---\n# Hi\n").unwrap();
        assert!(has_yaml_header(&with).unwrap());

        let crlf = dir.path().join("crlf.md");
        fs::write(&crlf, "---  \r\ntitle: Hi\r\n---\r\n").unwrap();
        assert!(has_yaml_header(&crlf).unwrap());

        let without = dir.path().join("without.md");
        fs::write(&without, "# Just markdown\n").unwrap();
        assert!(!has_yaml_header(&without).unwrap());

        let rule = dir.path().join("rule.md");
        fs::write(&rule, "----\nnot a fence\n").unwrap();
        assert!(!has_yaml_header(&rule).unwrap());

        let binary = dir.path().join("image.png");
        fs::write(&binary, [0x89u8, 0x50, 0x4e, 0x47, 0x0d, 0x0a]).unwrap();
        assert!(!has_yaml_header(&binary).unwrap());
    }

    #[test]
    fn test_read_source_reports_path() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("nope.md");

        match read_source(&missing) {
            Err(RustyllError::File { path, source }) => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
