use std::fs;
use std::path::Path;

use crate::error::{ReportError, Result};

/// Language keys accepted for the test-coverage analyzer.
pub const SUPPORTED_COVERAGE_KEYS: [&str; 12] = [
    "python",
    "go",
    "javascript",
    "ruby",
    "java",
    "scala",
    "php",
    "csharp",
    "cxx",
    "rust",
    "swift",
    "kotlin",
];

const TEST_COVERAGE_SHORTCODE: &str = "test-coverage";

/// The value being reported plus its classification metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub analyzer_shortcode: String,
    pub analyzer_type: Option<String>,
    pub key: String,
    pub value: String,
}

impl Artifact {
    /// Assemble a validated artifact from caller-supplied flag values.
    ///
    /// Shortcode, type and key are whitespace-trimmed. The value comes from
    /// exactly one of `value` (used verbatim) or the contents of
    /// `value_file`; supplying neither is a configuration error, detected
    /// before any network call.
    pub fn from_flags(
        analyzer_shortcode: &str,
        analyzer_type: &str,
        key: &str,
        value: &str,
        value_file: &str,
    ) -> Result<Self> {
        let analyzer_shortcode = analyzer_shortcode.trim().to_string();
        let analyzer_type = analyzer_type.trim();
        let key = key.trim().to_string();
        let value_file = value_file.trim();

        validate_key(&analyzer_shortcode, &key)?;

        if value.is_empty() && value_file.is_empty() {
            return Err(ReportError::Config(
                "'--value' (or) '--value-file' not passed".to_string(),
            ));
        }

        let value = if value_file.is_empty() {
            value.to_string()
        } else {
            read_value_file(value_file)?
        };

        if value.is_empty() {
            return Err(ReportError::Config(
                "artifact value is empty; supply a non-empty '--value' or '--value-file'"
                    .to_string(),
            ));
        }

        Ok(Self {
            analyzer_shortcode,
            analyzer_type: if analyzer_type.is_empty() {
                None
            } else {
                Some(analyzer_type.to_string())
            },
            key,
            value,
        })
    }
}

/// Reject unrecognized keys for the test-coverage analyzer before any
/// network call. Other analyzers accept arbitrary keys.
pub fn validate_key(analyzer_shortcode: &str, key: &str) -> Result<()> {
    if analyzer_shortcode == TEST_COVERAGE_SHORTCODE
        && !SUPPORTED_COVERAGE_KEYS.contains(&key)
    {
        return Err(ReportError::Config(format!(
            "invalid key: {key} (supported keys: {})",
            SUPPORTED_COVERAGE_KEYS.join(", ")
        )));
    }
    Ok(())
}

fn read_value_file(path: &str) -> Result<String> {
    let bytes = fs::read(Path::new(path)).map_err(|err| {
        ReportError::Config(format!("unable to read specified value file {path}: {err}"))
    })?;
    // The payload travels as a JSON string, so the file must decode as text.
    String::from_utf8(bytes).map_err(|_| {
        ReportError::Config(format!(
            "value file {path} is not valid UTF-8; the report payload is sent as text"
        ))
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn literal_value_is_used_verbatim() {
        let artifact =
            Artifact::from_flags("test-coverage", "", "go", "90.5", "").expect("artifact");
        assert_eq!(artifact.value, "90.5");
        assert_eq!(artifact.key, "go");
        assert_eq!(artifact.analyzer_type, None);
    }

    #[test]
    fn value_file_contents_become_the_value() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        write!(file, "line1\nline2").expect("write");
        let path = file.path().to_str().expect("path").to_string();

        let artifact =
            Artifact::from_flags("test-coverage", "", "rust", "", &path).expect("artifact");
        assert_eq!(artifact.value, "line1\nline2");
    }

    #[test]
    fn empty_value_file_is_a_config_error() {
        let file = tempfile::NamedTempFile::new().expect("tempfile");
        let path = file.path().to_str().expect("path").to_string();

        let err = Artifact::from_flags("test-coverage", "", "go", "", &path).unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn non_utf8_value_file_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(&[0xff, 0xfe, 0x90, 0x80]).expect("write");
        let path = file.path().to_str().expect("path").to_string();

        let err = Artifact::from_flags("test-coverage", "", "go", "", &path).unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
        assert!(err.to_string().contains("UTF-8"));
    }

    #[test]
    fn missing_value_source_is_a_config_error() {
        let err = Artifact::from_flags("test-coverage", "", "go", "", "").unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }

    #[test]
    fn missing_value_file_is_a_config_error() {
        let err =
            Artifact::from_flags("test-coverage", "", "go", "", "/no/such/file").unwrap_err();
        assert!(matches!(err, ReportError::Config(_)));
    }

    #[test]
    fn unsupported_coverage_key_is_rejected() {
        let err = Artifact::from_flags("test-coverage", "", "cobol", "1", "").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("invalid key: cobol"));
    }

    #[test]
    fn non_coverage_analyzer_accepts_any_key() {
        let artifact = Artifact::from_flags("metrics", "", "anything", "1", "").expect("artifact");
        assert_eq!(artifact.key, "anything");
    }

    #[test]
    fn analyzer_type_is_trimmed_and_kept_when_non_empty() {
        let artifact =
            Artifact::from_flags("test-coverage", "  community ", "go", "1", "").expect("artifact");
        assert_eq!(artifact.analyzer_type.as_deref(), Some("community"));
    }

    #[test]
    fn blank_analyzer_type_collapses_to_none() {
        let artifact =
            Artifact::from_flags("test-coverage", "   ", "go", "1", "").expect("artifact");
        assert_eq!(artifact.analyzer_type, None);
    }
}
