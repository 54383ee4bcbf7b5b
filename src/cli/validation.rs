//! CLI argument validation functions
//!
//! Value parsers for arguments clap cannot check on its own.

use std::fs;
use std::path::PathBuf;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!(
            "Cannot read configuration file '{}': {}",
            path_str, e
        )),
    }
}

/// Parse a `KEY=VALUE` payload field
///
/// The value may itself contain `=`; only the first one splits.
pub fn parse_field(field_str: &str) -> Result<(String, String), String> {
    let (key, value) = field_str
        .split_once('=')
        .ok_or_else(|| format!("Field must be in KEY=VALUE form, got: '{}'", field_str))?;

    let key = key.trim();
    if key.is_empty() {
        return Err(format!("Field key cannot be empty, got: '{}'", field_str));
    }

    if key.contains(char::is_whitespace) {
        return Err(format!("Field key cannot contain whitespace: '{}'", key));
    }

    Ok((key.to_string(), value.to_string()))
}

/// Reject blank free-text arguments such as `--body`
pub fn validate_non_blank(value: &str) -> Result<String, String> {
    if value.trim().is_empty() {
        return Err("Value cannot be empty".to_string());
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_field() {
        assert_eq!(
            parse_field("priority=high").unwrap(),
            ("priority".to_string(), "high".to_string())
        );
        assert_eq!(
            parse_field("query=a=b").unwrap(),
            ("query".to_string(), "a=b".to_string())
        );
        assert_eq!(
            parse_field("note=").unwrap(),
            ("note".to_string(), String::new())
        );
    }

    #[test]
    fn test_parse_field_invalid() {
        assert!(parse_field("no-separator").is_err());
        assert!(parse_field("=value").is_err());
        assert!(parse_field("two words=value").is_err());
    }

    #[test]
    fn test_validate_config_file_path() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_str().unwrap();
        assert_eq!(validate_config_file_path(path).unwrap(), file.path());

        assert!(validate_config_file_path("/definitely/not/here.toml").is_err());

        let dir = tempfile::tempdir().unwrap();
        assert!(validate_config_file_path(dir.path().to_str().unwrap()).is_err());
    }

    #[test]
    fn test_validate_non_blank() {
        assert_eq!(validate_non_blank("Hello").unwrap(), "Hello");
        assert!(validate_non_blank("   ").is_err());
    }
}
