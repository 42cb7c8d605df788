use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use wordlens_core::Config;

use crate::cli::InputArgs;

/// Read text from `--text`, `--file` or stdin, in that order
pub fn read_text(input: &InputArgs) -> anyhow::Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }

    if let Some(path) = &input.file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()));
    }

    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;
    Ok(text)
}

/// Default config location: `<config dir>/wordlens/config.json`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wordlens").join("config.json"))
}

/// An explicit path must exist; the default path is optional
pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<Config> {
    let config = match explicit {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::load_or_default(default_config_path().as_deref())?,
    };
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_read_text_prefers_inline() {
        let input = InputArgs {
            text: Some("inline".to_string()),
            file: None,
        };
        assert_eq!(read_text(&input).unwrap(), "inline");
    }

    #[test]
    fn test_read_text_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "from a file").unwrap();

        let input = InputArgs {
            text: None,
            file: Some(file.path().to_path_buf()),
        };
        assert_eq!(read_text(&input).unwrap(), "from a file");
    }

    #[test]
    fn test_read_text_missing_file() {
        let input = InputArgs {
            text: None,
            file: Some(PathBuf::from("/nonexistent/wordlens.txt")),
        };
        let err = read_text(&input).unwrap_err();
        assert!(err.to_string().contains("failed to read"));
    }

    #[test]
    fn test_load_config_explicit() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"keyword_count": 7}}"#).unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.keyword_count.get(), 7);
    }

    #[test]
    fn test_load_config_explicit_missing() {
        assert!(load_config(Some(Path::new("/nonexistent/wordlens.json"))).is_err());
    }
}
