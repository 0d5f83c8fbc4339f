use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("no panels defined in layout")]
    NoPanels,
}

#[derive(Debug, thiserror::Error)]
pub enum HomedeckError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("window error: {0}")]
    Window(String),

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.yml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.yml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("width must be positive".into());
        assert_eq!(
            err.to_string(),
            "config validation error: width must be positive"
        );

        let err = ConfigError::NoPanels;
        assert_eq!(err.to_string(), "no panels defined in layout");
    }

    #[test]
    fn homedeck_error_from_config() {
        let config_err = ConfigError::ParseError("bad yaml".into());
        let err: HomedeckError = config_err.into();
        assert!(matches!(err, HomedeckError::Config(_)));
        assert!(err.to_string().contains("bad yaml"));
    }

    #[test]
    fn homedeck_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: HomedeckError = io_err.into();
        assert!(matches!(err, HomedeckError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn homedeck_error_other_variants() {
        let err = HomedeckError::WebView("js error".into());
        assert_eq!(err.to_string(), "webview error: js error");

        let err = HomedeckError::Window("creation failed".into());
        assert_eq!(err.to_string(), "window error: creation failed");

        let err = HomedeckError::Clipboard("access denied".into());
        assert_eq!(err.to_string(), "clipboard error: access denied");

        let err = HomedeckError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
