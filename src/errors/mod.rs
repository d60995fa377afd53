use thiserror::Error;

/// Raised when the feed's match list and team list disagree
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataIntegrityError {
    #[error("match #{match_index} references unknown team '{team}'")]
    UnknownTeam { team: String, match_index: usize },
}

/// The feed could not be loaded; no statistics are computed after this
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("{context}")]
    Read {
        context: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{context}")]
    Fetch {
        context: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{context}: HTTP {status}")]
    Status { context: String, status: u16 },
    #[error("{context}")]
    Parse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to read errors
pub fn read_context(path: &str) -> String {
    format!("Failed to read: {}", path)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_team_message() {
        let err = DataIntegrityError::UnknownTeam {
            team: "Atlantis".to_string(),
            match_index: 4,
        };
        assert_eq!(err.to_string(), "match #4 references unknown team 'Atlantis'");
    }

    #[test]
    fn test_load_error_keeps_source() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LoadError::Parse {
            context: parse_context("tournament feed"),
            source,
        };

        assert_eq!(err.to_string(), "Failed to parse tournament feed");
        assert!(std::error::Error::source(&err).is_some());
    }
}
