use std::fmt;
use std::path::PathBuf;

/// Where the tournament feed document lives
#[derive(Debug, Clone, PartialEq)]
pub enum FeedSource {
    File(PathBuf),
    Url(String),
}

impl FeedSource {
    pub fn parse(source: &str) -> Self {
        if source.starts_with("http://") || source.starts_with("https://") {
            FeedSource::Url(source.to_string())
        } else {
            FeedSource::File(PathBuf::from(source))
        }
    }
}

impl fmt::Display for FeedSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedSource::File(path) => write!(f, "{}", path.display()),
            FeedSource::Url(url) => write!(f, "{}", url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_source() {
        assert_eq!(
            FeedSource::parse("https://example.org/data.json"),
            FeedSource::Url("https://example.org/data.json".to_string())
        );
        assert_eq!(
            FeedSource::parse("data/data.json"),
            FeedSource::File(PathBuf::from("data/data.json"))
        );
    }
}
