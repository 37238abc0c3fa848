//! Validated session reference URL

use url::Url;

use crate::error::MalformedUrl;

/// Protocols a session URL may use
const KNOWN_PROTOCOLS: &[&str] = &["http", "https", "ftp", "file", "jar", "mailto"];

/// An absolute URL with a known protocol.
///
/// Displays as exactly the text it was parsed from, even where the
/// normalized form would differ (e.g. a missing trailing slash).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUrl {
    raw: String,
    parsed: Url,
}

impl SessionUrl {
    pub fn parse(input: &str) -> Result<Self, MalformedUrl> {
        let parsed = Url::parse(input)?;

        if !KNOWN_PROTOCOLS.contains(&parsed.scheme()) {
            return Err(MalformedUrl::UnknownProtocol(parsed.scheme().to_string()));
        }

        Ok(Self {
            raw: input.to_string(),
            parsed,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Normalized form
    pub fn as_url(&self) -> &Url {
        &self.parsed
    }

    pub fn host(&self) -> Option<&str> {
        self.parsed.host_str()
    }
}

impl std::fmt::Display for SessionUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl std::str::FromStr for SessionUrl {
    type Err = MalformedUrl;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let url = SessionUrl::parse("http://course.langrsoft.com/cmsc300").unwrap();
        assert_eq!(url.to_string(), "http://course.langrsoft.com/cmsc300");
        assert_eq!(url.host(), Some("course.langrsoft.com"));
    }

    #[test]
    fn test_round_trip_without_path() {
        let url: SessionUrl = "https://example.com".parse().unwrap();
        assert_eq!(url.as_str(), "https://example.com");
        assert_eq!(url.as_url().as_str(), "https://example.com/");
    }

    #[test]
    fn test_unknown_protocol() {
        let err = SessionUrl::parse("httsp://course.langrsoft.com/cmsc300").unwrap_err();
        assert_eq!(err, MalformedUrl::UnknownProtocol("httsp".to_string()));
    }

    #[test]
    fn test_relative_url_rejected() {
        let err = SessionUrl::parse("course.langrsoft.com/cmsc300").unwrap_err();
        assert_eq!(
            err,
            MalformedUrl::Syntax(url::ParseError::RelativeUrlWithoutBase)
        );
    }
}
