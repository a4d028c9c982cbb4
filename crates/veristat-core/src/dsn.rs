use crate::error::{ReportError, Result};

/// Parsed connection string.
///
/// A DSN has the shape `scheme://access_token@host`. It is immutable once
/// parsed; host and token formats are not validated here, a bad token
/// surfaces later as an authentication error from the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dsn {
    pub scheme: String,
    pub access_token: String,
    pub host: String,
}

impl Dsn {
    /// Parse a raw DSN string.
    ///
    /// The raw string must split into exactly two parts on `"://"` and the
    /// remainder into exactly two parts on `"@"`. Any other shape is a
    /// parse failure, never a best-effort partial parse.
    pub fn parse(raw: &str) -> Result<Self> {
        let protocol_body: Vec<&str> = raw.split("://").collect();
        if protocol_body.len() != 2 {
            return Err(ReportError::MalformedDsn);
        }

        let scheme = protocol_body[0];
        if !scheme.starts_with("http") {
            return Err(ReportError::UnsupportedScheme(scheme.to_string()));
        }

        let token_host: Vec<&str> = protocol_body[1].split('@').collect();
        if token_host.len() != 2 {
            return Err(ReportError::MalformedDsn);
        }

        Ok(Self {
            scheme: scheme.to_string(),
            access_token: token_host[0].to_string(),
            host: token_host[1].to_string(),
        })
    }

    /// The single reporting endpoint derived from the parsed host.
    pub fn endpoint_url(&self) -> String {
        format!("{}://{}/graphql/cli/", self.scheme, self.host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_extracts_scheme_token_and_host() {
        let dsn = Dsn::parse("https://abc123@app.veristat.io").expect("parse");
        assert_eq!(dsn.scheme, "https");
        assert_eq!(dsn.access_token, "abc123");
        assert_eq!(dsn.host, "app.veristat.io");
    }

    #[test]
    fn parse_accepts_plain_http() {
        let dsn = Dsn::parse("http://tok@localhost:8081").expect("parse");
        assert_eq!(dsn.scheme, "http");
        assert_eq!(dsn.host, "localhost:8081");
    }

    #[test]
    fn parse_rejects_missing_protocol_separator() {
        let err = Dsn::parse("abc123@app.veristat.io").unwrap_err();
        assert!(matches!(err, ReportError::MalformedDsn));
    }

    #[test]
    fn parse_rejects_duplicate_protocol_separator() {
        let err = Dsn::parse("https://a://b@host").unwrap_err();
        assert!(matches!(err, ReportError::MalformedDsn));
    }

    #[test]
    fn parse_rejects_non_http_scheme() {
        let err = Dsn::parse("ftp://abc123@host").unwrap_err();
        assert!(matches!(err, ReportError::UnsupportedScheme(s) if s == "ftp"));
    }

    #[test]
    fn parse_rejects_missing_credential_separator() {
        let err = Dsn::parse("https://app.veristat.io").unwrap_err();
        assert!(matches!(err, ReportError::MalformedDsn));
    }

    #[test]
    fn parse_rejects_multiple_credential_separators() {
        let err = Dsn::parse("https://a@b@host").unwrap_err();
        assert!(matches!(err, ReportError::MalformedDsn));
    }

    #[test]
    fn endpoint_url_appends_fixed_path() {
        let dsn = Dsn::parse("https://abc123@app.veristat.io").expect("parse");
        assert_eq!(dsn.endpoint_url(), "https://app.veristat.io/graphql/cli/");
    }
}
