use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};

use crate::error::{ReportError, Result};

/// Seam between the reporting pipeline and the network.
///
/// The capability probe and both report attempts go through the same
/// transport instance, so options such as certificate verification apply
/// uniformly to every call of one invocation.
pub trait Transport {
    fn post(&self, url: &str, body: Vec<u8>) -> Result<Vec<u8>>;
}

/// Blocking HTTP transport used outside of tests.
#[derive(Clone)]
pub struct HttpTransport {
    http: Client,
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport").finish_non_exhaustive()
    }
}

impl HttpTransport {
    pub fn new(skip_certificate_verification: bool) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .default_headers(headers)
            .danger_accept_invalid_certs(skip_certificate_verification)
            .build()?;

        Ok(Self { http })
    }
}

impl Transport for HttpTransport {
    fn post(&self, url: &str, body: Vec<u8>) -> Result<Vec<u8>> {
        let resp = self.http.post(url).body(body).send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ReportError::Status(status.as_u16()));
        }
        Ok(resp.bytes()?.to_vec())
    }
}
