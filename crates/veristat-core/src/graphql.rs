use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Extended rendering: asks the service for a human-readable result
/// message alongside the status.
const REPORT_QUERY: &str = r#"mutation($input: CreateArtifactInput!) {
  createArtifact(input: $input) {
    ok
    message
    error
  }
}"#;

/// Legacy rendering for deployments whose schema predates the `message`
/// selection.
const REPORT_QUERY_LEGACY: &str = r#"mutation($input: CreateArtifactInput!) {
  createArtifact(input: $input) {
    ok
    error
  }
}"#;

/// The two wire-compatible shapes of the same logical request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Extended,
    Legacy,
}

impl RenderMode {
    fn query(self) -> &'static str {
        match self {
            Self::Extended => REPORT_QUERY,
            Self::Legacy => REPORT_QUERY_LEGACY,
        }
    }
}

/// Input object of the `createArtifact` mutation.
///
/// `analyzer_type` must be structurally absent (not an empty string) when
/// the caller did not supply one; older server deployments reject payloads
/// that would change shape for existing integrations.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportInput {
    pub access_token: String,
    pub commit_oid: String,
    pub reporter_name: &'static str,
    pub reporter_version: &'static str,
    pub key: String,
    pub data: String,
    pub analyzer_shortcode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer_type: Option<String>,
    pub metadata: serde_json::Map<String, serde_json::Value>,
}

#[derive(Serialize)]
struct ReportQuery<'a> {
    query: &'static str,
    variables: Variables<'a>,
}

#[derive(Serialize)]
struct Variables<'a> {
    input: &'a ReportInput,
}

/// Serialize the logical request in the given rendering.
pub fn render(input: &ReportInput, mode: RenderMode) -> Result<Vec<u8>> {
    let query = ReportQuery {
        query: mode.query(),
        variables: Variables { input },
    };
    Ok(serde_json::to_vec(&query)?)
}

/// Structured reply of the `createArtifact` mutation. `ok == false` is a
/// normal, fully-formed response, not a transport failure.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct QueryResponse {
    #[serde(default)]
    pub data: ResponseData,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ResponseData {
    #[serde(rename = "createArtifact", default)]
    pub create_artifact: CreateArtifact,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CreateArtifact {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: String,
    #[serde(default)]
    pub message: Option<String>,
}
