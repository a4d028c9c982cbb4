use std::path::Path;

use tracing::debug;

use crate::artifact::Artifact;
use crate::capability;
use crate::dsn::Dsn;
use crate::encode::{self, EncodedPayload};
use crate::error::{ReportError, Result};
use crate::graphql::{CreateArtifact, QueryResponse, RenderMode, ReportInput, render};
use crate::transport::Transport;

/// Fixed reporter identity sent with every request.
pub const REPORTER_NAME: &str = "cli";
pub const REPORTER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Side-effecting callback invoked on dispatcher failures. The pipeline's
/// pure stages take no dependency on it; the caller decides what a failure
/// notification means (telemetry, logging, nothing).
pub type FailureHook<'a> = &'a dyn Fn(&ReportError);

/// Outcome of a successful publication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishedReport {
    pub analyzer_shortcode: String,
    pub key: String,
    pub message: Option<String>,
}

/// Assemble the logical report request from validated inputs.
///
/// Metadata always carries `workDir`, merged with whatever patch the
/// encoder produced. Rendering is selected later by the dispatcher.
pub fn build_input(
    artifact: &Artifact,
    dsn: &Dsn,
    commit_oid: &str,
    work_dir: &Path,
    encoded: EncodedPayload,
) -> ReportInput {
    let mut metadata = serde_json::Map::new();
    metadata.insert(
        "workDir".to_string(),
        serde_json::Value::String(work_dir.display().to_string()),
    );
    metadata.extend(encoded.metadata_patch);

    ReportInput {
        access_token: dsn.access_token.clone(),
        commit_oid: commit_oid.to_string(),
        reporter_name: REPORTER_NAME,
        reporter_version: REPORTER_VERSION,
        key: artifact.key.clone(),
        data: encoded.data,
        analyzer_shortcode: artifact.analyzer_shortcode.clone(),
        analyzer_type: artifact.analyzer_type.clone(),
        metadata,
    }
}

/// Send the report, falling back once to the legacy rendering.
///
/// The service's schema evolved; older deployments reject the extended
/// rendering's `message` selection. Any failure of the extended attempt
/// (cause deliberately not distinguished) triggers exactly one legacy
/// attempt; failure there is terminal. At most two network attempts.
pub fn dispatch(
    transport: &dyn Transport,
    endpoint: &str,
    input: &ReportInput,
    on_failure: FailureHook<'_>,
) -> Result<Vec<u8>> {
    let body = render(input, RenderMode::Extended)?;
    match transport.post(endpoint, body) {
        Ok(raw) => Ok(raw),
        Err(err) => {
            on_failure(&err);
            debug!(code = err.code(), "extended report rejected, retrying with legacy rendering");

            let body = render(input, RenderMode::Legacy)?;
            transport.post(endpoint, body).map_err(|err| {
                on_failure(&err);
                err
            })
        }
    }
}

/// Parse the structured reply and convert a remote-reported failure into a
/// caller-visible error. A remote `ok == false` is an application-level
/// failure and is never retried.
pub fn validate(raw: &[u8]) -> Result<CreateArtifact> {
    let response: QueryResponse = serde_json::from_slice(raw)
        .map_err(|err| ReportError::Undecodable(err.to_string()))?;

    let result = response.data.create_artifact;
    if !result.ok {
        return Err(ReportError::Remote(result.error));
    }
    Ok(result)
}

/// Publish one artifact: probe, encode, build, dispatch, validate.
///
/// Strictly sequential; the only I/O is the capability probe followed by
/// the report call (itself at most two attempts). Everything here is
/// created fresh per invocation and discarded after use.
pub fn publish(
    transport: &dyn Transport,
    dsn: &Dsn,
    artifact: &Artifact,
    commit_oid: &str,
    work_dir: &Path,
    on_failure: FailureHook<'_>,
) -> Result<PublishedReport> {
    let endpoint = dsn.endpoint_url();

    let caps = capability::probe(transport, &endpoint)?;
    debug!(compression = caps.compression_supported, "capability probe complete");

    let encoded = encode::encode(&artifact.value, &caps)?;
    let input = build_input(artifact, dsn, commit_oid, work_dir, encoded);

    let raw = dispatch(transport, &endpoint, &input, on_failure)?;
    let result = validate(&raw)?;

    Ok(PublishedReport {
        analyzer_shortcode: artifact.analyzer_shortcode.clone(),
        key: artifact.key.clone(),
        message: result.message,
    })
}
