use std::env;

use anyhow::{Context, Result, bail};
use veristat_core::{Artifact, Dsn, HttpTransport, PublishedReport, publish};

use crate::cli::{Commands, ReportArgs};
use crate::git;
use crate::telemetry::Telemetry;

const DSN_ENV: &str = "VERISTAT_DSN";
const DIAGNOSTIC_PREFIX: &str = "Veristat | Error |";

pub(crate) fn run(command: Commands) -> i32 {
    match command {
        Commands::Report(args) => report(&args),
    }
}

fn report(args: &ReportArgs) -> i32 {
    let telemetry = Telemetry::new();
    match run_report(args, &telemetry) {
        Ok(published) => {
            print_published(&published);
            0
        }
        Err(err) => {
            telemetry.capture_error(&format!("{err:#}"));
            eprintln!("{DIAGNOSTIC_PREFIX} {err:#}");
            1
        }
    }
}

fn run_report(args: &ReportArgs, telemetry: &Telemetry) -> Result<PublishedReport> {
    let raw_dsn = read_dsn_env()?;

    let work_dir = env::current_dir().context("unable to identify current directory")?;
    telemetry.record("workDir", work_dir.display().to_string());

    // Everything below is validated before any network call.
    let artifact = Artifact::from_flags(
        &args.analyzer,
        &args.analyzer_type,
        &args.key,
        &args.value,
        &args.value_file,
    )?;

    let dsn = Dsn::parse(&raw_dsn)?;
    telemetry.record("host", dsn.host.clone());

    let commit_oid = git::head_commit_oid(&work_dir).context(
        "unable to get HEAD commit OID. Make sure you are running from a git repository",
    )?;
    telemetry.record("headCommitOid", commit_oid.clone());

    let transport = HttpTransport::new(args.skip_verify)?;
    let report = publish(
        &transport,
        &dsn,
        &artifact,
        &commit_oid,
        &work_dir,
        &|err| telemetry.capture_error(err),
    )?;
    Ok(report)
}

fn read_dsn_env() -> Result<String> {
    match env::var(DSN_ENV) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => bail!(
            "environment variable {DSN_ENV} not set (or) is empty. You can find it under the repository settings page"
        ),
    }
}

fn print_published(published: &PublishedReport) {
    println!("Veristat | Artifact published successfully\n");
    println!("Analyzer  {}", published.analyzer_shortcode);
    println!("Key       {}", published.key);
    if let Some(message) = &published.message {
        println!("Message   {message}");
    }
}
