use clap::Args;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Shortcode of the analyzer to report the artifact to (example: test-coverage).
    #[arg(long, default_value = "")]
    pub analyzer: String,

    /// Type of the analyzer (example: community).
    #[arg(long, default_value = "")]
    pub analyzer_type: String,

    /// Shortcode of the language (example: go).
    #[arg(long, default_value = "")]
    pub key: String,

    /// Value of the artifact.
    #[arg(long, default_value = "")]
    pub value: String,

    /// Path to the artifact value file.
    #[arg(long, default_value = "")]
    pub value_file: String,

    /// Skip SSL certificate verification while sending the artifact.
    #[arg(long = "skip-verify", default_value_t = false)]
    pub skip_verify: bool,
}
