use clap::Parser;
use license_catalog::application::dto::OutputFormat;
use license_catalog::catalog::domain::AssemblyStyle;
use std::path::PathBuf;

/// Build a license catalog from a resolved dependency graph
#[derive(Parser, Debug)]
#[command(name = "license-catalog")]
#[command(version)]
#[command(
    about = "Build a canonical, deduplicated license catalog from a resolved dependency graph",
    long_about = None
)]
pub struct Args {
    /// Resolution snapshot (JSON) exported by the host build
    #[arg(long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Maven-layout repository holding the manifests (overrides the snapshot)
    #[arg(long, value_name = "DIR")]
    pub repository: Option<PathBuf>,

    /// Variant scope, e.g. release or freeRelease [default: release]
    #[arg(long, value_name = "NAME")]
    pub variant: Option<String>,

    /// Additional scope, e.g. test. Can be specified multiple times
    #[arg(short = 's', long = "scope", value_name = "NAME")]
    pub scopes: Vec<String>,

    /// Configuration name combined with scope names. Can be specified multiple times
    #[arg(short = 'c', long = "configuration", value_name = "NAME")]
    pub configurations: Vec<String>,

    /// Exclude every module of a group. Can be specified multiple times
    #[arg(long = "exclude-group", value_name = "GROUP")]
    pub exclude_groups: Vec<String>,

    /// Exclude a module given as group:name. Can be specified multiple times
    #[arg(long = "exclude-artifact", value_name = "GROUP:NAME")]
    pub exclude_artifacts: Vec<String>,

    /// Catalog style: flatten, structured or structured-with-scope [default: structured-with-scope]
    #[arg(long)]
    pub style: Option<AssemblyStyle>,

    /// Output format: json or yaml [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Directory receiving the catalogs [default: .]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Config file (defaults to license-catalog.config.yml in the working directory)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Resolve and assemble without writing files
    #[arg(long)]
    pub dry_run: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
