mod cli;
mod config;

use cli::Args;
use config::Settings;
use license_catalog::adapters::outbound::classifier::KnownLicenseClassifier;
use license_catalog::adapters::outbound::console::StderrProgressReporter;
use license_catalog::adapters::outbound::filesystem::{FileSystemReader, FileSystemWriter};
use license_catalog::adapters::outbound::resolver::SnapshotDependencyResolver;
use license_catalog::application::dto::CatalogRequest;
use license_catalog::application::use_cases::GenerateCatalogUseCase;
use license_catalog::catalog::domain::ResolveScope;
use license_catalog::ports::outbound::{OutputPresenter, RenderedFile};
use license_catalog::shared::error::{CatalogError, ExitCode};
use license_catalog::shared::Result;
use std::path::{Path, PathBuf};
use std::process;

const ARTIFACT_CATALOG_STEM: &str = "artifact-definitions";
const LICENSE_CATALOG_STEM: &str = "license-catalog";

#[tokio::main]
async fn main() {
    // Clap exits with InvalidArguments (2) on usage errors
    let args = Args::parse_args();

    if let Err(e) = run(args).await {
        eprintln!("\n❌ An error occurred:\n");
        eprintln!("{}", e);

        // Display error chain
        let mut source = e.source();
        while let Some(err) = source {
            eprintln!("\nCaused by: {}", err);
            source = err.source();
        }

        eprintln!();
        process::exit(ExitCode::ApplicationError.as_i32());
    }
}

async fn run(args: Args) -> Result<()> {
    // Load config file (explicit path or auto-discovery) and merge CLI flags
    let config_file = match args.config.as_deref() {
        Some(path) => Some(config::load_config_from_path(path)?),
        None => config::discover_config(Path::new("."))?,
    };
    let settings = config::resolve_settings(&args, config_file)?;

    let snapshot = settings.snapshot.clone().ok_or_else(|| CatalogError::Validation {
        message: format!(
            "A resolution snapshot is required. Pass --snapshot <FILE> or set 'snapshot' in {}",
            config::CONFIG_FILENAME
        ),
    })?;
    if !settings.dry_run {
        validate_output_dir(&settings.output_dir)?;
    }

    // Create adapters (Dependency Injection)
    let resolver = SnapshotDependencyResolver::load(&snapshot, settings.repository.as_deref())?;
    let manifest_reader = FileSystemReader::new();
    let classifier = KnownLicenseClassifier::new();
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case =
        GenerateCatalogUseCase::new(resolver, manifest_reader, classifier, progress_reporter);

    // Execute use case
    let request = build_request(&settings)?;
    let response = use_case.execute(request).await?;

    eprintln!(
        "📊 {} scope(s), {} artifact(s), {} license(s)",
        response.scope_count,
        response.artifact_count,
        response.assembled.licenses.len()
    );

    // Both texts exist before either file is written
    if let (Some(artifacts_text), Some(licenses_text)) =
        (response.artifacts_text, response.licenses_text)
    {
        let extension = settings.format.extension();
        let files = [
            RenderedFile::new(
                catalog_path(&settings.output_dir, ARTIFACT_CATALOG_STEM, extension),
                artifacts_text,
            ),
            RenderedFile::new(
                catalog_path(&settings.output_dir, LICENSE_CATALOG_STEM, extension),
                licenses_text,
            ),
        ];
        FileSystemWriter::new().present(&files)?;
    }

    Ok(())
}

fn build_request(settings: &Settings) -> Result<CatalogRequest> {
    let variant = ResolveScope::variant(settings.variant.clone())?;
    let additional_scopes = settings
        .additional_scopes
        .iter()
        .map(|name| ResolveScope::addition(name.clone()))
        .collect::<Result<Vec<_>>>()?;

    let mut request = CatalogRequest::new(variant, additional_scopes);
    request.configuration_names = settings.configuration_names.clone();
    request.exclude_groups = settings.exclude_groups.clone();
    request.exclude_artifacts = settings.exclude_artifacts.clone();
    request.style = settings.style;
    request.format = settings.format;
    request.dry_run = settings.dry_run;
    Ok(request)
}

fn catalog_path(output_dir: &Path, stem: &str, extension: &str) -> PathBuf {
    output_dir.join(format!("{}.{}", stem, extension))
}

fn validate_output_dir(path: &Path) -> Result<()> {
    let metadata = std::fs::symlink_metadata(path).map_err(|e| CatalogError::FileWriteError {
        path: path.to_path_buf(),
        details: format!("Output directory does not exist: {}", e),
    })?;

    // Security check: Reject symbolic links for the output directory
    if metadata.is_symlink() {
        return Err(CatalogError::SecurityError {
            path: path.to_path_buf(),
            reason: "Output directory is a symbolic link".to_string(),
            hint: "Pass the real directory with --output-dir".to_string(),
        }
        .into());
    }

    if !metadata.is_dir() {
        return Err(CatalogError::FileWriteError {
            path: path.to_path_buf(),
            details: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
