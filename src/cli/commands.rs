//! Command implementations

use super::GenerateArgs;
use crate::error::{Error, Result};
use crate::extract::collect;
use crate::render::{self, file_size, Overrides, RenderConfig};
use crate::repo::{self, Cloner, GeneratorConfig, MetadataSource, RepositoryReference, ScratchDir};
use std::path::{Path, PathBuf};

/// Artifacts produced by a successful run
#[derive(Debug, Clone, Default)]
pub struct GenerateReport {
    /// Written index file, if requested
    pub index: Option<PathBuf>,
    /// Written full-content file, if requested
    pub full: Option<PathBuf>,
    /// Number of documents collected
    pub documents: usize,
}

/// Run the whole pipeline: locate, fetch, collect, render
pub async fn generate(
    args: &GenerateArgs,
    config: &GeneratorConfig,
    cloner: &dyn Cloner,
    metadata: &dyn MetadataSource,
) -> Result<GenerateReport> {
    let reference = RepositoryReference::parse(&args.repo_url).ok_or_else(|| {
        println!("✗ Could not parse repository URL: {}", args.repo_url);
        Error::InvalidUrl(args.repo_url.clone())
    })?;

    println!("Repository: {}", reference);

    let fetched = metadata.fetch(&reference).await;
    let render_config = RenderConfig::resolve(
        Overrides {
            name: args.name.clone(),
            base_url: args.base_url.clone(),
            version: args.version.clone(),
            description: args.description.clone(),
        },
        fetched,
        &reference,
    );

    println!("Project: {}", render_config.project_name);
    if let Some(ref base_url) = render_config.base_url {
        println!("Base URL: {}", base_url);
    }
    if let Some(ref description) = render_config.description {
        println!("Description: {}", description);
    }
    println!();

    let scratch_path = args
        .work_dir
        .clone()
        .unwrap_or_else(|| config.scratch_dir.clone());
    ensure_disjoint(&scratch_path, &args.output_dir)?;
    let scratch = ScratchDir::prepare(scratch_path, args.keep_repo)?;

    repo::fetch(
        cloner,
        &args.repo_url,
        scratch.path(),
        &args.branch,
        &config.fallback_branch,
    )?;
    println!();

    let collection = collect(scratch.path(), &args.root, config)?;
    if collection.is_empty() {
        println!("✗ No markdown files found");
        return Err(Error::NoDocuments {
            extension: config.extension.clone(),
            root: collection.root,
        });
    }

    std::fs::create_dir_all(&args.output_dir)?;

    let mut report = GenerateReport {
        documents: collection.len(),
        ..Default::default()
    };
    let mut failed = Vec::new();

    if args.wants_index() {
        let path = args.output_dir.join(render_config.index_file_name());
        match render::write_index(&collection, &render_config, &path) {
            Ok(_) => report.index = Some(path),
            Err(e) => {
                println!("✗ Failed to write {}: {}", path.display(), e);
                failed.push(render_config.index_file_name());
            }
        }
    }

    if args.wants_full() {
        let path = args.output_dir.join(render_config.full_file_name());
        match render::write_full(&collection, &render_config, &path) {
            Ok(_) => report.full = Some(path),
            Err(e) => {
                println!("✗ Failed to write {}: {}", path.display(), e);
                failed.push(render_config.full_file_name());
            }
        }
    }

    if !scratch.is_kept() {
        println!("\nCleaning up: removing {}", scratch.path().display());
    }
    drop(scratch);

    if !failed.is_empty() {
        return Err(Error::OutputFailed(failed));
    }

    print_summary(&report);
    Ok(report)
}

/// Refuse a scratch directory that equals or encloses the output directory,
/// since the scratch directory is deleted recursively
fn ensure_disjoint(work_dir: &Path, output_dir: &Path) -> Result<()> {
    let work = std::path::absolute(work_dir)?;
    let output = std::path::absolute(output_dir)?;

    if output.starts_with(&work) {
        println!(
            "✗ Work directory {} contains the output directory",
            work_dir.display()
        );
        return Err(Error::UnsafeWorkDir {
            work_dir: work,
            output_dir: output,
        });
    }
    Ok(())
}

/// Final list of generated files
pub fn print_summary(report: &GenerateReport) {
    println!("\n✅ Done! Generated files:");
    if let Some(ref index) = report.index {
        println!(
            "   • {} ({:.1} KB) - index",
            index.display(),
            file_size(index) as f64 / 1024.0
        );
    }
    if let Some(ref full) = report.full {
        println!(
            "   • {} ({:.1} MB) - complete documentation",
            full.display(),
            file_size(full) as f64 / (1024.0 * 1024.0)
        );
    }
}
