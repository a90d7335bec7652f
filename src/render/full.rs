//! Complete `llms-full.txt` concatenation

use super::{file_size, RenderConfig};
use crate::error::Result;
use crate::extract::doc::display_name;
use crate::extract::{Collection, DocumentRecord};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the full document to `path`, returning the number of sections
pub fn write_full(collection: &Collection, config: &RenderConfig, path: &Path) -> Result<usize> {
    println!("\nGenerating {} (full documentation)...", path.display());

    let mut out = BufWriter::new(File::create(path)?);
    let sections = render_full(&mut out, collection, config)?;
    out.flush()?;

    println!("✓ {} generated successfully", config.full_file_name());
    println!(
        "  File size: {:.2} MB",
        file_size(path) as f64 / (1024.0 * 1024.0)
    );

    Ok(sections)
}

/// Render every document, in collection order, into `out`
pub fn render_full<W: Write>(
    out: &mut W,
    collection: &Collection,
    config: &RenderConfig,
) -> io::Result<usize> {
    config.write_header(out, "Documentation - Complete")?;
    writeln!(out, "\n---\n")?;

    let total = collection.len();
    let base_url = config.base_url.as_deref();
    let mut sections = 0;

    for (idx, path) in collection.files.iter().enumerate() {
        println!("  [{}/{}] Processing {}...", idx + 1, total, display_name(path));

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                println!("  ✗ Error reading {}: {}", display_name(path), e);
                tracing::warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let record = DocumentRecord::new(path, &collection.root, &content);
        let source = record.source_path();

        writeln!(out, "## {}\n", record.title)?;
        writeln!(out, "**Path:** `{}`  ", source)?;
        match base_url {
            Some(_) => writeln!(out, "**URL:** {}\n", record.url(base_url))?,
            None => writeln!(out, "**File:** `{}`\n", source)?,
        }
        out.write_all(content.as_bytes())?;
        writeln!(out, "\n")?;
        writeln!(out, "---\n")?;

        sections += 1;
    }

    Ok(sections)
}
