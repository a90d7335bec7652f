//! Compact `llms.txt` index

use super::{file_size, RenderConfig};
use crate::error::Result;
use crate::extract::doc::display_name;
use crate::extract::{Collection, DocumentRecord};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Write the index to `path`, returning the number of sections
pub fn write_index(collection: &Collection, config: &RenderConfig, path: &Path) -> Result<usize> {
    println!("\nGenerating {} (index)...", path.display());

    let mut out = BufWriter::new(File::create(path)?);
    let sections = render_index(&mut out, collection, config)?;
    out.flush()?;

    println!("✓ {} generated successfully", config.index_file_name());
    println!("  File size: {:.2} KB", file_size(path) as f64 / 1024.0);

    Ok(sections)
}

/// Render the index into `out`
///
/// Documents that cannot be read are reported and left out.
pub fn render_index<W: Write>(
    out: &mut W,
    collection: &Collection,
    config: &RenderConfig,
) -> io::Result<usize> {
    config.write_header(out, "Documentation")?;
    writeln!(out)?;
    writeln!(out, "## Documentation Index\n")?;

    let records: Vec<DocumentRecord> = collection
        .files
        .iter()
        .filter_map(|path| match std::fs::read_to_string(path) {
            Ok(content) => Some(DocumentRecord::new(path, &collection.root, &content)),
            Err(e) => {
                println!("  ✗ Error processing {}: {}", display_name(path), e);
                tracing::warn!("Skipping {}: {}", path.display(), e);
                None
            }
        })
        .collect();

    let base_url = config.base_url.as_deref();
    for record in &records {
        writeln!(out, "### [{}]({})\n", record.title, record.url(base_url))?;
        writeln!(out, "{}\n", record.summary)?;
    }

    writeln!(out, "\n---\n")?;
    writeln!(out, "## Notes\n")?;
    writeln!(
        out,
        "- For complete documentation content, see `{}`",
        config.full_file_name()
    )?;
    writeln!(out, "- Total sections: {}", records.len())?;

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collection(root: &Path, docs: &[(&str, &str)]) -> Collection {
        let files = docs
            .iter()
            .map(|(name, content)| {
                let path = root.join(name);
                std::fs::create_dir_all(path.parent().unwrap()).unwrap();
                std::fs::write(&path, content).unwrap();
                path
            })
            .collect();
        Collection {
            root: root.to_path_buf(),
            files,
        }
    }

    fn render(collection: &Collection, config: &RenderConfig) -> (String, usize) {
        let mut out = Vec::new();
        let count = render_index(&mut out, collection, config).unwrap();
        (String::from_utf8(out).unwrap(), count)
    }

    #[test]
    fn test_index_layout() {
        let dir = tempfile::tempdir().unwrap();
        let docs = collection(
            dir.path(),
            &[
                ("intro.md", "# Introduction\n\nWelcome aboard."),
                ("guide/setup-steps.md", "Install things."),
            ],
        );
        let config = RenderConfig {
            project_name: "Acme".to_string(),
            ..Default::default()
        };

        let (text, count) = render(&docs, &config);

        assert_eq!(count, 2);
        assert_eq!(
            text,
            "# Acme Documentation\n\n\
             \n\
             ## Documentation Index\n\n\
             ### [Introduction](intro)\n\n\
             Welcome aboard.\n\n\
             ### [Guide > Setup Steps](guide/setup-steps)\n\n\
             Install things.\n\n\
             \n---\n\n\
             ## Notes\n\n\
             - For complete documentation content, see `llms-full.txt`\n\
             - Total sections: 2\n"
        );
    }

    #[test]
    fn test_absolute_links_with_base_url() {
        let dir = tempfile::tempdir().unwrap();
        let docs = collection(dir.path(), &[("api/auth.md", "# Auth\n\nTokens.")]);
        let config = RenderConfig {
            project_name: "Acme".to_string(),
            base_url: Some("https://docs.acme.dev/".to_string()),
            version: Some("2.0".to_string()),
            description: Some("Acme docs".to_string()),
        };

        let (text, _) = render(&docs, &config);

        assert!(text.starts_with("# Acme Documentation - 2.0\n\n> Acme docs\n\nWebsite: https://docs.acme.dev/\n\n"));
        assert!(text.contains("### [Auth](https://docs.acme.dev/api/auth)\n"));
        assert!(text.contains("see `llms-full-2.0.txt`"));
    }

    #[test]
    fn test_unreadable_file_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut docs = collection(dir.path(), &[("ok.md", "# Fine\n\nText.")]);
        docs.files.insert(0, dir.path().join("gone.md"));

        let (text, count) = render(&docs, &RenderConfig::default());

        assert_eq!(count, 1);
        assert!(text.contains("### [Fine](ok)"));
        assert!(text.contains("- Total sections: 1"));
    }

    #[test]
    fn test_write_index_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let docs = collection(&dir.path().join("src"), &[("a.md", "# A\n")]);
        let output = dir.path().join("llms.txt");

        let count = write_index(&docs, &RenderConfig::default(), &output).unwrap();

        assert_eq!(count, 1);
        let text = std::fs::read_to_string(output).unwrap();
        assert!(text.contains("### [A](a)\n\nDocumentation section.\n"));
    }
}
