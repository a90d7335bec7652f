//! Recursive document discovery

use crate::error::{Error, Result};
use crate::repo::GeneratorConfig;
use std::path::{Component, Path, PathBuf};
use walkdir::WalkDir;

/// Documents found under a search root, in path order
#[derive(Debug, Clone)]
pub struct Collection {
    /// Resolved directory the documents were collected from
    pub root: PathBuf,
    /// Matching files, sorted lexicographically by path
    pub files: Vec<PathBuf>,
}

impl Collection {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Collect every `config.extension` file under `checkout/subdir`
pub fn collect(checkout: &Path, subdir: &Path, config: &GeneratorConfig) -> Result<Collection> {
    let root: PathBuf = checkout.join(subdir).components().collect();

    if !root.is_dir() {
        println!("✗ Directory not found: {}", root.display());
        return Err(Error::DirectoryNotFound(root));
    }

    let mut files = Vec::new();

    for entry in WalkDir::new(&root)
        .into_iter()
        .filter_entry(|e| {
            e.depth() == 0
                || !e.file_type().is_dir()
                || !e.file_name().to_str().is_some_and(|n| config.is_excluded(n))
        })
    {
        let entry = entry?;
        let path = entry.path();
        // Follows symlinked files; the walk itself does not follow links
        if !path.is_file() {
            continue;
        }

        let matches_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == config.extension);

        if matches_extension && !in_excluded_dir(path, &root, config) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();

    println!(
        "✓ Found {} markdown files in {}",
        files.len(),
        subdir.display()
    );

    Ok(Collection { root, files })
}

/// Whether any component below `root` names an excluded directory
fn in_excluded_dir(path: &Path, root: &Path, config: &GeneratorConfig) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.components().any(|c| match c {
        Component::Normal(name) => name.to_str().is_some_and(|n| config.is_excluded(n)),
        _ => false,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, "# Doc\n").unwrap();
    }

    fn relative_names(collection: &Collection) -> Vec<String> {
        collection
            .files
            .iter()
            .map(|p| {
                p.strip_prefix(&collection.root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_sorted_and_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        touch(root, "zeta.md");
        touch(root, "alpha.md");
        touch(root, "guide/intro.md");
        touch(root, "guide/setup.md");
        touch(root, "notes.txt");
        touch(root, ".github/ISSUE_TEMPLATE.md");
        touch(root, "node_modules/pkg/README.md");
        touch(root, ".git/description.md");

        let collection = collect(root, Path::new("."), &GeneratorConfig::default()).unwrap();

        assert_eq!(
            relative_names(&collection),
            vec!["alpha.md", "guide/intro.md", "guide/setup.md", "zeta.md"]
        );
    }

    #[test]
    fn test_directory_sorts_by_component() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "a.md");
        touch(dir.path(), "a/b.md");
        touch(dir.path(), "a-b.md");

        let collection = collect(dir.path(), Path::new("."), &GeneratorConfig::default()).unwrap();

        assert_eq!(relative_names(&collection), vec!["a/b.md", "a-b.md", "a.md"]);
    }

    #[test]
    fn test_subdirectory_root() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "README.md");
        touch(dir.path(), "docs/index.md");

        let collection =
            collect(dir.path(), Path::new("docs"), &GeneratorConfig::default()).unwrap();

        assert_eq!(collection.root, dir.path().join("docs"));
        assert_eq!(relative_names(&collection), vec!["index.md"]);
    }

    #[test]
    fn test_missing_root() {
        let dir = tempfile::tempdir().unwrap();

        let err = collect(dir.path(), Path::new("missing"), &GeneratorConfig::default())
            .unwrap_err();

        assert!(matches!(err, Error::DirectoryNotFound(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_document_is_collected() {
        let dir = tempfile::tempdir().unwrap();
        let shared = tempfile::tempdir().unwrap();
        touch(shared.path(), "shared.md");
        touch(dir.path(), "local.md");
        std::os::unix::fs::symlink(shared.path().join("shared.md"), dir.path().join("linked.md"))
            .unwrap();

        let collection = collect(dir.path(), Path::new("."), &GeneratorConfig::default()).unwrap();

        assert_eq!(relative_names(&collection), vec!["linked.md", "local.md"]);
    }

    #[test]
    fn test_custom_extension() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "page.mdx");
        touch(dir.path(), "page.md");

        let config = GeneratorConfig {
            extension: "mdx".to_string(),
            ..Default::default()
        };
        let collection = collect(dir.path(), Path::new("."), &config).unwrap();

        assert_eq!(relative_names(&collection), vec!["page.mdx"]);
    }
}
