//! Title, summary and URL path extraction
//!
//! Documents are skimmed line by line; nothing here builds a markdown tree.

use std::path::{Component, Path, PathBuf};

/// Upper bound on summary length, in characters
pub const MAX_SUMMARY_CHARS: usize = 300;

/// Summary used when a document has no prose paragraph
pub const FALLBACK_SUMMARY: &str = "Documentation section.";

const ELLIPSIS: &str = "...";

/// Everything the renderers need to know about one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRecord {
    /// Location of the document on disk
    pub path: PathBuf,
    /// Path below the search root, extension removed, `/`-separated
    pub url_path: String,
    /// First H1, or the humanized URL path
    pub title: String,
    /// First paragraph, truncated
    pub summary: String,
}

impl DocumentRecord {
    /// Build a record from a document's content
    pub fn new(path: &Path, root: &Path, content: &str) -> Self {
        let url_path = relative_url_path(path, root);
        let title = extract_title(content).unwrap_or_else(|| humanize_path(&url_path));

        Self {
            path: path.to_path_buf(),
            summary: extract_summary(content),
            url_path,
            title,
        }
    }

    /// Link target: absolute when a base URL is configured
    pub fn url(&self, base_url: Option<&str>) -> String {
        match base_url {
            Some(base) => format!("{}/{}", base.trim_end_matches('/'), self.url_path),
            None => self.url_path.clone(),
        }
    }

    /// Path of the source file below the search root, `/`-separated
    pub fn source_path(&self) -> String {
        match self.path.extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}.{}", self.url_path, ext),
            None => self.url_path.clone(),
        }
    }

    /// File name for progress and diagnostics
    pub fn file_name(&self) -> String {
        display_name(&self.path)
    }
}

pub(crate) fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Text of the first level-1 heading
pub fn extract_title(content: &str) -> Option<String> {
    content
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix("# "))
        .map(|title| title.trim().to_string())
}

/// First prose paragraph, joined into one line and truncated
pub fn extract_summary(content: &str) -> String {
    let mut paragraph: Vec<&str> = Vec::new();

    for line in content.lines().map(str::trim) {
        if line.is_empty() || line.starts_with('#') {
            if paragraph.is_empty() {
                continue;
            }
            break;
        }
        if is_marker(line) {
            continue;
        }
        paragraph.push(line);
    }

    if paragraph.is_empty() {
        return FALLBACK_SUMMARY.to_string();
    }

    truncate(&paragraph.join(" "))
}

/// Horizontal rules and comment openers
fn is_marker(line: &str) -> bool {
    line.starts_with("---") || line.starts_with("<!--")
}

fn truncate(text: &str) -> String {
    if text.chars().count() <= MAX_SUMMARY_CHARS {
        return text.to_string();
    }

    let keep = MAX_SUMMARY_CHARS - ELLIPSIS.len();
    let mut truncated: String = text.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Path of `path` below `root` with one extension removed, joined with `/`
///
/// Falls back to the file stem when `path` is not under `root`.
pub fn relative_url_path(path: &Path, root: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => relative
            .with_extension("")
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/"),
        Err(_) => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}

/// Readable title from a URL path: `getting-started/install` becomes
/// `Getting Started > Install`
pub fn humanize_path(url_path: &str) -> String {
    let spaced = url_path.replace('/', " > ").replace('-', " ");

    let mut result = String::with_capacity(spaced.len());
    let mut prev_is_letter = false;
    for c in spaced.chars() {
        if c.is_alphabetic() {
            if prev_is_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            prev_is_letter = true;
        } else {
            result.push(c);
            prev_is_letter = false;
        }
    }
    result
}
