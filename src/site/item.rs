//! Generated item definitions.
//!
//! A generated item is something the next build will write to exactly one
//! output path, such as a rendered page or a copied static file. Each
//! variant knows how to resolve its output path given the destination root.

use crate::path::DestinationRoot;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Kind of generated item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Rendered document
    Page,
    /// File copied verbatim
    StaticFile,
    /// Item with a pre-resolved output path
    Resource,
}

impl std::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemKind::Page => write!(f, "page"),
            ItemKind::StaticFile => write!(f, "static_file"),
            ItemKind::Resource => write!(f, "resource"),
        }
    }
}

/// Resolve the output path an item will be written to.
pub trait ResolveOutput {
    /// Output path of this item under `dest`.
    fn output_path(&self, dest: &DestinationRoot) -> PathBuf;
}

/// A rendered document addressed by URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Public URL, e.g. `/about/` or `/feed.xml`
    pub url: String,
    /// Extension appended when the URL does not already carry it
    #[serde(default = "default_output_ext")]
    pub output_ext: String,
}

fn default_output_ext() -> String {
    ".html".to_string()
}

impl Page {
    /// Create a page with the default `.html` extension.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), output_ext: default_output_ext() }
    }

    /// Set the output extension.
    pub fn with_output_ext(mut self, ext: impl Into<String>) -> Self {
        self.output_ext = ext.into();
        self
    }
}

impl ResolveOutput for Page {
    fn output_path(&self, dest: &DestinationRoot) -> PathBuf {
        let mut relative = self.url.trim_start_matches('/').to_string();
        if relative.is_empty() || relative.ends_with('/') {
            relative.push_str("index");
        }
        if !relative.ends_with(&self.output_ext) {
            relative.push_str(&self.output_ext);
        }
        dest.join(Path::new(&relative))
    }
}

/// A file copied into the destination unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticFile {
    /// Path relative to the destination root
    pub path: PathBuf,
}

impl StaticFile {
    /// Create a static file entry.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResolveOutput for StaticFile {
    fn output_path(&self, dest: &DestinationRoot) -> PathBuf {
        let relative = self.path.strip_prefix("/").unwrap_or(&self.path);
        dest.join(relative)
    }
}

/// An item whose output path has already been decided upstream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    /// Absolute output path, or a path relative to the destination root
    pub output_path: PathBuf,
}

impl Resource {
    /// Create a resource entry.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self { output_path: output_path.into() }
    }
}

impl ResolveOutput for Resource {
    fn output_path(&self, dest: &DestinationRoot) -> PathBuf {
        dest.join(&self.output_path)
    }
}

/// Everything the build pipeline can hand to the cleaner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GeneratedItem {
    Page(Page),
    StaticFile(StaticFile),
    Resource(Resource),
}

impl GeneratedItem {
    /// Create a page item.
    pub fn page(url: impl Into<String>) -> Self {
        GeneratedItem::Page(Page::new(url))
    }

    /// Create a static file item.
    pub fn static_file(path: impl Into<PathBuf>) -> Self {
        GeneratedItem::StaticFile(StaticFile::new(path))
    }

    /// Create a resource item.
    pub fn resource(output_path: impl Into<PathBuf>) -> Self {
        GeneratedItem::Resource(Resource::new(output_path))
    }

    /// What kind of item this is.
    pub fn kind(&self) -> ItemKind {
        match self {
            GeneratedItem::Page(_) => ItemKind::Page,
            GeneratedItem::StaticFile(_) => ItemKind::StaticFile,
            GeneratedItem::Resource(_) => ItemKind::Resource,
        }
    }
}

impl ResolveOutput for GeneratedItem {
    fn output_path(&self, dest: &DestinationRoot) -> PathBuf {
        match self {
            GeneratedItem::Page(page) => page.output_path(dest),
            GeneratedItem::StaticFile(file) => file.output_path(dest),
            GeneratedItem::Resource(resource) => resource.output_path(dest),
        }
    }
}

impl<T: ResolveOutput + ?Sized> ResolveOutput for &T {
    fn output_path(&self, dest: &DestinationRoot) -> PathBuf {
        (**self).output_path(dest)
    }
}
