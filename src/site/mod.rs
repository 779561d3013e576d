//! Site model: the items a build generates and the context it runs in.

pub mod context;
pub mod item;
pub mod manifest;

pub use context::SiteContext;
pub use item::{GeneratedItem, ItemKind, Page, ResolveOutput, Resource, StaticFile};
pub use manifest::{ItemManifest, ManifestError, MANIFEST_FILENAME};
