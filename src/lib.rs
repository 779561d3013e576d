//! sitesweep - Destination cleanup for static site builds
//!
//! This library provides functionality to:
//! - Compute which paths in a build's destination are obsolete
//! - Keep configured paths (such as `.git`) untouched
//! - Replace files that sit where the next build needs a directory
//! - Let hook listeners adjust the obsolete set before anything is deleted

pub mod clean;
pub mod cli;
pub mod config;
pub mod hooks;
pub mod path;
pub mod site;
