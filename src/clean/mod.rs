//! Destination cleanup
//!
//! Before a build writes its outputs, everything left in the destination by
//! earlier builds that the new build will not produce is deleted. The
//! obsolete set is
//!
//! ```text
//! obsolete = (existing - new_files - new_dirs) + replaced
//! ```
//!
//! where `existing` is every path under the root minus kept paths,
//! `new_dirs` is the ancestor closure of `new_files`, and `replaced` holds the
//! members of `new_dirs` that are currently regular files.
//!
//! # Example
//!
//! ```no_run
//! use sitesweep::clean::Cleaner;
//! use sitesweep::hooks::NoHooks;
//! use sitesweep::site::GeneratedItem;
//!
//! let items = vec![GeneratedItem::page("/"), GeneratedItem::page("/about/")];
//! let cleaner = Cleaner::new("output", &[".git"])?;
//! let result = cleaner.cleanup(&items, &NoHooks)?;
//! println!("{}", result.summary());
//! # Ok::<(), sitesweep::clean::CleanError>(())
//! ```

pub mod conflict;
pub mod error;
pub mod existing;
pub mod keep;
pub mod reconcile;
pub mod remove;
pub mod result;
pub mod target;

pub use conflict::replaced_paths;
pub use error::CleanError;
pub use existing::existing_paths;
pub use keep::KeepRules;
pub use reconcile::{cleanup, Cleaner};
pub use remove::{remove_all, remove_path, Removal, RemovalLog};
pub use result::CleanResult;
pub use target::TargetPaths;
