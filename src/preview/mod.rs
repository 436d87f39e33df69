//! The five previewers.
//!
//! Each previewer takes the resolved [`crate::Config`] and a
//! [`crate::process::Runner`], and writes everything it renders to the
//! supplied writer. Tool failures are handled here with a fallback or a
//! diagnostic line; only usage, lookup and cache errors reach the caller.

mod blame;
mod commit;
mod content;
mod diff;
mod package;
mod status;
mod text;

pub use blame::{BlameOutcome, BlamePreviewer};
pub use commit::{commit_id, CommitPreviewer};
pub use content::{ContentKind, ContentPreview, ContentPreviewer, ImageEvidence};
pub use diff::DiffOutcome;
pub use package::{CacheRecord, PackageCache, PackageOutcome, PackagePreviewer};
pub use status::{is_untracked, StatusPreview, StatusPreviewer};
