//! # cfdi-package-reader
//!
//! A Rust library for reading the ZIP packages in which CFDI invoices are
//! delivered and extracting the invoice XML documents they contain.
//!
//! ## What this crate does
//!
//! 1. **Open a package** — from a file path, or from raw bytes that are
//!    materialized into a temporary file owned by the reader.
//! 2. **Traverse entries** — every member of the archive, lazily, in the
//!    order the container stores them.
//! 3. **Filter CFDI documents** — keep only non-empty `.xml` members outside
//!    of platform metadata folders.
//! 4. **Extract UUIDs** — read the `TimbreFiscalDigital` UUID of each
//!    document with a tolerant pattern search.
//!
//! ## Quick example
//!
//! ```no_run
//! use cfdi_package_reader::CfdiPackageReader;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let reader = CfdiPackageReader::create_from_file("package.zip")?;
//!
//! println!("CFDI documents: {}", reader.count());
//! for (uuid, content) in reader.uuid_index().iter() {
//!     println!("  {uuid} — {} bytes", content.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

use thiserror::Error;

mod cfdi;
mod entry;
mod filter;
mod index;
mod package;
mod reader;
mod snapshot;
mod source;
pub mod uuid;

pub use cfdi::CfdiPackageReader;
pub use entry::PackageEntry;
pub use filter::CfdiFileFilter;
pub use index::UuidIndex;
pub use package::PackageReader;
pub use reader::{ArchiveReader, Entries};
pub use snapshot::PackageSnapshot;
pub use source::ArchiveSource;

// ── Configuration ────────────────────────────────────────────────────────────

/// Runtime configuration for [`ArchiveReader`] and [`CfdiPackageReader`].
#[derive(Debug, Clone, Default)]
pub struct ReaderConfig {
    /// Directory where packages opened from memory are written.
    /// `None` uses the system temporary directory.
    pub temp_directory: Option<PathBuf>,

    /// If set, entries whose uncompressed size exceeds this byte count are
    /// skipped during traversal (a warning is logged).
    pub max_entry_size: Option<u64>,
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum PackageError {
    /// The package is missing, unreadable, or not a valid ZIP container.
    #[error("Unable to open package '{path}': {source}")]
    ArchiveOpen {
        path: String,
        #[source]
        source: zip::result::ZipError,
    },

    /// The in-memory contents could not be written to a temporary file.
    #[error("Unable to create temporary package file: {0}")]
    TemporaryFileCreation(#[source] std::io::Error),

    /// A filesystem I/O error occurred (e.g. when removing a temporary file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The package snapshot could not be rendered as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, PackageError>;
