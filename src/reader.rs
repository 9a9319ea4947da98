use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use log::{info, trace, warn};
use zip::result::ZipError;
use zip::ZipArchive;

use crate::{ArchiveSource, PackageEntry, PackageError, ReaderConfig, Result};

// ── ArchiveReader ────────────────────────────────────────────────────────────

/// An opened ZIP package.
///
/// The container is validated when the reader is created; after that,
/// counting and traversal never fail. Entries that cannot be decoded are
/// logged and skipped.
///
/// # Creating a reader
///
/// ```no_run
/// use cfdi_package_reader::{ArchiveReader, ArchiveSource, ReaderConfig};
///
/// // From a file path
/// let a = ArchiveReader::create_from_file("package.zip").unwrap();
///
/// // From an in-memory buffer (written to a temporary file)
/// let bytes = std::fs::read("package.zip").unwrap();
/// let a = ArchiveReader::create_from_contents(&bytes).unwrap();
///
/// // With custom configuration
/// let cfg = ReaderConfig {
///     max_entry_size: Some(10 * 1024 * 1024),
///     ..Default::default()
/// };
/// let a = ArchiveReader::open(ArchiveSource::from_path("package.zip"), cfg).unwrap();
/// ```
#[derive(Debug)]
pub struct ArchiveReader {
    // Declared before `source` so the file handle is closed before a
    // temporary file is removed.
    archive: Mutex<ZipArchive<File>>,
    entry_count: usize,
    source: ArchiveSource,
    config: ReaderConfig,
}

impl ArchiveReader {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Open a package stored on the file system.
    pub fn create_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open(ArchiveSource::from_path(path), ReaderConfig::default())
    }

    /// Open a package from an in-memory byte slice.
    ///
    /// The bytes are written to a temporary file that is removed when the
    /// reader is dropped or closed.
    pub fn create_from_contents(content: &[u8]) -> Result<Self> {
        Self::create_from_contents_with_config(content, ReaderConfig::default())
    }

    /// Same as [`create_from_contents`](Self::create_from_contents) with a
    /// custom [`ReaderConfig`].
    pub fn create_from_contents_with_config(content: &[u8], config: ReaderConfig) -> Result<Self> {
        let source = ArchiveSource::from_contents(content, config.temp_directory.as_deref())?;
        Self::open(source, config)
    }

    /// Open `source` as a ZIP container.
    ///
    /// The central directory is read eagerly: a missing file, an unreadable
    /// file or bytes that are not a ZIP archive fail here with
    /// [`PackageError::ArchiveOpen`]. On failure `source` is dropped, which
    /// removes its temporary file if it has one.
    pub fn open(source: ArchiveSource, config: ReaderConfig) -> Result<Self> {
        let path = source.path();
        info!("Opening package {}", path.display());

        let archive = File::open(path)
            .map_err(ZipError::from)
            .and_then(ZipArchive::new)
            .map_err(|e| PackageError::ArchiveOpen {
                path: path.display().to_string(),
                source: e,
            })?;

        let entry_count = archive.len();
        info!("Package {} has {entry_count} entries", path.display());

        Ok(Self {
            archive: Mutex::new(archive),
            entry_count,
            source,
            config,
        })
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Number of entries stored in the container, including directories and
    /// files that are not documents.
    pub fn count(&self) -> usize {
        self.entry_count
    }

    /// The path the container was opened from. For packages created from
    /// memory this is the temporary file.
    pub fn filename(&self) -> &Path {
        self.source.path()
    }

    /// Returns `true` when the package lives in a temporary file owned by
    /// this reader.
    pub fn is_temporary(&self) -> bool {
        self.source.is_temporary()
    }

    // ── Traversal ─────────────────────────────────────────────────────────────

    /// Iterate every file in the package in container order.
    ///
    /// Each call starts a new traversal from the first entry. Directory
    /// entries are skipped.
    pub fn entries(&self) -> Entries<'_> {
        Entries::new(self, |_| true, |_| true)
    }

    // ── Disposal ──────────────────────────────────────────────────────────────

    /// Close the container and remove the temporary file, if any.
    ///
    /// Dropping the reader has the same effect but ignores removal errors.
    pub fn close(self) -> Result<()> {
        let Self { archive, source, .. } = self;
        drop(archive);
        source.release()
    }

    /// Read entry `index` when it is a file accepted by `accept_name`.
    fn read_entry(&self, index: usize, accept_name: fn(&str) -> bool) -> Option<PackageEntry> {
        // A panic elsewhere cannot leave the archive half-updated: every read
        // seeks to the entry it needs.
        let mut archive = self.archive.lock().unwrap_or_else(PoisonError::into_inner);

        let mut file = match archive.by_index(index) {
            Ok(file) => file,
            Err(e) => {
                warn!("Skipping unreadable entry #{index} in {}: {e}", self.filename().display());
                return None;
            }
        };

        if file.is_dir() {
            return None;
        }

        let name = file.name().to_string();
        if !accept_name(&name) {
            trace!("Entry '{name}' rejected by name");
            return None;
        }

        if let Some(max) = self.config.max_entry_size {
            if file.size() > max {
                warn!("Skipping entry '{name}': {} bytes exceeds the limit of {max}", file.size());
                return None;
            }
        }

        let mut content = Vec::new();
        if let Err(e) = file.read_to_end(&mut content) {
            warn!("Skipping entry '{name}': {e}");
            return None;
        }

        Some(PackageEntry { name, content })
    }
}

// ── Entries ──────────────────────────────────────────────────────────────────

/// Lazy iterator over the files of an [`ArchiveReader`].
///
/// Created by [`ArchiveReader::entries`] and
/// [`CfdiPackageReader::documents`](crate::CfdiPackageReader::documents).
/// Content is decompressed only when the entry is reached.
pub struct Entries<'a> {
    reader: &'a ArchiveReader,
    index: usize,
    accept_name: fn(&str) -> bool,
    accept_content: fn(&[u8]) -> bool,
}

impl<'a> Entries<'a> {
    pub(crate) fn new(
        reader: &'a ArchiveReader,
        accept_name: fn(&str) -> bool,
        accept_content: fn(&[u8]) -> bool,
    ) -> Self {
        Self {
            reader,
            index: 0,
            accept_name,
            accept_content,
        }
    }
}

impl Iterator for Entries<'_> {
    type Item = PackageEntry;

    fn next(&mut self) -> Option<Self::Item> {
        while self.index < self.reader.entry_count {
            let index = self.index;
            self.index += 1;

            let Some(entry) = self.reader.read_entry(index, self.accept_name) else {
                continue;
            };
            if (self.accept_content)(&entry.content) {
                return Some(entry);
            }
            trace!("Entry '{}' rejected by content", entry.name);
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.reader.entry_count - self.index))
    }
}
