use std::path::Path;

use log::debug;

use crate::uuid::obtain_uuid_from_xml;
use crate::{
    ArchiveReader, ArchiveSource, CfdiFileFilter, Entries, PackageEntry, PackageSnapshot,
    ReaderConfig, Result, UuidIndex,
};

// ── CfdiPackageReader ─────────────────────────────────────────────────────────

/// Reads the CFDI documents stored in a package.
///
/// Wraps an [`ArchiveReader`] and exposes only the entries accepted by
/// [`CfdiFileFilter`], together with the UUID of each one.
///
/// # Example
///
/// ```no_run
/// use cfdi_package_reader::CfdiPackageReader;
///
/// let bytes = std::fs::read("package.zip").unwrap();
/// let reader = CfdiPackageReader::create_from_contents(&bytes).unwrap();
///
/// for (uuid, document) in reader.cfdis() {
///     println!("{} [{}] — {} bytes", document.name, uuid, document.content.len());
/// }
/// // The temporary copy of the package is removed here.
/// ```
#[derive(Debug)]
pub struct CfdiPackageReader {
    archive: ArchiveReader,
}

impl CfdiPackageReader {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Open a package stored on the file system.
    pub fn create_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        ArchiveReader::create_from_file(path).map(Self::new)
    }

    /// Open a package from an in-memory byte slice.
    pub fn create_from_contents(content: &[u8]) -> Result<Self> {
        ArchiveReader::create_from_contents(content).map(Self::new)
    }

    /// Same as [`create_from_contents`](Self::create_from_contents) with a
    /// custom [`ReaderConfig`].
    pub fn create_from_contents_with_config(content: &[u8], config: ReaderConfig) -> Result<Self> {
        ArchiveReader::create_from_contents_with_config(content, config).map(Self::new)
    }

    /// Open `source` with a custom [`ReaderConfig`].
    pub fn open(source: ArchiveSource, config: ReaderConfig) -> Result<Self> {
        ArchiveReader::open(source, config).map(Self::new)
    }

    /// Use an already opened archive.
    pub fn new(archive: ArchiveReader) -> Self {
        Self { archive }
    }

    // ── Documents ─────────────────────────────────────────────────────────────

    /// Iterate the CFDI documents in container order.
    ///
    /// Each call starts a new traversal. Entries rejected by name are never
    /// decompressed.
    pub fn documents(&self) -> Entries<'_> {
        Entries::new(
            &self.archive,
            CfdiFileFilter::accepts_name,
            CfdiFileFilter::accepts_content,
        )
    }

    /// Number of CFDI documents (not the number of entries in the archive;
    /// see [`ArchiveReader::count`] for that).
    pub fn count(&self) -> usize {
        self.documents().count()
    }

    /// Iterate `(uuid, document)` for every document. The UUID is empty when
    /// it could not be read.
    pub fn cfdis(&self) -> impl Iterator<Item = (String, PackageEntry)> + '_ {
        self.documents().map(|document| {
            let uuid = obtain_uuid_from_xml(&document.content);
            if uuid.is_empty() {
                debug!("No UUID found in '{}'", document.name);
            }
            (uuid, document)
        })
    }

    /// Map UUID → content for every document that has a UUID.
    ///
    /// When two documents share a UUID the later one in container order wins.
    pub fn uuid_index(&self) -> UuidIndex {
        self.cfdis()
            .filter(|(uuid, _)| !uuid.is_empty())
            .map(|(uuid, document)| (uuid, document.content))
            .collect()
    }

    /// A structured, serializable view of the package.
    pub fn snapshot(&self) -> PackageSnapshot {
        let files = self
            .documents()
            .map(|document| {
                let text = document.text().into_owned();
                (document.name, text)
            })
            .collect();

        PackageSnapshot {
            source: self.filename().display().to_string(),
            files,
            documents: self.uuid_index(),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The path the package was opened from.
    pub fn filename(&self) -> &Path {
        self.archive.filename()
    }

    /// Returns a reference to the underlying [`ArchiveReader`].
    pub fn archive(&self) -> &ArchiveReader {
        &self.archive
    }

    /// Close the package and remove its temporary file, if any.
    pub fn close(self) -> Result<()> {
        self.archive.close()
    }
}

impl From<ArchiveReader> for CfdiPackageReader {
    fn from(archive: ArchiveReader) -> Self {
        Self::new(archive)
    }
}
