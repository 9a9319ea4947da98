use std::path::Path;

use crate::{ArchiveReader, CfdiPackageReader, Entries};

/// Common behaviour of every package reader.
///
/// A reader is countable and can be traversed as `(name, content)` entries
/// any number of times.
pub trait PackageReader {
    /// Number of elements in the package. For [`ArchiveReader`] this is every
    /// stored entry, directories included, so it can exceed the number of
    /// entries [`file_contents`](Self::file_contents) yields; for
    /// [`CfdiPackageReader`] it is the number of documents.
    fn count(&self) -> usize;

    /// The path of the currently open package.
    fn filename(&self) -> &Path;

    /// Traverse the elements, starting from the first one on every call.
    fn file_contents(&self) -> Entries<'_>;
}

impl PackageReader for ArchiveReader {
    fn count(&self) -> usize {
        ArchiveReader::count(self)
    }

    fn filename(&self) -> &Path {
        ArchiveReader::filename(self)
    }

    fn file_contents(&self) -> Entries<'_> {
        self.entries()
    }
}

impl PackageReader for CfdiPackageReader {
    fn count(&self) -> usize {
        CfdiPackageReader::count(self)
    }

    fn filename(&self) -> &Path {
        CfdiPackageReader::filename(self)
    }

    fn file_contents(&self) -> Entries<'_> {
        self.documents()
    }
}
