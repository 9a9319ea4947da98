use std::borrow::Cow;
use std::path::Path;

// ── PackageEntry ─────────────────────────────────────────────────────────────

/// A file stored inside a package.
///
/// Returned by [`crate::ArchiveReader::entries`] and
/// [`crate::CfdiPackageReader::documents`]. The entry owns its data and keeps
/// no reference to the reader it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageEntry {
    /// The path of the file inside the archive, as stored in the container.
    pub name: String,

    /// The raw, decompressed file content.
    pub content: Vec<u8>,
}

impl PackageEntry {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// The last component of [`name`](Self::name).
    ///
    /// ```
    /// # use cfdi_package_reader::PackageEntry;
    /// let entry = PackageEntry::new("2024/01/invoice.xml", b"".to_vec());
    /// assert_eq!(entry.file_name(), "invoice.xml");
    /// ```
    pub fn file_name(&self) -> &str {
        self.name.rsplit(['/', '\\']).next().unwrap_or(&self.name)
    }

    /// The content as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.content)
    }

    /// Write this entry into `output_dir` under its [`file_name`](Self::file_name),
    /// creating the directory if necessary.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cfdi_package_reader::CfdiPackageReader;
    ///
    /// let reader = CfdiPackageReader::create_from_file("package.zip").unwrap();
    /// for document in reader.documents() {
    ///     document.save_to_disk("./extracted").unwrap();
    /// }
    /// ```
    pub fn save_to_disk<P: AsRef<Path>>(&self, output_dir: P) -> std::io::Result<()> {
        let dir = output_dir.as_ref();
        std::fs::create_dir_all(dir)?;
        std::fs::write(dir.join(self.file_name()), &self.content)
    }
}
