/// Decides which package entries are CFDI documents.
///
/// An entry is a document when:
/// - it is not inside a `__MACOSX` folder and its file name does not start
///   with `._` (metadata written by macOS archivers),
/// - its name ends with `.xml` (case-sensitive; `name.xml.xml` qualifies),
/// - its content is not empty.
///
/// The content itself is not inspected beyond its length: a document whose
/// UUID cannot be read is still a document.
#[derive(Debug, Clone, Copy, Default)]
pub struct CfdiFileFilter;

impl CfdiFileFilter {
    const EXTENSION: &'static str = ".xml";
    const METADATA_DIRECTORY: &'static str = "__MACOSX";
    const RESOURCE_FORK_PREFIX: &'static str = "._";

    /// Returns `true` when `name` may hold a CFDI document.
    pub fn accepts_name(name: &str) -> bool {
        if !name.ends_with(Self::EXTENSION) {
            return false;
        }

        let mut components = name.rsplit(['/', '\\']);
        let file_name = components.next().unwrap_or_default();
        if file_name.starts_with(Self::RESOURCE_FORK_PREFIX) {
            return false;
        }

        !components.any(|dir| dir == Self::METADATA_DIRECTORY)
    }

    /// Returns `true` when `content` is not empty.
    pub fn accepts_content(content: &[u8]) -> bool {
        !content.is_empty()
    }

}
