//! UUID extraction from CFDI XML content.
//!
//! The search is a byte-level pattern match, not an XML parse, so documents
//! that are not perfectly well formed still yield their UUID.

use std::sync::OnceLock;

use regex::bytes::Regex;

static TFD_UUID_PATTERN: OnceLock<Regex> = OnceLock::new();
static UUID_SHAPE: OnceLock<Regex> = OnceLock::new();

/// `TimbreFiscalDigital` element (any prefix, any case) followed, inside the
/// same tag, by a `UUID` attribute. Quoted values are skipped whole since they
/// may contain `>`.
fn tfd_uuid_regex() -> &'static Regex {
    TFD_UUID_PATTERN.get_or_init(|| {
        Regex::new(r#"(?i-u)TimbreFiscalDigital\b(?:[^>"']|"[^"]*"|'[^']*')*?\bUUID\s*=\s*(?:"([^"]*)"|'([^']*)')"#)
            .expect("Invalid TimbreFiscalDigital regex pattern")
    })
}

/// Canonical 8-4-4-4-12 hexadecimal layout.
fn uuid_shape_regex() -> &'static Regex {
    UUID_SHAPE.get_or_init(|| {
        Regex::new(r"(?-u)^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
            .expect("Invalid UUID shape regex pattern")
    })
}

/// Find the UUID of the fiscal stamp in `content`.
///
/// Returns the UUID in lower case, or `None` when there is no
/// `TimbreFiscalDigital` element, it has no `UUID` attribute, or the value
/// is not a well-formed UUID.
///
/// ```
/// use cfdi_package_reader::uuid::find_uuid;
///
/// let xml = br#"<tfd:TimbreFiscalDigital Version="1.1" UUID="FF833B27-C8AB-4C44-A559-2C197BDD4067"/>"#;
/// assert_eq!(find_uuid(xml).as_deref(), Some("ff833b27-c8ab-4c44-a559-2c197bdd4067"));
/// ```
pub fn find_uuid(content: &[u8]) -> Option<String> {
    let captures = tfd_uuid_regex().captures(content)?;
    let value = captures.get(1).or_else(|| captures.get(2))?.as_bytes();

    if !uuid_shape_regex().is_match(value) {
        return None;
    }

    // The shape check guarantees ASCII.
    std::str::from_utf8(value).ok().map(str::to_ascii_lowercase)
}

/// Same as [`find_uuid`] with an empty string meaning "no UUID".
pub fn obtain_uuid_from_xml(content: &[u8]) -> String {
    find_uuid(content).unwrap_or_default()
}
