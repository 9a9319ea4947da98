// Shared fixtures for the integration tests.
//
// Packages are built in memory with `zip::ZipWriter` so the tests need no
// binary fixtures on disk.

#![allow(dead_code)]

use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};

use zip::write::SimpleFileOptions;
use zip::ZipWriter;

pub const CFDI_NAME: &str = "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee.xml";
pub const CFDI_DOUBLE_EXTENSION_NAME: &str = "aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee.xml.xml";
pub const CFDI_UUID: &str = "11111111-2222-3333-4444-000000000001";

/// A minimal stamped CFDI whose UUID is `uuid` (written in upper case, as the
/// SAT does).
pub fn cfdi_xml(uuid: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<cfdi:Comprobante xmlns:cfdi="http://www.sat.gob.mx/cfd/4" Version="4.0" Total="1160.00">
  <cfdi:Complemento>
    <tfd:TimbreFiscalDigital xmlns:tfd="http://www.sat.gob.mx/TimbreFiscalDigital"
      Version="1.1"
      UUID="{}"
      FechaTimbrado="2024-01-15T10:30:00"/>
  </cfdi:Complemento>
</cfdi:Comprobante>
"#,
        uuid.to_ascii_uppercase()
    )
}

/// Build a ZIP archive. Names ending in `/` become directory entries.
pub fn create_zip(files: &[(&str, &[u8])]) -> Vec<u8> {
    let mut zip_data = Vec::new();
    {
        let mut writer = ZipWriter::new(Cursor::new(&mut zip_data));
        let options = SimpleFileOptions::default();
        for (name, content) in files {
            if name.ends_with('/') {
                writer.add_directory(*name, options).unwrap();
            } else {
                writer.start_file(*name, options).unwrap();
                writer.write_all(content).unwrap();
            }
        }
        writer.finish().unwrap();
    }
    zip_data
}

/// The layout of a package as downloaded and re-zipped on macOS:
///
/// ```text
/// __MACOSX/                                          metadata folder
/// __MACOSX/._aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee.xml metadata file
/// aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee.xml           valid cfdi
/// aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee.xml.xml       valid cfdi, double extension
/// 00000000-0000-0000-0000-000000000000.xml           correct name, zero bytes
/// empty-file                                         zero bytes, no extension
/// other.txt                                          wrong extension
/// ```
pub fn cfdi_package() -> Vec<u8> {
    let cfdi = cfdi_xml(CFDI_UUID);
    create_zip(&[
        ("__MACOSX/", b""),
        ("__MACOSX/._aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee.xml", b"\x00\x05\x16\x07"),
        (CFDI_NAME, cfdi.as_bytes()),
        (CFDI_DOUBLE_EXTENSION_NAME, cfdi.as_bytes()),
        ("00000000-0000-0000-0000-000000000000.xml", b""),
        ("empty-file", b""),
        ("other.txt", b"this is not a cfdi"),
    ])
}

/// Write `content` to `dir/name` and return the path.
pub fn write_package(dir: &Path, name: &str, content: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}
