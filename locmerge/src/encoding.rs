//! Encoding detection and conversion for flat text resources.
//!
//! Apple `.strings` files in the wild are either UTF-8 or UTF-16 (with or
//! without a byte-order mark). Classification is a best-effort heuristic,
//! not a guarantee: a BOM wins outright, and a BOM-less file that fails
//! UTF-8 validation is assumed to be UTF-16. The classification is kept
//! alongside the decoded text so a merged file can be written back in the
//! encoding it arrived in.

use std::fs;
use std::path::Path;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};

use crate::error::Error;

/// The two encodings a flat resource file is written in.
///
/// `Utf16` is a classification, not a full record of the input: a
/// big-endian file is decoded correctly via its BOM but is rewritten as
/// little-endian with a BOM, the same way `plistlib`-era tooling did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16,
}

/// Classify a raw byte buffer as UTF-8 or UTF-16.
///
/// A UTF-16 byte-order mark of either endianness decides immediately;
/// otherwise the whole buffer is validated as UTF-8 and any failure is
/// taken to mean a legacy BOM-less UTF-16 file. Never fails.
pub fn detect(raw: &[u8]) -> TextEncoding {
    if let Some((encoding, _)) = Encoding::for_bom(raw) {
        if [UTF_16LE, UTF_16BE].contains(&encoding) {
            return TextEncoding::Utf16;
        }
    }
    if std::str::from_utf8(raw).is_ok() {
        TextEncoding::Utf8
    } else {
        TextEncoding::Utf16
    }
}

/// Decode a raw byte buffer into text plus its detected encoding.
///
/// UTF-8 input is taken verbatim (a UTF-8 BOM, if present, stays in the
/// text as U+FEFF). UTF-16 input is decoded BOM-aware for either
/// endianness; malformed code units become U+FFFD rather than an error, so
/// corrupt input degrades to lines the parser will treat as opaque.
pub fn decode(raw: &[u8]) -> (String, TextEncoding) {
    match detect(raw) {
        TextEncoding::Utf8 => (
            String::from_utf8_lossy(raw).into_owned(),
            TextEncoding::Utf8,
        ),
        TextEncoding::Utf16 => {
            // decode() sniffs the BOM itself, so a big-endian file is still
            // read correctly here; BOM-less input falls back to LE.
            let (text, _, _) = UTF_16LE.decode(raw);
            (text.into_owned(), TextEncoding::Utf16)
        }
    }
}

/// Encode text into the byte representation for `encoding`.
///
/// UTF-16 output is always little-endian and starts with a BOM;
/// `encoding_rs` has no UTF-16 encoder, so the code units are emitted
/// directly.
pub fn encode(text: &str, encoding: TextEncoding) -> Vec<u8> {
    match encoding {
        TextEncoding::Utf8 => text.as_bytes().to_vec(),
        TextEncoding::Utf16 => {
            let mut bytes = Vec::with_capacity(2 + text.len() * 2);
            bytes.extend_from_slice(&[0xFF, 0xFE]);
            for unit in text.encode_utf16() {
                bytes.extend_from_slice(&unit.to_le_bytes());
            }
            bytes
        }
    }
}

/// Read a flat resource file, returning its text and detected encoding.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<(String, TextEncoding), Error> {
    let raw = fs::read(path)?;
    Ok(decode(&raw))
}

/// Write text to `path` in the given encoding, creating missing parent
/// directories first.
pub fn write_file<P: AsRef<Path>>(
    path: P,
    text: &str,
    encoding: TextEncoding,
) -> Result<(), Error> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, encode(text, encoding))?;
    Ok(())
}
