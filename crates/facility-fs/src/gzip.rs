//! Gzip container codec
//!
//! Facility files ship as single-member gzip containers holding UTF-8 XML
//! text. The byte-level codec is exposed separately from the path helpers
//! so the patch pipeline can stay entirely in memory.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;

use crate::error::{Error, Result};
use crate::io::write_atomic;

/// Decompress a gzip container into raw bytes.
pub fn decompress(container: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(container);
    let mut bytes = Vec::new();
    decoder.read_to_end(&mut bytes)?;
    Ok(bytes)
}

/// Compress raw bytes into a gzip container.
pub fn compress(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(bytes)?;
    encoder.finish()
}

/// Read a gzip-compressed facility document as text.
pub fn read_gzipped(path: &Path) -> Result<String> {
    let container = fs::read(path).map_err(|e| Error::io(path, e))?;
    let bytes = decompress(&container).map_err(|e| Error::extract(path, e))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Extracted facility document");
    String::from_utf8(bytes).map_err(|_| Error::NotUtf8 {
        path: path.to_path_buf(),
    })
}

/// Compress a facility document and write the container atomically.
pub fn write_gzipped(path: &Path, document: &str) -> Result<()> {
    let container = compress(document.as_bytes()).map_err(|e| Error::compress(path, e))?;
    write_atomic(path, &container)
}
