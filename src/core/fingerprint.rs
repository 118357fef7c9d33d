//! Content fingerprinting by streaming MD5.

use md5::{Digest, Md5};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Compute the MD5 fingerprint of a file's full content.
///
/// The file is read through a fixed-size buffer, so arbitrarily large
/// files are never loaded into memory at once. Returns the 32-character
/// lowercase hex digest.
pub fn fingerprint_file(path: &Path) -> std::io::Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut hasher = Md5::new();
    let mut buffer = [0u8; 8192];

    loop {
        let bytes_read = reader.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}
