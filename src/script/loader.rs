//! Script loading from files or stdin.
//!
//! Gzip-compressed scripts are decompressed transparently: files are
//! recognized by a `.gz` extension, stdin by the gzip magic bytes.

use super::parser::{parse_script, Command};
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Loads and parses a script file.
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be read
/// - A `.gz` file is not valid gzip
/// - The script contains an invalid command
pub fn load_script_file<P: AsRef<Path>>(path: P) -> Result<Vec<Command>> {
    let path_ref = path.as_ref();

    let is_gzipped = path_ref
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext == "gz")
        .unwrap_or(false);

    let content = if is_gzipped {
        read_gzipped_file(path_ref)?
    } else {
        fs::read_to_string(path_ref)
            .with_context(|| format!("Failed to read script {}", path_ref.display()))?
    };

    parse_script(&content).context("Failed to parse script")
}

/// Loads and parses a script from standard input.
///
/// # Errors
///
/// This function will return an error if reading stdin fails, the input is
/// not UTF-8 (after decompression), or the script is invalid.
pub fn load_script_from_stdin() -> Result<Vec<Command>> {
    use std::io::{self, Read};

    let mut buffer = Vec::new();
    io::stdin()
        .read_to_end(&mut buffer)
        .context("Failed to read from stdin")?;

    let content = decode_script_bytes(buffer)?;
    parse_script(&content).context("Failed to parse script from stdin")
}

/// Converts raw script bytes to text, decompressing if they start with the
/// gzip magic bytes (0x1f 0x8b).
pub fn decode_script_bytes(bytes: Vec<u8>) -> Result<String> {
    if bytes.starts_with(&[0x1f, 0x8b]) {
        decompress_gzip_bytes(&bytes)
    } else {
        String::from_utf8(bytes).context("Invalid UTF-8 in script")
    }
}

fn read_gzipped_file<P: AsRef<Path>>(path: P) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let file = fs::File::open(path).context("Failed to open gzipped script")?;
    let mut decoder = GzDecoder::new(file);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped script - file may be corrupted")?;
    Ok(content)
}

fn decompress_gzip_bytes(bytes: &[u8]) -> Result<String> {
    use flate2::read::GzDecoder;
    use std::io::Read;

    let mut decoder = GzDecoder::new(bytes);
    let mut content = String::new();
    decoder
        .read_to_string(&mut content)
        .context("Failed to decompress gzipped stdin")?;
    Ok(content)
}
