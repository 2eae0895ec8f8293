//! Dotenv codec.
//!
//! Converts between `KEY=VALUE` text and [`SecretData`]. Values may be
//! double-quoted literals (see [`crate::core::quote`]) or raw text.

use std::collections::BTreeMap;
#[cfg(unix)]
use std::io::Write;
use std::path::Path;

use base64::Engine;
use tracing::debug;

use crate::core::quote;
use crate::core::types::SecretData;
use crate::error::{Error, FormatError, Result};

/// Parse dotenv text into a key-value mapping.
///
/// Each non-blank line is split on its first `=`. The right-hand side is
/// unquoted when it is a well-formed double-quoted literal and taken
/// verbatim otherwise. A later line wins over an earlier one with the same
/// key.
///
/// # Errors
///
/// Returns `FormatError::MissingSeparator` for a line without `=`.
pub fn decode(text: &str) -> Result<SecretData> {
    let mut data = BTreeMap::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            continue;
        }

        let (key, raw) = line
            .split_once('=')
            .ok_or_else(|| FormatError::MissingSeparator {
                line: line.to_string(),
            })?;

        let value = quote::unquote(raw).unwrap_or_else(|| raw.as_bytes().to_vec());
        data.insert(key.to_string(), value);
    }

    debug!(keys = data.len(), "decoded dotenv text");
    Ok(data)
}

/// Parse dotenv text given as raw bytes.
///
/// # Errors
///
/// Returns `FormatError::InvalidUtf8` if the input is not UTF-8 text, or
/// any error from [`decode`].
pub fn decode_bytes(bytes: &[u8]) -> Result<SecretData> {
    let text = std::str::from_utf8(bytes).map_err(|_| FormatError::InvalidUtf8)?;
    decode(text)
}

/// Read and parse a dotenv file.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be read, or any decode error.
pub fn read_file(path: impl AsRef<Path>) -> Result<SecretData> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("open file {:?}", path.display().to_string()), e))?;
    decode_bytes(&bytes)
}

/// Serialize one mapping into sorted dotenv lines.
pub fn encode(data: &SecretData, quote: bool) -> Vec<String> {
    encode_all(std::iter::once(data), quote)
}

/// Serialize several mappings into one sorted list of dotenv lines.
///
/// Lines are sorted by their full content. Identical keys coming from
/// different mappings each produce a line.
pub fn encode_all<'a, I>(data: I, quote: bool) -> Vec<String>
where
    I: IntoIterator<Item = &'a SecretData>,
{
    let mut lines: Vec<String> = data
        .into_iter()
        .flat_map(|map| map.iter())
        .map(|(key, value)| format!("{}={}", key, encode_value(value, quote)))
        .collect();

    lines.sort();
    lines
}

fn encode_value(value: &[u8], quote: bool) -> String {
    if quote {
        quote::quote(value)
    } else {
        String::from_utf8_lossy(value).into_owned()
    }
}

/// Write dotenv lines to a file, one per line.
///
/// The file is created with `0600` permissions on Unix.
///
/// # Errors
///
/// Returns `Error::Io` if the file cannot be written.
pub fn write_file(path: impl AsRef<Path>, lines: &[String]) -> Result<()> {
    let path = path.as_ref();
    let context = || format!("write to file {:?}", path.display().to_string());
    let content = render(lines);

    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .truncate(true)
            .write(true)
            .mode(0o600)
            .open(path)
            .map_err(|e| Error::io(context(), e))?;
        file.write_all(content.as_bytes())
            .map_err(|e| Error::io(context(), e))?;
        file.flush().map_err(|e| Error::io(context(), e))?;

        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
            .map_err(|e| Error::io(context(), e))?;
    }

    #[cfg(not(unix))]
    {
        std::fs::write(path, content).map_err(|e| Error::io(context(), e))?;
    }

    Ok(())
}

/// Join lines with a trailing newline after each.
pub fn render(lines: &[String]) -> String {
    let mut out = String::new();
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

/// Parse `KEY=VALUE` command-line arguments.
///
/// With `base64` set, each value is decoded from standard base64.
///
/// # Errors
///
/// Returns `FormatError::InvalidArgument` for an argument without `=`, or
/// `FormatError::InvalidBase64` for a value that does not decode.
pub fn parse_assignments<S: AsRef<str>>(args: &[S], base64: bool) -> Result<SecretData> {
    let mut data = BTreeMap::new();

    for arg in args {
        let arg = arg.as_ref();
        let (key, value) = arg
            .split_once('=')
            .ok_or_else(|| FormatError::InvalidArgument {
                arg: arg.to_string(),
            })?;

        let value = if base64 {
            base64::engine::general_purpose::STANDARD
                .decode(value)
                .map_err(|source| FormatError::InvalidBase64 {
                    key: key.to_string(),
                    source,
                })?
        } else {
            value.as_bytes().to_vec()
        };

        data.insert(key.to_string(), value);
    }

    Ok(data)
}
