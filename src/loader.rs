//! Reads the keys a tree is built from.
//!
//! There are two formats. Text keys are stored one per line, the whole line
//! being the key. Anything else is stored as whitespace separated tokens which
//! are parsed into the key type. Files are read completely before their keys
//! are handed out so a file that can't be opened never touches a tree.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use tracing::{debug, error, warn};

use crate::error::{LoadError, LoadResult};

/// Opens `path`, logging and wrapping the failure.
fn open(path: &Path) -> LoadResult<File> {
    File::open(path).map_err(|source| {
        error!(path = %path.display(), %source, "Error opening file");
        LoadError::Open {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn read_failed(path: &Path) -> impl FnOnce(std::io::Error) -> LoadError + '_ {
    move |source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads one key per line from `path`. Only the line feed and at most one
/// carriage return before it are stripped, so files with Windows line endings
/// give the same keys. Bytes that aren't UTF-8 are replaced rather than
/// rejecting the file.
pub fn load_lines(path: impl AsRef<Path>) -> LoadResult<Vec<String>> {
    let path = path.as_ref();
    let reader = BufReader::new(open(path)?);

    let lines = reader
        .split(b'\n')
        .map(|line| line.map(|line| line_key(&line)))
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_failed(path))?;

    debug!(path = %path.display(), keys = lines.len(), "Loaded line keys");
    Ok(lines)
}

/// A line without its line feed, minus one trailing `\r` if present.
fn line_key(line: &[u8]) -> String {
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

/// Reads whitespace separated keys of type `T` from `path`.
///
/// Like a formatted stream read, this stops at the first token that doesn't
/// parse. Every key before it is kept.
pub fn load_tokens<T>(path: impl AsRef<Path>) -> LoadResult<Vec<T>>
where
    T: FromStr,
{
    let path = path.as_ref();
    let mut contents = String::new();
    open(path)?
        .read_to_string(&mut contents)
        .map_err(read_failed(path))?;

    let keys = parse_tokens(&contents, path);
    debug!(path = %path.display(), keys = keys.len(), "Loaded token keys");
    Ok(keys)
}

fn parse_tokens<T>(contents: &str, path: &Path) -> Vec<T>
where
    T: FromStr,
{
    let mut keys = Vec::new();
    for (index, token) in contents.split_whitespace().enumerate() {
        match token.parse() {
            Ok(key) => keys.push(key),
            Err(_) => {
                warn!(path = %path.display(), index, token, "Stopped reading at unparsable token");
                break;
            }
        }
    }
    keys
}
