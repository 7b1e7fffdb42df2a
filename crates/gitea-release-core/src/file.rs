//! Local file helpers: glob expansion and string-or-file content resolution

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Resolve a value that is either a literal string or a path to a file.
///
/// When the value names an existing file, the file's contents are returned;
/// otherwise the literal value is passed through unchanged.
pub fn read_string_or_file(value: &str) -> Result<String> {
    if !Path::new(value).is_file() {
        return Ok(value.to_string());
    }

    fs::read_to_string(value).map_err(|err| Error::read_file(value, err))
}

/// Expand a list of glob patterns into the matching file paths.
///
/// Patterns with no matches contribute nothing; results concatenate in
/// pattern order. A malformed pattern is an error.
pub fn expand_globs(patterns: &[String]) -> Result<Vec<String>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob::glob(pattern).map_err(|source| Error::InvalidGlob {
            pattern: pattern.clone(),
            source,
        })?;

        for path in paths {
            let path = path.map_err(|err| {
                let path = err.path().to_string_lossy().into_owned();
                Error::read_file(path, err.into())
            })?;
            files.push(path.to_string_lossy().into_owned());
        }
    }

    Ok(files)
}
