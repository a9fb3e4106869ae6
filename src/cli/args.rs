//! Argument file expansion
//!
//! Build systems pass long library lists through files to stay under
//! command-line length limits. An argument of the form `@path` is
//! replaced by the lines of `path`, one argument per line. Argument
//! files may reference further argument files.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::config::defaults::{ARGFILE_PREFIX, MAX_ARGFILE_DEPTH};
use crate::error::ArgfileError;

/// Expand every `@path` argument, recursively
///
/// Blank lines are skipped and a trailing `\r` is stripped from each
/// line. Arguments that are not valid UTF-8 are passed through as-is.
pub fn expand_argfiles<I>(args: I) -> Result<Vec<OsString>, ArgfileError>
where
    I: IntoIterator<Item = OsString>,
{
    let mut expanded = Vec::new();
    for arg in args {
        expand_into(arg, 0, &mut expanded)?;
    }
    Ok(expanded)
}

fn argfile_path(arg: &OsString) -> Option<PathBuf> {
    arg.to_str()
        .and_then(|s| s.strip_prefix(ARGFILE_PREFIX))
        .filter(|rest| !rest.is_empty())
        .map(PathBuf::from)
}

fn expand_into(arg: OsString, depth: usize, out: &mut Vec<OsString>) -> Result<(), ArgfileError> {
    let Some(path) = argfile_path(&arg) else {
        out.push(arg);
        return Ok(());
    };

    if depth >= MAX_ARGFILE_DEPTH {
        return Err(ArgfileError::TooDeep {
            path,
            limit: MAX_ARGFILE_DEPTH,
        });
    }

    for line in read_lines(&path)? {
        expand_into(line.into(), depth + 1, out)?;
    }
    Ok(())
}

fn read_lines(path: &Path) -> Result<Vec<String>, ArgfileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ArgfileError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;
    tracing::debug!("Expanding argument file {}", path.display());

    Ok(content
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .map(ToString::to_string)
        .collect())
}
