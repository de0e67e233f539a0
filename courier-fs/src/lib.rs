//! Capability-based file access for manifest inputs.
//!
//! Paths are resolved with ambient authority: relative paths against the
//! working directory, absolute paths as given.
#![forbid(unsafe_code)]

use camino::Utf8Path;
use cap_std::{ambient_authority, fs_utf8};
use std::io;

/// Open the file at `path` for reading.
///
/// # Errors
///
/// Returns the IO error from opening the file, for example `NotFound`.
pub fn open_utf8_file(path: &Utf8Path) -> io::Result<fs_utf8::File> {
    fs_utf8::File::open_ambient(path, ambient_authority())
}

/// Open the directory holding `path` and return it with the final component.
///
/// A bare file name resolves against the working directory.
///
/// # Errors
///
/// Fails when `path` has no file name or its directory cannot be opened.
pub fn open_dir_and_file(path: &Utf8Path) -> io::Result<(fs_utf8::Dir, String)> {
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::other(format!("{path} does not name a file")))?
        .to_owned();
    let dir = fs_utf8::Dir::open_ambient_dir(parent, ambient_authority())?;
    Ok((dir, file_name))
}

/// Whether `path` names an existing regular file.
///
/// # Errors
///
/// Returns `NotFound` when the file or its directory is missing, and any
/// other IO error raised while inspecting it.
pub fn file_is_file(path: &Utf8Path) -> io::Result<bool> {
    let (dir, name) = open_dir_and_file(path)?;
    let metadata = dir.metadata(&name)?;
    Ok(metadata.is_file())
}
