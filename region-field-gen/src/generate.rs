//! Schema loading, rendering and output for `region-field-gen`.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use region_field_codegen::{Schema, render_schema};

use crate::error::GenError;

/// What a generation run did with the rendered source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No output path was given; the caller should print the source.
    Rendered(String),
    /// The output file was written.
    Written(Utf8PathBuf),
    /// The output file already matched; nothing was written.
    UpToDate(Utf8PathBuf),
}

/// Reads and parses a schema file.
///
/// # Errors
///
/// Returns [`GenError::Io`] when the file cannot be read and
/// [`GenError::Schema`] when it is not a valid schema.
pub fn load_schema(path: &Utf8Path) -> Result<Schema, GenError> {
    let text = read_file(path)?;
    tracing::debug!(%path, bytes = text.len(), "read schema");
    toml::from_str(&text).map_err(|err| GenError::Schema {
        path: path.to_path_buf(),
        source: Box::new(err),
    })
}

/// Renders `schema_path` and writes, checks or returns the result.
///
/// With `out` set, the file is only rewritten when its content differs. With
/// `check` set as well, a difference is reported as [`GenError::Stale`]
/// instead of being written.
///
/// # Errors
///
/// Propagates schema, synthesis and I/O failures.
pub fn run(
    schema_path: &Utf8Path,
    out: Option<&Utf8Path>,
    check: bool,
) -> Result<Outcome, GenError> {
    let schema = load_schema(schema_path)?;
    let source = render_schema(&schema).map_err(|err| GenError::Synth {
        path: schema_path.to_path_buf(),
        source: err,
    })?;
    tracing::info!(
        schema = %schema_path,
        types = schema.types.len(),
        "rendered accessors"
    );

    let Some(out_path) = out else {
        return Ok(Outcome::Rendered(source));
    };

    if read_existing(out_path)?.as_deref() == Some(source.as_str()) {
        tracing::debug!(path = %out_path, "output already up to date");
        return Ok(Outcome::UpToDate(out_path.to_path_buf()));
    }
    if check {
        return Err(GenError::Stale(out_path.to_path_buf()));
    }
    write_file(out_path, &source)?;
    tracing::info!(path = %out_path, "wrote accessors");
    Ok(Outcome::Written(out_path.to_path_buf()))
}

/// Splits `path` into its parent directory and file name.
fn split(path: &Utf8Path) -> Result<(&Utf8Path, &str), GenError> {
    let name = path.file_name().ok_or_else(|| GenError::Io {
        path: path.to_path_buf(),
        source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
    })?;
    let parent = match path.parent() {
        Some(parent) if !parent.as_str().is_empty() => parent,
        _ => Utf8Path::new("."),
    };
    Ok((parent, name))
}

fn open_dir(path: &Utf8Path) -> Result<Dir, GenError> {
    Dir::open_ambient_dir(path, ambient_authority()).map_err(|err| GenError::Io {
        path: path.to_path_buf(),
        source: err,
    })
}

fn read_file(path: &Utf8Path) -> Result<String, GenError> {
    let (parent, name) = split(path)?;
    open_dir(parent)?
        .read_to_string(name)
        .map_err(|err| GenError::Io {
            path: path.to_path_buf(),
            source: err,
        })
}

/// Reads the current output, returning `None` when it does not exist yet.
fn read_existing(path: &Utf8Path) -> Result<Option<String>, GenError> {
    match read_file(path) {
        Ok(text) => Ok(Some(text)),
        Err(GenError::Io { source, .. }) if source.kind() == std::io::ErrorKind::NotFound => {
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn write_file(path: &Utf8Path, contents: &str) -> Result<(), GenError> {
    let (parent, name) = split(path)?;
    Dir::create_ambient_dir_all(parent, ambient_authority()).map_err(|err| GenError::Io {
        path: parent.to_path_buf(),
        source: err,
    })?;
    open_dir(parent)?
        .write(name, contents)
        .map_err(|err| GenError::Io {
            path: path.to_path_buf(),
            source: err,
        })
}
