//! Font source and compiled-cache bookkeeping.
//!
//! Fonts arrive as files in a caller-configured source directory. Before the
//! engine can use one it is compiled into the engine's intermediate format,
//! which lands in a `_compiled` subdirectory next to the sources together
//! with the encoding map the compiler consumed. Both compilation and
//! encoding-map materialization are memoized by file existence: if the
//! artifact is already in the cache nothing is recomputed, and failures are
//! returned rather than retried.

use crate::encodings;
use crate::error::{Error, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::fs;
use std::path::{Path, PathBuf};

/// Name of the compiled-font cache subdirectory.
pub const COMPILED_DIR: &str = "_compiled";

/// Paths and existence checks for the font source directory and its
/// compiled cache.
#[derive(Debug, Clone, Default)]
pub struct FontCache {
    source_dir: PathBuf,
    compiled_dir: PathBuf,
}

impl FontCache {
    /// Create a cache rooted at a font source directory; the compiled cache
    /// lives in its `_compiled` subdirectory.
    pub fn new(source_dir: impl Into<PathBuf>) -> Self {
        let source_dir = source_dir.into();
        let compiled_dir = source_dir.join(COMPILED_DIR);
        Self { source_dir, compiled_dir }
    }

    /// The font source directory.
    pub fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    /// The compiled-cache directory.
    pub fn compiled_dir(&self) -> &Path {
        &self.compiled_dir
    }

    /// Create the compiled-cache directory if it does not exist yet
    /// (group-writable on unix). Idempotent.
    pub fn prepare(&self) -> Result<()> {
        if self.compiled_dir.exists() {
            return Ok(());
        }
        fs::create_dir_all(&self.compiled_dir)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.compiled_dir, fs::Permissions::from_mode(0o775))?;
        }
        Ok(())
    }

    /// Absolute path of a file in the source directory.
    pub fn source_path(&self, filename: &str) -> PathBuf {
        self.source_dir.join(filename)
    }

    /// Whether a font file exists in the source directory.
    pub fn has_source(&self, filename: &str) -> bool {
        self.source_path(filename).exists()
    }

    /// Whether a file exists in the compiled cache. Checks encoding map
    /// files as well as compiled fonts, hence "file" rather than "font".
    pub fn has_compiled(&self, filename: &str) -> bool {
        self.compiled_dir.join(filename).exists()
    }

    /// Materialize the encoding map for `encoding` in the compiled cache and
    /// return its path.
    ///
    /// Skips the write if the map file already exists. Fails with
    /// [`Error::UnsupportedEncoding`] for encodings outside the embedded
    /// set (see [`crate::encodings::names`]).
    pub fn encoding_map(&self, encoding: &str) -> Result<PathBuf> {
        let path = self.compiled_dir.join(format!("{encoding}.map"));
        if path.exists() {
            return Ok(path);
        }
        let data = encodings::lookup(encoding)
            .ok_or_else(|| Error::UnsupportedEncoding(encoding.to_string()))?;
        let decoded = STANDARD.decode(data)?;
        fs::write(&path, decoded)?;
        log::debug!("materialized encoding map {}", path.display());
        Ok(path)
    }
}

/// A filename with its final extension stripped; the remainder doubles as
/// the font family name.
pub(crate) fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(dot) if dot > 0 => &filename[..dot],
        _ => filename,
    }
}

/// The compiled-cache filename for a source font file (extension replaced
/// with `.json`).
pub(crate) fn compiled_name(filename: &str) -> String {
    format!("{}.json", strip_extension(filename))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_strip_extension() {
        assert_eq!(strip_extension("OpenSans-Bold.ttf"), "OpenSans-Bold");
        assert_eq!(strip_extension("archive.tar.gz"), "archive.tar");
        assert_eq!(strip_extension("noext"), "noext");
        assert_eq!(strip_extension(".hidden"), ".hidden");
    }

    #[test]
    fn test_compiled_name() {
        assert_eq!(compiled_name("OpenSans-Bold.ttf"), "OpenSans-Bold.json");
        assert_eq!(compiled_name("plain"), "plain.json");
    }

    #[test]
    fn test_prepare_creates_compiled_dir() {
        let dir = tempdir().expect("tempdir");
        let cache = FontCache::new(dir.path());
        cache.prepare().expect("prepare should create the cache dir");
        assert!(dir.path().join(COMPILED_DIR).is_dir());
        // Idempotent.
        cache.prepare().expect("prepare is a no-op when the dir exists");
    }

    #[test]
    fn test_encoding_map_materialization_and_memoization() {
        let dir = tempdir().expect("tempdir");
        let cache = FontCache::new(dir.path());
        cache.prepare().expect("prepare");

        let path = cache.encoding_map("cp1252").expect("supported encoding");
        assert!(path.exists());
        let first = fs::read(&path).expect("read map");
        assert!(!first.is_empty());

        // Second call must return the same file without rewriting it.
        let again = cache.encoding_map("cp1252").expect("memoized");
        assert_eq!(path, again);
        assert_eq!(fs::read(&again).expect("read map"), first);
    }

    #[test]
    fn test_encoding_map_unsupported() {
        let dir = tempdir().expect("tempdir");
        let cache = FontCache::new(dir.path());
        cache.prepare().expect("prepare");

        let err = cache.encoding_map("cp866").expect_err("unsupported encoding");
        assert!(matches!(err, Error::UnsupportedEncoding(_)));
        assert!(!cache.has_compiled("cp866.map"));
    }

    #[test]
    fn test_existence_checks() {
        let dir = tempdir().expect("tempdir");
        let cache = FontCache::new(dir.path());
        cache.prepare().expect("prepare");

        assert!(!cache.has_source("OpenSans.ttf"));
        fs::write(cache.source_path("OpenSans.ttf"), b"\0\x01\0\0").expect("write font");
        assert!(cache.has_source("OpenSans.ttf"));

        assert!(!cache.has_compiled("OpenSans.json"));
        fs::write(cache.compiled_dir().join("OpenSans.json"), b"{}").expect("write compiled");
        assert!(cache.has_compiled("OpenSans.json"));
    }
}
