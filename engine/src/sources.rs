//! File-backed inputs: the document list, the noise-word list, and document text.

use crate::error::{BuildError, Result};
use crate::loader::DocumentSource;
use crate::tokenizer::NoiseWords;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

fn read_file(path: &Path) -> io::Result<String> {
    let mut f = File::open(path)?;
    let mut buf = String::new();
    f.read_to_string(&mut buf)?;
    Ok(buf)
}

/// Read whitespace-separated noise words.
pub fn load_noise_words<P: AsRef<Path>>(path: P) -> Result<NoiseWords> {
    let path = path.as_ref();
    let text = read_file(path)
        .map_err(|source| BuildError::NoiseListUnavailable { path: path.to_path_buf(), source })?;
    Ok(text.split_whitespace().collect())
}

/// Read whitespace-separated document identifiers, in listed order.
pub fn load_document_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let text = read_file(path)
        .map_err(|source| BuildError::DocumentListUnavailable { path: path.to_path_buf(), source })?;
    Ok(text.split_whitespace().map(str::to_string).collect())
}

/// Documents are files; relative identifiers resolve against `base` when set.
#[derive(Debug, Clone, Default)]
pub struct FsSource {
    base: Option<PathBuf>,
}

impl FsSource {
    pub fn new(base: Option<PathBuf>) -> Self { Self { base } }

    pub fn resolve(&self, document: &str) -> PathBuf {
        match &self.base {
            Some(base) => base.join(document),
            None => PathBuf::from(document),
        }
    }
}

impl DocumentSource for FsSource {
    fn read(&self, document: &str) -> Result<String> {
        read_file(&self.resolve(document)).map_err(|e| BuildError::document_not_found(document, e))
    }
}

/// Documents held in memory, keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    docs: HashMap<String, String>,
}

impl MemorySource {
    pub fn new() -> Self { Self::default() }

    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, document: K, text: V) {
        self.docs.insert(document.into(), text.into());
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for MemorySource {
    fn from(entries: [(K, V); N]) -> Self {
        let mut src = MemorySource::new();
        for (k, v) in entries {
            src.insert(k, v);
        }
        src
    }
}

impl DocumentSource for MemorySource {
    fn read(&self, document: &str) -> Result<String> {
        self.docs.get(document).cloned().ok_or_else(|| {
            BuildError::document_not_found(document, io::Error::new(io::ErrorKind::NotFound, "no such document"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn reads_lists_and_documents() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("noise.txt"), "The\nand\n  a\n").unwrap();
        fs::write(dir.path().join("docs.txt"), "one.txt\ntwo.txt\n").unwrap();
        fs::write(dir.path().join("one.txt"), "hello world").unwrap();

        let noise = load_noise_words(dir.path().join("noise.txt")).unwrap();
        assert_eq!(noise.len(), 3);
        assert!(noise.contains("the"));

        let docs = load_document_list(dir.path().join("docs.txt")).unwrap();
        assert_eq!(docs, vec!["one.txt", "two.txt"]);

        let src = FsSource::new(Some(dir.path().to_path_buf()));
        assert_eq!(src.read("one.txt").unwrap(), "hello world");
        assert!(matches!(src.read("two.txt"), Err(BuildError::DocumentNotFound { .. })));
    }

    #[test]
    fn missing_lists_map_to_their_errors() {
        let dir = tempdir().unwrap();
        let err = load_noise_words(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, BuildError::NoiseListUnavailable { .. }));
        let err = load_document_list(dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, BuildError::DocumentListUnavailable { .. }));
    }
}
