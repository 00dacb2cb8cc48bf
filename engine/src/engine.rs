use crate::error::{BuildError, Result};
use crate::index::{InvertedIndex, Occurrence};
use crate::loader::{load_keywords, DocumentSource};
use crate::search::merge_ranked;
use crate::sources::{load_document_list, load_noise_words, FsSource};
use crate::tokenizer::NoiseWords;
use std::collections::HashSet;
use std::path::Path;

/// Most documents a search returns.
pub const MAX_RESULTS: usize = 5;

/// Owns the keyword index and noise words.
///
/// Built exactly once, then queried. Searching an unbuilt engine behaves as an
/// empty index.
#[derive(Debug, Default)]
pub struct SearchEngine {
    index: InvertedIndex,
    noise: NoiseWords,
    documents: usize,
    built: bool,
}

impl SearchEngine {
    pub fn new() -> Self { Self::default() }

    /// Index every listed document, in order, skipping `noise` words.
    ///
    /// A document listed more than once is indexed only the first time.
    /// On error the engine is left empty and unbuilt.
    pub fn build<I, S, D>(&mut self, documents: I, noise: NoiseWords, source: &D) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        D: DocumentSource + ?Sized,
    {
        if self.built {
            return Err(BuildError::AlreadyBuilt);
        }
        self.noise = noise;
        tracing::info!(noise_words = self.noise.len(), "building index");

        let mut seen: HashSet<String> = HashSet::new();
        for doc in documents {
            let doc = doc.as_ref();
            if !seen.insert(doc.to_string()) {
                tracing::debug!(document = doc, "skipping repeated document");
                continue;
            }
            let kws = match load_keywords(source, doc, &self.noise) {
                Ok(kws) => kws,
                Err(e) => {
                    self.reset();
                    return Err(e);
                }
            };
            self.index.merge(kws);
        }

        let count = seen.len();
        self.documents = count;
        self.built = true;
        tracing::info!(documents = count, keywords = self.index.len(), "index built");
        Ok(())
    }

    /// Build from a document-list file and a noise-word file. Documents are
    /// resolved relative to the document-list file's directory.
    pub fn make_index<P: AsRef<Path>, Q: AsRef<Path>>(&mut self, docs_file: P, noise_file: Q) -> Result<()> {
        if self.built {
            return Err(BuildError::AlreadyBuilt);
        }
        let noise = load_noise_words(noise_file)?;
        let docs_file = docs_file.as_ref();
        let documents = load_document_list(docs_file)?;
        let base = docs_file.parent().filter(|p| !p.as_os_str().is_empty()).map(Path::to_path_buf);
        self.build(documents, noise, &FsSource::new(base))
    }

    fn reset(&mut self) {
        self.index.clear();
        self.noise = NoiseWords::new();
        self.documents = 0;
    }

    /// Documents containing `kw1` or `kw2`, highest frequency first, at most [`MAX_RESULTS`].
    pub fn search(&self, kw1: &str, kw2: &str) -> Vec<String> {
        self.search_top(kw1, kw2, MAX_RESULTS)
    }

    /// Like [`search`](Self::search) with a caller-chosen cap.
    pub fn search_top(&self, kw1: &str, kw2: &str, limit: usize) -> Vec<String> {
        if !self.built {
            tracing::warn!("search on unbuilt index");
            return Vec::new();
        }
        let kw1 = kw1.to_lowercase();
        let kw2 = kw2.to_lowercase();
        let hits = match (self.index.get(&kw1), self.index.get(&kw2)) {
            (None, None) => Vec::new(),
            (Some(only), None) | (None, Some(only)) => merge_ranked(only, &[], limit),
            (Some(a), Some(b)) => merge_ranked(a, b, limit),
        };
        tracing::debug!(kw1 = %kw1, kw2 = %kw2, hits = hits.len(), "search");
        hits
    }

    pub fn occurrences(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.index.get(keyword)
    }

    pub fn index(&self) -> &InvertedIndex { &self.index }

    pub fn noise_words(&self) -> &NoiseWords { &self.noise }

    pub fn keyword_count(&self) -> usize { self.index.len() }

    pub fn document_count(&self) -> usize { self.documents }

    pub fn is_built(&self) -> bool { self.built }
}
