use crate::error::Result;
use crate::index::Occurrence;
use crate::tokenizer::{keywords, NoiseWords};
use std::collections::HashMap;

/// Keyword -> its single occurrence in one document.
pub type DocumentKeywords = HashMap<String, Occurrence>;

/// Resolves a document identifier to its text.
pub trait DocumentSource {
    /// Fails with `BuildError::DocumentNotFound` when the document cannot be read.
    fn read(&self, document: &str) -> Result<String>;
}

/// Scan one document and count how often each keyword occurs in it.
pub fn load_keywords<S: DocumentSource + ?Sized>(
    source: &S,
    document: &str,
    noise: &NoiseWords,
) -> Result<DocumentKeywords> {
    let text = source.read(document)?;
    let mut kws: DocumentKeywords = HashMap::new();
    for kw in keywords(&text, noise) {
        kws.entry(kw)
            .and_modify(|occ| occ.frequency += 1)
            .or_insert_with(|| Occurrence::new(document, 1));
    }
    tracing::debug!(document, keywords = kws.len(), "loaded document");
    Ok(kws)
}
