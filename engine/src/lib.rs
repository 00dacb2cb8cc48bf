pub mod engine;
pub mod error;
pub mod index;
pub mod loader;
pub mod search;
pub mod sources;
pub mod tokenizer;

pub use engine::{SearchEngine, MAX_RESULTS};
pub use error::{BuildError, Result};
pub use index::{InvertedIndex, Occurrence};
pub use loader::{load_keywords, DocumentKeywords, DocumentSource};
pub use sources::{FsSource, MemorySource};
pub use tokenizer::{normalize, NoiseWords};
