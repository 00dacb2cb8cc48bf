use serde::Serialize;
use std::collections::HashMap;

/// One keyword's presence in one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Occurrence {
    pub document: String,
    pub frequency: u32,
}

impl Occurrence {
    pub fn new<S: Into<String>>(document: S, frequency: u32) -> Self {
        Self { document: document.into(), frequency }
    }
}

/// Keyword -> occurrences, each list kept in descending frequency order.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    keywords: HashMap<String, Vec<Occurrence>>,
}

impl InvertedIndex {
    pub fn new() -> Self { Self::default() }

    pub fn get(&self, keyword: &str) -> Option<&[Occurrence]> {
        self.keywords.get(keyword).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize { self.keywords.len() }

    pub fn is_empty(&self) -> bool { self.keywords.is_empty() }

    pub fn clear(&mut self) { self.keywords.clear(); }

    /// Fold one document's keyword map into the index.
    ///
    /// Each occurrence is appended to its keyword's list and moved into rank
    /// position, so documents merged earlier stay ahead of later ones at equal
    /// frequency.
    pub fn merge<I>(&mut self, document_keywords: I)
    where
        I: IntoIterator<Item = (String, Occurrence)>,
    {
        for (keyword, occ) in document_keywords {
            let list = self.keywords.entry(keyword).or_default();
            list.push(occ);
            insert_last(list);
        }
    }

    /// All keywords in lexical order.
    pub fn sorted_keywords(&self) -> Vec<&str> {
        let mut kws: Vec<&str> = self.keywords.keys().map(String::as_str).collect();
        kws.sort_unstable();
        kws
    }
}

/// Move the last element of `occs` into its descending-frequency position.
/// Elements `0..len-1` must already be ranked.
pub fn insert_last(occs: &mut Vec<Occurrence>) {
    insert_last_with(occs, |_| {});
}

/// Same as [`insert_last`], returning the midpoints probed by the binary search.
/// Returns `None` when the new occurrence is the only element.
pub fn insert_last_traced(occs: &mut Vec<Occurrence>) -> Option<Vec<usize>> {
    if occs.len() <= 1 { return None; }
    let mut midpoints = Vec::new();
    insert_last_with(occs, |mid| midpoints.push(mid));
    Some(midpoints)
}

fn insert_last_with<F: FnMut(usize)>(occs: &mut Vec<Occurrence>, mut visit: F) {
    let Some(last) = occs.pop() else { return };
    // First position whose frequency is strictly below the new one.
    let (mut lo, mut hi) = (0usize, occs.len());
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        visit(mid);
        if occs[mid].frequency >= last.frequency {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    occs.insert(lo, last);
}
