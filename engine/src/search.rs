use crate::index::Occurrence;
use std::cmp::Ordering;

/// Union of two ranked occurrence lists as distinct documents, highest
/// frequency first, at most `limit` long.
///
/// Both lists are scanned forward together. On equal frequencies the
/// document from `first` is emitted before the one from `second`. A document
/// already emitted is skipped, so it keeps its earliest (highest) position.
pub fn merge_ranked(first: &[Occurrence], second: &[Occurrence], limit: usize) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(limit.min(first.len() + second.len()));
    let (mut i, mut j) = (0usize, 0usize);

    while out.len() < limit {
        match (first.get(i), second.get(j)) {
            (None, None) => break,
            (Some(a), None) => {
                push_unique(&mut out, &a.document);
                i += 1;
            }
            (None, Some(b)) => {
                push_unique(&mut out, &b.document);
                j += 1;
            }
            (Some(a), Some(b)) => match a.frequency.cmp(&b.frequency) {
                Ordering::Greater => {
                    push_unique(&mut out, &a.document);
                    i += 1;
                }
                Ordering::Less => {
                    push_unique(&mut out, &b.document);
                    j += 1;
                }
                Ordering::Equal => {
                    push_unique(&mut out, &a.document);
                    if out.len() < limit {
                        push_unique(&mut out, &b.document);
                    }
                    i += 1;
                    j += 1;
                }
            },
        }
    }
    out
}

fn push_unique(out: &mut Vec<String>, document: &str) {
    if !out.iter().any(|d| d == document) {
        out.push(document.to_string());
    }
}
