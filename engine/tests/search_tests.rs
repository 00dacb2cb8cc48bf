use engine::index::Occurrence;
use engine::{MemorySource, NoiseWords, SearchEngine};
use std::collections::HashSet;

fn build(docs: &[(&str, &str)], noise: &[&str]) -> SearchEngine {
    let mut src = MemorySource::new();
    for (id, text) in docs {
        src.insert(*id, *text);
    }
    let mut engine = SearchEngine::new();
    let noise: NoiseWords = noise.iter().copied().collect();
    engine.build(docs.iter().map(|(id, _)| *id), noise, &src).unwrap();
    engine
}

#[test]
fn builds_the_cat_sat_example() {
    let engine = build(&[("D1", "the cat sat"), ("D2", "the cat ran")], &["the"]);
    assert_eq!(engine.occurrences("cat").unwrap(), &[Occurrence::new("D1", 1), Occurrence::new("D2", 1)]);
    assert_eq!(engine.occurrences("sat").unwrap(), &[Occurrence::new("D1", 1)]);
    assert_eq!(engine.occurrences("ran").unwrap(), &[Occurrence::new("D2", 1)]);
    assert!(engine.occurrences("the").is_none());
}

#[test]
fn one_keyword_present() {
    let engine = build(&[("doc1", "cat cat cat"), ("doc2", "cat mouse")], &[]);
    assert_eq!(engine.search("cat", "dog"), vec!["doc1", "doc2"]);
}

#[test]
fn no_keyword_present() {
    let engine = build(&[("doc1", "bird")], &[]);
    assert!(engine.search("cat", "dog").is_empty());
}

#[test]
fn tie_favours_first_keyword() {
    let engine = build(
        &[
            ("d1", "cat cat cat cat cat"),
            ("d2", "cat cat dog dog"),
            ("d3", "dog dog dog dog dog"),
        ],
        &[],
    );
    assert_eq!(engine.search("cat", "dog"), vec!["d1", "d3", "d2"]);
    assert_eq!(engine.search("dog", "cat"), vec!["d3", "d1", "d2"]);
}

#[test]
fn results_are_capped_and_distinct() {
    let docs: Vec<(String, String)> = (1..=8)
        .map(|i| (format!("doc{i}"), format!("{} {}", "cat ".repeat(i), "dog ".repeat(9 - i))))
        .collect();
    let refs: Vec<(&str, &str)> = docs.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
    let engine = build(&refs, &[]);

    let hits = engine.search("cat", "dog");
    assert_eq!(hits.len(), 5);
    let unique: HashSet<&String> = hits.iter().collect();
    assert_eq!(unique.len(), hits.len());
    assert_eq!(hits, vec!["doc8", "doc1", "doc7", "doc2", "doc6"]);
}

#[test]
fn every_list_stays_ranked() {
    let engine = build(
        &[
            ("a", "red red blue"),
            ("b", "red blue blue blue"),
            ("c", "red red red red green"),
            ("d", "blue green green"),
            ("e", "red, red. Red! blue?"),
        ],
        &[],
    );
    for kw in engine.index().sorted_keywords() {
        let occs = engine.occurrences(kw).unwrap();
        assert!(!occs.is_empty());
        assert!(occs.windows(2).all(|w| w[0].frequency >= w[1].frequency), "{kw} not ranked");
    }
    let red: Vec<&str> = engine.occurrences("red").unwrap().iter().map(|o| o.document.as_str()).collect();
    assert_eq!(red, vec!["c", "e", "a", "b"]);
}

#[test]
fn occurrences_serialize_to_json() {
    let engine = build(&[("d1", "cat cat")], &[]);
    let json = serde_json::to_string(engine.occurrences("cat").unwrap()).unwrap();
    assert_eq!(json, r#"[{"document":"d1","frequency":2}]"#);
}
