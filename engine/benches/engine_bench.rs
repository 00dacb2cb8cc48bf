use criterion::{criterion_group, criterion_main, Criterion};
use engine::tokenizer::keywords;
use engine::{MemorySource, NoiseWords, SearchEngine};

const TEXT: &str = "Alice was beginning to get very tired of sitting by her sister on the bank, \
and of having nothing to do: once or twice she had peeped into the book her sister was reading, \
but it had no pictures or conversations in it, and what is the use of a book, thought Alice, \
without pictures or conversations? So she was considering in her own mind (as well as she could, \
for the hot day made her feel very sleepy and stupid), whether the pleasure of making a \
daisy-chain would be worth the trouble of getting up and picking the daisies.";

fn noise() -> NoiseWords {
    ["a", "and", "the", "of", "to", "her", "she", "was", "it", "or", "in"].into_iter().collect()
}

fn bench_keywords(c: &mut Criterion) {
    let noise = noise();
    c.bench_function("keywords_paragraph", |b| b.iter(|| keywords(TEXT, &noise).count()));
}

fn bench_build(c: &mut Criterion) {
    let mut src = MemorySource::new();
    let ids: Vec<String> = (0..200).map(|i| format!("doc{i}")).collect();
    for (i, id) in ids.iter().enumerate() {
        src.insert(id.as_str(), TEXT.repeat(i % 7 + 1));
    }
    c.bench_function("build_200_docs", |b| {
        b.iter(|| {
            let mut engine = SearchEngine::new();
            engine.build(&ids, noise(), &src).expect("build");
            engine.search("alice", "book")
        })
    });
}

criterion_group!(benches, bench_keywords, bench_build);
criterion_main!(benches);
