use criterion::{black_box, criterion_group, criterion_main, Criterion};
use opinion_miner::{
    tagger::{Lexicon, PreTagged, Tag},
    types::Token,
    Extractor,
};

const REVIEW: &str = "o/DET carro/N é/V bom/ADJ mas/CONJ o/DET motor/NOUN fez/VERB barulho/ADJ \
    e/CONJ a/DET bateria/N durou/V pouco/ADJ ,/PUNCT preço/N alto/ADJ";

fn tagged_review() -> Vec<Token> {
    PreTagged::default().tag(REVIEW).unwrap_or_default()
}

fn extract_sentence(c: &mut Criterion) {
    let extractor = Extractor::default();
    let sentence = tagged_review();

    c.bench_function("extract sentence", |b| {
        b.iter(|| extractor.extract(black_box(&sentence)))
    });
}

fn extract_corpus(c: &mut Criterion) {
    let extractor = Extractor::default();
    let sentences = vec![tagged_review(); 1000];

    c.bench_function("extract corpus", |b| {
        b.iter(|| extractor.extract_all(black_box(&sentences)))
    });
}

fn process_with_lexicon(c: &mut Criterion) {
    let extractor = Extractor::default();
    let mut lexicon = Lexicon::default();
    for (word, tag) in &[
        ("carro", "NOUN"),
        ("motor", "NOUN"),
        ("bom", "ADJ"),
        ("rodou", "VERB"),
        ("bem", "ADJ"),
    ] {
        lexicon.insert(*word, *tag);
    }
    let reviews = vec!["O carro rodou bem e o motor é bom, mas caro."; 1000];

    c.bench_function("process with lexicon", |b| {
        b.iter(|| extractor.process(black_box(&reviews), &lexicon))
    });
}

criterion_group!(extract, extract_sentence, extract_corpus, process_with_lexicon);
criterion_main!(extract);
