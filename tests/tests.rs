use lazy_static::lazy_static;
use opinion_miner::{
    matcher::SequenceMatcher,
    tagger::{Lexicon, PreTagged},
    types::{Opinion, Token},
    Extractor, PatternTrie, TagNormalizer,
};
use quickcheck_macros::quickcheck;

const TAGS: &[&str] = &["N", "NOUN", "NPROP", "V", "VERB", "ADJ", "DET", "CONJ"];

lazy_static! {
    static ref EXTRACTOR: Extractor = Extractor::default();
}

fn to_sentence(items: Vec<(String, u8)>) -> Vec<Token> {
    items
        .into_iter()
        .map(|(text, tag)| Token::new(text, TAGS[tag as usize % TAGS.len()]))
        .collect()
}

/// Straightforward rendition of the scan with a text buffer, used as reference.
fn reference_extract(
    sentence: &[Token],
    trie: &PatternTrie,
    normalizer: &TagNormalizer,
) -> Vec<Opinion> {
    use opinion_miner::trie::Lookup;

    let mut opinions = Vec::new();
    let mut i = 0;

    while (i as isize) < sentence.len() as isize - 1 {
        let mut level = trie.root();
        let mut opinion = String::new();

        for j in 0..trie.max_depth() {
            if j + i >= sentence.len() {
                break;
            }

            match level.lookup(normalizer.normalize(sentence[i + j].tag())) {
                Lookup::NoChild => break,
                Lookup::Terminal => {
                    opinion += sentence[i + j].text();
                    opinions.push(opinion);
                    i += j;
                    break;
                }
                Lookup::Child(children) => {
                    level = children;
                    opinion += sentence[i + j].text();
                    opinion += " ";
                }
            }
        }

        i += 1;
    }

    opinions
}

#[test]
fn canonical_scenarios() {
    let cases: &[(&[(&str, &str)], &[&str])] = &[
        (&[("carro", "N"), ("bom", "ADJ")], &["carro bom"]),
        (
            &[("carro", "N"), ("rodou", "V"), ("bem", "ADJ")],
            &["carro rodou bem"],
        ),
        (&[("o", "DET"), ("carro", "N"), ("bom", "ADJ")], &["carro bom"]),
        (&[("carro", "N"), ("e", "CONJ"), ("bom", "ADJ")], &[]),
        (&[("bom", "ADJ"), ("carro", "N")], &[]),
        (&[], &[]),
    ];

    for (tokens, expected) in cases {
        let sentence: Vec<Token> = tokens.iter().map(|&x| x.into()).collect();
        assert_eq!(&EXTRACTOR.extract(&sentence), expected);
    }
}

#[test]
fn lexicon_and_pre_tagged_agree() {
    let mut lexicon = Lexicon::default();
    lexicon.insert("bateria", "NOUN");
    lexicon.insert("durou", "VERB");
    lexicon.insert("pouco", "ADJ");
    lexicon.insert("a", "DET");

    let reviews = ["A bateria durou pouco", "a/DET bateria/NOUN durou/VERB pouco/ADJ"];

    assert_eq!(
        EXTRACTOR.process(&reviews[..1], &lexicon),
        EXTRACTOR.process(&reviews[1..], &PreTagged::default())
    );
}

#[quickcheck]
fn can_extract_anything(items: Vec<(String, u8)>) -> bool {
    EXTRACTOR.extract(&to_sentence(items));
    true
}

#[quickcheck]
fn matches_reference(items: Vec<(String, u8)>) -> bool {
    let sentence = to_sentence(items);

    EXTRACTOR.extract(&sentence)
        == reference_extract(&sentence, EXTRACTOR.trie(), EXTRACTOR.normalizer())
}

#[quickcheck]
fn matches_reference_with_shallow_trie(items: Vec<(String, u8)>) -> bool {
    let trie = PatternTrie::builder()
        .pattern(vec!["N", "ADJ"])
        .pattern(vec!["N", "V", "ADJ"])
        .pattern(vec!["DET", "N", "V", "ADJ"])
        .max_depth(3)
        .build()
        .unwrap();
    let normalizer = TagNormalizer::default();
    let sentence = to_sentence(items);

    SequenceMatcher::new(&trie, &normalizer).extract(&sentence)
        == reference_extract(&sentence, &trie, &normalizer)
}

#[quickcheck]
fn spans_are_disjoint_and_bounded(items: Vec<(String, u8)>) -> bool {
    let sentence = to_sentence(items);
    let spans = EXTRACTOR.matcher().spans(&sentence);
    let max_depth = EXTRACTOR.trie().max_depth();

    spans.iter().all(|span| span.len() >= 2 && span.len() <= max_depth)
        && spans.windows(2).all(|pair| pair[0].end() <= pair[1].start())
        && spans.last().map_or(true, |span| span.end() <= sentence.len())
}

#[quickcheck]
fn spans_start_with_a_noun(items: Vec<(String, u8)>) -> bool {
    let sentence = to_sentence(items);

    EXTRACTOR.matcher().spans(&sentence).iter().all(|span| {
        EXTRACTOR
            .normalizer()
            .normalize(sentence[span.start()].tag())
            == "N"
    })
}

#[quickcheck]
fn extraction_is_deterministic(items: Vec<(String, u8)>) -> bool {
    let sentence = to_sentence(items);

    EXTRACTOR.extract(&sentence) == EXTRACTOR.extract(&sentence)
}

#[quickcheck]
fn corpus_is_concatenation_of_sentences(sentences: Vec<Vec<(String, u8)>>) -> bool {
    let sentences: Vec<Vec<Token>> = sentences.into_iter().map(to_sentence).collect();

    let expected: Vec<Opinion> = sentences
        .iter()
        .flat_map(|sentence| EXTRACTOR.extract(sentence))
        .collect();

    EXTRACTOR.extract_all(&sentences) == expected
}
