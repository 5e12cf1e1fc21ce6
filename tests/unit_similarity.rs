// Unit tests for the scoring building blocks.
//
// Exercises the TF-IDF vectorizer, the score matrix and the ranking step in
// isolation, without touching the filesystem.

use antiplag::similarity::cosine::cosine_matrix;
use antiplag::similarity::matrix::{rank_matches, ScoreMatrix};
use antiplag::similarity::sequence::{line_ratio, sequence_matrix};
use antiplag::similarity::tfidf::{cosine_similarity, tokenize, TfIdfVectorizer};
use antiplag::submissions::Document;

fn docs(texts: &[(&str, &str)]) -> Vec<Document> {
    texts
        .iter()
        .map(|(identity, text)| Document {
            identity: identity.to_string(),
            text: text.to_string(),
        })
        .collect()
}

fn ids(documents: &[Document]) -> Vec<String> {
    documents.iter().map(|d| d.identity.clone()).collect()
}

// ============================================================
// Tokenizer / vectorizer
// ============================================================

#[test]
fn tokenizer_is_deterministic() {
    let text = "const total = items.reduce((acc, x) => acc + x, 0);";
    assert_eq!(tokenize(text), tokenize(text));
    assert_eq!(
        tokenize(text),
        vec!["const", "total", "items", "reduce", "acc", "acc"]
    );
}

#[test]
fn common_terms_weigh_less_than_rare_ones() {
    let (vectorizer, vectors) =
        TfIdfVectorizer::fit_transform(&["return value", "return other", "return unique"]);
    let ret = vectorizer.term_index("return").unwrap();
    let val = vectorizer.term_index("value").unwrap();

    let weights: std::collections::HashMap<usize, f64> =
        vectors[0].entries().iter().copied().collect();
    assert!(weights[&val] > weights[&ret]);
}

#[test]
fn cosine_is_symmetric_and_bounded() {
    let (_, vectors) = TfIdfVectorizer::fit_transform(&[
        "let a = load(); save(a);",
        "let b = load(); print(b); save(b);",
        "fetch(url).then(render)",
    ]);
    for a in &vectors {
        for b in &vectors {
            let ab = cosine_similarity(a, b);
            let ba = cosine_similarity(b, a);
            assert_eq!(ab, ba);
            assert!((0.0..=1.0).contains(&ab));
        }
    }
}

// ============================================================
// Score matrices
// ============================================================

#[test]
fn cosine_matrix_is_symmetric() {
    let documents = docs(&[
        ("a", "let x = compute(input); emit(x);"),
        ("b", "let y = compute(data); emit(y);"),
        ("c", "while running { tick(); }"),
        ("d", "emit(compute(tick()))"),
    ]);
    let m = cosine_matrix(&documents);
    assert_eq!(m.len(), 4);
    for i in 0..4 {
        assert_eq!(m.get(i, i), 1.0);
        for j in 0..4 {
            assert_eq!(m.get(i, j), m.get(j, i));
        }
    }
}

#[test]
fn identical_documents_score_one() {
    let documents = docs(&[
        ("a", "for (let i = 0; i < n; i++) { total += values[i]; }"),
        ("b", "for (let i = 0; i < n; i++) { total += values[i]; }"),
        ("c", "console.log('unrelated');"),
    ]);
    let m = cosine_matrix(&documents);
    assert!((m.get(0, 1) - 1.0).abs() < 1e-9, "got {}", m.get(0, 1));

    let seq = sequence_matrix(&documents);
    assert_eq!(seq.get(0, 1), 1.0);
}

#[test]
fn loop_scenario_flags_only_the_loop_pair() {
    let documents = docs(&[
        ("A", "for(i=0;i<10;i++){print(i);}"),
        ("B", "for(j=0;j<10;j++){print(j);}"),
        ("C", "print('hello world');"),
    ]);
    let ranked = rank_matches(&ids(&documents), &cosine_matrix(&documents), 0.5);

    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].pair, ("A".to_string(), "B".to_string()));
    assert!(ranked[0].similarity > 0.5);
}

#[test]
fn sequence_ratio_penalizes_reordering() {
    assert_eq!(line_ratio("a();\nb();", "a();\nb();"), 1.0);
    assert!((line_ratio("a();\nb();", "b();\na();") - 0.5).abs() < 1e-12);
}

// ============================================================
// Ranking
// ============================================================

#[test]
fn ranking_is_monotonic_and_self_free() {
    let scores = [
        [1.0, 0.91, 0.97, 0.40],
        [0.91, 1.0, 0.91, 0.99],
        [0.97, 0.91, 1.0, 0.10],
        [0.40, 0.99, 0.10, 1.0],
    ];
    let m = ScoreMatrix::from_pairs(4, |i, j| scores[i][j]);
    let names: Vec<String> = ["w", "x", "y", "z"].iter().map(|s| s.to_string()).collect();
    let ranked = rank_matches(&names, &m, 0.85);

    for pair in ranked.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
    for r in &ranked {
        assert_ne!(r.pair.0, r.pair.1);
    }
    // Equal scores keep discovery order: (w,x) before (x,y)
    let order: Vec<(&str, &str)> = ranked
        .iter()
        .map(|r| (r.pair.0.as_str(), r.pair.1.as_str()))
        .collect();
    assert_eq!(order, vec![("x", "z"), ("w", "y"), ("w", "x"), ("x", "y")]);
}

#[test]
fn threshold_zero_still_excludes_zero_scores() {
    let m = ScoreMatrix::from_pairs(2, |_, _| 0.0);
    let names = vec!["a".to_string(), "b".to_string()];
    assert!(rank_matches(&names, &m, 0.0).is_empty());
}
