// Composition tests: verifying that the stages chain together correctly.
//
// These tests exercise the data flow between modules:
//   LabelSource -> VectorizedCorpus -> pairs / rank / most_similar -> output
// without any network calls.

use std::io::Write;

use namesake::corpus::traits::StaticSource;
use namesake::corpus::{CsvFileSource, CsvOptions, LabelSource};
use namesake::output::json::SimilarityReport;
use namesake::output::similarity_line;
use namesake::similarity::{
    compare_all, compare_optional, rank, SimilarityError, VectorizedCorpus,
};

// ============================================================
// Chain: source -> corpus -> pairs
// ============================================================

#[tokio::test]
async fn loaded_labels_compare_like_literals() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"name\nJohn Smith\njohn smith\nJane Doe\n").unwrap();
    file.flush().unwrap();

    let labels = CsvFileSource::new(file.path(), CsvOptions::default())
        .load()
        .await
        .unwrap();
    let from_file = compare_all(&labels).unwrap();
    let from_literals = compare_all(&["John Smith", "john smith", "Jane Doe"]).unwrap();
    assert_eq!(from_file, from_literals);
}

#[tokio::test]
async fn static_source_feeds_vectorized_corpus() {
    let labels = StaticSource::new(["Pad Open", "pad open", "Wire Bond Lift", "pad short"])
        .load()
        .await
        .unwrap();
    let corpus = VectorizedCorpus::new(&labels);

    assert_eq!(corpus.len(), 4);
    assert_eq!(corpus.pairs().unwrap(), compare_all(&labels).unwrap());

    let nearest = corpus.most_similar(3, 1).unwrap();
    // "pad short" shares "pad" with both pad-open labels; the lower index wins the tie
    assert_eq!(nearest[0].index, 0);
    assert!((nearest[0].score - 0.5).abs() < 1e-10);
}

#[test]
fn corpus_similarity_matches_pairs() {
    let labels = ["a b c", "a b", "c", "d"];
    let corpus = VectorizedCorpus::new(&labels);
    for r in corpus.pairs().unwrap() {
        let direct = corpus.similarity(r.i, r.j).unwrap().unwrap();
        let reversed = corpus.similarity(r.j, r.i).unwrap().unwrap();
        assert_eq!(direct, r.score);
        assert_eq!(reversed, r.score);
    }
}

// ============================================================
// Chain: pairs -> output
// ============================================================

#[test]
fn printed_lines_match_expected_format() {
    let results = compare_all(&["A A B", "A B B", ""]).unwrap();
    let lines: Vec<String> = results
        .iter()
        .map(|r| similarity_line("developer", r.i, r.j, r.score))
        .collect();
    assert_eq!(
        lines,
        vec![
            "Similarity between developer 1 and developer 2: 0.80",
            "Similarity between developer 1 and developer 3: 0.00",
            "Similarity between developer 2 and developer 3: 0.00",
        ]
    );
}

#[test]
fn ranked_report_serializes_in_score_order() {
    let labels: Vec<String> = ["Lee Ann", "Bob", "ann lee"].iter().map(|s| s.to_string()).collect();
    let results = rank(compare_all(&labels).unwrap());
    let json = SimilarityReport::new("fixture".into(), &labels, 3, &results)
        .to_json()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["results"][0]["i"], 0);
    assert_eq!(value["results"][0]["j"], 2);
    let top = value["results"][0]["score"].as_f64().unwrap();
    assert!((top - 1.0).abs() < 1e-10);
}

// ============================================================
// Invalid input
// ============================================================

#[test]
fn missing_row_rejected_before_scoring() {
    let rows: Vec<Option<String>> = vec![Some("Ann".into()), Some("Bob".into()), None];
    assert_eq!(
        compare_optional(&rows),
        Err(SimilarityError::InvalidLabel { index: 2 })
    );
}
