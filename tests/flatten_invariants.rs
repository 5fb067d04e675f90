use std::collections::HashMap;

use bridge_triplets::{FlatCorpus, FlattenConfig, LabeledLine, RawDocument};

fn line(label: &str, content: &str) -> LabeledLine {
    LabeledLine {
        label: label.to_string(),
        content: content.to_string(),
    }
}

fn document(id: &str, prompt: &str, candidates: Vec<Vec<LabeledLine>>) -> RawDocument {
    RawDocument {
        id: id.to_string(),
        prompt: prompt.to_string(),
        candidates,
    }
}

fn build_corpus(documents: &[RawDocument]) -> FlatCorpus {
    FlatCorpus::flatten(documents, &FlattenConfig::default()).unwrap()
}

#[test]
fn local_indices_are_contiguous_and_lengths_uniform() {
    let documents = vec![
        document(
            "doc_a",
            "Read the input. Sort it. Print it. ",
            vec![
                vec![line("def", "def solve(xs):"), line("return", "return sorted(xs)")],
                vec![line("expression", "xs.sort()"), line("expression", "print(xs)")],
            ],
        ),
        document(
            "doc_b",
            "Compute the sum. ",
            vec![vec![line("return", "return sum(xs)")]],
        ),
    ];
    let corpus = build_corpus(&documents);

    let mut by_document: HashMap<&str, Vec<usize>> = HashMap::new();
    for record in corpus.records() {
        by_document
            .entry(record.document_id.as_str())
            .or_default()
            .push(record.local_index);
    }
    assert_eq!(by_document.len(), 2);
    for (document_id, locals) in by_document {
        let expected: Vec<usize> = (0..locals.len()).collect();
        assert_eq!(locals, expected, "gaps or repeats in {document_id}");
        for record in corpus
            .records()
            .iter()
            .filter(|record| record.document_id == document_id)
        {
            assert_eq!(record.document_length, locals.len());
        }
    }
}

#[test]
fn spans_tile_the_corpus_in_document_order() {
    let documents = vec![
        document("doc_a", "One. Two. ", vec![vec![line("return", "return 1")]]),
        document("doc_b", "Three. ", vec![vec![line("return", "return 3")]]),
        document("doc_c", "Four. Five. Six. ", Vec::new()),
    ];
    let corpus = build_corpus(&documents);

    let mut expected_start = 0;
    for (span, document) in corpus.spans().iter().zip(&documents) {
        assert_eq!(span.document_id, document.id);
        assert_eq!(span.start, expected_start);
        expected_start += span.len;
    }
    assert_eq!(expected_start, corpus.record_count());
}

#[test]
fn unrecognized_label_truncates_the_candidate() {
    let documents = vec![document(
        "doc",
        "Find the median. Return it. ",
        vec![vec![
            line("def", "def median(xs):"),
            line("expression", "xs = sorted(xs)"),
            line("lambda", "key=lambda x: x"),
            line("return", "return xs[len(xs) // 2]"),
        ]],
    )];
    let corpus = build_corpus(&documents);

    let texts: Vec<&str> = corpus.records().iter().map(|r| r.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "[ QUESTION ] Find the median . ",
            "Return it . ",
            "[ SOLUTION ] 0 . ",
            "[ DEF_STATEMENT ] def median(xs): . ",
            "[ EXPRESSION_STATEMENT ] xs = sorted(xs) . ",
        ]
    );
    assert!(corpus.records().iter().all(|r| r.document_length == 5));
}

#[test]
fn each_candidate_repeats_the_prompt_with_its_own_header() {
    let documents = vec![document(
        "doc",
        "Echo the input. ",
        vec![
            vec![line("expression", "print(s)")],
            vec![line("return", "return s")],
        ],
    )];
    let corpus = build_corpus(&documents);

    let texts: Vec<&str> = corpus.records().iter().map(|r| r.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "[ QUESTION ] Echo the input . ",
            "[ SOLUTION ] 0 . ",
            "[ EXPRESSION_STATEMENT ] print(s) . ",
            "[ QUESTION ] Echo the input . ",
            "[ SOLUTION ] 1 . ",
            "[ RETURN_STATEMENT ] return s . ",
        ]
    );
    let locals: Vec<usize> = corpus.records().iter().map(|r| r.local_index).collect();
    assert_eq!(locals, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn degenerate_units_are_filtered_before_counting() {
    // The middle split unit is empty and renders as the bare separator.
    let documents = vec![document("doc", "Alpha. . Beta. ", Vec::new())];
    let corpus = build_corpus(&documents);

    let texts: Vec<&str> = corpus.records().iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, vec!["[ QUESTION ] Alpha . ", "Beta . "]);
    assert!(corpus.records().iter().all(|r| r.document_length == 2));
}

#[test]
fn empty_prompt_still_contributes_a_tagged_unit() {
    let documents = vec![document(
        "doc",
        "",
        vec![vec![line("return", "return None")]],
    )];
    let corpus = build_corpus(&documents);

    let texts: Vec<&str> = corpus.records().iter().map(|r| r.text.as_str()).collect();
    assert_eq!(
        texts,
        vec![
            "[ QUESTION ]  . ",
            "[ SOLUTION ] 0 . ",
            "[ RETURN_STATEMENT ] return None . ",
        ]
    );
}

#[test]
fn prompt_without_delimiter_is_kept_whole() {
    let documents = vec![document(
        "doc",
        "Just one sentence without a boundary",
        Vec::new(),
    )];
    let corpus = build_corpus(&documents);

    assert_eq!(corpus.record_count(), 1);
    assert_eq!(
        corpus.records()[0].text,
        "[ QUESTION ] Just one sentence without a boundary . "
    );
}

#[test]
fn newline_breaks_are_normalized_before_splitting() {
    let documents = vec![document(
        "doc",
        "First sentence.\nSecond sentence. ",
        Vec::new(),
    )];
    let corpus = build_corpus(&documents);

    let texts: Vec<&str> = corpus.records().iter().map(|r| r.text.as_str()).collect();
    assert_eq!(
        texts,
        vec!["[ QUESTION ] First sentence . ", "Second sentence . "]
    );
}

#[test]
fn synonym_and_canonical_labels_render_the_same_tag() {
    let documents = vec![document(
        "doc",
        "Branch on x. ",
        vec![
            vec![line("if", "if x:")],
            vec![line("if_statement", "if x:")],
        ],
    )];
    let corpus = build_corpus(&documents);

    let tagged: Vec<&str> = corpus
        .records()
        .iter()
        .map(|r| r.text.as_str())
        .filter(|text| text.starts_with("[ IF_STATEMENT ]"))
        .collect();
    assert_eq!(tagged, vec!["[ IF_STATEMENT ] if x: . ", "[ IF_STATEMENT ] if x: . "]);
}
