use plcs::{
    Alphabet, LcsScorer, Occurrence, OccurrenceTable, ParallelScorer, ReferenceChoice,
    SequentialScorer, Sequence,
};

const CASES: &[(&[u8], &[u8], u32)] = &[
    (b"ABCBDAB", b"BDCABA", 4),
    (b"AGCAT", b"GAC", 2),
    (b"", b"XYZ", 0),
    (b"AAAA", b"AA", 2),
    (b"ABC", b"DEF", 0),
];

fn parallel_scorers() -> Vec<ParallelScorer> {
    [
        ReferenceChoice::Shorter,
        ReferenceChoice::First,
        ReferenceChoice::Second,
    ]
    .into_iter()
    .map(|reference| {
        ParallelScorer::builder()
            .threads(2)
            .min_row_chunk(1)
            .reference(reference)
            .build()
            .unwrap()
    })
    .collect()
}

#[test]
fn known_pairs_sequential() {
    for &(a, b, expected) in CASES {
        assert_eq!(SequentialScorer.score(a, b).unwrap(), expected, "a={a:?} b={b:?}");
        assert_eq!(SequentialScorer.score(b, a).unwrap(), expected, "swapped");
    }
}

#[test]
fn known_pairs_parallel_every_reference() {
    for scorer in parallel_scorers() {
        for &(a, b, expected) in CASES {
            assert_eq!(
                scorer.score(a, b).unwrap(),
                expected,
                "{:?} a={a:?} b={b:?}",
                scorer.reference_choice()
            );
            assert_eq!(scorer.score(b, a).unwrap(), expected);
        }
    }
}

#[test]
fn default_scorer_on_global_pool() {
    let scorer = ParallelScorer::new();
    assert_eq!(scorer.score(b"ABCBDAB", b"BDCABA").unwrap(), 4);
    assert!(scorer.threads() >= 1);
}

#[test]
fn occurrence_table_for_textbook_reference() {
    let reference = b"BDCABA";
    let alphabet = Alphabet::from_pair(b"ABCBDAB", reference).unwrap();
    let table = OccurrenceTable::build(reference, &alphabet).unwrap();
    let a = alphabet.index_of(b'A').unwrap();

    for j in 0..4 {
        assert_eq!(table.lookup(a, j), Occurrence::Never, "column {j}");
    }
    assert_eq!(table.lookup(a, 4), Occurrence::At(4));
    assert_eq!(table.lookup(a, 5), Occurrence::At(4));
    assert_eq!(table.lookup(a, 6), Occurrence::At(6));
}

#[test]
fn shorter_reference_yields_narrow_matrix() {
    let scorer = ParallelScorer::builder().build().unwrap();
    let dp = scorer.fill(b"AAAA", b"AA").unwrap();
    // Columns follow the shorter input.
    assert_eq!(dp.cols(), 3);
    assert_eq!(dp.rows(), 5);
    assert_eq!(dp.terminal(), 2);
}

#[test]
fn sequences_read_from_files() {
    let dir = std::env::temp_dir().join(format!("plcs-scenarios-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path_a = dir.join("fileA.in");
    let path_b = dir.join("fileB.in");
    std::fs::write(&path_a, "ABCBDAB\n").unwrap();
    std::fs::write(&path_b, "BDC\nABA\n").unwrap();

    let a = Sequence::from_path(&path_a).unwrap();
    let b = Sequence::from_path(&path_b).unwrap();
    assert_eq!(a.len(), 7);
    assert_eq!(b.as_bytes(), b"BDCABA");
    assert_eq!(ParallelScorer::new().score(&a, &b).unwrap(), 4);

    std::fs::remove_dir_all(&dir).unwrap();
}
