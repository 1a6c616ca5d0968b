use plcs::{LcsScorer, ParallelScorer, ReferenceChoice, SequentialScorer};
use proptest::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            ALPHABET[idx]
        })
        .collect()
}

fn scorer(threads: usize, chunk: usize, reference: ReferenceChoice) -> ParallelScorer {
    ParallelScorer::builder()
        .threads(threads)
        .min_row_chunk(chunk)
        .reference(reference)
        .build()
        .unwrap()
}

#[test]
fn thread_count_does_not_change_matrix() {
    let mut rng = StdRng::seed_from_u64(7);
    let a = random_dna(&mut rng, 300);
    let b = random_dna(&mut rng, 220);
    let expected = SequentialScorer.fill(&a, &b).unwrap();

    for threads in [1, 2, 3, 4, 8] {
        for chunk in [1, 7, 64, 1024] {
            let got = scorer(threads, chunk, ReferenceChoice::First)
                .fill(&a, &b)
                .unwrap();
            assert_eq!(got, expected, "threads={threads} chunk={chunk}");
        }
    }
}

#[test]
fn reference_choice_only_transposes() {
    let mut rng = StdRng::seed_from_u64(11);
    let a = random_dna(&mut rng, 90);
    let b = random_dna(&mut rng, 140);
    let expected = SequentialScorer.fill(&a, &b).unwrap();

    let first = scorer(4, 1, ReferenceChoice::First).fill(&a, &b).unwrap();
    let second = scorer(4, 1, ReferenceChoice::Second).fill(&a, &b).unwrap();
    let shorter = scorer(4, 1, ReferenceChoice::Shorter).fill(&a, &b).unwrap();

    assert_eq!(first, expected);
    assert_eq!(second.transposed(), expected);
    // `a` is shorter, so it is the reference.
    assert_eq!(shorter, expected);
}

#[test]
fn scorers_run_side_by_side() {
    let mut rng = StdRng::seed_from_u64(3);
    let a = random_dna(&mut rng, 500);
    let b = random_dna(&mut rng, 400);
    let parallel = scorer(2, 16, ReferenceChoice::Shorter);
    let (s, p) = rayon::join(
        || SequentialScorer.score(&a, &b).unwrap(),
        || parallel.score(&a, &b).unwrap(),
    );
    assert_eq!(s, p);
}

proptest! {
    #[test]
    fn lcs_parallel_matches_baseline(
        a in "[ACGT]{0,32}",
        b in "[ACGT]{0,32}",
        threads in 1usize..5,
        chunk in 1usize..9,
    ) {
        let (a, b) = (a.as_bytes(), b.as_bytes());
        let expected = SequentialScorer.score(a, b).unwrap();
        let got = scorer(threads, chunk, ReferenceChoice::Shorter).score(a, b).unwrap();
        prop_assert_eq!(got, expected);
    }
}
