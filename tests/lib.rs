use std::fs;

mod common;

use balanced_rearrangements::breakpoints::read_breakpoints_from_path;
use balanced_rearrangements::rearrangements::write_rearrangements;
use balanced_rearrangements::{
    detect_balanced_rearrangements, BalancedRearrangement, Breakend, Breakpoint, Parameters,
    Strand,
};
use itertools::Itertools;

use common::Exhaustive;

fn breakpoint(
    (chrom_1, pos_1, strand_1): (&str, u64, &str),
    (chrom_2, pos_2, strand_2): (&str, u64, &str),
    id: &str,
) -> Breakpoint {
    Breakpoint::new(
        Breakend::new(chrom_1.to_owned(), pos_1, strand_1.parse().unwrap()),
        Breakend::new(chrom_2.to_owned(), pos_2, strand_2.parse().unwrap()),
        id.to_owned(),
    )
}

fn detect(breakpoints: &[Breakpoint]) -> Vec<BalancedRearrangement> {
    let _ = env_logger::builder().is_test(true).try_init();
    detect_balanced_rearrangements(breakpoints, Parameters::default(), Box::new(Exhaustive))
        .unwrap()
}

fn sorted_ids(rearrangement: &BalancedRearrangement) -> Vec<&str> {
    rearrangement
        .prediction_ids()
        .iter()
        .map(|id| id.as_str())
        .sorted()
        .collect()
}

fn reciprocal_translocation() -> Vec<Breakpoint> {
    vec![
        breakpoint(("5", 1000, "+"), ("6", 2000, "-"), "e"),
        breakpoint(("6", 2000, "+"), ("5", 1000, "-"), "f"),
    ]
}

/// A cycle over four chromosomes. Chromosome 1 loses 300 bases between its two breakends,
/// chromosome 3 keeps 100 bases on both derivative chromosomes.
fn chained_deletion_duplication() -> Vec<Breakpoint> {
    vec![
        breakpoint(("1", 1000, "+"), ("2", 5000, "-"), "a"),
        breakpoint(("2", 5000, "+"), ("3", 7900, "-"), "b"),
        breakpoint(("3", 8000, "+"), ("4", 9000, "-"), "c"),
        breakpoint(("4", 9000, "+"), ("1", 1300, "-"), "d"),
    ]
}

fn isolated() -> Vec<Breakpoint> {
    vec![breakpoint(("7", 100, "+"), ("8", 500, "-"), "z")]
}

#[test]
fn test_reciprocal_translocation() {
    let rearrangements = detect(&reciprocal_translocation());

    assert_eq!(rearrangements.len(), 1);
    assert_eq!(rearrangements[0].deleted_length(), 0);
    assert_eq!(rearrangements[0].duplicated_length(), 0);
    assert_eq!(sorted_ids(&rearrangements[0]), vec!["e", "f"]);
}

#[test]
fn test_isolated_breakpoint() {
    assert!(detect(&isolated()).is_empty());
}

#[test]
fn test_lone_deletion() {
    assert!(detect(&[breakpoint(("1", 100, "+"), ("1", 300, "-"), "x")]).is_empty());
}

#[test]
fn test_chained_deletion_duplication() {
    let rearrangements = detect(&chained_deletion_duplication());

    assert_eq!(rearrangements.len(), 1);
    assert_eq!(rearrangements[0].deleted_length(), 300);
    assert_eq!(rearrangements[0].duplicated_length(), 100);
    assert_eq!(sorted_ids(&rearrangements[0]), vec!["a", "b", "c", "d"]);
}

#[test]
fn test_unbalanced_translocation() {
    // chromosome 1 loses 300 bases, chromosome 2 keeps 100 bases twice
    let rearrangements = detect(&[
        breakpoint(("1", 1000, "+"), ("2", 5000, "-"), "a"),
        breakpoint(("2", 5100, "+"), ("1", 1300, "-"), "b"),
    ]);

    assert_eq!(
        rearrangements,
        vec![BalancedRearrangement::new(
            300,
            100,
            vec!["a".to_owned(), "b".to_owned()]
        )]
    );
}

#[test]
fn test_empty() {
    assert!(detect(&[]).is_empty());
}

#[test]
fn test_independent_events() {
    let breakpoints = chained_deletion_duplication()
        .into_iter()
        .chain(reciprocal_translocation())
        .chain(isolated())
        .collect_vec();
    let rearrangements = detect(&breakpoints);

    assert_eq!(rearrangements.len(), 2);
    assert_eq!(sorted_ids(&rearrangements[0]), vec!["a", "b", "c", "d"]);
    assert_eq!(
        (
            rearrangements[0].deleted_length(),
            rearrangements[0].duplicated_length()
        ),
        (300, 100)
    );
    assert_eq!(sorted_ids(&rearrangements[1]), vec!["e", "f"]);

    // every prediction is part of at least two-breakpoint events only once
    let ids = rearrangements
        .iter()
        .flat_map(|rearrangement| rearrangement.prediction_ids().iter())
        .collect_vec();
    assert_eq!(ids.len(), ids.iter().unique().count());
    for rearrangement in &rearrangements {
        assert!(rearrangement.prediction_ids().len() >= 2);
    }
}

#[test]
fn test_determinism() {
    let breakpoints = chained_deletion_duplication()
        .into_iter()
        .chain(reciprocal_translocation())
        .collect_vec();
    let first = detect(&breakpoints);

    assert_eq!(first, detect(&breakpoints));

    // input order does not matter either
    let reversed = breakpoints.into_iter().rev().collect_vec();
    assert_eq!(first, detect(&reversed));
}

#[test]
fn test_strand_parsing() {
    assert_eq!("+".parse::<Strand>().unwrap(), Strand::Plus);
    assert!("x".parse::<Strand>().is_err());
}

#[test]
fn test_tsv_round_trip() {
    let workdir = tempfile::tempdir().unwrap();
    let input = workdir.path().join("breakpoints.tsv");
    let output = workdir.path().join("rearrangements.tsv");
    fs::write(
        &input,
        "prediction_id\tchromosome_1\tstrand_1\tposition_1\tchromosome_2\tstrand_2\tposition_2\n\
         a\t1\t+\t1000\t2\t-\t5000\n\
         b\t2\t+\t5100\t1\t-\t1300\n\
         z\t7\t+\t100\t8\t-\t500\n",
    )
    .unwrap();

    let breakpoints = read_breakpoints_from_path(&input).unwrap();
    let rearrangements = detect(&breakpoints);
    write_rearrangements(fs::File::create(&output).unwrap(), &rearrangements).unwrap();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "deleted_length\tduplicated_length\tprediction_ids\n300\t100\ta,b\n"
    );
}
