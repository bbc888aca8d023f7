use cle::SummaryReport;

use std::{path::Path, path::PathBuf, process::Command};

use csv::{ReaderBuilder, Trim};

/// Input file index and the threshold each example is run with
const EXAMPLES: [(usize, &str); 2] = [(1, "2000"), (2, "500")];

fn run(input_file: &Path, threshold: &str, journal: Option<&Path>) -> Vec<SummaryReport> {
    let mut command = Command::new(env!("CARGO_BIN_EXE_cash-ledger"));
    command
        .arg(input_file)
        .env("CASH_THRESHOLD", threshold)
        .env_remove("CASH_JOURNAL");

    if let Some(journal) = journal {
        command.env("CASH_JOURNAL", journal);
    }

    let output = command.output().unwrap();

    println!("{}", String::from_utf8(output.stderr).unwrap());
    assert!(output.status.success());

    let output = String::from_utf8(output.stdout).unwrap();

    read_reports(ReaderBuilder::new().trim(Trim::All).from_reader(output.as_bytes()))
}

fn read_reports<R: std::io::Read>(mut reader: csv::Reader<R>) -> Vec<SummaryReport> {
    reader.deserialize().map(|record| record.unwrap()).collect()
}

#[test]
fn example_files() {
    let input_dir = PathBuf::from("./resources/test-examples/inputs");
    let expected_dir = PathBuf::from("./resources/test-examples/expected");

    for (idx, threshold) in EXAMPLES {
        let input_file = input_dir.join(format!("movements_{idx}.csv"));
        let expected_file = expected_dir.join(format!("summary_{idx}.csv"));

        println!("Testing input: {input_file:?}");
        println!("Expected: {expected_file:?}");

        let actual = run(&input_file, threshold, None);

        let expected = read_reports(
            ReaderBuilder::new()
                .trim(Trim::All)
                .from_path(expected_file)
                .unwrap(),
        );

        assert_eq!(actual, expected);
    }
}

#[test]
fn journal_carries_movements_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let journal = dir.path().join("journal.csv");
    let input_file = PathBuf::from("./resources/test-examples/inputs/movements_2.csv");

    let first = run(&input_file, "500", Some(&journal));
    assert_eq!(first[0].movements, 1);

    let second = run(&input_file, "500", Some(&journal));
    assert_eq!(second[0].movements, 2);
    assert_eq!(second[0].counter, cle::Money::from_dinars(2000));
    assert_eq!(second[0].cumulative_deposits, cle::Money::from_dinars(2000));
}

#[test]
fn missing_input_file_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_cash-ledger"))
        .arg("./resources/test-examples/inputs/does_not_exist.csv")
        .env_remove("CASH_JOURNAL")
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
