use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

use finals::language::ExamEntry;
use finals::parsing;

fn sample_files() -> Vec<PathBuf> {
    let dir = Path::new("tests/samples/");

    assert!(dir.exists(), "samples directory missing");

    let entries = fs::read_dir(dir).expect("Failed to read samples directory");

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry.expect("Failed to read directory entry");
        let path = entry.path();

        if path
            .extension()
            .and_then(|s| s.to_str())
            == Some("txt")
        {
            files.push(path);
        }
    }

    assert!(!files.is_empty(), "No .txt files found in samples directory");

    files.sort();
    files
}

fn sample(name: &str) -> Vec<ExamEntry> {
    let file = Path::new("tests/samples/").join(name);
    let content = parsing::load(&file)
        .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

    parsing::parse_finals_schedule(&content)
        .unwrap_or_else(|e| panic!("Failed to parse file {:?}: {}", file, e))
}

fn entry(
    crn: u32,
    combined: &[u32],
    date: (i32, u32, u32),
    times: (u16, u16),
    location: &str,
) -> ExamEntry {
    ExamEntry {
        crn,
        combined_crns: combined.to_vec(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2),
        start_time: Some(times.0),
        end_time: Some(times.1),
        location: Some(location.to_string()),
    }
}

#[test]
fn ensure_samples_parse() {
    let mut failures = Vec::new();

    for file in &sample_files() {
        let content = parsing::load(&file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        match parsing::parse_finals_schedule(&content) {
            Ok(entries) if !entries.is_empty() => {}
            Ok(_) => {
                println!("File {:?} parsed but produced no entries", file);
                failures.push(file.clone());
            }
            Err(e) => {
                println!("File {:?} failed to parse: {}", file, e);
                failures.push(file.clone());
            }
        }
    }

    if !failures.is_empty() {
        panic!(
            "Sample files should parse successfully, but {} files failed",
            failures.len()
        );
    }
}

#[test]
fn ensure_samples_deterministic() {
    for file in &sample_files() {
        let content = parsing::load(&file).unwrap();

        let first = parsing::parse_finals_schedule(&content).unwrap();
        let second = parsing::parse_finals_schedule(&content).unwrap();

        assert_eq!(first, second, "{:?}", file);
    }
}

#[test]
fn ensure_samples_consistent() {
    for file in &sample_files() {
        let content = parsing::load(&file).unwrap();
        let entries = parsing::parse_finals_schedule(&content).unwrap();

        for entry in &entries {
            assert!(entry
                .combined_crns
                .contains(&entry.crn));
            assert!(entry
                .date
                .is_some());
            assert!(entry
                .start_time
                .is_some());

            for crn in &entry.combined_crns {
                let owners: Vec<&ExamEntry> = entries
                    .iter()
                    .filter(|other| other.crn == *crn)
                    .collect();

                assert_eq!(owners.len(), 1, "{:?}: CRN {} in {:?}", file, crn, entry);
                assert_eq!(owners[0].combined_crns, entry.combined_crns);
            }
        }
    }
}

#[test]
fn column_blocks() {
    let entries = sample("column_blocks.txt");

    assert_eq!(
        entries,
        vec![
            entry(
                14612,
                &[14612, 14613, 14614],
                (2025, 12, 11),
                (800, 1000),
                "ANXNO 201"
            ),
            entry(
                14613,
                &[14612, 14613, 14614],
                (2025, 12, 11),
                (800, 1000),
                "ANXNO 201"
            ),
            entry(
                14614,
                &[14612, 14613, 14614],
                (2025, 12, 11),
                (800, 1000),
                "ANXNO 201"
            ),
            entry(
                15001,
                &[15001],
                (2025, 12, 12),
                (1015, 1215),
                "CEIS 414A / CEIS 414B"
            ),
        ]
    );
}

#[test]
fn labeled_sections() {
    let entries = sample("labeled_sections.txt");

    assert_eq!(
        entries,
        vec![
            entry(
                20101,
                &[20101],
                (2026, 4, 13),
                (900, 1200),
                "SIRC 2060A / SIRC 2060B"
            ),
            entry(20103, &[20103], (2026, 4, 14), (1400, 1700), "UB 2080"),
        ]
    );
}

#[test]
fn combined_rows() {
    let entries = sample("combined_rows.txt");

    assert_eq!(
        entries,
        vec![
            entry(
                10011,
                &[10011, 10012],
                (2025, 12, 8),
                (900, 1100),
                "UA 1350"
            ),
            entry(
                10012,
                &[10011, 10012],
                (2025, 12, 8),
                (900, 1100),
                "UA 1350"
            ),
            entry(
                10020,
                &[10020],
                (2025, 12, 9),
                (1400, 1600),
                "CEIS 414A / CEIS 414B"
            ),
            entry(
                10040,
                &[10040],
                (2025, 12, 10),
                (1900, 2200),
                "REGENT THEATRE"
            ),
            entry(10050, &[10050], (2025, 12, 11), (800, 1000), "SHA 116"),
        ]
    );
}
