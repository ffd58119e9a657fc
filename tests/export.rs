// tests/export.rs
//
// Whole-pipeline runs against a fixture document on disk, using the
// built-in catalog (real question texts) and checking the written tables.

use std::fs;
use std::path::PathBuf;

use poll_scrape::params::{Format, Params};
use poll_scrape::runner;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("poll_scrape_{name}"));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn fixture_doc() -> String {
    // Two real catalog questions: ATFLIR (A2G) outranks Mark points
    // (Navigation/Avionics) on weighted score.
    let table_a = "<div aria-label=\"A tabular representation of the data in the chart.\">\
        <table><tr><th></th><th>Count</th></tr>\
        <tr><td>10</td><td>5</td></tr></table></div>";
    let table_b = "<div aria-label=\"A tabular representation of the data in the chart.\">\
        <table><tr><th></th><th>Count</th></tr>\
        <tr><td>4</td><td>2</td></tr>\
        <tr><td>3</td><td>1</td></tr></table></div>";
    format!(
        "<html><body><div jsname=\"cAPHHf\">\
         <span class=\"freebirdAnalyticsViewQuestionTitle\">ATFLIR</span>{table_a}\
         <span class=\"freebirdAnalyticsViewQuestionTitle\">Mark points</span>{table_b}\
         </div></body></html>"
    )
}

fn params_for(dir: &PathBuf) -> Params {
    let input = dir.join("page.html");
    fs::write(&input, fixture_doc()).unwrap();
    let mut params = Params::new();
    params.input = Some(input);
    params.out = dir.join("out");
    params.respondents = 10;
    params
}

#[test]
fn run_writes_both_tables_with_headers() {
    let dir = tmp_dir("e2e_csv");
    let params = params_for(&dir);

    let summary = runner::run(&params).unwrap();
    assert_eq!(summary.questions, 2);
    assert_eq!(summary.categories, 2);
    assert_eq!(summary.files_written.len(), 2);

    let scores = fs::read_to_string(&summary.files_written[0]).unwrap();
    let mut lines = scores.lines();
    let header = lines.next().unwrap();
    assert!(header.starts_with("Question,1,2,"));
    assert!(header.contains("Implement it today!"));
    assert!(header.contains("Score (weighted)"));

    // Ranked by weighted score descending: ATFLIR (50) first.
    let first = lines.next().unwrap();
    assert!(first.starts_with("ATFLIR,"));
    assert!(first.contains(",50,")); // weighted
    assert!(first.ends_with(",A2G,ATFLIR"));
    let second = lines.next().unwrap();
    assert!(second.starts_with("Mark points,"));
    assert!(second.contains(",11,"));

    let rollup = fs::read_to_string(&summary.files_written[1]).unwrap();
    assert!(rollup.lines().next().unwrap().starts_with("Category,"));
    // 50 / (10 respondents × 1 question)
    let a2g = rollup.lines().find(|l| l.starts_with("A2G,")).unwrap();
    assert!(a2g.ends_with(",1,5.0000"));
    // Category names with '/' survive CSV unquoted
    assert!(rollup.contains("Navigation/Avionics,"));
}

#[test]
fn tsv_format_and_no_headers() {
    let dir = tmp_dir("e2e_tsv");
    let mut params = params_for(&dir);
    params.format = Format::Tsv;
    params.headers = false;

    let summary = runner::run(&params).unwrap();
    let scores = fs::read_to_string(&summary.files_written[0]).unwrap();

    assert!(summary.files_written[0].to_string_lossy().ends_with("poll_scores.tsv"));
    let first = scores.lines().next().unwrap();
    assert!(first.starts_with("ATFLIR\t")); // data row, no header
    assert_eq!(scores.lines().count(), 2);
}

#[test]
fn catalog_override_file_is_used() {
    let dir = tmp_dir("e2e_catalog");
    let mut params = params_for(&dir);

    // Recategorize both questions under one label.
    let catalog_path = dir.join("catalog.json");
    fs::write(
        &catalog_path,
        r#"{
            "ATFLIR": { "short": "pod", "category": "Weapon" },
            "Mark points": { "short": "marks", "category": "Weapon" }
        }"#,
    )
    .unwrap();
    params.catalog = Some(catalog_path);

    let summary = runner::run(&params).unwrap();
    assert_eq!(summary.categories, 1);

    let rollup = fs::read_to_string(&summary.files_written[1]).unwrap();
    let weapon = rollup.lines().find(|l| l.starts_with("Weapon,")).unwrap();
    // (50 + 11) / (10 respondents × 2 questions)
    assert!(weapon.ends_with(",2,3.0500"));
}

#[test]
fn unknown_question_aborts_without_output() {
    let dir = tmp_dir("e2e_unknown");
    let mut params = params_for(&dir);

    // Catalog that misses "Mark points" entirely.
    let catalog_path = dir.join("catalog.json");
    fs::write(&catalog_path, r#"{ "ATFLIR": { "short": "pod", "category": "A2G" } }"#).unwrap();
    params.catalog = Some(catalog_path);

    assert!(runner::run(&params).is_err());
    assert!(!params.out.join("poll_scores.csv").exists());
}
