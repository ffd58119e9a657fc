// tests/extract.rs
//
// Extractor tests against in-memory fixture documents shaped like the
// rendered Forms results page (poll container, title spans, labelled
// data tables).

use poll_scrape::error::PollError;
use poll_scrape::specs::poll;

fn result_table(rows: &[(&str, &str)]) -> String {
    let mut t = String::from(
        "<div aria-label=\"A tabular representation of the data in the chart.\">\
         <table><tbody><tr><th></th><th>Count</th></tr>",
    );
    for (label, count) in rows {
        t.push_str(&format!("<tr><td>{label}</td><td>{count}</td></tr>"));
    }
    t.push_str("</tbody></table></div>");
    t
}

fn doc(blocks: &[(&str, Option<&[(&str, &str)]>)]) -> String {
    let mut d = String::from("<html><body><div jsname=\"cAPHHf\">");
    for (question, rows) in blocks {
        d.push_str("<div class=\"card\">");
        d.push_str(&format!(
            "<span class=\"freebirdAnalyticsViewQuestionTitle\">{question}</span>"
        ));
        if let Some(rows) = rows {
            d.push_str(&result_table(rows));
        }
        d.push_str("</div>");
    }
    d.push_str("</div></body></html>");
    d
}

#[test]
fn extracts_pairs_in_document_order() {
    let d = doc(&[
        ("First question", Some(&[("10", "5"), ("9", "2")])),
        ("Second question", Some(&[("1", "7")])),
    ]);
    let pairs = poll::extract(&d).unwrap();

    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].0, "First question");
    assert_eq!(pairs[1].0, "Second question");

    assert_eq!(pairs[0].1.get(10), 5);
    assert_eq!(pairs[0].1.get(9), 2);
    // Absent vote values default to 0, never null
    assert_eq!(pairs[0].1.get(1), 0);
    assert_eq!(pairs[0].1.total(), 7);

    assert_eq!(pairs[1].1.get(1), 7);
    assert_eq!(pairs[1].1.total(), 7);
}

#[test]
fn missing_poll_root_is_fatal() {
    let d = "<html><body><p>nothing to see</p></body></html>";
    match poll::extract(d) {
        Err(PollError::PollRootMissing) => {}
        other => panic!("expected PollRootMissing, got {other:?}"),
    }
}

#[test]
fn question_table_count_mismatch_is_fatal() {
    // Second question block has no data table → 2 titles, 1 table.
    let d = doc(&[
        ("Has a table", Some(&[("10", "1")])),
        ("Missing its table", None),
    ]);
    match poll::extract(&d) {
        Err(PollError::CountMismatch { questions: 2, results: 1 }) => {}
        other => panic!("expected CountMismatch, got {other:?}"),
    }
}

#[test]
fn malformed_rows_are_dropped_without_touching_others() {
    let d = doc(&[(
        "Q",
        Some(&[("N/A", "3"), ("10", "4"), ("11", "9"), ("5", "oops"), ("5", "2")]),
    )]);
    let pairs = poll::extract(&d).unwrap();
    let counts = pairs[0].1;

    // "N/A" label, out-of-range "11", and unparsable count dropped
    assert_eq!(counts.get(10), 4);
    assert_eq!(counts.get(5), 2);
    assert_eq!(counts.total(), 6);
}

#[test]
fn entities_and_nested_markup_are_normalized() {
    let d = doc(&[(
        "Harpoon,&nbsp;SEA radar directed <b>mode</b> (FTT) &amp; more",
        Some(&[("10", "1")]),
    )]);
    let pairs = poll::extract(&d).unwrap();
    assert_eq!(pairs[0].0, "Harpoon, SEA radar directed mode (FTT) & more");
}

#[test]
fn counts_tolerate_thousands_separators() {
    let d = doc(&[("Q", Some(&[("10", "1,234")]))]);
    let pairs = poll::extract(&d).unwrap();
    assert_eq!(pairs[0].1.get(10), 1234);
}

#[test]
fn empty_poll_container_yields_no_pairs() {
    let d = doc(&[]);
    let pairs = poll::extract(&d).unwrap();
    assert!(pairs.is_empty());
}
