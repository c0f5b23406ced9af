use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use tempfile::tempdir;

const FEED: &str = "ID,Questions,Answer\n\
1,When is the wedding?,\"Jan 17, 2026\"\n\
2,How do I RSVP?,Use the form at the bottom of the page\n\
3,,orphan answer\n";

fn ask_json(feed_path: &std::path::Path, query: &str) -> Value {
    let output = Command::cargo_bin("concierge")
        .expect("binary")
        .arg("--quiet")
        .arg("--feed-file")
        .arg(feed_path)
        .arg("ask")
        .arg(query)
        .arg("--json")
        .output()
        .expect("command run");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn ask_answers_from_the_feed() {
    let temp = tempdir().unwrap();
    let feed = temp.path().join("feed.csv");
    fs::write(&feed, FEED).unwrap();

    let decision = ask_json(&feed, "when's the wedding");
    assert_eq!(decision["answer_text"], "Jan 17, 2026");
    assert_eq!(decision["matched"], true);
}

#[test]
fn missing_feed_degrades_to_routing_only() {
    let temp = tempdir().unwrap();
    let missing = temp.path().join("nope.csv");

    let decision = ask_json(&missing, "how do I rsvp");
    assert_eq!(decision["answer_text"], Value::Null);
    assert_eq!(decision["route"]["route_id"], "rsvp");
}

#[test]
fn gibberish_is_unmatched() {
    let temp = tempdir().unwrap();
    let feed = temp.path().join("feed.csv");
    fs::write(&feed, FEED).unwrap();

    let decision = ask_json(&feed, "completely unrelated gibberish xyz");
    assert_eq!(decision["matched"], false);
    assert_eq!(decision["route"], Value::Null);
}

#[test]
fn human_output_includes_navigation_prompt() {
    let temp = tempdir().unwrap();
    let feed = temp.path().join("feed.csv");
    fs::write(&feed, FEED).unwrap();

    Command::cargo_bin("concierge")
        .expect("binary")
        .arg("--quiet")
        .arg("--feed-file")
        .arg(&feed)
        .arg("ask")
        .arg("how do I rsvp")
        .assert()
        .success()
        .stdout(predicates::str::contains("Use the form at the bottom of the page"))
        .stdout(predicates::str::contains("rsvp"));
}

#[test]
fn routes_json_lists_the_table_in_order() {
    let output = Command::cargo_bin("concierge")
        .expect("binary")
        .arg("--quiet")
        .arg("routes")
        .arg("--json")
        .output()
        .expect("command run");

    assert!(output.status.success());
    let routes: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let routes = routes.as_array().expect("array");
    assert_eq!(routes.len(), 7);
    assert_eq!(routes[0]["route_id"], "rsvp");
    assert_eq!(routes.last().unwrap()["route_id"], "countdown");
}
