//! Command-line tests for rsid-annotator
//!
//! The annotation service is replaced by a local mock server through `--server`.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

fn annotator() -> Command {
    Command::cargo_bin("rsid-annotator").expect("binary should build")
}

#[test]
fn test_no_arguments_prints_usage() {
    annotator()
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("<INPUT_FILE> <OUTPUT_FILE>"));
}

#[test]
fn test_one_argument_prints_usage() {
    annotator()
        .arg("rsids.txt")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_three_arguments_prints_usage() {
    annotator()
        .args(["rsids.txt", "report.tsv", "extra.tsv"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_help_succeeds() {
    annotator()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--log-level"));
}

#[test]
fn test_missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("report.tsv");

    annotator()
        .arg(dir.path().join("missing.txt"))
        .arg(&output)
        .args(["--log-level", "none"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read RSIDs"))
        .stdout(predicate::str::contains("Results written").not());

    assert!(!output.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_annotates_with_mock_server() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/vep/human/id"))
        .and(body_json(json!({"ids": ["rs1", "rs2", "rs1"]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": "rs1",
                "start": 100,
                "end": 100,
                "most_severe_consequence": "missense_variant",
                "transcript_consequences": [{"gene_symbol": "GENE1"}]
            }
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().unwrap();
    let input = dir.path().join("rsids.txt");
    let output = dir.path().join("report.tsv");
    fs::write(&input, "rs1\n\nrs2\nrs1\n").unwrap();

    annotator()
        .arg(&input)
        .arg(&output)
        .arg("--server")
        .arg(mock_server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Results written to {}",
            output.display()
        )));

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "RSID\tStart\tEnd\tMost Severe Consequence\tGenes\n\
         rs1\t100\t100\tmissense_variant\tGENE1\n\
         rs2\tN/A\tN/A\tN/A\tN/A\n\
         rs1\t100\t100\tmissense_variant\tGENE1\n"
    );
}

#[test]
fn test_unreachable_service_reports_all_not_found() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("rsids.txt");
    let output = dir.path().join("report.tsv");
    fs::write(&input, "rs1\nrs2\n").unwrap();

    annotator()
        .arg(&input)
        .arg(&output)
        .args(["--server", "http://127.0.0.1:1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Results written to"))
        .stderr(predicate::str::contains("Annotation lookup failed"));

    let content = fs::read_to_string(&output).unwrap();
    let rows: Vec<&str> = content.lines().skip(1).collect();
    assert_eq!(rows, vec!["rs1\tN/A\tN/A\tN/A\tN/A", "rs2\tN/A\tN/A\tN/A\tN/A"]);
}
