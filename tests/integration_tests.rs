use httpmock::prelude::*;
use launchtally::{CliConfig, EtlEngine, LaunchPipeline, LocalStorage};
use std::collections::HashMap;
use tempfile::TempDir;

const PAGE: &str = r#"<!DOCTYPE html>
<html><body>
<div id="mw-content-text"><div class="mw-parser-output">
<table><tbody><tr><td>Infobox</td></tr></tbody></table>
<table><tbody><tr><th>Contents</th></tr></tbody></table>
<table><tbody><tr><td>1 February</td><td>decoy table</td></tr></tbody></table>
<table><tbody>
<tr><th colspan="7">Orbital launches</th></tr>
<tr><th>Date and time (UTC)</th><th>Rocket</th><th>Flight number</th><th>Launch site</th><th>LSP</th><th>Payload</th><th>Remarks</th></tr>
<tr><td rowspan="2">5 January02:25</td><td>Long March 3B</td><td>1</td><td>Xichang</td><td>CASC</td><td>ChinaSat 2D</td><td>Operational</td></tr>
<tr><td>Long March 3B</td><td>1</td><td>Xichang</td><td>CASC</td><td>Secondary payload</td><td>Operational</td></tr>
<tr><td>14 March07:14</td><td>Soyuz-FG</td><td>2</td><td>Baikonur</td><td>Roscosmos</td><td>Soyuz MS-12</td><td>Successful</td></tr>
<tr><td>14 March19:00</td><td>Falcon 9</td><td>3</td><td>Canaveral</td><td>SpaceX</td><td>Beresheet</td><td>En route</td></tr>
<tr><td>2 April</td><td>Vector-R</td><td>4</td><td>Kodiak</td><td>Vector</td><td>Test flight</td><td>Launch failure</td></tr>
<tr><td>28 December23:11</td><td>Long March 4B</td><td>5</td><td>Taiyuan</td><td>CASC</td><td>CBERS-4A</td><td>Operational</td></tr>
</tbody></table>
</div></div>
</body></html>"#;

fn test_config(source_url: String, output_path: String) -> CliConfig {
    CliConfig {
        source_url,
        output_path,
        verbose: false,
        monitor: false,
    }
}

fn read_output(output_path: &str) -> String {
    let file = std::path::Path::new(output_path).join("output.csv");
    assert!(file.exists());
    std::fs::read_to_string(file).unwrap()
}

/// Parses the emitted file and returns timestamp -> count.
fn parse_counts(content: &str) -> HashMap<String, u32> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers, csv::StringRecord::from(vec!["date", "value"]));

    reader
        .records()
        .map(|record| {
            let record = record.unwrap();
            (
                record.get(0).unwrap().to_string(),
                record.get(1).unwrap().parse::<u32>().unwrap(),
            )
        })
        .collect()
}

#[tokio::test]
async fn test_end_to_end_tally_with_real_http() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/wiki/2019_in_spaceflight");
        then.status(200)
            .header("Content-Type", "text/html; charset=UTF-8")
            .body(PAGE);
    });

    let config = test_config(server.url("/wiki/2019_in_spaceflight"), output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = LaunchPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    let result = engine.run().await;

    assert!(result.is_ok());
    page_mock.assert();
    assert!(result.unwrap().ends_with("output.csv"));

    let content = read_output(&output_path);
    assert_eq!(content.lines().count(), 366);
    assert!(content.starts_with("date, value\n"));
    assert!(content.contains("2019-03-14T00:00:00+00:00, 2\n"));

    let counts = parse_counts(&content);
    assert_eq!(counts.len(), 365);
    assert_eq!(counts["2019-01-05T00:00:00+00:00"], 1);
    assert_eq!(counts["2019-03-14T00:00:00+00:00"], 2);
    assert_eq!(counts["2019-04-02T00:00:00+00:00"], 0);
    assert_eq!(counts["2019-12-28T00:00:00+00:00"], 1);

    let total: u32 = counts.values().sum();
    assert_eq!(total, 4);
}

#[tokio::test]
async fn test_end_to_end_with_download_failure_writes_all_zeros() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/wiki/2019_in_spaceflight");
        then.status(500);
    });

    let config = test_config(server.url("/wiki/2019_in_spaceflight"), output_path.clone());
    let storage = LocalStorage::new(output_path.clone());
    let pipeline = LaunchPipeline::new(storage, config);
    let engine = EtlEngine::new(pipeline);

    let result = engine.run().await;

    // a failed download still yields a complete, zero-filled year
    assert!(result.is_ok());
    page_mock.assert();

    let content = read_output(&output_path);
    assert_eq!(content.lines().count(), 366);
    assert!(content
        .lines()
        .skip(1)
        .all(|line| line.ends_with(", 0")));
}

#[tokio::test]
async fn test_output_file_is_overwritten_between_runs() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().to_str().unwrap().to_string();

    let server = MockServer::start();
    let ok_mock = server.mock(|when, then| {
        when.method(GET).path("/ok");
        then.status(200)
            .header("Content-Type", "text/html; charset=UTF-8")
            .body(PAGE);
    });
    let failing_mock = server.mock(|when, then| {
        when.method(GET).path("/failing");
        then.status(503);
    });

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = LaunchPipeline::new(
        storage,
        test_config(server.url("/ok"), output_path.clone()),
    );
    EtlEngine::new(pipeline).run().await.unwrap();

    let first = read_output(&output_path);
    assert!(first.contains("2019-03-14T00:00:00+00:00, 2\n"));

    let storage = LocalStorage::new(output_path.clone());
    let pipeline = LaunchPipeline::new(
        storage,
        test_config(server.url("/failing"), output_path.clone()),
    );
    EtlEngine::new(pipeline).run().await.unwrap();

    ok_mock.assert();
    failing_mock.assert();

    // truncate-then-write: the second run fully replaces the first
    let second = read_output(&output_path);
    assert_eq!(second.lines().count(), 366);
    assert!(second.lines().skip(1).all(|line| line.ends_with(", 0")));
}
