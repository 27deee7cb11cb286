//! Integration tests for the graphstep CLI
//!
//! These tests run the graphstep binary against small graph files.

mod support;

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use support::{graphstep, write_graph, DANGLING, ISOLATED, TRIANGLE};
use tempfile::tempdir;

fn config_table(section: &str, key: &str, value: toml::Value) -> String {
    let mut inner = toml::Table::new();
    inner.insert(key.to_string(), value);
    let mut root = toml::Table::new();
    root.insert(section.to_string(), toml::Value::Table(inner));
    toml::to_string(&root).unwrap()
}

fn write_config(dir: &Path, section: &str, key: &str, value: toml::Value) -> std::path::PathBuf {
    let path = dir.join("config.toml");
    fs::write(&path, config_table(section, key, value)).unwrap();
    path
}

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    graphstep()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: graphstep"))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("repr"))
        .stdout(predicate::str::contains("play"));
}

#[test]
fn test_no_command_prints_banner() {
    graphstep()
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "graphstep {}",
            env!("CARGO_PKG_VERSION")
        )));
}

// ============================================================================
// search
// ============================================================================

#[test]
fn test_search_bfs_human() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    graphstep()
        .arg("search")
        .arg(&graph)
        .args(["--algorithm", "bfs", "--from", "A", "--to", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Breadth-First Search (BFS) from A to C"))
        .stdout(predicate::str::contains("Path: A -> C"))
        .stdout(predicate::str::contains("Length: 1 edges"));
}

#[test]
fn test_search_dijkstra_prefers_cheaper_path() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    graphstep()
        .arg("search")
        .arg(&graph)
        .args(["-a", "dijkstra", "--from", "A", "--to", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: A -> B -> C"))
        .stdout(predicate::str::contains("Cost: 2"));
}

#[test]
fn test_search_steps_lists_trace() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    graphstep()
        .arg("search")
        .arg(&graph)
        .args(["-a", "bfs", "--from", "A", "--to", "C", "--steps"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  1. [start] Starting BFS from A."))
        .stdout(predicate::str::contains("[discover] Discovering B from A."))
        .stdout(predicate::str::contains("[found] Path found! Length: 1 edges."));
}

#[test]
fn test_search_quiet_drops_header() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    graphstep()
        .arg("search")
        .arg(&graph)
        .args(["-a", "bfs", "--from", "A", "--to", "C", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Breadth-First").not())
        .stdout(predicate::str::contains("Path: A -> C"));
}

#[test]
fn test_search_json_outcome() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    let output = graphstep()
        .args(["--format", "json", "search"])
        .arg(&graph)
        .args(["-a", "astar", "--from", "A", "--to", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["algorithm"], "astar");
    assert_eq!(json["reachable"], true);
    assert_eq!(json["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["cost"].as_f64(), Some(2.0));

    let trace = json["trace"].as_array().unwrap();
    assert_eq!(trace[0]["kind"], "start");
    assert_eq!(trace.last().unwrap()["kind"], "found");
}

#[test]
fn test_search_records() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    graphstep()
        .args(["--format", "records", "search"])
        .arg(&graph)
        .args(["-a", "dijkstra", "--from", "A", "--to", "C", "--steps"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "H graphstep=1 records=1 mode=search algorithm=dijkstra from=A to=C",
        ))
        .stdout(predicate::str::contains(
            "S 1 start \"Starting Dijkstra. Distance of A = 0.\"",
        ))
        .stdout(predicate::str::contains("P A,B,C cost=2"));
}

#[test]
fn test_search_unreachable_is_not_an_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", ISOLATED);

    graphstep()
        .arg("search")
        .arg(&graph)
        .args(["-a", "bfs", "--from", "A", "--to", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path from A to C"));

    graphstep()
        .args(["--format", "records", "search"])
        .arg(&graph)
        .args(["-a", "dijkstra", "--from", "A", "--to", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reachable=false"))
        .stdout(predicate::str::contains("U from=A to=C"));
}

#[test]
fn test_search_missing_vertex_exit_code() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    graphstep()
        .arg("search")
        .arg(&graph)
        .args(["-a", "bfs", "--from", "A", "--to", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("vertex not found: Z"));
}

#[test]
fn test_search_missing_vertex_json_envelope() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    let output = graphstep()
        .args(["--format", "json", "search"])
        .arg(&graph)
        .args(["-a", "bfs", "--from", "Z", "--to", "A"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "vertex_not_found");
}

#[test]
fn test_search_same_endpoints_rejected_by_default() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    graphstep()
        .arg("search")
        .arg(&graph)
        .args(["-a", "bfs", "--from", "A", "--to", "A"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("must differ"));

    graphstep()
        .arg("search")
        .arg(&graph)
        .args(["-a", "bfs", "--from", "A", "--to", "A", "--allow-same"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Length: 0 edges"));
}

#[test]
fn test_search_unknown_algorithm_is_usage_error() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    graphstep()
        .arg("search")
        .arg(&graph)
        .args(["-a", "greedy", "--from", "A", "--to", "C"])
        .assert()
        .code(2);

    let output = graphstep()
        .args(["--format", "json", "search"])
        .arg(&graph)
        .args(["-a", "greedy", "--from", "A", "--to", "C"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_bad_flag_with_json_format_gets_envelope() {
    let output = graphstep()
        .args(["--format", "json", "algorithms", "--frobnicate"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "usage_error");
}

#[test]
fn test_search_reads_stdin() {
    graphstep()
        .args(["search", "-", "-a", "dfs", "--from", "A", "--to", "C"])
        .write_stdin(TRIANGLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: A -> B -> C"));
}

#[test]
fn test_search_missing_file_is_generic_failure() {
    let dir = tempdir().unwrap();

    graphstep()
        .arg("search")
        .arg(dir.path().join("nope.json"))
        .args(["-a", "bfs", "--from", "A", "--to", "C"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nope.json"));
}

// ============================================================================
// repr
// ============================================================================

#[test]
fn test_repr_adjacency_list() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    graphstep()
        .arg("repr")
        .arg(&graph)
        .assert()
        .success()
        .stdout("Adjacency List\n\nA -> B, C\nB -> C\nC ->\n");
}

#[test]
fn test_repr_matrices() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    graphstep()
        .arg("repr")
        .arg(&graph)
        .args(["--kind", "adjacency-matrix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Adjacency Matrix"))
        .stdout(predicate::str::contains("A      0    1    1"));

    graphstep()
        .arg("repr")
        .arg(&graph)
        .args(["-k", "incidence-matrix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Incidence Matrix"))
        .stdout(predicate::str::contains("E3"));
}

#[test]
fn test_repr_json_and_records() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    let output = graphstep()
        .args(["--format", "json", "repr"])
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "list");
    assert_eq!(json["text"], "A -> B, C\nB -> C\nC ->\n");

    graphstep()
        .args(["--format", "records", "repr"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=repr kind=list lines=3"))
        .stdout(predicate::str::contains("L A -> B, C"));
}

#[test]
fn test_repr_unknown_kind() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    graphstep()
        .arg("repr")
        .arg(&graph)
        .args(["--kind", "tree"])
        .assert()
        .code(2);
}

// ============================================================================
// play
// ============================================================================

#[test]
fn test_play_runs_to_the_end() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    graphstep()
        .arg("play")
        .arg(&graph)
        .args(["-a", "dijkstra", "--from", "A", "--to", "C", "--speed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 ms per step"))
        .stdout(predicate::str::contains(
            "  1. [start] Starting Dijkstra. Distance of A = 0.",
        ))
        .stdout(predicate::str::contains("[found] Shortest path found! Cost: 2"))
        .stdout(predicate::str::contains("Path: A -> B -> C (cost 2)"));
}

#[test]
fn test_play_json_lines() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    let output = graphstep()
        .args(["--format", "json", "play"])
        .arg(&graph)
        .args(["-a", "bfs", "--from", "A", "--to", "C", "--speed", "1"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();

    assert_eq!(lines[0]["index"], 0);
    assert_eq!(lines[0]["step"]["kind"], "start");
    assert_eq!(lines[0]["highlight"]["vertices"]["A"]["highlight"], "visited");

    let summary = lines.last().unwrap();
    assert_eq!(summary["done"], true);
    assert_eq!(summary["path"], serde_json::json!(["A", "C"]));

    let steps = summary["steps"].as_u64().unwrap() as usize;
    assert_eq!(lines.len(), steps + 1);
}

#[test]
fn test_play_zero_speed_rejected() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    graphstep()
        .arg("play")
        .arg(&graph)
        .args(["-a", "bfs", "--from", "A", "--to", "C", "--speed", "0"])
        .assert()
        .code(2);
}

// ============================================================================
// algorithms
// ============================================================================

#[test]
fn test_algorithms_lists_all() {
    graphstep()
        .arg("algorithms")
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs"))
        .stdout(predicate::str::contains("Dijkstra's Algorithm (weighted)"))
        .stdout(predicate::str::contains("A* Search"));
}

#[test]
fn test_algorithms_json_with_pseudocode() {
    let output = graphstep()
        .args(["--format", "json", "algorithms", "--pseudocode"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let algorithms = json.as_array().unwrap();
    assert_eq!(algorithms.len(), 4);
    assert_eq!(algorithms[0]["id"], "bfs");
    assert_eq!(algorithms[0]["weighted"], false);
    assert!(!algorithms[3]["pseudocode"].as_array().unwrap().is_empty());
}

// ============================================================================
// validate
// ============================================================================

#[test]
fn test_validate_ok() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    graphstep()
        .arg("validate")
        .arg(&graph)
        .assert()
        .success()
        .stdout("ok: 3 vertices, 3 edges (3 directed)\n");
}

#[test]
fn test_validate_dangling_edge() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", DANGLING);

    graphstep()
        .arg("validate")
        .arg(&graph)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown vertex Z"));
}

#[test]
fn test_validate_malformed_json() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", "{ not json");

    graphstep()
        .arg("validate")
        .arg(&graph)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_validate_empty_input_is_usage_error() {
    graphstep()
        .args(["validate", "-"])
        .write_stdin("")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("no graph given in -"));
}

// ============================================================================
// config
// ============================================================================

#[test]
fn test_config_flag_sets_default_format() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);
    let config = write_config(
        dir.path(),
        "output",
        "format",
        toml::Value::String("json".to_string()),
    );

    let output = graphstep()
        .arg("--config")
        .arg(&config)
        .arg("validate")
        .arg(&graph)
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["status"], "ok");

    // --format still wins
    graphstep()
        .arg("--config")
        .arg(&config)
        .args(["--format", "human", "validate"])
        .arg(&graph)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("ok:"));
}

#[test]
fn test_config_dir_env_allows_same_endpoints() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);
    write_config(
        dir.path(),
        "search",
        "allow_same_endpoints",
        toml::Value::Boolean(true),
    );

    graphstep()
        .env("GRAPHSTEP_CONFIG_DIR", dir.path())
        .arg("search")
        .arg(&graph)
        .args(["-a", "dijkstra", "--from", "B", "--to", "B"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path: B"))
        .stdout(predicate::str::contains("Cost: 0"));
}

#[test]
fn test_config_zero_speed_rejected() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "animation", "speed_ms", toml::Value::Integer(0));

    graphstep()
        .arg("--config")
        .arg(&config)
        .arg("algorithms")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("speed_ms"));
}

#[test]
fn test_malformed_config_reports_toml_error() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.toml");
    fs::write(&config, "[animation\n").unwrap();

    let output = graphstep()
        .args(["--format", "json", "--config"])
        .arg(&config)
        .arg("algorithms")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["type"], "toml_error");
    assert!(json["error"]["message"]
        .as_str()
        .unwrap()
        .contains("config.toml"));
}

// ============================================================================
// logging
// ============================================================================

#[test]
fn test_verbose_logs_to_stderr_only() {
    let dir = tempdir().unwrap();
    let graph = write_graph(dir.path(), "g.json", TRIANGLE);

    let output = graphstep()
        .args(["--verbose", "--format", "json", "search"])
        .arg(&graph)
        .args(["-a", "bfs", "--from", "A", "--to", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    // stdout stays parseable JSON with logging on
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["algorithm"], "bfs");
}
