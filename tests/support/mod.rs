use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

/// Get a Command for graphstep that ignores any user config file
pub fn graphstep() -> Command {
    let mut cmd = cargo_bin_cmd!("graphstep");
    cmd.env(
        "GRAPHSTEP_CONFIG_DIR",
        std::env::temp_dir().join("graphstep-tests-no-config"),
    );
    cmd.env_remove("GRAPHSTEP_LOG_LEVEL");
    cmd
}

/// A -> B (1), B -> C (1), A -> C (5), all directed
pub const TRIANGLE: &str = r#"{
  "vertices": [
    {"label": "A", "x": 0, "y": 0},
    {"label": "B", "x": 1, "y": 0},
    {"label": "C", "x": 2, "y": 0}
  ],
  "edges": [
    {"from": "A", "to": "B", "directed": true},
    {"from": "B", "to": "C", "directed": true},
    {"from": "A", "to": "C", "directed": true}
  ],
  "edgeCosts": {"A-B": 1, "B-C": 1, "A-C": 5}
}"#;

/// A -> B with C isolated
#[allow(dead_code)]
pub const ISOLATED: &str = r#"{
  "vertices": [
    {"label": "A", "x": 0, "y": 0},
    {"label": "B", "x": 1, "y": 0},
    {"label": "C", "x": 5, "y": 5}
  ],
  "edges": [{"from": "A", "to": "B"}]
}"#;

/// Edge pointing at a vertex that does not exist
#[allow(dead_code)]
pub const DANGLING: &str = r#"{
  "vertices": [{"label": "A"}],
  "edges": [{"from": "A", "to": "Z"}]
}"#;

/// Write `contents` to `name` inside `dir` and return the path
pub fn write_graph(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}
