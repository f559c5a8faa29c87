use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run(args: &[&str], stdin: &str) -> Output {
    let exe = env!("CARGO_BIN_EXE_hulls-cli");
    let mut child = Command::new(exe)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn hulls-cli");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().expect("wait hulls-cli")
}

fn stdout(out: &Output) -> String {
    assert!(
        out.status.success(),
        "CLI failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8_lossy(&out.stdout).into_owned()
}

#[test]
fn hull_reads_count_from_stdin() {
    let out = stdout(&run(&["hull", "--dist", "circle", "--seed", "42"], "junk\n500\n"));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("Jarvis: "));
    assert!(lines[1].starts_with("Graham: "));
    let size = |line: &str| -> usize { line.split(' ').nth(1).unwrap().parse().unwrap() };
    assert_eq!(size(lines[0]), size(lines[1]));
    // Every vertex is printed as (x,y) with six decimals.
    let first = lines[0].split(' ').nth(2).unwrap();
    assert!(first.starts_with('(') && first.ends_with(')'));
    let frac = first.trim_end_matches(')').rsplit('.').next().unwrap();
    assert_eq!(frac.len(), 6);
}

#[test]
fn hull_is_deterministic_and_seed_defaults_to_n() {
    let a = stdout(&run(&["hull"], "300\n"));
    let b = stdout(&run(&["hull", "--seed", "300"], "300\n"));
    assert_eq!(a, b);
}

#[test]
fn hull_without_integer_fails() {
    let out = run(&["hull"], "nothing here\n");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Please provide an integer N on stdin"));
}

#[test]
fn generate_emits_points_json() {
    let out = stdout(&run(&["generate", "-n", "25", "--dist", "Gaussian"], ""));
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["n"], 25);
    assert_eq!(v["seed"], 25);
    assert_eq!(v["dist"], "gaussian");
    assert_eq!(v["points"].as_array().unwrap().len(), 25);
}

#[test]
fn unknown_distribution_falls_back_to_square() {
    let odd = stdout(&run(&["generate", "-n", "10", "--dist", "hexagon"], ""));
    let square = stdout(&run(&["generate", "-n", "10"], ""));
    assert_eq!(odd, square);
}

#[test]
fn generate_writes_file_and_sidecar() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cloud.json");
    let out = run(
        &["generate", "-n", "40", "--seed", "9", "--out", path.to_str().unwrap()],
        "",
    );
    stdout(&out);
    let v: serde_json::Value = serde_json::from_slice(&std::fs::read(&path).unwrap()).unwrap();
    assert_eq!(v["seed"], 9);
    assert!(dir.path().join("cloud.provenance.json").exists());
}

#[test]
fn steps_are_capped() {
    let out = stdout(&run(&["steps", "-n", "400", "--dist", "clusters", "--cap", "50"], ""));
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert!(v["graham"]["steps"].as_array().unwrap().len() == 50);
    assert!(v["jarvis"]["steps"].as_array().unwrap().len() <= 50);
    assert_eq!(v["jarvis"]["steps"][0]["type"], "start");
    assert_eq!(v["jarvis"]["hull_size"], v["graham"]["hull_size"]);
}

#[test]
fn analyze_lists_rows() {
    let out = stdout(&run(&["analyze", "--min", "100", "--max", "400"], ""));
    let rows: serde_json::Value = serde_json::from_str(&out).unwrap();
    let ns: Vec<u64> = rows
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["n"].as_u64().unwrap())
        .collect();
    assert_eq!(ns, vec![100, 200, 400]);
}

#[test]
fn report_checks_agreement() {
    let out = stdout(&run(&["report", "-n", "2000", "--dist", "square"], ""));
    let v: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(v["agrees"], true);
    assert!(v["convexity_ratio"].as_f64().unwrap() > 0.9);
    assert_eq!(v["jarvis"]["size"], v["graham"]["size"]);
}
