use assert_cmd::Command;

fn cli() -> Command {
    Command::cargo_bin("periodic-lattice").unwrap()
}

#[test]
fn test_info_prints_summary_and_site() {
    let output = cli()
        .args(["info", "--sizes", "3,3", "--site", "4"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("topology:     square"));
    assert!(stdout.contains("sites:        9"));
    assert!(stdout.contains("coordination: 4"));
    assert!(stdout.contains("coordinates: [1, 1]"));
}

#[test]
fn test_info_rejects_out_of_range_site() {
    cli()
        .args(["info", "--sizes", "3,3", "--site", "9"])
        .assert()
        .failure();
}

#[test]
fn test_dump_text_lists_every_ordered_pair() {
    let output = cli().args(["dump", "--sizes", "3,3"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 81);
    assert_eq!(lines[0], "0 0 0 0 0");

    // 0 and 8 are diagonal images of each other
    let row: Vec<&str> = lines[8].split_whitespace().collect();
    assert_eq!(row[0], "0");
    assert_eq!(row[1], "8");
    let d: f64 = row[2].parse().unwrap();
    assert!((d - std::f64::consts::SQRT_2).abs() < 1e-12);
}

#[test]
fn test_dump_json_records() {
    let output = cli()
        .args(["dump", "--topology", "chain", "--sizes", "4", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let records: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 16);
    // 0 -> 3 on a ring of 4 is one step backwards across the boundary
    let rec = &records[3];
    assert_eq!(rec["i"], 0);
    assert_eq!(rec["j"], 3);
    assert_eq!(rec["distance"].as_f64().unwrap(), 1.0);
    assert_eq!(rec["winding"][0], -1);
}

#[test]
fn test_sample_is_reproducible() {
    let run = || {
        cli()
            .args(["sample", "--sizes", "6,5", "--count", "20", "--seed", "7"])
            .output()
            .unwrap()
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
    let stdout = String::from_utf8(first.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 20);
    for line in stdout.lines() {
        let parts: Vec<i64> = line.split_whitespace().map(|x| x.parse().unwrap()).collect();
        assert_eq!(parts.len(), 2);
        assert!((-2..=3).contains(&parts[0]));
        assert!((-2..=2).contains(&parts[1]));
    }
}

#[test]
fn test_config_file_overrides_flags() {
    let dir = std::env::temp_dir().join("periodic-lattice-cli-test");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("cubic.json");
    std::fs::write(&path, r#"{ "topology": "cubic", "sizes": [2, 3, 4] }"#).unwrap();

    let output = cli()
        .args(["info", "--config"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("topology:     cubic"));
    assert!(stdout.contains("sites:        24"));
}

#[test]
fn test_unknown_topology_fails() {
    let output = cli()
        .args(["info", "--topology", "honeycomb", "--sizes", "3,3"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("unknown lattice topology 'honeycomb'"));
}
