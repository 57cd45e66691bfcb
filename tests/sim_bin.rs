use std::process::Command;

fn run_sim(args: &[&str]) -> serde_json::Value {
    let output = Command::new(env!("CARGO_BIN_EXE_sim"))
        .args(args)
        .output()
        .expect("failed to run sim binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    serde_json::from_str(stdout.trim()).expect("invalid json")
}

#[test]
fn sim_binary_smoke() {
    let v = run_sim(&["7"]);
    assert_eq!(v["seed"], 7);
    let turns = v["turns"].as_u64().unwrap();
    assert!((5..=9).contains(&turns));
    assert_eq!(v["board"].as_array().unwrap().len(), 3);
    if v["status"] == "Draw" {
        assert!(v["winner"].is_null());
    } else {
        assert!(v["winner"].is_string());
    }
}

#[test]
fn sim_binary_is_reproducible() {
    assert_eq!(run_sim(&["42"]), run_sim(&["42"]));
}
