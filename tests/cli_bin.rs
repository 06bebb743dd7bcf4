use std::process::Command;

#[test]
fn replay_json_reports_winner() {
    let output = Command::new(env!("CARGO_BIN_EXE_reversi"))
        .args(["replay", "--json", "f5d6c5f4e7f6g5e6e3"])
        .output()
        .expect("failed to run reversi binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 9);
    let last: serde_json::Value = serde_json::from_str(lines[8]).expect("invalid json");
    assert_eq!(last["winner"], "FirstWins");
}

#[test]
fn replay_stops_on_illegal_move() {
    let output = Command::new(env!("CARGO_BIN_EXE_reversi"))
        .args(["replay", "f5a1"])
        .output()
        .expect("failed to run reversi binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("move 2 (a1)"), "{}", stderr);
}

#[test]
fn local_session_prints_frames() {
    let output = Command::new(env!("CARGO_BIN_EXE_reversi"))
        .args(["local", "f5d6"])
        .output()
        .expect("failed to run reversi binary");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let frames: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("invalid json"))
        .collect();
    assert_eq!(frames.len(), 2);
    assert!(frames.iter().all(|f| f["type"] == "game"));
    assert_eq!(frames[1]["payload"]["nextPiece"], "First");
}
