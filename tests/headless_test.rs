use serde_json::Value;

use tetris_board::engine::GameConfig;
use tetris_board::headless::run_headless;
use tetris_board::types::Rgb;

#[tokio::test(start_paused = true)]
async fn headless_writes_one_json_line_per_batch() {
    let mut out = Vec::new();
    let board = run_headless(GameConfig::default(), 3, &mut out).await.unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<Value> = text
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(lines.len(), 3);

    for (n, line) in lines.iter().enumerate() {
        assert_eq!(line["batch"], (n + 1) as u64);
    }

    let first = lines[0]["changes"].as_array().unwrap();
    assert_eq!(first.len(), 4);
    assert_eq!(first[0]["x"], 5);
    assert_eq!(first[0]["y"], 17);
    assert_eq!(first[0]["color"], "#00008b");

    // Three gravity ticks from the spawn row
    assert_eq!(board.position(), (5, 15));
    assert_eq!(board.get(5, 15), Some(Some(Rgb::DARK_BLUE)));
}

#[tokio::test(start_paused = true)]
async fn headless_zero_ticks_writes_nothing() {
    let mut out = Vec::new();
    let board = run_headless(GameConfig::default(), 0, &mut out).await.unwrap();
    assert!(out.is_empty());
    assert_eq!(board.get(0, 0), Some(Some(Rgb::RED)));
}
