//! High-score store tests - persistence across store instances

use std::fs;
use std::path::PathBuf;

use block_blitz::engine::HighScoreStore;

fn temp_dir(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!(
        "block-blitz-hiscore-{}-{}",
        std::process::id(),
        name
    ));
    let _ = fs::remove_dir_all(&path);
    path
}

#[test]
fn test_survives_store_recreation() {
    let dir = temp_dir("recreate");
    let path = dir.join("high_score.txt");

    HighScoreStore::new(&path).save(1230).unwrap();
    assert_eq!(HighScoreStore::new(&path).load().unwrap(), 1230);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_creates_missing_parent_directories() {
    let dir = temp_dir("nested");
    let path = dir.join("state").join("deep").join("high_score.txt");

    let store = HighScoreStore::new(&path);
    assert_eq!(store.load().unwrap(), 0);
    store.save(900).unwrap();
    assert_eq!(store.load().unwrap(), 900);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_file_format_is_a_single_decimal_line() {
    let dir = temp_dir("format");
    let path = dir.join("high_score.txt");

    HighScoreStore::new(&path).save(4400).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "4400\n");

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn test_whitespace_tolerated_on_load() {
    let dir = temp_dir("whitespace");
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("high_score.txt");
    fs::write(&path, "  512 \n\n").unwrap();

    assert_eq!(HighScoreStore::new(&path).load().unwrap(), 512);

    let _ = fs::remove_dir_all(&dir);
}
