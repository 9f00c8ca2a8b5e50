#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

/// KJV dataset file name the loader tries second.
pub const KJV_FILE: &str = "Bible_Journey KJV Time Complete.csv";

/// WEB dataset file name.
pub const WEB_FILE: &str = "Bible_Journey_Number_Map_Time_WEB.csv";

/// A small dataset in the shape of the hand-maintained spreadsheets: BOM,
/// CRLF line endings, quoted cells with commas, quotes and line breaks, and a
/// trailing blank row.
pub const SAMPLE_KJV_CSV: &str = "\u{feff}Number,Reference,Verse_Text (KJV),Themes,Quick Reflection,Extended Reflection,Alignment,Prayer\r\n\
7,Gen 1:7,\"And God made the firmament, and divided the waters\",Creation,Order from chaos,\"Line one\nLine two\",Aligned,Amen\r\n\
12,Gen 1:12,\"And the earth brought forth \"\"grass\"\"\",Growth,,,,\r\n\
30,Gen 1:30,,,,,,\r\n\
,,,,,,,\r\n";

/// Writes the sample dataset under its KJV file name.
pub fn write_kjv_dataset(dir: &Path) {
    fs::write(dir.join(KJV_FILE), SAMPLE_KJV_CSV).unwrap();
}

/// Creates a `Command` for the `bible-journey` binary with a clean environment
/// pointing at the given data and state directories.
pub fn bj_command(data_dir: &Path, state_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("bible-journey").expect("bible-journey binary not built");
    cmd.env_clear();
    if let Ok(path) = std::env::var("PATH") {
        cmd.env("PATH", path);
    }
    if let Ok(tmpdir) = std::env::var("TMPDIR") {
        cmd.env("TMPDIR", tmpdir);
    }
    cmd.env("HOME", state_dir)
        .env("BJ_DATA", data_dir)
        .env("BJ_DIR", state_dir);
    cmd
}
