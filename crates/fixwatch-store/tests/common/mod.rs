use std::fs;
use std::path::{Path, PathBuf};

/// Raw listing for two weekends, one of them called off
#[allow(dead_code)]
pub const RAW_LISTING: &str = "Date,Time,Home,Away,Venue,Referee,Competition\n\
12 Oct 2025,14:00,Ballincollig,Carrigaline,Ballincollig,J. Smith,Junior A FL\n\
19 Oct 2025,11:00,Ovens,Ballincollig,Ovens,,Fe14 Football League\n\
26 Oct 2025,00:00,Ballincollig,Douglas,Ballincollig,,Minor Hurling League\n\
not a date,11:00,Ballincollig,Douglas,Ballincollig,,Minor Hurling League\n";

/// Write `content` to `name` under `dir` and return the path
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}
