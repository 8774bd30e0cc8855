use assert_cmd::Command;
use assert_fs::TempDir;
use rstest::fixture;
use std::path::Path;

#[fixture]
pub fn work_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp dir")
}

#[fixture]
pub fn current_code() -> String {
    r#"fn main() {
    println!("one");
    println!("two");
    println!("three");
}"#
    .to_string()
}

#[fixture]
pub fn suggested_code() -> String {
    r#"fn main() {
    println!("one");
    println!("2");
    println!("three");
}"#
    .to_string()
}

pub fn run_codediff_command(dir: &Path, args: &[&str]) -> Command {
    let mut cmd = Command::cargo_bin("codediff").expect("Failed to find codediff binary");
    cmd.current_dir(dir);
    cmd.args(args);

    cmd
}
