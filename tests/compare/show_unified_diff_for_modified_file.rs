use crate::common::command::{run_linediff_command, stdout_of, sync_root};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn show_unified_diff_for_modified_file(
    sync_root: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_file(FileSpec::new(
        sync_root.path().join("a.txt"),
        "one\ntwo\nthree\nfour".to_string(),
    ));
    write_file(FileSpec::new(
        sync_root.path().join("b.txt"),
        "one\nthree\nfour\nfive".to_string(),
    ));

    let actual_output = stdout_of(run_linediff_command(
        sync_root.path(),
        &["compare", "--format", "unified", "a.txt", "b.txt"],
    ))?;

    assert_eq!(
        actual_output,
        "--- a.txt\n+++ b.txt\n+1 -1\n one\n-two\n three\n four\n+five\n"
    );

    Ok(())
}
