use crate::common::command::{run_linediff_command, stdout_of, sync_root};
use crate::common::file::{FileSpec, write_file};
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case("")]
#[case("same content\nacross both files\n")]
fn report_identical_files(
    sync_root: TempDir,
    #[case] content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    for name in ["left.txt", "right.txt"] {
        write_file(FileSpec::new(sync_root.path().join(name), content.to_string()));
    }

    let actual_output = stdout_of(run_linediff_command(
        sync_root.path(),
        &["compare", "left.txt", "right.txt"],
    ))?;

    assert_eq!(
        actual_output,
        "--- left.txt\n+++ right.txt\nFiles are identical\n"
    );

    Ok(())
}
