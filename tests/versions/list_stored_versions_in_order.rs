use crate::common::command::{run_linediff_command, stdout_of, versioned_sync_root};
use crate::common::file::write_version;
use assert_fs::TempDir;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
fn list_stored_versions_in_order(
    versioned_sync_root: TempDir,
) -> Result<(), Box<dyn std::error::Error>> {
    write_version(versioned_sync_root.path(), "notes.txt", 10, "alpha");

    let actual_output = stdout_of(run_linediff_command(
        versioned_sync_root.path(),
        &["versions", "notes.txt"],
    ))?;

    let lines = actual_output.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("version 1  "));
    assert!(lines[0].contains("        10 bytes"));
    assert!(lines[1].starts_with("version 2  "));
    assert!(lines[1].contains("        16 bytes"));
    assert!(lines[2].starts_with("version 10  "));
    assert!(lines[2].contains("         5 bytes"));

    Ok(())
}
