use crate::common::command::{conflicted_sync_root, run_linediff_command};
use assert_fs::TempDir;
use predicates::prelude::predicate;
use rstest::rstest;

#[rstest]
#[case("docs/plan.md")]
#[case("docs/plan (conflict 2026-02-30).md")]
fn reject_path_that_is_not_a_conflict_copy(conflicted_sync_root: TempDir, #[case] path: &str) {
    run_linediff_command(conflicted_sync_root.path(), &["conflict-diff", path])
        .assert()
        .failure()
        .stderr(predicate::str::contains(format!(
            "{path} is not a conflict copy"
        )));
}
