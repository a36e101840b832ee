use assert_cmd::prelude::*;
use predicates::prelude::*;

mod common;
use common::{fixtures::*, repository::*};

#[cfg(test)]
mod merge_check_tests {
    use super::*;

    #[test]
    fn test_clean_merge_lists_incoming_files() -> anyhow::Result<()> {
        let repo = create_clean_branches_repo()?;

        repo.cmd()?
            .args(["merge-check", "feature"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Clean merge ("))
            .stdout(predicate::str::contains("added in remote"))
            .stdout(predicate::str::contains("feature.txt"));

        Ok(())
    }

    #[test]
    fn test_conflicting_branches_report_conflict_count() -> anyhow::Result<()> {
        let repo = create_conflicting_branches_repo()?;

        repo.cmd()?
            .args(["merge-check", "feature"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Conflicts in 1 file(s)"));

        Ok(())
    }

    #[test]
    fn test_merge_check_into_explicit_branch() -> anyhow::Result<()> {
        let repo = create_conflicting_branches_repo()?;

        // feature already contains the base, so merging it into itself is clean
        repo.cmd()?
            .args(["merge-check", "feature", "--into", "feature"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Clean merge (0 entries)"));

        Ok(())
    }

    #[test]
    fn test_merge_check_unknown_branch() -> anyhow::Result<()> {
        let repo = setup_test_repo_with_initial_commit()?;

        repo.cmd()?
            .args(["merge-check", "missing"])
            .assert()
            .failure()
            .stdout(predicate::str::contains("Git repository error"));

        Ok(())
    }
}
