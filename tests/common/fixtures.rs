//! Predefined repository scenarios shared by the integration tests

#![allow(dead_code)]

use super::repository::*;
use git_deck::core::error::Result;

/// Repository with 5 changed files: three modified, two untracked
pub fn create_multi_file_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_test_files(&repo.path, &["file1.txt", "file2.txt", "file3.txt"])?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    modify_test_files(&repo.path, &["file1.txt", "file2.txt", "file3.txt"])?;
    create_test_files(&repo.path, &["file4.txt", "file5.txt"])?;

    Ok(repo)
}

/// `main` and `feature` both rewrite the first line of shared.txt
pub fn create_conflicting_branches_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "shared.txt", "original\nline 2\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Base")?;

    git_checkout(&repo.path, &["-b", "feature"])?;
    create_file(&repo.path, "shared.txt", "feature change\nline 2\n")?;
    git_commit_all(&repo, "Feature edit")?;

    git_checkout(&repo.path, &["main"])?;
    create_file(&repo.path, "shared.txt", "main change\nline 2\n")?;
    git_commit_all(&repo, "Main edit")?;

    Ok(repo)
}

/// `feature` adds a file that `main` never touches
pub fn create_clean_branches_repo() -> Result<TestRepo> {
    let repo = setup_test_repo_with_initial_commit()?;

    git_checkout(&repo.path, &["-b", "feature"])?;
    create_file(&repo.path, "feature.txt", "feature work\n")?;
    git_commit_all(&repo, "Add feature file")?;

    git_checkout(&repo.path, &["main"])?;
    create_file(&repo.path, "main.txt", "main work\n")?;
    git_commit_all(&repo, "Add main file")?;

    Ok(repo)
}

/// `main` with a merge commit at HEAD that brought in `side.txt` from `side`
pub fn create_merge_commit_repo() -> Result<TestRepo> {
    let repo = create_clean_branches_repo()?;
    git(
        &repo.path,
        &["merge", "--no-ff", "--no-edit", "-m", "Merge feature", "feature"],
    )?;
    Ok(repo)
}

fn git_commit_all(repo: &TestRepo, message: &str) -> Result<()> {
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, message)
}
