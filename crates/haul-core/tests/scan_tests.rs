use eyre::Result;
use haul_core::scan::{scan_tree, summarize_tree};
use std::fs;

#[test]
fn scan_counts_regular_files_recursively() -> Result<()> {
    let temp = tempfile::tempdir()?;
    fs::create_dir_all(temp.path().join("a/b/c"))?;
    fs::write(temp.path().join("top.txt"), b"1")?;
    fs::write(temp.path().join("a/mid.txt"), b"22")?;
    fs::write(temp.path().join("a/b/c/leaf.txt"), b"333")?;

    let result = scan_tree(temp.path())?;
    assert_eq!(result.file_count, 3);
    Ok(())
}

#[test]
fn scan_reports_zero_for_empty_directory() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let result = scan_tree(temp.path())?;
    assert_eq!(result.file_count, 0);
    Ok(())
}

#[test]
fn scan_ignores_directories_in_the_count() -> Result<()> {
    let temp = tempfile::tempdir()?;
    fs::create_dir_all(temp.path().join("only/dirs/here"))?;
    let result = scan_tree(temp.path())?;
    assert_eq!(result.file_count, 0);
    Ok(())
}

#[test]
fn scan_fails_on_missing_root() {
    let temp = tempfile::tempdir().unwrap();
    let missing = temp.path().join("nope");
    assert!(scan_tree(&missing).is_err());
}

#[test]
fn scan_fails_on_file_root() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let file = temp.path().join("file.txt");
    fs::write(&file, b"not a directory")?;
    assert!(scan_tree(&file).is_err());
    Ok(())
}

#[test]
fn summarize_totals_bytes_and_files() -> Result<()> {
    let temp = tempfile::tempdir()?;
    fs::create_dir_all(temp.path().join("sub"))?;
    fs::write(temp.path().join("a.bin"), vec![0u8; 100])?;
    fs::write(temp.path().join("sub/b.bin"), vec![0u8; 250])?;

    let summary = summarize_tree(temp.path())?;
    assert_eq!(summary.file_count, 2);
    assert_eq!(summary.byte_total, 350);
    Ok(())
}

#[test]
fn scan_is_repeatable() -> Result<()> {
    let temp = tempfile::tempdir()?;
    fs::write(temp.path().join("a.txt"), b"data")?;

    let first = scan_tree(temp.path())?;
    let second = scan_tree(temp.path())?;
    assert_eq!(first, second);
    Ok(())
}

#[cfg(unix)]
#[test]
fn scan_does_not_count_symlinks_or_their_targets_twice() -> Result<()> {
    let temp = tempfile::tempdir()?;
    let target = temp.path().join("real.txt");
    fs::write(&target, b"data")?;
    std::os::unix::fs::symlink(&target, temp.path().join("link.txt"))?;

    // Symlinks are not followed; only the regular file counts.
    let result = scan_tree(temp.path())?;
    assert_eq!(result.file_count, 1);
    Ok(())
}
