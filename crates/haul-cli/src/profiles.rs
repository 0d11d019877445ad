use crate::cli::ProfilesArgs;
use eyre::{Context, Result};
use haul_core::scan::{self, TreeSummary};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Profile folders that ship with Windows and never hold user data.
const EXCLUDED_PROFILES: &[&str] = &["Public", "Default", "All Users", "Default User"];

/// A candidate profile directory under `<root>/Users`. `summary` is `None`
/// when the tree could not be measured; that only degrades the listing, the
/// profile is still offered for backup.
#[derive(Debug, Clone, Serialize)]
pub struct Profile {
    pub name: String,
    pub summary: Option<TreeSummary>,
}

/// List profile directories under `<root>/Users`, excluding the stock
/// Windows folders, sorted by name.
pub fn list_profiles(root: &Path) -> Result<Vec<Profile>> {
    let users = root.join("Users");
    if !users.is_dir() {
        eyre::bail!("no Users directory under {}", root.display());
    }

    let mut profiles = Vec::new();
    for entry in fs::read_dir(&users).with_context(|| format!("reading {}", users.display()))? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if EXCLUDED_PROFILES
            .iter()
            .any(|excluded| excluded.eq_ignore_ascii_case(&name))
        {
            continue;
        }
        let summary = scan::summarize_tree(&entry.path()).ok();
        profiles.push(Profile { name, summary });
    }

    profiles.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(profiles)
}

pub fn profile_root(root: &Path, name: &str) -> PathBuf {
    root.join("Users").join(name)
}

pub fn format_summary(summary: Option<&TreeSummary>) -> String {
    match summary {
        Some(summary) => format!(
            "{} file(s), {:.2} MB",
            summary.file_count,
            summary.byte_total as f64 / (1024.0 * 1024.0)
        ),
        None => "size unavailable".to_owned(),
    }
}

pub fn run_profiles(args: &ProfilesArgs) -> Result<()> {
    let profiles = list_profiles(&args.root)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profiles)?);
        return Ok(());
    }

    if profiles.is_empty() {
        println!("No profiles found under {} (stock folders excluded).", args.root.display());
        return Ok(());
    }

    println!("Profiles available for backup:");
    for (idx, profile) in profiles.iter().enumerate() {
        println!(
            " {}. {} ({})",
            idx + 1,
            profile.name,
            format_summary(profile.summary.as_ref())
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_profiles_are_excluded_case_insensitively() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let users = temp.path().join("Users");
        for name in ["alice", "bob", "Public", "default", "All Users"] {
            fs::create_dir_all(users.join(name))?;
        }
        fs::write(users.join("alice/doc.txt"), b"hello")?;

        let profiles = list_profiles(temp.path())?;
        let names: Vec<&str> = profiles.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["alice", "bob"]);
        Ok(())
    }

    #[test]
    fn listing_requires_a_users_directory() {
        let temp = tempfile::tempdir().unwrap();
        assert!(list_profiles(temp.path()).is_err());
    }

    #[test]
    fn profiles_carry_recursive_summaries() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let alice = temp.path().join("Users/alice/nested");
        fs::create_dir_all(&alice)?;
        fs::write(alice.join("deep.txt"), vec![0u8; 42])?;

        let profiles = list_profiles(temp.path())?;
        let summary = profiles[0].summary.expect("summary should be measurable");
        assert_eq!(summary.file_count, 1);
        assert_eq!(summary.byte_total, 42);
        Ok(())
    }

    #[test]
    fn missing_summary_formats_as_unavailable() {
        assert_eq!(format_summary(None), "size unavailable");
    }

    #[test]
    fn profile_root_joins_under_users() {
        let root = Path::new("/mnt/share");
        assert_eq!(
            profile_root(root, "alice"),
            Path::new("/mnt/share/Users/alice")
        );
    }
}
