use crate::cli::BackupArgs;
use crate::profiles::{self, Profile};
use crate::share::{self, SourceSpec};
use chrono::Local;
use eyre::{bail, Context, Result};
use haul_core::errors::MirrorError;
use haul_core::mirror::mirror_tree;
use haul_core::progress;
use haul_core::report::BackupReport;
use haul_core::MirrorConfig;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

pub fn run_backup(args: &BackupArgs) -> Result<()> {
    let spec = source_spec(args)?;
    let resolved = share::resolve_source(spec)?;

    let candidates = profiles::list_profiles(resolved.path())?;
    if candidates.is_empty() {
        bail!(
            "no profiles available for backup under {} (stock folders excluded)",
            resolved.path().display()
        );
    }

    let selected = match &args.profile {
        Some(name) => candidates
            .iter()
            .find(|profile| profile.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| eyre::eyre!("no profile named {name} under {}", resolved.path().display()))?,
        None => select_profile(&candidates)?,
    };

    let source = profiles::profile_root(resolved.path(), &selected.name);
    let stamp = Local::now().format("%Y%m%d_%H%M%S").to_string();
    let destination = timestamped_destination(&args.destination, &selected.name, &stamp);

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap()
            .tick_strings(&["-", "\\", "|", "/"]),
    );
    pb.enable_steady_tick(Duration::from_millis(120));
    pb.set_message(format!("Counting files under {}", source.display()));

    let config = MirrorConfig {
        preserve_times: !args.no_preserve_times,
    };
    let start = Instant::now();
    let result = mirror_tree(&source, &destination, &config, |snapshot, total| {
        pb.set_message(progress::render(snapshot.copied, total, snapshot.bytes_copied));
    });
    pb.finish_and_clear();

    let report = match result {
        Ok(report) => report,
        Err(MirrorError::EmptySource { .. }) => {
            println!("Nothing to back up: {} contains no files.", source.display());
            return Ok(());
        }
        Err(err) => {
            return Err(err).with_context(|| {
                format!("backup of {} could not start", source.display())
            });
        }
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&destination, &report, start.elapsed());
    }
    Ok(())
}

fn source_spec(args: &BackupArgs) -> Result<SourceSpec> {
    match (&args.source, &args.host, &args.user) {
        (Some(path), _, _) => Ok(SourceSpec::Local(path.clone())),
        (None, Some(host), Some(user)) => Ok(SourceSpec::AdminShare {
            host: host.clone(),
            user: user.clone(),
        }),
        _ => bail!("either --source <path> or --host <name> --user <account> is required"),
    }
}

/// `Backup_<profile>_<YYYYmmdd_HHMMSS>` under the destination base.
fn timestamped_destination(base: &Path, profile: &str, stamp: &str) -> PathBuf {
    base.join(format!("Backup_{profile}_{stamp}"))
}

fn select_profile(candidates: &[Profile]) -> Result<Profile> {
    println!("Profiles available for backup:");
    for (idx, profile) in candidates.iter().enumerate() {
        println!(
            " {}. {} ({})",
            idx + 1,
            profile.name,
            profiles::format_summary(profile.summary.as_ref())
        );
    }

    loop {
        print!("Profile number to back up: ");
        io::stdout().flush()?;
        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            bail!("no profile selected");
        }
        match input.trim().parse::<usize>() {
            Ok(choice) if (1..=candidates.len()).contains(&choice) => {
                return Ok(candidates[choice - 1].clone());
            }
            _ => println!("Enter a number between 1 and {}.", candidates.len()),
        }
    }
}

fn print_summary(destination: &Path, report: &BackupReport, elapsed: Duration) {
    let throughput = if elapsed.as_secs_f64() > 0.0 {
        report.bytes_copied as f64 / elapsed.as_secs_f64()
    } else {
        0.0
    };

    println!(
        "Backup complete: {} files, {} in {:.2?}",
        report.files_copied,
        format_bytes(report.bytes_copied),
        elapsed
    );
    if report.files_errored > 0 {
        println!(
            "• Skipped {} file(s) that could not be copied",
            report.files_errored
        );
    }
    println!("• Throughput: {}/s", format_bytes(throughput as u64));
    println!("• Destination: {}", destination.display());
}

pub(crate) fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
    if bytes == 0 {
        return "0 B".to_owned();
    }
    let mut value = bytes as f64;
    let mut unit = 0usize;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[unit])
    } else {
        format!("{:.2} {}", value, UNITS[unit])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn destination_carries_profile_and_stamp() {
        let dest = timestamped_destination(Path::new("/backups"), "alice", "20260826_120000");
        assert_eq!(dest, Path::new("/backups/Backup_alice_20260826_120000"));
    }

    #[test]
    fn source_spec_requires_a_source_or_host_pair() {
        let base = BackupArgs {
            destination: PathBuf::from("/backups"),
            source: None,
            host: None,
            user: None,
            profile: None,
            no_preserve_times: false,
            json: false,
        };
        assert!(source_spec(&base).is_err());

        let local = BackupArgs {
            source: Some(PathBuf::from("/mnt/share")),
            ..base.clone()
        };
        assert!(matches!(source_spec(&local), Ok(SourceSpec::Local(_))));

        let remote = BackupArgs {
            host: Some("dc01".to_owned()),
            user: Some("admin".to_owned()),
            ..base
        };
        assert!(matches!(
            source_spec(&remote),
            Ok(SourceSpec::AdminShare { .. })
        ));
    }

    #[test]
    fn format_bytes_picks_sensible_units() {
        assert_eq!(format_bytes(0), "0 B");
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(2048), "2.00 KiB");
        assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MiB");
    }
}
