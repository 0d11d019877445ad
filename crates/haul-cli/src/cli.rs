use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "haul")]
#[command(about = "Back up user profile trees to a timestamped destination")]
#[command(after_help = "Run '<command> --help' for detailed options on each command.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Back up one user profile into a timestamped destination directory
    Backup(BackupArgs),
    /// List profile directories available for backup
    Profiles(ProfilesArgs),
    /// Summarize the file count and byte total of a directory tree
    Size(SizeArgs),
}

#[derive(Args, Clone, Debug)]
pub struct BackupArgs {
    /// Base directory that receives the timestamped backup folder
    pub destination: PathBuf,
    /// Back up from an already-accessible local root (contains a Users directory)
    #[arg(long, conflicts_with = "host")]
    pub source: Option<PathBuf>,
    /// Remote machine whose administrative C$ share should be mapped
    #[arg(long, requires = "user")]
    pub host: Option<String>,
    /// Account used to map the administrative share
    #[arg(long)]
    pub user: Option<String>,
    /// Profile name to back up (prompts with a menu when omitted)
    #[arg(long)]
    pub profile: Option<String>,
    /// Do not carry source modification times onto copied files
    #[arg(long)]
    pub no_preserve_times: bool,
    /// Print the final report as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct ProfilesArgs {
    /// Root containing the Users directory (e.g. a mapped drive or C:\)
    pub root: PathBuf,
    /// Print the profile list as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Clone, Debug)]
pub struct SizeArgs {
    /// Directory tree to summarize
    pub path: PathBuf,
    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,
}
