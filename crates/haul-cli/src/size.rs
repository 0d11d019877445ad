use crate::backup::format_bytes;
use crate::cli::SizeArgs;
use eyre::Result;
use haul_core::scan;

pub fn run_size(args: &SizeArgs) -> Result<()> {
    let summary = scan::summarize_tree(&args.path)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{:<40} {:>12} {:>8}", "PATH", "BYTES", "FILES");
    println!(
        "{:<40} {:>12} {:>8}",
        args.path.display(),
        summary.byte_total,
        summary.file_count
    );
    println!(
        "Total: {} across {} file(s)",
        format_bytes(summary.byte_total),
        summary.file_count
    );
    Ok(())
}
