//! Bundle command implementation
//!
//! Resolves the driver configuration from CLI inputs, wires in the external
//! bundler executable, runs the driver, and reports what was written.

use console::Style;

use crate::bundler::CommandBundler;
use crate::bundler::command::DEFAULT_BUNDLER;
use crate::cli::BundleArgs;
use crate::config::DriverConfig;
use crate::driver;
use crate::error::Result;

/// Run bundle command
pub fn run(args: BundleArgs) -> Result<()> {
    let config = DriverConfig::resolve(
        args.dev,
        args.source_path.as_deref(),
        args.output_path.as_deref(),
    )?;

    let program = args.bundler.unwrap_or_else(|| DEFAULT_BUNDLER.to_string());
    let bundler = CommandBundler::new(program);

    println!(
        "Bundling {} -> {}",
        Style::new().bold().apply_to(config.source_path.display()),
        Style::new().bold().apply_to(config.output_path.display())
    );

    let summary = driver::run(&config, &bundler)?;

    display_summary(&summary);

    Ok(())
}

/// Display written artifacts and skip count
fn display_summary(summary: &driver::BundleSummary) {
    if summary.written.is_empty() {
        println!("No bundleable sources found.");
    } else {
        let n = summary.written.len();
        let label = if n == 1 { "artifact" } else { "artifacts" };
        println!(
            "{} ({} {})",
            Style::new().bold().apply_to("Written:"),
            n,
            label
        );
        for name in &summary.written {
            println!("  {}", Style::new().dim().apply_to(name));
        }
    }

    if summary.skipped > 0 {
        let label = if summary.skipped == 1 { "file" } else { "files" };
        println!(
            "{} {} {} (reserved prefix)",
            Style::new().bold().apply_to("Skipped:"),
            summary.skipped,
            label
        );
    }
}
