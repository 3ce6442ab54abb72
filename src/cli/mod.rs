//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod bundle;
pub mod completions;

pub use bundle::BundleArgs;
pub use completions::CompletionsArgs;

/// Luapack - CI bundling driver for Lua source trees
#[derive(Parser, Debug)]
#[command(
    name = "luapack",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "CI bundling driver for Lua source trees",
    long_about = "Luapack resolves a source and an output directory, clears the output \
                  directory, and writes one self-contained artifact per eligible Lua \
                  source file by delegating to an external bundler.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  luapack bundle --source-path scripts/lua --output-path build/out \x1b[90m# CI run\x1b[0m\n   \
                  luapack bundle --dev                                            \x1b[90m# lua/ -> dist/\x1b[0m\n   \
                  luapack bundle --dev --bundler ./bin/bundle                     \x1b[90m# custom bundler\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Bundle eligible Lua sources into the output directory
    Bundle(BundleArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_bundle() {
        let cli = Cli::try_parse_from(["luapack", "bundle", "--dev"]).unwrap();
        assert!(matches!(cli.command, Commands::Bundle(_)));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["luapack", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["luapack", "completions", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions(args) => assert_eq!(args.shell, "zsh"),
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["luapack"]).is_err());
    }
}
