use clap::Parser;

/// Arguments for the bundle command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Bundle with action inputs:\n    \
                   luapack bundle --source-path scripts/lua --output-path build/out\n\n\
                   Bundle with the development paths (lua/ -> dist/):\n    \
                   luapack bundle --dev\n\n\
                   Use a custom bundler executable:\n    \
                   luapack bundle --dev --bundler ./bin/bundle")]
pub struct BundleArgs {
    /// Slash-delimited relative path to the Lua sources (required unless --dev)
    #[arg(long, value_name = "PATH", env = "INPUT_SOURCE_PATH")]
    pub source_path: Option<String>,

    /// Slash-delimited relative path to the output directory (required unless --dev)
    #[arg(long, value_name = "PATH", env = "INPUT_OUTPUT_PATH")]
    pub output_path: Option<String>,

    /// External bundler executable invoked per source file
    #[arg(long, value_name = "PROGRAM", env = "INPUT_BUNDLER")]
    pub bundler: Option<String>,

    /// Use the hardcoded development paths instead of inputs
    #[arg(long, env = "LUAPACK_DEV")]
    pub dev: bool,
}
