use clap::{Args, Parser, Subcommand};

mod help;

#[derive(Parser)]
#[command(name = "jstools", version)]
#[command(
    about = "Fetch and register the YUI Compressor for JavaScript builds",
    long_about = help::TOP_LONG_ABOUT,
    after_help = help::TOP_AFTER_HELP
)]
pub struct Cli {
    /// Settings file to use instead of the one in your config directory
    #[arg(long, global = true)]
    pub settings: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone, Debug, Default)]
pub struct FetchArgs {
    /// Compressor version to download (defaults to the configured version)
    #[arg(short = 'v', long)]
    pub compressor_version: Option<String>,

    /// Set this version as default for the local configuration
    #[arg(short = 'd', long)]
    pub set_as_default: bool,

    /// Remove and unpack the version again if it is already present
    #[arg(short, long)]
    pub overwrite: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an empty .jstools.cfg in the current directory if missing
    CreateUserconfig,

    /// Download the YUI Compressor into ./lib
    #[command(
        name = "get-yuicomp",
        long_about = help::GET_YUICOMP_LONG_ABOUT,
        after_help = help::GET_YUICOMP_AFTER_HELP
    )]
    GetYuicomp(FetchArgs),

    /// Run every setup step
    #[command(after_help = help::INSTALL_AFTER_HELP)]
    Install(FetchArgs),

    /// List compressor versions unpacked under ./lib
    #[command(after_help = help::LIST_AFTER_HELP)]
    List,
}
