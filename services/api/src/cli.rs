use crate::demo::{run_analyze, run_demo, run_suggest, AnalyzeArgs, SuggestArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use swiftwork::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "SwiftWork AI Optimizer",
    about = "Score freelance service listings over HTTP or from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a listing from a JSON file, stdin, or a bundled fixture
    Analyze(AnalyzeArgs),
    /// Look up the canned suggestion for a single topic
    Suggest(SuggestArgs),
    /// Score every bundled sample listing and print a summary
    Demo,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Analyze(args) => run_analyze(args),
        Command::Suggest(args) => run_suggest(args),
        Command::Demo => run_demo(),
    }
}
