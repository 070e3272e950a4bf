use clap::Parser;
use hookmenu::errors::ErrorHandler;
use hookmenu::logger::init_logging;
use hookmenu::structs::cli::Cli;
use hookmenu::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut runner = CommandRunner::new(cli.config);
    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }
}
