use std::process::ExitCode;

use remora::config;
use remora::config::Cli;
use remora::config::ClientConfig;
use remora::config::Parser;
use remora::format;
use remora::repl;
use remora::transport;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
	let args = Cli::parse();

	let (config, command) = match config::setup(args) {
		Ok(resolved) => resolved,
		Err(e) => {
			eprintln!("remora: {e}");
			return ExitCode::FAILURE;
		}
	};

	if command.is_empty() {
		match repl::run(&config).await {
			Ok(()) => ExitCode::SUCCESS,
			Err(e) => {
				eprintln!("remora: {e}");
				ExitCode::FAILURE
			}
		}
	} else {
		run_once(&config, &command).await
	}
}

/// Execute the command given on the command line and print its reply.
/// Transport failures and server error replies both exit nonzero.
async fn run_once(config: &ClientConfig, words: &[String]) -> ExitCode {
	let command = words[0].to_uppercase();
	let args = &words[1..];

	match transport::execute(config, &command, args).await {
		Ok(frame) => {
			println!("{}", format::format_reply(&command, &frame));
			if frame.is_error() {
				ExitCode::FAILURE
			} else {
				ExitCode::SUCCESS
			}
		}
		Err(e) => {
			eprintln!("(error) {e}");
			ExitCode::FAILURE
		}
	}
}
