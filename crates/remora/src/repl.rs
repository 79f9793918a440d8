//! Interactive console.

use std::io::Write;

use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use tracing::debug;

use crate::config::ClientConfig;
use crate::format;
use crate::tokenize;
use crate::transport;

/// Run the interactive prompt until EOF or an exit command.
///
/// Every line is one independent invocation: tokenize, execute over a
/// fresh connection, print the formatted reply. Transport and tokenizer
/// errors are printed and the loop continues.
pub async fn run(config: &ClientConfig) -> std::io::Result<()> {
	let mut lines = BufReader::new(tokio::io::stdin()).lines();
	let prompt = format!("{}> ", config.addr());

	print_prompt(&prompt)?;
	while let Some(line) = lines.next_line().await? {
		let line = line.trim();
		if line.is_empty() {
			print_prompt(&prompt)?;
			continue;
		}
		if line.eq_ignore_ascii_case("exit") || line.eq_ignore_ascii_case("quit") {
			break;
		}

		match tokenize::split_line(line) {
			Ok(words) if words.is_empty() => {}
			Ok(words) => {
				// Servers treat command names case-insensitively; the
				// encoder transmits them untouched, so uppercase here
				let command = words[0].to_uppercase();
				let args = &words[1..];
				debug!(command = %command, args = args.len(), "executing command");

				match transport::execute(config, &command, args).await {
					Ok(frame) => println!("{}", format::format_reply(&command, &frame)),
					Err(e) => eprintln!("(error) {e}"),
				}
			}
			Err(e) => eprintln!("(error) {e}"),
		}
		print_prompt(&prompt)?;
	}

	Ok(())
}

fn print_prompt(prompt: &str) -> std::io::Result<()> {
	let mut stdout = std::io::stdout();
	write!(stdout, "{prompt}")?;
	stdout.flush()
}
