//! Client configuration.
//!
//! Connection parameters come from an optional TOML file overridden by
//! command-line flags, and are threaded explicitly through calls — there is
//! no process-global configuration.

use std::path::Path;
use std::time::Duration;

pub use clap::Parser;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::logger;

/// Configuration-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
	#[error("failed to read configuration file '{path}': {source}")]
	Io {
		source: std::io::Error,
		path: String,
	},

	#[error("failed to parse TOML configuration: {0}")]
	TomlParse(#[from] toml::de::Error),
}

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(version, about = "Command line client for RESP key-value servers", long_about = None)]
pub struct Cli {
	/// Configuration file path (TOML).
	/// Defaults to remora.toml if it exists.
	#[arg(short, long)]
	pub config: Option<String>,

	/// Server host to connect to
	#[arg(long)]
	pub host: Option<String>,

	/// Server port to connect to
	#[arg(short, long)]
	pub port: Option<u16>,

	/// Seconds before abandoning a connection attempt
	#[arg(long)]
	pub connect_timeout: Option<u64>,

	/// Seconds of read inactivity before abandoning a response
	#[arg(long)]
	pub io_timeout: Option<u64>,

	/// Log level (trace, debug, info, warn, error)
	#[arg(short, long)]
	pub log_level: Option<String>,

	/// Command to execute non-interactively, e.g. `remora GET key`.
	/// Omit it for the interactive prompt.
	#[arg(trailing_var_arg = true)]
	pub command: Vec<String>,
}

/// Resolved connection parameters for one invocation
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientConfig {
	pub host: String,
	pub port: u16,
	pub connect_timeout_secs: u64,
	pub io_timeout_secs: u64,
	pub log_level: String,
}

impl Default for ClientConfig {
	fn default() -> Self {
		Self {
			host: "127.0.0.1".into(),
			port: 6379,
			connect_timeout_secs: 5,
			io_timeout_secs: 5,
			log_level: "warn".into(),
		}
	}
}

impl ClientConfig {
	/// The `host:port` form used for connecting and for the prompt
	pub fn addr(&self) -> String {
		format!("{}:{}", self.host, self.port)
	}

	pub fn connect_timeout(&self) -> Duration {
		Duration::from_secs(self.connect_timeout_secs)
	}

	pub fn io_timeout(&self) -> Duration {
		Duration::from_secs(self.io_timeout_secs)
	}
}

/// Resolve configuration from file and flags, initialize logging, and
/// return the config together with any one-shot command words.
pub fn setup(args: Cli) -> Result<(ClientConfig, Vec<String>), ConfigError> {
	let default_config = "remora.toml";
	let mut config = match args.config.as_deref() {
		Some(p) => load_from_file(p)?,
		None if Path::new(default_config).exists() => load_from_file(default_config)?,
		None => ClientConfig::default(),
	};

	// Override with CLI arguments if explicitly provided
	if let Some(host) = args.host {
		config.host = host;
	}
	if let Some(port) = args.port {
		config.port = port;
	}
	if let Some(secs) = args.connect_timeout {
		config.connect_timeout_secs = secs;
	}
	if let Some(secs) = args.io_timeout {
		config.io_timeout_secs = secs;
	}
	if let Some(level) = args.log_level {
		config.log_level = level;
	}

	logger::init(&config.log_level);
	Ok((config, args.command))
}

fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClientConfig, ConfigError> {
	let path_ref = path.as_ref();
	let content = std::fs::read_to_string(path_ref).map_err(|source| ConfigError::Io {
		path: path_ref.display().to_string(),
		source,
	})?;

	Ok(toml::from_str(&content)?)
}
