//! Shell configuration from the command line.

/// Settings for one interactive session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplConfig {
    pub prompt: String,
    pub header: String,
    pub footer: String,
    /// Suppress header, footer, and prompt (for piped input).
    pub quiet: bool,
}

impl Default for ReplConfig {
    fn default() -> Self {
        ReplConfig {
            prompt: "› ".to_string(),
            header: "welcome to the scheme interactive interpreter".to_string(),
            footer: "farewell schemer".to_string(),
            quiet: false,
        }
    }
}

/// What the command line asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Repl(ReplConfig),
    Help,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option: {0}")]
    UnknownFlag(String),
    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Command, ConfigError> {
    let mut config = ReplConfig::default();

    for arg in args {
        if let Some(prompt) = arg.strip_prefix("--prompt=") {
            config.prompt = prompt.to_string();
        } else if arg == "--quiet" || arg == "-q" {
            config.quiet = true;
        } else if arg == "--help" || arg == "-h" {
            return Ok(Command::Help);
        } else if arg.starts_with('-') {
            return Err(ConfigError::UnknownFlag(arg.clone()));
        } else {
            return Err(ConfigError::UnexpectedArgument(arg.clone()));
        }
    }

    Ok(Command::Repl(config))
}

/// Usage text for `--help`.
pub const USAGE: &str = "\
Usage: scm [options]

Options:
  --prompt=<text>   Prompt shown before each read
  -q, --quiet       No banner or prompt
  -h, --help        Show this message

Set RUST_LOG (e.g. RUST_LOG=scm=debug) for trace output.";

#[cfg(test)]
mod tests;
