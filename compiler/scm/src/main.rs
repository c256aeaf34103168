//! Scheme interpreter CLI.

use std::io::{self, BufReader, BufWriter};
use std::sync::Arc;

use scm::config::USAGE;
use scm::{farewell, init_tracing, parse_args, run, Command, ReplConfig};
use scm_value::{InputPort, OutputPort};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = match parse_args(&args) {
        Ok(Command::Repl(config)) => config,
        Ok(Command::Help) => {
            println!("{USAGE}");
            return;
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    let input = InputPort::new(BufReader::new(io::stdin()));
    let output = Arc::new(OutputPort::new(BufWriter::new(io::stdout())));

    install_interrupt_handler(&config, &output);

    if let Err(e) = run(&config, &input, &output) {
        eprintln!("REPL: {e}");
        std::process::exit(1);
    }
}

/// On SIGINT, SIGTERM or SIGHUP, close the session with the footer and exit 0.
fn install_interrupt_handler(config: &ReplConfig, output: &Arc<OutputPort>) {
    let config = config.clone();
    let output = Arc::clone(output);
    let installed = ctrlc::set_handler(move || {
        tracing::debug!("interrupted");
        let code = match farewell(&config, &output) {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("REPL: {e}");
                1
            }
        };
        std::process::exit(code);
    });
    if let Err(e) = installed {
        tracing::warn!(error = %e, "signal handler not installed");
    }
}
