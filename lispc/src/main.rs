mod cli;
mod repl;
mod rlpl;
mod rppl;

use std::path::PathBuf;

use clap::Parser;
use cli::{print_finished, print_running, report_error};
use lisp_core::interpreter::{config::DEFAULT_GC_THRESHOLD, Config, Interpreter};

#[derive(Parser)]
enum Command {
    /// Runs the interactive Read Eval Print Loop
    Repl {
        /// Frames allocated between collections, 0 disables collection
        #[arg(long, default_value_t = DEFAULT_GC_THRESHOLD)]
        gc_threshold: usize,
    },
    /// Evaluates every form of a source file in order
    Run {
        /// Path of source file
        path: PathBuf,
        /// Print the value of every top-level form
        #[arg(short, long, default_value_t = false)]
        print: bool,
        /// Frames allocated between collections, 0 disables collection
        #[arg(long, default_value_t = DEFAULT_GC_THRESHOLD)]
        gc_threshold: usize,
    },
    /// Runs Read Lex Print Loop
    Lex,
    /// Runs Read Parse Print Loop
    Read,
}

fn main() {
    init_tracing();

    let result = match Command::parse() {
        Command::Repl { gc_threshold } => repl::start(Config { gc_threshold }),
        Command::Run { path, print, gc_threshold } => {
            print_running(&path.to_string_lossy());
            let start = std::time::Instant::now();

            let mut interpreter = Interpreter::with_config(Config { gc_threshold });
            let outcome = interpreter.run_file(path, |value| {
                if print {
                    println!("{value}");
                }
            });

            if let Err(err) = outcome {
                report_error(&err);
                std::process::exit(1);
            }

            print_finished(std::time::Instant::now() - start);

            Ok(())
        },
        Command::Lex => rlpl::start(),
        Command::Read => rppl::start(),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Installs a subscriber only when `RUST_LOG` asks for one.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        let filter = EnvFilter::from_default_env();
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
            .with(filter)
            .init();
    }
}
