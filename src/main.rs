use std::io::{self, BufRead};

use structopt::StructOpt;

mod evaluator;
use evaluator::Evaluator;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "rpn calculator",
    about = "An interactive Reverse Polish Notation calculator for whole numbers."
)]
struct Opt {
    /// Enables trace log level
    #[structopt(short, long)]
    trace: bool,

    /// Enables info log level
    #[structopt(short, long)]
    info: bool,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    let log_level = if opt.trace {
        log::Level::Trace
    } else if opt.info {
        log::Level::Info
    } else {
        log::Level::Warn
    };

    simple_logger::init_with_level(log_level)?;

    let mut evaluator = Evaluator::new();

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        for token in line?.split_whitespace() {
            // the quit token ends the session before it reaches the
            // evaluator; the evaluator still treats a stray one as a no-op
            if token == "!" {
                return Ok(());
            }

            if let Some(output) = evaluator.eval(token) {
                println!("{}", output);
            }
        }
    }

    Ok(())
}
