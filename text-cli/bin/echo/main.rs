//! String echo utility
//!
//! Writes its arguments to standard output separated by single spaces,
//! optionally interpreting backslash escapes.

mod opts;

use opts::EchoOpts;

use text_cli::{exit_with_error, run_echo};

fn main() {
    let opts = EchoOpts::parse();
    let config = opts.config();

    if let Err(err) = run_echo(opts.strings(), &config, "echo") {
        exit_with_error(&err);
    }
}
