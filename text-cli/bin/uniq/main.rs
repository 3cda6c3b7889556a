//! Adjacent duplicate line filter
//!
//! Reads INPUT (or standard input) and writes one line per run of adjacent
//! matching lines to standard output.

mod opts;

use opts::UniqOpts;

use text_cli::{exit_with_error, run_uniq};

fn main() {
    let opts = UniqOpts::parse();
    let config = opts.config();

    if let Err(err) = run_uniq(opts.input(), &config, "uniq") {
        exit_with_error(&err);
    }
}
