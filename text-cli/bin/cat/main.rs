//! File concatenation utility
//!
//! Copies each FILE (or standard input) to standard output, optionally
//! numbering the lines.

mod opts;

use opts::CatOpts;

use text_cli::{exit_with_error, run_cat};

fn main() {
    let opts = CatOpts::parse();
    let config = opts.config();

    if let Err(err) = run_cat(opts.files(), &config, "cat") {
        exit_with_error(&err);
    }
}
