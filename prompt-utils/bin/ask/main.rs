//! Yes/no confirmation utility.
//!
//! Asks the question given on the command line and reports the answer via
//! the exit status: 0 for yes, 1 for no, 2 on I/O failure. The prompt goes
//! to stderr so the utility composes with shell conditionals and pipes.

use std::io;
use std::process;

mod opts;

use opts::AskOpts;

use prompt_utils::confirm;

const PROGRAM_NAME: &str = "ask";

fn main() {
    let opts = AskOpts::parse();

    match confirm(
        opts.prompt(),
        opts.default_answer(),
        io::stdin().lock(),
        io::stderr(),
    ) {
        Ok(answer) => {
            let status = if answer == "yes" { 0 } else { 1 };
            process::exit(status);
        }
        Err(err) => {
            eprintln!("{PROGRAM_NAME}: {err}");
            process::exit(2);
        }
    }
}
