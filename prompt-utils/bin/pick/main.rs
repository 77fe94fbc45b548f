//! Interactive menu selection utility.
//!
//! Presents a numbered menu built from the command line arguments and
//! prints the selected choice(s) to standard output, one per line. The
//! dialog itself goes to stderr so the result stays pipeable.

use std::io;
use std::process;

mod opts;

use opts::PickOpts;

use prompt_utils::{select_many, select_one};

const PROGRAM_NAME: &str = "pick";

fn main() {
    let opts = PickOpts::parse();
    let options = opts.config();

    let result = if opts.is_multi() {
        select_many(
            opts.prompt(),
            opts.choices(),
            &options,
            io::stdin().lock(),
            io::stderr(),
        )
    } else {
        select_one(
            opts.prompt(),
            opts.choices(),
            &options,
            io::stdin().lock(),
            io::stderr(),
        )
        .map(|choice| vec![choice])
    };

    match result {
        Ok(selected) => {
            for choice in selected {
                println!("{choice}");
            }
        }
        Err(err) => {
            eprintln!("{PROGRAM_NAME}: {err}");
            process::exit(1);
        }
    }
}
