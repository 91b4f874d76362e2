//! Atlas packer - command-line tool for packing a sprite directory into one texture

use std::process::ExitCode;

use atlas_packer::cli;

fn main() -> ExitCode {
    cli::run()
}
