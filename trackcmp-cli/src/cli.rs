use clap::{Arg, ArgAction, Command, arg};

use crate::consts;

pub fn build_compare_cli() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Compute the relationship between two genomic annotation tracks: overlap length for two segment tracks, Pearson correlation for two value tracks, covered mean for one of each.")
        .arg_required_else_help(true)
        .arg(arg!(<file_x> "First input track"))
        .arg(arg!(<file_y> "Second input track"))
        .arg(
            Arg::new("genome-length")
                .long("genome-length")
                .required(false)
                .help("Total number of signal positions, required for .const tracks"),
        )
        .arg(
            arg!(--output <OUTPUT>)
                .required(false)
                .help("Output file to write the result to (default: stdout)"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .action(ArgAction::SetTrue)
                .help("Emit the result as a JSON report"),
        )
}
