use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Print postal labels for the complete addresses in a CSV file",
    long_about = "Reads a header-less CSV whose rows hold exactly six fields \
                  (names, line 1, line 2, city, state, zip) and prints a label for \
                  every row whose required fields are filled in. A row with the \
                  wrong number of fields aborts the whole run."
)]
pub struct Cli {
    /// Input CSV file of mailing addresses
    #[arg(value_name = "CSV")]
    pub input: PathBuf,
}
