use clap::Parser;
use std::path::PathBuf;

/// Compiles PROGRAM, then runs it with standard input and output.
#[derive(Parser, Debug, Default, Clone, PartialEq)]
#[command(name = "tinyboot", version)]
#[command(about = "Run a tinyboot program", long_about = None)]
pub struct Options {
    /// Print {pc: 0xN, [pc]: 0xB} for every instruction
    #[arg(short, long)]
    pub trace: bool,

    /// Print interpreter state after a run-time error
    #[arg(short, long)]
    pub dump: bool,

    /// Print the crc32 of all output after Q
    #[arg(short, long)]
    pub checksum: bool,

    /// Render error reports in bold
    #[arg(skip)]
    pub color: bool,

    /// Program text to compile and run
    pub program: PathBuf,
}
