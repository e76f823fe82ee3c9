extern crate ansi_term;
extern crate clap;
extern crate crc;
extern crate ctrlc;
use crate::mach::{Event, Program, Runtime};
use crate::{error, lang::Error, lang::ErrorCode};
use ansi_term::Style;
use clap::Parser;
use crc::{crc32, Hasher32};
use std::io::{self, BufWriter, ErrorKind, IsTerminal, Read, Write};
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

mod input;
mod options;

pub use input::Input;
pub use options::Options;

const CYCLES: usize = 5000;

pub fn main() {
    let mut options = Options::parse();
    options.color = io::stderr().is_terminal();
    let interrupted = Arc::new(AtomicBool::new(false));
    let int_moved = interrupted.clone();
    if let Err(error) = ctrlc::set_handler(move || {
        int_moved.store(true, Ordering::SeqCst);
    }) {
        eprintln!("tinyboot: {}", error);
    }
    let code = match main_loop(&options, interrupted) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("tinyboot: {}", error);
            1
        }
    };
    std::process::exit(code);
}

fn main_loop(options: &Options, interrupted: Arc<AtomicBool>) -> io::Result<i32> {
    let stderr = io::stderr();
    let stdout = io::stdout();
    let mut output = BufWriter::new(stdout.lock());
    let input = Input::stdin(interrupted.clone());
    run_file(
        options,
        input,
        &mut output,
        &mut stderr.lock(),
        &interrupted,
    )
}

/// Loads `options.program` and runs it. A program that fails to load
/// is reported to `diag` with exit status 1.
pub fn run_file<R: Read, W: Write, E: Write>(
    options: &Options,
    input: R,
    output: &mut W,
    diag: &mut E,
    interrupted: &AtomicBool,
) -> io::Result<i32> {
    let mut runtime = match load(&options.program) {
        Ok(runtime) => runtime,
        Err(error) => {
            report(diag, options, &error)?;
            return Ok(1);
        }
    };
    runtime.set_tron(options.trace);
    run(&mut runtime, options, input, output, diag, interrupted)
}

/// Reads and compiles a program, ready to run from its start address.
pub fn load(path: &Path) -> Result<Runtime, Error> {
    let text = match std::fs::read(path) {
        Ok(text) => text,
        Err(error) => {
            let msg = format!("{}: {}", path.display(), error);
            return Err(match error.kind() {
                ErrorKind::NotFound => error!(FileNotFound; &msg),
                _ => error!(InputOutput; &msg),
            });
        }
    };
    Runtime::new(Program::compile(text)?)
}

/// Drives the runtime to completion and returns the exit status.
///
/// Only `W` writes to `output`. Everything else goes to `diag`.
pub fn run<R: Read, W: Write, E: Write>(
    runtime: &mut Runtime,
    options: &Options,
    mut input: R,
    output: &mut W,
    diag: &mut E,
    interrupted: &AtomicBool,
) -> io::Result<i32> {
    let mut digest = crc32::Digest::new(crc32::IEEE);
    let mut written: usize = 0;
    loop {
        if interrupted.swap(false, Ordering::SeqCst) {
            runtime.interrupt();
        }
        match runtime.execute(CYCLES) {
            Event::Running => {}
            Event::Input => {
                output.flush()?;
                let mut byte = [0u8];
                match input.read(&mut byte) {
                    Ok(0) => runtime.input(None),
                    Ok(_) => runtime.input(Some(byte[0])),
                    Err(e) if e.kind() == ErrorKind::Interrupted => {}
                    Err(e) => return Err(e),
                }
            }
            Event::Write(address, bytes) => {
                output.write_all(&bytes)?;
                writeln!(diag, "writing address {}, count {}", address, bytes.len())?;
                digest.write(&bytes);
                written += bytes.len();
            }
            Event::Trace(pc, byte) => {
                writeln!(diag, "{{pc: 0x{:x}, [pc]: 0x{:x}}}", pc, byte)?;
            }
            Event::Quit => {
                output.flush()?;
                if options.checksum {
                    writeln!(diag, "crc32 0x{:08x}, length {}", digest.sum32(), written)?;
                }
                return Ok(0);
            }
            Event::Error(error) => {
                output.flush()?;
                report(diag, options, &error)?;
                if options.dump {
                    write!(diag, "{}", runtime.dump())?;
                }
                if error.is(ErrorCode::Break) {
                    return Ok(130);
                }
                return Ok(1);
            }
            Event::Stopped => return Ok(1),
        }
    }
}

fn report<E: Write>(diag: &mut E, options: &Options, error: &Error) -> io::Result<()> {
    if options.color {
        writeln!(diag, "{}", Style::new().bold().paint(error.to_string()))
    } else {
        writeln!(diag, "{}", error)
    }
}
