use crate::lang::{Error, ErrorCode};
use crate::mach::{Event, Program, Runtime};

mod compile_test;

fn runtime(text: &str) -> Runtime {
    Runtime::new(Program::compile(text).unwrap()).unwrap()
}

fn compile_err(text: &str) -> Error {
    Program::compile(text).unwrap_err()
}

/// Runs to `Q`, feeding `input` to every read, and returns the output.
fn run_input(runtime: &mut Runtime, input: &[u8]) -> Vec<u8> {
    run_cycles(runtime, input, 5000).unwrap()
}

fn run(runtime: &mut Runtime) -> Vec<u8> {
    run_input(runtime, b"")
}

fn run_err(runtime: &mut Runtime) -> Error {
    run_cycles(runtime, b"", 5000).unwrap_err()
}

fn run_cycles(runtime: &mut Runtime, input: &[u8], cycles: usize) -> Result<Vec<u8>, Error> {
    let mut input = input.iter();
    let mut output = vec![];
    let mut prev_running = false;
    loop {
        let event = runtime.execute(cycles);
        let running = matches!(event, Event::Running);
        match event {
            Event::Quit | Event::Stopped => break,
            Event::Error(error) => return Err(error),
            Event::Running => {
                if prev_running {
                    panic!("{} execution cycles exceeded", cycles);
                }
            }
            Event::Input => runtime.input(input.next().copied()),
            Event::Write(_, mut bytes) => output.append(&mut bytes),
            Event::Trace(..) => {}
        }
        prev_running = running;
    }
    Ok(output)
}

fn assert_code(error: &Error, code: ErrorCode) {
    assert!(error.is(code), "expected {:?}, got {}", code, error);
}
