use std::sync::atomic::AtomicBool;
use tinyboot::mach::{Program, Runtime};
use tinyboot::term::{self, Options};

pub struct Outcome {
    pub code: i32,
    pub output: Vec<u8>,
    pub diag: String,
}

pub fn runtime(text: &str) -> Runtime {
    Runtime::new(Program::compile(text).unwrap()).unwrap()
}

pub fn exec(text: &str, input: &[u8]) -> Outcome {
    exec_with(runtime(text), input, &Options::default(), false)
}

pub fn exec_opts(text: &str, input: &[u8], options: &Options) -> Outcome {
    exec_with(runtime(text), input, options, false)
}

pub fn exec_with(mut runtime: Runtime, input: &[u8], options: &Options, interrupt: bool) -> Outcome {
    runtime.set_tron(options.trace);
    let interrupted = AtomicBool::new(interrupt);
    let mut output = vec![];
    let mut diag = vec![];
    let code = term::run(
        &mut runtime,
        options,
        input,
        &mut output,
        &mut diag,
        &interrupted,
    )
    .unwrap();
    Outcome {
        code,
        output,
        diag: String::from_utf8(diag).unwrap(),
    }
}
