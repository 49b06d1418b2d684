use bsh::flags::Flags;
use bsh::shell::Shell;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("bsh: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), bsh::error::ShellError> {
    let mut flags = Flags::new();
    let args: Vec<String> = env::args().skip(1).collect();
    flags.parse(&args)?;

    if flags.is_set("help") {
        flags.print_help();
        return Ok(());
    }

    if flags.is_set("version") {
        println!("bsh {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    bsh::logging::init(&flags);

    let mut shell = Shell::new(flags)?;
    shell.run()
}
