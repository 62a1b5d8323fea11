use std::{fs, io, path::PathBuf, process::ExitCode};

use ciktor::{error::Error, interpreter::lexer::tokenize};
use clap::Parser;
use log::info;

/// ciktor runs scripts written in a small, dynamically checked language with
/// typed variables, functions, strings and arrays.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// The script to run.
    script: PathBuf,

    /// Print the token stream instead of running the script.
    #[arg(long, conflicts_with = "ast")]
    tokens: bool,

    /// Print the parsed syntax tree instead of running the script.
    #[arg(long)]
    ast: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        },
    };

    let source = match fs::read_to_string(&args.script) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("failed to read '{}': {e}", args.script.display());
            return ExitCode::FAILURE;
        },
    };
    info!("loaded '{}' ({} bytes)", args.script.display(), source.len());

    let result = if args.tokens {
        print_tokens(&source)
    } else if args.ast {
        print_ast(&source)
    } else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        let mut output = stdout.lock();
        ciktor::run(&source, &mut stdin.lock(), &mut output)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !e.is_silent() {
                eprintln!("{e}");
            }
            ExitCode::FAILURE
        },
    }
}

fn print_tokens(source: &str) -> Result<(), Error> {
    for (token, line) in tokenize(source)? {
        println!("{line}: {token}");
    }
    Ok(())
}

fn print_ast(source: &str) -> Result<(), Error> {
    let program = ciktor::parse(source)?;
    println!("{program:#?}");
    Ok(())
}
