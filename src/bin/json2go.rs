use std::io::Read;
use std::{env, fs, process::ExitCode};

use json2go::{translate, Translation};

#[derive(Clone, Copy, Debug)]
enum OutputFormat {
    Both,
    TypeOnly,
    InitOnly,
    Json,
}

fn main() -> ExitCode {
    match run(env::args().collect()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<(), String> {
    if args.len() < 2 {
        return Err("not enough arguments".to_string());
    }

    let input_arg = args[1].as_str();
    let format = parse_output_options(&args[2..])?;

    let input = if input_arg == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {e}"))?;
        buf
    } else {
        fs::read_to_string(input_arg)
            .map_err(|e| format!("failed to read '{input_arg}': {e}"))?
    };

    let translation = translate(&input).map_err(|e| e.to_string())?;
    print_translation(&translation, format)
}

fn parse_output_options(args: &[String]) -> Result<OutputFormat, String> {
    let mut format = OutputFormat::Both;
    for arg in args {
        match arg.as_str() {
            "--type-only" => format = OutputFormat::TypeOnly,
            "--init-only" => format = OutputFormat::InitOnly,
            "--json" => format = OutputFormat::Json,
            other => return Err(format!("unknown option '{other}'")),
        }
    }
    Ok(format)
}

fn print_translation(translation: &Translation, format: OutputFormat) -> Result<(), String> {
    match format {
        OutputFormat::Both => {
            println!("{}", translation.type_declaration);
            println!();
            println!("{}", translation.initializer);
        }
        OutputFormat::TypeOnly => println!("{}", translation.type_declaration),
        OutputFormat::InitOnly => println!("{}", translation.initializer),
        OutputFormat::Json => {
            let rendered = serde_json::to_string_pretty(translation)
                .map_err(|e| format!("failed to serialize output: {e}"))?;
            println!("{rendered}");
        }
    }
    Ok(())
}

fn print_usage() {
    eprintln!("usage: json2go <file|-> [--type-only | --init-only | --json]");
    eprintln!();
    eprintln!("Reads a JSON document (use '-' for stdin) and prints a Go type");
    eprintln!("declaration and a matching composite-literal initializer.");
}
