//! Parley console entry point.

use std::env;
use std::io::{self, BufRead};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use parley_dispatch::RegistrarConfig;
use parley_foundation::CommandSender;
use parley_runtime::{Repl, build_demo_dispatcher};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    batch_mode: bool,
    verbose: bool,
    silent: bool,
    as_player: Option<String>,
    dump_file: Option<PathBuf>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "-b" | "--batch" => config.batch_mode = true,
            "-v" | "--verbose" => config.verbose = true,
            "--silent" => config.silent = true,
            "--as" => {
                i += 1;
                if i >= args.len() {
                    return Err("--as requires a player name".into());
                }
                config.as_player = Some(args[i].clone());
            }
            "--dump" => {
                i += 1;
                if i >= args.len() {
                    return Err("--dump requires a file path".into());
                }
                config.dump_file = Some(PathBuf::from(&args[i]));
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("parley {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_max_level(if config.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(io::stderr)
        .init();

    let mut registrar_config = RegistrarConfig::new()
        .verbose_output(config.verbose)
        .silent_logs(config.silent);
    if let Some(path) = &config.dump_file {
        registrar_config = registrar_config.dispatcher_file(path.clone());
    }

    let dispatcher = Arc::new(build_demo_dispatcher(registrar_config)?);
    let sender = match &config.as_player {
        Some(name) => CommandSender::player(name.clone()),
        None => CommandSender::console(),
    };

    if config.batch_mode {
        for line in io::stdin().lock().lines() {
            let line = line?;
            let input = line.trim();
            if input.is_empty() {
                continue;
            }
            if let Err(e) = dispatcher.dispatch(&sender, input) {
                eprintln!("Error: {e}");
            }
        }
        return Ok(());
    }

    Repl::new(dispatcher, sender)?.run()?;
    Ok(())
}

fn print_help() {
    println!("parley - tree-structured command console");
    println!();
    println!("USAGE:");
    println!("  parley [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("  -b, --batch        Read commands from stdin instead of the REPL");
    println!("  -v, --verbose      Log each registered execution");
    println!("      --silent       Suppress registrar logging");
    println!("      --as <name>    Act as a player instead of the console");
    println!("      --dump <file>  Write the dispatcher tree as JSON");
    println!("  -h, --help         Show this help");
    println!("  -V, --version      Show version");
}
