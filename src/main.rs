use clap::Parser;
use smn_processor::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    if args.command.is_none() {
        show_help_and_commands();
        process::exit(0);
    }

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    match runtime.block_on(commands::run(args)) {
        Ok(()) => process::exit(0),
        Err(error) => {
            eprintln!("Error: {error}");
            process::exit(1);
        }
    }
}

/// Show help information when no subcommand is provided
fn show_help_and_commands() {
    println!("SMN Processor - Mexican Climate Report Converter");
    println!("================================================");
    println!();
    println!("Convert plain-text climate station reports from the Mexican national");
    println!("meteorological archive into structured CSV files.");
    println!();
    println!("USAGE:");
    println!("    smn-processor <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    download    Fetch, convert and package station reports (main command)");
    println!("    stations    List catalogue stations and states");
    println!("    help        Show this help message or help for specific commands");
    println!();
    println!("EXAMPLES:");
    println!("    # Daily records for one state:");
    println!("    smn-processor download --state JALISCO --data diarios");
    println!();
    println!("    # Every report family for a single station:");
    println!("    smn-processor download --station 14005 --data todos");
    println!();
    println!("    # Climatological normals for a reference period:");
    println!("    smn-processor download --state SONORA --data normales_1991_2020");
    println!();
    println!("    # List the distinct states in the catalogue:");
    println!("    smn-processor stations --states");
    println!();
    println!("For detailed help on any command, use:");
    println!("    smn-processor <COMMAND> --help");
}
