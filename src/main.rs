mod cli;
mod config;
mod ui;

use labsum::report::{ConversionSummary, process_report_with};
use log::debug;
use std::fs;
use std::io::{self, Read};

fn main() {
    env_logger::init();

    // Parse CLI arguments
    let args = cli::CliArgs::parse_args();

    // Validate arguments
    if let Err(e) = args.validate() {
        ui::print_error(&e);
        std::process::exit(1);
    }

    let options = match config::resolve_options(&args) {
        Ok(o) => o,
        Err(e) => {
            ui::print_error(&format!("Configuration error: {}", e));
            std::process::exit(1);
        }
    };

    let report = match read_input(&args) {
        Ok(r) => r,
        Err(e) => {
            ui::print_error(&e);
            std::process::exit(1);
        }
    };
    debug!("Read report of {} bytes", report.len());

    let result = process_report_with(&report, &options);
    let summary = ConversionSummary::from_result(&report, &result);

    let rendered = if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => json,
            Err(e) => {
                ui::print_error(&format!("Failed to serialize result: {}", e));
                std::process::exit(1);
            }
        }
    } else {
        match &result {
            Ok(text) => text.clone(),
            Err(e) => {
                ui::print_error(&e.to_string());
                std::process::exit(1);
            }
        }
    };

    if let Err(e) = write_output(&args, &rendered) {
        ui::print_error(&e);
        std::process::exit(1);
    }

    if !args.quiet && !args.json {
        if let Some(line) = summary.status_line() {
            ui::status(&line);
        }
    }

    if !summary.success {
        std::process::exit(1);
    }
}

/// Read the report from the input file or stdin
fn read_input(args: &cli::CliArgs) -> Result<String, String> {
    match args.input_path() {
        Some(path) => fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {}", path.display(), e)),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf).map_err(|e| format!("Failed to read stdin: {}", e))?;
            Ok(buf)
        }
    }
}

/// Write the rendered result to the output file or stdout
fn write_output(args: &cli::CliArgs, rendered: &str) -> Result<(), String> {
    match args.output {
        Some(ref path) => {
            fs::write(path, format!("{}\n", rendered)).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
        }
        None => {
            println!("{}", rendered);
            Ok(())
        }
    }
}
