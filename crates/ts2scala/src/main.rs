use clap::{Parser, Subcommand};
use converter::convert_with_diagnostics;
use diagnostics::Reporter;
use std::fs;

#[derive(Parser)]
#[command(name = "ts2scala")]
#[command(about = "Convert TypeScript declarations to Scala 3")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one file and print or write the Scala output
    Convert {
        input: String,
        #[arg(long)]
        out: Option<String>,
    },
    /// Convert files and report diagnostics only
    Check {
        #[arg(value_name = "FILES")]
        files: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Convert { input, out } => {
            if let Err(e) = convert_file(input, out.as_deref()) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
        Commands::Check { files } => {
            if let Err(e) = check_files(files) {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        }
    }
}

fn convert_file(input: &str, out: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let content = fs::read_to_string(input)?;

    let mut reporter = Reporter::new();
    let file_id = reporter.add_file(input.to_string(), content.clone());

    let conversion = convert_with_diagnostics(&content, file_id);
    for diagnostic in conversion.diagnostics {
        reporter.report(diagnostic);
    }
    reporter.print_all();

    match out {
        Some(path) => fs::write(path, conversion.scala)?,
        None => println!("{}", conversion.scala),
    }

    Ok(())
}

fn check_files(files: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut reporter = Reporter::new();

    for file in files {
        let content = fs::read_to_string(file)?;
        let file_id = reporter.add_file(file.clone(), content.clone());

        let conversion = convert_with_diagnostics(&content, file_id);
        for diagnostic in conversion.diagnostics {
            reporter.report(diagnostic);
        }
    }

    reporter.print_all();
    if reporter.has_errors() {
        return Err("Check failed with parse errors".into());
    }

    Ok(())
}
