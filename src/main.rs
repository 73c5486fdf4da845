use anyhow::Context;
use clap::Parser;
use log::info;
use pft_interpreter::{InterpreterConfig, OutputFormat, interpret, load_record, parse_record};
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

/// Interpret a pulmonary function test record
#[derive(Debug, Parser)]
#[command(name = "pft-interpreter", version, about)]
struct Args {
    /// JSON measurement record to interpret (reads stdin when omitted or "-")
    input: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "PFT_OUTPUT_FORMAT")]
    format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pretty: bool,

    /// Omit the guideline citation from text reports
    #[arg(long)]
    no_citation: bool,
}

impl Args {
    fn config(&self) -> InterpreterConfig {
        InterpreterConfig::default()
            .with_output_format(self.format)
            .with_pretty_json(self.pretty)
            .with_citation(!self.no_citation)
    }
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();

    let record = match args.input.as_deref() {
        Some(path) if path.as_os_str() != "-" => load_record(path)
            .with_context(|| format!("Failed to load measurement record {}", path.display()))?,
        _ => {
            info!("Reading measurement record from stdin");
            let mut json = String::new();
            io::stdin()
                .read_to_string(&mut json)
                .context("Failed to read measurement record from stdin")?;
            parse_record(&json).context("Failed to parse measurement record from stdin")?
        }
    };

    let start = Instant::now();
    let result = interpret(&record);
    info!("Interpreted record in {:?}", start.elapsed());

    match config.output_format {
        OutputFormat::Text => println!("{}", result.to_report(config.include_citation)),
        OutputFormat::Json => {
            let json = if config.pretty_json {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{json}");
        }
    }

    Ok(())
}
