use clap::Parser;
use empire::{Compiler, EmpireError, Properties};
use std::{
    fs::File,
    io::{self, Read, Write},
    path::PathBuf,
};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Rule document to compile, `-` reads standard input
    source: PathBuf,

    /// Write output to this file instead of standard output
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Property as KEY=VALUE, may be repeated
    #[arg(short = 'p', long = "property", value_name = "KEY=VALUE")]
    properties: Vec<String>,

    /// JSON file with an object of property values
    #[arg(short = 'c', long = "properties", value_name = "FILE")]
    properties_file: Option<PathBuf>,

    /// Only check that the document parses
    #[arg(long)]
    check: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn load_properties(cli: &Cli) -> Result<Properties, EmpireError> {
    let mut properties = match &cli.properties_file {
        Some(path) => Properties::from_json_file(path)?,
        None => Properties::new(),
    };
    for assignment in &cli.properties {
        let (key, value) = Properties::parse_assignment(assignment)?;
        properties.insert(key, value);
    }
    Ok(properties)
}

fn open_source(path: &PathBuf) -> Result<Box<dyn Read>, EmpireError> {
    if path.as_os_str() == "-" {
        Ok(Box::new(io::stdin().lock()))
    } else {
        Ok(Box::new(File::open(path)?))
    }
}

fn open_output(path: &Option<PathBuf>) -> Result<Box<dyn Write>, EmpireError> {
    match path {
        Some(path) => Ok(Box::new(File::create(path)?)),
        None => Ok(Box::new(io::stdout().lock())),
    }
}

fn run(cli: &Cli) -> Result<(), EmpireError> {
    let properties = load_properties(cli)?;
    debug!(count = properties.len(), "properties loaded");

    let mut input = open_source(&cli.source)?;

    if cli.check {
        let mut source = String::new();
        input.read_to_string(&mut source)?;
        let program = Compiler::parse(&source)?;
        info!(items = program.items.len(), "document parsed");
        return Ok(());
    }

    let output = open_output(&cli.output)?;
    let stats = Compiler::new(input, output, properties).compile()?;
    info!(
        source = %cli.source.display(),
        statements = stats.statements,
        fired = stats.fired,
        "compiled"
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
