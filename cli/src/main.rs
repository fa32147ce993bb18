use clap::{Parser, Subcommand, ValueEnum};
use multitool::calc;
use multitool::codec::{Codec, Representation};
use multitool::config::{Config, GraphRange};
use multitool::units::{self, UnitCategory};
use multitool::viewer;
use multitool::wiki;
use std::io::Read;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "multitool")]
#[command(about = "Unit conversion, byte codecs, calculator and data viewer", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log debug events to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value between two units
    Convert {
        /// Category (length, weight, temperature, volume, time, digital)
        category: String,

        /// Source unit (e.g., "meter")
        from: String,

        /// Target unit (e.g., "kilometer")
        to: String,

        /// Value to convert
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// List categories, or the units of one category
    Units {
        /// Category to list units for
        category: Option<String>,
    },

    /// Encode text as binary or hex groups
    Encode {
        /// Target representation
        #[arg(value_enum)]
        to: Encoding,

        /// Text to encode (default: stdin)
        text: Option<String>,
    },

    /// Decode binary or hex groups back to text
    Decode {
        /// Source representation
        #[arg(value_enum)]
        from: Encoding,

        /// Groups to decode (default: stdin)
        input: Option<String>,
    },

    /// Evaluate an arithmetic expression
    Calc {
        /// Expression (e.g., "2 * (3 + 4)")
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },

    /// Sample f(x) over a range and print x/y pairs
    Graph {
        /// Expression in x (e.g., "x^2")
        #[arg(allow_hyphen_values = true)]
        expression: String,

        #[arg(long, allow_hyphen_values = true)]
        x_min: Option<f64>,

        #[arg(long, allow_hyphen_values = true)]
        x_max: Option<f64>,

        #[arg(long)]
        step: Option<f64>,

        /// Print JSON instead of tab-separated pairs
        #[arg(long)]
        json: bool,
    },

    /// Load a JSON, CSV, YAML, XML or TOML file as a table
    View {
        /// Data file path
        path: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the encyclopedia search URL for a query
    WikiUrl {
        /// Free-text query
        query: String,
    },

    /// Summarize a saved search response body
    WikiParse {
        /// Response file (default: stdin)
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Encoding {
    Binary,
    Hex,
}

impl From<Encoding> for Representation {
    fn from(e: Encoding) -> Self {
        match e {
            Encoding::Binary => Representation::Binary,
            Encoding::Hex => Representation::Hex,
        }
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = multitool::logging::init(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    let config = match load_config(cli.config.as_ref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Convert {
            category,
            from,
            to,
            value,
        } => convert(&config, &category, &from, &to, &value),
        Commands::Units { category } => list_units(category.as_deref()),
        Commands::Encode { to, text } => {
            run_codec(&config, Representation::Text, to.into(), text)
        }
        Commands::Decode { from, input } => {
            run_codec(&config, from.into(), Representation::Text, input)
        }
        Commands::Calc { expression } => evaluate(&config, &expression),
        Commands::Graph {
            expression,
            x_min,
            x_max,
            step,
            json,
        } => graph(&config, &expression, x_min, x_max, step, json),
        Commands::View { path, output } => view(&config, &path, output.as_deref()),
        Commands::WikiUrl { query } => wiki_url(&config, &query),
        Commands::WikiParse { path } => wiki_parse(&config, path),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            Ok(Config::load_from_file(path)?)
        }
        None => Ok(Config::empty()),
    }
}

/// Use the argument if given, otherwise all of stdin minus one trailing newline
fn input_or_stdin(input: Option<String>) -> Result<String, Box<dyn std::error::Error>> {
    if let Some(input) = input {
        return Ok(input);
    }

    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    if buffer.ends_with('\n') {
        buffer.pop();
        if buffer.ends_with('\r') {
            buffer.pop();
        }
    }
    Ok(buffer)
}

fn convert(
    config: &Config,
    category: &str,
    from: &str,
    to: &str,
    value: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let result = units::convert_str(category, from, to, value, config.display.precision)?;
    println!("{}", result);
    Ok(())
}

fn list_units(category: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    match category {
        Some(name) => {
            let category: UnitCategory = name
                .parse()
                .map_err(|c| format!("Unknown unit category: {}", c))?;
            for unit in category.units() {
                println!("{}", unit);
            }
        }
        None => {
            for category in UnitCategory::ALL {
                let names: Vec<&str> = category.units().iter().map(|u| u.as_str()).collect();
                println!("{}: {}", category, names.join(", "));
            }
        }
    }
    Ok(())
}

fn run_codec(
    config: &Config,
    from: Representation,
    to: Representation,
    input: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let input = input_or_stdin(input)?;
    let codec = Codec::new(config.limits);
    let output = codec
        .convert(from, to, &input)
        .map_err(|e| format!("{} ({})", e.user_message(), e))?;
    println!("{}", output);
    Ok(())
}

fn evaluate(config: &Config, expression: &str) -> Result<(), Box<dyn std::error::Error>> {
    let value = calc::evaluate_within(expression, &config.limits)?;
    println!("{}", calc::format_number(value));
    Ok(())
}

fn graph(
    config: &Config,
    expression: &str,
    x_min: Option<f64>,
    x_max: Option<f64>,
    step: Option<f64>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    config.limits.check(expression)?;

    let range = GraphRange {
        x_min: x_min.unwrap_or(config.graph.x_min),
        x_max: x_max.unwrap_or(config.graph.x_max),
        step: step.unwrap_or(config.graph.step),
        ..config.graph
    };
    range.validate()?;

    let points = calc::sample_graph(expression, &range)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&points)?);
    } else {
        for point in &points {
            println!(
                "{}\t{}",
                calc::format_number(point.x),
                calc::format_number(point.y)
            );
        }
    }
    Ok(())
}

fn view(
    config: &Config,
    path: &std::path::Path,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let content = std::fs::read_to_string(path)?;

    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| format!("Invalid file name: {}", path.display()))?;

    let table = viewer::load_table_within(file_name, &content, &config.limits)?;
    eprintln!(
        "Loaded {} rows ({}) from {}",
        table.rows.len(),
        serde_json::to_string(&table.format)?,
        path.display()
    );

    let json = serde_json::to_string_pretty(&table)?;
    if let Some(output_path) = output {
        std::fs::write(output_path, json)?;
        println!("Table exported to {}", output_path);
    } else {
        println!("{}", json);
    }
    Ok(())
}

fn wiki_url(config: &Config, query: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", wiki::search_url(&config.wiki, query)?);
    Ok(())
}

fn wiki_parse(config: &Config, path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let body = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => input_or_stdin(None)?,
    };
    config.limits.check(&body)?;

    let hits = wiki::parse_search_response(&body)?;
    if hits.is_empty() {
        println!("No results");
    }
    for hit in &hits {
        println!("{}", hit.title);
        println!("  {}", hit.plain_snippet());
        println!("  {}", hit.article_url(&config.wiki));
    }
    Ok(())
}
