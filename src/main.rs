mod report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use http_utils::{
    append_query, build_url, parse_query_string, parse_query_string_decoded, ClientConfig,
    HttpClient, VERSION,
};
use report::Table;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "http-utils", version, about = "HTTP utility demonstrations")]
struct Cli {
    /// TOML config file; environment variables are used when absent
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Run every demonstration
    Demo,

    /// Join a base URL and a path
    BuildUrl { base: String, path: String },

    /// Parse a query string into a key/value table
    ParseQuery {
        query: String,

        /// Decode percent escapes and `+`
        #[arg(long)]
        decode: bool,
    },

    /// GET a path under the configured base URL and print its JSON body
    Fetch { path: String },
}

fn main() {
    // Logs go to stderr so the tables on stdout stay clean.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "http_utils=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if dotenvy::dotenv().is_ok() {
        tracing::info!("Loaded .env");
    }

    if let Err(err) = run(Cli::parse()) {
        eprintln!("\n{} {:#}", "ERROR:".red().bold(), err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::from_env()?,
    };
    tracing::debug!(
        "Configuration loaded: base_url={}, timeout={}s",
        config.base_url,
        config.timeout_secs
    );

    match cli.command.unwrap_or(Command::Demo) {
        Command::Demo => demo(&config),
        Command::BuildUrl { base, path } => {
            println!("{}", build_url(&base, &path));
            Ok(())
        }
        Command::ParseQuery { query, decode } => {
            let parsed = if decode {
                parse_query_string_decoded(&query)
            } else {
                parse_query_string(&query)
            };
            let mut table = Table::new(["Key", "Value"]);
            for (key, value) in sorted(&parsed) {
                table.push_row([key.as_str(), value.as_str()]);
            }
            print!("{}", table);
            Ok(())
        }
        Command::Fetch { path } => {
            let client = HttpClient::from_config(&config)?;
            let body = client
                .fetch_json::<serde_json::Value>(&path)
                .with_context(|| format!("failed to fetch {}", client.url_for(&path)))?;
            println!("{}", serde_json::to_string_pretty(&body)?);
            Ok(())
        }
    }
}

fn demo(config: &ClientConfig) -> Result<()> {
    print_separator(&format!("HTTP Utilities v{}", VERSION));
    println!();

    println!("{}", "HTTP Utility Demonstrations:".cyan().bold());
    println!("{}", "-".repeat(60));

    println!("\n{}", "BuildURL Tests:".yellow());
    let mut urls = Table::new(["Base URL", "Path", "Result"]);
    for (base, path) in [
        ("https://api.example.com", "/v1/users"),
        ("https://api.example.com/", "v1/users"),
        ("http://localhost:3000///", "//todos"),
    ] {
        urls.push_row([base.to_string(), path.to_string(), build_url(base, path)]);
    }
    print!("{}", urls);

    println!("\n{}", "Query Building Tests:".yellow());
    let mut queries = Table::new(["Base URL", "Parameters", "Result"]);
    let searches: [(&str, &[(&str, &str)]); 2] = [
        ("https://api.example.com/search", &[("q", "golang"), ("limit", "10")]),
        ("https://example.com", &[("foo", "bar"), ("baz", "qux quux")]),
    ];
    for (base, params) in searches {
        queries.push_row([
            base.to_string(),
            format!("{:?}", params),
            append_query(base, params),
        ]);
    }
    print!("{}", queries);

    println!("\n{}", "ParseQueryString Tests:".yellow());
    let mut parsed = Table::new(["Query String", "Parsed Result", "Decoded"]);
    for query in ["name=John&age=30&city=NYC", "search=go+lang&page=1", "a=1&b", ""] {
        parsed.push_row([
            query.to_string(),
            format!("{:?}", sorted(&parse_query_string(query))),
            format!("{:?}", sorted(&parse_query_string_decoded(query))),
        ]);
    }
    print!("{}", parsed);

    println!("\n{}", "HTTPClient Test:".yellow());
    let client = HttpClient::from_config(config).context("failed to create HTTP client")?;
    println!("{}", "✓ HTTPClient created successfully".green());
    println!("{}", format!("✓ Client base URL: {}", client.base_url()).green());
    println!(
        "{}",
        format!("✓ Client timeout: {}s", client.timeout().as_secs()).green()
    );
    println!(
        "{}",
        format!("✓ Resolved /v1/users: {}", client.url_for("/v1/users")).green()
    );

    println!("\n{}", "Empty Input Test:".cyan());
    let empty = build_url("", "");
    if empty == "/" {
        println!("{}", "✓ Empty URL handled correctly".green());
    } else {
        anyhow::bail!("build_url(\"\", \"\") returned {:?}", empty);
    }

    println!();
    print_separator("HTTP Utilities executed successfully!");
    Ok(())
}

fn sorted(map: &HashMap<String, String>) -> BTreeMap<&String, &String> {
    map.iter().collect()
}

fn print_separator(title: &str) {
    println!("{}", "=".repeat(60));
    if !title.is_empty() {
        println!("{}", title);
        println!("{}", "=".repeat(60));
    }
}
