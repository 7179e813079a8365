use clap::{Parser as ClapParser, Subcommand};
use rsql_filter::cli::{self, CheckOptions, CheckResult, CliError, OutputFormat};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "rsql")]
#[command(about = "rsql - Parse RSQL/FIQL filter queries into an AST")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a query and print its AST
    Check {
        /// The filter query (reads from stdin if not provided)
        query: Option<String>,

        /// Output format: tree, json or rsql
        #[arg(short, long, env = "RSQL_FORMAT", default_value = "tree")]
        format: OutputFormat,

        /// Pretty-print JSON output
        #[arg(short, long)]
        pretty: bool,

        /// Only validate syntax, don't print the AST
        #[arg(long)]
        syntax_only: bool,
    },

    /// Print the tokens of a query
    Tokens {
        /// The filter query (reads from stdin if not provided)
        query: Option<String>,
    },

    /// List documentation categories
    Docs,

    /// Show documentation for a specific category
    Doc {
        /// Category name (use 'rsql docs' to list categories)
        category: String,
    },
}

fn main() {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let result = match cli.command {
        Commands::Check {
            query,
            format,
            pretty,
            syntax_only,
        } => run_check(query, format, pretty, syntax_only),
        Commands::Tokens { query } => read_query(query).map(|query| {
            println!("{}", cli::render_tokens(&query));
        }),
        Commands::Docs => {
            print!("{}", cli::get_docs_overview());
            Ok(())
        }
        Commands::Doc { category } => cli::get_doc_category(&category).map(|content| {
            print!("{}", content);
        }),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new().filter_level(log_level).init();
}

fn read_query(query: Option<String>) -> Result<String, CliError> {
    match query {
        Some(q) => Ok(q),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer.trim().to_string())
        }
        None => Err(CliError::NoInput),
    }
}

fn run_check(
    query: Option<String>,
    format: OutputFormat,
    pretty: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let options = CheckOptions {
        query: read_query(query)?,
        format,
        pretty,
        syntax_only,
    };

    match cli::execute_check(&options)? {
        CheckResult::SyntaxValid => println!("Syntax is valid"),
        CheckResult::Rendered(output) => println!("{}", output),
    }
    Ok(())
}
