// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use autosummary::utils::logging::{
    format_error, format_info, format_success, format_summary_header, init_logger,
};
use autosummary::{Config, Language, SummaryService, Validator};
use clap::{ArgAction, Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "autosummary")]
#[command(author = "cipher")]
#[command(version)]
#[command(about = "Extractive summaries of text and web pages", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web UI
    Serve {
        #[arg(long, env = "AUTOSUMMARY_HOST")]
        host: Option<String>,

        #[arg(short, long, env = "AUTOSUMMARY_PORT")]
        port: Option<u16>,
    },

    /// Summarize text or a URL; reads stdin when INPUT is omitted
    Summarize {
        input: Option<String>,

        #[arg(short, long)]
        language: Option<String>,

        /// Number of sentences, or a percentage such as 20%
        #[arg(short, long)]
        sentences: Option<String>,

        /// lsa, lexrank, luhn or textrank
        #[arg(short, long)]
        algorithm: Option<String>,
    },

    /// List supported languages
    Languages,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logger(cli.color, cli.verbose);

    let config = if cli.config.exists() {
        info!("Loading configuration from: {}", cli.config.display());
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    match cli.command {
        Commands::Serve { host, port } => {
            cmd_serve(config, host, port).await?;
        }
        Commands::Summarize {
            input,
            language,
            sentences,
            algorithm,
        } => {
            cmd_summarize(&config, input, language, sentences, algorithm).await?;
        }
        Commands::Languages => {
            cmd_languages();
        }
    }

    Ok(())
}

async fn cmd_serve(mut config: Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        Validator::validate_port(port)?;
        config.server.port = port;
    }

    println!(
        "{}",
        format_info(&format!(
            "AutoSummary listening on http://{}:{}",
            config.server.host, config.server.port
        ))
    );

    autosummary::server::serve(config)
        .await
        .context("Web server failed")
}

async fn cmd_summarize(
    config: &Config,
    input: Option<String>,
    language: Option<String>,
    sentences: Option<String>,
    algorithm: Option<String>,
) -> Result<()> {
    let input = match input {
        Some(input) => input,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read input from stdin")?;
            buffer
        }
    };

    let defaults = &config.summary;
    let language = language.unwrap_or_else(|| defaults.default_language.code().to_string());
    let sentences = sentences.unwrap_or_else(|| defaults.default_sentences.to_string());
    let algorithm = algorithm.unwrap_or_else(|| defaults.default_algorithm.code().to_string());

    let service = SummaryService::from_config(config).context("Failed to build summarizer")?;

    match service
        .handle_fields(&input, &language, &sentences, &algorithm)
        .await
    {
        Ok(result) => {
            eprintln!(
                "{}",
                format_summary_header(
                    result.algorithm.label(),
                    result.len(),
                    result.source_sentences
                )
            );
            if let Some(title) = &result.title {
                eprintln!("{}", format_success(title));
            }
            println!("{}", result);
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", format_error(&e.to_string()));
            Err(e).context("Summarization failed")
        }
    }
}

fn cmd_languages() {
    for language in Language::ALL {
        println!("{:<12} {}", language.code(), language.label());
    }
}
