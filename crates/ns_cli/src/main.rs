use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use ns_analysis::build_company_report;
use ns_core::{Result, SpeechSynthesizer};
use ns_extract::NewsExtractor;
use ns_nlp::{classify_articles, create_model, Config};
use ns_speech::{summary_text, GoogleSpeech};
use ns_web::{create_app, AppState};
use tracing::{info, Level};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Sentiment model to use (lexicon, remote, dummy)
    #[arg(long, default_value = "lexicon")]
    model: String,
    /// API key for the remote model
    #[arg(long)]
    api_key: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch news articles for a company
    News {
        company: String,
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Fetch, classify and build the comparative report
    Analyze {
        company: String,
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Build the report and write the spoken summary as MP3
    Speak {
        company: String,
        #[arg(long, default_value = "summary.mp3")]
        output: PathBuf,
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Run the HTTP API
    Serve {
        #[arg(long, default_value_t = 5000)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();
    let config = Config {
        api_key: cli.api_key.clone(),
        ..Config::default()
    };
    let model = create_model(&cli.model, &config)?;
    let extractor = NewsExtractor::new()?;

    match cli.command {
        Commands::News { company, count } => {
            let articles = extractor.company_news(&company, count).await?;
            info!("📰 {} articles for {}", articles.len(), company);
            for article in articles {
                println!("- {} ({})", article.title, article.url);
            }
        }
        Commands::Analyze { company, count } => {
            let articles = extractor.company_news(&company, count).await?;
            let records = classify_articles(model.as_ref(), &articles).await?;
            let report = build_company_report(&company, records)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Speak {
            company,
            output,
            count,
        } => {
            let articles = extractor.company_news(&company, count).await?;
            let records = classify_articles(model.as_ref(), &articles).await?;
            let report = build_company_report(&company, records)?;

            let synthesizer = GoogleSpeech::new();
            let text = summary_text(&report);
            info!("Summary: {}", text);
            let audio = synthesizer.synthesize(&text).await?;
            tokio::fs::write(&output, &audio).await?;
            info!("🔊 Wrote {} bytes to {}", audio.len(), output.display());
        }
        Commands::Serve { port } => {
            let state = AppState {
                extractor,
                model,
                synthesizer: Arc::new(GoogleSpeech::new()),
            };
            let app = create_app(state).await;
            let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
            info!("🚀 Listening on port {}", port);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
