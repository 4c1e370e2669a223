mod error;
mod logging;
mod model;
mod pipeline;
mod remote;
mod report;
mod server;

#[cfg(test)]
#[path = "../tests/src_inline/support.rs"]
mod test_support;

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::{ArgAction, Args, Parser, Subcommand};

use crate::error::Error;
use crate::model::profile::AnalysisResult;
use crate::pipeline::stage5_report::{ReportFormat, run_stage5};
use crate::pipeline::{EmotionAnalyzer, run_pipeline};
use crate::remote::config::{DEFAULT_ENDPOINT, DEFAULT_MODEL_ID, DEFAULT_TIMEOUT_SECS};
use crate::remote::{AnalyzerConfig, ResponseSchema};

#[derive(Debug, Parser)]
#[command(name = "emotion-detector", version, about)]
struct Cli {
    #[command(flatten)]
    remote: RemoteArgs,

    /// Increase log verbosity (-v debug, -vv trace). RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Args)]
struct RemoteArgs {
    /// Emotion scoring endpoint.
    #[arg(long, env = "EMOTION_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Model id sent in the model-selector header.
    #[arg(long, env = "EMOTION_MODEL_ID", default_value = DEFAULT_MODEL_ID)]
    model_id: String,

    /// document-sentiment | emotion-predictions | pointer:/json/pointer
    #[arg(long, env = "EMOTION_SCHEMA", default_value = "emotion-predictions")]
    schema: ResponseSchema,

    #[arg(long, env = "EMOTION_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    timeout_secs: u64,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Analyze one statement and print the result.
    Analyze {
        #[arg(long)]
        text: Option<String>,

        #[arg(long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
    },
    /// Serve the index page and the /emotionDetector route.
    Serve {
        #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
        host: IpAddr,

        #[arg(long, default_value_t = 5000)]
        port: u16,
    },
}

impl RemoteArgs {
    fn to_config(&self) -> Result<AnalyzerConfig, Error> {
        Ok(AnalyzerConfig::new(
            &self.endpoint,
            &self.model_id,
            self.schema.clone(),
            Duration::from_secs(self.timeout_secs),
        )?)
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(error = %err, "emotion-detector failed");
            eprintln!("{err}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, Error> {
    let analyzer = EmotionAnalyzer::new(cli.remote.to_config()?)?;

    match cli.command {
        Command::Analyze { text, format } => {
            let result = run_pipeline(&analyzer, text.as_deref()).await?;
            let rendered = run_stage5(&result, format)?;
            Ok(match result {
                AnalysisResult::Scored(_) => {
                    println!("{rendered}");
                    ExitCode::SUCCESS
                }
                AnalysisResult::NoResult(reason) => {
                    tracing::info!(reason = reason.describe(), "no emotion result");
                    if format == ReportFormat::Json {
                        println!("{rendered}");
                    } else {
                        eprintln!("{rendered}");
                    }
                    ExitCode::from(2)
                }
            })
        }
        Command::Serve { host, port } => {
            server::serve(Arc::new(analyzer), SocketAddr::new(host, port)).await?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
