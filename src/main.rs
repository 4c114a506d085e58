use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{ArgGroup, Parser, Subcommand};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use parlance::{
    read_transcript_file, write_json, ChatConfig, CoachClient, EvaluationError, EvaluationOutput,
    EvaluationReport, Evaluator, EvaluatorConfig, FillerConfig, FillerCounting, HttpTagger,
    ScoringConfig, TaggerConfig, VaderScorer, WhisperClient, WhisperConfig,
};

#[derive(Parser)]
#[command(name = "parlance")]
#[command(author, version, about = "Score interview answers for fillers, clarity and tone", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an interview answer
    #[command(group(ArgGroup::new("source").required(true).args(["text", "input", "audio"])))]
    Evaluate {
        /// Transcript text given inline
        #[arg(long)]
        text: Option<String>,

        /// Transcript file (plain text, or JSON with a "text" field)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Audio file to transcribe first (.mp3, .wav, .m4a)
        #[arg(short, long)]
        audio: Option<PathBuf>,

        /// Keep a leading interviewer question instead of stripping it
        #[arg(long)]
        keep_question: bool,

        /// Count the words of a filler phrase again as single fillers
        #[arg(long)]
        overlapping_fillers: bool,

        /// JSON file overriding the scoring thresholds
        #[arg(long)]
        thresholds: Option<PathBuf>,

        /// Part-of-speech tagging service endpoint
        #[arg(long, env = "PARLANCE_TAGGER_URL")]
        tagger_url: String,

        /// Print the result as JSON instead of a text report
        #[arg(long)]
        json: bool,

        /// Also write the JSON result to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Generate supportive coaching feedback with an LLM (needs OPENROUTER_API_KEY)
        #[arg(long)]
        coach: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Transcribe an audio file and print the text
    Transcribe {
        /// Audio file (.mp3, .wav, .m4a)
        #[arg(short, long)]
        audio: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

/// Where the transcript comes from
enum Source {
    Text(String),
    File(PathBuf),
    Audio(PathBuf),
}

struct EvaluateOptions {
    strip_question: bool,
    counting: FillerCounting,
    thresholds: Option<PathBuf>,
    tagger_url: String,
    json: bool,
    output: Option<PathBuf>,
    coach: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Evaluate {
            text,
            input,
            audio,
            keep_question,
            overlapping_fillers,
            thresholds,
            tagger_url,
            json,
            output,
            coach,
            verbose,
        } => {
            setup_logging(verbose);
            let source = match (text, input, audio) {
                (Some(text), _, _) => Source::Text(text),
                (_, Some(path), _) => Source::File(path),
                (_, _, Some(path)) => Source::Audio(path),
                _ => anyhow::bail!("One of --text, --input or --audio is required"),
            };
            let options = EvaluateOptions {
                strip_question: !keep_question,
                counting: if overlapping_fillers {
                    FillerCounting::Overlapping
                } else {
                    FillerCounting::Exclusive
                },
                thresholds,
                tagger_url,
                json,
                output,
                coach,
            };
            evaluate_answer(source, options).await
        }
        Commands::Transcribe { audio, verbose } => {
            setup_logging(verbose);
            let client = WhisperClient::new(WhisperConfig::from_env());
            let transcript = client.transcribe(&audio).await?;
            println!("{}", transcript.trim());
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

async fn load_transcript(source: Source) -> Result<String> {
    match source {
        Source::Text(text) => Ok(text),
        Source::File(path) => {
            info!("Loading transcript from {:?}", path);
            read_transcript_file(&path)
        }
        Source::Audio(path) => {
            let client = WhisperClient::new(WhisperConfig::from_env());
            client.transcribe(&path).await
        }
    }
}

async fn evaluate_answer(source: Source, options: EvaluateOptions) -> Result<ExitCode> {
    // Decided once, before any work: missing credentials disable coaching
    let coach = if options.coach {
        match ChatConfig::from_env() {
            Ok(config) => Some(CoachClient::new(config)),
            Err(e) => {
                warn!("Coaching feedback disabled: {:#}", e);
                None
            }
        }
    } else {
        None
    };

    let scoring = match &options.thresholds {
        Some(path) => ScoringConfig::from_json_file(path)?,
        None => ScoringConfig::default(),
    };

    let transcript = load_transcript(source).await?;

    let config = EvaluatorConfig {
        strip_question: options.strip_question,
        fillers: FillerConfig {
            counting: options.counting,
            ..Default::default()
        },
        scoring: scoring.clone(),
    };
    let tagger_config = TaggerConfig::new(options.tagger_url);

    // The tagger client blocks, so the whole evaluation runs off the runtime
    let outcome = tokio::task::spawn_blocking(move || -> Result<_> {
        let tagger = HttpTagger::new(tagger_config)?;
        let evaluator = Evaluator::with_config(tagger, VaderScorer::new(), config)?;
        Ok(evaluator.analyze(&transcript))
    })
    .await
    .context("Evaluation task panicked")??;

    let analysis = match outcome {
        Ok(analysis) => analysis,
        Err(e) => return report_failure(e, options.json),
    };
    let result = &analysis.result;

    let coaching = match &coach {
        Some(client) => {
            info!("Generating coaching feedback with {}", client.model());
            match client.generate(&analysis.answer, result).await {
                Ok(text) => Some(text),
                Err(e) => {
                    warn!("Coaching feedback failed: {:#}", e);
                    None
                }
            }
        }
        None => None,
    };

    let output = EvaluationOutput {
        result,
        coaching: coaching.as_deref(),
    };

    if let Some(path) = &options.output {
        write_json(&output, path)?;
        info!("Result written to {:?}", path);
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        let mut report = EvaluationReport::from_analysis(&analysis, &scoring);
        if let Some(text) = coaching.as_deref() {
            report = report.with_coaching(text);
        }
        print!("{}", report.format());
    }

    Ok(ExitCode::SUCCESS)
}

/// Input errors are reported and exit with status 2; collaborator errors propagate
fn report_failure(error: EvaluationError, json: bool) -> Result<ExitCode> {
    let Some(report) = error.to_report() else {
        return Err(error.into());
    };

    if json {
        println!("{}", serde_json::to_string(&report)?);
    } else {
        eprintln!("Error: {}", report.error);
    }
    Ok(ExitCode::from(2))
}
