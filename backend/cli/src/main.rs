use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use chrono::{DateTime, Local};
use clap::Parser;

use caderno_config::{default_title, timestamp, CadernoConfig, DEFAULT_PROMPT};
use caderno_core::{CadernoError, ExtractionOutcome, ExtractionRequest};
use caderno_extract::ExtractionPipeline;
use caderno_transcribe::GeminiClient;
use docwriter::DocxSink;

#[derive(Parser)]
#[command(name = "caderno")]
#[command(about = "Extract handwritten text from a photographed page into a Word document")]
#[command(version)]
struct Cli {
    /// Path to the image file (e.g. notebook_page.jpg)
    image_path: PathBuf,

    /// Prompt guiding the text extraction
    #[arg(long, default_value = DEFAULT_PROMPT)]
    prompt: String,

    /// Document title
    #[arg(long = "titulo")]
    title: Option<String>,

    /// File name (without extension) for the saved document
    #[arg(long = "nome")]
    name: Option<String>,

    /// Full destination path for the document; overrides --nome
    #[arg(long = "doc")]
    doc: Option<PathBuf>,
}

/// Everything a run needs before any network or filesystem work starts.
#[derive(Debug)]
struct RunPlan {
    api_key: String,
    title: String,
    destination: PathBuf,
}

/// Pre-flight: resolve credential, title, and destination from flags and
/// config. Fails without touching the network when no API key is set.
fn plan_run(
    cli: &Cli,
    config: &CadernoConfig,
    now: DateTime<Local>,
) -> Result<RunPlan, CadernoError> {
    let api_key = config
        .api_key
        .clone()
        .ok_or(CadernoError::MissingCredential)?;

    let title = cli.title.clone().unwrap_or_else(|| default_title(now));
    let destination = match &cli.doc {
        Some(path) => path.clone(),
        None => {
            let name = cli.name.clone().unwrap_or_else(|| timestamp(now));
            config.destination_for(&name)
        }
    };

    Ok(RunPlan {
        api_key,
        title,
        destination,
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CadernoConfig::from_env();
    logging::init_logger(&config.log_dir, &config.log_level);

    let plan = match plan_run(&cli, &config, Local::now()) {
        Ok(plan) => plan,
        Err(_) => {
            eprintln!("Error: no API key configured.");
            eprintln!("Set GEMINI_API_KEY (or GOOGLE_API_KEY) to your Google AI Studio key.");
            std::process::exit(1);
        }
    };

    let pipeline = ExtractionPipeline::new(
        Arc::new(GeminiClient::new(plan.api_key, config.model.clone())),
        Arc::new(DocxSink::new()),
    );

    let request = ExtractionRequest::new(cli.image_path, cli.prompt);
    println!(
        "Sending image '{}' for analysis...",
        request.image_path.display()
    );

    // Per-request failures are reported and still exit 0; only the missing
    // credential above is a non-zero exit.
    match pipeline.run(&request, &plan.title, &plan.destination).await {
        ExtractionOutcome::Saved {
            destination,
            paragraph_count,
        } => {
            println!(
                "Document saved: {} ({paragraph_count} paragraphs)",
                destination.display()
            );
        }
        ExtractionOutcome::NothingToSave => {
            println!("No handwritten text found in the image; nothing to save.");
        }
        ExtractionOutcome::Failed(e) => {
            println!("{e}");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::HashMap;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(args).unwrap()
    }

    fn config(pairs: &[(&str, &str)]) -> CadernoConfig {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        CadernoConfig::from_env_map(&env)
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 10, 30, 0).unwrap()
    }

    #[test]
    fn missing_credential_fails_before_anything_else() {
        let cli = parse(&["caderno", "page.png"]);
        let err = plan_run(&cli, &config(&[]), fixed_now()).unwrap_err();
        assert!(matches!(err, CadernoError::MissingCredential));
    }

    #[test]
    fn credential_flows_into_the_plan() {
        let cli = parse(&["caderno", "page.png"]);
        let plan = plan_run(&cli, &config(&[("GEMINI_API_KEY", "k")]), fixed_now()).unwrap();
        assert_eq!(plan.api_key, "k");
    }

    #[test]
    fn doc_flag_overrides_nome() {
        let cli = parse(&["caderno", "page.png", "--nome", "ignored", "--doc", "/tmp/out.docx"]);
        let cfg = config(&[("GEMINI_API_KEY", "k"), ("CADERNO_DOCUMENTS_DIR", "/docs")]);
        let plan = plan_run(&cli, &cfg, fixed_now()).unwrap();
        assert_eq!(plan.destination, PathBuf::from("/tmp/out.docx"));
    }

    #[test]
    fn nome_names_the_document_in_the_documents_dir() {
        let cli = parse(&["caderno", "page.png", "--nome", "diary"]);
        let cfg = config(&[("GEMINI_API_KEY", "k"), ("CADERNO_DOCUMENTS_DIR", "/docs")]);
        let plan = plan_run(&cli, &cfg, fixed_now()).unwrap();
        assert_eq!(plan.destination, PathBuf::from("/docs/diary.docx"));
    }

    #[test]
    fn defaults_use_the_run_timestamp() {
        let cli = parse(&["caderno", "page.png"]);
        let cfg = config(&[("GEMINI_API_KEY", "k"), ("CADERNO_DOCUMENTS_DIR", "/docs")]);
        let plan = plan_run(&cli, &cfg, fixed_now()).unwrap();
        assert_eq!(plan.title, "Document created on 2024-05-01_10:30:00");
        assert_eq!(plan.destination, PathBuf::from("/docs/2024-05-01_10:30:00.docx"));
    }
}
