use std::path::PathBuf;

use clap::{Parser, Subcommand};
use reqwest::multipart::{Form, Part};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "anagram-cli")]
#[command(about = "Client for the anagram finder service", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    server: String,

    #[arg(short, long, default_value = "sort_and_group")]
    algorithm: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Group comma-separated words, e.g. `listen,silent,cat,tac`
    Text { words: String },
    /// Upload a file with one word per line
    File { path: PathBuf },
    /// Let the server fetch a word list from a URL
    Url { url: String },
    /// Check that the server is up
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let endpoint = format!("{}/anagram", cli.server.trim_end_matches('/'));

    let res = match cli.command {
        Commands::Text { words } => {
            client
                .post(&endpoint)
                .json(&json!({
                    "inputType": "inline_text",
                    "inputData": words,
                    "algorithm": cli.algorithm,
                }))
                .send()
                .await?
        }
        Commands::Url { url } => {
            client
                .post(&endpoint)
                .json(&json!({
                    "inputType": "remote_url",
                    "inputData": url,
                    "algorithm": cli.algorithm,
                }))
                .send()
                .await?
        }
        Commands::File { path } => {
            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "words.txt".to_string());
            let contents = tokio::fs::read(&path).await?;
            let form = Form::new()
                .text("inputType", "uploaded_file")
                .text("algorithm", cli.algorithm)
                .part("file", Part::bytes(contents).file_name(file_name));
            client.post(&endpoint).multipart(form).send().await?
        }
        Commands::Health => {
            client
                .get(format!("{}/health", cli.server.trim_end_matches('/')))
                .send()
                .await?
        }
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let json: Value = res.json().await?;

    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        if let Some(message) = json.get("error").and_then(Value::as_str) {
            eprintln!("{}", message);
        }
        std::process::exit(1);
    }

    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
