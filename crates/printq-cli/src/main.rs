//! printq — queue local files and upload them to a print endpoint.
//!
//! Set PRINTQ_BACKEND_URL (or BACKEND_URL) to point at the backend;
//! uploads go to `{base_url}/upload`.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use printq_api_client::ApiClient;
use printq_cli::{init_tracing, session};
use printq_core::{ColorMode, Duplex, JobUpdate, PrintJob, PrintQueue};

#[derive(Parser)]
#[command(name = "printq", about = "Upload files to a print endpoint")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload files in one pass, applying the same settings to each
    Submit {
        /// Files to upload
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Color mode: bw or color
        #[arg(long, default_value = "bw")]
        color: ColorMode,
        /// Number of copies (minimum 1)
        #[arg(long, default_value_t = 1)]
        copies: u32,
        /// Print on both sides: yes or no
        #[arg(long, default_value = "yes")]
        duplex: Duplex,
    },
    /// Interactive session: add files, edit per-job settings, submit
    Session {
        /// Files to queue before the prompt starts
        files: Vec<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let client = ApiClient::from_env()
        .context("Failed to create API client. Check PRINTQ_BACKEND_URL (or BACKEND_URL)")?;

    match cli.command {
        Commands::Submit {
            files,
            color,
            copies,
            duplex,
        } => {
            let copies = copies.max(1);

            let mut queue = PrintQueue::new();
            queue.append(files.into_iter().map(PrintJob::new));
            let ids: Vec<_> = queue.jobs().iter().map(|job| job.id).collect();
            for id in ids {
                queue.update(
                    id,
                    JobUpdate {
                        color: Some(color),
                        copies: Some(copies),
                        duplex: Some(duplex),
                    },
                );
            }

            let outcomes = client.submit_all(queue.jobs()).await;
            for outcome in &outcomes {
                match &outcome.result {
                    Ok(ack) => println!(
                        "{}: {}",
                        outcome.filename,
                        ack.message.as_deref().unwrap_or("")
                    ),
                    Err(err) => println!("{}: upload failed: {:#}", outcome.filename, err),
                }
            }
        }
        Commands::Session { files } => {
            let mut queue = PrintQueue::new();
            queue.append(files.into_iter().map(PrintJob::new));

            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            session::run(&client, &mut queue, stdin.lock(), &mut stdout).await?;
        }
    }

    Ok(())
}
