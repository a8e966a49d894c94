//! Domain methods for the upload client: single-job upload and the
//! sequential submission pass.

use anyhow::{Context, Result};
use printq_core::PrintJob;
use tracing::{error, info};
use uuid::Uuid;

use crate::ApiClient;

/// Upload endpoint acknowledgement. Only `message` is consumed; any
/// other JSON shape is accepted and ignored.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct UploadAck {
    #[serde(default)]
    pub message: Option<String>,
}

/// Result of one job within a submission pass.
#[derive(Debug)]
pub struct SubmitOutcome {
    pub job_id: Uuid,
    pub filename: String,
    pub result: Result<UploadAck>,
}

impl SubmitOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }
}

impl ApiClient {
    /// Upload one print job: a multipart POST carrying the file bytes
    /// under `file` (original filename preserved) plus the `color`,
    /// `copies`, and `bothSides` settings as text fields.
    pub async fn upload_job(&self, job: &PrintJob) -> Result<UploadAck> {
        let buffer = std::fs::read(&job.path)
            .with_context(|| format!("Failed to read file: {}", job.path.display()))?;

        let form = reqwest::multipart::Form::new()
            .part(
                "file",
                reqwest::multipart::Part::bytes(buffer).file_name(job.filename.clone()),
            )
            .text("color", job.color.as_str())
            .text("copies", job.copies.to_string())
            .text("bothSides", job.duplex.as_str());

        self.post_multipart("/upload", form).await
    }

    /// Run one submission pass over the given jobs, strictly in order.
    ///
    /// Each upload is awaited to completion before the next starts. A
    /// failed job (unreadable file, transport error, non-JSON body) is
    /// logged and recorded but never aborts the rest of the pass. Jobs
    /// are not retried and the caller's queue is left untouched.
    pub async fn submit_all(&self, jobs: &[PrintJob]) -> Vec<SubmitOutcome> {
        let mut outcomes = Vec::with_capacity(jobs.len());

        for job in jobs {
            let result = self.upload_job(job).await;
            match &result {
                Ok(ack) => {
                    info!(
                        file = %job.filename,
                        message = ack.message.as_deref().unwrap_or(""),
                        "upload succeeded"
                    );
                }
                Err(err) => {
                    error!(file = %job.filename, error = %err, "upload failed");
                }
            }
            outcomes.push(SubmitOutcome {
                job_id: job.id,
                filename: job.filename.clone(),
                result,
            });
        }

        outcomes
    }
}
