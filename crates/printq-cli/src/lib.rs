//! Helpers shared by the printq binary: tracing setup, queue
//! rendering, and the interactive session.

pub mod session;

use printq_core::PrintQueue;

/// Initialize tracing for CLI binaries.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

/// Render the queue as a fixed-width table, one row per job, with the
/// 1-based positions the session commands address jobs by.
pub fn render_queue(queue: &PrintQueue) -> String {
    if queue.is_empty() {
        return "Queue is empty.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<4} {:<40} {:<6} {:>6} {:<6}\n",
        "#", "File", "Color", "Copies", "Duplex"
    ));
    out.push_str(&format!("{}\n", "-".repeat(66)));
    for (i, job) in queue.jobs().iter().enumerate() {
        out.push_str(&format!(
            "{:<4} {:<40} {:<6} {:>6} {:<6}\n",
            i + 1,
            truncate_string(&job.filename, 40),
            job.color.as_str(),
            job.copies,
            job.duplex.as_str()
        ));
    }
    out
}

/// Truncate a string to max_len characters, appending "..." if truncated.
/// Cuts on a char boundary, so multibyte filenames render safely.
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut = s
            .char_indices()
            .nth(max_len.saturating_sub(3))
            .map(|(i, _)| i)
            .unwrap_or(s.len());
        format!("{}...", &s[..cut])
    }
}
