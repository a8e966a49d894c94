//! In-memory queue of pending print jobs.
//!
//! The queue is the single session-scoped store: jobs are appended at
//! intake, edited field-by-field, and read out in insertion order by
//! the submission pass. Nothing here persists across runs.

use tracing::debug;
use uuid::Uuid;

use crate::models::{ColorMode, Duplex, JobUpdate, PrintJob};

/// Ordered collection of pending print jobs for one session.
///
/// Mutations rebuild the job list and replace it wholesale rather than
/// patching entries in place, so readers only ever observe a complete
/// snapshot. Updates and removals targeting an unknown id are silent
/// no-ops.
#[derive(Debug, Clone, Default)]
pub struct PrintQueue {
    jobs: Vec<PrintJob>,
}

impl PrintQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append newly selected jobs, preserving selection order. No
    /// duplicate detection: selecting the same file twice queues it
    /// twice.
    pub fn append(&mut self, jobs: impl IntoIterator<Item = PrintJob>) {
        let before = self.jobs.len();
        self.jobs.extend(jobs);
        debug!(
            added = self.jobs.len() - before,
            total = self.jobs.len(),
            "jobs queued"
        );
    }

    /// Apply a partial update to the job with the given id, leaving
    /// every other field and the queue order untouched.
    pub fn update(&mut self, id: Uuid, delta: JobUpdate) {
        self.jobs = std::mem::take(&mut self.jobs)
            .into_iter()
            .map(|job| {
                if job.id == id {
                    PrintJob {
                        color: delta.color.unwrap_or(job.color),
                        copies: delta.copies.unwrap_or(job.copies),
                        duplex: delta.duplex.unwrap_or(job.duplex),
                        ..job
                    }
                } else {
                    job
                }
            })
            .collect();
    }

    /// Drop the job with the given id.
    pub fn remove(&mut self, id: Uuid) {
        self.jobs = std::mem::take(&mut self.jobs)
            .into_iter()
            .filter(|job| job.id != id)
            .collect();
        debug!(total = self.jobs.len(), "job removed");
    }

    pub fn set_color(&mut self, id: Uuid, color: ColorMode) {
        self.update(id, JobUpdate::color(color));
    }

    pub fn set_duplex(&mut self, id: Uuid, duplex: Duplex) {
        self.update(id, JobUpdate::duplex(duplex));
    }

    /// Increase the copy count by one. No upper bound.
    pub fn increment_copies(&mut self, id: Uuid) {
        if let Some(copies) = self.copies_of(id) {
            self.update(id, JobUpdate::copies(copies + 1));
        }
    }

    /// Decrease the copy count by one, clamped so it never drops
    /// below 1.
    pub fn decrement_copies(&mut self, id: Uuid) {
        if let Some(copies) = self.copies_of(id) {
            self.update(id, JobUpdate::copies(copies.saturating_sub(1).max(1)));
        }
    }

    /// Current jobs in insertion order. Callers must not rely on this
    /// view after a mutation.
    pub fn jobs(&self) -> &[PrintJob] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    fn copies_of(&self, id: Uuid) -> Option<u32> {
        self.jobs.iter().find(|job| job.id == id).map(|job| job.copies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn queue_with(names: &[&str]) -> PrintQueue {
        let mut queue = PrintQueue::new();
        queue.append(names.iter().map(|n| PrintJob::new(format!("/tmp/{}", n))));
        queue
    }

    #[test]
    fn test_append_keeps_selection_order_and_defaults() {
        let queue = queue_with(&["a.pdf", "b.pdf", "c.pdf"]);

        assert_eq!(queue.len(), 3);
        let names: Vec<&str> = queue.jobs().iter().map(|j| j.filename.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "b.pdf", "c.pdf"]);
        for job in queue.jobs() {
            assert_eq!(job.color, ColorMode::Bw);
            assert_eq!(job.copies, 1);
            assert_eq!(job.duplex, Duplex::Yes);
        }
    }

    #[test]
    fn test_append_assigns_unique_ids() {
        let queue = queue_with(&["a.pdf", "a.pdf", "a.pdf"]);
        let mut ids: Vec<Uuid> = queue.jobs().iter().map(|j| j.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 3);
    }

    #[test]
    fn test_update_touches_only_named_fields() {
        let mut queue = queue_with(&["a.pdf", "b.pdf"]);
        let id = queue.jobs()[0].id;

        queue.set_color(id, ColorMode::Color);

        let job = &queue.jobs()[0];
        assert_eq!(job.color, ColorMode::Color);
        assert_eq!(job.copies, 1);
        assert_eq!(job.duplex, Duplex::Yes);
        // Second job untouched.
        assert_eq!(queue.jobs()[1].color, ColorMode::Bw);
    }

    #[test]
    fn test_color_toggle_is_exclusive_and_idempotent() {
        let mut queue = queue_with(&["a.pdf"]);
        let id = queue.jobs()[0].id;

        queue.set_color(id, ColorMode::Color);
        queue.set_color(id, ColorMode::Bw);
        queue.set_color(id, ColorMode::Bw);

        assert_eq!(queue.jobs()[0].color, ColorMode::Bw);
    }

    #[test]
    fn test_increment_copies_has_no_ceiling() {
        let mut queue = queue_with(&["a.pdf"]);
        let id = queue.jobs()[0].id;

        for _ in 0..100 {
            queue.increment_copies(id);
        }

        assert_eq!(queue.jobs()[0].copies, 101);
    }

    #[test]
    fn test_decrement_copies_clamps_at_one() {
        let mut queue = queue_with(&["a.pdf"]);
        let id = queue.jobs()[0].id;

        queue.increment_copies(id);
        queue.decrement_copies(id);
        assert_eq!(queue.jobs()[0].copies, 1);

        // Repeated decrements stay floored at 1.
        queue.decrement_copies(id);
        queue.decrement_copies(id);
        assert_eq!(queue.jobs()[0].copies, 1);
    }

    #[test]
    fn test_remove_drops_exactly_the_targeted_job() {
        let mut queue = queue_with(&["a.pdf", "b.pdf", "c.pdf"]);
        let id = queue.jobs()[1].id;
        let last = queue.jobs()[2].id;
        queue.increment_copies(last);

        queue.remove(id);

        let names: Vec<&str> = queue.jobs().iter().map(|j| j.filename.as_str()).collect();
        assert_eq!(names, vec!["a.pdf", "c.pdf"]);
        assert_eq!(queue.jobs()[1].copies, 2);
    }

    #[test]
    fn test_unknown_id_is_a_no_op() {
        let mut queue = queue_with(&["a.pdf"]);
        let stranger = Uuid::new_v4();

        queue.update(stranger, JobUpdate::copies(9));
        queue.remove(stranger);
        queue.increment_copies(stranger);
        queue.decrement_copies(stranger);

        assert_eq!(queue.len(), 1);
        assert_eq!(queue.jobs()[0].copies, 1);
    }

    #[test]
    fn test_empty_queue() {
        let queue = PrintQueue::new();
        assert!(queue.is_empty());
        assert!(queue.jobs().is_empty());
    }
}
