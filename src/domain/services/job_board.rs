#[cfg(test)]
#[path = "job_board_test.rs"]
mod tests;

use std::collections::HashMap;

use anyhow::bail;
use anyhow::Result;

use super::summarizer::summarize;
use crate::domain::models::ApplianceContext;
use crate::domain::models::Author;
use crate::domain::models::Job;
use crate::domain::models::Message;
use crate::domain::models::SavedAppliance;

pub const JOBS_PER_PAGE: usize = 6;

/// Owns every job, its transcript, and the saved appliance profiles. The
/// sidebar and chat window only render views over this state; there is
/// exactly one writer (the UI loop).
#[derive(Default)]
pub struct JobBoard {
    jobs: Vec<Job>,
    messages: HashMap<String, Vec<Message>>,
    appliances: Vec<SavedAppliance>,
    active_id: Option<String>,
}

impl JobBoard {
    pub fn active_id(&self) -> Option<&str> {
        return self.active_id.as_deref();
    }

    pub fn active_job(&self) -> Option<&Job> {
        let active_id = self.active_id.as_deref()?;
        return self.jobs.iter().find(|job| return job.id == active_id);
    }

    pub fn contains(&self, id: &str) -> bool {
        return self.jobs.iter().any(|job| return job.id == id);
    }

    pub fn is_empty(&self) -> bool {
        return self.jobs.is_empty();
    }

    /// Starts a new job and makes it active. When the active job has no
    /// messages yet this is a no-op that returns the existing job, so
    /// mashing "new" never piles up empty jobs.
    pub fn new_job(&mut self) -> Job {
        if let Some(job) = self.active_job() {
            if self.messages(&job.id).is_empty() {
                return job.clone();
            }
        }

        let job = Job::new("New Job");
        tracing::debug!(job_id = job.id, "created job");
        self.active_id = Some(job.id.to_string());
        self.jobs.insert(0, job.clone());
        return job;
    }

    pub fn select(&mut self, id: &str) -> Result<()> {
        if !self.contains(id) {
            bail!(format!("No job found for id {id}"));
        }

        self.active_id = Some(id.to_string());
        return Ok(());
    }

    /// Renames a job in place. Ordering and timestamps are untouched.
    pub fn rename(&mut self, id: &str, title: &str) -> Result<()> {
        let title = title.trim();
        if title.is_empty() {
            bail!("A job title cannot be empty");
        }

        let Some(job) = self.jobs.iter_mut().find(|job| return job.id == id) else {
            bail!(format!("No job found for id {id}"));
        };

        job.title = title.to_string();
        return Ok(());
    }

    /// Flips the pinned flag and returns the new state. The timestamp stays
    /// put so unpinning drops the job back to its natural spot.
    pub fn toggle_pin(&mut self, id: &str) -> Result<bool> {
        let Some(job) = self.jobs.iter_mut().find(|job| return job.id == id) else {
            bail!(format!("No job found for id {id}"));
        };

        job.pinned = !job.pinned;
        return Ok(job.pinned);
    }

    pub fn delete(&mut self, id: &str) -> Result<()> {
        if !self.contains(id) {
            bail!(format!("No job found for id {id}"));
        }

        self.jobs.retain(|job| return job.id != id);
        self.messages.remove(id);
        if self.active_id.as_deref() == Some(id) {
            self.active_id = None;
        }

        tracing::debug!(job_id = id, "deleted job");
        return Ok(());
    }

    /// Appends a message to a job's transcript. On the very first message
    /// the job takes its title from the summarized text and records the
    /// message's job type; later messages never touch either again.
    pub fn push_message(&mut self, job_id: &str, message: Message) -> Result<()> {
        let Some(job) = self.jobs.iter_mut().find(|job| return job.id == job_id) else {
            bail!(format!("No job found for id {job_id}"));
        };

        let transcript = self.messages.entry(job_id.to_string()).or_default();
        if transcript.is_empty() {
            job.title = summarize(&message.text);
            if message.job_type.is_some() {
                job.job_type = message.job_type.clone();
            }
        }

        transcript.push(message);
        return Ok(());
    }

    pub fn messages(&self, job_id: &str) -> &[Message] {
        if let Some(messages) = self.messages.get(job_id) {
            return messages;
        }

        return &[];
    }

    pub fn active_messages(&self) -> &[Message] {
        if let Some(id) = self.active_id.as_deref() {
            return self.messages(id);
        }

        return &[];
    }

    /// Drops the trailing assistant message from the active transcript and
    /// hands back the user message that prompted it, for resubmission.
    pub fn pop_for_regenerate(&mut self) -> Option<Message> {
        let active_id = self.active_id.as_deref()?.to_string();
        let transcript = self.messages.get_mut(&active_id)?;

        if transcript.len() < 2 {
            return None;
        }
        let last_is_assistant = transcript.last()?.author == Author::Assistant;
        let previous_is_user = transcript[transcript.len() - 2].author == Author::User;
        if !last_is_assistant || !previous_is_user {
            return None;
        }

        transcript.pop();
        return transcript.last().cloned();
    }

    /// Jobs in sidebar order: pinned before unpinned, newest first within
    /// each group. The sort is stable so equal timestamps keep insertion
    /// order.
    pub fn ordered(&self) -> Vec<Job> {
        let mut jobs = self.jobs.to_vec();
        jobs.sort_by(|a, b| {
            return b
                .pinned
                .cmp(&a.pinned)
                .then(b.timestamp.cmp(&a.timestamp));
        });

        return jobs;
    }

    pub fn page_count(&self) -> usize {
        return self.jobs.len().div_ceil(JOBS_PER_PAGE);
    }

    /// One sidebar page of the ordered job list.
    pub fn page(&self, page_index: usize) -> Vec<Job> {
        let ordered = self.ordered();
        let start = page_index * JOBS_PER_PAGE;
        if start >= ordered.len() {
            return vec![];
        }

        let end = (start + JOBS_PER_PAGE).min(ordered.len());
        return ordered[start..end].to_vec();
    }

    /// Saves an appliance profile for the session, deduplicated against
    /// existing profiles. Returns false when the appliance was already
    /// known.
    pub fn save_appliance(&mut self, context: ApplianceContext) -> bool {
        let exists = self
            .appliances
            .iter()
            .any(|saved| return saved.context.matches(&context));
        if exists {
            return false;
        }

        self.appliances.push(SavedAppliance::new(context));
        return true;
    }

    pub fn appliances(&self) -> &[SavedAppliance] {
        return &self.appliances;
    }
}
