#[cfg(test)]
#[path = "app_state_test.rs"]
mod tests;

use anyhow::Result;
use ratatui::prelude::Rect;
use tokio::sync::mpsc;

use super::JobBoard;
use super::Scroll;
use super::Sidebar;
use super::Transcript;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::ApplianceContext;
use crate::domain::models::AssistantPrompt;
use crate::domain::models::AssistantResponse;
use crate::domain::models::Message;
use crate::domain::models::SlashCommand;
use crate::domain::models::JOB_TYPES;
use crate::infrastructure::catalog::ApplianceCatalog;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

/// A transient one-line notice above the prompt box, standing in for the
/// toast notifications of a graphical client.
#[derive(Clone, Debug)]
pub struct Status {
    pub level: StatusLevel,
    pub text: String,
}

pub struct AppState {
    pub board: JobBoard,
    pub sidebar: Sidebar,
    pub transcript: Transcript,
    pub scroll: Scroll,
    pub status: Option<Status>,
    pub showing_help: bool,
    pub waiting_for_assistant: bool,
    pending_job_id: Option<String>,
    pending_job_type: Option<String>,
    pending_appliance: Option<ApplianceContext>,
    pending_image: Option<String>,
    pub credits: u16,
    pub max_credits: u16,
    pub last_known_width: u16,
    pub last_known_height: u16,
}

impl AppState {
    pub fn new() -> Result<AppState> {
        let credits = Config::get(ConfigKey::StartingCredits).parse::<u16>()?;
        let max_credits = Config::get(ConfigKey::MaxCredits).parse::<u16>()?;

        return Ok(AppState {
            board: JobBoard::default(),
            sidebar: Sidebar::default(),
            transcript: Transcript::default(),
            scroll: Scroll::default(),
            status: None,
            showing_help: false,
            waiting_for_assistant: false,
            pending_job_id: None,
            pending_job_type: None,
            pending_appliance: None,
            pending_image: None,
            credits: credits.min(max_credits),
            max_credits,
            last_known_width: 0,
            last_known_height: 0,
        });
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.last_known_width = rect.width;
        self.last_known_height = rect.height;
        self.sync_dependants();
    }

    fn set_status(&mut self, level: StatusLevel, text: &str) {
        tracing::debug!(?level, text, "status");
        self.status = Some(Status {
            level,
            text: text.to_string(),
        });
    }

    fn sync_dependants(&mut self) {
        self.transcript.set_messages(
            self.board.active_messages(),
            self.last_known_width.saturating_sub(2) as usize,
        );
        self.scroll
            .set_state(self.transcript.len() as u16, self.last_known_height);
        self.sidebar.clamp(self.board.page_count());

        if self.waiting_for_assistant {
            self.scroll.last();
        }
    }

    /// Resolves `/job N` style one-based indexes against the sidebar order.
    fn job_id_for_index(&self, arg: &str) -> Option<String> {
        let idx = arg.parse::<usize>().ok()?;
        let ordered = self.board.ordered();
        if idx < 1 || idx > ordered.len() {
            return None;
        }

        return Some(ordered[idx - 1].id.to_string());
    }

    /// Target for pin/delete: an explicit index argument, else the active
    /// job.
    fn target_job_id(&self, args: &[String]) -> Option<String> {
        if let Some(arg) = args.first() {
            return self.job_id_for_index(arg);
        }

        return self.board.active_id().map(|id| return id.to_string());
    }

    /// Runs the prompt text as a slash command if it is one. Returns
    /// (should_break, was_handled); text that isn't a command leaves both
    /// false and should be submitted as a prompt.
    pub fn handle_slash_commands(
        &mut self,
        text: &str,
        tx: &mpsc::UnboundedSender<Action>,
    ) -> Result<(bool, bool)> {
        let Some(command) = SlashCommand::parse(text) else {
            return Ok((false, false));
        };

        self.showing_help = false;

        if command.is_quit() {
            return Ok((true, true));
        }

        if command.is_help() {
            self.showing_help = true;
            return Ok((false, true));
        }

        if command.is_new_job() {
            self.board.new_job();
            self.sidebar.reset();
            self.sync_dependants();
            return Ok((false, true));
        }

        if command.is_job_select() {
            match self.job_id_for_index(&command.args[0]) {
                Some(id) => {
                    // Selecting can't fail for an id we just resolved.
                    self.board.select(&id)?;
                    self.sync_dependants();
                    self.scroll.last();
                }
                None => {
                    self.set_status(
                        StatusLevel::Error,
                        &format!("{} is not a job number from the sidebar", command.args[0]),
                    );
                }
            }
            return Ok((false, true));
        }

        if command.is_rename() {
            let Some(id) = self.board.active_id().map(|id| return id.to_string()) else {
                self.set_status(StatusLevel::Error, "There is no active job to rename");
                return Ok((false, true));
            };

            match self.board.rename(&id, &command.args.join(" ")) {
                Ok(()) => self.set_status(StatusLevel::Success, "Job renamed successfully"),
                Err(err) => self.set_status(StatusLevel::Error, &err.to_string()),
            }
            return Ok((false, true));
        }

        if command.is_pin() {
            let Some(id) = self.target_job_id(&command.args) else {
                self.set_status(StatusLevel::Error, "There is no job to pin");
                return Ok((false, true));
            };

            match self.board.toggle_pin(&id) {
                Ok(true) => self.set_status(StatusLevel::Success, "Job pinned"),
                Ok(false) => self.set_status(StatusLevel::Success, "Job unpinned"),
                Err(err) => self.set_status(StatusLevel::Error, &err.to_string()),
            }
            self.sync_dependants();
            return Ok((false, true));
        }

        if command.is_delete() {
            let Some(id) = self.target_job_id(&command.args) else {
                self.set_status(StatusLevel::Error, "There is no job to delete");
                return Ok((false, true));
            };

            // Cancel any reply still in flight for the doomed job, so it
            // can't resurface against stale state.
            if self.pending_job_id.as_deref() == Some(id.as_str()) {
                tx.send(Action::AssistantAbort())?;
                self.pending_job_id = None;
                self.waiting_for_assistant = false;
            }

            match self.board.delete(&id) {
                Ok(()) => self.set_status(StatusLevel::Success, "Job deleted"),
                Err(err) => self.set_status(StatusLevel::Error, &err.to_string()),
            }
            self.sync_dependants();
            return Ok((false, true));
        }

        if command.is_job_type() {
            let label = command.args.join(" ");
            match JOB_TYPES.iter().find(|e| return **e == label) {
                Some(label) => {
                    self.pending_job_type = Some(label.to_string());
                    self.set_status(
                        StatusLevel::Success,
                        &format!("Next message will be tagged as {label}"),
                    );
                }
                None => {
                    self.set_status(
                        StatusLevel::Error,
                        &format!("Unknown job type. Try one of: {}", JOB_TYPES.join(", ")),
                    );
                }
            }
            return Ok((false, true));
        }

        if command.is_appliance() {
            self.handle_appliance_command(&command.args);
            return Ok((false, true));
        }

        if command.is_image() {
            let Some(path) = command.args.first() else {
                self.set_status(StatusLevel::Error, "Usage: /image PATH");
                return Ok((false, true));
            };

            self.pending_image = Some(path.to_string());
            self.set_status(
                StatusLevel::Success,
                &format!("Attached {path} to your next message"),
            );
            return Ok((false, true));
        }

        if command.is_regenerate() {
            let Some(user_message) = self.board.pop_for_regenerate() else {
                self.set_status(StatusLevel::Error, "There is no reply to regenerate");
                return Ok((false, true));
            };

            // The active id is set, or pop_for_regenerate would have bailed.
            let job_id = self.board.active_id().unwrap_or_default().to_string();
            self.waiting_for_assistant = true;
            self.pending_job_id = Some(job_id.to_string());
            tx.send(Action::AssistantRequest(AssistantPrompt::new(
                &job_id,
                &user_message.text,
                user_message.appliance.clone(),
            )))?;
            self.sync_dependants();
            return Ok((false, true));
        }

        return Ok((false, true));
    }

    fn handle_appliance_command(&mut self, args: &[String]) {
        if args.len() < 2 {
            self.set_status(
                StatusLevel::Error,
                "Usage: /appliance MODEL_OR_BRAND SERIAL_NUMBER",
            );
            return;
        }

        let Some((serial, query)) = args.split_last() else {
            return;
        };
        let query = query.join(" ");
        let results = ApplianceCatalog::search(&query);
        let Some(model) = results.first() else {
            self.set_status(
                StatusLevel::Error,
                &format!("No appliance found matching '{query}'"),
            );
            return;
        };

        let context = ApplianceContext::from_model(model, serial);
        let newly_saved = self.board.save_appliance(context.clone());
        self.pending_appliance = Some(context);
        self.pending_job_type = Some("Home Appliances".to_string());

        if newly_saved {
            self.set_status(
                StatusLevel::Success,
                &format!(
                    "Attached {} {} and saved it to your appliances",
                    model.brand, model.product_name
                ),
            );
        } else {
            self.set_status(
                StatusLevel::Success,
                &format!("Attached {} {}", model.brand, model.product_name),
            );
        }
    }

    /// Sends user text to the assistant, implicitly creating a job when none
    /// is active. Pending job-type and appliance attachments ride along on
    /// this message and are consumed by it.
    pub fn submit_prompt(&mut self, text: &str, tx: &mpsc::UnboundedSender<Action>) -> Result<()> {
        if self.credits == 0 {
            self.set_status(
                StatusLevel::Error,
                "You are out of credits for this session",
            );
            return Ok(());
        }

        self.showing_help = false;
        if self.board.active_id().is_none() {
            self.board.new_job();
        }
        let job_id = self.board.active_id().unwrap_or_default().to_string();

        let appliance = self.pending_appliance.take();
        let job_type = self.pending_job_type.take();
        let image = self.pending_image.take();
        let message = Message::user(text)
            .with_job_type(job_type)
            .with_appliance(appliance.clone())
            .with_image(image);
        self.board.push_message(&job_id, message)?;

        self.waiting_for_assistant = true;
        self.pending_job_id = Some(job_id.to_string());
        self.status = None;
        tx.send(Action::AssistantRequest(AssistantPrompt::new(
            &job_id, text, appliance,
        )))?;

        self.sync_dependants();
        self.scroll.last();
        return Ok(());
    }

    /// Routes a finished reply to the job that asked for it. Replies for
    /// deleted jobs are dropped; replies for background jobs land in their
    /// transcript without disturbing the visible one.
    pub fn handle_assistant_response(&mut self, res: AssistantResponse) {
        if self.pending_job_id.as_deref() == Some(res.job_id.as_str()) {
            self.pending_job_id = None;
            self.waiting_for_assistant = false;
        }

        if !self.board.contains(&res.job_id) {
            tracing::debug!(job_id = res.job_id, "discarding reply for deleted job");
            return;
        }

        if let Err(err) = self.board.push_message(&res.job_id, res.message) {
            tracing::warn!(?err, "failed to append assistant reply");
            return;
        }

        self.credits = self.credits.saturating_sub(1);
        self.sync_dependants();
        if self.board.active_id() == Some(res.job_id.as_str()) {
            self.scroll.last();
        }
    }

    pub fn handle_assistant_error(&mut self, err: &str) {
        self.pending_job_id = None;
        self.waiting_for_assistant = false;
        self.set_status(StatusLevel::Error, err);
    }

    /// Aborts the in-flight request, if any. Returns whether one was
    /// pending.
    pub fn abort_pending(&mut self, tx: &mpsc::UnboundedSender<Action>) -> Result<bool> {
        if self.pending_job_id.is_none() {
            return Ok(false);
        }

        tx.send(Action::AssistantAbort())?;
        self.pending_job_id = None;
        self.waiting_for_assistant = false;
        self.set_status(StatusLevel::Info, "Cancelled the pending reply");
        return Ok(true);
    }
}
