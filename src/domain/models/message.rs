#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use chrono::DateTime;
use chrono::Local;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::create_id;
use super::ApplianceContext;
use super::Author;
use super::Material;
use super::ResponseBundle;
use super::Step;
use super::Tool;

/// One chat turn. Messages are immutable once created; regenerating a reply
/// replaces the assistant message rather than editing it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub author: Author,
    pub text: String,
    pub timestamp: DateTime<Local>,
    pub image: Option<String>,
    pub job_type: Option<String>,
    pub appliance: Option<ApplianceContext>,
    pub steps: Vec<Step>,
    pub materials: Vec<Material>,
    pub tools: Vec<Tool>,
}

impl Message {
    pub fn user(text: &str) -> Message {
        return Message {
            id: create_id(),
            author: Author::User,
            text: text.to_string().replace('\t', "  "),
            timestamp: Local::now(),
            image: None,
            job_type: None,
            appliance: None,
            steps: vec![],
            materials: vec![],
            tools: vec![],
        };
    }

    pub fn assistant(bundle: ResponseBundle) -> Message {
        return Message {
            id: create_id(),
            author: Author::Assistant,
            text: bundle.content.replace('\t', "  "),
            timestamp: Local::now(),
            image: None,
            job_type: None,
            appliance: None,
            steps: bundle.steps,
            materials: bundle.materials,
            tools: bundle.tools,
        };
    }

    pub fn with_job_type(mut self, job_type: Option<String>) -> Message {
        self.job_type = job_type;
        return self;
    }

    pub fn with_appliance(mut self, appliance: Option<ApplianceContext>) -> Message {
        self.appliance = appliance;
        return self;
    }

    pub fn with_image(mut self, image: Option<String>) -> Message {
        self.image = image;
        return self;
    }

    /// Word-wraps the message text to the given width for terminal
    /// rendering. Blank source lines survive as single spaces so paragraph
    /// breaks keep their height.
    pub fn as_string_lines(&self, line_max_width: usize) -> Vec<String> {
        return Message::wrap(&self.text, line_max_width);
    }

    pub fn wrap(text: &str, line_max_width: usize) -> Vec<String> {
        let mut lines: Vec<String> = vec![];

        for full_line in text.split('\n') {
            if full_line.trim().is_empty() {
                lines.push(" ".to_string());
                continue;
            }

            let mut current: Vec<&str> = vec![];
            let mut current_len = 0;

            for word in full_line.split(' ') {
                if current_len + word.len() + 1 > line_max_width && !current.is_empty() {
                    lines.push(current.join(" ").trim_end().to_string());
                    current = vec![];
                    current_len = 0;
                }
                current_len += word.len() + 1;
                current.push(word);
            }

            if !current.is_empty() {
                lines.push(current.join(" ").trim_end().to_string());
            }
        }

        return lines;
    }
}
