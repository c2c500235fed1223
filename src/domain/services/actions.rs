#[cfg(test)]
#[path = "actions_test.rs"]
mod tests;

use anyhow::Result;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::infrastructure::assistants::AssistantManager;

pub fn help_text() -> String {
    let text = r#"
COMMANDS:
- /new (/n) - Start a new job.
- /job N (/j) - Switch to job number N from the sidebar.
- /rename TITLE (/r) - Rename the current job.
- /pin [N] (/p) - Pin or unpin a job so it stays at the top.
- /delete [N] (/d) - Delete a job and its conversation.
- /type TYPE (/t) - Tag the next message with a job type.
- /appliance MODEL SERIAL (/a) - Attach an appliance from the catalog.
- /image PATH (/i) - Attach an image to the next message.
- /regen - Regenerate the last reply.
- /help (/h) - Show this help.
- /quit (/q, /exit) - Quit.

HOTKEYS:
- Up arrow - Scroll up.
- Down arrow - Scroll down.
- CTRL+U - Page up.
- CTRL+D - Page down.
- CTRL+N - Next sidebar page.
- CTRL+P - Previous sidebar page.
- CTRL+C - Cancel a pending reply, or quit.
        "#;

    return text.trim().to_string();
}

fn worker_error(err: anyhow::Error, tx: &mpsc::UnboundedSender<Event>) -> Result<()> {
    tracing::error!(?err, "assistant request failed");
    tx.send(Event::AssistantError(format!(
        "The assistant failed to reply: {err}"
    )))?;

    return Ok(());
}

pub struct ActionsService {}

impl ActionsService {
    /// Drains UI actions, holding at most one assistant request in flight.
    /// A new request or an abort cancels the previous worker.
    pub async fn start(
        tx: mpsc::UnboundedSender<Event>,
        rx: &mut mpsc::UnboundedReceiver<Action>,
    ) -> Result<()> {
        // Lazy default.
        let mut worker: JoinHandle<Result<()>> = tokio::spawn(async {
            return Ok(());
        });

        loop {
            let Some(action) = rx.recv().await else {
                return Ok(());
            };

            let worker_tx = tx.clone();
            match action {
                Action::AssistantAbort() => {
                    worker.abort();
                }
                Action::AssistantRequest(prompt) => {
                    worker.abort();
                    worker = tokio::spawn(async move {
                        let res = AssistantManager::get(&Config::get(ConfigKey::Assistant))?
                            .get_completion(prompt, &worker_tx)
                            .await;

                        if let Err(err) = res {
                            worker_error(err, &worker_tx)?;
                        }

                        return Ok(());
                    });
                }
            }
        }
    }
}
