#[cfg(test)]
#[path = "canned_test.rs"]
mod tests;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::mpsc;
use tokio::time;
use tokio::time::Duration;

use super::bundles;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ApplianceContext;
use crate::domain::models::Assistant;
use crate::domain::models::AssistantName;
use crate::domain::models::AssistantPrompt;
use crate::domain::models::AssistantResponse;
use crate::domain::models::Event;
use crate::domain::models::Message;
use crate::domain::models::ResponseBundle;

/// Picks the reply for a prompt by keyword, checked in priority order. An
/// attached appliance outranks every keyword.
pub(crate) fn select_bundle(
    text: &str,
    appliance: Option<&ApplianceContext>,
) -> ResponseBundle {
    let lower = text.to_lowercase();

    if appliance.is_some() || lower.contains("appliance") {
        return bundles::appliance(appliance);
    }
    if lower.contains("faucet") || lower.contains("leak") {
        return bundles::faucet();
    }
    if lower.contains("fan") || lower.contains("ceiling") {
        return bundles::ceiling_fan();
    }
    if lower.contains("drywall")
        || lower.contains("hole")
        || lower.contains("wall")
        || lower.contains("patch")
    {
        return bundles::drywall();
    }

    return bundles::general();
}

pub struct CannedAssistant {
    response_delay: String,
}

impl Default for CannedAssistant {
    fn default() -> CannedAssistant {
        return CannedAssistant {
            response_delay: Config::get(ConfigKey::ResponseDelay),
        };
    }
}

#[async_trait]
impl Assistant for CannedAssistant {
    fn name(&self) -> AssistantName {
        return AssistantName::Canned;
    }

    async fn get_completion<'a>(
        &self,
        prompt: AssistantPrompt,
        tx: &'a mpsc::UnboundedSender<Event>,
    ) -> Result<()> {
        let delay = self.response_delay.parse::<u64>()?;
        time::sleep(Duration::from_millis(delay)).await;

        let bundle = select_bundle(&prompt.text, prompt.appliance.as_ref());
        tx.send(Event::AssistantResponse(AssistantResponse {
            job_id: prompt.job_id,
            message: Message::assistant(bundle),
        }))?;

        return Ok(());
    }
}
