use anyhow::Result;
use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;

use super::ApplianceContext;
use super::Event;

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum AssistantName {
    Canned,
}

impl AssistantName {
    pub fn parse(text: String) -> Option<AssistantName> {
        return AssistantName::iter().find(|e| return e.to_string() == text);
    }
}

/// Everything an assistant needs to answer one turn. Tagged with the owning
/// job so the reply can be routed (or discarded) after the simulated
/// latency, even when the user has moved on.
#[derive(Debug)]
pub struct AssistantPrompt {
    pub job_id: String,
    pub text: String,
    pub appliance: Option<ApplianceContext>,
}

impl AssistantPrompt {
    pub fn new(job_id: &str, text: &str, appliance: Option<ApplianceContext>) -> AssistantPrompt {
        return AssistantPrompt {
            job_id: job_id.to_string(),
            text: text.to_string(),
            appliance,
        };
    }
}

#[derive(Debug)]
pub struct AssistantResponse {
    pub job_id: String,
    pub message: super::Message,
}

#[async_trait]
pub trait Assistant {
    fn name(&self) -> AssistantName;

    /// Produces a reply for the prompt and sends it through the channel as
    /// an `Event::AssistantResponse`. Implementations own the simulated
    /// latency; they run on an abortable worker task, so a slow reply can be
    /// cancelled without side effects.
    async fn get_completion<'a>(
        &self,
        prompt: AssistantPrompt,
        tx: &'a mpsc::UnboundedSender<Event>,
    ) -> Result<()>;
}

pub type AssistantBox = Box<dyn Assistant + Send + Sync>;
