use super::AssistantPrompt;

/// Requests the UI sends to the background worker loop.
#[derive(Debug)]
pub enum Action {
    AssistantRequest(AssistantPrompt),
    AssistantAbort(),
}
