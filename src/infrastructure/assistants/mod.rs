pub mod bundles;
pub mod canned;

use anyhow::bail;
use anyhow::Result;

use crate::domain::models::AssistantBox;
use crate::domain::models::AssistantName;
use crate::infrastructure::assistants::canned::CannedAssistant;

pub struct AssistantManager {}

impl AssistantManager {
    pub fn get(name: &str) -> Result<AssistantBox> {
        if AssistantName::parse(name.to_string()) == Some(AssistantName::Canned) {
            return Ok(Box::<CannedAssistant>::default());
        }

        bail!(format!("No assistant implemented for {name}"))
    }
}
