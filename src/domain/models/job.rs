use chrono::DateTime;
use chrono::Local;
use serde_derive::Deserialize;
use serde_derive::Serialize;

use super::create_id;

/// The categories a job can be tagged with via `/type`.
pub const JOB_TYPES: [&str; 6] = [
    "Plumbing",
    "Home Appliances",
    "Electrics",
    "Repairs + Cleaning",
    "Custom Project",
    "Outdoor and Garden",
];

/// A single repair task, aka one conversation thread in the sidebar.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub title: String,
    pub timestamp: DateTime<Local>,
    pub job_type: Option<String>,
    pub pinned: bool,
}

impl Job {
    pub fn new(title: &str) -> Job {
        return Job {
            id: create_id(),
            title: title.to_string(),
            timestamp: Local::now(),
            job_type: None,
            pinned: false,
        };
    }
}
