use uuid::Uuid;

/// Short ids for jobs and messages, readable enough to show in logs. Takes
/// the first two segments of a v4 uuid.
pub fn create_id() -> String {
    return Uuid::new_v4()
        .to_string()
        .split('-')
        .take(2)
        .collect::<Vec<&str>>()
        .join("-");
}
