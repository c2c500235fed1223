#[cfg(test)]
#[path = "summarizer_test.rs"]
mod tests;

const MAX_TITLE_LEN: usize = 30;
const MIN_BOUNDARY_IDX: usize = 20;
const HARD_CUT_LEN: usize = 27;

/// Derives a sidebar title from free text: whitespace is collapsed, and
/// anything longer than 30 characters is truncated, preferring a word
/// boundary past index 20 and falling back to a hard cut at 27 characters.
///
/// Not idempotent: re-summarizing an already truncated title may truncate it
/// further, since the appended ellipsis counts toward the length. Callers
/// only ever summarize raw first-message text, never an existing title.
pub fn summarize(text: &str) -> String {
    let cleaned = text.split_whitespace().collect::<Vec<&str>>().join(" ");
    let chars = cleaned.chars().collect::<Vec<char>>();

    if chars.len() <= MAX_TITLE_LEN {
        return cleaned;
    }

    let boundary = chars[..MAX_TITLE_LEN]
        .iter()
        .rposition(|c| return *c == ' ');

    if let Some(idx) = boundary {
        if idx > MIN_BOUNDARY_IDX {
            return format!("{}...", chars[..idx].iter().collect::<String>());
        }
    }

    return format!("{}...", chars[..HARD_CUT_LEN].iter().collect::<String>());
}
