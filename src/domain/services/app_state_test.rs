use tokio::sync::mpsc;

use super::AppState;
use super::StatusLevel;
use crate::domain::models::Action;
use crate::domain::models::AssistantResponse;
use crate::domain::models::Message;
use crate::domain::models::ResponseBundle;

fn channel() -> (
    mpsc::UnboundedSender<Action>,
    mpsc::UnboundedReceiver<Action>,
) {
    return mpsc::unbounded_channel::<Action>();
}

fn reply(job_id: &str) -> AssistantResponse {
    return AssistantResponse {
        job_id: job_id.to_string(),
        message: Message::assistant(ResponseBundle {
            content: "Here's what to do.".to_string(),
            steps: vec![],
            materials: vec![],
            tools: vec![],
        }),
    };
}

#[test]
fn it_creates_a_job_on_first_prompt() {
    let (tx, mut rx) = channel();
    let mut state = AppState::new().unwrap();

    state.submit_prompt("My sink leaks", &tx).unwrap();

    assert!(state.waiting_for_assistant);
    let jobs = state.board.ordered();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].title, "My sink leaks");

    match rx.try_recv().unwrap() {
        Action::AssistantRequest(prompt) => {
            assert_eq!(prompt.text, "My sink leaks");
            assert_eq!(prompt.job_id, jobs[0].id);
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[test]
fn it_consumes_pending_attachments_on_the_next_message() {
    let (tx, _rx) = channel();
    let mut state = AppState::new().unwrap();

    let (_, handled) = state.handle_slash_commands("/type Plumbing", &tx).unwrap();
    assert!(handled);
    state
        .handle_slash_commands("/image burst-pipe.jpg", &tx)
        .unwrap();

    state.submit_prompt("Pipe burst under the sink", &tx).unwrap();
    state.submit_prompt("It's getting worse", &tx).unwrap();

    let messages = state.board.active_messages();
    assert_eq!(messages[0].job_type.as_deref(), Some("Plumbing"));
    assert_eq!(messages[0].image.as_deref(), Some("burst-pipe.jpg"));
    assert_eq!(messages[1].job_type, None);
    assert_eq!(messages[1].image, None);
}

#[test]
fn it_rejects_unknown_job_types() {
    let (tx, _rx) = channel();
    let mut state = AppState::new().unwrap();

    state.handle_slash_commands("/type Sorcery", &tx).unwrap();
    assert_eq!(state.status.as_ref().unwrap().level, StatusLevel::Error);
}

#[test]
fn it_routes_replies_and_decrements_credits() {
    let (tx, _rx) = channel();
    let mut state = AppState::new().unwrap();
    let credits_before = state.credits;

    state.submit_prompt("Dishwasher won't drain", &tx).unwrap();
    let job_id = state.board.active_id().unwrap().to_string();

    state.handle_assistant_response(reply(&job_id));

    assert!(!state.waiting_for_assistant);
    assert_eq!(state.credits, credits_before - 1);
    assert_eq!(state.board.active_messages().len(), 2);
}

#[test]
fn it_drops_replies_for_deleted_jobs() {
    let (tx, mut rx) = channel();
    let mut state = AppState::new().unwrap();
    let credits_before = state.credits;

    state.submit_prompt("Dryer is rattling", &tx).unwrap();
    let job_id = state.board.active_id().unwrap().to_string();

    state.handle_slash_commands("/delete", &tx).unwrap();
    assert!(!state.waiting_for_assistant);

    // The request went out, then the abort.
    assert!(matches!(
        rx.try_recv().unwrap(),
        Action::AssistantRequest(_)
    ));
    assert!(matches!(rx.try_recv().unwrap(), Action::AssistantAbort()));

    // A reply that raced the delete gets dropped without spending a credit.
    state.handle_assistant_response(reply(&job_id));
    assert_eq!(state.credits, credits_before);
    assert!(state.board.is_empty());
}

#[test]
fn it_blocks_prompts_when_out_of_credits() {
    let (tx, mut rx) = channel();
    let mut state = AppState::new().unwrap();
    state.credits = 0;

    state.submit_prompt("Fix my fence", &tx).unwrap();

    assert!(state.board.is_empty());
    assert!(rx.try_recv().is_err());
    assert_eq!(state.status.as_ref().unwrap().level, StatusLevel::Error);
}

#[test]
fn it_regenerates_the_last_reply() {
    let (tx, mut rx) = channel();
    let mut state = AppState::new().unwrap();

    state.submit_prompt("Ceiling fan wobbles", &tx).unwrap();
    let job_id = state.board.active_id().unwrap().to_string();
    state.handle_assistant_response(reply(&job_id));
    assert_eq!(state.board.active_messages().len(), 2);

    state.handle_slash_commands("/regen", &tx).unwrap();

    assert!(state.waiting_for_assistant);
    assert_eq!(state.board.active_messages().len(), 1);

    rx.try_recv().unwrap();
    match rx.try_recv().unwrap() {
        Action::AssistantRequest(prompt) => {
            assert_eq!(prompt.text, "Ceiling fan wobbles");
        }
        other => panic!("unexpected action: {other:?}"),
    }
}

#[test]
fn it_attaches_a_catalog_appliance() {
    let (tx, _rx) = channel();
    let mut state = AppState::new().unwrap();

    state
        .handle_slash_commands("/appliance DVE45R6100C SN-200", &tx)
        .unwrap();
    assert_eq!(state.status.as_ref().unwrap().level, StatusLevel::Success);
    assert_eq!(state.board.appliances().len(), 1);

    state.submit_prompt("It squeals on startup", &tx).unwrap();
    let message = &state.board.active_messages()[0];
    let appliance = message.appliance.as_ref().unwrap();
    assert_eq!(appliance.brand, "Samsung");
    assert_eq!(appliance.serial_number, "SN-200");
    assert_eq!(message.job_type.as_deref(), Some("Home Appliances"));

    // Attaching the same appliance twice doesn't duplicate the saved entry.
    state
        .handle_slash_commands("/appliance DVE45R6100C SN-200", &tx)
        .unwrap();
    assert_eq!(state.board.appliances().len(), 1);
}

#[test]
fn it_selects_jobs_by_sidebar_number() {
    let (tx, _rx) = channel();
    let mut state = AppState::new().unwrap();

    state.submit_prompt("First job", &tx).unwrap();
    state.handle_slash_commands("/new", &tx).unwrap();
    state.submit_prompt("Second job", &tx).unwrap();

    // Newest first, so (2) is the older job.
    state.handle_slash_commands("/job 2", &tx).unwrap();
    assert_eq!(state.board.active_messages()[0].text, "First job");

    state.handle_slash_commands("/job 9", &tx).unwrap();
    assert_eq!(state.status.as_ref().unwrap().level, StatusLevel::Error);
}

#[test]
fn it_breaks_on_quit_and_flags_help() {
    let (tx, _rx) = channel();
    let mut state = AppState::new().unwrap();

    let (should_break, handled) = state.handle_slash_commands("/help", &tx).unwrap();
    assert!(!should_break);
    assert!(handled);
    assert!(state.showing_help);

    let (should_break, _) = state.handle_slash_commands("/q", &tx).unwrap();
    assert!(should_break);

    let (_, handled) = state
        .handle_slash_commands("just a normal prompt", &tx)
        .unwrap();
    assert!(!handled);
}
