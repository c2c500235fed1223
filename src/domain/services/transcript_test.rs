use super::format_message;
use super::Transcript;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ApplianceContext;
use crate::domain::models::Material;
use crate::domain::models::Message;
use crate::domain::models::ResponseBundle;
use crate::domain::models::Step;
use crate::domain::models::Tool;

fn assistant_reply() -> Message {
    return Message::assistant(ResponseBundle {
        content: "Turn off the water.".to_string(),
        steps: vec![Step::new("Shut the valve", "Turn it clockwise.")],
        materials: vec![Material::new("Teflon tape", Some("1 roll"), None)],
        tools: vec![Tool::new("Bucket", None)],
    });
}

#[test]
fn it_formats_an_assistant_reply_with_panels() {
    let lines = format_message(&assistant_reply(), 40);

    assert_eq!(
        lines,
        vec![
            "Homefixi:".to_string(),
            "Turn off the water.".to_string(),
            " ".to_string(),
            "Step-by-step:".to_string(),
            "  1. Shut the valve".to_string(),
            "     Turn it clockwise.".to_string(),
            " ".to_string(),
            "Materials:".to_string(),
            "  - Teflon tape (1 roll)".to_string(),
            " ".to_string(),
            "Tools:".to_string(),
            "  - Bucket".to_string(),
            " ".to_string(),
        ]
    );
}

#[test]
fn it_formats_a_user_message_with_job_type_and_appliance() {
    Config::set(ConfigKey::Username, "tester");

    let msg = Message::user("My dryer is rattling")
        .with_job_type(Some("Home Appliances".to_string()))
        .with_appliance(Some(ApplianceContext {
            brand: "Samsung".to_string(),
            model_number: "DVE45R6100C".to_string(),
            product_name: "Electric Dryer".to_string(),
            serial_number: "SN-9".to_string(),
            category: "Dryer".to_string(),
        }));

    let lines = format_message(&msg, 40);
    assert_eq!(lines[0], "tester: [Home Appliances]");
    assert_eq!(
        lines[1],
        "  (Samsung Electric Dryer, Model: DVE45R6100C, S/N: SN-9)"
    );
    assert_eq!(lines[2], "My dryer is rattling");
}

#[test]
fn it_counts_lines_across_messages() {
    let mut transcript = Transcript::default();
    transcript.set_messages(&[assistant_reply(), Message::user("thanks")], 40);

    // 13 lines for the reply, 3 for the short user turn.
    assert_eq!(transcript.len(), 16);
}

#[test]
fn it_wraps_long_content_to_the_width() {
    let msg = Message::user(
        "The faucet in the upstairs bathroom has been dripping steadily for about a week now",
    );
    for line in format_message(&msg, 30).iter() {
        assert!(line.chars().count() <= 30, "line too long: {line:?}");
    }
}
