use super::Author;
use super::Material;
use super::Message;
use super::ResponseBundle;
use super::Step;
use super::Tool;

#[test]
fn it_creates_user_message() {
    let msg = Message::user("My faucet is leaking");
    assert_eq!(msg.author, Author::User);
    assert_eq!(msg.text, "My faucet is leaking".to_string());
    assert!(msg.steps.is_empty());
    assert!(msg.job_type.is_none());
    assert!(msg.appliance.is_none());
}

#[test]
fn it_creates_user_message_replacing_tabs() {
    let msg = Message::user("\t\tMy faucet is leaking");
    assert_eq!(msg.text, "    My faucet is leaking".to_string());
}

#[test]
fn it_creates_assistant_message_from_bundle() {
    let bundle = ResponseBundle {
        content: "Happy to help.".to_string(),
        steps: vec![Step::new("Assess", "Look at the thing.")],
        materials: vec![Material::new("Spackle", Some("1 tub"), None)],
        tools: vec![Tool::new("Putty knife", None)],
    };

    let msg = Message::assistant(bundle);
    assert_eq!(msg.author, Author::Assistant);
    assert_eq!(msg.author.to_string(), "Homefixi");
    assert_eq!(msg.text, "Happy to help.");
    assert_eq!(msg.steps.len(), 1);
    assert_eq!(msg.materials.len(), 1);
    assert_eq!(msg.tools.len(), 1);
}

#[test]
fn it_attaches_job_type_and_appliance() {
    let msg = Message::user("It rattles")
        .with_job_type(Some("Home Appliances".to_string()))
        .with_image(Some("./rattle.jpg".to_string()));
    assert_eq!(msg.job_type.as_deref(), Some("Home Appliances"));
    assert_eq!(msg.image.as_deref(), Some("./rattle.jpg"));
}

#[test]
fn it_generates_unique_ids() {
    let a = Message::user("one");
    let b = Message::user("two");
    assert_ne!(a.id, b.id);
}

#[test]
fn it_wraps_lines_at_word_boundaries() {
    let msg = Message::user("turn off the water supply before you start");
    let lines = msg.as_string_lines(20);
    assert!(lines.len() > 1);
    for line in &lines {
        assert!(line.len() <= 20, "line too long: {line}");
    }
    assert_eq!(
        lines.join(" "),
        "turn off the water supply before you start"
    );
}

#[test]
fn it_keeps_blank_lines_as_spacers() {
    let msg = Message::user("first paragraph\n\nsecond paragraph");
    let lines = msg.as_string_lines(40);
    assert_eq!(lines, vec!["first paragraph", " ", "second paragraph"]);
}

#[test]
fn it_wraps_words_longer_than_the_width() {
    let msg = Message::user("a supercalifragilisticexpialidocious word");
    let lines = msg.as_string_lines(10);
    // Overlong words land on their own line rather than being split.
    assert!(lines.contains(&"supercalifragilisticexpialidocious".to_string()));
}
