#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::domain::models::Author;
use crate::domain::models::Message;

/// Flattens the active job's messages into renderable lines: the chat text
/// word-wrapped, plus the steps/materials/tools panels of assistant replies.
#[derive(Default)]
pub struct Transcript {
    lines: Vec<Line<'static>>,
    line_width: usize,
}

/// The plain-text rendering of one message. Kept free of styling so it can
/// be asserted on directly in tests; `set_messages` adds the colors.
pub(crate) fn format_message(message: &Message, line_width: usize) -> Vec<String> {
    let mut out: Vec<String> = vec![];

    let mut header = format!("{}:", message.author.to_string());
    if let Some(job_type) = &message.job_type {
        header = format!("{header} [{job_type}]");
    }
    out.push(header);

    if let Some(appliance) = &message.appliance {
        out.push(format!(
            "  ({} {}, Model: {}, S/N: {})",
            appliance.brand,
            appliance.product_name,
            appliance.model_number,
            appliance.serial_number
        ));
    }
    if let Some(image) = &message.image {
        out.push(format!("  (attached image: {image})"));
    }

    out.extend(message.as_string_lines(line_width));

    if !message.steps.is_empty() {
        out.push(" ".to_string());
        out.push("Step-by-step:".to_string());
        for (idx, step) in message.steps.iter().enumerate() {
            let n = idx + 1;
            out.push(format!("  {n}. {}", step.title));
            for line in Message::wrap(&step.description, line_width.saturating_sub(5)) {
                out.push(format!("     {line}"));
            }
        }
    }

    if !message.materials.is_empty() {
        out.push(" ".to_string());
        out.push("Materials:".to_string());
        for material in &message.materials {
            let mut line = format!("  - {}", material.name);
            if let Some(quantity) = &material.quantity {
                line = format!("{line} ({quantity})");
            }
            if let Some(link) = &material.link {
                line = format!("{line} {link}");
            }
            out.push(line);
        }
    }

    if !message.tools.is_empty() {
        out.push(" ".to_string());
        out.push("Tools:".to_string());
        for tool in &message.tools {
            let mut line = format!("  - {}", tool.name);
            if let Some(link) = &tool.link {
                line = format!("{line} {link}");
            }
            out.push(line);
        }
    }

    out.push(" ".to_string());
    return out;
}

impl Transcript {
    pub fn set_messages(&mut self, messages: &[Message], line_width: usize) {
        self.line_width = line_width;
        self.lines = messages
            .iter()
            .flat_map(|message| {
                let header_style = match message.author {
                    Author::User => Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                    Author::Assistant => Style::default()
                        .fg(Color::LightGreen)
                        .add_modifier(Modifier::BOLD),
                };

                return format_message(message, line_width)
                    .into_iter()
                    .enumerate()
                    .map(move |(idx, text)| {
                        if idx == 0 {
                            return Line::from(Span::styled(text, header_style));
                        }
                        return Line::from(text);
                    });
            })
            .collect();
    }

    pub fn len(&self) -> usize {
        return self.lines.len();
    }

    pub fn render<B: Backend>(&self, frame: &mut Frame<B>, rect: Rect, scroll: u16) {
        frame.render_widget(
            Paragraph::new(self.lines.to_vec())
                .block(Block::default())
                .scroll((scroll, 0)),
            rect,
        );
    }
}
