#[cfg(test)]
#[path = "sidebar_test.rs"]
mod tests;

use ratatui::prelude::Backend;
use ratatui::prelude::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use super::JobBoard;

pub(crate) struct SidebarRow {
    pub text: String,
    pub active: bool,
}

/// One page of the ordered job list, numbered with the global index used by
/// `/job N`, so the numbers stay stable while flipping pages.
pub(crate) fn rows(board: &JobBoard, page: usize) -> Vec<SidebarRow> {
    let start = page * super::JOBS_PER_PAGE;

    return board
        .page(page)
        .iter()
        .enumerate()
        .map(|(idx, job)| {
            let n = start + idx + 1;
            let mut text = format!("({n}) {}", job.title);
            if job.pinned {
                text = format!("{text} [pinned]");
            }

            return SidebarRow {
                text,
                active: board.active_id() == Some(job.id.as_str()),
            };
        })
        .collect();
}

/// Sidebar pane state: which page of the job list is showing.
#[derive(Default)]
pub struct Sidebar {
    page: usize,
}

impl Sidebar {
    pub fn page(&self) -> usize {
        return self.page;
    }

    pub fn next_page(&mut self, page_count: usize) {
        if self.page + 1 < page_count {
            self.page += 1;
        }
    }

    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1);
    }

    /// New jobs always land at the top of the first page.
    pub fn reset(&mut self) {
        self.page = 0;
    }

    /// Deletes can empty the last page out from under the cursor.
    pub fn clamp(&mut self, page_count: usize) {
        if page_count == 0 {
            self.page = 0;
        } else if self.page >= page_count {
            self.page = page_count - 1;
        }
    }

    pub fn render<B: Backend>(
        &self,
        frame: &mut Frame<B>,
        rect: Rect,
        board: &JobBoard,
        credits: u16,
        max_credits: u16,
    ) {
        let mut lines: Vec<Line> = vec![];

        if board.is_empty() {
            lines.push(Line::from("No jobs yet."));
            lines.push(Line::from("Describe a repair to start one."));
        }

        for row in rows(board, self.page) {
            if row.active {
                lines.push(Line::from(Span::styled(
                    row.text,
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )));
            } else {
                lines.push(Line::from(Span::styled(
                    row.text,
                    Style::default().fg(Color::Gray),
                )));
            }
        }

        let page_count = board.page_count();
        if page_count > 1 {
            lines.push(Line::from(format!(
                "page {}/{page_count} (^N/^P)",
                self.page + 1
            )));
        }

        if !board.appliances().is_empty() {
            lines.push(Line::from(" "));
            lines.push(Line::from(Span::styled(
                "HOME APPLIANCES",
                Style::default().add_modifier(Modifier::BOLD),
            )));
            for appliance in board.appliances() {
                let context = &appliance.context;
                lines.push(Line::from(format!(
                    "{} - {}",
                    context.brand, context.category
                )));
                lines.push(Line::from(format!(
                    "  Model: {} S/N: {}",
                    context.model_number, context.serial_number
                )));
            }
        }

        lines.push(Line::from(" "));
        lines.push(Line::from(format!("Credits: {credits}/{max_credits}")));

        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Your jobs")
                    .padding(Padding::new(1, 1, 0, 0)),
            ),
            rect,
        );
    }
}
