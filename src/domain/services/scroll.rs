use ratatui::widgets::ScrollbarState;

/// Tracks the transcript viewport offset. Positions are in rendered lines,
/// clamped so the view never scrolls past the last line.
#[derive(Default)]
pub struct Scroll {
    list_length: u16,
    viewport_length: u16,
    pub position: u16,
    pub scrollbar_state: ScrollbarState,
}

impl Scroll {
    fn max_position(&self) -> u16 {
        return self.list_length.saturating_sub(self.viewport_length);
    }

    pub fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
        self.scrollbar_state.prev();
    }

    pub fn down(&mut self) {
        self.position = self.position.saturating_add(1).min(self.max_position());
        self.scrollbar_state.next();
    }

    pub fn up_page(&mut self) {
        let half = (self.viewport_length / 2).max(1);
        for _ in 0..half {
            self.up();
        }
    }

    pub fn down_page(&mut self) {
        let half = (self.viewport_length / 2).max(1);
        for _ in 0..half {
            self.down();
        }
    }

    /// Jump to the bottom of the transcript, where new messages land.
    pub fn last(&mut self) {
        self.position = self.max_position();
        self.scrollbar_state.last();
    }

    pub fn set_state(&mut self, list_length: u16, viewport_length: u16) {
        self.list_length = list_length;
        self.viewport_length = viewport_length;
        self.position = self.position.min(self.max_position());
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(list_length)
            .viewport_content_length(viewport_length);
    }
}
