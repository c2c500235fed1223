use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::Terminal;
use tokio::sync::mpsc;

use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Loading;
use crate::domain::models::TextArea;
use crate::domain::services::actions::help_text;
use crate::domain::services::AppState;
use crate::domain::services::EventsService;
use crate::domain::services::StatusLevel;

fn status_style(level: StatusLevel) -> Style {
    let style = Style::default();
    return match level {
        StatusLevel::Info => style.fg(Color::Gray),
        StatusLevel::Success => style.fg(Color::Green),
        StatusLevel::Error => style.fg(Color::Red),
    };
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: &mut AppState,
    tx: mpsc::UnboundedSender<Action>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(event_rx);
    let mut textarea = TextArea::default();
    let loading = Loading::default();

    #[cfg(feature = "dev")]
    {
        let test_str = "My kitchen faucet has been dripping for a week, how do I fix it?";
        for char in test_str.chars() {
            textarea.input(tui_textarea::Input {
                key: tui_textarea::Key::Char(char),
                ctrl: false,
                alt: false,
            });
        }
    }

    loop {
        terminal.draw(|frame| {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Max(34), Constraint::Min(1)])
                .split(frame.size());
            let main = Layout::default()
                .direction(Direction::Vertical)
                .constraints(vec![
                    Constraint::Min(1),
                    Constraint::Max(1),
                    Constraint::Max(4),
                ])
                .split(columns[1]);

            if main[0].width != app_state.last_known_width
                || main[0].height != app_state.last_known_height
            {
                app_state.set_rect(main[0]);
            }

            app_state.sidebar.render(
                frame,
                columns[0],
                &app_state.board,
                app_state.credits,
                app_state.max_credits,
            );

            if app_state.showing_help {
                frame.render_widget(Paragraph::new(help_text()), main[0]);
            } else {
                app_state
                    .transcript
                    .render(frame, main[0], app_state.scroll.position);
                frame.render_stateful_widget(
                    Scrollbar::new(ScrollbarOrientation::VerticalRight),
                    main[0].inner(&Margin {
                        vertical: 1,
                        horizontal: 0,
                    }),
                    &mut app_state.scroll.scrollbar_state,
                );
            }

            if let Some(status) = &app_state.status {
                frame.render_widget(
                    Paragraph::new(Line::from(Span::styled(
                        status.text.to_string(),
                        status_style(status.level),
                    ))),
                    main[1],
                );
            }

            if app_state.waiting_for_assistant {
                loading.render(frame, main[2]);
            } else {
                frame.render_widget(textarea.widget(), main[2]);
            }
        })?;

        match events.next().await? {
            Event::AssistantError(err) => {
                app_state.handle_assistant_error(&err);
            }
            Event::AssistantResponse(res) => {
                app_state.handle_assistant_response(res);
            }
            Event::KeyboardCTRLC() => {
                if !app_state.abort_pending(&tx)? {
                    break;
                }
            }
            Event::KeyboardEnter() => {
                if app_state.waiting_for_assistant {
                    continue;
                }

                let input_str = textarea.lines().join("\n").trim().to_string();
                if input_str.is_empty() {
                    continue;
                }
                textarea = TextArea::default();

                let (should_break, was_handled) =
                    app_state.handle_slash_commands(&input_str, &tx)?;
                if should_break {
                    break;
                }
                if !was_handled {
                    app_state.submit_prompt(&input_str, &tx)?;
                }
            }
            Event::KeyboardPaste(text) => {
                textarea.insert_str(text.replace('\n', " "));
            }
            Event::KeyboardCharInput(input) => {
                if !app_state.waiting_for_assistant {
                    textarea.input(input);
                }
            }
            Event::SidebarPageNext() => {
                let page_count = app_state.board.page_count();
                app_state.sidebar.next_page(page_count);
            }
            Event::SidebarPagePrev() => {
                app_state.sidebar.prev_page();
            }
            Event::UIScrollDown() => {
                app_state.scroll.down();
            }
            Event::UIScrollUp() => {
                app_state.scroll.up();
            }
            Event::UIScrollPageDown() => {
                app_state.scroll.down_page();
            }
            Event::UIScrollPageUp() => {
                app_state.scroll.up_page();
            }
            Event::UITick() => {
                continue;
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    let _ = crossterm::execute!(io::stdout(), cursor::Show);
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    event_rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;
    let mut app_state = AppState::new()?;

    start_loop(&mut terminal, &mut app_state, tx, event_rx).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
