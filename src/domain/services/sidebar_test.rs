use super::rows;
use super::JobBoard;
use super::Sidebar;
use crate::domain::models::Message;

fn board_with_jobs(count: usize) -> JobBoard {
    let mut board = JobBoard::default();
    for n in 0..count {
        let job = board.new_job();
        board
            .push_message(&job.id, Message::user(&format!("job number {n}")))
            .unwrap();
    }

    return board;
}

#[test]
fn it_numbers_rows_with_the_global_index() {
    let board = board_with_jobs(8);

    let first_page = rows(&board, 0);
    assert_eq!(first_page.len(), 6);
    assert!(first_page[0].text.starts_with("(1) "));

    let second_page = rows(&board, 1);
    assert_eq!(second_page.len(), 2);
    assert!(second_page[0].text.starts_with("(7) "));
    assert!(second_page[1].text.starts_with("(8) "));
}

#[test]
fn it_marks_the_active_job() {
    let board = board_with_jobs(3);
    let active = rows(&board, 0)
        .iter()
        .filter(|row| return row.active)
        .count();
    assert_eq!(active, 1);
}

#[test]
fn it_labels_pinned_jobs() {
    let mut board = board_with_jobs(2);
    let id = board.ordered()[1].id.to_string();
    board.toggle_pin(&id).unwrap();

    let first_row = &rows(&board, 0)[0];
    assert!(first_row.text.ends_with("[pinned]"));
}

#[test]
fn it_flips_pages_within_bounds() {
    let mut sidebar = Sidebar::default();
    sidebar.next_page(3);
    sidebar.next_page(3);
    assert_eq!(sidebar.page(), 2);

    // Already on the last page.
    sidebar.next_page(3);
    assert_eq!(sidebar.page(), 2);

    sidebar.prev_page();
    assert_eq!(sidebar.page(), 1);
    sidebar.prev_page();
    sidebar.prev_page();
    assert_eq!(sidebar.page(), 0);
}

#[test]
fn it_clamps_after_deletes_shrink_the_list() {
    let mut sidebar = Sidebar::default();
    sidebar.next_page(3);
    sidebar.next_page(3);

    sidebar.clamp(2);
    assert_eq!(sidebar.page(), 1);
    sidebar.clamp(0);
    assert_eq!(sidebar.page(), 0);
}
