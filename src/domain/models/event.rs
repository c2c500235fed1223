use tui_textarea::Input;

use super::AssistantResponse;

#[derive(Debug)]
pub enum Event {
    AssistantError(String),
    AssistantResponse(AssistantResponse),
    KeyboardCharInput(Input),
    KeyboardCTRLC(),
    KeyboardEnter(),
    KeyboardPaste(String),
    SidebarPageNext(),
    SidebarPagePrev(),
    UIScrollDown(),
    UIScrollUp(),
    UIScrollPageDown(),
    UIScrollPageUp(),
    UITick(),
}
