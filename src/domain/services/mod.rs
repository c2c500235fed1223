pub mod actions;
pub mod app_state;
pub mod events;
pub mod job_board;
pub mod scroll;
pub mod sidebar;
pub mod summarizer;
pub mod transcript;

pub use actions::*;
pub use app_state::*;
pub use events::*;
pub use job_board::*;
pub use scroll::*;
pub use sidebar::*;
pub use summarizer::*;
pub use transcript::*;
