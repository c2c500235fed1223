mod action;
mod appliance;
mod assistant;
mod author;
mod bundle;
mod event;
mod id;
mod job;
mod loading;
mod message;
mod slash_commands;
mod textarea;

pub use action::*;
pub use appliance::*;
pub use assistant::*;
pub use author::*;
pub use bundle::*;
pub use event::*;
pub use id::*;
pub use job::*;
pub use loading::*;
pub use message::*;
pub use slash_commands::*;
pub use textarea::*;
