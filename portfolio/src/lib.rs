pub mod chat;
pub mod chat_ui;
pub mod content;
pub mod fx;
pub mod renderer;
pub mod simulation;
pub mod site_ui;
pub mod sprites;

pub use renderer::Renderer;
pub use simulation::{Phase, SimConfig, Simulation};
