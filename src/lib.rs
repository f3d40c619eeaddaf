#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod input;
pub mod palette;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod stroke;
pub mod surface;
pub mod tool;
pub mod widget;

pub use app::DoodleApp;
pub use config::DoodleConfig;
pub use error::{DoodleError, DoodleResult};
pub use export::Export;
pub use history::History;
pub use input::{InputEvent, InputHandler, PointerAction, PointerTracker};
pub use palette::Palette;
pub use renderer::Renderer;
pub use state::EditorState;
pub use surface::Surface;
pub use tool::{BrushWidth, ToolState};
pub use widget::DoodleWidget;
