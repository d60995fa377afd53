pub mod terminal;

pub use terminal::{render_dashboard, LOAD_FAILED};
