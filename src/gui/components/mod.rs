//! GUI components

pub mod download_row;
pub mod progress_bar;
pub mod quality_picker;
pub mod url_input;

// Re-export for convenience
pub use download_row::download_row;
pub use progress_bar::progress_bar;
pub use quality_picker::quality_picker;
pub use url_input::url_input;
