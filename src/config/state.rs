// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Directory of the last picked job file; seeds the next open dialog.
    pub last_browse_dir: Option<std::path::PathBuf>,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 960.0,
            window_h: 640.0,
            last_browse_dir: None,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self { options, gui: GuiState::default() }
    }
}
