// src/config/state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    pub window_w: f32,
    pub window_h: f32,

    /// Download directory text field (mapped onto ExportOptions on use)
    pub download_dir_text: String,
    pub download_dir_dirty: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            window_w: 1200.0,
            window_h: 760.0,
            download_dir_text: s!(),
            download_dir_dirty: false,
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
        let gui = GuiState {
            download_dir_text: options.export.download_dir().to_string_lossy().into_owned(),
            ..GuiState::default()
        };
        Self { options, gui }
    }
}
