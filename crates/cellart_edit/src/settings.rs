use std::{fs, io::Write, path::Path, time::Duration};

use cellart_engine::Result;
use serde::{Deserialize, Serialize};

/// Editor settings, persisted as `settings.toml`.
///
/// Missing keys take their default, unknown keys are ignored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSettings {
    /// Cell width divided by cell height
    pub cell_aspect_ratio: f32,

    /// Quiet time before the working grid is written back into its frame
    pub sync_debounce_ms: u64,

    pub default_frame_duration_ms: u32,

    /// Characters that close a typing batch
    pub word_boundary_chars: String,

    /// Freeform path smoothing radius while drawing
    pub preview_smoothing: usize,

    /// Freeform path smoothing radius on release
    pub final_smoothing: usize,

    /// 0 keeps every undo step
    pub max_undo_depth: usize,

    pub canvas_width: i32,
    pub canvas_height: i32,
}

impl Default for EditorSettings {
    fn default() -> Self {
        Self {
            cell_aspect_ratio: 0.6,
            sync_debounce_ms: 150,
            default_frame_duration_ms: 100,
            word_boundary_chars: " .,;:!?\t".to_string(),
            preview_smoothing: 1,
            final_smoothing: 3,
            max_undo_depth: 0,
            canvas_width: 80,
            canvas_height: 24,
        }
    }
}

impl EditorSettings {
    pub const FILE_NAME: &'static str = "settings.toml";

    /// Reads settings from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let txt = fs::read_to_string(path)?;
        Self::from_toml(&txt)
    }

    pub fn from_toml(txt: &str) -> Result<Self> {
        Ok(toml::from_str::<EditorSettings>(txt)?)
    }

    /// Writes to a temporary file first and renames it over `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self)?;
        let temp_path = path.with_extension("toml.tmp");
        let write_result = (|| -> std::io::Result<()> {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(text.as_bytes())?;
            file.sync_all()
        })();
        if let Err(err) = write_result {
            let _ = fs::remove_file(&temp_path);
            return Err(err.into());
        }
        fs::rename(&temp_path, path)?;
        Ok(())
    }

    pub fn sync_debounce(&self) -> Duration {
        Duration::from_millis(self.sync_debounce_ms)
    }

    pub fn is_word_boundary(&self, ch: char) -> bool {
        self.word_boundary_chars.contains(ch)
    }
}
