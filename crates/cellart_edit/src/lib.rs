mod editor;
pub use editor::*;

pub mod brushes;
pub mod clipboard;
pub mod frames;
pub mod gradient;
pub mod playback;
pub mod selection;
pub mod settings;
pub mod sync;
pub mod tools;

pub use frames::{Frame, FrameList, FrameStore};
pub use settings::EditorSettings;
pub use tools::{EditTarget, InputFocus, Modifiers, Tool};

// Re-export the data model from cellart_engine
pub use cellart_engine::{
    find_matching_cells, flood_fill, Cell, CellAttributes, Color, EngineError, Grid, GridSnapshot, MatchCriteria, Position, Rectangle, Result, Size,
};
