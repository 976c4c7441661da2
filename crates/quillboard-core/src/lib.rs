//! Quillboard Core Library
//!
//! Platform-agnostic element model, geometry, and interaction engine for
//! the Quillboard whiteboard. The host wires pointer/keyboard events into
//! [`Editor::handle_event`] and supplies a [`Painter`] for repaints.

pub mod editor;
pub mod input;
pub mod render;
pub mod scene;
pub mod shapes;
pub mod storage;
pub mod tools;

pub use editor::{resize_handle, Editor, Mode, HANDLE_SIZE};
pub use input::{InputEvent, Key, Modifiers};
pub use render::Painter;
pub use scene::SceneDocument;
pub use shapes::{
    Circle, Element, FontSpec, Freehand, Line, Polygon, Rectangle, Rgba, Style, Text,
    DUPLICATE_OFFSET, HIT_TOLERANCE,
};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError};
pub use tools::{ToolKind, ToolSettings};
