//! # Cinder Editor
//!
//! Scene objects and the undoable editing layer.
//!
//! - [`SceneObject`] / [`EditorScene`]: the placed objects and the selection
//! - [`Command`]: reversible move / add / destroy operations
//! - [`CommandHistory`]: linear undo/redo log
//! - [`EditorCommands`]: per-frame glue between UI intents and the history

pub mod command;
pub mod editor;
pub mod history;
pub mod object;
pub mod scene;

pub use command::{AddObjectCommand, Command, DestroyObjectCommand, MoveObjectCommand};
pub use editor::{EditorCommands, EditorInput, GizmoDrag, TransformPreset};
pub use history::CommandHistory;
pub use object::{ObjectId, SceneObject};
pub use scene::EditorScene;
