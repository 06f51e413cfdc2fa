//! Reversible editor operations.
//!
//! Every [`Command`] variant pairs an `execute` with an exact inverse `undo`:
//! executing then undoing leaves the fields the command touches as they were.
//! Commands are executed once when issued and then re-executed or undone by
//! [`CommandHistory`](crate::history::CommandHistory) as the cursor moves.

use glam::Mat4;

use cinder_core::errors::{CinderError, Result};

use crate::object::{ObjectId, SceneObject};
use crate::scene::EditorScene;

/// Moves an object between two transforms.
///
/// Both matrices are decomposed into position, orientation and a uniform
/// scale when applied.
#[derive(Debug, Clone)]
pub struct MoveObjectCommand {
    target: ObjectId,
    object_name: String,
    pub start: Mat4,
    pub end: Mat4,
}

impl MoveObjectCommand {
    #[must_use]
    pub fn new(object: &SceneObject, start: Mat4, end: Mat4) -> Self {
        Self {
            target: object.id(),
            object_name: object.name.clone(),
            start,
            end,
        }
    }

    #[inline]
    #[must_use]
    pub fn target(&self) -> ObjectId {
        self.target
    }

    fn apply(&self, scene: &mut EditorScene, matrix: Mat4) -> Result<()> {
        let object = scene
            .find_mut(self.target)
            .ok_or_else(|| CinderError::ObjectNotFound(self.object_name.clone()))?;
        object.apply_matrix(matrix);
        Ok(())
    }
}

/// Appends a copy of a template object and selects it.
#[derive(Debug, Clone)]
pub struct AddObjectCommand {
    original: SceneObject,
    added: Option<ObjectId>,
}

impl AddObjectCommand {
    #[must_use]
    pub fn new(original: &SceneObject) -> Self {
        Self {
            original: original.clone(),
            added: None,
        }
    }

    /// Id of the copy, assigned on first execution and reused on redo.
    #[inline]
    #[must_use]
    pub fn added(&self) -> Option<ObjectId> {
        self.added
    }
}

/// Removes the object at an index, keeping a snapshot to restore it.
#[derive(Debug, Clone)]
pub struct DestroyObjectCommand {
    index: usize,
    copy: SceneObject,
}

impl DestroyObjectCommand {
    pub fn new(scene: &EditorScene, index: usize) -> Result<Self> {
        let copy = scene
            .get(index)
            .cloned()
            .ok_or_else(|| CinderError::ObjectIndexOutOfBounds {
                context: "destroy object".to_string(),
                index,
            })?;
        Ok(Self { index, copy })
    }

    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }
}

/// A reversible editor operation.
#[derive(Debug, Clone, Default)]
pub enum Command {
    /// Nothing selected, nothing to do. Safe to execute and record.
    #[default]
    Null,
    MoveObject(MoveObjectCommand),
    AddObject(AddObjectCommand),
    DestroyObject(DestroyObjectCommand),
}

impl Command {
    #[must_use]
    pub fn move_object(object: &SceneObject, start: Mat4, end: Mat4) -> Self {
        Self::MoveObject(MoveObjectCommand::new(object, start, end))
    }

    #[must_use]
    pub fn add_object(original: &SceneObject) -> Self {
        Self::AddObject(AddObjectCommand::new(original))
    }

    pub fn destroy_object(scene: &EditorScene, index: usize) -> Result<Self> {
        DestroyObjectCommand::new(scene, index).map(Self::DestroyObject)
    }

    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Short label for the history list.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::Null => "Null Command.".to_string(),
            Self::MoveObject(cmd) => format!("Move Object: \"{}\". ", cmd.object_name),
            Self::AddObject(cmd) => format!("Add Object: \"{}\".", cmd.original.name),
            Self::DestroyObject(cmd) => format!("Destroy Object: \"{}\".", cmd.copy.name),
        }
    }

    /// Multi-line description including the captured state.
    #[must_use]
    pub fn details(&self) -> String {
        match self {
            Self::Null => "Null Command.".to_string(),
            Self::MoveObject(cmd) => format!(
                "Move Object {} from\n{}\nto\n{}",
                cmd.object_name, cmd.start, cmd.end
            ),
            Self::AddObject(cmd) => format!("Add Object {}", cmd.original.name),
            Self::DestroyObject(cmd) => {
                format!("Destroy Object {} at index {}", cmd.copy.name, cmd.index)
            }
        }
    }

    pub fn log_details(&self) {
        log::info!("{}", self.details());
    }

    /// Applies the command (forward / redo direction).
    pub fn execute(&mut self, scene: &mut EditorScene) -> Result<()> {
        match self {
            Self::Null => {
                log::info!("Null Command Execute");
            }
            Self::MoveObject(cmd) => cmd.apply(scene, cmd.end)?,
            Self::AddObject(cmd) => {
                let id = *cmd.added.get_or_insert_with(ObjectId::new);
                let mut copy = cmd.original.clone();
                copy.set_id(id);
                let index = scene.push(copy);
                scene.select(Some(index));
            }
            Self::DestroyObject(cmd) => {
                cmd.copy = scene.remove(cmd.index)?;
                scene.select(None);
            }
        }
        Ok(())
    }

    /// Reverses a previous [`execute`](Self::execute).
    pub fn undo(&mut self, scene: &mut EditorScene) -> Result<()> {
        match self {
            Self::Null => {
                log::info!("Null Command Undo");
            }
            Self::MoveObject(cmd) => cmd.apply(scene, cmd.start)?,
            Self::AddObject(cmd) => {
                let name = &cmd.original.name;
                let index = cmd
                    .added
                    .and_then(|id| scene.index_of(id))
                    .ok_or_else(|| CinderError::ObjectNotFound(name.clone()))?;
                if index + 1 != scene.len() {
                    log::debug!("Undoing add of '{name}' which is no longer last (index {index})");
                }
                scene.remove(index)?;
                scene.select(None);
            }
            Self::DestroyObject(cmd) => {
                scene.insert(cmd.index, cmd.copy.clone())?;
                scene.select(Some(cmd.index));
            }
        }
        Ok(())
    }
}
