//! Editor-facing command front-end.
//!
//! The UI layer does not build commands itself. Each frame it calls
//! [`EditorCommands::update_commands`] so that the destroy and copy commands
//! match the current selection, raises intents through [`EditorInput`], and
//! hands finished gizmo drags or quick-transform buttons to the
//! `process_*` helpers, which execute and record in one step.

use glam::{Mat4, Quat, Vec3};

use cinder_core::errors::{CinderError, Result};
use cinder_core::math::compose_trs;
use cinder_core::settings::EditorSettings;

use crate::command::Command;
use crate::history::CommandHistory;
use crate::object::{ObjectId, SceneObject};
use crate::scene::EditorScene;

/// One-shot intents raised by key bindings or buttons.
///
/// [`EditorCommands::handle_input`] clears each flag it acts on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorInput {
    pub destroy: bool,
    pub copy: bool,
    pub undo: bool,
    pub redo: bool,
}

/// Quick transforms offered next to the gizmo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformPreset {
    /// Move to the world origin, keeping orientation and scale.
    Origin,
    /// Clear the rotation, keeping position and scale.
    Plumb,
    /// Reset to 1:1 scale, keeping position and orientation.
    UnitScale,
}

impl TransformPreset {
    /// Matrix the preset would move `object` to.
    #[must_use]
    pub fn target_matrix(self, object: &SceneObject) -> Mat4 {
        match self {
            Self::Origin => compose_trs(Vec3::ZERO, object.orientation, object.scale_factor),
            Self::Plumb => compose_trs(object.position, Quat::IDENTITY, object.scale_factor),
            Self::UnitScale => compose_trs(object.position, object.orientation, 1.0),
        }
    }
}

/// Tracks one interactive manipulation from grab to release.
///
/// Feed it whether the manipulator is in use and the object's current matrix
/// every frame; on release it yields the `(start, end)` pair for a move
/// command, unless the object did not actually move.
#[derive(Debug, Clone, Copy, Default)]
pub struct GizmoDrag {
    start: Option<Mat4>,
}

impl GizmoDrag {
    pub fn update(&mut self, using: bool, matrix: Mat4) -> Option<(Mat4, Mat4)> {
        match (self.start, using) {
            (None, true) => {
                self.start = Some(matrix);
                None
            }
            (Some(start), false) => {
                self.start = None;
                (start != matrix).then_some((start, matrix))
            }
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.start.is_some()
    }
}

/// Command history plus the per-frame prepared commands.
#[derive(Debug, Default)]
pub struct EditorCommands {
    pub history: CommandHistory,
    destroy: Command,
    copy: Command,
}

impl EditorCommands {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: &EditorSettings) -> Self {
        Self {
            history: CommandHistory::with_settings(settings),
            ..Self::default()
        }
    }

    /// Forgets all recorded commands, e.g. when another level is loaded.
    pub fn clear(&mut self) {
        self.history.clear();
    }

    /// Rebuilds the destroy and copy commands for the current selection.
    /// Both become [`Command::Null`] when nothing is selected.
    pub fn update_commands(&mut self, scene: &EditorScene) {
        match scene.selected_object().zip(scene.selected()) {
            Some((object, index)) => {
                self.destroy = Command::destroy_object(scene, index).unwrap_or_default();
                self.copy = Command::add_object(object);
            }
            None => {
                self.destroy = Command::Null;
                self.copy = Command::Null;
            }
        }
    }

    #[inline]
    #[must_use]
    pub fn prepared_destroy(&self) -> &Command {
        &self.destroy
    }

    #[inline]
    #[must_use]
    pub fn prepared_copy(&self) -> &Command {
        &self.copy
    }

    /// Acts on raised intents in order: destroy, copy, undo, redo.
    ///
    /// All four flags are cleared up front, so a failing step drops the
    /// remaining intents of this frame instead of replaying them later. A
    /// prepared command is consumed when used; call
    /// [`update_commands`](Self::update_commands) again before the next frame.
    pub fn handle_input(&mut self, input: &mut EditorInput, scene: &mut EditorScene) -> Result<()> {
        let EditorInput {
            destroy,
            copy,
            undo,
            redo,
        } = std::mem::take(input);

        if destroy {
            let command = std::mem::take(&mut self.destroy);
            self.history.execute(command, scene)?;
        }
        if copy {
            let command = std::mem::take(&mut self.copy);
            self.history.execute(command, scene)?;
        }
        if undo {
            self.history.undo_command(scene)?;
        }
        if redo {
            self.history.redo_command(scene)?;
        }
        Ok(())
    }

    /// Moves `target` from `start` to `end` and records it.
    pub fn process_move(
        &mut self,
        scene: &mut EditorScene,
        target: ObjectId,
        start: Mat4,
        end: Mat4,
    ) -> Result<()> {
        let object = scene
            .find(target)
            .ok_or_else(|| CinderError::ObjectNotFound(target.to_string()))?;
        let command = Command::move_object(object, start, end);
        self.history.execute(command, scene)
    }

    /// Destroys the object at `index` and records it.
    pub fn process_destroy(&mut self, scene: &mut EditorScene, index: usize) -> Result<()> {
        let command = Command::destroy_object(scene, index)?;
        self.history.execute(command, scene)
    }

    /// Appends a copy of the object at `index` and records it.
    pub fn process_copy(&mut self, scene: &mut EditorScene, index: usize) -> Result<()> {
        let object = scene
            .get(index)
            .ok_or_else(|| CinderError::ObjectIndexOutOfBounds {
                context: "copy object".to_string(),
                index,
            })?;
        let command = Command::add_object(object);
        self.history.execute(command, scene)
    }

    /// Applies a quick transform to `target` as a recorded move.
    pub fn apply_preset(
        &mut self,
        scene: &mut EditorScene,
        target: ObjectId,
        preset: TransformPreset,
    ) -> Result<()> {
        let object = scene
            .find(target)
            .ok_or_else(|| CinderError::ObjectNotFound(target.to_string()))?;
        let start = object.matrix();
        let end = preset.target_matrix(object);
        self.process_move(scene, target, start, end)
    }
}
