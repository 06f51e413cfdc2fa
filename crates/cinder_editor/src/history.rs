//! Linear undo/redo history.
//!
//! [`CommandHistory`] keeps executed commands in order with a cursor on the
//! most recent one that is in effect. Undo steps the cursor back, redo steps
//! it forward. Recording a new command after an undo discards everything
//! past the cursor; the history never branches.

use std::fmt;

use cinder_core::errors::Result;
use cinder_core::settings::EditorSettings;

use crate::command::Command;
use crate::scene::EditorScene;

/// Ordered, replayable command log.
#[derive(Default)]
pub struct CommandHistory {
    history: Vec<Command>,
    /// Index of the last command in effect, `None` when all are undone.
    current: Option<usize>,
    max_len: Option<usize>,
}

impl CommandHistory {
    /// An unbounded, empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: &EditorSettings) -> Self {
        Self {
            max_len: settings.max_history,
            ..Self::default()
        }
    }

    /// Executes `command` and records it.
    ///
    /// A command that fails to execute is not recorded.
    pub fn execute(&mut self, mut command: Command, scene: &mut EditorScene) -> Result<()> {
        command.execute(scene)?;
        self.add_to_history(command);
        Ok(())
    }

    /// Records an already executed command.
    ///
    /// If commands were undone, they are discarded first.
    pub fn add_to_history(&mut self, command: Command) {
        let keep = self.current.map_or(0, |i| i + 1);
        if keep < self.history.len() {
            log::debug!("Discarding {} undone commands", self.history.len() - keep);
            self.history.truncate(keep);
        }

        log::info!("{}", command.name());
        self.history.push(command);
        self.current = Some(self.history.len() - 1);

        if let Some(max_len) = self.max_len
            && self.history.len() > max_len
        {
            let overflow = self.history.len() - max_len;
            self.history.drain(..overflow);
            self.current = self.history.len().checked_sub(1);
        }
    }

    /// Undoes the command under the cursor and steps back.
    ///
    /// Returns `Ok(false)` when there is nothing to undo. If the undo fails
    /// the cursor does not move.
    pub fn undo_command(&mut self, scene: &mut EditorScene) -> Result<bool> {
        let Some(index) = self.current else {
            return Ok(false);
        };
        let command = &mut self.history[index];
        command.undo(scene)?;
        log::info!("Undo {}", command.name());
        self.current = index.checked_sub(1);
        Ok(true)
    }

    /// Steps forward and re-executes the command there.
    ///
    /// Returns `Ok(false)` when the cursor is already at the newest command.
    /// If the redo fails the cursor does not move.
    pub fn redo_command(&mut self, scene: &mut EditorScene) -> Result<bool> {
        let next = self.current.map_or(0, |i| i + 1);
        let Some(command) = self.history.get_mut(next) else {
            return Ok(false);
        };
        command.execute(scene)?;
        log::info!("Redo {}", command.name());
        self.current = Some(next);
        Ok(true)
    }

    /// Forgets every command.
    pub fn clear(&mut self) {
        self.history.clear();
        self.current = None;
    }

    /// Index of the last command in effect.
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    #[inline]
    #[must_use]
    pub fn commands(&self) -> &[Command] {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.history.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.current.is_some()
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.current.map_or(0, |i| i + 1) < self.history.len()
    }

    /// Name of the command the next undo would revert.
    #[must_use]
    pub fn last_name(&self) -> Option<String> {
        self.current.map(|i| self.history[i].name())
    }

    /// Command names, newest first, each flagged if it is under the cursor.
    pub fn names(&self) -> impl Iterator<Item = (String, bool)> + '_ {
        self.history
            .iter()
            .enumerate()
            .rev()
            .map(|(i, command)| (command.name(), self.current == Some(i)))
    }
}

impl fmt::Debug for CommandHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandHistory")
            .field("len", &self.history.len())
            .field("current", &self.current)
            .field("max_len", &self.max_len)
            .finish()
    }
}
