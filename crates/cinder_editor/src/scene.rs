use cinder_core::errors::{CinderError, Result};

use crate::object::{ObjectId, SceneObject};

/// The editable level: an ordered object list plus the editor selection.
///
/// Index order is meaningful (it is the persisted order and what the
/// selection refers to); [`ObjectId`]s give commands a handle that survives
/// index shifts.
#[derive(Debug, Clone, Default)]
pub struct EditorScene {
    objects: Vec<SceneObject>,
    selected: Option<usize>,
}

impl EditorScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_objects(objects: Vec<SceneObject>) -> Self {
        Self {
            objects,
            selected: None,
        }
    }

    /// Appends an object without recording a command.
    pub fn spawn(&mut self, object: SceneObject) -> ObjectId {
        let id = object.id();
        self.objects.push(object);
        id
    }

    #[inline]
    #[must_use]
    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    #[inline]
    pub fn objects_mut(&mut self) -> &mut [SceneObject] {
        &mut self.objects
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&SceneObject> {
        self.objects.get(index)
    }

    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut SceneObject> {
        self.objects.get_mut(index)
    }

    #[must_use]
    pub fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|object| object.id() == id)
    }

    #[must_use]
    pub fn find(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.iter().find(|object| object.id() == id)
    }

    pub fn find_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|object| object.id() == id)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Index of the selected object, `None` when nothing is selected.
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selects `index`. Out-of-range indices clear the selection.
    pub fn select(&mut self, index: Option<usize>) {
        self.selected = index.filter(|&i| i < self.objects.len());
    }

    #[must_use]
    pub fn selected_object(&self) -> Option<&SceneObject> {
        self.selected.and_then(|i| self.objects.get(i))
    }

    /// Advances every object by one frame.
    pub fn update(&mut self, dt: f32) {
        for object in &mut self.objects {
            object.update(dt);
        }
    }

    pub(crate) fn push(&mut self, object: SceneObject) -> usize {
        self.objects.push(object);
        self.objects.len() - 1
    }

    pub(crate) fn insert(&mut self, index: usize, object: SceneObject) -> Result<()> {
        if index > self.objects.len() {
            return Err(CinderError::ObjectIndexOutOfBounds {
                context: format!("insert '{}'", object.name),
                index,
            });
        }
        self.objects.insert(index, object);
        Ok(())
    }

    pub(crate) fn remove(&mut self, index: usize) -> Result<SceneObject> {
        if index >= self.objects.len() {
            return Err(CinderError::ObjectIndexOutOfBounds {
                context: "remove object".to_string(),
                index,
            });
        }
        Ok(self.objects.remove(index))
    }
}
