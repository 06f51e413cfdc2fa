use glam::Mat4;
use smallvec::SmallVec;

use crate::source::NodeSource;

/// A node of a clip's skeleton: name, bind-pose local transform and owned
/// children in import order. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonNode {
    pub name: String,
    pub transform: Mat4,
    pub children: Vec<SkeletonNode>,
}

impl SkeletonNode {
    #[must_use]
    pub fn new(name: impl Into<String>, transform: Mat4) -> Self {
        Self {
            name: name.into(),
            transform,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_child(mut self, child: SkeletonNode) -> Self {
        self.children.push(child);
        self
    }

    /// Deep-copies an imported node tree, preserving child order.
    #[must_use]
    pub fn from_source(source: &NodeSource) -> Self {
        Self {
            name: source.name.clone(),
            transform: source.transform,
            children: source.children.iter().map(Self::from_source).collect(),
        }
    }

    /// Depth-first, pre-order iteration over this node and its descendants.
    pub fn iter(&self) -> impl Iterator<Item = &SkeletonNode> {
        let mut stack: SmallVec<[&SkeletonNode; 32]> = SmallVec::new();
        stack.push(self);
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    /// First node named `name` in pre-order.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&SkeletonNode> {
        self.iter().find(|node| node.name == name)
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Number of levels, counting this node.
    #[must_use]
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Self::depth).max().unwrap_or(0)
    }
}
