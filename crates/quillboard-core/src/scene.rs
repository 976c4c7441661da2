//! Scene document: the ordered element list.

use crate::shapes::Element;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scene document containing all committed elements.
///
/// Insertion order doubles as z-order: later elements paint on top and win
/// hit-test ties.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Unique document identifier.
    pub id: String,
    /// Document name.
    pub name: String,
    /// Elements in insertion order.
    elements: Vec<Element>,
}

impl Default for SceneDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneDocument {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: "Untitled".to_string(),
            elements: Vec::new(),
        }
    }

    /// Append an element, returning its index.
    pub fn push(&mut self, element: Element) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    /// Remove the element at `index`, if it exists.
    pub fn remove(&mut self, index: usize) -> Option<Element> {
        if index < self.elements.len() {
            Some(self.elements.remove(index))
        } else {
            None
        }
    }

    /// Get an element by index.
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.elements.get(index)
    }

    /// Get a mutable reference to an element by index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Element> {
        self.elements.get_mut(index)
    }

    /// Read-only view of the element list, for painting and export.
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Check if the document is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Get the number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Find the topmost element hit at a point.
    ///
    /// Scans from the most recently inserted element down; the first match
    /// wins, so overlapping elements resolve to the highest index.
    pub fn topmost_hit(&self, point: Point) -> Option<usize> {
        self.elements
            .iter()
            .enumerate()
            .rev()
            .find(|(_, element)| element.hit_test(point))
            .map(|(index, _)| index)
    }

    /// Serialize the document to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a document from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
