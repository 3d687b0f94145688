//! Element extraction
//!
//! [`extract`] resolves a path and records which object-shaped elements live
//! there. The result is an [`ElementSet`] of [`ElementHandle`]s: positions
//! into the target node of the caller's tree, not copies of the elements.
//! Every access through a handle goes back to the live tree, so a field
//! written through a handle is a field of the element inside the document,
//! and the rewrite step sees it without re-reading anything.
//!
//! | Target node | Handles |
//! |-------------|---------|
//! | object | one handle for the object itself |
//! | array | one handle per object member, in order; other members skipped |
//! | scalar | `WrongType` error |

use annotate_core::{resolve_mut, try_resolve, type_name, Error, JsonValue, Result, SlashPath};
use serde_json::{Map, Value};

/// Kind of node an [`ElementSet`] was extracted from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Container {
    /// The path named a single object
    Object,
    /// The path named an array
    Array,
}

/// Reference to one object-typed element of an extraction target
///
/// Handles are created only by [`extract`] and are meaningful only together
/// with the [`ElementSet`] and tree they came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementHandle {
    position: Option<usize>,
}

impl ElementHandle {
    fn target() -> Self {
        ElementHandle { position: None }
    }

    fn member(idx: usize) -> Self {
        ElementHandle {
            position: Some(idx),
        }
    }

    /// Index within the target array, `None` when the target is a single object
    pub fn position(&self) -> Option<usize> {
        self.position
    }
}

/// The object elements found at a path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementSet {
    path: SlashPath,
    container: Container,
    handles: Vec<ElementHandle>,
    skipped: usize,
}

impl ElementSet {
    /// Path the set was extracted from
    pub fn path(&self) -> &SlashPath {
        &self.path
    }

    /// Kind of node found at the path
    pub fn container(&self) -> Container {
        self.container
    }

    /// Handles in document order
    pub fn handles(&self) -> &[ElementHandle] {
        &self.handles
    }

    /// Number of handles
    pub fn len(&self) -> usize {
        self.handles.len()
    }

    /// True when the target array holds no objects
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    /// Array members passed over because they were not objects
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Borrow the elements inside `tree`.
    ///
    /// Fails with `StaleElements` if `tree` no longer has the shape the set
    /// was extracted from.
    pub fn objects<'t>(&self, tree: &'t JsonValue) -> Result<Vec<&'t Map<String, Value>>> {
        let target = try_resolve(tree, &self.path).map_err(|_| self.stale())?;
        let objects: Vec<&Map<String, Value>> = match (self.container, target) {
            (Container::Object, Value::Object(obj)) => vec![obj],
            (Container::Array, Value::Array(items)) => self
                .handles
                .iter()
                .filter_map(|h| items.get(h.position?)?.as_object())
                .collect(),
            _ => return Err(self.stale()),
        };
        if objects.len() != self.handles.len() {
            return Err(self.stale());
        }
        Ok(objects)
    }

    /// Mutably borrow the elements inside `tree`.
    ///
    /// Writes through the returned maps are writes to the document.
    pub fn objects_mut<'t>(
        &self,
        tree: &'t mut JsonValue,
    ) -> Result<Vec<&'t mut Map<String, Value>>> {
        let target = resolve_mut(tree, &self.path).map_err(|_| self.stale())?;
        let objects: Vec<&mut Map<String, Value>> = match (self.container, target) {
            (Container::Object, Value::Object(obj)) => vec![obj],
            (Container::Array, Value::Array(items)) => {
                // Handles are strictly ascending, so one pass pairs them up
                let mut wanted = self.handles.iter().filter_map(|h| h.position).peekable();
                items
                    .iter_mut()
                    .enumerate()
                    .filter_map(|(idx, item)| {
                        if wanted.peek() == Some(&idx) {
                            wanted.next();
                            item.as_object_mut()
                        } else {
                            None
                        }
                    })
                    .collect()
            }
            _ => return Err(self.stale()),
        };
        if objects.len() != self.handles.len() {
            return Err(self.stale());
        }
        Ok(objects)
    }

    /// Check that `tree` still has the shape the set was extracted from.
    pub fn verify(&self, tree: &JsonValue) -> Result<()> {
        self.objects(tree).map(|_| ())
    }

    fn stale(&self) -> Error {
        Error::StaleElements {
            path: self.path.to_string(),
        }
    }
}

/// Collect handles to the object elements at `path`.
///
/// # Errors
///
/// - `NotAnObject` when the root or an intermediate node is not an object
/// - `NotFound` when a segment is missing or the tree is empty
/// - `WrongType` when the target is neither an object nor an array
///
/// # Examples
///
/// ```
/// use annotate_core::{JsonValue, SlashPath};
/// use annotate_engine::extract;
///
/// let doc: JsonValue = r#"{"team": {"members": [{"id": 1}, "x", {"id": 2}]}}"#.parse().unwrap();
/// let set = extract(&doc, &"team/members".parse::<SlashPath>().unwrap()).unwrap();
/// assert_eq!(set.len(), 2);
/// assert_eq!(set.skipped(), 1);
/// ```
pub fn extract(tree: &JsonValue, path: &SlashPath) -> Result<ElementSet> {
    if !tree.is_object() && !tree.is_null() {
        return Err(Error::NotAnObject {
            path: String::new(),
            found: type_name(tree.as_inner()).to_string(),
        });
    }

    let target = try_resolve(tree, path).map_err(|e| e.into_error(path))?;

    let (container, handles, skipped) = match target {
        Value::Object(_) => (Container::Object, vec![ElementHandle::target()], 0),
        Value::Array(items) => {
            let handles: Vec<ElementHandle> = items
                .iter()
                .enumerate()
                .filter(|(_, item)| item.is_object())
                .map(|(idx, _)| ElementHandle::member(idx))
                .collect();
            let skipped = items.len() - handles.len();
            (Container::Array, handles, skipped)
        }
        other => {
            return Err(Error::WrongType {
                path: path.to_string(),
                found: type_name(other).to_string(),
            })
        }
    };

    tracing::debug!(
        target: "annotate::extract",
        path = %path,
        elements = handles.len(),
        skipped,
        "extracted elements"
    );

    Ok(ElementSet {
        path: path.clone(),
        container,
        handles,
        skipped,
    })
}
