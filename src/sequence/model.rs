//! Data model for sequences and their executable steps.
//!
//! These structs mirror the remote collection's JSON shape. The `dirty` flag
//! is client-only bookkeeping and never crosses the wire.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// Server-assigned identifier for a persisted sequence.
///
/// Assigned exactly once, by the server, on first successful persist. The
/// client never fabricates or mutates one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SequenceId(pub i64);

impl std::fmt::Display for SequenceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// LABEL COLOR
// =============================================================================

/// Label color for a sequence. Serialized lowercase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[default]
    Gray,
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
    Pink,
}

// =============================================================================
// STEP
// =============================================================================

/// A single executable command inside a sequence body.
///
/// Steps share the kind/args vocabulary with sequences: `kind` discriminates
/// the command and `args` is its opaque argument bag. The editor does not
/// interpret either.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Command discriminator, e.g. "move_relative" or "wait".
    pub kind: String,

    /// Opaque command arguments.
    #[serde(default)]
    pub args: Map<String, Value>,

    /// Optional author note attached to this step.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Step {
    /// Creates a new step of the given kind with empty args.
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            args: Map::new(),
            comment: None,
        }
    }

    /// Builder: Set one argument.
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    /// Builder: Set the comment.
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

// =============================================================================
// SEQUENCE
// =============================================================================

fn sequence_kind() -> String {
    "sequence".to_string()
}

/// A named, colored, ordered program composed of steps.
///
/// `body` order is execution order. `id` is present iff the sequence has been
/// persisted at least once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sequence {
    /// Server-assigned id; absent until the first successful persist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<SequenceId>,

    /// Display name.
    pub name: String,

    /// Label color.
    #[serde(default)]
    pub color: Color,

    /// Entity discriminator, always "sequence".
    #[serde(default = "sequence_kind")]
    pub kind: String,

    /// Opaque configuration bag.
    #[serde(default)]
    pub args: Map<String, Value>,

    /// Ordered step body; order is execution order.
    #[serde(default)]
    pub body: Vec<Step>,

    /// True when name/color/body have diverged from the last persisted state.
    /// Client-only; never serialized.
    #[serde(skip)]
    pub dirty: bool,
}

impl Sequence {
    /// Creates a well-formed unsaved sequence: no id, empty body, not dirty.
    pub fn new() -> Self {
        Self {
            id: None,
            name: "New Sequence".to_string(),
            color: Color::Gray,
            kind: sequence_kind(),
            args: Map::new(),
            body: Vec::new(),
            dirty: false,
        }
    }

    /// Builder: Set the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builder: Set the color.
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Builder: Set the id, as a server fixture would.
    pub fn with_id(mut self, id: SequenceId) -> Self {
        self.id = Some(id);
        self
    }

    /// Builder: Append a step.
    pub fn with_step(mut self, step: Step) -> Self {
        self.body.push(step);
        self
    }

    /// True once the server has assigned this sequence an id.
    pub fn is_saved(&self) -> bool {
        self.id.is_some()
    }

    /// Name for user-facing messages, with a fallback for unnamed sequences.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            "sequence"
        } else {
            &self.name
        }
    }
}

impl Default for Sequence {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
