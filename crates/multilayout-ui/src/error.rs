use multilayout_ui_layout::{Constraints, ConstraintsViolation, LayoutFailure};
use std::fmt;

/// The protocol operation that referenced a child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChildOperation {
    Layout,
    Position,
}

impl fmt::Display for ChildOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChildOperation::Layout => f.write_str("lay out"),
            ChildOperation::Position => f.write_str("position"),
        }
    }
}

/// A violation of the multi-child layout protocol.
///
/// These are programming errors in a delegate or in the code that builds the
/// container's children. They are reported synchronously from the pass that
/// detected them and the pass is abandoned.
#[derive(Debug)]
pub enum LayoutError<Id> {
    /// The delegate referenced an id that no child carries.
    UnknownChild { id: Id, operation: ChildOperation },
    /// The delegate laid out the same child twice in one pass.
    DuplicateLayout { id: Id, child: String },
    /// The pass ended before these children were laid out, in sibling order.
    IncompleteLayout { children: Vec<(Id, String)> },
    /// The delegate handed a child constraints it cannot honor.
    InvalidConstraints {
        id: Id,
        child: String,
        constraints: Constraints,
        violation: ConstraintsViolation,
    },
    /// The container itself was handed constraints it cannot honor.
    InvalidIncomingConstraints {
        constraints: Constraints,
        violation: ConstraintsViolation,
    },
    /// A child reached the pass without an id.
    MissingId { index: usize, child: String },
    /// Two siblings carry the same id.
    DuplicateId { id: Id, first: usize, second: usize },
    /// The engine failed while sizing a child.
    ChildFailed {
        id: Id,
        child: String,
        source: LayoutFailure,
    },
}

impl<Id> LayoutError<Id> {
    /// Ids of the children this error is about, in the order reported.
    pub fn ids(&self) -> Vec<&Id> {
        match self {
            LayoutError::UnknownChild { id, .. }
            | LayoutError::DuplicateLayout { id, .. }
            | LayoutError::InvalidConstraints { id, .. }
            | LayoutError::DuplicateId { id, .. }
            | LayoutError::ChildFailed { id, .. } => vec![id],
            LayoutError::IncompleteLayout { children } => {
                children.iter().map(|(id, _)| id).collect()
            }
            LayoutError::MissingId { .. } | LayoutError::InvalidIncomingConstraints { .. } => {
                Vec::new()
            }
        }
    }
}

impl<Id: fmt::Debug> fmt::Display for LayoutError<Id> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::UnknownChild { id, operation } => write!(
                f,
                "delegate tried to {operation} a non-existent child; there is no child with id {id:?}"
            ),
            LayoutError::DuplicateLayout { id, child } => write!(
                f,
                "delegate tried to lay out the child with id {id:?} more than once ({child}); each child must be laid out exactly once"
            ),
            LayoutError::IncompleteLayout { children } => {
                let noun = if children.len() == 1 {
                    "child"
                } else {
                    "children"
                };
                write!(f, "delegate forgot to lay out the following {noun}:")?;
                for (id, child) in children {
                    write!(f, " {id:?}: {child};")?;
                }
                Ok(())
            }
            LayoutError::InvalidConstraints {
                id,
                child,
                constraints,
                violation,
            } => write!(
                f,
                "delegate provided invalid {constraints} for the child with id {id:?} ({child}): {violation}"
            ),
            LayoutError::InvalidIncomingConstraints {
                constraints,
                violation,
            } => write!(
                f,
                "multi-child layout was given invalid {constraints}: {violation}"
            ),
            LayoutError::MissingId { index, child } => write!(
                f,
                "child {index} ({child}) has no id; every child of a multi-child layout must carry one"
            ),
            LayoutError::DuplicateId { id, first, second } => write!(
                f,
                "children {first} and {second} share the id {id:?}"
            ),
            LayoutError::ChildFailed { id, child, source } => {
                write!(f, "child with id {id:?} ({child}) failed to lay out: {source}")
            }
        }
    }
}

impl<Id: fmt::Debug> std::error::Error for LayoutError<Id> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::ChildFailed { source, .. } => Some(source.as_ref()),
            LayoutError::InvalidConstraints { violation, .. }
            | LayoutError::InvalidIncomingConstraints { violation, .. } => Some(violation),
            _ => None,
        }
    }
}
