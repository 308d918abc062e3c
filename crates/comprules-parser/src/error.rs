//! Structural errors.

use crate::section::Section;

/// The source text does not have the layout the transformation depends on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StructureError {
    /// Input ended before a required marker line was found.
    #[error("missing \"{marker}\" marker line (input ended in the {section} section)")]
    MissingMarker {
        marker: &'static str,
        section: Section,
    },

    /// A marker line appeared where the document layout does not allow it.
    #[error("unexpected \"{marker}\" marker on line {line} in the {section} section")]
    UnexpectedMarker {
        marker: String,
        line: usize,
        section: Section,
    },
}
