//! Annotation module
//!
//! Derives the carpet's labeled markers from its world-space bounds.

mod annotation_layout;

pub use annotation_layout::{
    Annotation, AnnotationLabel, AnnotationLayout, DEFAULT_LABELS,
    find_annotation,
};
