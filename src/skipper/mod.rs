//! Locating Go test functions and toggling their skip marker.
//!
//! [`SignatureTemplate`] decides which declarations are tests, the toggler
//! plans the marker insertion or removal, and [`toggle_unit`] walks a
//! [`SourceUnit`](crate::source::SourceUnit) applying both.

mod matcher;
mod toggler;
mod visitor;

pub use matcher::{
    is_test, FunctionCandidate, Parameter, SignatureTemplate, TestFunction, DEFAULT_TEST_IMPORT,
    DEFAULT_TEST_PREFIX,
};
pub use toggler::{body_statements, insert_skip, marker_for, remove_skip, SkipMarker, ToggleAction};
pub use visitor::{test_functions, toggle_unit, walk, TestFuncVisitor, ToggleStats, Visitor, Walk};
