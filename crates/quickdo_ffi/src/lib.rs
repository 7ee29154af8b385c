//! Flutter-facing FFI surface for the QuickDo core.

pub mod api;
