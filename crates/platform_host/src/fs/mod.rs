//! Read-only mock filesystem consumed by the Terminal, Finder, and Files apps.

pub mod path;
pub mod tree;
pub mod types;
