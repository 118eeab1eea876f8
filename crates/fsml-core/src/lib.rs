//! FSML Core Library
//!
//! Parses, orders and reorders paths that carry their sibling position in a
//! numeric filename prefix (`01-intro.md`, `02_setup/`).
//! No IO dependencies, pure logic only.
//!

pub mod config;
pub mod error;
pub mod hierarchy;
pub mod model;
pub mod mutation;
pub mod order;
pub mod parser;
pub mod title;


pub use config::{FsmlConfig, NavConfig};
pub use error::{ConfigError, ParsePositionError, PlanError};
pub use hierarchy::{build_nav_tree, build_nav_tree_default};
pub use model::{NavNode, PathDescriptor, Position};
pub use mutation::model::{ReorderPlan, Rename};
pub use mutation::ReorderCase;
pub use mutation::reorder::{compute_new_path, compute_reorder};
pub use order::{compare_paths, sort_paths};
pub use parser::parse_path;
pub use title::title_from_filename;
