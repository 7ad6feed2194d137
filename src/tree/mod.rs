//! Recursive traversal of a tree source
//!
//! - `Walk`: lazy pre-order iterator over a subtree, siblings sorted by name
//! - `TreeNode`: render-time tree assembled from a walk for the `tree` command

mod node;
mod walker;

pub use node::TreeNode;
pub use walker::{Walk, WalkItem};
