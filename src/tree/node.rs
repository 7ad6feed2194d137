//! TreeNode - render-time tree assembled from a walk

use crate::error::WalkError;
use crate::source::TreeSource;

use super::walker::Walk;

/// A label and its ordered children. Files are leaves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub label: String,
    pub is_dir: bool,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            is_dir: false,
            children: Vec::new(),
        }
    }

    pub fn dir(label: impl Into<String>, children: Vec<TreeNode>) -> Self {
        Self {
            label: label.into(),
            is_dir: true,
            children,
        }
    }

    /// Build the tree below `path`, labelling the root with `path` exactly as given.
    ///
    /// The first failure during the walk aborts the build.
    pub fn build(source: &dyn TreeSource, path: &str) -> Result<Self, WalkError> {
        let walk = Walk::new(source, path)?;
        let mut stack = vec![TreeNode {
            label: path.to_string(),
            is_dir: walk.root().is_dir(),
            children: Vec::new(),
        }];

        for item in walk {
            let item = item?;
            // Close directories we have left; the stack holds one node per level.
            while stack.len() > item.depth {
                close(&mut stack);
            }
            let is_dir = item.entry.is_dir();
            let node = TreeNode {
                label: item.entry.name,
                is_dir,
                children: Vec::new(),
            };
            if node.is_dir {
                stack.push(node);
            } else if let Some(parent) = stack.last_mut() {
                parent.children.push(node);
            }
        }

        while stack.len() > 1 {
            close(&mut stack);
        }
        Ok(stack.pop().unwrap_or_else(|| TreeNode::leaf(path)))
    }

    /// Number of (directories, files) below this node.
    pub fn counts(&self) -> (usize, usize) {
        self.children.iter().fold((0, 0), |(dirs, files), child| {
            let (d, f) = child.counts();
            if child.is_dir {
                (dirs + d + 1, files + f)
            } else {
                (dirs + d, files + f + 1)
            }
        })
    }
}

fn close(stack: &mut Vec<TreeNode>) {
    if let Some(done) = stack.pop() {
        if let Some(parent) = stack.last_mut() {
            parent.children.push(done);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::MemoryTree;

    #[test]
    fn test_build_nested() {
        let tree = MemoryTree::new()
            .with_file("foo", "foo")
            .with_file("folder/bar", "bar");

        let root = TreeNode::build(&tree, ".").unwrap();
        assert_eq!(
            root,
            TreeNode::dir(
                ".",
                vec![
                    TreeNode::dir("folder", vec![TreeNode::leaf("bar")]),
                    TreeNode::leaf("foo"),
                ]
            )
        );
    }

    #[test]
    fn test_build_returns_up_multiple_levels() {
        let tree = MemoryTree::new()
            .with_file("a/b/c/d", "d")
            .with_file("z", "z");

        let root = TreeNode::build(&tree, ".").unwrap();
        assert_eq!(root.children.len(), 2);
        assert_eq!(root.children[0].label, "a");
        assert_eq!(root.children[1].label, "z");
        assert_eq!(root.counts(), (3, 2));
    }

    #[test]
    fn test_root_label_is_the_given_path() {
        let tree = MemoryTree::new().with_file("folder/bar", "bar");
        let root = TreeNode::build(&tree, "folder").unwrap();
        assert_eq!(root.label, "folder");
        assert_eq!(root.children, vec![TreeNode::leaf("bar")]);
    }

    #[test]
    fn test_file_root_has_no_children() {
        let tree = MemoryTree::new().with_file("foo", "foo");
        let root = TreeNode::build(&tree, "foo").unwrap();
        assert_eq!(root, TreeNode::leaf("foo"));
    }

    #[test]
    fn test_child_failure_is_fatal() {
        let tree = MemoryTree::new()
            .with_file("a", "a")
            .with_dangling("folder/broken");
        let err = TreeNode::build(&tree, ".").unwrap_err();
        assert_eq!(err.path(), "folder/broken");
    }
}
