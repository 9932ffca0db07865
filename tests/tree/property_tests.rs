//! Structural properties of compilation over generated trees.

use proptest::prelude::*;

use parley_argument::kinds::WordKind;
use parley_tree::{ArgumentTree, CommandTree, TreeLink, argument};

/// Shape of one generated node.
#[derive(Clone, Debug)]
struct NodeSpec {
    has_executor: bool,
    children: Vec<NodeSpec>,
}

fn node_spec() -> impl Strategy<Value = NodeSpec> {
    let leaf = any::<bool>().prop_map(|has_executor| NodeSpec {
        has_executor,
        children: Vec::new(),
    });
    leaf.prop_recursive(4, 32, 3, |inner| {
        (any::<bool>(), prop::collection::vec(inner, 0..3)).prop_map(
            |(has_executor, children)| NodeSpec {
                has_executor,
                children,
            },
        )
    })
}

/// Builds a node whose name encodes its path, e.g. `n0-2-1`.
fn build(spec: &NodeSpec, path: &str) -> ArgumentTree {
    let mut node = argument(format!("n{path}"), WordKind::new());
    if spec.has_executor {
        node = node.executes(|_, _| Ok(()));
    }
    for (index, child) in spec.children.iter().enumerate() {
        node = node.then(build(child, &format!("{path}-{index}")));
    }
    node
}

fn executor_count(spec: &NodeSpec) -> usize {
    usize::from(spec.has_executor)
        + spec.children.iter().map(executor_count).sum::<usize>()
}

proptest! {
    /// Compilation completeness: one execution per executor-bearing node.
    #[test]
    fn execution_count_equals_executor_count(
        specs in prop::collection::vec(node_spec(), 0..4),
        root_executor in any::<bool>(),
    ) {
        let mut tree = CommandTree::new("cmd");
        if root_executor {
            tree = tree.executes(|_, _| Ok(()));
        }
        for (index, spec) in specs.iter().enumerate() {
            tree = tree.then(build(spec, &index.to_string()));
        }

        let expected = usize::from(root_executor)
            + specs.iter().map(executor_count).sum::<usize>();
        prop_assert_eq!(tree.executions().len(), expected);
    }

    /// Path ordering: every execution's sequence is a root-to-node chain,
    /// which the path-encoding names make checkable as successive
    /// extensions.
    #[test]
    fn execution_sequences_are_root_to_node_paths(
        specs in prop::collection::vec(node_spec(), 1..4),
    ) {
        let mut tree = CommandTree::new("cmd");
        for (index, spec) in specs.iter().enumerate() {
            tree = tree.then(build(spec, &index.to_string()));
        }

        for execution in tree.executions() {
            let names: Vec<&str> =
                execution.arguments().iter().map(|a| a.name()).collect();
            for window in names.windows(2) {
                let (parent, child) = (window[0], window[1]);
                prop_assert!(child.starts_with(parent));
                let suffix = &child[parent.len()..];
                prop_assert!(suffix.starts_with('-'));
                prop_assert!(!suffix[1..].contains('-'));
            }
        }
    }

    /// Compilation is purely structural: rerunning it on an unmodified
    /// tree yields identical output.
    #[test]
    fn recompilation_is_deterministic(
        specs in prop::collection::vec(node_spec(), 0..4),
    ) {
        let mut tree = CommandTree::new("cmd").executes(|_, _| Ok(()));
        for (index, spec) in specs.iter().enumerate() {
            tree = tree.then(build(spec, &index.to_string()));
        }

        let first = tree.executions();
        let second = tree.executions();
        prop_assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            let a_names: Vec<&str> = a.arguments().iter().map(|x| x.name()).collect();
            let b_names: Vec<&str> = b.arguments().iter().map(|x| x.name()).collect();
            prop_assert_eq!(a_names, b_names);
        }
    }
}
