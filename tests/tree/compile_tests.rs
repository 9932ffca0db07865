//! Execution compilation tests.

use std::sync::Arc;

use parley_argument::kinds::WordKind;
use parley_tree::{Argument, CommandTree, Execution, TreeLink, argument, literal};

fn names(execution: &Execution) -> Vec<&str> {
    execution.arguments().iter().map(Argument::name).collect()
}

#[test]
fn scenario_a_single_leaf_executor() {
    // root -> literal("give") -> player -> item, executor on item.
    let tree = CommandTree::new("root").then(
        literal("give").then(
            argument("player", WordKind::new())
                .then(argument("item", WordKind::new()).executes(|_, _| Ok(()))),
        ),
    );

    let executions = tree.executions();
    assert_eq!(executions.len(), 1);
    assert_eq!(names(&executions[0]), vec!["give", "player", "item"]);
}

#[test]
fn scenario_b_interior_and_leaf_executors() {
    let tree = CommandTree::new("root").then(
        literal("give").then(
            argument("player", WordKind::new())
                .executes(|_, _| Ok(()))
                .then(argument("item", WordKind::new()).executes(|_, _| Ok(()))),
        ),
    );

    let executions = tree.executions();
    assert_eq!(executions.len(), 2);
    assert_eq!(names(&executions[0]), vec!["give", "player"]);
    assert_eq!(names(&executions[1]), vec!["give", "player", "item"]);
}

#[test]
fn execution_count_matches_executor_count() {
    // Five nodes carry executors, spread over depth and siblings, plus one
    // on the root itself.
    let tree = CommandTree::new("root")
        .executes(|_, _| Ok(()))
        .then(
            literal("a")
                .executes(|_, _| Ok(()))
                .then(literal("deep").then(literal("deeper").executes(|_, _| Ok(())))),
        )
        .then(literal("b").executes(|_, _| Ok(())))
        .then(literal("dead"))
        .then(literal("c").executes(|_, _| Ok(())));

    assert_eq!(tree.executions().len(), 5);
}

#[test]
fn root_execution_has_empty_sequence() {
    let tree = CommandTree::new("ping").executes(|_, _| Ok(()));
    let executions = tree.executions();
    assert_eq!(executions.len(), 1);
    assert!(executions[0].arguments().is_empty());
}

#[test]
fn own_execution_precedes_descendants() {
    let tree = CommandTree::new("root").then(
        literal("a")
            .executes(|_, _| Ok(()))
            .then(literal("b").executes(|_, _| Ok(()))),
    );

    let executions = tree.executions();
    assert_eq!(names(&executions[0]), vec!["a"]);
    assert_eq!(names(&executions[1]), vec!["a", "b"]);
}

#[test]
fn shared_prefix_compiles_to_shared_descriptors() {
    // Two executions through the same nodes: the shared-prefix arguments
    // are clones sharing one descriptor.
    let tree = CommandTree::new("root").then(
        literal("give").then(
            argument("player", WordKind::new())
                .executes(|_, _| Ok(()))
                .then(argument("item", WordKind::new()).executes(|_, _| Ok(()))),
        ),
    );

    let executions = tree.executions();
    let give_a = &executions[0].arguments()[0];
    let give_b = &executions[1].arguments()[0];
    assert!(Arc::ptr_eq(give_a.kind(), give_b.kind()));

    let player_a = &executions[0].arguments()[1];
    let player_b = &executions[1].arguments()[1];
    assert!(Arc::ptr_eq(player_a.kind(), player_b.kind()));
}

#[test]
fn recompiling_unmodified_tree_is_identical() {
    let tree = CommandTree::new("root")
        .then(literal("x").executes(|_, _| Ok(())))
        .then(
            argument("n", WordKind::new())
                .executes(|_, _| Ok(()))
                .then(literal("y").executes(|_, _| Ok(()))),
        );

    let first = tree.executions();
    let second = tree.executions();
    let first: Vec<Vec<&str>> = first.iter().map(names).collect();
    let second: Vec<Vec<&str>> = second.iter().map(names).collect();
    assert_eq!(first, second);
}

#[test]
fn prepended_by_builds_front_to_back() {
    let execution = Execution::new(
        vec![Argument::literal("leaf")],
        parley_tree::Executor::none(),
    );
    let execution = execution.prepended_by(Argument::literal("mid"));
    let execution = execution.prepended_by(Argument::literal("root"));
    assert_eq!(names(&execution), vec!["root", "mid", "leaf"]);
}
