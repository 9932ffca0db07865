//! Replacement enforcement tests, driven through live dispatch.

use parley_argument::kinds::{GreedyStringKind, WordKind};
use parley_argument::{ArgumentSuggestions, SuggestionsBranch};
use parley_dispatch::{CommandRegistrar, RegistrarConfig};
use parley_engine::CommandDispatcher;
use parley_foundation::{CommandSender, ErrorKind};
use parley_tree::{CommandTree, TreeLink, argument};

fn strings(items: &[&str]) -> ArgumentSuggestions {
    ArgumentSuggestions::strings(items.iter().copied())
}

fn register(tree: &CommandTree) -> CommandDispatcher {
    let mut registrar = CommandRegistrar::with_config(
        CommandDispatcher::new(),
        RegistrarConfig::new().silent_logs(true),
    );
    registrar.register(tree).unwrap();
    registrar.into_engine()
}

#[test]
fn enforced_overlay_rejects_values_outside_the_set() {
    let tree = CommandTree::new("warp").then(
        argument("destination", WordKind::new())
            .replace_suggestions(strings(&["spawn", "nether"]))
            .enforce_replacements(true)
            .executes(|_, _| Ok(())),
    );
    let dispatcher = register(&tree);
    let sender = CommandSender::console();

    dispatcher.dispatch(&sender, "warp spawn").unwrap();

    let err = dispatcher.dispatch(&sender, "warp moon").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::EnforcementRejection { .. }));
    // Cursor points at the offending token.
    assert_eq!(err.cursor(), Some(5));
}

#[test]
fn unenforced_overlay_is_hints_only() {
    let tree = CommandTree::new("warp").then(
        argument("destination", WordKind::new())
            .replace_suggestions(strings(&["spawn", "nether"]))
            .executes(|_, _| Ok(())),
    );
    let dispatcher = register(&tree);

    // Same input, no enforcement flag: the suggestions are advisory.
    dispatcher
        .dispatch(&CommandSender::console(), "warp moon")
        .unwrap();
}

#[test]
fn greedy_overlay_enforces_its_internal_tokens() {
    let overlay = SuggestionsBranch::suggest([Some(strings(&["give", "tp"]))]).branch([
        Some(SuggestionsBranch::suggest([
            Some(strings(&["alice", "bob"])),
            Some(strings(&["diamond", "dirt"])),
            Some(ArgumentSuggestions::empty()),
        ])),
        None,
    ]);

    let tree = CommandTree::new("run").then(
        argument("command", GreedyStringKind::new())
            .with_replacements(overlay)
            .enforce_replacements(true)
            .executes(|_, _| Ok(())),
    );
    let dispatcher = register(&tree);
    let sender = CommandSender::console();

    dispatcher.dispatch(&sender, "run give alice diamond").unwrap();

    // Wrong item inside the selected alternative.
    let err = dispatcher
        .dispatch(&sender, "run give alice emerald")
        .unwrap_err();
    assert_eq!(err.cursor(), Some(15));

    // The empty() slot forbids a fourth token.
    assert!(dispatcher
        .dispatch(&sender, "run give alice diamond more")
        .is_err());

    // The explicit None alternative means "tp" is unconstrained.
    dispatcher
        .dispatch(&sender, "run tp anywhere at all")
        .unwrap();

    // A verb outside the first slot's candidates is rejected there.
    let err = dispatcher.dispatch(&sender, "run fly up").unwrap_err();
    assert_eq!(err.cursor(), Some(4));
}

#[test]
fn enforcement_allows_commands_that_stop_early() {
    let tree = CommandTree::new("mode").then(
        argument("value", WordKind::new())
            .replace_suggestions_seq([
                Some(strings(&["fast", "slow"])),
                Some(strings(&["on", "off"])),
            ])
            .enforce_replacements(true)
            .executes(|_, _| Ok(()))
            .then(argument("toggle", WordKind::new()).executes(|_, _| Ok(()))),
    );
    let dispatcher = register(&tree);
    let sender = CommandSender::console();

    // Only the first overlay position is present; that is legal.
    dispatcher.dispatch(&sender, "mode fast").unwrap();
    dispatcher.dispatch(&sender, "mode fast on").unwrap();
    assert!(dispatcher.dispatch(&sender, "mode fast maybe").is_err());
}
