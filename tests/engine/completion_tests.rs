//! Completion resolution tests.

use parley_argument::kinds::{BoolKind, GreedyStringKind, WordKind};
use parley_argument::{ArgumentSuggestions, Suggestion, Suggestions, SuggestionsBranch};
use parley_dispatch::{CommandRegistrar, RegistrarConfig};
use parley_engine::CommandDispatcher;
use parley_foundation::CommandSender;
use parley_tree::{CommandTree, TreeLink, argument, literal};

fn register(trees: &[CommandTree]) -> CommandDispatcher {
    let mut registrar = CommandRegistrar::with_config(
        CommandDispatcher::new(),
        RegistrarConfig::new().silent_logs(true),
    );
    for tree in trees {
        registrar.register(tree).unwrap();
    }
    registrar.into_engine()
}

fn simple(name: &str) -> CommandTree {
    CommandTree::new(name).executes(|_, _| Ok(()))
}

#[test]
fn empty_input_suggests_command_names() {
    let dispatcher = register(&[simple("give"), simple("gamemode"), simple("tp")]);
    let out = dispatcher.complete(&CommandSender::console(), "");
    assert_eq!(out.texts(), vec!["give", "gamemode", "tp"]);
    assert_eq!(out.start, 0);
}

#[test]
fn partial_command_name_is_prefix_filtered() {
    let dispatcher = register(&[simple("give"), simple("gamemode"), simple("tp")]);
    let out = dispatcher.complete(&CommandSender::console(), "g");
    assert_eq!(out.texts(), vec!["give", "gamemode"]);

    let out = dispatcher.complete(&CommandSender::console(), "gi");
    assert_eq!(out.texts(), vec!["give"]);
}

#[test]
fn literal_children_suggest_their_names() {
    let tree = CommandTree::new("zone")
        .then(literal("create").executes(|_, _| Ok(())))
        .then(literal("delete").executes(|_, _| Ok(())))
        .then(literal("list").executes(|_, _| Ok(())));
    let dispatcher = register(&[tree]);

    let out = dispatcher.complete(&CommandSender::console(), "zone ");
    assert_eq!(out.texts(), vec!["create", "delete", "list"]);
    assert_eq!(out.start, 5);
}

#[test]
fn typed_children_use_default_suggestions() {
    let tree = CommandTree::new("fly").then(
        argument("enabled", BoolKind::new()).executes(|_, _| Ok(())),
    );
    let dispatcher = register(&[tree]);

    let out = dispatcher.complete(&CommandSender::console(), "fly ");
    assert_eq!(out.texts(), vec!["true", "false"]);

    let out = dispatcher.complete(&CommandSender::console(), "fly t");
    assert_eq!(out.texts(), vec!["true"]);
}

#[test]
fn mixed_siblings_suggest_in_declaration_order() {
    let tree = CommandTree::new("warp")
        .then(literal("add").executes(|_, _| Ok(())))
        .then(
            argument("name", WordKind::new())
                .replace_suggestions(ArgumentSuggestions::strings(["spawn", "arena"]))
                .executes(|_, _| Ok(())),
        );
    let dispatcher = register(&[tree]);

    let out = dispatcher.complete(&CommandSender::console(), "warp ");
    assert_eq!(out.texts(), vec!["add", "spawn", "arena"]);
}

#[test]
fn replacement_offset_points_at_the_current_token() {
    let tree = CommandTree::new("give").then(
        argument("player", WordKind::new())
            .replace_suggestions(ArgumentSuggestions::strings(["alice", "bob"]))
            .executes(|_, _| Ok(())),
    );
    let dispatcher = register(&[tree]);

    let out = dispatcher.complete(&CommandSender::console(), "give al");
    assert_eq!(out.texts(), vec!["alice"]);
    assert_eq!(out.start, 5);
}

#[test]
fn tooltips_ride_along_with_candidates() {
    let tree = CommandTree::new("buy").then(
        argument("item", WordKind::new())
            .replace_suggestions(ArgumentSuggestions::strings_with_tooltips([
                ("sword", "sharp"),
                ("shield", "sturdy"),
            ]))
            .executes(|_, _| Ok(())),
    );
    let dispatcher = register(&[tree]);

    let out = dispatcher.complete(&CommandSender::console(), "buy s");
    assert_eq!(out.suggestions.len(), 2);
    assert_eq!(out.suggestions[0].tooltip.as_deref(), Some("sharp"));
}

#[test]
fn deferred_providers_resolve_at_the_engine_boundary() {
    let provider = ArgumentSuggestions::from_fn(|_| {
        Ok(Suggestions::Deferred(Box::pin(async {
            vec![Suggestion::new("async-candidate")]
        })))
    });

    let tree = CommandTree::new("fetch").then(
        argument("what", WordKind::new())
            .replace_suggestions(provider)
            .executes(|_, _| Ok(())),
    );
    let dispatcher = register(&[tree]);

    let out = dispatcher.complete(&CommandSender::console(), "fetch ");
    assert_eq!(out.texts(), vec!["async-candidate"]);
}

#[test]
fn unknown_prefix_completes_nothing() {
    let dispatcher = register(&[simple("real")]);
    let out = dispatcher.complete(&CommandSender::console(), "fake sub");
    assert!(out.suggestions.is_empty());
}

#[test]
fn candidates_deduplicate_across_merged_paths() {
    // Two commands sharing the "box" literal child under different roots
    // stay separate, but duplicate candidate texts collapse.
    let tree = CommandTree::new("open")
        .then(literal("box").executes(|_, _| Ok(())))
        .then(
            argument("target", WordKind::new())
                .replace_suggestions(ArgumentSuggestions::strings(["box", "chest"]))
                .executes(|_, _| Ok(())),
        );
    let dispatcher = register(&[tree]);

    let out = dispatcher.complete(&CommandSender::console(), "open b");
    assert_eq!(out.texts(), vec!["box"]);
}

#[test]
fn greedy_overlay_completes_word_by_word() {
    let overlay = SuggestionsBranch::suggest([Some(ArgumentSuggestions::strings([
        "give", "tp",
    ]))])
    .branch([Some(SuggestionsBranch::suggest([Some(
        ArgumentSuggestions::strings(["alice", "bob"]),
    )]))]);

    let tree = CommandTree::new("run").then(
        argument("command", GreedyStringKind::new())
            .with_replacements(overlay)
            .executes(|_, _| Ok(())),
    );
    let dispatcher = register(&[tree]);
    let sender = CommandSender::console();

    // First word of the tail.
    let out = dispatcher.complete(&sender, "run ");
    assert_eq!(out.texts(), vec!["give", "tp"]);
    assert_eq!(out.start, 4);

    // Mid-word filtering.
    let out = dispatcher.complete(&sender, "run g");
    assert_eq!(out.texts(), vec!["give"]);

    // Second word, keyed by the first.
    let out = dispatcher.complete(&sender, "run give ");
    assert_eq!(out.texts(), vec!["alice", "bob"]);
    assert_eq!(out.start, 9);

    // Past the overlay: defaults (none for a greedy string).
    let out = dispatcher.complete(&sender, "run tp ");
    assert!(out.suggestions.is_empty());
}
