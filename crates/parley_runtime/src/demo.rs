//! The bundled demonstration command set.
//!
//! Exercises the full surface: literal and typed nodes, executors at
//! interior and leaf positions, sender-typed executors, greedy arguments
//! with branching suggestion overlays, and replacement enforcement.

use parley_argument::kinds::{GreedyStringKind, IntegerKind, WordKind};
use parley_argument::{ArgumentSuggestions, SuggestionsBranch};
use parley_dispatch::{CommandRegistrar, RegistrarConfig};
use parley_engine::CommandDispatcher;
use parley_foundation::{Result, SenderKind};
use parley_tree::{CommandTree, TreeLink, argument};

const DEMO_PLAYERS: [&str; 3] = ["alice", "bob", "carol"];

fn players() -> ArgumentSuggestions {
    ArgumentSuggestions::strings(DEMO_PLAYERS)
}

fn items() -> ArgumentSuggestions {
    ArgumentSuggestions::strings_with_tooltips([
        ("diamond", "a shiny gem"),
        ("dirt", "humble but plentiful"),
        ("torch", "lights the way"),
    ])
}

/// Builds a dispatcher with the demo commands registered.
///
/// # Errors
///
/// Returns an error if any demo command fails registration — which would
/// be a bug in the demo trees themselves.
pub fn build_demo_dispatcher(config: RegistrarConfig) -> Result<CommandDispatcher> {
    let mut registrar = CommandRegistrar::with_config(CommandDispatcher::new(), config);
    registrar.register(&give_command())?;
    registrar.register(&teleport_command())?;
    registrar.register(&say_command())?;
    registrar.register(&sudo_command())?;
    Ok(registrar.into_engine())
}

/// `/give <player> <item> [<amount>]`
fn give_command() -> CommandTree {
    CommandTree::new("give").then(
        argument("player", WordKind::new())
            .replace_suggestions(players())
            .then(
                argument("item", WordKind::new())
                    .replace_suggestions(items())
                    .executes(|sender, args| {
                        println!("[give] {} gives {} one {}", sender.name(), args[0], args[1]);
                        Ok(())
                    })
                    .then(
                        argument("amount", IntegerKind::new().min(1).max(64)).executes(
                            |sender, args| {
                                println!(
                                    "[give] {} gives {} {} of {}",
                                    sender.name(),
                                    args[0],
                                    args[2],
                                    args[1]
                                );
                                Ok(())
                            },
                        ),
                    ),
            ),
    )
}

/// `/tp <target>` (player senders teleport themselves) and
/// `/tp <who> <target>`.
fn teleport_command() -> CommandTree {
    CommandTree::new("tp").alias("teleport").then(
        argument("target", WordKind::new())
            .replace_suggestions(players())
            .executes_for(SenderKind::Player, |sender, args| {
                println!("[tp] {} teleports to {}", sender.name(), args[0]);
                Ok(())
            })
            .then(
                argument("destination", WordKind::new())
                    .replace_suggestions(players())
                    .executes(|_, args| {
                        println!("[tp] {} teleports to {}", args[0], args[1]);
                        Ok(())
                    }),
            ),
    )
}

/// `/say <message...>`
fn say_command() -> CommandTree {
    CommandTree::new("say").alias("broadcast").then(
        argument("message", GreedyStringKind::new()).executes(|sender, args| {
            println!("<{}> {}", sender.name(), args[0]);
            Ok(())
        }),
    )
}

/// `/sudo <player> <command...>` — the greedy command argument carries a
/// branching overlay whose suggestions are also the enforced legal values.
fn sudo_command() -> CommandTree {
    let command_overlay = SuggestionsBranch::suggest([Some(ArgumentSuggestions::strings([
        "give", "tp",
    ]))])
    .branch([
        Some(SuggestionsBranch::suggest([
            Some(players()),
            Some(ArgumentSuggestions::strings(["diamond", "dirt"])),
            Some(ArgumentSuggestions::empty()),
        ])),
        Some(SuggestionsBranch::suggest([
            Some(players()),
            Some(players()),
            Some(ArgumentSuggestions::empty()),
        ])),
    ]);

    CommandTree::new("sudo").then(
        argument("player", WordKind::new())
            .replace_suggestions(players())
            .then(
                argument("command", GreedyStringKind::new())
                    .with_replacements(command_overlay)
                    .enforce_replacements(true)
                    .executes(|sender, args| {
                        println!("[sudo] {} runs as {}: {}", sender.name(), args[0], args[1]);
                        Ok(())
                    }),
            ),
    )
}
