//! Registrar behavior against a recording engine.

use std::cell::RefCell;

use parley_argument::ArgumentSuggestions;
use parley_argument::kinds::{GreedyStringKind, IntegerKind, WordKind};
use parley_dispatch::{
    CommandHandler, CommandRegistrar, GrammarEngine, NodeHandle, ParseHook, RegistrarConfig,
    SuggestHook,
};
use parley_foundation::Type;
use parley_tree::{CommandTree, TreeLink, argument, literal};

/// Records every engine call the registrar makes.
#[derive(Default)]
struct RecordingEngine {
    next: u64,
    calls: RefCell<Vec<String>>,
    executors: usize,
}

impl RecordingEngine {
    fn log(&self, entry: String) {
        self.calls.borrow_mut().push(entry);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl GrammarEngine for RecordingEngine {
    fn register_literal(&mut self, path: &[NodeHandle], name: &str) -> NodeHandle {
        self.next += 1;
        self.log(format!("literal {name} depth={}", path.len()));
        NodeHandle(self.next)
    }

    fn register_argument(
        &mut self,
        path: &[NodeHandle],
        name: &str,
        ty: Type,
        greedy: bool,
        _parser: ParseHook,
        _suggester: SuggestHook,
    ) -> NodeHandle {
        self.next += 1;
        self.log(format!(
            "argument {name}:{ty} greedy={greedy} depth={}",
            path.len()
        ));
        NodeHandle(self.next)
    }

    fn attach_executor(&mut self, node: NodeHandle, _handler: CommandHandler) {
        self.executors += 1;
        self.log(format!("executor @{}", node.0));
    }
}

fn quiet() -> RegistrarConfig {
    RegistrarConfig::new().silent_logs(true)
}

#[test]
fn registration_drives_the_engine_in_path_order() {
    let tree = CommandTree::new("give").then(
        literal("item").then(
            argument("name", WordKind::new()).then(
                argument("amount", IntegerKind::new()).executes(|_, _| Ok(())),
            ),
        ),
    );

    let mut registrar = CommandRegistrar::with_config(RecordingEngine::default(), quiet());
    registrar.register(&tree).unwrap();

    assert_eq!(
        registrar.engine().calls(),
        vec![
            "literal give depth=0",
            "literal item depth=1",
            "argument name:string greedy=false depth=2",
            "argument amount:int greedy=false depth=3",
            "executor @4",
        ]
    );
}

#[test]
fn greedy_kind_is_flagged_to_the_engine() {
    let tree = CommandTree::new("say").then(
        argument("message", GreedyStringKind::new()).executes(|_, _| Ok(())),
    );

    let mut registrar = CommandRegistrar::with_config(RecordingEngine::default(), quiet());
    registrar.register(&tree).unwrap();

    assert!(registrar
        .engine()
        .calls()
        .iter()
        .any(|c| c == "argument message:string greedy=true depth=1"));
}

#[test]
fn each_execution_is_submitted_separately() {
    let tree = CommandTree::new("tp")
        .executes(|_, _| Ok(()))
        .then(argument("target", WordKind::new()).executes(|_, _| Ok(())));

    let mut registrar = CommandRegistrar::with_config(RecordingEngine::default(), quiet());
    registrar.register(&tree).unwrap();

    // One executor per execution; the engine is free to de-duplicate the
    // shared "tp" literal it was handed twice.
    assert_eq!(registrar.engine().executors, 2);
    let literal_count = registrar
        .engine()
        .calls()
        .iter()
        .filter(|c| c.starts_with("literal tp"))
        .count();
    assert_eq!(literal_count, 2);
}

#[test]
fn aliases_register_the_full_tree_again() {
    let tree = CommandTree::new("msg")
        .alias("tell")
        .alias("w")
        .then(argument("text", GreedyStringKind::new()).executes(|_, _| Ok(())));

    let mut registrar = CommandRegistrar::with_config(RecordingEngine::default(), quiet());
    registrar.register(&tree).unwrap();

    let calls = registrar.engine().calls();
    for label in ["msg", "tell", "w"] {
        assert!(calls.iter().any(|c| *c == format!("literal {label} depth=0")));
    }
    assert_eq!(registrar.engine().executors, 3);
}

#[test]
fn registry_retains_compiled_executions() {
    let tree = CommandTree::new("give").then(
        argument("player", WordKind::new())
            .executes(|_, _| Ok(()))
            .then(argument("item", WordKind::new()).executes(|_, _| Ok(()))),
    );

    let mut registrar = CommandRegistrar::with_config(RecordingEngine::default(), quiet());
    registrar.register(&tree).unwrap();

    let commands = registrar.commands();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].name(), "give");
    assert_eq!(commands[0].executions().len(), 2);
    assert_eq!(commands[0].executions()[0].arguments().len(), 1);
    assert_eq!(commands[0].executions()[1].arguments().len(), 2);
}

#[test]
fn duplicate_names_fail_fast() {
    let mut registrar = CommandRegistrar::with_config(RecordingEngine::default(), quiet());
    registrar
        .register(&CommandTree::new("home").executes(|_, _| Ok(())))
        .unwrap();

    let again = CommandTree::new("home").executes(|_, _| Ok(()));
    assert!(registrar.register(&again).unwrap_err().is_configuration());

    // Alias collisions count too.
    let aliased = CommandTree::new("base").alias("home").executes(|_, _| Ok(()));
    assert!(registrar.register(&aliased).unwrap_err().is_configuration());
}

#[test]
fn overlay_wider_than_any_path_fails_fast() {
    let tree = CommandTree::new("cmd").then(
        argument("only", WordKind::new())
            .replace_suggestions_seq([
                Some(ArgumentSuggestions::strings(["a"])),
                Some(ArgumentSuggestions::strings(["b"])),
            ])
            .executes(|_, _| Ok(())),
    );

    let mut registrar = CommandRegistrar::with_config(RecordingEngine::default(), quiet());
    let err = registrar.register(&tree).unwrap_err();
    assert!(err.is_configuration());
    assert!(format!("{err}").contains("overlay"));
}

#[test]
fn overlay_fitting_the_deepest_path_is_accepted() {
    let tree = CommandTree::new("cmd").then(
        argument("first", WordKind::new())
            .replace_suggestions_seq([
                Some(ArgumentSuggestions::strings(["a"])),
                Some(ArgumentSuggestions::strings(["b"])),
            ])
            .then(argument("second", WordKind::new()).executes(|_, _| Ok(()))),
    );

    let mut registrar = CommandRegistrar::with_config(RecordingEngine::default(), quiet());
    registrar.register(&tree).unwrap();
}

#[test]
fn dispatcher_dump_describes_the_registered_tree() {
    let dump_path = std::env::temp_dir().join(format!(
        "parley_dump_test_{}.json",
        std::process::id()
    ));

    let config = quiet().dispatcher_file(dump_path.clone());
    let mut registrar = CommandRegistrar::with_config(RecordingEngine::default(), config);

    let tree = CommandTree::new("give").then(
        literal("item").then(argument("name", WordKind::new()).executes(|_, _| Ok(()))),
    );
    registrar.register(&tree).unwrap();

    let json = std::fs::read_to_string(&dump_path).unwrap();
    std::fs::remove_file(&dump_path).ok();

    assert!(json.contains("\"give\""));
    assert!(json.contains("\"item\""));
    assert!(json.contains("\"literal\": true"));
    assert!(json.contains("\"string\""));
}
