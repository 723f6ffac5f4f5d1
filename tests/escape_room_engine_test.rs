//! End-to-end tests driving the engine with scripted input.

use escape_room::{GameConfig, GameEngine, GameOutcome, ItemKind, escape_room};

/// Runs a script against the built-in room and hands back the outcome and the engine.
fn play(script: &str) -> (GameOutcome, GameEngine<&[u8], Vec<u8>>) {
    let config = GameConfig::default().without_banner();
    let mut engine = GameEngine::new(config, script.as_bytes(), Vec::new());
    let outcome = engine.run().expect("Session failed");
    (outcome, engine)
}

fn output_of(engine: GameEngine<&[u8], Vec<u8>>) -> String {
    String::from_utf8(engine.into_output()).expect("Output is UTF-8")
}

fn current_room_name(engine: &GameEngine<&[u8], Vec<u8>>) -> String {
    use escape_room::GameComponent;
    engine
        .world()
        .room(engine.player().current_room())
        .name()
        .to_string()
}

#[test]
fn test_safe_lock_grants_gold_key() {
    let script = "move library\nsolve Safe Lock\n1234\ninspect Safe Lock\ninventory\n";
    let (outcome, engine) = play(script);

    assert_eq!(outcome, GameOutcome::InputClosed { turns: 5 });
    assert!(engine.player().has_key("Gold Key"));
    assert_eq!(engine.world().puzzle_progress(), (1, 3));

    let text = output_of(engine);
    assert!(text.contains("Enter your answer: "));
    assert!(text.contains("Code accepted! The puzzle is solved!"));
    assert!(text.contains("You received: Gold Key"));
    assert!(text.contains("Status: SOLVED"));
    assert!(text.contains("  - Gold Key (KEY)"));
}

#[test]
fn test_redundant_solves_grant_reward_once() {
    let script = "move library\n\
                  solve safe lock\n1234\n\
                  solve safe lock\n1234\n\
                  solve SAFE LOCK\nnonsense\n";
    let (_, engine) = play(script);

    let gold_keys = engine
        .player()
        .inventory()
        .iter()
        .filter(|item| item.name() == "Gold Key")
        .count();
    assert_eq!(gold_keys, 1);

    let text = output_of(engine);
    assert_eq!(text.matches("This puzzle is already solved!").count(), 2);
    assert_eq!(text.matches("You received: Gold Key").count(), 1);
}

#[test]
fn test_wrong_and_blank_answers_leave_puzzle_unsolved() {
    let script = "solve ancient riddle\nwind\nsolve ancient riddle\n   \n";
    let (outcome, engine) = play(script);

    assert_eq!(outcome, GameOutcome::InputClosed { turns: 3 });
    assert!(engine.player().inventory().is_empty());
    assert_eq!(engine.world().puzzle_progress(), (0, 3));

    let text = output_of(engine);
    assert!(text.contains("Wrong answer. Try again!"));
    assert!(text.contains("Answer cannot be empty!"));
}

#[test]
fn test_basement_not_reachable_from_entrance() {
    let (_, engine) = play("move dark basement\nmove basement\n");
    assert_eq!(current_room_name(&engine), "Entrance Hall");
    assert!(engine.player().history().is_empty());

    let text = output_of(engine);
    assert_eq!(text.matches("You can't go there from here!").count(), 2);
}

#[test]
fn test_basement_locked_without_rusty_key() {
    let (_, engine) = play("move secret corridor\nmove dark basement\n");
    assert_eq!(current_room_name(&engine), "Secret Corridor");

    let text = output_of(engine);
    assert!(text.contains("This room is locked! You need: Rusty Key"));
    assert!(!text.contains("Error: This room is locked"));
}

#[test]
fn test_full_escape_reports_turns() {
    let script = "solve ancient riddle\necho\n\
                  move secret corridor\n\
                  move dark basement\n\
                  move exit door\n\
                  look\n";
    let (outcome, engine) = play(script);

    assert_eq!(outcome, GameOutcome::Escaped { turns: 4 });
    assert_eq!(current_room_name(&engine), "Exit Door");

    let text = output_of(engine);
    assert!(text.contains("You used Rusty Key to unlock the room."));
    assert!(text.contains("CONGRATULATIONS! YOU ESCAPED!"));
    assert!(text.contains("You completed the game in 4 turns!"));
    // The loop stops at the exit; the trailing command is never read.
    assert!(!text.contains("Hi, Exit Door"));
}

#[test]
fn test_quit_stops_immediately() {
    let (outcome, engine) = play("look\nquit\nmove library\n");
    assert_eq!(outcome, GameOutcome::Quit { turns: 2 });
    assert_eq!(current_room_name(&engine), "Entrance Hall");
    assert!(output_of(engine).contains("Thanks for playing!"));
}

#[test]
fn test_pickup_is_case_insensitive_and_moves_item() {
    let (_, engine) = play("pickup flashlight\npickup FLASHLIGHT\npickup ancient riddle\n");

    assert_eq!(engine.player().inventory().len(), 1);
    assert_eq!(*engine.player().inventory()[0].kind(), ItemKind::Tool);

    let text = output_of(engine);
    assert!(text.contains("Picked up: Flashlight"));
    assert!(text.contains("Item not found: FLASHLIGHT"));
    assert!(text.contains("Item not found: ancient riddle"));
}

#[test]
fn test_sort_orders_inventory_by_value() {
    let script = "pickup flashlight\nsolve ancient riddle\necho\nsort\n";
    let (_, engine) = play(script);

    let names: Vec<&str> = engine
        .player()
        .inventory()
        .iter()
        .map(|item| item.name().as_str())
        .collect();
    assert_eq!(names, ["Rusty Key", "Flashlight"]);
    assert!(output_of(engine).contains("Inventory sorted by value."));
}

#[test]
fn test_back_retraces_moves() {
    let script = "move secret corridor\nback\nmove library\nback\nback\n";
    let (_, engine) = play(script);
    assert_eq!(current_room_name(&engine), "Entrance Hall");

    let text = output_of(engine);
    assert_eq!(text.matches("You went back to: Entrance Hall").count(), 2);
    assert!(text.contains("You can't go back any further!"));
}

#[test]
fn test_look_lists_contents_and_locks() {
    let (_, engine) = play("look\nmove library\nlook\n");
    let text = output_of(engine);

    assert!(text.contains("Hi, Entrance Hall"));
    assert!(text.contains("  - Flashlight"));
    assert!(text.contains("  - Ancient Riddle"));
    assert!(text.contains("  - Secret Corridor\n"));
    assert!(text.contains("  - Treasury [LOCKED]"));
}

#[test]
fn test_map_prints_outline_from_entrance() {
    let (_, engine) = play("move library\nmap\n");
    let text = output_of(engine);

    let expected = "=== Game Map (Recursive) ===\n\
                    - Entrance Hall\n\
                    \x20\x20- Library\n\
                    \x20\x20\x20\x20- Treasury\n\
                    \x20\x20- Secret Corridor\n\
                    \x20\x20\x20\x20- Dark Basement\n\
                    \x20\x20\x20\x20\x20\x20- Exit Door [EXIT]\n";
    assert!(text.contains(expected), "map output was:\n{text}");
}

#[test]
fn test_find_searches_reachable_rooms_only() {
    let (_, engine) = play("find old coin\nmove library\nfind old coin\n");
    let text = output_of(engine);

    assert!(text.contains("You sense that old coin lies somewhere ahead."));
    assert!(text.contains("No old coin anywhere you can reach from here."));
}

#[test]
fn test_status_reports_progress() {
    let (_, engine) = play("status\n");
    let text = output_of(engine);

    assert!(text.contains("Current Room: Entrance Hall"));
    assert!(text.contains("Turn: 1"));
    assert!(text.contains("Items in inventory: 0"));
    assert!(text.contains("Puzzles solved: 0/3"));
    assert!(text.contains("Map depth: 3"));
}

#[test]
fn test_undecodable_line_is_an_unknown_command() {
    let script: &[u8] = b"\xff\xfe look\nmove library\nquit\n";
    let config = GameConfig::default().without_banner();
    let mut engine = GameEngine::new(config, script, Vec::new());
    let outcome = engine.run().expect("Session survives bad bytes");

    assert_eq!(outcome, GameOutcome::Quit { turns: 3 });
    assert_eq!(current_room_name(&engine), "Library");

    let text = output_of(engine);
    assert!(text.contains("Error: Unknown command: \u{fffd}\u{fffd}."));
    assert!(text.contains("You moved to: Library"));
}

#[test]
fn test_undecodable_answer_is_just_wrong() {
    let script: &[u8] = b"solve ancient riddle\n\xc3\n";
    let config = GameConfig::default().without_banner();
    let mut engine = GameEngine::new(config, script, Vec::new());
    let outcome = engine.run().expect("Session survives bad bytes");

    assert_eq!(outcome, GameOutcome::InputClosed { turns: 2 });
    assert!(engine.player().inventory().is_empty());
    assert!(output_of(engine).contains("Wrong answer. Try again!"));
}

#[test]
fn test_help_lists_every_command() {
    let text = output_of(play("help\n").1);
    for usage in ["look", "move <room>", "pickup <item>", "solve <puzzle>", "quit"] {
        assert!(text.contains(usage), "help is missing {usage}");
    }
}

#[test]
fn test_banner_and_prompt_follow_config() {
    let config = GameConfig::new(3, "escape? ", true).expect("Valid config");
    let mut engine = GameEngine::with_world(
        escape_room(),
        Vec::new(),
        config,
        "look\n".as_bytes(),
        Vec::new(),
    );
    engine.run().expect("Session failed");

    let text = String::from_utf8(engine.into_output()).expect("Output is UTF-8");
    assert!(text.starts_with("===================================\n  WELCOME TO THE ESCAPE ROOM!"));
    assert_eq!(text.matches("\nescape? ").count(), 2);
    assert!(!text.contains("[HINT]"));
}
