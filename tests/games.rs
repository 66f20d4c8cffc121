use std::path::PathBuf;

use petes_pike::{load_game, Game, Totem};

fn game(name: &str) -> Game {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "games", name].iter().collect();
    load_game(&path).unwrap()
}

fn move_count(solution: &str) -> usize {
    solution
        .split(", ")
        .map(|run| run.split_once('-').unwrap().1.len())
        .sum()
}

#[test]
fn pike_all_solutions() {
    let mut game = game("pike.json");
    game.run_search(false);
    assert_eq!(game.list_solutions(), vec!["X-RU", "B-D, X-RU"]);
}

#[test]
fn pike_first_solution() {
    let mut game = game("pike.json");
    game.run_search(true);
    assert_eq!(game.list_solutions(), vec!["X-RU"]);
}

#[test]
fn column_first_solution_is_not_the_shortest() {
    let mut first = game("column.json");
    first.run_search(true);
    assert_eq!(first.list_solutions(), vec!["B-D, X-R"]);

    let mut all = game("column.json");
    all.run_search(false);
    assert_eq!(all.list_solutions()[0], "X-R");
}

#[test]
fn stranded_pete_has_no_solutions() {
    let mut game = game("stranded.json");
    game.run_search(false);
    assert!(game.list_solutions().is_empty());
}

#[test]
fn summit_search() {
    let mut game = game("summit.json");
    let before: Vec<Totem> = game.totems().to_vec();

    game.run_search(false);

    let solutions = game.list_solutions();
    assert_eq!(solutions.len(), 82);
    assert_eq!(solutions[0], "E-LD, A-RU, C-L, E-UL, X-UL");
    assert_eq!(solutions[1], "E-LD, A-RUR, E-UL, X-UL");
    assert!(solutions
        .windows(2)
        .all(|pair| move_count(&pair[0]) <= move_count(&pair[1])));

    assert_eq!(game.totems(), before.as_slice());
    assert!(game.breadcrumbs().is_empty());
    assert_eq!(game.open_states(), 0);
}

#[test]
fn summit_first_solution() {
    let mut game = game("summit.json");
    game.run_search(true);
    assert_eq!(game.list_solutions(), vec!["E-LD, A-RU, C-L, E-UL, X-UL"]);
}

#[test]
fn every_solution_ends_with_pete_moving() {
    let mut game = game("summit.json");
    game.run_search(false);

    assert!(!game.solutions().is_empty());
    for moves in game.solutions() {
        assert_eq!(moves.last().map(|crumb| crumb.totem.as_str()), Some("X"));
    }
}
