use rustc_hash::FxHashMap;

use super::{Game, GameSearch, OrderingHints, SearchError};

type Path = Vec<&'static str>;

/// A toy game defined entirely by lookup tables: each node names its moves,
/// and leaf scores are keyed by the path from the root. The root player
/// maximizes and turns alternate by ply.
struct TableState {
    path: Path,
    moves: FxHashMap<Path, Vec<&'static str>>,
    leaves: FxHashMap<Path, i32>,
}

fn tree(
    moves: &[(&[&'static str], &[&'static str])],
    leaves: &[(&[&'static str], i32)],
) -> TableState {
    let mut move_table = FxHashMap::default();
    for (path, options) in moves {
        move_table.insert(path.to_vec(), options.to_vec());
    }
    let mut leaf_table = FxHashMap::default();
    for (path, score) in leaves {
        leaf_table.insert(path.to_vec(), *score);
    }
    TableState {
        path: Vec::new(),
        moves: move_table,
        leaves: leaf_table,
    }
}

struct TableGame;

impl Game for TableGame {
    type State = TableState;
    type Move = &'static str;
    type Undo = ();
    type MoveList = Vec<&'static str>;

    fn is_maximizing(state: &TableState) -> bool {
        state.path.len() % 2 == 0
    }

    fn is_terminal(_state: &TableState) -> bool {
        false
    }

    fn score_leaf(state: &mut TableState, _last_move: &&'static str) -> i32 {
        state.leaves.get(&state.path).copied().unwrap_or(0)
    }

    fn score_terminal(_state: &mut TableState) -> i32 {
        0
    }

    fn list_moves(state: &mut TableState, _hints: &OrderingHints<&'static str>) -> Vec<&'static str> {
        state.moves.get(&state.path).cloned().unwrap_or_default()
    }

    fn apply(state: &mut TableState, mv: &&'static str) {
        state.path.push(mv);
    }

    fn undo(state: &mut TableState, _undo: ()) {
        state.path.pop();
    }
}

fn two_ply_tree(ll: i32, lr: i32, rl: i32, rr: i32) -> TableState {
    tree(
        &[
            (&[][..], &["l", "r"][..]),
            (&["l"][..], &["l", "r"][..]),
            (&["r"][..], &["l", "r"][..]),
        ],
        &[
            (&["l", "l"][..], ll),
            (&["l", "r"][..], lr),
            (&["r", "l"][..], rl),
            (&["r", "r"][..], rr),
        ],
    )
}

#[test]
fn test_search_finds_the_minimax_move() {
    // The opponent answers each root move with its minimum: l yields 3,
    // r yields 5.
    let mut state = two_ply_tree(3, 9, 5, 7);
    let mut search = GameSearch::<TableGame>::new(2).unwrap();
    assert_eq!(search.search(&mut state), Ok("r"));
    assert_eq!(search.last_line(), &["r", "l"]);
}

#[test]
fn test_ties_break_toward_the_earliest_move() {
    let mut state = two_ply_tree(5, 5, 5, 5);
    let mut search = GameSearch::<TableGame>::new(2).unwrap();
    assert_eq!(search.search(&mut state), Ok("l"));
}

#[test]
fn test_search_leaves_the_state_where_it_found_it() {
    let mut state = two_ply_tree(3, 9, 5, 7);
    let mut search = GameSearch::<TableGame>::new(2).unwrap();
    search.search(&mut state).unwrap();
    assert!(state.path.is_empty());
}

#[test]
fn test_pruning_skips_dominated_subtrees() {
    // After l guarantees 5, r's first reply already scores 3: the rest of
    // r's subtree can never matter and is cut off.
    let mut state = two_ply_tree(10, 5, 3, 999);
    let mut search = GameSearch::<TableGame>::new(2).unwrap();
    assert_eq!(search.search(&mut state), Ok("l"));
    assert_eq!(search.cutoff_count(), 1);
    // Nodes l, ll, lr, r, rl; rr goes unvisited.
    assert_eq!(search.searched_position_count(), 5);
}

#[test]
fn test_repeated_searches_stay_consistent() {
    let mut state = two_ply_tree(3, 9, 5, 7);
    let mut search = GameSearch::<TableGame>::new(2).unwrap();
    let first = search.search(&mut state).unwrap();
    let second = search.search(&mut state).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_zero_depth_is_rejected() {
    assert!(matches!(
        GameSearch::<TableGame>::new(0),
        Err(SearchError::DepthTooLow)
    ));
}

#[test]
fn test_no_moves_at_the_root_is_an_error() {
    let mut state = tree(&[], &[]);
    let mut search = GameSearch::<TableGame>::new(2).unwrap();
    assert_eq!(search.search(&mut state), Err(SearchError::NoAvailableMoves));
}

#[test]
fn test_an_exhausted_interior_node_scores_as_terminal() {
    // Node l offers the opponent no moves at all, which ends the game there
    // with the neutral terminal score. That still beats r's losing lines.
    let mut state = tree(
        &[
            (&[][..], &["l", "r"][..]),
            (&["r"][..], &["l", "r"][..]),
        ],
        &[(&["r", "l"][..], -4), (&["r", "r"][..], -2)],
    );
    let mut search = GameSearch::<TableGame>::new(2).unwrap();
    assert_eq!(search.search(&mut state), Ok("l"));
}
