//! Pitch representation using one edge mask per cell.
//!
//! The grid has `rows` x `cols` cells. Columns `0` and `cols - 1` are the goal
//! columns; the playing field is columns `1..=cols - 2`. Each cell stores an
//! [`EdgeMask`] of directions that can no longer be taken from it. Moving the
//! marker blocks the traversed edge at both of its ends.
//!
//! ```text
//!   col: 0 1 2 3 4 5 6 7 8 9 10
//!  row 0     . . . . . . . .
//!  row 1     . . . . . . . .
//!  row 2     . . . . . . . .
//!  row 3     . . . . . . . .
//!  row 4   G . . . . @ . . . . G
//!  row 5     . . . . . . . .
//!  ...
//! ```

use std::fmt;
use std::sync::Arc;

use crate::constants::{
    DEAD_END_PENALTY, DEFAULT_COLS, DEFAULT_ROWS, GOAL_BONUS, MIN_COLS, MIN_ROWS,
};
use crate::coord::Coord;
use crate::direction::Direction;
use crate::direction_list::DirectionList;
use crate::edge_mask::EdgeMask;
use crate::error::BoardError;
use crate::types::{Player, Score};

/// Result of applying one move.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The game goes on. `bounced` is true when the mover keeps the turn
    /// because the marker landed on a cell that had been touched before.
    Continue { bounced: bool },
    /// The marker is stuck outside a goal; nobody wins.
    DrawDeadEnd,
    /// The marker entered a goal column.
    Win(Player),
}

impl MoveOutcome {
    /// Returns `true` for both terminal outcomes.
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, MoveOutcome::Continue { .. })
    }
}

/// Full game state: edge masks, marker position, turn and counters.
///
/// Cloning (or [`Board::duplicate`]) produces a fully independent copy; the
/// search relies on this to explore branches without touching the original.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major edge masks.
    cells: Vec<EdgeMask>,
    /// Masks at the start of a round, shared between clones.
    start_cells: Arc<[EdgeMask]>,
    start: Coord,
    current: Coord,
    previous: Coord,
    active: Player,
    moves: [u32; 2],
    turns: u32,
    game_over: bool,
    winner: Option<Player>,
}

impl Default for Board {
    /// Creates the standard 9x11 pitch.
    fn default() -> Self {
        Board::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

impl Board {
    /// Creates a board in its initial state.
    ///
    /// # Panics
    ///
    /// Panics if `rows < 3` or `cols < 4`. Use [`Board::try_new`] to handle this.
    pub fn new(rows: usize, cols: usize) -> Board {
        Board::try_new(rows, cols).unwrap_or_else(|err| panic!("{err}"))
    }

    /// Creates a board in its initial state.
    ///
    /// # Arguments
    ///
    /// * `rows` - Number of rows (at least 3).
    /// * `cols` - Number of columns including both goal columns (at least 4).
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidDimensions`] for sizes too small to hold a
    /// field and two gates.
    pub fn try_new(rows: usize, cols: usize) -> Result<Board, BoardError> {
        if rows < MIN_ROWS || cols < MIN_COLS {
            return Err(BoardError::InvalidDimensions {
                rows,
                cols,
                min_rows: MIN_ROWS,
                min_cols: MIN_COLS,
            });
        }

        let start_cells: Arc<[EdgeMask]> = (0..rows)
            .flat_map(|row| {
                (0..cols).map(move |col| initial_mask(rows, cols, Coord::new(row, col)))
            })
            .collect();
        let center = Coord::new(rows / 2, cols / 2);
        let mut board = Board {
            rows,
            cols,
            cells: start_cells.to_vec(),
            start_cells,
            start: center,
            current: center,
            previous: center,
            active: Player::First,
            moves: [0; 2],
            turns: 1,
            game_over: false,
            winner: None,
        };
        board.reset();
        Ok(board)
    }

    /// Creates a board from explicit cell masks.
    ///
    /// Meant for synthetic positions: no layout rule is applied, so any
    /// combination of masks is accepted. The given masks and marker position
    /// become the starting state restored by [`Board::reset`].
    ///
    /// # Arguments
    ///
    /// * `rows`, `cols` - Grid dimensions (each at least 1).
    /// * `cells` - Row-major masks, `rows * cols` of them.
    /// * `current` - Marker position.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell count does not match or `current` lies
    /// outside the grid.
    pub fn with_layout(
        rows: usize,
        cols: usize,
        cells: Vec<EdgeMask>,
        current: Coord,
    ) -> Result<Board, BoardError> {
        if rows == 0 || cols == 0 {
            return Err(BoardError::InvalidDimensions {
                rows,
                cols,
                min_rows: 1,
                min_cols: 1,
            });
        }
        if cells.len() != rows * cols {
            return Err(BoardError::InvalidLayout {
                expected: rows * cols,
                got: cells.len(),
            });
        }
        if current.row >= rows || current.col >= cols {
            return Err(BoardError::OutOfBounds {
                coord: current,
                rows,
                cols,
            });
        }

        Ok(Board {
            rows,
            cols,
            start_cells: cells.as_slice().into(),
            cells,
            start: current,
            current,
            previous: current,
            active: Player::First,
            moves: [0; 2],
            turns: 1,
            game_over: false,
            winner: None,
        })
    }

    /// Restores the initial state for a new round.
    ///
    /// Every mask goes back to its starting value and the marker to its start
    /// cell (the centre for boards built by [`Board::new`]). Counters and the
    /// game-over flag are cleared and player `First` becomes active.
    pub fn reset(&mut self) {
        self.cells.copy_from_slice(&self.start_cells);
        self.current = self.start;
        self.previous = self.start;
        self.active = Player::First;
        self.moves = [0; 2];
        self.turns = 1;
        self.game_over = false;
        self.winner = None;
    }

    /// Returns an independent copy sharing no storage with `self`.
    #[inline]
    pub fn duplicate(&self) -> Board {
        self.clone()
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Marker position.
    #[inline(always)]
    pub fn current(&self) -> Coord {
        self.current
    }

    /// Marker position before the last move.
    #[inline(always)]
    pub fn previous(&self) -> Coord {
        self.previous
    }

    #[inline(always)]
    pub fn active_player(&self) -> Player {
        self.active
    }

    #[inline(always)]
    pub fn non_active_player(&self) -> Player {
        self.active.opposite()
    }

    /// Hands the turn to `player` without touching the turn counter.
    ///
    /// Used by callers that pick the starting player of a round.
    pub fn set_active_player(&mut self, player: Player) {
        self.active = player;
    }

    /// Number of single-direction moves `player` has made this round.
    #[inline(always)]
    pub fn moves(&self, player: Player) -> u32 {
        self.moves[player.index()]
    }

    /// Turn counter, starting at 1 and incremented on each turn transfer.
    #[inline(always)]
    pub fn turns(&self) -> u32 {
        self.turns
    }

    #[inline(always)]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// The winner, or `None` while the game runs or after a dead-end draw.
    #[inline(always)]
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the edge mask of `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` lies outside the grid.
    #[inline]
    pub fn mask(&self, coord: Coord) -> EdgeMask {
        self.cells[self.index(coord)]
    }

    /// Returns the edge mask of `coord`, or `None` outside the grid.
    #[inline]
    pub fn get_mask(&self, coord: Coord) -> Option<EdgeMask> {
        self.contains(coord).then(|| self.cells[self.index(coord)])
    }

    #[inline(always)]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.row < self.rows && coord.col < self.cols
    }

    /// The cell `player` is trying to move the marker into.
    #[inline]
    pub fn goal(&self, player: Player) -> Coord {
        Coord::new(self.rows / 2, self.goal_column(player))
    }

    /// The goal column `player` attacks.
    #[inline]
    pub fn goal_column(&self, player: Player) -> usize {
        match player {
            Player::First => 0,
            Player::Second => self.cols - 1,
        }
    }

    #[inline]
    fn is_goal_column(&self, col: usize) -> bool {
        col == 0 || col == self.cols - 1
    }

    /// Returns `true` if any traversal has touched `coord` this round.
    pub fn is_visited(&self, coord: Coord) -> bool {
        let idx = self.index(coord);
        self.cells[idx] != self.start_cells[idx]
    }

    /// Returns `true` if the marker's cell has exactly one blocked edge.
    #[inline]
    pub fn is_at_open_node(&self) -> bool {
        self.mask(self.current).is_fresh()
    }

    /// Lists the open directions of `coord` in canonical order.
    ///
    /// Returns an empty list for coordinates outside the grid.
    #[inline]
    pub fn get_options(&self, coord: Coord) -> DirectionList {
        self.get_mask(coord)
            .map(EdgeMask::options)
            .unwrap_or_default()
    }

    /// Returns `true` if `dir` is open at the marker's position.
    #[inline]
    pub fn is_valid_move(&self, dir: Direction) -> bool {
        self.mask(self.current).is_open(dir)
    }

    /// Applies a move after validating it.
    ///
    /// # Errors
    ///
    /// * [`BoardError::GameOver`] if the game has already ended.
    /// * [`BoardError::InvalidMove`] if `dir` is blocked at the marker.
    /// * [`BoardError::OutOfBounds`] if `dir` is open but leads off the grid
    ///   (only possible on boards built with [`Board::with_layout`]).
    ///
    /// The board is left untouched on error.
    pub fn try_make_move(&mut self, dir: Direction) -> Result<MoveOutcome, BoardError> {
        if self.game_over {
            return Err(BoardError::GameOver);
        }
        if !self.is_valid_move(dir) {
            return Err(BoardError::InvalidMove(dir));
        }
        if self.current.step(dir, self.rows, self.cols).is_none() {
            return Err(BoardError::OutOfBounds {
                coord: self.current,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.make_move(dir))
    }

    /// Applies a move without validating it.
    ///
    /// The caller must check [`Board::is_valid_move`] and the game-over flag
    /// first. A blocked direction is still applied, which may misclassify the
    /// bounce. A direction leading off the grid only blocks the local edge and
    /// leaves the marker in place.
    ///
    /// # Returns
    ///
    /// The outcome of the move: continue (with or without bounce), dead-end
    /// draw or win.
    pub fn make_move(&mut self, dir: Direction) -> MoveOutcome {
        debug_assert!(self.is_valid_move(dir), "illegal move {dir} at {}", self.current);

        self.moves[self.active.index()] += 1;

        let from = self.current;
        let from_idx = self.index(from);
        self.cells[from_idx] = self.cells[from_idx].block(dir);

        if let Some(to) = from.step(dir, self.rows, self.cols) {
            let to_idx = self.index(to);
            self.cells[to_idx] = self.cells[to_idx].block(dir.opposite());
            self.current = to;
        }
        self.previous = from;

        if let Some(outcome) = self.check_terminal() {
            return outcome;
        }

        if self.is_at_open_node() {
            self.switch_players();
            MoveOutcome::Continue { bounced: false }
        } else {
            MoveOutcome::Continue { bounced: true }
        }
    }

    /// Detects the end of the game at the marker's position and records it.
    fn check_terminal(&mut self) -> Option<MoveOutcome> {
        let outcome = if self.current.col == 0 {
            MoveOutcome::Win(Player::First)
        } else if self.current.col == self.cols - 1 {
            MoveOutcome::Win(Player::Second)
        } else if self.mask(self.current).is_dead_end() {
            MoveOutcome::DrawDeadEnd
        } else {
            return None;
        };

        self.game_over = true;
        self.winner = match outcome {
            MoveOutcome::Win(player) => Some(player),
            _ => None,
        };
        Some(outcome)
    }

    fn switch_players(&mut self) {
        self.active = self.active.opposite();
        self.turns += 1;
    }

    /// Scores the position from `player`'s perspective.
    ///
    /// * `-100` when the marker is stuck outside a goal column.
    /// * `+200` when the marker sits in the goal `player` attacks, `-200` in
    ///   the goal it defends.
    /// * minus the Euclidean distance from the marker to the attacked goal.
    /// * minus the number of moves `player` has made.
    ///
    /// Pure: the board is not modified.
    pub fn static_evaluator(&self, player: Player) -> Score {
        let mut score = 0.0;

        let col = self.current.col;
        if !self.is_goal_column(col) && self.get_options(self.current).is_empty() {
            score -= DEAD_END_PENALTY;
        }

        if col == self.goal_column(player) {
            score += GOAL_BONUS;
        } else if col == self.goal_column(player.opposite()) {
            score -= GOAL_BONUS;
        }

        score -= self.current.distance(self.goal(player));
        score -= self.moves(player) as Score;

        score
    }

    #[inline(always)]
    fn index(&self, coord: Coord) -> usize {
        debug_assert!(self.contains(coord), "{coord} outside the grid");
        coord.row * self.cols + coord.col
    }
}

/// Computes the mask a cell starts a round with.
///
/// # Arguments
///
/// * `rows`, `cols` - Grid dimensions (at least 3 x 4).
/// * `coord` - The cell.
pub fn initial_mask(rows: usize, cols: usize, coord: Coord) -> EdgeMask {
    use Direction::*;

    let Coord { row: i, col: j } = coord;
    if j == 0 || j + 1 >= cols {
        return EdgeMask::BLOCKED;
    }

    let last_row = rows.saturating_sub(1);
    let left = 1;
    let right = cols - 2;

    let mut mask = if i > 0 && i < last_row && j > left && j < right {
        EdgeMask::OPEN
    } else if i == 0 && j == left {
        EdgeMask::only_open(&[SE])
    } else if i == 0 && j == right {
        EdgeMask::only_open(&[SW])
    } else if i == last_row && j == left {
        EdgeMask::only_open(&[NE])
    } else if i == last_row && j == right {
        EdgeMask::only_open(&[NW])
    } else if i == 0 {
        EdgeMask::only_open(&[S, SE, SW])
    } else if i == last_row {
        EdgeMask::only_open(&[N, NE, NW])
    } else if j == left {
        EdgeMask::only_open(&[NE, E, SE])
    } else {
        EdgeMask::only_open(&[NW, W, SW])
    };

    // Gate cells next to each goal.
    let gate = rows / 2;
    let opened: &[Direction] = match (j == left, j == right) {
        (true, _) if i + 1 == gate => &[S, SW],
        (true, _) if i == gate => &[N, W, S],
        (true, _) if i == gate + 1 => &[N, NW],
        (_, true) if i + 1 == gate => &[S, SE],
        (_, true) if i == gate => &[N, E, S],
        (_, true) if i == gate + 1 => &[N, NE],
        _ => &[],
    };
    for &dir in opened {
        mask = mask.open(dir);
    }

    mask
}

impl fmt::Display for Board {
    /// Renders the grid: `@` marker, `G` goal cell, `#` dead end,
    /// `o` visited, `.` untouched.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let gate = self.rows / 2;
        for row in 0..self.rows {
            for col in 0..self.cols {
                let coord = Coord::new(row, col);
                let c = if coord == self.current {
                    '@'
                } else if self.is_goal_column(col) {
                    if row == gate { 'G' } else { ' ' }
                } else if self.mask(coord).is_dead_end() {
                    '#'
                } else if self.is_visited(coord) {
                    'o'
                } else {
                    '.'
                };
                if col > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    fn play(board: &mut Board, dirs: &[Direction]) -> MoveOutcome {
        let mut outcome = MoveOutcome::Continue { bounced: false };
        for &dir in dirs {
            assert!(board.is_valid_move(dir), "{dir} blocked at {}", board.current());
            outcome = board.make_move(dir);
        }
        outcome
    }

    #[test]
    fn test_new_board() {
        let board = Board::new(9, 11);
        assert_eq!(board.current(), Coord::new(4, 5));
        assert_eq!(board.previous(), Coord::new(4, 5));
        assert!(!board.is_game_over());
        assert_eq!(board.winner(), None);
        assert_eq!(board.moves(Player::First), 0);
        assert_eq!(board.moves(Player::Second), 0);
        assert_eq!(board.active_player(), Player::First);
        assert_eq!(board.non_active_player(), Player::Second);
        assert_eq!(board.turns(), 1);
    }

    #[test]
    fn test_default_board() {
        assert_eq!(Board::default(), Board::new(DEFAULT_ROWS, DEFAULT_COLS));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Board::try_new(2, 11),
            Err(BoardError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            Board::try_new(9, 3),
            Err(BoardError::InvalidDimensions { .. })
        ));
        assert!(Board::try_new(3, 4).is_ok());
    }

    #[test]
    #[should_panic]
    fn test_new_panics_on_invalid_dimensions() {
        let _ = Board::new(1, 1);
    }

    #[test]
    fn test_initial_masks_by_class() {
        let board = Board::new(9, 11);

        // Goal columns
        for row in 0..9 {
            assert!(board.mask(Coord::new(row, 0)).is_dead_end());
            assert!(board.mask(Coord::new(row, 10)).is_dead_end());
        }

        // Interior
        assert_eq!(board.mask(Coord::new(4, 5)), EdgeMask::OPEN);
        assert_eq!(board.mask(Coord::new(1, 2)), EdgeMask::OPEN);
        assert_eq!(board.mask(Coord::new(7, 8)), EdgeMask::OPEN);

        // Corners
        assert_eq!(board.get_options(Coord::new(0, 1)).as_slice(), &[SE]);
        assert_eq!(board.get_options(Coord::new(0, 9)).as_slice(), &[SW]);
        assert_eq!(board.get_options(Coord::new(8, 1)).as_slice(), &[NE]);
        assert_eq!(board.get_options(Coord::new(8, 9)).as_slice(), &[NW]);

        // Walls
        assert_eq!(board.get_options(Coord::new(0, 5)).as_slice(), &[S, SE, SW]);
        assert_eq!(board.get_options(Coord::new(8, 5)).as_slice(), &[N, NE, NW]);
        assert_eq!(board.get_options(Coord::new(1, 1)).as_slice(), &[E, NE, SE]);
        assert_eq!(board.get_options(Coord::new(1, 9)).as_slice(), &[W, NW, SW]);
    }

    #[test]
    fn test_initial_gates() {
        let board = Board::new(9, 11);

        assert_eq!(
            board.get_options(Coord::new(3, 1)).as_slice(),
            &[S, E, NE, SE, SW]
        );
        assert_eq!(
            board.get_options(Coord::new(4, 1)).as_slice(),
            &[N, S, E, W, NE, SE]
        );
        assert_eq!(
            board.get_options(Coord::new(5, 1)).as_slice(),
            &[N, E, NE, NW, SE]
        );

        assert_eq!(
            board.get_options(Coord::new(3, 9)).as_slice(),
            &[S, W, NW, SE, SW]
        );
        assert_eq!(
            board.get_options(Coord::new(4, 9)).as_slice(),
            &[N, S, E, W, NW, SW]
        );
        assert_eq!(
            board.get_options(Coord::new(5, 9)).as_slice(),
            &[N, W, NE, NW, SW]
        );
    }

    #[test]
    fn test_initial_masks_symmetric_inside_field() {
        let board = Board::new(9, 11);
        for row in 0..board.rows() {
            for col in 1..board.cols() - 1 {
                let c = Coord::new(row, col);
                for dir in Direction::ALL {
                    let Some(n) = c.step(dir, board.rows(), board.cols()) else {
                        assert!(board.mask(c).is_blocked(dir), "{c} opens {dir} off the grid");
                        continue;
                    };
                    if n.col == 0 || n.col == board.cols() - 1 {
                        continue;
                    }
                    assert_eq!(
                        board.mask(c).is_blocked(dir),
                        board.mask(n).is_blocked(dir.opposite()),
                        "asymmetric edge {c} -> {n} ({dir})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_only_gates_reach_goal_columns() {
        let board = Board::new(9, 11);
        for row in 0..board.rows() {
            for col in 1..board.cols() - 1 {
                let c = Coord::new(row, col);
                for dir in board.get_options(c) {
                    let n = c.step(dir, board.rows(), board.cols()).unwrap();
                    if n.col == 0 || n.col == board.cols() - 1 {
                        assert_eq!(n.row, 4, "{c} reaches goal column off the gate via {dir}");
                        assert!((3..=5).contains(&c.row));
                    }
                }
            }
        }
    }

    #[test]
    fn test_smallest_board() {
        let board = Board::new(3, 4);
        assert_eq!(board.current(), Coord::new(1, 2));
        assert_eq!(board.get_options(Coord::new(0, 1)).as_slice(), &[S, SE, SW]);
        assert_eq!(board.get_options(Coord::new(1, 2)).as_slice(), &[N, S, E, W, NW, SW]);
    }

    #[test]
    fn test_make_move_blocks_both_ends() {
        let mut board = Board::new(9, 11);
        let outcome = board.make_move(NE);

        assert_eq!(outcome, MoveOutcome::Continue { bounced: false });
        assert_eq!(board.previous(), Coord::new(4, 5));
        assert_eq!(board.current(), Coord::new(3, 6));
        assert!(board.mask(Coord::new(4, 5)).is_blocked(NE));
        assert!(board.mask(Coord::new(3, 6)).is_blocked(SW));
        assert_eq!(board.mask(Coord::new(3, 6)).count(), 1);
        assert!(!board.is_valid_move(SW));
    }

    #[test]
    fn test_fresh_cell_passes_turn() {
        let mut board = Board::new(9, 11);
        board.make_move(E);
        assert_eq!(board.active_player(), Player::Second);
        assert_eq!(board.turns(), 2);
        assert_eq!(board.moves(Player::First), 1);
        assert_eq!(board.moves(Player::Second), 0);
    }

    #[test]
    fn test_visited_cell_bounces() {
        let mut board = Board::new(9, 11);
        assert_eq!(board.make_move(E), MoveOutcome::Continue { bounced: false });
        assert_eq!(board.make_move(S), MoveOutcome::Continue { bounced: false });
        assert_eq!(board.active_player(), Player::First);

        // Back to the start cell, which already has its E edge used.
        assert_eq!(board.make_move(NW), MoveOutcome::Continue { bounced: true });
        assert_eq!(board.current(), Coord::new(4, 5));
        assert_eq!(board.active_player(), Player::First);
        assert_eq!(board.turns(), 3);
        assert_eq!(board.moves(Player::First), 2);
        assert_eq!(board.moves(Player::Second), 1);
    }

    #[test]
    fn test_wall_bounces() {
        let mut board = Board::new(9, 11);
        play(&mut board, &[N, N, N]);
        let mover = board.active_player();
        assert_eq!(board.make_move(N), MoveOutcome::Continue { bounced: true });
        assert_eq!(board.current(), Coord::new(0, 5));
        assert_eq!(board.active_player(), mover);
    }

    #[test]
    fn test_scripted_win_for_first_player() {
        let mut board = Board::new(9, 11);
        let outcome = play(&mut board, &[W, W, W, W]);
        assert_eq!(outcome, MoveOutcome::Continue { bounced: true });
        assert_eq!(board.current(), Coord::new(4, 1));

        let outcome = board.make_move(W);
        assert_eq!(outcome, MoveOutcome::Win(Player::First));
        assert!(outcome.is_terminal());
        assert!(board.is_game_over());
        assert_eq!(board.winner(), Some(Player::First));
        assert_eq!(board.current(), board.goal(Player::First));
        assert_eq!(board.moves(Player::First), 2);
        assert_eq!(board.moves(Player::Second), 3);
    }

    #[test]
    fn test_scripted_win_for_second_player() {
        let mut board = Board::new(9, 11);
        let outcome = play(&mut board, &[E, E, E, SE, NE]);
        assert_eq!(outcome, MoveOutcome::Win(Player::Second));
        assert_eq!(board.winner(), Some(Player::Second));
        assert_eq!(board.current(), Coord::new(4, 10));
    }

    #[test]
    fn test_dead_end_draw() {
        let mut cells = vec![EdgeMask::BLOCKED; 9];
        cells[1] = EdgeMask::only_open(&[S]);
        cells[4] = EdgeMask::only_open(&[N]);
        let mut board = Board::with_layout(3, 3, cells, Coord::new(1, 1)).unwrap();

        assert_eq!(board.get_options(board.current()).as_slice(), &[N]);
        let outcome = board.make_move(N);
        assert_eq!(outcome, MoveOutcome::DrawDeadEnd);
        assert!(board.is_game_over());
        assert_eq!(board.winner(), None);

        // Terminal state is stable under repeated queries.
        assert!(board.is_game_over());
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_with_layout_errors() {
        assert_eq!(
            Board::with_layout(2, 2, vec![EdgeMask::OPEN; 3], Coord::new(0, 0)),
            Err(BoardError::InvalidLayout {
                expected: 4,
                got: 3
            })
        );
        assert!(matches!(
            Board::with_layout(2, 2, vec![EdgeMask::OPEN; 4], Coord::new(2, 0)),
            Err(BoardError::OutOfBounds { .. })
        ));
        assert!(matches!(
            Board::with_layout(0, 2, vec![], Coord::new(0, 0)),
            Err(BoardError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_try_make_move_rejects_blocked_direction() {
        let mut board = Board::new(9, 11);
        board.make_move(N);
        let before = board.duplicate();
        assert_eq!(board.try_make_move(S), Err(BoardError::InvalidMove(S)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_try_make_move_rejects_after_game_over() {
        let mut board = Board::new(9, 11);
        play(&mut board, &[W, W, W, W, W]);
        assert!(board.is_game_over());
        assert_eq!(board.try_make_move(N), Err(BoardError::GameOver));
    }

    #[test]
    fn test_try_make_move_rejects_off_grid() {
        let board_cells = vec![EdgeMask::OPEN; 4];
        let mut board = Board::with_layout(2, 2, board_cells, Coord::new(0, 0)).unwrap();
        assert!(matches!(
            board.try_make_move(N),
            Err(BoardError::OutOfBounds { .. })
        ));
        assert_eq!(board.mask(Coord::new(0, 0)), EdgeMask::OPEN);
    }

    #[test]
    fn test_unchecked_off_grid_move_blocks_locally() {
        let mut board = Board::with_layout(3, 3, vec![EdgeMask::OPEN; 9], Coord::new(0, 1)).unwrap();
        board.make_move(N);
        assert_eq!(board.current(), Coord::new(0, 1));
        assert!(board.mask(Coord::new(0, 1)).is_blocked(N));
        assert_eq!(board.moves(Player::First), 1);
    }

    #[test]
    fn test_duplicate_is_independent() {
        let original = Board::new(9, 11);
        let mut copy = original.duplicate();
        copy.make_move(SE);
        copy.make_move(E);

        assert_eq!(original, Board::new(9, 11));
        assert_ne!(copy, original);
    }

    #[test]
    fn test_reset() {
        let mut board = Board::new(9, 11);
        play(&mut board, &[W, W, W, W, W]);
        board.reset();
        assert_eq!(board, Board::new(9, 11));
    }

    #[test]
    fn test_set_active_player() {
        let mut board = Board::new(9, 11);
        board.set_active_player(Player::Second);
        assert_eq!(board.active_player(), Player::Second);
        board.make_move(N);
        assert_eq!(board.moves(Player::Second), 1);
        assert_eq!(board.active_player(), Player::First);
    }

    #[test]
    fn test_is_visited() {
        let mut board = Board::new(9, 11);
        assert!(!board.is_visited(Coord::new(3, 5)));
        assert!(!board.is_visited(Coord::new(0, 5)));
        board.make_move(N);
        assert!(board.is_visited(Coord::new(3, 5)));
        assert!(board.is_visited(Coord::new(4, 5)));
    }

    #[test]
    fn test_is_visited_single_cell() {
        let board = Board::with_layout(1, 1, vec![EdgeMask::OPEN], Coord::new(0, 0)).unwrap();
        assert!(!board.is_visited(Coord::new(0, 0)));
    }

    #[test]
    fn test_with_layout_tracks_own_start() {
        let mut board =
            Board::with_layout(3, 3, vec![EdgeMask::OPEN; 9], Coord::new(1, 1)).unwrap();
        let start = board.clone();
        for row in 0..3 {
            for col in 0..3 {
                assert!(!board.is_visited(Coord::new(row, col)));
            }
        }

        assert_eq!(board.make_move(N), MoveOutcome::Continue { bounced: false });
        assert!(board.is_visited(Coord::new(1, 1)));
        assert!(board.is_visited(Coord::new(0, 1)));
        assert!(!board.is_visited(Coord::new(1, 0)));
        assert!(!board.is_visited(Coord::new(2, 1)));

        board.reset();
        assert_eq!(board, start);
        assert_eq!(board.current(), Coord::new(1, 1));
    }

    #[test]
    fn test_initial_mask_narrow_grid() {
        assert_eq!(initial_mask(1, 1, Coord::new(0, 0)), EdgeMask::BLOCKED);
        assert_eq!(initial_mask(3, 2, Coord::new(1, 1)), EdgeMask::BLOCKED);
    }

    #[test]
    fn test_static_evaluator_initial() {
        let board = Board::new(9, 11);
        // Marker 5 columns from either goal, nothing played.
        assert_eq!(board.static_evaluator(Player::First), -5.0);
        assert_eq!(board.static_evaluator(Player::Second), -5.0);
    }

    #[test]
    fn test_static_evaluator_rewards_progress() {
        let mut board = Board::new(9, 11);
        board.make_move(W);
        assert_eq!(board.static_evaluator(Player::First), -4.0 - 1.0);
        assert_eq!(board.static_evaluator(Player::Second), -6.0);
    }

    #[test]
    fn test_static_evaluator_goal() {
        let mut board = Board::new(9, 11);
        play(&mut board, &[W, W, W, W, W]);
        assert_eq!(board.static_evaluator(Player::First), GOAL_BONUS - 2.0);
        assert_eq!(
            board.static_evaluator(Player::Second),
            -GOAL_BONUS - 10.0 - 3.0
        );
    }

    #[test]
    fn test_static_evaluator_dead_end() {
        let mut cells = vec![EdgeMask::BLOCKED; 9];
        cells[1] = EdgeMask::only_open(&[S]);
        cells[4] = EdgeMask::only_open(&[N]);
        let mut board = Board::with_layout(3, 3, cells, Coord::new(1, 1)).unwrap();
        board.make_move(N);

        let expected = -DEAD_END_PENALTY - Coord::new(0, 1).distance(Coord::new(1, 0)) - 1.0;
        assert_eq!(board.static_evaluator(Player::First), expected);
    }

    #[test]
    fn test_static_evaluator_is_pure() {
        let mut board = Board::new(9, 11);
        board.make_move(SW);
        let before = board.duplicate();
        let _ = board.static_evaluator(Player::First);
        let _ = board.static_evaluator(Player::Second);
        assert_eq!(board, before);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(3, 4);
        board.make_move(W);
        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "G @ o G");
        assert_eq!(lines[0], "  . .  ");
    }
}
