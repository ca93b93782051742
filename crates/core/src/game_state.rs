//! Game state module - the move/spawn/game-over state machine
//!
//! Ties together the grid, the move algorithm, and the tile spawner. A fresh
//! grid gets two spawned tiles; each accepted directional move adds its merge
//! score, spawns one tile, and re-checks for game over. A move that changes
//! nothing is a complete no-op: no spawn, no score, no game-over check.

use crate::grid::Grid;
use crate::moves::shift;
use crate::rng::TileSpawner;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, GameAction, START_TILES};

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    score: u32,
    game_over: bool,
    spawner: TileSpawner,
}

impl GameState {
    /// Create a new game with the given RNG seed
    ///
    /// Starts with [`START_TILES`] spawned tiles on an empty grid.
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            grid: Grid::new(),
            score: 0,
            game_over: false,
            spawner: TileSpawner::new(seed),
        };
        for _ in 0..START_TILES {
            state.spawner.spawn_into(&mut state.grid);
        }
        state
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    #[cfg(test)]
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Apply a game action
    ///
    /// Returns true if the state changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(direction) => self.apply_move(direction),
            GameAction::Restart => {
                // Reseed from the advanced RNG state so consecutive games
                // differ while staying reproducible from the original seed.
                *self = Self::new(self.spawner.seed());
                true
            }
        }
    }

    /// One directional move: shift, then spawn and re-check on change
    fn apply_move(&mut self, direction: Direction) -> bool {
        if self.game_over {
            return false;
        }

        let outcome = shift(self.grid, direction);
        if !outcome.changed {
            return false;
        }

        self.grid = outcome.grid;
        self.score += outcome.score_gained;

        // A changed move always leaves at least one empty cell.
        self.spawner.spawn_into(&mut self.grid);
        self.game_over = self.grid.is_game_over();
        true
    }

    /// Fill a caller-owned snapshot
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cells = self.grid.to_rows();
        out.score = self.score;
        out.highest_tile = self.grid.highest_tile();
        out.game_over = self.game_over;
        out.seed = self.spawner.seed();
    }

    /// Convenience helper that builds a fresh snapshot
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap);
        snap
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CELL_COUNT, GRID_SIZE};

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.game_over());
        assert_eq!(state.score(), 0);
        assert_eq!(state.grid().count_empty(), CELL_COUNT - START_TILES);
        for row in state.grid().to_rows() {
            for value in row {
                assert!(value == 0 || value == 2 || value == 4);
            }
        }
    }

    #[test]
    fn test_same_seed_replays_the_same_game() {
        let mut a = GameState::new(777);
        let mut b = GameState::new(777);

        let script = [
            Direction::Left,
            Direction::Up,
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ];
        for direction in script {
            a.apply_action(GameAction::Move(direction));
            b.apply_action(GameAction::Move(direction));
        }

        assert_eq!(a.grid(), b.grid());
        assert_eq!(a.score(), b.score());
    }

    #[test]
    fn test_changed_move_spawns_one_tile() {
        let mut state = GameState::new(1);
        let before = state.grid().count_empty();

        // Find a direction that changes the board (a two-tile grid always
        // has one).
        let direction = Direction::all()
            .into_iter()
            .find(|&d| shift(*state.grid(), d).changed)
            .unwrap();

        let merged_pair = {
            let outcome = shift(*state.grid(), direction);
            outcome.score_gained > 0
        };

        assert!(state.apply_action(GameAction::Move(direction)));

        // One tile spawned; merging two starters frees one cell first.
        let expected = if merged_pair { before } else { before - 1 };
        assert_eq!(state.grid().count_empty(), expected);
    }

    #[test]
    fn test_rejected_move_is_a_complete_noop() {
        let mut state = GameState::new(5);

        // Pack everything into the top-left so Left then Up both settle.
        state.apply_action(GameAction::Move(Direction::Left));
        state.apply_action(GameAction::Move(Direction::Up));

        // Find a direction that is currently a no-op, if any.
        let noop = Direction::all()
            .into_iter()
            .find(|&d| !shift(*state.grid(), d).changed);
        let Some(direction) = noop else {
            return;
        };

        let grid_before = *state.grid();
        let score_before = state.score();
        let seed_before = state.snapshot().seed;

        assert!(!state.apply_action(GameAction::Move(direction)));
        assert_eq!(*state.grid(), grid_before);
        assert_eq!(state.score(), score_before);
        // No spawn means the RNG was not consumed.
        assert_eq!(state.snapshot().seed, seed_before);
    }

    #[test]
    fn test_score_accumulates_merge_sums() {
        let mut state = GameState::new(1);
        state.grid_mut().set_row(0, [2, 2, 4, 4]);
        state.grid_mut().set_row(1, [0, 0, 0, 0]);
        state.grid_mut().set_row(2, [0, 0, 0, 0]);
        state.grid_mut().set_row(3, [0, 0, 0, 0]);

        assert!(state.apply_action(GameAction::Move(Direction::Left)));
        assert_eq!(state.score(), 12);
        assert_eq!(state.grid().row(0)[..2], [4, 8]);
    }

    #[test]
    fn test_game_over_is_terminal() {
        let mut state = GameState::new(9);

        // Hand-build a stuck grid with one playable move left, then burn it.
        let mut rows = [[0u32; GRID_SIZE]; GRID_SIZE];
        let mut value = 2;
        for row in rows.iter_mut() {
            for cell in row.iter_mut() {
                *cell = value;
                value *= 2;
            }
        }
        // 16 distinct powers of two: full and unmergeable.
        *state.grid_mut() = Grid::from_rows(rows);
        assert!(state.grid().is_game_over());

        // The engine flags game over on the move that fills the grid, so
        // force the flag the same way apply_move would discover it.
        state.game_over = state.grid.is_game_over();

        for direction in Direction::all() {
            assert!(!state.apply_action(GameAction::Move(direction)));
        }
        assert!(state.game_over());
    }

    #[test]
    fn test_restart_resets_board_and_score() {
        let mut state = GameState::new(12345);
        for direction in Direction::all() {
            state.apply_action(GameAction::Move(direction));
        }
        assert!(state.score() > 0 || state.grid().count_empty() < CELL_COUNT - START_TILES);

        assert!(state.apply_action(GameAction::Restart));
        assert_eq!(state.score(), 0);
        assert!(!state.game_over());
        assert_eq!(state.grid().count_empty(), CELL_COUNT - START_TILES);
    }

    #[test]
    fn test_restart_changes_the_tile_sequence() {
        let fresh = GameState::new(12345);
        let mut restarted = GameState::new(12345);
        restarted.apply_action(GameAction::Restart);

        // The reseed uses the advanced RNG state, not the original seed.
        assert_ne!(fresh.snapshot().seed, restarted.snapshot().seed);
    }

    #[test]
    fn test_snapshot_mirrors_state() {
        let mut state = GameState::new(4242);
        state.apply_action(GameAction::Move(Direction::Left));

        let snap = state.snapshot();
        assert_eq!(snap.cells, state.grid().to_rows());
        assert_eq!(snap.score, state.score());
        assert_eq!(snap.highest_tile, state.grid().highest_tile());
        assert_eq!(snap.game_over, state.game_over());
    }
}
