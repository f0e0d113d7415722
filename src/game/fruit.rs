use rand::{Rng, SeedableRng, rngs::StdRng};

use super::board::{Board, Position};

/// Places fruit on free, grid-aligned cells
pub struct FruitSpawner {
    rng: StdRng,
}

impl FruitSpawner {
    /// Spawner seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Spawner with a fixed seed, for reproducible games
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Pick a random cell on `board` that no segment of `body` occupies
    ///
    /// Retries until a free cell is found, so `body` must not cover the
    /// whole board.
    pub fn spawn<'a, I>(&mut self, board: &Board, body: I) -> Position
    where
        I: IntoIterator<Item = &'a Position>,
        I::IntoIter: Clone,
    {
        let body = body.into_iter();
        loop {
            let column = self.rng.gen_range(0..board.columns());
            let row = self.rng.gen_range(0..board.rows());
            let pos = Position::from_cell(column, row);

            if !body.clone().any(|segment| *segment == pos) {
                return pos;
            }
        }
    }
}

impl Default for FruitSpawner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::CELL_SIZE;

    #[test]
    fn test_spawn_is_grid_aligned_and_in_bounds() {
        let board = Board::STANDARD;
        let mut spawner = FruitSpawner::seeded(7);
        let body: Vec<Position> = Vec::new();

        for _ in 0..1_000 {
            let pos = spawner.spawn(&board, &body);
            assert!(board.contains(pos));
            assert_eq!(pos.x % CELL_SIZE, 0);
            assert_eq!(pos.y % CELL_SIZE, 0);
        }
    }

    #[test]
    fn test_spawn_avoids_body() {
        let board = Board::STANDARD;
        let mut spawner = FruitSpawner::seeded(42);

        // Fill every row but the last one
        let body: Vec<Position> = (0..board.rows() - 1)
            .flat_map(|row| (0..board.columns()).map(move |col| Position::from_cell(col, row)))
            .collect();

        for _ in 0..100 {
            let pos = spawner.spawn(&board, &body);
            assert!(!body.contains(&pos));
            assert_eq!(pos.y, (board.rows() - 1) * CELL_SIZE);
        }
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let board = Board::STANDARD;
        let free = Position::new(250, 130);
        let body: Vec<Position> = (0..board.rows())
            .flat_map(|row| (0..board.columns()).map(move |col| Position::from_cell(col, row)))
            .filter(|pos| *pos != free)
            .collect();

        let mut spawner = FruitSpawner::seeded(3);
        assert_eq!(spawner.spawn(&board, &body), free);
    }

    #[test]
    fn test_seeded_spawners_agree() {
        let board = Board::STANDARD;
        let mut a = FruitSpawner::seeded(99);
        let mut b = FruitSpawner::seeded(99);
        let body = [Position::new(0, 0)];

        for _ in 0..20 {
            assert_eq!(a.spawn(&board, &body), b.spawn(&board, &body));
        }
    }
}
