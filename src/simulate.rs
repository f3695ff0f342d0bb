use crate::grid::Cell;
use std::collections::VecDeque;

/// Projects `body` forward along `path` using the real movement rules:
/// every step pushes a new head, and the tail is dropped unless the new
/// head lands on `food`. The caller's body is left untouched.
pub fn simulate_path(body: &[Cell], path: &[Cell], food: Cell) -> Vec<Cell> {
    let mut sim: VecDeque<Cell> = body.iter().copied().collect();

    for &pos in path {
        sim.push_front(pos);
        if pos != food {
            sim.pop_back();
        }
    }

    sim.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn cells(v: &[(i32, i32)]) -> Vec<Cell> {
        v.iter().map(|&(x, y)| Cell::new(x, y)).collect()
    }

    #[test]
    fn moving_without_food_keeps_length() {
        let body = cells(&[(5, 5), (5, 6), (5, 7)]);
        let path = cells(&[(5, 4), (5, 3)]);
        let sim = simulate_path(&body, &path, Cell::new(0, 0));

        assert_eq!(sim, cells(&[(5, 3), (5, 4), (5, 5)]));
    }

    #[test]
    fn landing_on_food_grows_by_one() {
        let body = cells(&[(5, 5), (5, 6), (5, 7)]);
        let path = cells(&[(5, 4), (5, 3)]);
        let sim = simulate_path(&body, &path, Cell::new(5, 3));

        assert_eq!(sim, cells(&[(5, 3), (5, 4), (5, 5), (5, 6)]));
    }

    #[test]
    fn growth_midway_shifts_later_steps() {
        let body = cells(&[(2, 2), (2, 3)]);
        let path = cells(&[(3, 2), (4, 2), (4, 1)]);
        let sim = simulate_path(&body, &path, Cell::new(3, 2));

        // grew at step one, then slid two steps keeping length 3
        assert_eq!(sim, cells(&[(4, 1), (4, 2), (3, 2)]));
    }

    #[test]
    fn empty_path_is_identity() {
        let body = cells(&[(1, 1), (1, 2)]);
        assert_eq!(simulate_path(&body, &[], Cell::new(4, 4)), body);
    }

    #[test]
    fn does_not_modify_input() {
        let body = cells(&[(1, 1), (1, 2), (1, 3)]);
        let copy = body.clone();
        let _ = simulate_path(&body, &cells(&[(2, 1), (3, 1)]), Cell::new(3, 1));
        assert_eq!(body, copy);
    }

    #[test]
    fn length_grows_once_per_food_step() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..100 {
            let len = rng.gen_range(1..6);
            let body: Vec<Cell> = (0..len).map(|i| Cell::new(0, i)).collect();
            let steps = rng.gen_range(0..8);
            let path: Vec<Cell> = (0..steps).map(|i| Cell::new(i + 1, 0)).collect();
            let food = Cell::new(rng.gen_range(0..10), 0);

            let eaten = path.iter().filter(|c| **c == food).count();
            let sim = simulate_path(&body, &path, food);
            assert_eq!(sim.len(), body.len() + eaten);
        }
    }
}
