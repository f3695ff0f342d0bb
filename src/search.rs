use crate::grid::{Board, Cell};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

#[derive(Debug, PartialEq, Eq)]
struct FrontierNode {
    priority: u32,
    // Insertion order, breaks priority ties first-in first-out.
    seq: u64,
    cost: u32,
    cell: Cell,
    parent: Option<Cell>,
}

impl Ord for FrontierNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, reverse for lowest priority first
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for FrontierNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A* from `start` to `goal` on a 4-connected grid with unit step costs.
///
/// The returned path excludes `start` and ends at `goal`; `start == goal`
/// yields an empty path. `start` itself is never checked against
/// `obstacles`, so a snake head can search out of its own body.
/// Returns `None` once the frontier is exhausted without popping `goal`.
pub fn shortest_path(
    board: &Board,
    start: Cell,
    goal: Cell,
    obstacles: &HashSet<Cell>,
) -> Option<Vec<Cell>> {
    let mut frontier = BinaryHeap::new();
    let mut finalised: HashSet<Cell> = HashSet::new();
    let mut came_from: HashMap<Cell, Cell> = HashMap::new();
    let mut seq: u64 = 0;

    frontier.push(FrontierNode {
        priority: start.manhattan(goal),
        seq,
        cost: 0,
        cell: start,
        parent: None,
    });

    while let Some(node) = frontier.pop() {
        if !finalised.insert(node.cell) {
            continue;
        }
        if let Some(parent) = node.parent {
            came_from.insert(node.cell, parent);
        }

        if node.cell == goal {
            return Some(reconstruct(&came_from, goal));
        }

        let cost = node.cost + 1;
        for next in board.neighbours(node.cell, obstacles) {
            if finalised.contains(&next) {
                continue;
            }
            seq += 1;
            frontier.push(FrontierNode {
                priority: cost + next.manhattan(goal),
                seq,
                cost,
                cell: next,
                parent: Some(node.cell),
            });
        }
    }

    None
}

fn reconstruct(came_from: &HashMap<Cell, Cell>, goal: Cell) -> Vec<Cell> {
    let mut path = vec![];
    let mut current = goal;
    while let Some(&parent) = came_from.get(&current) {
        path.push(current);
        current = parent;
    }
    path.reverse();
    path
}

/// Breadth-first reachability of `goal` from `start` avoiding `obstacles`.
pub fn is_reachable(board: &Board, start: Cell, goal: Cell, obstacles: &HashSet<Cell>) -> bool {
    let mut queue = VecDeque::from([start]);
    let mut visited: HashSet<Cell> = HashSet::from([start]);

    while let Some(current) = queue.pop_front() {
        if current == goal {
            return true;
        }
        for next in board.neighbours(current, obstacles) {
            if visited.insert(next) {
                queue.push_back(next);
            }
        }
    }

    false
}

/// Can the head of `body` still reach its tail?
///
/// The tail cell is left out of the obstacles since it vacates on the next
/// move. This is only exact when that move does not grow the snake.
pub fn tail_reachable(board: &Board, body: &[Cell]) -> bool {
    let (head, tail) = match (body.first(), body.last()) {
        (Some(&h), Some(&t)) => (h, t),
        _ => return false,
    };
    let obstacles: HashSet<Cell> = body[..body.len() - 1].iter().copied().collect();

    is_reachable(board, head, tail, &obstacles)
}
