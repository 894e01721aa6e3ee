//! Random cave with an A* path drawn through it.
//!
//! Usage: `maze [seed]`

use std::convert::Infallible;

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use wayfind::{AstarPather, PathFinder, Pather, SearchSession, chebyshev};

const WIDTH: i32 = 60;
const HEIGHT: i32 = 20;
const WALL_PCT: u32 = 30;

struct Cave {
    walls: Vec<bool>,
}

impl Cave {
    fn generate(rng: &mut StdRng) -> Self {
        let walls = (0..WIDTH * HEIGHT)
            .map(|_| rng.random_range(0..100) < WALL_PCT)
            .collect();
        Self { walls }
    }

    fn idx((x, y): (i32, i32)) -> usize {
        (y * WIDTH + x) as usize
    }

    fn passable(&self, p: (i32, i32)) -> bool {
        p.0 >= 0 && p.1 >= 0 && p.0 < WIDTH && p.1 < HEIGHT && !self.walls[Self::idx(p)]
    }

    fn clear(&mut self, p: (i32, i32)) {
        let i = Self::idx(p);
        self.walls[i] = false;
    }
}

impl Pather for Cave {
    type Node = (i32, i32);
    type Error = Infallible;

    fn neighbors(&self, p: &(i32, i32), buf: &mut Vec<(i32, i32)>) -> Result<(), Infallible> {
        for dy in -1..=1 {
            for dx in -1..=1 {
                let n = (p.0 + dx, p.1 + dy);
                if (dx, dy) != (0, 0) && self.passable(n) {
                    buf.push(n);
                }
            }
        }
        Ok(())
    }
}

impl AstarPather for Cave {
    fn estimate(&self, from: &(i32, i32), to: &(i32, i32)) -> Result<f32, Infallible> {
        Ok(chebyshev(*from, *to))
    }

    fn cost(&self, _: &(i32, i32), _: &(i32, i32)) -> Result<f32, Infallible> {
        Ok(1.0)
    }
}

fn main() {
    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);
    let mut rng = StdRng::seed_from_u64(seed);

    let start = (0, 0);
    let goal = (WIDTH - 1, HEIGHT - 1);
    let mut cave = Cave::generate(&mut rng);
    cave.clear(start);
    cave.clear(goal);

    let finder = PathFinder::new(&cave);
    let mut session = SearchSession::new();
    let outcome = match finder.search_in(&mut session, start, goal) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("search failed: {e}");
            std::process::exit(1);
        }
    };
    let path = outcome.path.unwrap_or_default();

    for y in 0..HEIGHT {
        let row: String = (0..WIDTH)
            .map(|x| {
                let p = (x, y);
                if p == start {
                    '@'
                } else if p == goal {
                    '>'
                } else if path.contains(&p) {
                    '*'
                } else if !cave.passable(p) {
                    '#'
                } else if session.is_discovered(&p) {
                    ','
                } else {
                    '.'
                }
            })
            .collect();
        println!("{row}");
    }

    let stats = outcome.stats;
    match stats.cost {
        Some(cost) => println!(
            "seed {seed}: path of {} steps (cost {cost}), expanded {} of {} discovered",
            path.len().saturating_sub(1),
            stats.expanded,
            stats.discovered
        ),
        None => println!("seed {seed}: no path, expanded {} nodes", stats.expanded),
    }
}
