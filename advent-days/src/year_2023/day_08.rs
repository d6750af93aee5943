//! Day 8: left/right network walks and their combined cycle length

use advent_core::{ParseError, PartSolver, PuzzleInput, SolveError};
use advent_macros::{DailyPuzzle, RegisterPuzzle};
use anyhow::anyhow;
use num::integer::lcm;
use std::collections::HashMap;

#[derive(DailyPuzzle, RegisterPuzzle)]
#[puzzle(parts = 2)]
#[register(year = 2023, day = 8, tags = ["2023", "graph"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Left,
    Right,
}

#[derive(Debug)]
pub struct Network<'a> {
    directions: Vec<Direction>,
    nodes: HashMap<&'a str, (&'a str, &'a str)>,
}

impl PuzzleInput for Solver {
    type Data<'a> = Network<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        parse_network(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_network(input: &str) -> Result<Network<'_>, anyhow::Error> {
    let mut lines = input.trim().lines();

    let directions = lines
        .next()
        .ok_or_else(|| anyhow!("missing directions line"))?
        .trim()
        .chars()
        .map(|c| match c {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(anyhow!("unknown direction {:?}", other)),
        })
        .collect::<Result<Vec<_>, _>>()?;
    if directions.is_empty() {
        return Err(anyhow!("directions line is empty"));
    }

    let mut nodes = HashMap::new();
    for line in lines.map(str::trim).filter(|l| !l.is_empty()) {
        let (name, edges) = line
            .split_once(" = ")
            .ok_or_else(|| anyhow!("expected 'NAME = (LEFT, RIGHT)', got {:?}", line))?;
        let (left, right) = edges
            .strip_prefix('(')
            .and_then(|e| e.strip_suffix(')'))
            .and_then(|e| e.split_once(", "))
            .ok_or_else(|| anyhow!("bad edge list {:?}", edges))?;
        nodes.insert(name.trim(), (left, right));
    }

    Ok(Network { directions, nodes })
}

impl Network<'_> {
    /// Steps from `start` to the first node satisfying `is_end`, following
    /// the direction list cyclically. A walk longer than directions × nodes
    /// has revisited a (node, direction offset) state and can never end.
    fn steps_until(&self, start: &str, is_end: impl Fn(&str) -> bool) -> Result<u64, SolveError> {
        let limit = (self.directions.len() * self.nodes.len()) as u64;
        let mut current = start;
        let mut steps = 0u64;

        for &direction in self.directions.iter().cycle() {
            if is_end(current) {
                return Ok(steps);
            }
            if steps > limit {
                return Err(SolveError::SolveFailed(
                    anyhow!("no end node reachable from {:?}", start).into(),
                ));
            }
            let &(left, right) = self.nodes.get(current).ok_or_else(|| {
                SolveError::SolveFailed(anyhow!("undefined node {:?}", current).into())
            })?;
            current = match direction {
                Direction::Left => left,
                Direction::Right => right,
            };
            steps += 1;
        }
        unreachable!("cycle() never ends")
    }
}

impl PartSolver<1> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Ok(data.steps_until("AAA", |node| node == "ZZZ")?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let starts: Vec<&str> = data
            .nodes
            .keys()
            .copied()
            .filter(|name| name.ends_with('A'))
            .collect();
        if starts.is_empty() {
            return Err(SolveError::SolveFailed("no ghost start nodes".into()));
        }

        let mut combined = 1u64;
        for start in starts {
            let steps = data.steps_until(start, |node| node.ends_with('Z'))?;
            combined = lcm(combined, steps);
        }
        Ok(combined.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE_DIRECT: &str = "\
RL

AAA = (BBB, CCC)
BBB = (DDD, EEE)
CCC = (ZZZ, GGG)
DDD = (DDD, DDD)
EEE = (EEE, EEE)
GGG = (GGG, GGG)
ZZZ = (ZZZ, ZZZ)";

    const EXAMPLE_REPEAT: &str = "\
LLR

AAA = (BBB, BBB)
BBB = (AAA, ZZZ)
ZZZ = (ZZZ, ZZZ)";

    const EXAMPLE_GHOSTS: &str = "\
LR

11A = (11B, XXX)
11B = (XXX, 11Z)
11Z = (11B, XXX)
22A = (22B, XXX)
22B = (22C, 22C)
22C = (22Z, 22Z)
22Z = (22B, 22B)
XXX = (XXX, XXX)";

    fn run(input: &str, part: u8) -> String {
        let mut data = Solver::parse(input).unwrap();
        <Solver as advent_core::Puzzle>::solve_part(&mut data, part).unwrap()
    }

    #[test]
    fn parses_directions_and_edges() {
        let network = Solver::parse(EXAMPLE_REPEAT).unwrap();
        assert_eq!(
            network.directions,
            vec![Direction::Left, Direction::Left, Direction::Right]
        );
        assert_eq!(network.nodes["BBB"], ("AAA", "ZZZ"));
    }

    #[test]
    fn direct_walk_example() {
        assert_eq!(run(EXAMPLE_DIRECT, 1), "2");
    }

    #[test]
    fn directions_repeat_when_exhausted() {
        assert_eq!(run(EXAMPLE_REPEAT, 1), "6");
    }

    #[test]
    fn ghost_walks_combine_with_lcm() {
        assert_eq!(run(EXAMPLE_GHOSTS, 2), "6");
    }

    #[test]
    fn unreachable_end_is_an_error() {
        let network = Solver::parse("L\n\nAAA = (AAA, AAA)").unwrap();
        assert!(network.steps_until("AAA", |n| n == "ZZZ").is_err());
    }

    #[test]
    fn start_on_an_end_node_takes_no_steps() {
        let network = Solver::parse(EXAMPLE_DIRECT).unwrap();
        assert_eq!(network.steps_until("ZZZ", |n| n == "ZZZ").unwrap(), 0);
    }
}
