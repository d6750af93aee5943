//! Day 5: almanac category maps chained from seed to location

use advent_core::{ParseError, PartSolver, PuzzleInput, SolveError};
use advent_macros::{DailyPuzzle, RegisterPuzzle};
use anyhow::{Context, anyhow};
use std::collections::HashMap;

#[derive(DailyPuzzle, RegisterPuzzle)]
#[puzzle(parts = 2)]
#[register(year = 2023, day = 5, tags = ["2023", "ranges"])]
pub struct Solver;

/// `dest src len` line: sources `src..src+len` shift to start at `dest`
#[derive(Debug, Clone, Copy)]
struct MapRow {
    destination_start: u64,
    source_start: u64,
    len: u64,
}

/// One `<src>-to-<dst> map:` block, rows sorted by source start
#[derive(Debug)]
struct CategoryMap {
    destination: String,
    rows: Vec<MapRow>,
}

/// A contiguous run of numbers, `start..start+len`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NumberRange {
    start: u64,
    len: u64,
}

#[derive(Debug)]
pub struct Almanac {
    seeds: Vec<u64>,
    /// Maps keyed by their source category name
    maps: HashMap<String, CategoryMap>,
}

impl CategoryMap {
    /// Map a single number; numbers no row covers map to themselves.
    fn map_number(&self, number: u64) -> u64 {
        for row in &self.rows {
            if (row.source_start..row.source_start + row.len).contains(&number) {
                return row.destination_start + (number - row.source_start);
            }
        }
        number
    }

    /// Map a whole range, splitting it wherever row coverage starts or
    /// ends. Pieces between rows pass through unchanged.
    fn map_range(&self, range: NumberRange, out: &mut Vec<NumberRange>) {
        let mut start = range.start;
        let mut len = range.len;

        for row in &self.rows {
            if len == 0 {
                return;
            }
            let row_end = row.source_start + row.len;
            if row_end <= start {
                continue;
            }
            if row.source_start >= start + len {
                break;
            }
            if start < row.source_start {
                let gap = row.source_start - start;
                out.push(NumberRange { start, len: gap });
                start += gap;
                len -= gap;
            }
            let covered = len.min(row_end - start);
            out.push(NumberRange {
                start: row.destination_start + (start - row.source_start),
                len: covered,
            });
            start += covered;
            len -= covered;
        }

        if len > 0 {
            out.push(NumberRange { start, len });
        }
    }
}

impl Almanac {
    /// Follow the map chain by category name from `seed` to `location`.
    fn seed_to_location(&self, seed: u64) -> Result<u64, anyhow::Error> {
        let mut category = "seed";
        let mut value = seed;
        while category != "location" {
            let map = self
                .maps
                .get(category)
                .ok_or_else(|| anyhow!("no map from category {:?}", category))?;
            value = map.map_number(value);
            category = &map.destination;
        }
        Ok(value)
    }

    /// Range-wise version of [`Self::seed_to_location`].
    fn seed_ranges_to_location(
        &self,
        mut ranges: Vec<NumberRange>,
    ) -> Result<Vec<NumberRange>, anyhow::Error> {
        let mut category = "seed";
        while category != "location" {
            let map = self
                .maps
                .get(category)
                .ok_or_else(|| anyhow!("no map from category {:?}", category))?;
            let mut next = Vec::new();
            for range in &ranges {
                map.map_range(*range, &mut next);
            }
            ranges = next;
            category = &map.destination;
        }
        Ok(ranges)
    }

    /// The seeds line read as `(start, len)` pairs.
    fn seed_ranges(&self) -> Result<Vec<NumberRange>, anyhow::Error> {
        if self.seeds.len() % 2 != 0 {
            return Err(anyhow!(
                "seed list has odd length {}, expected start/length pairs",
                self.seeds.len()
            ));
        }
        Ok(self
            .seeds
            .chunks_exact(2)
            .map(|pair| NumberRange {
                start: pair[0],
                len: pair[1],
            })
            .filter(|r| r.len > 0)
            .collect())
    }
}

impl PuzzleInput for Solver {
    type Data<'a> = Almanac;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        parse_almanac(input).map_err(|e| ParseError::InvalidFormat(e.to_string()))
    }
}

fn parse_almanac(input: &str) -> Result<Almanac, anyhow::Error> {
    let mut sections = input.trim().split("\n\n");

    let seeds_line = sections.next().ok_or_else(|| anyhow!("empty input"))?;
    let seeds = seeds_line
        .strip_prefix("seeds:")
        .ok_or_else(|| anyhow!("expected 'seeds:' line, got {:?}", seeds_line))?
        .split_whitespace()
        .map(|n| n.parse().context("bad seed number"))
        .collect::<Result<Vec<u64>, _>>()?;

    let mut maps = HashMap::new();
    for section in sections {
        let mut lines = section.lines();
        let header = lines.next().ok_or_else(|| anyhow!("empty map section"))?;
        let name = header
            .strip_suffix(" map:")
            .ok_or_else(|| anyhow!("expected '<src>-to-<dst> map:', got {:?}", header))?;
        let (source, destination) = name
            .split_once("-to-")
            .ok_or_else(|| anyhow!("bad map name {:?}", name))?;

        let mut rows = lines
            .map(|line| {
                let mut numbers = line.split_whitespace().map(str::parse::<u64>);
                match (numbers.next(), numbers.next(), numbers.next(), numbers.next()) {
                    (Some(dest), Some(src), Some(len), None) => Ok(MapRow {
                        destination_start: dest.context("bad destination")?,
                        source_start: src.context("bad source")?,
                        len: len.context("bad length")?,
                    }),
                    _ => Err(anyhow!("expected 'dest src len', got {:?}", line)),
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.sort_by_key(|row| row.source_start);

        maps.insert(
            source.to_string(),
            CategoryMap {
                destination: destination.to_string(),
                rows,
            },
        );
    }

    Ok(Almanac { seeds, maps })
}

impl PartSolver<1> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        data.seeds
            .iter()
            .map(|&seed| data.seed_to_location(seed))
            .try_fold(None, |best: Option<u64>, location| {
                location.map(|l| Some(best.map_or(l, |b| b.min(l))))
            })
            .map_err(|e| SolveError::SolveFailed(e.into()))?
            .map(|min| min.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no seeds listed".into()))
    }
}

impl PartSolver<2> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        let ranges = data
            .seed_ranges()
            .and_then(|ranges| data.seed_ranges_to_location(ranges))
            .map_err(|e| SolveError::SolveFailed(e.into()))?;
        ranges
            .iter()
            .filter(|r| r.len > 0)
            .map(|r| r.start)
            .min()
            .map(|min| min.to_string())
            .ok_or_else(|| SolveError::SolveFailed("no seed ranges listed".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4";

    fn run(input: &str, part: u8) -> String {
        let mut data = Solver::parse(input).unwrap();
        <Solver as advent_core::Puzzle>::solve_part(&mut data, part).unwrap()
    }

    #[test]
    fn uncovered_numbers_map_to_themselves() {
        let almanac = Solver::parse(EXAMPLE).unwrap();
        let soil = &almanac.maps["seed"];
        assert_eq!(soil.map_number(2), 2);
        assert_eq!(soil.map_number(99), 51);
        assert_eq!(soil.map_number(53), 55);
    }

    #[test]
    fn chain_walks_by_category_name() {
        let almanac = Solver::parse(EXAMPLE).unwrap();
        assert_eq!(almanac.seed_to_location(79).unwrap(), 82);
        assert_eq!(almanac.seed_to_location(13).unwrap(), 35);
    }

    #[test]
    fn lowest_location_example() {
        assert_eq!(run(EXAMPLE, 1), "35");
    }

    #[test]
    fn lowest_location_over_ranges_example() {
        assert_eq!(run(EXAMPLE, 2), "46");
    }

    #[test]
    fn range_mapping_agrees_with_single_numbers() {
        let almanac = Solver::parse(EXAMPLE).unwrap();
        let by_ranges = almanac
            .seed_ranges_to_location(almanac.seed_ranges().unwrap())
            .unwrap()
            .iter()
            .map(|r| r.start)
            .min()
            .unwrap();
        let brute = almanac
            .seed_ranges()
            .unwrap()
            .iter()
            .flat_map(|r| r.start..r.start + r.len)
            .map(|seed| almanac.seed_to_location(seed).unwrap())
            .min()
            .unwrap();
        assert_eq!(by_ranges, brute);
    }

    #[test]
    fn range_splits_at_row_boundaries() {
        let almanac = Solver::parse(EXAMPLE).unwrap();
        let mut out = Vec::new();
        // 96..104 crosses the 98..100 row and falls off the end of coverage
        almanac.maps["seed"].map_range(NumberRange { start: 96, len: 8 }, &mut out);
        assert_eq!(
            out,
            vec![
                NumberRange { start: 98, len: 2 },
                NumberRange { start: 50, len: 2 },
                NumberRange { start: 100, len: 4 },
            ]
        );
    }

    #[test]
    fn broken_chain_is_an_error() {
        let almanac = Solver::parse("seeds: 1\n\nseed-to-soil map:\n0 0 5").unwrap();
        assert!(almanac.seed_to_location(1).is_err());
    }
}
