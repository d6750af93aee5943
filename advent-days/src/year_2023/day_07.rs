//! Day 7: camel cards ranked by hand type and card order

use advent_core::{ParseError, PartSolver, PuzzleInput, SolveError};
use advent_macros::{DailyPuzzle, RegisterPuzzle};
use anyhow::anyhow;

#[derive(DailyPuzzle, RegisterPuzzle)]
#[puzzle(parts = 2)]
#[register(year = 2023, day = 7, tags = ["2023", "sorting"])]
pub struct Solver;

const PLAIN_ORDER: &[u8; 13] = b"23456789TJQKA";
const JOKER_ORDER: &[u8; 13] = b"J23456789TQKA";

#[derive(Debug, Clone)]
pub struct Hand {
    cards: [u8; 5],
    bid: u64,
}

impl PuzzleInput for Solver {
    type Data<'a> = Vec<Hand>;

    fn parse<'a>(input: &'a str) -> Result<Self::Data<'a>, ParseError> {
        input
            .trim()
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_hand(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect()
    }
}

fn parse_hand(line: &str) -> Result<Hand, anyhow::Error> {
    let (cards, bid) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| anyhow!("expected '<hand> <bid>'"))?;
    let cards: [u8; 5] = cards
        .as_bytes()
        .try_into()
        .map_err(|_| anyhow!("hand {:?} is not 5 cards", cards))?;
    for &card in &cards {
        if !PLAIN_ORDER.contains(&card) {
            return Err(anyhow!("unknown card {:?}", card as char));
        }
    }
    let bid = bid.trim().parse()?;
    Ok(Hand { cards, bid })
}

/// Hand type from the two largest multiplicities: 0 high card up to 6 five
/// of a kind. With jokers, the `J`s join the most plentiful other card;
/// five jokers stay as they are.
fn type_strength(cards: &[u8; 5], joker: bool) -> u8 {
    let mut counts = [0u8; 13];
    for &card in cards {
        // Parse validated the card, so the lookup cannot miss.
        let idx = PLAIN_ORDER.iter().position(|&c| c == card).unwrap_or(0);
        counts[idx] += 1;
    }

    if joker {
        let joker_idx = 9; // 'J' in PLAIN_ORDER
        let jokers = std::mem::take(&mut counts[joker_idx]);
        if jokers == 5 {
            return 6;
        }
        let best = counts
            .iter()
            .enumerate()
            .max_by_key(|&(_, &count)| count)
            .map(|(i, _)| i)
            .unwrap_or(0);
        counts[best] += jokers;
    }

    counts.sort_unstable_by(|a, b| b.cmp(a));
    match (counts[0], counts[1]) {
        (5, _) => 6,
        (4, _) => 5,
        (3, 2) => 4,
        (3, _) => 3,
        (2, 2) => 2,
        (2, _) => 1,
        _ => 0,
    }
}

/// Per-card tie-break values under the chosen card order
fn card_values(cards: &[u8; 5], joker: bool) -> [u8; 5] {
    let order: &[u8; 13] = if joker { JOKER_ORDER } else { PLAIN_ORDER };
    cards.map(|card| order.iter().position(|&c| c == card).unwrap_or(0) as u8)
}

fn strength(cards: &[u8; 5], joker: bool) -> (u8, [u8; 5]) {
    (type_strength(cards, joker), card_values(cards, joker))
}

fn total_winnings(hands: &[Hand], joker: bool) -> u64 {
    let mut ranked: Vec<&Hand> = hands.iter().collect();
    ranked.sort_by_cached_key(|hand| strength(&hand.cards, joker));
    ranked
        .iter()
        .enumerate()
        .map(|(i, hand)| (i as u64 + 1) * hand.bid)
        .sum()
}

impl PartSolver<1> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(data, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(data: &mut Self::Data<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(data, true).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "32T3K 765\nT55J5 684\nKK677 28\nKTJJT 220\nQQQJA 483";

    fn run(input: &str, part: u8) -> String {
        let mut data = Solver::parse(input).unwrap();
        <Solver as advent_core::Puzzle>::solve_part(&mut data, part).unwrap()
    }

    fn hand(cards: &str) -> [u8; 5] {
        cards.as_bytes().try_into().unwrap()
    }

    #[test]
    fn hand_types_without_jokers() {
        assert_eq!(type_strength(&hand("AAAAA"), false), 6);
        assert_eq!(type_strength(&hand("AA8AA"), false), 5);
        assert_eq!(type_strength(&hand("23332"), false), 4);
        assert_eq!(type_strength(&hand("TTT98"), false), 3);
        assert_eq!(type_strength(&hand("KTJJT"), false), 2);
        assert_eq!(type_strength(&hand("32T3K"), false), 1);
        assert_eq!(type_strength(&hand("23456"), false), 0);
    }

    #[test]
    fn jokers_upgrade_the_type() {
        assert_eq!(type_strength(&hand("KTJJT"), true), 5);
        assert_eq!(type_strength(&hand("QQQJA"), true), 5);
        assert_eq!(type_strength(&hand("JJJJJ"), true), 6);
        // but J becomes the weakest tie-break card
        assert_eq!(card_values(&hand("KTJJT"), true), [11, 9, 0, 0, 9]);
        assert_eq!(card_values(&hand("KTJJT"), false), [11, 8, 9, 9, 8]);
    }

    #[test]
    fn winnings_example() {
        assert_eq!(run(EXAMPLE, 1), "6440");
    }

    #[test]
    fn joker_winnings_example() {
        assert_eq!(run(EXAMPLE, 2), "5905");
    }

    #[test]
    fn rejects_short_hand() {
        assert!(Solver::parse("AAAA 10").is_err());
    }
}
