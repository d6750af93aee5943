//! Orders parallel results for streaming output
//!
//! Results arrive in whatever order the pool finishes them. Two min-heaps
//! put them back in (year, day, part) order: one holds the keys still
//! expected, the other buffers results that arrived early.

use crate::executor::RunResult;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// Ordering key for results, ascending by (year, day, part)
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&RunResult> for ResultKey {
    fn from(r: &RunResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// Min-heap wrapper ordering results by key
struct OrderedResult(RunResult);

impl Ord for OrderedResult {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed so the smallest key sits on top of the heap
        ResultKey::from(&other.0).cmp(&ResultKey::from(&self.0))
    }
}

impl PartialOrd for OrderedResult {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Eq for OrderedResult {}

impl PartialEq for OrderedResult {
    fn eq(&self, other: &Self) -> bool {
        ResultKey::from(&self.0) == ResultKey::from(&other.0)
    }
}

/// Buffers results and releases them in sorted order
pub struct ResultAggregator {
    /// Keys still expected; the next one to emit is at the top
    expected: BinaryHeap<Reverse<ResultKey>>,
    /// Results that arrived before their turn
    pending: BinaryHeap<OrderedResult>,
}

impl ResultAggregator {
    /// Aggregator expecting exactly these keys
    pub fn new(expected_keys: Vec<ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Accept a result; returns every result that is now ready, in order
    pub fn add(&mut self, result: RunResult) -> Vec<RunResult> {
        self.pending.push(OrderedResult(result));

        let mut ready = Vec::new();
        while let (Some(Reverse(next_expected)), Some(top_pending)) =
            (self.expected.peek(), self.pending.peek())
        {
            if ResultKey::from(&top_pending.0) == *next_expected {
                self.expected.pop();
                ready.push(self.pending.pop().expect("peeked above").0);
            } else {
                break;
            }
        }
        ready
    }

    /// Hand back whatever is still buffered, in order
    pub fn drain(&mut self) -> Vec<RunResult> {
        let mut results: Vec<_> = self.pending.drain().map(|o| o.0).collect();
        results.sort_by_key(|r| ResultKey::from(r));
        results
    }

    /// Whether every expected result has been emitted
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    fn make_result(year: u16, day: u8, part: u8) -> RunResult {
        RunResult {
            year,
            day,
            part,
            answer: Ok(format!("{}_{}_{}", year, day, part)),
            parse_duration: Some(TimeDelta::milliseconds(5)),
            solve_duration: TimeDelta::milliseconds(10),
        }
    }

    #[test]
    fn in_order_results_flow_through() {
        let mut agg = ResultAggregator::new(vec![key(2023, 1, 1), key(2023, 1, 2)]);

        let ready = agg.add(make_result(2023, 1, 1));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 1);

        let ready = agg.add(make_result(2023, 1, 2));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 2);

        assert!(agg.is_complete());
    }

    #[test]
    fn early_results_wait_for_their_turn() {
        let mut agg =
            ResultAggregator::new(vec![key(2023, 1, 1), key(2023, 1, 2), key(2023, 2, 1)]);

        assert!(agg.add(make_result(2023, 1, 2)).is_empty());
        assert!(agg.add(make_result(2023, 2, 1)).is_empty());

        // The missing head arrives and releases everything
        let ready = agg.add(make_result(2023, 1, 1));
        assert_eq!(ready.len(), 3);
        assert_eq!((ready[0].day, ready[0].part), (1, 1));
        assert_eq!((ready[1].day, ready[1].part), (1, 2));
        assert_eq!((ready[2].day, ready[2].part), (2, 1));
    }

    #[test]
    fn drain_returns_leftovers_sorted() {
        let mut agg = ResultAggregator::new(vec![key(2023, 1, 1), key(2023, 1, 2)]);

        agg.add(make_result(2023, 1, 2));

        let remaining = agg.drain();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].part, 2);
        assert!(!agg.is_complete());
    }
}
