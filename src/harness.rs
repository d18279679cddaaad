// model = "claude-opus-4-5"
// created = 2026-10-16
// modified = 2026-10-16
// driver = "Isaac Clayton"

//! Byte-driven operation scripts for fuzzing and crash reproduction.
//!
//! A script decodes raw bytes into [`Op`]s and applies them one by one to a
//! byte sequence, checking each in-place algorithm against a naive model
//! built from std slice methods. The first broken law is reported as a
//! [`Violation`].
//!
//! Positions are encoded as fractions (`0..=255`) of the current sequence
//! length so that every decoded op is valid no matter what came before.
//! Element values are reduced modulo [`VALUE_RANGE`] to force duplicates.

use std::fmt;

use crate::partition::{partition, stable_partition};
use crate::query::{binary_search, equal_range, lower_bound, upper_bound};
use crate::restructure::{remove, unique};
use crate::rotate::{reverse, rotate, shift_left, shift_right};
use crate::search::search_n;

/// Element values are drawn from `0..VALUE_RANGE`.
pub const VALUE_RANGE: u8 = 8;

/// Scripts stop growing the sequence past this length.
pub const MAX_LEN: usize = 512;

const OP_KINDS: u8 = 11;

/// One decoded step of a script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// Append `len` pseudo-random values derived from `seed`.
    Extend { len: u8, seed: u8 },
    Reverse { lo: u8, hi: u8 },
    Rotate { lo: u8, hi: u8, mid: u8 },
    ShiftLeft { lo: u8, hi: u8, n: u8 },
    ShiftRight { lo: u8, hi: u8, n: u8 },
    /// Unstable partition by `x < pivot`.
    Partition { lo: u8, hi: u8, pivot: u8 },
    /// Stable partition by `x < pivot`.
    StablePartition { lo: u8, hi: u8, pivot: u8 },
    Remove { lo: u8, hi: u8, value: u8 },
    Unique { lo: u8, hi: u8 },
    SearchN { lo: u8, hi: u8, count: u8, value: u8 },
    /// Sort the range, then check lower/upper bound and equal range.
    Bounds { lo: u8, hi: u8, value: u8 },
}

impl Op {
    /// Decode one op from the front of `bytes`, returning the remainder.
    /// Returns `None` when the input is exhausted or truncated.
    pub fn from_bytes(bytes: &[u8]) -> Option<(Op, &[u8])> {
        let (&tag, rest) = bytes.split_first()?;
        let kind = tag % OP_KINDS;
        let arity = match kind {
            0 | 1 | 8 => 2,
            9 => 4,
            _ => 3,
        };
        if rest.len() < arity {
            return None;
        }
        let (a, rest) = rest.split_at(arity);

        let op = match kind {
            0 => Op::Extend { len: a[0] % 32 + 1, seed: a[1] },
            1 => Op::Reverse { lo: a[0], hi: a[1] },
            2 => Op::Rotate { lo: a[0], hi: a[1], mid: a[2] },
            3 => Op::ShiftLeft { lo: a[0], hi: a[1], n: a[2] },
            4 => Op::ShiftRight { lo: a[0], hi: a[1], n: a[2] },
            5 => Op::Partition { lo: a[0], hi: a[1], pivot: a[2] % VALUE_RANGE },
            6 => Op::StablePartition { lo: a[0], hi: a[1], pivot: a[2] % VALUE_RANGE },
            7 => Op::Remove { lo: a[0], hi: a[1], value: a[2] % VALUE_RANGE },
            8 => Op::Unique { lo: a[0], hi: a[1] },
            9 => Op::SearchN { lo: a[0], hi: a[1], count: a[2] % 6, value: a[3] % VALUE_RANGE },
            _ => Op::Bounds { lo: a[0], hi: a[1], value: a[2] % VALUE_RANGE },
        };
        return Some((op, rest));
    }
}

/// A law broken by one of the algorithms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// The returned position differs from the model's.
    Position { op: Op, expected: usize, actual: usize },
    /// The sequence contents differ from the model's.
    Contents { op: Op, expected: Vec<u8>, actual: Vec<u8> },
    /// Elements outside the operated range were modified.
    OutsideRange { op: Op, first: usize, last: usize },
    /// The range no longer holds the same multiset of elements.
    LostElements { op: Op, first: usize, last: usize },
    /// A false-group element sits before the partition point.
    Unpartitioned { op: Op, point: usize },
    /// `binary_search` disagrees with the model about membership.
    Membership { op: Op, expected: bool, actual: bool },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Position { op, expected, actual } => {
                write!(f, "{:?}: returned position {} but expected {}", op, actual, expected)
            }
            Violation::Contents { op, expected, actual } => {
                write!(f, "{:?}: produced {:?} but expected {:?}", op, actual, expected)
            }
            Violation::OutsideRange { op, first, last } => {
                write!(f, "{:?}: wrote outside range [{}, {})", op, first, last)
            }
            Violation::LostElements { op, first, last } => {
                write!(f, "{:?}: range [{}, {}) is not a permutation of its input", op, first, last)
            }
            Violation::Unpartitioned { op, point } => {
                write!(f, "{:?}: range is not partitioned at {}", op, point)
            }
            Violation::Membership { op, expected, actual } => {
                write!(f, "{:?}: binary search returned {} but expected {}", op, actual, expected)
            }
        }
    }
}

impl std::error::Error for Violation {}

/// A byte sequence plus the ops applied to it so far.
#[derive(Debug, Clone, Default)]
pub struct Script {
    seq: Vec<u8>,
    applied: usize,
}

/// Map a fraction in `0..=255` onto a position in `[0, len]`.
fn scale(frac: u8, len: usize) -> usize {
    return frac as usize * (len + 1) / 256;
}

impl Script {
    pub fn new() -> Script {
        return Script::default();
    }

    /// The current sequence.
    pub fn sequence(&self) -> &[u8] {
        return &self.seq;
    }

    /// Number of ops applied successfully.
    pub fn applied(&self) -> usize {
        return self.applied;
    }

    /// Decode and apply every op in `data`, stopping at the first violation.
    pub fn run(&mut self, data: &[u8]) -> Result<usize, Violation> {
        let mut remaining = data;
        while let Some((op, rest)) = Op::from_bytes(remaining) {
            remaining = rest;
            self.apply(&op)?;
        }
        return Ok(self.applied);
    }

    /// Resolve two fractions into an ordered range of the current sequence.
    fn range(&self, lo: u8, hi: u8) -> (usize, usize) {
        let a = scale(lo, self.seq.len());
        let b = scale(hi, self.seq.len());
        return (a.min(b), a.max(b));
    }

    /// Apply one op and check it against the model.
    pub fn apply(&mut self, op: &Op) -> Result<(), Violation> {
        let op = *op;
        let before = self.seq.clone();

        match op {
            Op::Extend { len, seed } => {
                let room = MAX_LEN.saturating_sub(self.seq.len());
                let mut state = seed as u32;
                for _ in 0..(len as usize).min(room) {
                    state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                    self.seq.push(((state >> 16) % VALUE_RANGE as u32) as u8);
                }
            }

            Op::Reverse { lo, hi } => {
                let (first, last) = self.range(lo, hi);
                let mut expected = before.clone();
                expected[first..last].reverse();
                reverse(&mut self.seq, first, last);
                check_contents(op, &expected, &self.seq)?;
            }

            Op::Rotate { lo, hi, mid } => {
                let (first, last) = self.range(lo, hi);
                let middle = first + scale(mid, last - first);
                let mut expected = before.clone();
                expected[first..last].rotate_left(middle - first);
                let result = rotate(&mut self.seq, first, middle, last);
                check_position(op, first + (last - middle), result)?;
                check_contents(op, &expected, &self.seq)?;
            }

            Op::ShiftLeft { lo, hi, n } => {
                let (first, last) = self.range(lo, hi);
                let n = n as usize % (last - first + 2);
                let result = shift_left(&mut self.seq, first, last, n);
                if n == 0 || n >= last - first {
                    check_position(op, if n == 0 { last } else { first }, result)?;
                    check_contents(op, &before, &self.seq)?;
                } else {
                    check_position(op, last - n, result)?;
                    check_contents(op, &before[first + n..last], &self.seq[first..result])?;
                    check_rearranged(op, &before, &self.seq, first, last)?;
                }
            }

            Op::ShiftRight { lo, hi, n } => {
                let (first, last) = self.range(lo, hi);
                let n = n as usize % (last - first + 2);
                let result = shift_right(&mut self.seq, first, last, n);
                if n == 0 || n >= last - first {
                    check_position(op, if n == 0 { first } else { last }, result)?;
                    check_contents(op, &before, &self.seq)?;
                } else {
                    check_position(op, first + n, result)?;
                    check_contents(op, &before[first..last - n], &self.seq[result..last])?;
                    check_rearranged(op, &before, &self.seq, first, last)?;
                }
            }

            Op::Partition { lo, hi, pivot } => {
                let (first, last) = self.range(lo, hi);
                let below = before[first..last].iter().filter(|x| **x < pivot).count();
                let point = partition(&mut self.seq, first, last, |x| *x < pivot);
                check_position(op, first + below, point)?;
                check_rearranged(op, &before, &self.seq, first, last)?;
                if self.seq[first..point].iter().any(|x| *x >= pivot) {
                    return Err(Violation::Unpartitioned { op, point });
                }
            }

            Op::StablePartition { lo, hi, pivot } => {
                let (first, last) = self.range(lo, hi);
                let range = &before[first..last];
                let mut expected = before[..first].to_vec();
                expected.extend(range.iter().filter(|x| **x < pivot));
                let point = expected.len();
                expected.extend(range.iter().filter(|x| **x >= pivot));
                expected.extend_from_slice(&before[last..]);

                let result = stable_partition(&mut self.seq, first, last, |x| *x < pivot);
                check_position(op, point, result)?;
                check_contents(op, &expected, &self.seq)?;
            }

            Op::Remove { lo, hi, value } => {
                let (first, last) = self.range(lo, hi);
                let survivors: Vec<u8> = before[first..last]
                    .iter()
                    .copied()
                    .filter(|x| *x != value)
                    .collect();
                let end = remove(&mut self.seq, first, last, &value);
                check_position(op, first + survivors.len(), end)?;
                check_contents(op, &survivors, &self.seq[first..end])?;
                check_rearranged(op, &before, &self.seq, first, last)?;
            }

            Op::Unique { lo, hi } => {
                let (first, last) = self.range(lo, hi);
                let mut survivors = before[first..last].to_vec();
                survivors.dedup();
                let end = unique(&mut self.seq, first, last);
                check_position(op, first + survivors.len(), end)?;
                check_contents(op, &survivors, &self.seq[first..end])?;
                check_rearranged(op, &before, &self.seq, first, last)?;
            }

            Op::SearchN { lo, hi, count, value } => {
                let (first, last) = self.range(lo, hi);
                let count = count as usize;
                let expected = if count == 0 {
                    first
                } else {
                    before[first..last]
                        .windows(count)
                        .position(|w| w.iter().all(|x| *x == value))
                        .map_or(last, |i| first + i)
                };
                check_position(op, expected, search_n(&self.seq, first, last, count, &value))?;
            }

            Op::Bounds { lo, hi, value } => {
                let (first, last) = self.range(lo, hi);
                self.seq[first..last].sort_unstable();
                let sorted = &self.seq[first..last];
                let lower = first + sorted.partition_point(|x| *x < value);
                let upper = first + sorted.partition_point(|x| *x <= value);

                check_position(op, lower, lower_bound(&self.seq, first, last, &value))?;
                check_position(op, upper, upper_bound(&self.seq, first, last, &value))?;
                let range = equal_range(&self.seq, first, last, &value);
                check_position(op, lower, range.first)?;
                check_position(op, upper, range.second)?;
                let found = binary_search(&self.seq, first, last, &value);
                if found != (lower != upper) {
                    return Err(Violation::Membership { op, expected: !found, actual: found });
                }
            }
        }

        self.applied += 1;
        return Ok(());
    }
}

fn check_position(op: Op, expected: usize, actual: usize) -> Result<(), Violation> {
    if expected != actual {
        return Err(Violation::Position { op, expected, actual });
    }
    return Ok(());
}

fn check_contents(op: Op, expected: &[u8], actual: &[u8]) -> Result<(), Violation> {
    if expected != actual {
        return Err(Violation::Contents {
            op,
            expected: expected.to_vec(),
            actual: actual.to_vec(),
        });
    }
    return Ok(());
}

/// Everything outside `[first, last)` is untouched and the range holds the
/// same multiset as before.
fn check_rearranged(
    op: Op,
    before: &[u8],
    after: &[u8],
    first: usize,
    last: usize,
) -> Result<(), Violation> {
    if before[..first] != after[..first] || before[last..] != after[last..] {
        return Err(Violation::OutsideRange { op, first, last });
    }
    let mut expected = before[first..last].to_vec();
    let mut actual = after[first..last].to_vec();
    expected.sort_unstable();
    actual.sort_unstable();
    if expected != actual {
        return Err(Violation::LostElements { op, first, last });
    }
    return Ok(());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extended(len: u8) -> Script {
        let mut script = Script::new();
        script.apply(&Op::Extend { len, seed: 7 }).unwrap();
        return script;
    }

    #[test]
    fn decode_respects_arity() {
        let (op, rest) = Op::from_bytes(&[0, 3, 9, 42]).unwrap();
        assert_eq!(op, Op::Extend { len: 4, seed: 9 });
        assert_eq!(rest, [42u8]);

        assert!(Op::from_bytes(&[]).is_none());
        assert!(Op::from_bytes(&[2, 1]).is_none());
        assert!(Op::from_bytes(&[9, 1, 2, 3]).is_none());
    }

    #[test]
    fn decode_reduces_values() {
        let (op, _) = Op::from_bytes(&[7, 0, 255, 13]).unwrap();
        assert_eq!(op, Op::Remove { lo: 0, hi: 255, value: 13 % VALUE_RANGE });
    }

    #[test]
    fn scale_covers_whole_range() {
        assert_eq!(scale(0, 10), 0);
        assert_eq!(scale(255, 10), 10);
        assert_eq!(scale(255, 0), 0);
    }

    #[test]
    fn extend_is_capped() {
        let mut script = Script::new();
        for _ in 0..40 {
            script.apply(&Op::Extend { len: 32, seed: 1 }).unwrap();
        }
        assert_eq!(script.sequence().len(), MAX_LEN);
        assert!(script.sequence().iter().all(|x| *x < VALUE_RANGE));
    }

    #[test]
    fn every_op_kind_passes_on_a_full_range() {
        let mut script = extended(32);
        let ops = [
            Op::Reverse { lo: 0, hi: 255 },
            Op::Rotate { lo: 0, hi: 255, mid: 100 },
            Op::ShiftLeft { lo: 0, hi: 255, n: 5 },
            Op::ShiftRight { lo: 10, hi: 200, n: 3 },
            Op::Partition { lo: 0, hi: 255, pivot: 4 },
            Op::StablePartition { lo: 30, hi: 255, pivot: 2 },
            Op::Remove { lo: 0, hi: 255, value: 1 },
            Op::Unique { lo: 0, hi: 255 },
            Op::SearchN { lo: 0, hi: 255, count: 2, value: 3 },
            Op::Bounds { lo: 0, hi: 255, value: 5 },
        ];
        for op in &ops {
            script.apply(op).unwrap();
        }
        assert_eq!(script.applied(), ops.len() + 1);
    }

    #[test]
    fn ops_on_empty_sequence_are_fine() {
        let mut script = Script::new();
        let applied = script.run(&[1, 0, 255, 2, 4, 200, 9, 5, 1, 2, 3, 3]).unwrap();
        assert_eq!(applied, 3);
        assert!(script.sequence().is_empty());
    }

    #[test]
    fn violation_display_names_the_op() {
        let violation = Violation::Position {
            op: Op::Unique { lo: 0, hi: 1 },
            expected: 2,
            actual: 3,
        };
        let message = violation.to_string();
        assert!(message.contains("Unique"));
        assert!(message.contains("returned position 3 but expected 2"));
    }
}
