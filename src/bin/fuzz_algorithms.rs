//! AFL fuzz harness for the in-place algorithms
//!
//! Each input is decoded into a script of operations (extend, reverse,
//! rotate, shift, partition, remove, unique, search, bounds) applied to one
//! byte sequence. Every step is checked against a naive model:
//! 1. Returned positions match the model
//! 2. Stable results (rotate, reverse, stable partition) match exactly
//! 3. Unstable results keep the range's multiset and leave the outside alone
//!
//! Reproduce a crash with: cargo run --bin repro_crash -- <crash_file>

use afl::fuzz;
use posrange::harness::Script;

fn main() {
    fuzz!(|data: &[u8]| {
        let mut script = Script::new();
        if let Err(violation) = script.run(data) {
            panic!("after {} ops: {}", script.applied(), violation);
        }
    });
}
