use crate::types::Round;
use soroban_sdk::Vec;

/// Id of the round active at `now`, or 0 when no round is.
///
/// Round `i` covers `[start_i, start_{i+1})` and the last one ends at
/// `sale_end`. Starts are strictly increasing, so this is a binary search for
/// the last start `<= now`.
pub fn round_at(rounds: &Vec<Round>, sale_end: u64, now: u64) -> u32 {
    let len = rounds.len();
    if len == 0 || now >= sale_end {
        return 0;
    }
    match rounds.get(0) {
        Some(first) if now >= first.start_time => {}
        _ => return 0,
    }

    let (mut lo, mut hi) = (0u32, len);
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        match rounds.get(mid) {
            Some(round) if round.start_time <= now => lo = mid,
            _ => hi = mid,
        }
    }
    lo + 1
}
