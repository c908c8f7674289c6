//! Shanten calculation over the three winning-hand families.
//!
//! The standard family (four groups and a pair) is evaluated by an
//! exhaustive backtracking search over the tile histogram; seven pairs and
//! thirteen orphans are closed-form counts. The reported shanten for a
//! hand is the minimum across the applicable families, -1 meaning the
//! hand is already complete.

use ahash::AHashMap;

use crate::types::{sequence_start, TILE_MAX, YAOCHUU_KINDS};

/// Backtracking search state for the standard family.
///
/// `missing` answers: how many tiles must still be drawn to fill `slots`
/// group seats plus the pair seat out of the remaining histogram? A
/// complete group fills its seat for free, a partial shape (protorun or
/// proto-triplet pair) fills a seat at the cost of one missing tile, and
/// an empty seat costs two. Capping partial shapes at the number of open
/// seats falls out of the seat accounting.
struct Search<'a> {
    counts: &'a mut [u8; TILE_MAX],
    memo: AHashMap<(u128, u8, bool), u8>,
}

impl Search<'_> {
    /// Pack the histogram into a memo key; counts are at most 4, so three
    /// bits per kind suffice.
    fn signature(&self) -> u128 {
        self.counts
            .iter()
            .fold(0u128, |sig, &c| (sig << 3) | c as u128)
    }

    fn missing(&mut self, slots: u8, has_pair: bool) -> u8 {
        if slots == 0 && has_pair {
            return 0;
        }
        let Some(i) = self.counts.iter().position(|&c| c > 0) else {
            return 2 * slots + u8::from(!has_pair);
        };
        let key = (self.signature(), slots, has_pair);
        if let Some(&cached) = self.memo.get(&key) {
            return cached;
        }

        let mut best;

        // Dead weight: one copy of the lowest kind stays unused.
        self.counts[i] -= 1;
        best = self.missing(slots, has_pair);
        self.counts[i] += 1;

        // The pair seat.
        if !has_pair && self.counts[i] >= 2 {
            self.counts[i] -= 2;
            best = best.min(self.missing(slots, true));
            self.counts[i] += 2;
        }

        if slots > 0 {
            // Triplet.
            if self.counts[i] >= 3 {
                self.counts[i] -= 3;
                best = best.min(self.missing(slots - 1, has_pair));
                self.counts[i] += 3;
            }
            // Run.
            if sequence_start(i) && self.counts[i + 1] > 0 && self.counts[i + 2] > 0 {
                self.counts[i] -= 1;
                self.counts[i + 1] -= 1;
                self.counts[i + 2] -= 1;
                best = best.min(self.missing(slots - 1, has_pair));
                self.counts[i] += 1;
                self.counts[i + 1] += 1;
                self.counts[i + 2] += 1;
            }
            // Pair kept as a proto-triplet, one tile short of a group.
            if self.counts[i] >= 2 {
                self.counts[i] -= 2;
                best = best.min(1 + self.missing(slots - 1, has_pair));
                self.counts[i] += 2;
            }
            // Adjacent protorun (side or edge wait).
            if i < 27 && i % 9 <= 7 && self.counts[i + 1] > 0 {
                self.counts[i] -= 1;
                self.counts[i + 1] -= 1;
                best = best.min(1 + self.missing(slots - 1, has_pair));
                self.counts[i] += 1;
                self.counts[i + 1] += 1;
            }
            // Gapped protorun (closed wait).
            if i < 27 && i % 9 <= 6 && self.counts[i + 2] > 0 {
                self.counts[i] -= 1;
                self.counts[i + 2] -= 1;
                best = best.min(1 + self.missing(slots - 1, has_pair));
                self.counts[i] += 1;
                self.counts[i + 2] += 1;
            }
        }

        self.memo.insert(key, best);
        best
    }
}

/// Standard-family shanten for a concealed histogram, with `meld_count`
/// groups already locked in. -1 means the concealed portion resolves into
/// exactly the remaining groups plus a pair.
pub fn calc_standard(counts: &[u8; TILE_MAX], meld_count: u8) -> i8 {
    let slots = 4u8.saturating_sub(meld_count);
    let mut work = *counts;
    let mut search = Search {
        counts: &mut work,
        memo: AHashMap::new(),
    };
    search.missing(slots, false) as i8 - 1
}

/// Seven-pairs shanten: six minus the number of kinds held as a pair.
/// Only meaningful for a meld-free 13/14-tile hand; the caller gates this.
pub fn calc_chiitoitsu(counts: &[u8; TILE_MAX]) -> i8 {
    let pairs = counts.iter().filter(|&&c| c >= 2).count() as i8;
    6 - pairs
}

/// Thirteen-orphans shanten: thirteen minus the terminal/honor kinds
/// present, minus one more if any of them is already paired.
pub fn calc_kokushi(counts: &[u8; TILE_MAX]) -> i8 {
    let mut kinds = 0i8;
    let mut has_pair = false;
    for &idx in &YAOCHUU_KINDS {
        if counts[idx] > 0 {
            kinds += 1;
            if counts[idx] >= 2 {
                has_pair = true;
            }
        }
    }
    13 - kinds - i8::from(has_pair)
}

/// Minimum shanten across all applicable families. The irregular families
/// require a full concealed hand, so they only compete when no melds are
/// locked.
pub fn calc_shanten(counts: &[u8; TILE_MAX], meld_count: u8) -> i8 {
    let mut shanten = calc_standard(counts, meld_count);
    if meld_count == 0 {
        shanten = shanten
            .min(calc_chiitoitsu(counts))
            .min(calc_kokushi(counts));
    }
    shanten
}

/// Tile kinds whose draw strictly decreases shanten.
///
/// Deliberately brute force: every kind is hypothetically drawn and the
/// hand re-evaluated, which makes the result the union over all
/// minimum-deficiency decompositions for free. Kinds already held four
/// times across hand and melds are skipped (not advancing, not an error).
pub fn effective_tiles(
    counts: &[u8; TILE_MAX],
    meld_counts: &[u8; TILE_MAX],
    meld_count: u8,
) -> Vec<u8> {
    let current = calc_shanten(counts, meld_count);
    if current == -1 {
        return Vec::new();
    }
    let mut work = *counts;
    let mut out = Vec::new();
    for kind in 0..TILE_MAX {
        if work[kind] + meld_counts[kind] >= 4 {
            continue;
        }
        work[kind] += 1;
        if calc_shanten(&work, meld_count) < current {
            out.push(kind as u8);
        }
        work[kind] -= 1;
    }
    out
}
