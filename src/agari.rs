//! Winning-shape detection and full decomposition enumeration.
//!
//! Shanten answers "how far"; this module answers "is it complete, and in
//! which ways". Scoring needs every reading of a complete hand because
//! han and fu depend on how the tiles are grouped, and the engine must
//! keep the maximum-scoring reading.

use crate::types::{sequence_start, Hand, TILE_MAX, YAOCHUU_KINDS};

/// A concealed group inside one reading of a winning hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mentsu {
    Koutsu(u8),
    Shuntsu(u8),
}

/// One reading of the concealed portion: a head pair plus complete groups.
#[derive(Debug, Clone)]
pub struct Division {
    pub head: u8,
    pub body: Vec<Mentsu>,
}

/// Whether the concealed portion forms a complete hand in any family.
pub fn is_agari(hand: &Hand) -> bool {
    is_kokushi(hand) || is_chiitoitsu(hand) || is_standard_agari(hand)
}

/// Standard family: some head pair plus all remaining tiles in runs and
/// triplets.
pub fn is_standard_agari(hand: &Hand) -> bool {
    let mut counts = hand.counts;
    for head in 0..TILE_MAX {
        if counts[head] >= 2 {
            counts[head] -= 2;
            let ok = consume_groups(&mut counts, 0);
            counts[head] += 2;
            if ok {
                return true;
            }
        }
    }
    false
}

fn consume_groups(counts: &mut [u8; TILE_MAX], start: usize) -> bool {
    let mut i = start;
    while i < TILE_MAX && counts[i] == 0 {
        i += 1;
    }
    if i == TILE_MAX {
        return true;
    }

    if counts[i] >= 3 {
        counts[i] -= 3;
        let ok = consume_groups(counts, i);
        counts[i] += 3;
        if ok {
            return true;
        }
    }

    if sequence_start(i) && counts[i + 1] > 0 && counts[i + 2] > 0 {
        counts[i] -= 1;
        counts[i + 1] -= 1;
        counts[i + 2] -= 1;
        let ok = consume_groups(counts, i);
        counts[i] += 1;
        counts[i + 1] += 1;
        counts[i + 2] += 1;
        if ok {
            return true;
        }
    }

    false
}

/// Every standard reading of the concealed portion: each head choice
/// crossed with each way to decompose the rest.
pub fn find_divisions(hand: &Hand) -> Vec<Division> {
    let mut divisions = Vec::new();
    let mut counts = hand.counts;
    for head in 0..TILE_MAX {
        if counts[head] < 2 {
            continue;
        }
        counts[head] -= 2;
        let mut body = Vec::new();
        collect_bodies(&mut counts, 0, &mut body, &mut |body| {
            divisions.push(Division {
                head: head as u8,
                body: body.to_vec(),
            });
        });
        counts[head] += 2;
    }
    divisions
}

fn collect_bodies(
    counts: &mut [u8; TILE_MAX],
    start: usize,
    body: &mut Vec<Mentsu>,
    emit: &mut impl FnMut(&[Mentsu]),
) {
    let mut i = start;
    while i < TILE_MAX && counts[i] == 0 {
        i += 1;
    }
    if i == TILE_MAX {
        emit(body);
        return;
    }

    if counts[i] >= 3 {
        counts[i] -= 3;
        body.push(Mentsu::Koutsu(i as u8));
        collect_bodies(counts, i, body, emit);
        body.pop();
        counts[i] += 3;
    }

    if sequence_start(i) && counts[i + 1] > 0 && counts[i + 2] > 0 {
        counts[i] -= 1;
        counts[i + 1] -= 1;
        counts[i + 2] -= 1;
        body.push(Mentsu::Shuntsu(i as u8));
        collect_bodies(counts, i, body, emit);
        body.pop();
        counts[i] += 1;
        counts[i + 1] += 1;
        counts[i + 2] += 1;
    }
}

/// Exactly seven distinct pairs, nothing else.
pub fn is_chiitoitsu(hand: &Hand) -> bool {
    let mut pairs = 0;
    for &c in hand.counts.iter() {
        match c {
            0 => {}
            2 => pairs += 1,
            _ => return false,
        }
    }
    pairs == 7
}

/// Thirteen orphans: every terminal and honor kind present, exactly one
/// of them paired, and nothing outside that set.
pub fn is_kokushi(hand: &Hand) -> bool {
    let mut pair_found = false;
    let mut total = 0u8;
    for &idx in &YAOCHUU_KINDS {
        match hand.counts[idx] {
            0 => return false,
            1 => total += 1,
            2 => {
                if pair_found {
                    return false;
                }
                pair_found = true;
                total += 2;
            }
            _ => return false,
        }
    }
    pair_found && total == 14 && hand.total() == 14
}
