//! The public evaluation surface: one [`HandEvaluator`] per observed hand
//! state, built from the recognizer feed and queried by the suggestion
//! layer.

use crate::errors::{HandError, HandResult};
use crate::score::{self, Score, ScoreResult};
use crate::shanten;
use crate::types::{
    kind_of, next_dora_kind, Conditions, Hand, Meld, Wind, RED_FIVE_IDS, TILE_MAX,
};
use crate::yaku::{self, YakuContext, ID_AKA_DORA, ID_DORA, ID_URA_DORA};

/// Evaluates one player's hand: shanten, advancing tiles, completeness
/// and scoring.
///
/// Construction validates the feed (tile counts against the meld count,
/// per-kind multiplicity) and normalises meld tiles from the 136-format
/// the recognizer emits down to 34-format kinds. The evaluator itself is
/// immutable; a new state frame builds a new evaluator.
#[cfg_attr(feature = "python", pyo3::pyclass)]
#[derive(Debug)]
pub struct HandEvaluator {
    hand: Hand,
    melds: Vec<Meld>,
    meld_counts: [u8; TILE_MAX],
    aka_count: u8,
}

impl HandEvaluator {
    /// Build from concealed tiles in 136-format plus locked melds.
    pub fn new(tiles_136: Vec<u8>, melds: Vec<Meld>) -> HandResult<Self> {
        if melds.len() > 4 {
            log::warn!("rejecting hand with {} melds", melds.len());
            return Err(HandError::UnsupportedMeldCombination { melds: melds.len() });
        }

        let mut aka_count = 0u8;
        let mut hand = Hand::default();
        for &t in &tiles_136 {
            if t >= 136 {
                return Err(HandError::Parse {
                    input: t.to_string(),
                    message: "tile id out of range".into(),
                });
            }
            if RED_FIVE_IDS.contains(&t) {
                aka_count += 1;
            }
            hand.add(kind_of(t));
        }

        let mut meld_counts = [0u8; TILE_MAX];
        let mut internal_melds = Vec::with_capacity(melds.len());
        for meld in &melds {
            let mut kinds = Vec::with_capacity(meld.tiles.len());
            for &t in &meld.tiles {
                if t >= 136 {
                    return Err(HandError::Parse {
                        input: t.to_string(),
                        message: "meld tile id out of range".into(),
                    });
                }
                if RED_FIVE_IDS.contains(&t) {
                    aka_count += 1;
                }
                let k = kind_of(t);
                meld_counts[k as usize] += 1;
                kinds.push(k);
            }
            kinds.sort_unstable();
            internal_melds.push(Meld::new(meld.meld_type, kinds, meld.opened));
        }

        let tiles = hand.total();
        let base = 13 - 3 * melds.len() as u8;
        if tiles != base && tiles != base + 1 {
            log::warn!(
                "rejecting hand: {} concealed tiles with {} melds",
                tiles,
                melds.len()
            );
            return Err(HandError::InvalidHandShape {
                tiles,
                melds: melds.len() as u8,
            });
        }

        for kind in 0..TILE_MAX {
            let count = hand.counts[kind] + meld_counts[kind];
            if count > 4 {
                return Err(HandError::TileMultiplicityExceeded {
                    kind: kind as u8,
                    count,
                });
            }
        }

        Ok(Self {
            hand,
            melds: internal_melds,
            meld_counts,
            aka_count,
        })
    }

    /// Build from text notation, e.g. `"123m456p1188s(p5z)"`.
    pub fn from_text(text: &str) -> HandResult<Self> {
        let (tiles, melds) = crate::parser::parse_hand(text)?;
        Self::new(tiles, melds)
    }

    fn meld_count(&self) -> u8 {
        self.melds.len() as u8
    }

    /// Concealed tile count of a hand waiting to draw.
    fn drawing_size(&self) -> u8 {
        13 - 3 * self.meld_count()
    }

    /// Minimum shanten across all winning families; -1 when complete.
    pub fn shanten(&self) -> i8 {
        shanten::calc_shanten(&self.hand.counts, self.meld_count())
    }

    /// Tile kinds whose draw strictly decreases shanten. Empty for a hand
    /// that already holds its draw (nothing can be added) and for a
    /// complete hand.
    pub fn effective_tiles(&self) -> Vec<u8> {
        if self.hand.total() != self.drawing_size() {
            return Vec::new();
        }
        shanten::effective_tiles(&self.hand.counts, &self.meld_counts, self.meld_count())
    }

    pub fn is_complete(&self) -> bool {
        self.hand.total() == self.drawing_size() + 1 && self.shanten() == -1
    }

    pub fn is_tenpai(&self) -> bool {
        self.hand.total() == self.drawing_size() && self.shanten() == 0
    }

    /// Winning tile kinds for a tenpai hand.
    pub fn waits(&self) -> Vec<u8> {
        if self.hand.total() != self.drawing_size() {
            return Vec::new();
        }
        let mut out = Vec::new();
        let mut work = self.hand.clone();
        for kind in 0..TILE_MAX as u8 {
            if work.counts[kind as usize] + self.meld_counts[kind as usize] >= 4 {
                continue;
            }
            work.add(kind);
            if shanten::calc_shanten(&work.counts, self.meld_count()) == -1 {
                out.push(kind);
            }
            work.remove(kind);
        }
        out
    }

    /// Score a winning hand completed by `win_tile` (136-format).
    ///
    /// The winning tile is added to a 13-tile hand and assumed already
    /// present in a 14-tile one. Fails with [`HandError::NotAWinningHand`]
    /// when the resulting shape is not complete.
    pub fn calc(
        &self,
        win_tile: u8,
        dora_indicators: &[u8],
        ura_indicators: &[u8],
        conditions: &Conditions,
    ) -> HandResult<ScoreResult> {
        let win_kind = kind_of(win_tile);
        let mut hand_14 = self.hand.clone();
        let mut aka_count = self.aka_count;
        if hand_14.total() == self.drawing_size() {
            hand_14.add(win_kind);
            if RED_FIVE_IDS.contains(&win_tile) {
                aka_count += 1;
            }
        }

        let current = shanten::calc_shanten(&hand_14.counts, self.meld_count());
        if current != -1 {
            return Err(HandError::NotAWinningHand { shanten: current });
        }

        let count_indicated = |indicators: &[u8]| {
            indicators
                .iter()
                .map(|&ind| {
                    let next = next_dora_kind(kind_of(ind)) as usize;
                    hand_14.counts[next] + self.meld_counts[next]
                })
                .sum::<u8>()
        };

        let ctx = YakuContext {
            is_menzen: !self.is_open(),
            is_riichi: conditions.riichi,
            is_double_riichi: conditions.double_riichi,
            is_ippatsu: conditions.ippatsu,
            is_tsumo: conditions.tsumo,
            is_haitei: conditions.haitei,
            is_houtei: conditions.houtei,
            is_rinshan: conditions.rinshan,
            is_chankan: conditions.chankan,
            is_first_turn: conditions.tsumo_first_turn,
            dora: count_indicated(dora_indicators),
            aka_dora: aka_count,
            ura_dora: count_indicated(ura_indicators),
            bakaze: conditions.round_wind.kind(),
            jikaze: conditions.player_wind.kind(),
        };

        let result = yaku::calculate_yaku(&hand_14, &self.melds, &ctx, win_kind);
        log::debug!(
            "scored win on kind {}: {} han {} fu, {} conditions",
            win_kind,
            result.han,
            result.fu,
            result.entries.len()
        );

        let has_yaku = result
            .entries
            .iter()
            .any(|e| !matches!(e.id, ID_DORA | ID_AKA_DORA | ID_URA_DORA));
        let is_dealer = conditions.player_wind == Wind::East;
        let points = if has_yaku {
            score::calculate_score(
                result.han,
                result.fu,
                is_dealer,
                conditions.tsumo,
                conditions.honba,
            )
        } else {
            // A winning shape with no claimable yaku pays nothing.
            Score {
                total: 0,
                pay_ron: 0,
                pay_tsumo_oya: 0,
                pay_tsumo_ko: 0,
            }
        };

        Ok(ScoreResult {
            yaku: result.entries,
            han: result.han,
            fu: result.fu,
            yakuman: result.yakuman > 0,
            has_yaku,
            points,
        })
    }

    /// Locked melds in normalised 34-format, in arrival order.
    pub fn melds(&self) -> &[Meld] {
        &self.melds
    }

    /// Concealed-portion histogram.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Whether any meld was formed openly. Ankan keeps the hand concealed.
    pub fn is_open(&self) -> bool {
        self.melds.iter().any(|m| m.opened)
    }
}
