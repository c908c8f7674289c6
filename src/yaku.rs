//! Scoring conditions (yaku) and fu over a completed hand.
//!
//! A winning hand can usually be read several ways; every division from
//! [`crate::agari::find_divisions`] is evaluated against the full
//! condition table and the maximum-value reading wins (han first, fu as
//! the tie-break). The irregular families carry fixed values independent
//! of any division.

use serde::Serialize;

use crate::agari::{self, Division, Mentsu};
use crate::types::{
    is_honor, is_number_terminal, is_yaochuu, Hand, Meld, MeldType, TILE_MAX,
};

pub const ID_MENZEN_TSUMO: u32 = 1;
pub const ID_RIICHI: u32 = 2;
pub const ID_CHANKAN: u32 = 3;
pub const ID_RINSHAN: u32 = 4;
pub const ID_HAITEI: u32 = 5;
pub const ID_HOUTEI: u32 = 6;
pub const ID_HAKU: u32 = 7;
pub const ID_HATSU: u32 = 8;
pub const ID_CHUN: u32 = 9;
pub const ID_JIKAZE: u32 = 10;
pub const ID_BAKAZE: u32 = 11;
pub const ID_TANYAO: u32 = 12;
pub const ID_IIPEIKO: u32 = 13;
pub const ID_PINFU: u32 = 14;
pub const ID_CHANTA: u32 = 15;
pub const ID_ITTSU: u32 = 16;
pub const ID_SANSHOKU_DOUJUN: u32 = 17;
pub const ID_DOUBLE_RIICHI: u32 = 18;
pub const ID_SANSHOKU_DOUKOU: u32 = 19;
pub const ID_TOITOI: u32 = 21;
pub const ID_SANANKOU: u32 = 22;
pub const ID_SHOUSANGEN: u32 = 23;
pub const ID_HONROUTOU: u32 = 24;
pub const ID_CHIITOITSU: u32 = 25;
pub const ID_JUNCHAN: u32 = 26;
pub const ID_HONITSU: u32 = 27;
pub const ID_RYANPEIKO: u32 = 28;
pub const ID_CHINITSU: u32 = 29;
pub const ID_IPPATSU: u32 = 30;
pub const ID_DORA: u32 = 31;
pub const ID_AKA_DORA: u32 = 32;
pub const ID_URA_DORA: u32 = 33;
pub const ID_DAISANGEN: u32 = 37;
pub const ID_SUUANKOU: u32 = 38;
pub const ID_TSUUIISOU: u32 = 39;
pub const ID_RYUUIISOU: u32 = 40;
pub const ID_CHINROUTOU: u32 = 41;
pub const ID_KOKUSHI: u32 = 42;
pub const ID_SHOUSUUSHII: u32 = 43;
pub const ID_CHUUREN: u32 = 44;
pub const ID_TENHOU: u32 = 45;
pub const ID_CHIIHOU: u32 = 46;
pub const ID_DAISUUSHII: u32 = 50;

/// One satisfied scoring condition and its contribution.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YakuValue {
    pub id: u32,
    pub name: &'static str,
    pub han: u8,
}

#[derive(Debug, Clone, Default)]
pub struct YakuResult {
    pub han: u8,
    pub fu: u8,
    /// Number of yakuman-grade conditions; zero for ordinary hands.
    pub yakuman: u8,
    pub entries: Vec<YakuValue>,
}

impl YakuResult {
    fn add(&mut self, id: u32, name: &'static str, han: u8) {
        self.han += han;
        self.entries.push(YakuValue { id, name, han });
    }

    fn add_yakuman(&mut self, id: u32, name: &'static str, han: u8) {
        self.add(id, name, han);
        self.yakuman += 1;
    }

    fn beats(&self, other: &YakuResult) -> bool {
        (self.yakuman, self.han, self.fu) > (other.yakuman, other.han, other.fu)
    }
}

/// Situational context for scoring, assembled by the evaluator from the
/// externally supplied [`crate::types::Conditions`] and indicator lists.
pub struct YakuContext {
    pub is_menzen: bool,
    pub is_riichi: bool,
    pub is_double_riichi: bool,
    pub is_ippatsu: bool,
    pub is_tsumo: bool,
    pub is_haitei: bool,
    pub is_houtei: bool,
    pub is_rinshan: bool,
    pub is_chankan: bool,
    pub is_first_turn: bool,
    pub dora: u8,
    pub aka_dora: u8,
    pub ura_dora: u8,
    /// Round wind tile kind (27-30).
    pub bakaze: u8,
    /// Seat wind tile kind (27-30).
    pub jikaze: u8,
}

impl Default for YakuContext {
    fn default() -> Self {
        Self {
            is_menzen: true,
            is_riichi: false,
            is_double_riichi: false,
            is_ippatsu: false,
            is_tsumo: false,
            is_haitei: false,
            is_houtei: false,
            is_rinshan: false,
            is_chankan: false,
            is_first_turn: false,
            dora: 0,
            aka_dora: 0,
            ura_dora: 0,
            bakaze: 27,
            jikaze: 27,
        }
    }
}

/// Evaluate every reading of a complete hand and keep the best.
///
/// `hand` is the 14-tile-equivalent concealed portion including the
/// winning tile; `melds` are in 34-format. The caller has already
/// verified completeness.
pub fn calculate_yaku(hand: &Hand, melds: &[Meld], ctx: &YakuContext, win_kind: u8) -> YakuResult {
    let divisions = agari::find_divisions(hand);

    if divisions.is_empty() {
        if melds.is_empty() && agari::is_kokushi(hand) {
            let mut res = YakuResult::default();
            res.add_yakuman(ID_KOKUSHI, "Kokushi Musou", 13);
            return res;
        }
        if melds.is_empty() && agari::is_chiitoitsu(hand) {
            return chiitoitsu_yaku(hand, ctx);
        }
        return YakuResult::default();
    }

    // Yakuman that depend only on the tiles, not on the reading.
    let mut fixed_yakuman: Vec<(u32, &'static str, u8)> = Vec::new();
    if is_tsuuiisou(hand, melds) {
        fixed_yakuman.push((ID_TSUUIISOU, "Tsuuiisou", 13));
    }
    if is_chinroutou(hand, melds) {
        fixed_yakuman.push((ID_CHINROUTOU, "Chinroutou", 13));
    }
    if is_ryuuiisou(hand, melds) {
        fixed_yakuman.push((ID_RYUUIISOU, "Ryuuiisou", 13));
    }
    if is_chuuren(hand, melds) {
        fixed_yakuman.push((ID_CHUUREN, "Chuuren Poutou", 13));
    }
    if ctx.is_first_turn && ctx.is_tsumo && ctx.is_menzen && melds.is_empty() {
        if ctx.jikaze == 27 {
            fixed_yakuman.push((ID_TENHOU, "Tenhou", 13));
        } else {
            fixed_yakuman.push((ID_CHIIHOU, "Chiihou", 13));
        }
    }

    let mut best = YakuResult::default();
    for div in &divisions {
        for wg in win_placements(div, win_kind) {
            let res = evaluate_division(hand, melds, ctx, div, wg, win_kind, &fixed_yakuman);
            if res.beats(&best) {
                best = res;
            }
        }
    }
    // A hand readable both ways still takes the seven-pairs value when
    // that reading scores higher.
    if melds.is_empty() && agari::is_chiitoitsu(hand) {
        let res = chiitoitsu_yaku(hand, ctx);
        if res.beats(&best) {
            best = res;
        }
    }
    best
}

/// Positions the winning tile can occupy in a division: `None` for the
/// head, `Some(idx)` for a body group. Fu and several yaku depend on the
/// choice, so each placement is scored separately.
fn win_placements(div: &Division, win_kind: u8) -> Vec<Option<usize>> {
    let mut spots = Vec::new();
    if div.head == win_kind {
        spots.push(None);
    }
    for (idx, m) in div.body.iter().enumerate() {
        let hit = match *m {
            Mentsu::Koutsu(t) => t == win_kind,
            Mentsu::Shuntsu(t) => win_kind >= t && win_kind <= t + 2,
        };
        if hit {
            spots.push(Some(idx));
        }
    }
    spots
}

fn evaluate_division(
    hand: &Hand,
    melds: &[Meld],
    ctx: &YakuContext,
    div: &Division,
    wg: Option<usize>,
    win_kind: u8,
    fixed_yakuman: &[(u32, &'static str, u8)],
) -> YakuResult {
    let mut res = YakuResult::default();

    let meld_koutsu = |kind: u8| {
        melds
            .iter()
            .any(|m| m.meld_type != MeldType::Chi && m.tiles[0] == kind)
    };
    let div_koutsu = |kind: u8| {
        div.body
            .iter()
            .any(|m| matches!(m, Mentsu::Koutsu(t) if *t == kind))
    };
    let has_koutsu = |kind: u8| div_koutsu(kind) || meld_koutsu(kind);

    // Concealed triplets; a triplet completed by ron counts as open.
    let mut concealed_koutsu = 0;
    for (idx, m) in div.body.iter().enumerate() {
        if matches!(m, Mentsu::Koutsu(_)) && (ctx.is_tsumo || wg != Some(idx)) {
            concealed_koutsu += 1;
        }
    }
    concealed_koutsu += melds
        .iter()
        .filter(|m| m.meld_type == MeldType::Ankan)
        .count();

    // Yakuman first: when any applies, ordinary yaku are irrelevant.
    for &(id, name, han) in fixed_yakuman {
        res.add_yakuman(id, name, han);
    }
    if concealed_koutsu == 4 {
        res.add_yakuman(ID_SUUANKOU, "Suuankou", 13);
    }
    if (31..=33).all(|d| has_koutsu(d)) {
        res.add_yakuman(ID_DAISANGEN, "Daisangen", 13);
    }
    let wind_koutsu = (27..=30).filter(|&w| has_koutsu(w)).count();
    if wind_koutsu == 4 {
        res.add_yakuman(ID_DAISUUSHII, "Daisuushii", 26);
    } else if wind_koutsu == 3 && (27..=30).contains(&div.head) && !has_koutsu(div.head) {
        res.add_yakuman(ID_SHOUSUUSHII, "Shousuushii", 13);
    }
    if res.yakuman > 0 {
        return res;
    }

    // Flag yaku.
    if ctx.is_double_riichi {
        res.add(ID_DOUBLE_RIICHI, "Double Riichi", 2);
    } else if ctx.is_riichi {
        res.add(ID_RIICHI, "Riichi", 1);
    }
    if ctx.is_ippatsu {
        res.add(ID_IPPATSU, "Ippatsu", 1);
    }
    if ctx.is_menzen && ctx.is_tsumo {
        res.add(ID_MENZEN_TSUMO, "Menzen Tsumo", 1);
    }
    if ctx.is_haitei {
        res.add(ID_HAITEI, "Haitei", 1);
    }
    if ctx.is_houtei {
        res.add(ID_HOUTEI, "Houtei", 1);
    }
    if ctx.is_rinshan {
        res.add(ID_RINSHAN, "Rinshan", 1);
    }
    if ctx.is_chankan {
        res.add(ID_CHANKAN, "Chankan", 1);
    }

    // Pinfu decides between fixed and computed fu.
    if is_pinfu(div, melds, ctx, wg, win_kind) {
        res.add(ID_PINFU, "Pinfu", 1);
        res.fu = if ctx.is_tsumo { 20 } else { 30 };
    } else {
        res.fu = calculate_fu(div, melds, ctx, wg, win_kind);
    }

    if is_tanyao(hand, melds) {
        res.add(ID_TANYAO, "Tanyao", 1);
    }

    // Dragon and wind triplets.
    for (kind, id, name) in [
        (31, ID_HAKU, "Yakuhai Haku"),
        (32, ID_HATSU, "Yakuhai Hatsu"),
        (33, ID_CHUN, "Yakuhai Chun"),
    ] {
        if has_koutsu(kind) {
            res.add(id, name, 1);
        }
    }
    if has_koutsu(ctx.jikaze) {
        res.add(ID_JIKAZE, "Seat Wind", 1);
    }
    if has_koutsu(ctx.bakaze) {
        res.add(ID_BAKAZE, "Round Wind", 1);
    }

    let dragon_koutsu = (31..=33).filter(|&d| has_koutsu(d)).count();
    if dragon_koutsu == 2 && (31..=33).contains(&div.head) {
        res.add(ID_SHOUSANGEN, "Shousangen", 2);
    }

    // Shape yaku over the division body plus melds.
    let koutsu_total = div
        .body
        .iter()
        .filter(|m| matches!(m, Mentsu::Koutsu(_)))
        .count()
        + melds.iter().filter(|m| m.meld_type != MeldType::Chi).count();
    if koutsu_total == 4 {
        res.add(ID_TOITOI, "Toitoi", 2);
    }
    if concealed_koutsu == 3 {
        res.add(ID_SANANKOU, "San Ankou", 2);
    }

    if ctx.is_menzen {
        match identical_shuntsu_pairs(div) {
            2 => res.add(ID_RYANPEIKO, "Ryanpeiko", 3),
            1 => res.add(ID_IIPEIKO, "Iipeiko", 1),
            _ => {}
        }
    }

    if has_ittsu(div, melds) {
        res.add(ID_ITTSU, "Ittsu", if ctx.is_menzen { 2 } else { 1 });
    }
    if has_sanshoku_doujun(div, melds) {
        res.add(
            ID_SANSHOKU_DOUJUN,
            "Sanshoku Doujun",
            if ctx.is_menzen { 2 } else { 1 },
        );
    }
    if has_sanshoku_doukou(div, melds) {
        res.add(ID_SANSHOKU_DOUKOU, "Sanshoku Doukou", 2);
    }

    if is_chinitsu(hand, melds) {
        res.add(ID_CHINITSU, "Chinitsu", if ctx.is_menzen { 6 } else { 5 });
    } else if is_honitsu(hand, melds) {
        res.add(ID_HONITSU, "Honitsu", if ctx.is_menzen { 3 } else { 2 });
    }

    if is_honroutou(hand, melds) {
        res.add(ID_HONROUTOU, "Honroutou", 2);
    } else if is_junchan(div, melds) {
        res.add(ID_JUNCHAN, "Junchan", if ctx.is_menzen { 3 } else { 2 });
    } else if is_chanta(div, melds) {
        res.add(ID_CHANTA, "Chanta", if ctx.is_menzen { 2 } else { 1 });
    }

    add_dora(&mut res, ctx);
    res
}

fn chiitoitsu_yaku(hand: &Hand, ctx: &YakuContext) -> YakuResult {
    let mut res = YakuResult::default();

    // Seven pairs of honors is tsuuiisou, which outranks the base yaku.
    if is_tsuuiisou(hand, &[]) {
        res.add_yakuman(ID_TSUUIISOU, "Tsuuiisou", 13);
        return res;
    }

    res.fu = 25;
    res.add(ID_CHIITOITSU, "Chiitoitsu", 2);

    if is_tanyao(hand, &[]) {
        res.add(ID_TANYAO, "Tanyao", 1);
    }
    if is_chinitsu(hand, &[]) {
        res.add(ID_CHINITSU, "Chinitsu", 6);
    } else if is_honitsu(hand, &[]) {
        res.add(ID_HONITSU, "Honitsu", 3);
    }
    if is_honroutou(hand, &[]) {
        res.add(ID_HONROUTOU, "Honroutou", 2);
    }

    if ctx.is_double_riichi {
        res.add(ID_DOUBLE_RIICHI, "Double Riichi", 2);
    } else if ctx.is_riichi {
        res.add(ID_RIICHI, "Riichi", 1);
    }
    if ctx.is_ippatsu {
        res.add(ID_IPPATSU, "Ippatsu", 1);
    }
    if ctx.is_tsumo {
        res.add(ID_MENZEN_TSUMO, "Menzen Tsumo", 1);
    }
    if ctx.is_haitei {
        res.add(ID_HAITEI, "Haitei", 1);
    }
    if ctx.is_houtei {
        res.add(ID_HOUTEI, "Houtei", 1);
    }

    add_dora(&mut res, ctx);
    res
}

fn add_dora(res: &mut YakuResult, ctx: &YakuContext) {
    if ctx.dora > 0 {
        res.add(ID_DORA, "Dora", ctx.dora);
    }
    if ctx.aka_dora > 0 {
        res.add(ID_AKA_DORA, "Aka Dora", ctx.aka_dora);
    }
    if ctx.ura_dora > 0 {
        res.add(ID_URA_DORA, "Ura Dora", ctx.ura_dora);
    }
}

fn calculate_fu(
    div: &Division,
    melds: &[Meld],
    ctx: &YakuContext,
    wg: Option<usize>,
    win_kind: u8,
) -> u8 {
    let mut fu = 20u8;
    if ctx.is_tsumo {
        fu += 2;
    } else if ctx.is_menzen {
        fu += 10;
    }

    // Yakuhai head; a head matching both winds counts twice.
    if div.head == ctx.bakaze {
        fu += 2;
    }
    if div.head == ctx.jikaze {
        fu += 2;
    }
    if div.head >= 31 {
        fu += 2;
    }

    match wg {
        None => fu += 2, // tanki
        Some(idx) => {
            if let Mentsu::Shuntsu(t) = div.body[idx] {
                let kanchan = win_kind == t + 1;
                let penchan =
                    (win_kind == t + 2 && t % 9 == 0) || (win_kind == t && t % 9 == 6);
                if kanchan || penchan {
                    fu += 2;
                }
            }
        }
    }

    for (idx, m) in div.body.iter().enumerate() {
        if let Mentsu::Koutsu(t) = *m {
            // Ron completing the triplet makes it an open one.
            let mut f = if !ctx.is_tsumo && wg == Some(idx) { 2 } else { 4 };
            if is_yaochuu(t) {
                f *= 2;
            }
            fu += f;
        }
    }
    for m in melds {
        if m.meld_type == MeldType::Chi {
            continue;
        }
        let mut f: u8 = if m.opened { 2 } else { 4 };
        if m.meld_type.is_kan() {
            f *= 4;
        }
        if is_yaochuu(m.tiles[0]) {
            f *= 2;
        }
        fu += f;
    }

    // An open hand that rons with no shape fu still pays at 30.
    if fu == 20 && !ctx.is_tsumo {
        fu = 30;
    }

    fu.div_ceil(10) * 10
}

fn is_pinfu(
    div: &Division,
    melds: &[Meld],
    ctx: &YakuContext,
    wg: Option<usize>,
    win_kind: u8,
) -> bool {
    if !ctx.is_menzen || !melds.is_empty() {
        return false;
    }
    if div
        .body
        .iter()
        .any(|m| matches!(m, Mentsu::Koutsu(_)))
    {
        return false;
    }
    if div.head >= 31 || div.head == ctx.bakaze || div.head == ctx.jikaze {
        return false;
    }
    // The wait must be an open-ended protorun.
    match wg {
        Some(idx) => match div.body[idx] {
            Mentsu::Shuntsu(t) => {
                (win_kind == t && t % 9 != 6) || (win_kind == t + 2 && t % 9 != 0)
            }
            Mentsu::Koutsu(_) => false,
        },
        None => false,
    }
}

fn identical_shuntsu_pairs(div: &Division) -> usize {
    let mut starts: Vec<u8> = div
        .body
        .iter()
        .filter_map(|m| match m {
            Mentsu::Shuntsu(t) => Some(*t),
            Mentsu::Koutsu(_) => None,
        })
        .collect();
    starts.sort_unstable();
    let mut pairs = 0;
    let mut i = 0;
    while i + 1 < starts.len() {
        if starts[i] == starts[i + 1] {
            pairs += 1;
            i += 2;
        } else {
            i += 1;
        }
    }
    pairs
}

fn each_kind(hand: &Hand, melds: &[Meld], mut pred: impl FnMut(u8) -> bool) -> bool {
    for (kind, &c) in hand.counts.iter().enumerate() {
        if c > 0 && !pred(kind as u8) {
            return false;
        }
    }
    for m in melds {
        for &t in &m.tiles {
            if !pred(t) {
                return false;
            }
        }
    }
    true
}

fn is_tanyao(hand: &Hand, melds: &[Meld]) -> bool {
    each_kind(hand, melds, |k| !is_yaochuu(k))
}

fn is_honroutou(hand: &Hand, melds: &[Meld]) -> bool {
    each_kind(hand, melds, is_yaochuu)
}

fn is_tsuuiisou(hand: &Hand, melds: &[Meld]) -> bool {
    each_kind(hand, melds, is_honor)
}

fn is_chinroutou(hand: &Hand, melds: &[Meld]) -> bool {
    each_kind(hand, melds, is_number_terminal)
}

/// All greens: 2s 3s 4s 6s 8s and hatsu.
fn is_ryuuiisou(hand: &Hand, melds: &[Meld]) -> bool {
    each_kind(hand, melds, |k| matches!(k, 19 | 20 | 21 | 23 | 25 | 32))
}

/// Nine gates: concealed 1112345678999 of one suit plus any tile of it.
fn is_chuuren(hand: &Hand, melds: &[Meld]) -> bool {
    if !melds.is_empty() {
        return false;
    }
    let Some(first) = hand.counts.iter().position(|&c| c > 0) else {
        return false;
    };
    if first >= 27 {
        return false;
    }
    let base = first / 9 * 9;
    let suit = &hand.counts[base..base + 9];
    if hand.total() != suit.iter().sum::<u8>() {
        return false;
    }
    suit[0] >= 3 && suit[8] >= 3 && suit.iter().all(|&c| c >= 1)
}

fn suits_used(hand: &Hand, melds: &[Meld]) -> ([bool; 3], bool) {
    let mut suits = [false; 3];
    let mut honors = false;
    let mut mark = |k: u8| {
        if k >= 27 {
            honors = true;
        } else {
            suits[(k / 9) as usize] = true;
        }
    };
    for kind in 0..TILE_MAX {
        if hand.counts[kind] > 0 {
            mark(kind as u8);
        }
    }
    for m in melds {
        for &t in &m.tiles {
            mark(t);
        }
    }
    (suits, honors)
}

fn is_honitsu(hand: &Hand, melds: &[Meld]) -> bool {
    let (suits, honors) = suits_used(hand, melds);
    honors && suits.iter().filter(|&&s| s).count() == 1
}

fn is_chinitsu(hand: &Hand, melds: &[Meld]) -> bool {
    let (suits, honors) = suits_used(hand, melds);
    !honors && suits.iter().filter(|&&s| s).count() == 1
}

/// Every group and the head contain a terminal; honors excluded.
fn is_junchan(div: &Division, melds: &[Meld]) -> bool {
    if !is_number_terminal(div.head) {
        return false;
    }
    for m in &div.body {
        let ok = match *m {
            Mentsu::Koutsu(t) => is_number_terminal(t),
            Mentsu::Shuntsu(t) => is_number_terminal(t) || is_number_terminal(t + 2),
        };
        if !ok {
            return false;
        }
    }
    melds.iter().all(|m| {
        m.tiles.iter().all(|&t| !is_honor(t)) && m.tiles.iter().any(|&t| is_number_terminal(t))
    })
}

/// Every group and the head contain a terminal or honor, with at least
/// one honor somewhere (otherwise the hand is junchan).
fn is_chanta(div: &Division, melds: &[Meld]) -> bool {
    if !is_yaochuu(div.head) {
        return false;
    }
    let mut has_honor = is_honor(div.head);
    for m in &div.body {
        let ok = match *m {
            Mentsu::Koutsu(t) => {
                has_honor |= is_honor(t);
                is_yaochuu(t)
            }
            Mentsu::Shuntsu(t) => is_number_terminal(t) || is_number_terminal(t + 2),
        };
        if !ok {
            return false;
        }
    }
    for m in melds {
        if !m.tiles.iter().any(|&t| is_yaochuu(t)) {
            return false;
        }
        has_honor |= m.tiles.iter().any(|&t| is_honor(t));
    }
    has_honor
}

fn shuntsu_starts(div: &Division, melds: &[Meld]) -> Vec<u8> {
    let mut starts: Vec<u8> = div
        .body
        .iter()
        .filter_map(|m| match m {
            Mentsu::Shuntsu(t) => Some(*t),
            Mentsu::Koutsu(_) => None,
        })
        .collect();
    starts.extend(
        melds
            .iter()
            .filter(|m| m.meld_type == MeldType::Chi)
            .map(|m| m.tiles[0]),
    );
    starts
}

fn has_ittsu(div: &Division, melds: &[Meld]) -> bool {
    let starts = shuntsu_starts(div, melds);
    [0u8, 9, 18].iter().any(|&base| {
        [base, base + 3, base + 6]
            .iter()
            .all(|s| starts.contains(s))
    })
}

fn has_sanshoku_doujun(div: &Division, melds: &[Meld]) -> bool {
    let starts = shuntsu_starts(div, melds);
    (0u8..7).any(|i| {
        starts.contains(&i) && starts.contains(&(i + 9)) && starts.contains(&(i + 18))
    })
}

fn has_sanshoku_doukou(div: &Division, melds: &[Meld]) -> bool {
    let mut kinds: Vec<u8> = div
        .body
        .iter()
        .filter_map(|m| match m {
            Mentsu::Koutsu(t) => Some(*t),
            Mentsu::Shuntsu(_) => None,
        })
        .collect();
    kinds.extend(
        melds
            .iter()
            .filter(|m| m.meld_type != MeldType::Chi)
            .map(|m| m.tiles[0]),
    );
    (0u8..9).any(|i| {
        kinds.contains(&i) && kinds.contains(&(i + 9)) && kinds.contains(&(i + 18))
    })
}
