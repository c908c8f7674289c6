use serde::{Deserialize, Serialize};

pub const TILE_MAX: usize = 34;

/// The 13 tile kinds required by thirteen orphans: suit terminals plus
/// every wind and dragon.
pub const YAOCHUU_KINDS: [usize; 13] = [0, 8, 9, 17, 18, 26, 27, 28, 29, 30, 31, 32, 33];

/// 136-format IDs of the three red fives (5m, 5p, 5s).
pub const RED_FIVE_IDS: [u8; 3] = [16, 52, 88];

/// A hand representation using a histogram of tile kinds (0-33).
///
/// Indices 0-8 are 1m-9m, 9-17 are 1p-9p, 18-26 are 1s-9s, 27-30 the four
/// winds and 31-33 the three dragons. Only the concealed portion of a hand
/// lives here; locked melds are carried separately as [`Meld`] values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    pub counts: [u8; TILE_MAX],
}

impl Hand {
    pub fn from_counts(counts: [u8; TILE_MAX]) -> Self {
        Hand { counts }
    }

    /// Build a hand from 34-format tile kinds. Out-of-range values are
    /// ignored, matching the behavior of `add`.
    pub fn from_kinds(kinds: &[u8]) -> Self {
        let mut h = Hand::default();
        for &k in kinds {
            h.add(k);
        }
        h
    }

    pub fn add(&mut self, kind: u8) {
        if (kind as usize) < TILE_MAX {
            self.counts[kind as usize] += 1;
        }
    }

    pub fn remove(&mut self, kind: u8) {
        if (kind as usize) < TILE_MAX && self.counts[kind as usize] > 0 {
            self.counts[kind as usize] -= 1;
        }
    }

    pub fn total(&self) -> u8 {
        self.counts.iter().sum()
    }
}

impl Default for Hand {
    fn default() -> Self {
        Hand {
            counts: [0; TILE_MAX],
        }
    }
}

#[cfg_attr(feature = "python", pyo3::pyclass(eq, eq_int))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeldType {
    Chi = 0,
    Pon = 1,
    Daiminkan = 2,
    Ankan = 3,
    Kakan = 4,
}

impl MeldType {
    pub fn is_kan(self) -> bool {
        matches!(self, MeldType::Daiminkan | MeldType::Ankan | MeldType::Kakan)
    }
}

/// Represents wind directions, used for player seats and the round wind.
///
/// East is the dealer seat. Winds participate in scoring through yakuhai
/// (seat/round wind triplets) and through the dealer payment split.
#[cfg_attr(feature = "python", pyo3::pyclass(eq, eq_int))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Wind {
    #[default]
    East = 0,
    South = 1,
    West = 2,
    North = 3,
}

impl Wind {
    /// Tile kind (27-30) of this wind's honor tile.
    pub fn kind(self) -> u8 {
        27 + self as u8
    }
}

impl From<u8> for Wind {
    fn from(val: u8) -> Self {
        match val % 4 {
            0 => Wind::East,
            1 => Wind::South,
            2 => Wind::West,
            _ => Wind::North,
        }
    }
}

/// A locked meld, produced and validated by the external game-state feed.
///
/// Tiles arrive in 136-format (`kind * 4 + copy`) from the recognizer and
/// are normalised to 34-format kinds inside the evaluator. The core never
/// invents, mutates or removes a meld.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all, set_all))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meld {
    pub meld_type: MeldType,
    pub tiles: Vec<u8>,
    pub opened: bool,
}

impl Meld {
    pub fn new(meld_type: MeldType, tiles: Vec<u8>, opened: bool) -> Self {
        Self {
            meld_type,
            tiles,
            opened,
        }
    }
}

/// Situational flags for a winning hand. The core only consumes these;
/// their provenance (turn tracking, wall state) belongs to the caller.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all, set_all))]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conditions {
    pub tsumo: bool,
    pub riichi: bool,
    pub double_riichi: bool,
    pub ippatsu: bool,
    pub haitei: bool,
    pub houtei: bool,
    pub rinshan: bool,
    pub chankan: bool,
    /// First uninterrupted self-draw of the deal (tenhou/chiihou).
    pub tsumo_first_turn: bool,
    pub player_wind: Wind,
    pub round_wind: Wind,
    pub honba: u32,
}

impl Default for Conditions {
    fn default() -> Self {
        Self {
            tsumo: false,
            riichi: false,
            double_riichi: false,
            ippatsu: false,
            haitei: false,
            houtei: false,
            rinshan: false,
            chankan: false,
            tsumo_first_turn: false,
            player_wind: Wind::East,
            round_wind: Wind::East,
            honba: 0,
        }
    }
}

pub fn kind_of(tile_136: u8) -> u8 {
    tile_136 / 4
}

pub fn is_honor(kind: u8) -> bool {
    kind >= 27
}

/// Terminal of a numbered suit (1 or 9).
pub fn is_number_terminal(kind: u8) -> bool {
    kind < 27 && (kind % 9 == 0 || kind % 9 == 8)
}

/// Terminal or honor.
pub fn is_yaochuu(kind: u8) -> bool {
    is_honor(kind) || is_number_terminal(kind)
}

/// Whether a run (three consecutive ranks) may start at this kind.
pub fn sequence_start(kind: usize) -> bool {
    kind < 27 && kind % 9 <= 6
}

/// Dora kind indicated by an indicator kind: next rank in the same suit,
/// wrapping 9 to 1, E-S-W-N-E for winds and haku-hatsu-chun-haku for
/// dragons.
pub fn next_dora_kind(kind: u8) -> u8 {
    match kind {
        0..=8 => (kind + 1) % 9,
        9..=17 => 9 + (kind - 9 + 1) % 9,
        18..=26 => 18 + (kind - 18 + 1) % 9,
        27..=30 => 27 + (kind - 27 + 1) % 4,
        31..=33 => 31 + (kind - 31 + 1) % 3,
        _ => kind,
    }
}
