//! Text notation for hands and melds.
//!
//! Concealed tiles are digit runs followed by a suit letter
//! (`"123m406p99s11z"`, `0` meaning the red five), melds are
//! parenthesised groups: `(123m)` for chi, `(p5z)` for pon, `(k1m)` for a
//! concealed kan, `(k1m2)` for an open kan claimed from seat 2, `(s5p)`
//! for an added kan. Used by tests, diagnostics and the Python surface;
//! the live feed sends numeric tile IDs instead.

use std::iter::Peekable;
use std::str::Chars;

use crate::errors::{HandError, HandResult};
use crate::types::{Meld, MeldType, TILE_MAX};

const KIND_NAMES: [&str; TILE_MAX] = [
    "1m", "2m", "3m", "4m", "5m", "6m", "7m", "8m", "9m", // man
    "1p", "2p", "3p", "4p", "5p", "6p", "7p", "8p", "9p", // pin
    "1s", "2s", "3s", "4s", "5s", "6s", "7s", "8s", "9s", // sou
    "E", "S", "W", "N", "P", "F", "C", // honors
];

/// Display name of a tile kind.
pub fn kind_name(kind: u8) -> &'static str {
    KIND_NAMES.get(kind as usize).copied().unwrap_or("?")
}

/// Assigns concrete 136-format IDs to parsed kinds, so a hand string
/// never produces a fifth copy of a kind and red fives land on the
/// reserved copy slot.
struct TilePool {
    used: [[bool; 4]; TILE_MAX],
}

impl TilePool {
    fn new() -> Self {
        Self {
            used: [[false; 4]; TILE_MAX],
        }
    }

    fn take(&mut self, kind: usize, red: bool) -> HandResult<u8> {
        // Copy 0 of each five is the red one.
        let is_five = matches!(kind, 4 | 13 | 22);
        let order: &[usize] = match (is_five, red) {
            (true, true) => &[0],
            (true, false) => &[1, 2, 3, 0],
            (false, _) => &[0, 1, 2, 3],
        };
        for &slot in order {
            if !self.used[kind][slot] {
                self.used[kind][slot] = true;
                return Ok((kind * 4 + slot) as u8);
            }
        }
        Err(HandError::Parse {
            input: kind_name(kind as u8).to_string(),
            message: "more than four copies of one kind".to_string(),
        })
    }
}

fn suit_offset(c: char) -> Option<usize> {
    match c {
        'm' => Some(0),
        'p' => Some(9),
        's' => Some(18),
        'z' => Some(27),
        _ => None,
    }
}

fn digit_to_kind(digit: u32, offset: usize, input: &str) -> HandResult<(usize, bool)> {
    if digit == 0 {
        // 0 is the red five of a numbered suit.
        if offset >= 27 {
            return Err(parse_err(input, "no red five among honors"));
        }
        return Ok((offset + 4, true));
    }
    let kind = offset + digit as usize - 1;
    if kind >= TILE_MAX {
        return Err(parse_err(input, "honor rank out of range"));
    }
    Ok((kind, false))
}

fn parse_err(input: &str, message: &str) -> HandError {
    HandError::Parse {
        input: input.to_string(),
        message: message.to_string(),
    }
}

/// Parse a hand string into 136-format concealed tiles plus melds.
pub fn parse_hand(text: &str) -> HandResult<(Vec<u8>, Vec<Meld>)> {
    let mut pool = TilePool::new();
    let mut tiles = Vec::new();
    let mut melds = Vec::new();
    let mut pending: Vec<u32> = Vec::new();

    let mut chars = text.chars().peekable();
    while let Some(&c) = chars.peek() {
        if c == '(' {
            if !pending.is_empty() {
                return Err(parse_err(text, "digits without a suit before meld"));
            }
            chars.next();
            melds.push(parse_meld(&mut chars, &mut pool, text)?);
        } else if let Some(d) = c.to_digit(10) {
            chars.next();
            pending.push(d);
        } else if let Some(offset) = suit_offset(c) {
            chars.next();
            if pending.is_empty() {
                return Err(parse_err(text, "suit letter without digits"));
            }
            for &d in &pending {
                let (kind, red) = digit_to_kind(d, offset, text)?;
                tiles.push(pool.take(kind, red)?);
            }
            pending.clear();
        } else if c.is_whitespace() {
            chars.next();
        } else {
            return Err(parse_err(text, "unexpected character"));
        }
    }

    if !pending.is_empty() {
        return Err(parse_err(text, "digits without a suit"));
    }
    Ok((tiles, melds))
}

/// Parse a single tile, e.g. `"5m"`, `"0p"` (red five), `"3z"`.
pub fn parse_tile(text: &str) -> HandResult<u8> {
    let (tiles, melds) = parse_hand(text)?;
    if !melds.is_empty() || tiles.len() != 1 {
        return Err(parse_err(text, "expected exactly one tile"));
    }
    Ok(tiles[0])
}

fn parse_meld(
    chars: &mut Peekable<Chars>,
    pool: &mut TilePool,
    input: &str,
) -> HandResult<Meld> {
    let mut content = String::new();
    loop {
        match chars.next() {
            Some(')') => break,
            Some(c) => content.push(c),
            None => return Err(parse_err(input, "unterminated meld")),
        }
    }

    let (prefix, rest) = match content.chars().next() {
        Some(p @ ('p' | 'k' | 's')) => (Some(p), &content[1..]),
        Some(_) => (None, content.as_str()),
        None => return Err(parse_err(input, "empty meld")),
    };

    let mut it = rest.chars().peekable();
    let mut digits = Vec::new();
    while let Some(d) = it.peek().and_then(|c| c.to_digit(10)) {
        digits.push(d);
        it.next();
    }
    let offset = it
        .next()
        .and_then(suit_offset)
        .ok_or_else(|| parse_err(input, "meld missing suit letter"))?;
    let claim_index = it.next().and_then(|c| c.to_digit(10));

    match prefix {
        None => {
            // Chi: exactly three consecutive ranks of one suit.
            if digits.len() != 3 || offset >= 27 {
                return Err(parse_err(input, "chi meld requires three suited digits"));
            }
            let mut tiles = Vec::with_capacity(3);
            for &d in &digits {
                let (kind, red) = digit_to_kind(d, offset, input)?;
                tiles.push(pool.take(kind, red)?);
            }
            tiles.sort_unstable();
            let kinds: Vec<u8> = tiles.iter().map(|&t| t / 4).collect();
            if kinds[0] + 1 != kinds[1] || kinds[1] + 1 != kinds[2] {
                return Err(parse_err(input, "chi tiles are not consecutive"));
            }
            Ok(Meld::new(MeldType::Chi, tiles, true))
        }
        Some(prefix) => {
            if digits.len() != 1 {
                return Err(parse_err(input, "triplet meld requires one digit"));
            }
            let (kind, red) = digit_to_kind(digits[0], offset, input)?;
            let count = if prefix == 'p' { 3 } else { 4 };
            let mut tiles = Vec::with_capacity(count);
            if red {
                tiles.push(pool.take(kind, true)?);
            }
            while tiles.len() < count {
                tiles.push(pool.take(kind, false)?);
            }
            tiles.sort_unstable();

            let (meld_type, opened) = match prefix {
                'p' => (MeldType::Pon, true),
                // A kan without a claim index was drawn, not called.
                'k' if claim_index.is_none() => (MeldType::Ankan, false),
                'k' => (MeldType::Daiminkan, true),
                _ => (MeldType::Kakan, true),
            };
            Ok(Meld::new(meld_type, tiles, opened))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_concealed_tiles() {
        let (tiles, melds) = parse_hand("123m55z").unwrap();
        assert_eq!(melds.len(), 0);
        let kinds: Vec<u8> = tiles.iter().map(|&t| t / 4).collect();
        assert_eq!(kinds, vec![0, 1, 2, 31, 31]);
    }

    #[test]
    fn red_five_takes_reserved_copy() {
        assert_eq!(parse_tile("0m").unwrap(), 16);
        assert_eq!(parse_tile("0p").unwrap(), 52);
        assert_eq!(parse_tile("0s").unwrap(), 88);
        // A black five never lands on the red slot while others remain.
        assert_eq!(parse_tile("5m").unwrap(), 17);
    }

    #[test]
    fn parses_meld_forms() {
        let (_, melds) = parse_hand("11m(123p)(p5z)(k1s)(k9s2)").unwrap();
        assert_eq!(melds.len(), 4);
        assert_eq!(melds[0].meld_type, MeldType::Chi);
        assert!(melds[0].opened);
        assert_eq!(melds[1].meld_type, MeldType::Pon);
        assert_eq!(melds[2].meld_type, MeldType::Ankan);
        assert!(!melds[2].opened);
        assert_eq!(melds[3].meld_type, MeldType::Daiminkan);
        assert_eq!(melds[3].tiles.len(), 4);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_hand("123").is_err());
        assert!(parse_hand("12x").is_err());
        assert!(parse_hand("(12m)").is_err());
        assert!(parse_hand("(135m)").is_err());
        assert!(parse_hand("11111m").is_err());
        assert!(parse_hand("0z").is_err());
        assert!(parse_hand("9z").is_err());
        assert!(parse_tile("12m").is_err());
    }

    #[test]
    fn kind_names_round_trip() {
        assert_eq!(kind_name(0), "1m");
        assert_eq!(kind_name(26), "9s");
        assert_eq!(kind_name(33), "C");
        assert_eq!(kind_name(34), "?");
    }
}
