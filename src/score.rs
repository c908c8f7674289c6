//! Conversion of han and fu into point payments.

use serde::Serialize;

use crate::yaku::YakuValue;

/// Point payments for one winning hand. Ron collects everything from the
/// discarder; tsumo splits between the dealer and the others, with the
/// dealer collecting three equal shares.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Score {
    pub total: u32,
    pub pay_ron: u32,
    pub pay_tsumo_oya: u32,
    pub pay_tsumo_ko: u32,
}

/// Full result of scoring a winning hand: the satisfied conditions in the
/// order they were established, the totals they sum to, and the point
/// conversion.
#[cfg_attr(feature = "python", pyo3::pyclass(get_all))]
#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub yaku: Vec<YakuValue>,
    pub han: u8,
    pub fu: u8,
    pub yakuman: bool,
    /// False when only dora conditions matched; such a hand has a winning
    /// shape but no claimable win.
    pub has_yaku: bool,
    pub points: Score,
}

/// Convert han and fu into payments. Above four han the fu stop
/// mattering and the fixed ladder applies; 13 han and every further
/// multiple is a stacked yakuman.
pub fn calculate_score(han: u8, fu: u8, is_dealer: bool, is_tsumo: bool, honba: u32) -> Score {
    let mut s = if han >= 5 {
        let base = match han {
            5 => 2000,
            6 | 7 => 3000,
            8..=10 => 4000,
            11 | 12 => 6000,
            _ => 8000 * (han as u32 / 13),
        };
        split(base, is_dealer, is_tsumo)
    } else {
        let fu = round_up_fu(fu);
        let base = (fu as u32) * (2u32 << (1 + han as u32));
        split(base.min(2000), is_dealer, is_tsumo)
    };

    if is_tsumo {
        s.pay_tsumo_oya += honba * 100;
        s.pay_tsumo_ko += honba * 100;
        s.total += honba * 300;
    } else {
        s.pay_ron += honba * 300;
        s.total += honba * 300;
    }
    s
}

fn split(base: u32, is_dealer: bool, is_tsumo: bool) -> Score {
    let ron_total = if is_dealer {
        ceil_100(base * 6)
    } else {
        ceil_100(base * 4)
    };

    let (pay_oya, pay_ko) = if is_dealer {
        (0, ceil_100(base * 2))
    } else {
        (ceil_100(base * 2), ceil_100(base))
    };

    let tsumo_total = if is_dealer {
        pay_ko * 3
    } else {
        pay_oya + pay_ko * 2
    };

    if is_tsumo {
        Score {
            total: tsumo_total,
            pay_ron: 0,
            pay_tsumo_oya: pay_oya,
            pay_tsumo_ko: pay_ko,
        }
    } else {
        Score {
            total: ron_total,
            pay_ron: ron_total,
            pay_tsumo_oya: 0,
            pay_tsumo_ko: 0,
        }
    }
}

fn round_up_fu(fu: u8) -> u8 {
    if fu == 25 {
        return 25; // chiitoitsu fu are never rounded
    }
    fu.div_ceil(10) * 10
}

fn ceil_100(val: u32) -> u32 {
    val.div_ceil(100) * 100
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_point_formula() {
        // 4 han 30 fu non-dealer tsumo: base 1920, no rounding to mangan.
        let s = calculate_score(4, 30, false, true, 0);
        assert_eq!(s.pay_tsumo_oya, 3900);
        assert_eq!(s.pay_tsumo_ko, 2000);
        assert_eq!(s.total, 7900);
    }

    #[test]
    fn mangan_cap() {
        // 3 han 70 fu would exceed 2000 base; capped at mangan.
        let s = calculate_score(3, 70, false, false, 0);
        assert_eq!(s.pay_ron, 8000);
        // 4 han 40 fu caps as well.
        let s = calculate_score(4, 40, true, false, 0);
        assert_eq!(s.pay_ron, 12000);
    }

    #[test]
    fn limit_ladder() {
        assert_eq!(calculate_score(6, 30, false, false, 0).pay_ron, 12000);
        assert_eq!(calculate_score(8, 30, false, false, 0).pay_ron, 16000);
        assert_eq!(calculate_score(11, 30, false, false, 0).pay_ron, 24000);
        assert_eq!(calculate_score(13, 0, false, false, 0).pay_ron, 32000);
        assert_eq!(calculate_score(13, 0, true, false, 0).pay_ron, 48000);
        // Double yakuman.
        assert_eq!(calculate_score(26, 0, false, false, 0).pay_ron, 64000);
    }

    #[test]
    fn honba_bonus() {
        let s = calculate_score(1, 30, false, false, 2);
        assert_eq!(s.pay_ron, 1000 + 600);
        let s = calculate_score(1, 30, false, true, 2);
        assert_eq!(s.pay_tsumo_ko, 300 + 200);
        assert_eq!(s.pay_tsumo_oya, 500 + 200);
    }

    #[test]
    fn chiitoitsu_fu_not_rounded() {
        // 2 han 25 fu: base 400, non-dealer ron 1600.
        let s = calculate_score(2, 25, false, false, 0);
        assert_eq!(s.pay_ron, 1600);
    }
}
