#[cfg(test)]
mod unit_tests {
    use crate::agari::{find_divisions, is_agari, is_chiitoitsu, is_kokushi};
    use crate::errors::HandError;
    use crate::evaluator::HandEvaluator;
    use crate::types::{Conditions, Hand, Meld, MeldType, Wind};
    use crate::yaku;

    fn eval(text: &str) -> HandEvaluator {
        HandEvaluator::from_text(text).unwrap()
    }

    fn yaku_ids(res: &crate::score::ScoreResult) -> Vec<u32> {
        res.yaku.iter().map(|y| y.id).collect()
    }

    #[test]
    fn test_agari_standard() {
        // 123m 456m 789m 123p 11s
        let hand = Hand::from_kinds(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 18, 18]);
        assert!(is_agari(&hand), "should be a winning shape");
        assert!(
            !find_divisions(&hand).is_empty(),
            "a complete standard hand must decompose into groups plus a pair"
        );
    }

    #[test]
    fn test_agari_chiitoitsu() {
        let mut hand = Hand::default();
        for &k in &[0, 2, 4, 6, 8, 10, 12] {
            hand.add(k);
            hand.add(k);
        }
        assert!(is_chiitoitsu(&hand));
        assert!(is_agari(&hand));

        // Four of a kind is not two pairs.
        let mut quad = Hand::default();
        for &k in &[0, 0, 0, 0, 2, 2, 4, 4, 6, 6, 8, 8, 10, 10] {
            quad.add(k);
        }
        assert!(!is_chiitoitsu(&quad));
    }

    #[test]
    fn test_agari_kokushi() {
        let mut hand = Hand::default();
        for &k in &[0, 8, 9, 17, 18, 26, 27, 28, 29, 30, 31, 32, 33] {
            hand.add(k as u8);
        }
        hand.add(0);
        assert!(is_kokushi(&hand));
        assert!(is_agari(&hand));
    }

    #[test]
    fn test_shanten_tanki_wait_is_tenpai() {
        // Four complete groups and a lone 2s: the pair wait is tenpai, and
        // the pairing tile is the only advancing kind.
        let ev = eval("123456789m111p2s");
        assert_eq!(ev.shanten(), 0);
        assert!(ev.is_tenpai());
        assert_eq!(ev.effective_tiles(), vec![19]);
        assert_eq!(ev.waits(), vec![19]);
    }

    #[test]
    fn test_shanten_seven_identical_pairs_complete() {
        let ev = eval("11223344556677m");
        assert_eq!(ev.shanten(), -1);
        assert!(ev.is_complete());
        assert!(ev.effective_tiles().is_empty());
    }

    #[test]
    fn test_shanten_kokushi_single_wait() {
        // Twelve orphan kinds with a 1m pair, missing only the chun.
        let ev = eval("1199m19p19s123456z");
        assert_eq!(ev.shanten(), 0);
        assert_eq!(ev.effective_tiles(), vec![33]);
    }

    #[test]
    fn test_shanten_with_melds() {
        // Pon locked: ten concealed tiles evaluated against three groups.
        let ev = eval("123m456p1155s(p1z)");
        assert_eq!(ev.shanten(), 0);
        // Four melds: the bare pair completes the hand.
        let ev = eval("55z(123m)(456m)(p1z)(p2z)");
        assert_eq!(ev.shanten(), -1);
        assert!(ev.is_complete());
    }

    #[test]
    fn test_shanten_invariant_under_tile_and_meld_order() {
        let a = HandEvaluator::new(vec![0, 4, 8, 12, 16, 20, 24, 28, 32, 36, 40, 44, 48], vec![])
            .unwrap();
        let b = HandEvaluator::new(vec![48, 0, 44, 4, 40, 8, 36, 12, 32, 16, 28, 20, 24], vec![])
            .unwrap();
        assert_eq!(a.shanten(), b.shanten());
        assert_eq!(a.effective_tiles(), b.effective_tiles());

        let chi = Meld::new(MeldType::Chi, vec![0, 4, 8], true);
        let pon = Meld::new(MeldType::Pon, vec![108, 109, 110], true);
        let tiles = vec![36, 40, 44, 72, 73, 88, 89];
        let ab = HandEvaluator::new(tiles.clone(), vec![chi.clone(), pon.clone()]).unwrap();
        let ba = HandEvaluator::new(tiles, vec![pon, chi]).unwrap();
        assert_eq!(ab.shanten(), ba.shanten());
    }

    #[test]
    fn test_shanten_is_deterministic() {
        let ev = eval("123456789m111p2s");
        assert_eq!(ev.shanten(), ev.shanten());
        assert_eq!(ev.effective_tiles(), ev.effective_tiles());
    }

    #[test]
    fn test_reject_wrong_tile_count() {
        let err = HandEvaluator::from_text("123m").unwrap_err();
        assert_eq!(err, HandError::InvalidHandShape { tiles: 3, melds: 0 });

        // Meld count changes the expected concealed size.
        let err = HandEvaluator::from_text("123456789m112p(p1z)").unwrap_err();
        assert!(matches!(err, HandError::InvalidHandShape { melds: 1, .. }));
    }

    #[test]
    fn test_reject_five_melds() {
        let err = HandEvaluator::from_text("1m(123m)(456m)(789m)(123p)(456p)").unwrap_err();
        assert_eq!(err, HandError::UnsupportedMeldCombination { melds: 5 });
    }

    #[test]
    fn test_reject_tile_multiplicity() {
        // Five copies of 1m smuggled in as raw tile IDs.
        let tiles = vec![0, 0, 1, 2, 3, 4, 5, 6, 8, 9, 10, 12, 13, 14];
        let err = HandEvaluator::new(tiles, vec![]).unwrap_err();
        assert_eq!(
            err,
            HandError::TileMultiplicityExceeded { kind: 0, count: 5 }
        );
    }

    #[test]
    fn test_score_rejects_incomplete_hand() {
        let ev = eval("123m456m789m12p33s");
        let err = ev
            .calc(crate::parser::parse_tile("9p").unwrap(), &[], &[], &Conditions::default())
            .unwrap_err();
        assert!(matches!(err, HandError::NotAWinningHand { .. }));
    }

    #[test]
    fn test_score_stacks_tanyao_and_chinitsu() {
        // All simples in one suit: both conditions contribute.
        let ev = eval("2334455667788m");
        let cond = Conditions {
            player_wind: Wind::South,
            ..Conditions::default()
        };
        let win = crate::parser::parse_tile("2m").unwrap();
        let res = ev.calc(win, &[], &[], &cond).unwrap();
        let ids = yaku_ids(&res);
        assert!(ids.contains(&yaku::ID_TANYAO));
        assert!(ids.contains(&yaku::ID_CHINITSU));
        assert!(res.han >= 7);
    }

    #[test]
    fn test_score_prefers_highest_division() {
        // 222333444m reads as three concealed triplets or three identical
        // runs; with a pon locked the triplet reading (toitoi + san ankou)
        // scores higher and must win.
        let ev = eval("22233344m55p(p8s)");
        let cond = Conditions {
            tsumo: true,
            player_wind: Wind::South,
            ..Conditions::default()
        };
        let win = crate::parser::parse_tile("4m").unwrap();
        let res = ev.calc(win, &[], &[], &cond).unwrap();
        let ids = yaku_ids(&res);
        assert!(ids.contains(&yaku::ID_TOITOI));
        assert!(ids.contains(&yaku::ID_SANANKOU));
        assert!(ids.contains(&yaku::ID_TANYAO));
        assert_eq!(res.han, 5);
    }

    #[test]
    fn test_score_ryanpeiko_beats_chiitoitsu() {
        // Readable as seven pairs or as two iipeiko; the double-run
        // reading is worth more.
        let ev = eval("112233m445566p77z");
        let cond = Conditions {
            player_wind: Wind::South,
            ..Conditions::default()
        };
        let win = crate::parser::parse_tile("7z").unwrap();
        let res = ev.calc(win, &[], &[], &cond).unwrap();
        let ids = yaku_ids(&res);
        assert!(ids.contains(&yaku::ID_RYANPEIKO));
        assert!(!ids.contains(&yaku::ID_CHIITOITSU));
    }

    #[test]
    fn test_score_chiitoitsu_base() {
        let ev = eval("1133557799m1122p");
        let cond = Conditions {
            player_wind: Wind::West,
            ..Conditions::default()
        };
        let win = crate::parser::parse_tile("2p").unwrap();
        let res = ev.calc(win, &[], &[], &cond).unwrap();
        assert!(yaku_ids(&res).contains(&yaku::ID_CHIITOITSU));
        assert_eq!(res.fu, 25);
        assert_eq!(res.points.pay_ron, 1600);
    }

    #[test]
    fn test_score_pinfu_tsumo() {
        let ev = eval("123m567m234p5567s");
        let cond = Conditions {
            tsumo: true,
            player_wind: Wind::South,
            ..Conditions::default()
        };
        let win = crate::parser::parse_tile("8s").unwrap();
        let res = ev.calc(win, &[], &[], &cond).unwrap();
        let ids = yaku_ids(&res);
        assert!(ids.contains(&yaku::ID_PINFU));
        assert!(ids.contains(&yaku::ID_MENZEN_TSUMO));
        assert_eq!(res.fu, 20);
        assert_eq!(res.han, 2);
    }

    #[test]
    fn test_score_wind_triplets() {
        // Round wind east, seat wind south, both as triplets.
        let ev = eval("123m456p7s111z222z");
        let cond = Conditions {
            player_wind: Wind::South,
            round_wind: Wind::East,
            ..Conditions::default()
        };
        let win = crate::parser::parse_tile("7s").unwrap();
        let res = ev.calc(win, &[], &[], &cond).unwrap();
        let ids = yaku_ids(&res);
        assert!(ids.contains(&yaku::ID_BAKAZE));
        assert!(ids.contains(&yaku::ID_JIKAZE));
        assert_eq!(res.han, 2);
        // Two concealed honor triplets and a tanki wait on a closed ron.
        assert_eq!(res.fu, 50);
    }

    #[test]
    fn test_score_dragon_triplet_with_dora() {
        let ev = eval("123m456m22s567s(p5z)");
        let cond = Conditions {
            player_wind: Wind::South,
            ..Conditions::default()
        };
        // Indicator 1s makes 2s dora: the pair carries two.
        let dora_ind = crate::parser::parse_tile("1s").unwrap();
        let win = crate::parser::parse_tile("2s").unwrap();
        let res = ev.calc(win, &[dora_ind], &[], &cond).unwrap();
        let ids = yaku_ids(&res);
        assert!(ids.contains(&yaku::ID_HAKU));
        assert!(ids.contains(&yaku::ID_DORA));
        assert_eq!(res.han, 3);
        assert!(res.has_yaku);
    }

    #[test]
    fn test_score_yakuless_shape_pays_nothing() {
        // Open hand, no condition matches: winning shape but no win.
        let ev = eval("123m456m789p99s(123p)");
        let cond = Conditions {
            player_wind: Wind::South,
            ..Conditions::default()
        };
        let win = crate::parser::parse_tile("9s").unwrap();
        let res = ev.calc(win, &[], &[], &cond).unwrap();
        assert!(!res.has_yaku);
        assert_eq!(res.points.total, 0);
    }

    #[test]
    fn test_score_kokushi_yakuman() {
        let ev = eval("119m19p19s1234567z");
        let cond = Conditions {
            player_wind: Wind::South,
            ..Conditions::default()
        };
        let win = crate::parser::parse_tile("1m").unwrap();
        let res = ev.calc(win, &[], &[], &cond).unwrap();
        assert!(res.yakuman);
        assert!(yaku_ids(&res).contains(&yaku::ID_KOKUSHI));
        assert_eq!(res.points.pay_ron, 32000);
    }

    #[test]
    fn test_score_suuankou_on_self_draw() {
        let ev = eval("111m222m333p444s55z");
        let cond = Conditions {
            tsumo: true,
            player_wind: Wind::South,
            ..Conditions::default()
        };
        let win = crate::parser::parse_tile("5z").unwrap();
        let res = ev.calc(win, &[], &[], &cond).unwrap();
        assert!(res.yakuman);
        assert!(yaku_ids(&res).contains(&yaku::ID_SUUANKOU));
        assert_eq!(res.points.total, 32000);
    }

    #[test]
    fn test_score_tsuuiisou_pairs() {
        // Seven pairs of honors is all-honors, not plain chiitoitsu.
        let ev = eval("11223344556677z");
        let cond = Conditions {
            player_wind: Wind::South,
            ..Conditions::default()
        };
        let win = crate::parser::parse_tile("7z").unwrap();
        let res = ev.calc(win, &[], &[], &cond).unwrap();
        assert!(res.yakuman);
        assert!(yaku_ids(&res).contains(&yaku::ID_TSUUIISOU));
    }

    #[test]
    fn test_feed_types_serialize() {
        let meld = Meld::new(MeldType::Pon, vec![108, 109, 110], true);
        let json = serde_json::to_string(&meld).unwrap();
        let back: Meld = serde_json::from_str(&json).unwrap();
        assert_eq!(meld, back);

        let cond = Conditions {
            tsumo: true,
            round_wind: Wind::South,
            ..Conditions::default()
        };
        let json = serde_json::to_string(&cond).unwrap();
        let back: Conditions = serde_json::from_str(&json).unwrap();
        assert_eq!(cond, back);

        // Score results flow to the UI layer as JSON as well.
        let ev = eval("11223344556677m");
        let win = crate::parser::parse_tile("7m").unwrap();
        let res = ev
            .calc(win, &[], &[], &Conditions::default())
            .unwrap();
        assert!(serde_json::to_string(&res).is_ok());
    }
}
