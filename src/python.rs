//! Python bindings, compiled only with the `python` feature. The
//! recognizer and UI layers of the assistant are Python; this module
//! exposes the evaluator surface to them one-to-one.

use pyo3::prelude::*;

use crate::errors::HandResult;
use crate::evaluator::HandEvaluator;
use crate::parser;
use crate::score::{self, Score, ScoreResult};
use crate::types::{Conditions, Meld, MeldType, Wind};
use crate::yaku::YakuValue;

#[pymethods]
impl Meld {
    #[new]
    #[pyo3(signature = (meld_type, tiles, opened=true))]
    fn py_new(meld_type: MeldType, tiles: Vec<u8>, opened: bool) -> Self {
        Meld::new(meld_type, tiles, opened)
    }
}

#[pymethods]
impl Conditions {
    #[allow(clippy::too_many_arguments)]
    #[new]
    #[pyo3(signature = (tsumo=false, riichi=false, double_riichi=false, ippatsu=false, haitei=false, houtei=false, rinshan=false, chankan=false, tsumo_first_turn=false, player_wind=Wind::East, round_wind=Wind::East, honba=0))]
    fn py_new(
        tsumo: bool,
        riichi: bool,
        double_riichi: bool,
        ippatsu: bool,
        haitei: bool,
        houtei: bool,
        rinshan: bool,
        chankan: bool,
        tsumo_first_turn: bool,
        player_wind: Wind,
        round_wind: Wind,
        honba: u32,
    ) -> Self {
        Self {
            tsumo,
            riichi,
            double_riichi,
            ippatsu,
            haitei,
            houtei,
            rinshan,
            chankan,
            tsumo_first_turn,
            player_wind,
            round_wind,
            honba,
        }
    }
}

#[pymethods]
impl HandEvaluator {
    #[new]
    #[pyo3(signature = (tiles_136, melds=vec![]))]
    fn py_new(tiles_136: Vec<u8>, melds: Vec<Meld>) -> HandResult<Self> {
        Self::new(tiles_136, melds)
    }

    #[staticmethod]
    #[pyo3(name = "from_text")]
    fn py_from_text(text: &str) -> HandResult<Self> {
        Self::from_text(text)
    }

    #[pyo3(name = "shanten")]
    fn py_shanten(&self) -> i8 {
        self.shanten()
    }

    #[pyo3(name = "effective_tiles")]
    fn py_effective_tiles(&self) -> Vec<u8> {
        self.effective_tiles()
    }

    #[pyo3(name = "is_complete")]
    fn py_is_complete(&self) -> bool {
        self.is_complete()
    }

    #[pyo3(name = "is_tenpai")]
    fn py_is_tenpai(&self) -> bool {
        self.is_tenpai()
    }

    #[pyo3(name = "waits")]
    fn py_waits(&self) -> Vec<u8> {
        self.waits()
    }

    #[pyo3(name = "calc", signature = (win_tile, dora_indicators=vec![], ura_indicators=vec![], conditions=None))]
    fn py_calc(
        &self,
        win_tile: u8,
        dora_indicators: Vec<u8>,
        ura_indicators: Vec<u8>,
        conditions: Option<Conditions>,
    ) -> HandResult<ScoreResult> {
        let conditions = conditions.unwrap_or_default();
        self.calc(win_tile, &dora_indicators, &ura_indicators, &conditions)
    }
}

#[pyfunction]
#[pyo3(name = "parse_hand")]
fn py_parse_hand(text: &str) -> HandResult<(Vec<u8>, Vec<Meld>)> {
    parser::parse_hand(text)
}

#[pyfunction]
#[pyo3(name = "parse_tile")]
fn py_parse_tile(text: &str) -> HandResult<u8> {
    parser::parse_tile(text)
}

#[pyfunction]
#[pyo3(name = "calculate_score")]
#[pyo3(signature = (han, fu, is_dealer, is_tsumo, honba=0))]
fn py_calculate_score(han: u8, fu: u8, is_dealer: bool, is_tsumo: bool, honba: u32) -> Score {
    score::calculate_score(han, fu, is_dealer, is_tsumo, honba)
}

#[pymodule]
fn _riichi_hand(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Meld>()?;
    m.add_class::<MeldType>()?;
    m.add_class::<Wind>()?;
    m.add_class::<Conditions>()?;
    m.add_class::<HandEvaluator>()?;
    m.add_class::<Score>()?;
    m.add_class::<ScoreResult>()?;
    m.add_class::<YakuValue>()?;
    m.add_function(wrap_pyfunction!(py_parse_hand, m)?)?;
    m.add_function(wrap_pyfunction!(py_parse_tile, m)?)?;
    m.add_function(wrap_pyfunction!(py_calculate_score, m)?)?;
    Ok(())
}
