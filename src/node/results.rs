//! Reading engine result files.

use std::path::Path;

use super::NodeError;
use crate::results::rdd::Rdd;
use crate::results::zsz::{ZoneLoadSeries, Zsz};

/// Per-zone design loads from a zone-sizing run.
#[derive(Debug, Clone)]
pub struct ZoneSizingLoads {
    pub cooling: Vec<ZoneLoadSeries>,
    pub heating: Vec<ZoneLoadSeries>,
    /// Peak cooling load in W per zone, aligned with `cooling`.
    pub peak_cooling: Vec<f64>,
    /// Peak heating load in W per zone, aligned with `heating`.
    pub peak_heating: Vec<f64>,
}

/// Reads the output names a simulation can report.
///
/// With keywords connected, the names are keyword-filtered (and therefore
/// sorted); without them, the full dictionary is returned in file order.
pub fn read_output_names(
    path: Option<&Path>,
    keywords: Option<&[String]>,
    split_words: Option<bool>,
) -> Result<Vec<String>, NodeError> {
    let path = path.ok_or(NodeError::MissingInput("rdd_path"))?;
    let rdd = Rdd::from_file(path).map_err(|e| NodeError::invalid("rdd_path", e))?;
    Ok(match keywords {
        Some(keywords) => {
            rdd.filter_outputs_by_keywords(keywords, split_words.unwrap_or(true))
        }
        None => rdd.output_names().to_vec(),
    })
}

/// Reads per-zone design heating and cooling loads.
pub fn read_zone_sizing(path: Option<&Path>) -> Result<ZoneSizingLoads, NodeError> {
    let path = path.ok_or(NodeError::MissingInput("zsz_path"))?;
    let zsz = Zsz::from_file(path).map_err(|e| NodeError::invalid("zsz_path", e))?;

    let cooling = zsz.cooling_load_data().to_vec();
    let heating = zsz.heating_load_data().to_vec();
    let peak_cooling = cooling.iter().map(ZoneLoadSeries::peak).collect();
    let peak_heating = heating.iter().map(ZoneLoadSeries::peak).collect();

    Ok(ZoneSizingLoads {
        cooling,
        heating,
        peak_cooling,
        peak_heating,
    })
}
