//! Zone-sizing (ZSZ) CSV parsing.
//!
//! The ZSZ file reports design-day heating and cooling loads per zone at a
//! sub-hourly timestep. The header names columns as
//! `<ZONE>:Des Heat Load [W]` / `<ZONE>:Des Sens Cool Load [W]` (mass-flow
//! columns are present but not exposed here); data rows carry a clock time
//! followed by one value per column, and `Peak` / `Peak Vol Flow` trailer
//! rows terminate the series.

use anyhow::{bail, ensure, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::name::HasName;

/// A design-day load time series for one zone.
#[derive(Debug, Clone)]
pub struct ZoneLoadSeries {
    zone_name: String,
    /// Number of values per hour of the design day.
    timesteps_per_hour: usize,
    /// Loads in W, evenly spaced over the design day.
    values: Vec<f64>,
}

impl ZoneLoadSeries {
    pub fn zone_name(&self) -> &str {
        &self.zone_name
    }

    pub fn timesteps_per_hour(&self) -> usize {
        self.timesteps_per_hour
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Peak load in W over the design day.
    pub fn peak(&self) -> f64 {
        self.values.iter().copied().fold(0.0, f64::max)
    }
}

impl HasName for ZoneLoadSeries {
    fn name(&self) -> &str {
        &self.zone_name
    }
}

/// A parsed zone-sizing result file.
#[derive(Debug, Clone)]
pub struct Zsz {
    file_path: Option<PathBuf>,
    zone_names: Vec<String>,
    heating: Vec<ZoneLoadSeries>,
    cooling: Vec<ZoneLoadSeries>,
}

impl Zsz {
    /// Reads and parses a ZSZ file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read ZSZ file: {}", path.display()))?;
        let mut zsz = Self::parse(&content)
            .with_context(|| format!("Failed to parse ZSZ file: {}", path.display()))?;
        zsz.file_path = Some(path.to_path_buf());
        Ok(zsz)
    }

    /// Parses ZSZ CSV content.
    pub fn parse(content: &str) -> Result<Self> {
        let mut lines = content.lines();
        let header = lines.next().context("ZSZ file is empty")?;
        let columns = parse_header(header)?;

        let zone_names: Vec<String> = {
            // First-appearance order of zones in the header.
            let mut names = Vec::new();
            for column in &columns {
                if let ColumnKind::Heating(zone) | ColumnKind::Cooling(zone) = column {
                    if !names.contains(zone) {
                        names.push(zone.clone());
                    }
                }
            }
            names
        };
        ensure!(!zone_names.is_empty(), "no zone load columns in ZSZ header");

        let mut heating_values: HashMap<&str, Vec<f64>> = HashMap::new();
        let mut cooling_values: HashMap<&str, Vec<f64>> = HashMap::new();
        let mut rows = 0usize;

        for (line_no, line) in lines.enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let cells: Vec<&str> = line.split(',').collect();
            let label = cells[0].trim();
            if label == "Peak" || label == "Peak Vol Flow" {
                // Trailer rows; per-timestep data ends here.
                break;
            }

            ensure!(
                cells.len() == columns.len() + 1,
                "ragged ZSZ row at line {}: expected {} cells, got {}",
                line_no + 2,
                columns.len() + 1,
                cells.len()
            );

            for (cell, column) in cells[1..].iter().zip(&columns) {
                let target = match column {
                    ColumnKind::Heating(zone) => heating_values.entry(zone).or_default(),
                    ColumnKind::Cooling(zone) => cooling_values.entry(zone).or_default(),
                    ColumnKind::Ignored => continue,
                };
                let value: f64 = cell.trim().parse().with_context(|| {
                    format!("invalid load value '{}' at line {}", cell.trim(), line_no + 2)
                })?;
                target.push(value);
            }
            rows += 1;
        }

        ensure!(rows > 0, "ZSZ file has no data rows");
        ensure!(
            rows % 24 == 0,
            "ZSZ rows do not span a full design day: {rows} rows"
        );
        let timesteps_per_hour = rows / 24;

        Ok(Self {
            file_path: None,
            heating: take_series(&zone_names, timesteps_per_hour, &mut heating_values),
            cooling: take_series(&zone_names, timesteps_per_hour, &mut cooling_values),
            zone_names,
        })
    }

    /// Path of the source file, when parsed from one.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// Zone names in header order.
    pub fn zone_names(&self) -> &[String] {
        &self.zone_names
    }

    /// Design heating load series, one per zone.
    pub fn heating_load_data(&self) -> &[ZoneLoadSeries] {
        &self.heating
    }

    /// Design sensible cooling load series, one per zone.
    pub fn cooling_load_data(&self) -> &[ZoneLoadSeries] {
        &self.cooling
    }
}

/// Drains parsed per-zone values into series, in zone order.
fn take_series(
    zone_names: &[String],
    timesteps_per_hour: usize,
    values: &mut HashMap<&str, Vec<f64>>,
) -> Vec<ZoneLoadSeries> {
    zone_names
        .iter()
        .map(|zone| ZoneLoadSeries {
            zone_name: zone.clone(),
            timesteps_per_hour,
            values: values.remove(zone.as_str()).unwrap_or_default(),
        })
        .collect()
}

enum ColumnKind {
    Heating(String),
    Cooling(String),
    Ignored,
}

/// Classifies every non-time header column.
fn parse_header(header: &str) -> Result<Vec<ColumnKind>> {
    let cells: Vec<&str> = header.split(',').collect();
    ensure!(
        cells.first().map(|c| c.trim()) == Some("Time"),
        "ZSZ header must start with a Time column"
    );

    let mut columns = Vec::with_capacity(cells.len() - 1);
    for cell in &cells[1..] {
        let cell = cell.trim();
        let Some((zone, descriptor)) = cell.split_once(':') else {
            bail!("ZSZ column '{cell}' is not '<zone>:<descriptor>'");
        };
        let descriptor = descriptor.to_uppercase();
        if descriptor.starts_with("DES HEAT LOAD") {
            columns.push(ColumnKind::Heating(zone.trim().to_string()));
        } else if descriptor.starts_with("DES SENS COOL LOAD") {
            columns.push(ColumnKind::Cooling(zone.trim().to_string()));
        } else {
            columns.push(ColumnKind::Ignored);
        }
    }
    Ok(columns)
}
