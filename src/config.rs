//! Discovery of installation, engine, and data folders.
//!
//! Environment variables take precedence over platform defaults:
//! `ENERGYKIT_INSTALL`, `ENERGYKIT_ENGINE`, `ENERGYKIT_DATA`,
//! `ENERGYKIT_SIMULATION`. Discovery only computes paths; nothing is
//! created on disk.

use std::env;
use std::path::{Path, PathBuf};

/// Resolved folder layout for the toolkit and its simulation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folders {
    /// Root installation folder.
    pub install_folder: PathBuf,
    /// Simulation engine executable, when one could be located.
    pub engine_path: Option<PathBuf>,
    /// Standards data folder (catalogs, schedules, constructions).
    pub data_folder: PathBuf,
    /// Default folder for writing simulation files.
    pub simulation_folder: PathBuf,
}

impl Folders {
    /// Discovers folders from the process environment.
    pub fn discover() -> Self {
        Self::discover_from(|name| env::var_os(name).map(PathBuf::from))
    }

    /// Discovery against an explicit variable lookup.
    ///
    /// The lookup receives `ENERGYKIT_*` variable names and returns the
    /// override path when set.
    pub fn discover_from<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<PathBuf>,
    {
        let install_folder =
            lookup("ENERGYKIT_INSTALL").unwrap_or_else(default_install_folder);

        let engine_path = lookup("ENERGYKIT_ENGINE")
            .or_else(|| locate_engine(&install_folder));

        let data_folder = lookup("ENERGYKIT_DATA")
            .unwrap_or_else(|| install_folder.join("standards"));

        let simulation_folder = lookup("ENERGYKIT_SIMULATION")
            .unwrap_or_else(|| home_folder().join("simulation"));

        Self {
            install_folder,
            engine_path,
            data_folder,
            simulation_folder,
        }
    }

    /// True when a simulation engine executable was located.
    pub fn engine_available(&self) -> bool {
        self.engine_path.is_some()
    }
}

fn default_install_folder() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("C:\\Program Files\\energykit")
    } else {
        home_folder().join(".local").join("share").join("energykit")
    }
}

fn home_folder() -> PathBuf {
    let var = if cfg!(windows) { "USERPROFILE" } else { "HOME" };
    env::var_os(var)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Looks for the engine executable under the installation folder.
fn locate_engine(install_folder: &Path) -> Option<PathBuf> {
    let name = if cfg!(windows) {
        "energyplus.exe"
    } else {
        "energyplus"
    };
    let candidate = install_folder.join("bin").join(name);
    if candidate.is_file() {
        Some(candidate)
    } else {
        None
    }
}
