//! Result data dictionary (RDD) parsing.
//!
//! An RDD file lists every output variable a simulation run can report.
//! Two flavors exist: the regular comma-separated form
//! (`Zone,Average,Zone Mean Air Temperature [C]`) and the IDF-object form
//! (`Output:Variable,*,Zone Mean Air Temperature,hourly;`). Both are
//! accepted; comment lines (leading `!`) are skipped.

use anyhow::{ensure, Context, Result};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::search::filter_identifiers;

/// A parsed result data dictionary.
#[derive(Debug, Clone)]
pub struct Rdd {
    file_path: Option<PathBuf>,
    output_names: Vec<String>,
}

impl Rdd {
    /// Reads and parses an RDD file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read RDD file: {}", path.display()))?;
        let mut rdd = Self::parse(&content)
            .with_context(|| format!("Failed to parse RDD file: {}", path.display()))?;
        rdd.file_path = Some(path.to_path_buf());
        Ok(rdd)
    }

    /// Parses RDD content.
    ///
    /// Output names keep file order and are de-duplicated. Units suffixes
    /// (`... [C]`) and reporting frequencies are stripped. Fails when no
    /// output variables are found.
    pub fn parse(content: &str) -> Result<Self> {
        let mut output_names = Vec::new();
        let mut seen = HashSet::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty()
                || line.starts_with('!')
                || line.starts_with("Program Version")
                || line.starts_with("Var Type")
            {
                continue;
            }

            let Some(name) = parse_output_name(line) else {
                continue;
            };
            if seen.insert(name.clone()) {
                output_names.push(name);
            }
        }

        ensure!(
            !output_names.is_empty(),
            "no output variables found in result data dictionary"
        );

        Ok(Self {
            file_path: None,
            output_names,
        })
    }

    /// Path of the source file, when parsed from one.
    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    /// All output variable names, in file order.
    pub fn output_names(&self) -> &[String] {
        &self.output_names
    }

    /// Keyword search over the output names.
    ///
    /// Same semantics as [`filter_identifiers`]: case-insensitive substring
    /// matching, sorted ascending result.
    pub fn filter_outputs_by_keywords(
        &self,
        keywords: &[String],
        split_words: bool,
    ) -> Vec<String> {
        filter_identifiers(&self.output_names, keywords, split_words)
    }
}

/// Extracts the variable name from a single data line, if it is one.
fn parse_output_name(line: &str) -> Option<String> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() < 3 {
        return None;
    }

    if fields[0].trim() == "Output:Variable" {
        // Output:Variable,*,Zone Mean Air Temperature,hourly; !- ...
        let name = fields[2].trim().trim_end_matches(';');
        return non_empty(name);
    }

    // Zone,Average,Zone Mean Air Temperature [C]
    let mut name = fields[2].trim();
    if let Some(idx) = name.rfind(" [") {
        if name.ends_with(']') {
            name = name[..idx].trim_end();
        }
    }
    non_empty(name)
}

fn non_empty(name: &str) -> Option<String> {
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}
