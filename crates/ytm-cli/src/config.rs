//! Solver settings loaded from a TOML file.

use std::path::Path;

use serde::{Deserialize, Serialize};
use ytm_bonds::pricing::{YieldSolver, DEFAULT_INITIAL_GUESS};
use ytm_core::daycounts::DayCountConvention;

use crate::error::{CliError, CliResult};

/// Solver settings.
///
/// Every field is optional in the file; missing keys take the library
/// defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolverSettings {
    /// Absolute residual tolerance, in currency units
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,

    /// Maximum Newton steps
    #[serde(default = "default_max_iterations")]
    pub max_iterations: u32,

    /// Starting yield (decimal, 0.04 = 4%)
    #[serde(default = "default_initial_guess")]
    pub initial_guess: f64,

    /// Truncate year fractions to whole years
    #[serde(default)]
    pub whole_years: bool,
}

fn default_tolerance() -> f64 {
    YieldSolver::new().config().tolerance
}

fn default_max_iterations() -> u32 {
    YieldSolver::new().config().max_iterations
}

fn default_initial_guess() -> f64 {
    DEFAULT_INITIAL_GUESS
}

impl Default for SolverSettings {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            initial_guess: default_initial_guess(),
            whole_years: false,
        }
    }
}

impl SolverSettings {
    /// Loads settings from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses settings from TOML text.
    pub fn from_toml(content: &str) -> CliResult<Self> {
        let settings: Self =
            toml::from_str(content).map_err(|e| CliError::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Forces whole-year truncation on.
    #[must_use]
    pub fn with_whole_years(mut self) -> Self {
        self.whole_years = true;
        self
    }

    /// The day count convention these settings select.
    pub fn day_count(&self) -> DayCountConvention {
        if self.whole_years {
            DayCountConvention::Act365WholeYears
        } else {
            DayCountConvention::Act365Fixed
        }
    }

    /// Builds a yield solver from these settings.
    pub fn to_solver(&self) -> YieldSolver {
        YieldSolver::new()
            .with_tolerance(self.tolerance)
            .with_max_iterations(self.max_iterations)
            .with_initial_guess(self.initial_guess)
            .with_day_count(self.day_count())
    }

    fn validate(&self) -> CliResult<()> {
        if !(self.tolerance.is_finite() && self.tolerance > 0.0) {
            return Err(CliError::Config(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }
        if !self.initial_guess.is_finite() || self.initial_guess <= -1.0 {
            return Err(CliError::Config(format!(
                "initial_guess must be above -1, got {}",
                self.initial_guess
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_uses_defaults() {
        let settings = SolverSettings::from_toml("").unwrap();
        assert_eq!(settings, SolverSettings::default());
        assert_eq!(settings.tolerance, 0.001);
        assert_eq!(settings.max_iterations, 100);
        assert_eq!(settings.initial_guess, 0.04);
        assert!(!settings.whole_years);
    }

    #[test]
    fn test_partial_file() {
        let settings = SolverSettings::from_toml("max_iterations = 5\nwhole_years = true").unwrap();
        assert_eq!(settings.max_iterations, 5);
        assert_eq!(settings.tolerance, 0.001);
        assert_eq!(settings.day_count(), DayCountConvention::Act365WholeYears);
    }

    #[test]
    fn test_to_solver() {
        let solver = SolverSettings::from_toml("tolerance = 1e-6\ninitial_guess = 0.02")
            .unwrap()
            .to_solver();
        assert_eq!(solver.config().tolerance, 1e-6);
        assert_eq!(solver.initial_guess(), 0.02);
        assert_eq!(solver.day_count(), DayCountConvention::Act365Fixed);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            SolverSettings::from_toml("tolerance = 0.0"),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            SolverSettings::from_toml("initial_guess = -1.0"),
            Err(CliError::Config(_))
        ));
        assert!(matches!(
            SolverSettings::from_toml("max_iterations = \"ten\""),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "max_iterations = 12").unwrap();
        let settings = SolverSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.max_iterations, 12);
    }

    #[test]
    fn test_missing_file() {
        let result = SolverSettings::from_file(Path::new("/nonexistent/ytm.toml"));
        assert!(matches!(result, Err(CliError::Io(_))));
    }
}
