// crates/usecase/src/suite.rs
use savecheck_domain::{
    CaseReport, CaseStatus, CaseTables, LoadOnlyCase, RoundTripCase, StatsComputer, SuiteReport,
};
use savecheck_ports::{DocumentEngine, FixtureStore};
use savecheck_shared_kernel::Result;

use crate::consistency;
use crate::validator::RoundTripValidator;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Explicit run configuration; never read from ambient process state.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Persist mismatched serializer output as `<name>.out` next to the
    /// fixture. Off by default.
    pub dump_mismatches: bool,
}

/// Data-driven runner for the three check families. Each family runs all
/// of its cases and reports every failure; the aggregate verdict is an OR
/// over case outcomes.
pub struct RegressionSuite<'a, E: DocumentEngine> {
    engine: &'a E,
    store: &'a dyn FixtureStore,
    computer: StatsComputer,
    options: RunOptions,
}

impl<'a, E: DocumentEngine> RegressionSuite<'a, E> {
    pub fn new(engine: &'a E, store: &'a dyn FixtureStore, options: RunOptions) -> Self {
        Self::with_computer(engine, store, StatsComputer::new(), options)
    }

    /// Suite with a non-default volatile prefix.
    pub fn with_computer(
        engine: &'a E,
        store: &'a dyn FixtureStore,
        computer: StatsComputer,
        options: RunOptions,
    ) -> Self {
        Self {
            engine,
            store,
            computer,
            options,
        }
    }

    /// Round-trip every case, strict and lines-only alike, in table order.
    pub fn run_round_trip(&self, cases: &[RoundTripCase]) -> Result<SuiteReport> {
        let validator = RoundTripValidator::new(
            self.engine,
            self.store,
            self.computer.clone(),
            self.options.dump_mismatches,
        );

        #[cfg(feature = "parallel")]
        let reports: Result<Vec<CaseReport>> =
            cases.par_iter().map(|case| validator.validate(case)).collect();

        #[cfg(not(feature = "parallel"))]
        let reports: Result<Vec<CaseReport>> =
            cases.iter().map(|case| validator.validate(case)).collect();

        Ok(reports?.into_iter().collect())
    }

    /// Load every fixture that must merely parse. A load failure is
    /// recorded against its entry, naming the resolved path, and the
    /// remaining entries still run.
    pub fn run_load_only(&self, cases: &[LoadOnlyCase]) -> SuiteReport {
        cases
            .iter()
            .map(|case| {
                let path = self.store.resolve(&case.file_name);
                match self.engine.load_tree(&path) {
                    Ok(_tree) => CaseReport::passed(&case.file_name),
                    Err(err) => CaseReport::new(
                        &case.file_name,
                        CaseStatus::LoadFailed {
                            path: path.display().to_string(),
                            details: err.to_string(),
                        },
                    ),
                }
            })
            .collect()
    }

    /// Fixture-independent checks on version constants and the class
    /// registry. Skipped (empty report) when the manifest carries no
    /// version expectations.
    pub fn run_consistency(&self, tables: &CaseTables) -> SuiteReport {
        match &tables.versions {
            Some(expected) => consistency::run_checks(self.engine, expected),
            None => SuiteReport::new(),
        }
    }

    /// All three families, merged into one report in a fixed order:
    /// consistency, round-trip, load-only.
    pub fn run_all(&self, tables: &CaseTables) -> Result<SuiteReport> {
        let mut report = self.run_consistency(tables);
        report.merge(self.run_round_trip(&tables.round_trip)?);
        report.merge(self.run_load_only(&tables.load_only));
        Ok(report)
    }
}
