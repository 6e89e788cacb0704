// crates/usecase/src/validator.rs
use savecheck_domain::{CaseReport, CaseStatus, FileStats, RoundTripCase, StatsComputer};
use savecheck_ports::{DocumentEngine, FixtureStore};
use savecheck_shared_kernel::Result;

/// Validates a single round-trip case: load the fixture, serialize the
/// tree back into memory, and compare the output stats against the most
/// authoritative available baseline (reference file if present, else the
/// original fixture).
pub struct RoundTripValidator<'a, E: DocumentEngine> {
    engine: &'a E,
    store: &'a dyn FixtureStore,
    computer: StatsComputer,
    dump_mismatches: bool,
}

impl<'a, E: DocumentEngine> RoundTripValidator<'a, E> {
    pub fn new(
        engine: &'a E,
        store: &'a dyn FixtureStore,
        computer: StatsComputer,
        dump_mismatches: bool,
    ) -> Self {
        Self {
            engine,
            store,
            computer,
            dump_mismatches,
        }
    }

    /// Run one case. A content mismatch is recorded in the returned
    /// report; engine errors (malformed fixture) and environment errors
    /// (unreadable fixture, failed dump write) propagate.
    pub fn validate(&self, case: &RoundTripCase) -> Result<CaseReport> {
        let original = self.stats_of(&case.file_name)?;
        let reference = self.stats_of(&case.reference_name())?;
        let baseline = if reference.is_absent() {
            original
        } else {
            reference
        };

        let tree = self.engine.load_tree(&self.store.resolve(&case.file_name))?;
        let mut out: Vec<u8> = Vec::with_capacity(1 << 16);
        self.engine.save_tree(&tree, &mut out)?;

        let output = self.computer.compute_text(&String::from_utf8_lossy(&out));

        let mismatch = (case.strictness.requires_size_match()
            && !baseline.same_size(Some(&output)))
            || !baseline.same_line_count(Some(&output));

        if !mismatch {
            return Ok(CaseReport::passed(&case.file_name));
        }

        if self.dump_mismatches {
            self.store.write_dump(&case.file_name, &out)?;
        }
        Ok(CaseReport::new(
            &case.file_name,
            CaseStatus::RoundTripMismatch { baseline, output },
        ))
    }

    fn stats_of(&self, name: &str) -> Result<FileStats> {
        Ok(match self.store.read_text(name)? {
            Some(text) => self.computer.compute_text(&text),
            None => FileStats::NO_STATS,
        })
    }
}
