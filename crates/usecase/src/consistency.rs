// crates/usecase/src/consistency.rs
use savecheck_domain::{CaseReport, CaseStatus, SuiteReport, VersionExpectations};
use savecheck_ports::DocumentEngine;

/// Names of the four fixture-independent checks, in run order.
pub const PROPERTY_VERSION_CHECK: &str = "property-version";
pub const FINGERPRINT_CHECK: &str = "properties-fingerprint";
pub const VERSIONS_CHECK: &str = "versions-compatible";
pub const REGISTRY_CHECK: &str = "registry-classes";

/// Run the stateless consistency checks: the two expected version
/// constants, the engine's own compatibility predicate, and the
/// class-registry scan. Every check runs; nothing short-circuits.
pub fn run_checks<E: DocumentEngine>(
    engine: &E,
    expected: &VersionExpectations,
) -> SuiteReport {
    let mut report = SuiteReport::new();
    report.push(compare_constant(
        PROPERTY_VERSION_CHECK,
        "Property version",
        &expected.property_version,
        engine.property_version(),
    ));
    report.push(compare_constant(
        FINGERPRINT_CHECK,
        "Properties file fingerprint",
        &expected.file_fingerprint,
        engine.properties_fingerprint(),
    ));
    report.push(if engine.versions_consistent() {
        CaseReport::passed(VERSIONS_CHECK)
    } else {
        CaseReport::new(VERSIONS_CHECK, CaseStatus::VersionsIncompatible)
    });
    let unresolved = engine.unresolved_classes();
    report.push(if unresolved.is_empty() {
        CaseReport::passed(REGISTRY_CHECK)
    } else {
        CaseReport::new(
            REGISTRY_CHECK,
            CaseStatus::UnresolvedClasses {
                classes: unresolved,
            },
        )
    });
    report
}

fn compare_constant(name: &str, what: &str, expected: &str, actual: String) -> CaseReport {
    if expected == actual {
        CaseReport::passed(name)
    } else {
        CaseReport::new(
            name,
            CaseStatus::VersionMismatch {
                what: what.to_string(),
                expected: expected.to_string(),
                actual,
            },
        )
    }
}
