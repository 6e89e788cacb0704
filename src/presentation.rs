// src/presentation.rs
use savecheck_domain::SuiteReport;

/// Print every failing case's diagnostic, then a one-line verdict.
/// Diagnostics always precede the aggregate failure.
pub fn print_report(report: &SuiteReport) {
    for case in report.failures() {
        println!();
        println!("{case}");
    }
    println!();
    if report.is_failure() {
        println!(
            "{} of {} checks failed",
            report.failure_count(),
            report.cases.len()
        );
    } else {
        println!("All {} checks passed", report.cases.len());
    }
}
