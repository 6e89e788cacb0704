use proptest::prelude::*;
use savecheck::StatsComputer;

proptest! {
    #[test]
    fn volatile_line_text_never_affects_size(
        attrs in "[ -~]{0,120}",
        body in proptest::collection::vec("[a-zA-Z0-9 <>/=\"]{0,80}", 0..20)
    ) {
        // Two documents with identical bodies but arbitrary different
        // opening-tag attributes must fingerprint identically.
        let body_text = body.join("\n");
        let doc_a = format!("<jmeterTestPlan>\n{body_text}");
        let doc_b = format!("<jmeterTestPlan {attrs}\n{body_text}");
        let computer = StatsComputer::new();
        let a = computer.compute_text(&doc_a);
        let b = computer.compute_text(&doc_b);
        prop_assert_eq!(a.size, b.size);
        prop_assert_eq!(a.lines, b.lines);
    }

    #[test]
    fn lines_never_exceed_input_lines_and_size_counts_chars(
        body in proptest::collection::vec("[a-zA-Z0-9 ]{1,40}", 1..30)
    ) {
        let text = body.join("\n");
        let stats = StatsComputer::new().compute_text(&text);
        prop_assert_eq!(stats.lines as usize, body.len());
        let expected: usize = body.iter().map(|l| l.chars().count()).sum();
        prop_assert_eq!(stats.size as usize, expected);
    }

    #[test]
    fn computing_twice_is_identical(text in "\\PC{0,500}") {
        let computer = StatsComputer::new();
        prop_assert_eq!(computer.compute_text(&text), computer.compute_text(&text));
    }
}
