use partflow::{Part, PartRange, System, Verdict};

const SAMPLE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/sample.txt");

fn sample() -> System {
    System::from_file(SAMPLE_PATH).unwrap()
}

#[test]
fn sample_total() {
    assert_eq!(sample().total_accepted().unwrap(), 19114);
}

#[test]
fn solve_returns_decimal_string() {
    assert_eq!(partflow::solve(SAMPLE_PATH).unwrap(), "19114");
}

#[test]
fn sample_loads_every_line() {
    let system = sample();
    assert_eq!(system.ruleset().workflow_names().len(), 11);
    assert_eq!(system.parts().len(), 5);
    assert_eq!(system.parts()[0], Part::new(787, 2655, 1222, 2876));
}

#[test]
fn sample_routes() {
    let system = sample();
    let expected: [(Verdict, &[&str]); 5] = [
        (Verdict::Accepted, &["in", "qqz", "qs", "lnx"]),
        (Verdict::Rejected, &["in", "px", "rfg", "gd"]),
        (Verdict::Accepted, &["in", "qqz", "hdj", "pv"]),
        (Verdict::Rejected, &["in", "px", "qkq", "crn"]),
        (Verdict::Accepted, &["in", "px", "rfg"]),
    ];

    for (part, (verdict, path)) in system.parts().iter().zip(expected) {
        let report = system.ruleset().evaluate_detailed(part).unwrap();
        assert_eq!(report.verdict(), verdict, "verdict for {part}");
        assert_eq!(report.path(), path, "path for {part}");
    }
}

#[test]
fn sample_accepted_combinations() {
    let system = sample();
    let count = system
        .ruleset()
        .count_accepted(PartRange::new(1, 4000))
        .unwrap();
    assert_eq!(count, 167_409_079_868_000);
}

#[test]
fn sample_has_no_static_cycle() {
    assert_eq!(sample().ruleset().find_cycle(), None);
}

#[test]
fn sample_from_text_matches_file() {
    let text = std::fs::read_to_string(SAMPLE_PATH).unwrap();
    let system = System::from_text(&text).unwrap();
    assert_eq!(system.parts(), sample().parts());
    assert_eq!(system.total_accepted().unwrap(), 19114);
}

#[test]
fn sample_with_crlf_line_endings() {
    let text = std::fs::read_to_string(SAMPLE_PATH)
        .unwrap()
        .replace('\n', "\r\n");
    let system = System::from_text(&text).unwrap();
    assert_eq!(system.total_accepted().unwrap(), 19114);
}
