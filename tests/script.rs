use saluta::script::{self, GREETED_NAME};
use saluta::{add, greet, DEFAULT_NAME};

#[test]
fn greeting_wraps_any_name() {
    for name in ["Claude", "", "Mondo", "🦀"] {
        assert_eq!(greet(Some(name)), format!("Ciao, {name}! 👋"));
    }
    assert_eq!(greet(None), format!("Ciao, {DEFAULT_NAME}! 👋"));
}

#[test]
fn add_matches_builtin_addition() {
    for (a, b) in [(0, 0), (-3, 3), (17, -42), (1_000, 24)] {
        assert_eq!(add(a, b), a + b);
        assert_eq!(add(a, b), add(b, a));
    }
    assert_eq!(add(2.5_f64, -0.5_f64), 2.0);
}

#[test]
fn run_output_matches_lines() {
    let mut out = Vec::new();
    script::run(&mut out, GREETED_NAME).expect("write to vec");
    let text = String::from_utf8(out).expect("utf8 output");
    let expected: String = script::lines(GREETED_NAME)
        .into_iter()
        .map(|line| line + "\n")
        .collect();
    assert_eq!(text, expected);
}
