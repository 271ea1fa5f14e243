use pretty_assertions::assert_eq;

use measure::cli::{run_to, Commands};

fn test_run_command(command: Commands) -> String {
    let mut out = Vec::new();
    run_to(&command, &mut out).expect("command failed");
    String::from_utf8(out).expect("output is not utf-8")
}

#[test]
fn test_run_demo() {
    assert_eq!(
        test_run_command(Commands::Demo),
        "{3 4}\n12\n14\n{5}\n78.53981633974483\n31.41592653589793\n"
    );
}

#[test]
fn test_run_rect() {
    assert_eq!(
        test_run_command(Commands::Rect { width: 2.5, height: 2.0 }),
        "{2.5 2}\n5\n9\n"
    );
}

#[test]
fn test_run_circle() {
    let output = test_run_command(Commands::Circle { radius: 1.0 });
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines, vec!["{1}", "3.141592653589793", "6.283185307179586"]);
}

#[test]
fn test_run_invalid_writes_nothing() {
    let mut out = Vec::new();
    let err = run_to(&Commands::Circle { radius: 0.0 }, &mut out).unwrap_err();
    assert!(out.is_empty());
    assert_eq!(
        err.root_cause().to_string(),
        "radius must be positive, got 0"
    );
}

#[test]
fn test_run_out_of_range_rect() {
    let mut out = Vec::new();
    let err = run_to(&Commands::Rect { width: 1e200, height: 1e200 }, &mut out).unwrap_err();
    assert!(out.is_empty());
    assert!(err.root_cause().to_string().contains("outside the representable range"));

    assert!(run_to(&Commands::Rect { width: 1e-200, height: 1e-200 }, &mut out).is_err());
    assert!(out.is_empty());
}
