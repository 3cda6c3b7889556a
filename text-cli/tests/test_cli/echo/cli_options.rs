use crate::add_test;
use crate::common::Fixture;

// Test -E after -e turns escapes back off
add_test!(disable_escapes_wins_when_last, async {
    let mut fixture = Fixture::empty();

    let output = fixture.run_cargo("echo", &["-e", "-E", r"a\nb"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "a\\nb\n");
});

// Test combined short flags
add_test!(combined_flags, async {
    let mut fixture = Fixture::empty();

    let output = fixture.run_cargo("echo", &["-ne", r"x\ty"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "x\ty");
});

// Test `--` lets option-like strings through
add_test!(double_dash, async {
    let mut fixture = Fixture::empty();

    let output = fixture.run_cargo("echo", &["--", "-n", "-e"]).await;
    assert!(output.status.success());
    assert_eq!(output.stdout, "-n -e\n");
});

// Test help lists the escape sequences
add_test!(help_option, async {
    let mut fixture = Fixture::empty();

    let output = fixture.run_cargo("echo", &["--help"]).await;
    assert!(output.status.success());
    assert!(output.stdout.contains("Echo the STRING(s)"));
    assert!(output.stdout.contains("produce no further output"));
});

// Test an unknown option fails with status 1
add_test!(invalid_option, async {
    let mut fixture = Fixture::empty();

    let output = fixture.run_cargo("echo", &["-z", "text"]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(!output.stderr.is_empty());
});
