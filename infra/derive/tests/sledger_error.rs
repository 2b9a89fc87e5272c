#[test]
fn sledger_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/pass.rs");
    t.pass("tests/ui/status_pass.rs");
    t.pass("tests/ui/slice_pass.rs");
}
