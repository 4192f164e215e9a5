mod common;
use common::cli::{AstroWorkspace, run_astro};

#[test]
fn test_transport_failure_is_reported() {
    let workspace = AstroWorkspace::new();
    for (key, value) in [
        ("cloud.api.protocol", "http"),
        ("cloud.domain", "invalid"),
        ("cloud.api.port", "1"),
    ] {
        let set = run_astro(&workspace, ["config", "set", key, value, "-g"], "set");
        assert!(set.status.success(), "set {key} failed: {}", set.stderr);
    }

    let output = run_astro(
        &workspace,
        [
            "deployment",
            "user",
            "add",
            "somebody@astronomer.com",
            "--deployment-id",
            "ckggzqj5f4157qtc9lescmehm",
        ],
        "add",
    );
    assert!(!output.status.success());
    assert!(output.stderr.contains("Error:"), "stderr: {}", output.stderr);
    assert!(!output.stdout.contains("Successfully"));
}

#[test]
fn test_update_requires_role() {
    let workspace = AstroWorkspace::new();
    let output = run_astro(
        &workspace,
        [
            "deployment",
            "user",
            "update",
            "somebody@astronomer.com",
            "--deployment-id",
            "ckggzqj5f4157qtc9lescmehm",
        ],
        "update",
    );
    assert!(!output.status.success());
    assert!(output.stderr.contains("--role"));
}
