//! End-to-end checks of the `--json` envelope and the rule-ordering and
//! boundary guarantees the command surface exposes.

mod common;
use common::{valid_skill, TestEnv};

#[test]
fn json_envelope_on_valid_skill() {
    let env = TestEnv::with_skill(&valid_skill());
    let v = env.run_json();
    assert_eq!(v["ok"], true);
    assert_eq!(v["data"]["valid"], true);
    assert_eq!(v["data"]["message"], "Skill is valid! (6 lines)");
}

#[test]
fn json_envelope_on_invalid_skill() {
    let env = TestEnv::with_skill("---\nname: my-skill\ndescription: ok\nextra: 1\n---\n");
    let v = env.run_json();
    assert_eq!(v["ok"], false);
    assert_eq!(v["data"]["valid"], false);
    assert_eq!(
        v["data"]["message"],
        "Unexpected key(s) in frontmatter: extra. \
         Allowed: allowed-tools, description, license, metadata, name"
    );
}

#[test]
fn unexpected_key_reported_before_missing_name() {
    // Both violations present; the key-set gate must win.
    let env = TestEnv::with_skill("---\nextra: 1\n---\n");
    let v = env.run_json();
    assert_eq!(v["ok"], false);
    let message = v["data"]["message"].as_str().expect("message string");
    assert!(message.starts_with("Unexpected key(s) in frontmatter: extra"));
}

#[test]
fn line_limit_enforced_end_to_end() {
    let over = format!(
        "---\nname: my-skill\ndescription: ok\n---\n{}",
        "body\n".repeat(497)
    );
    let env = TestEnv::with_skill(&over);
    env.cmd()
        .assert()
        .failure()
        .code(1)
        .stdout(predicates::str::contains(
            "SKILL.md too long (501 lines). Recommended max: 500",
        ));
}

#[test]
fn repeated_runs_are_bit_identical() {
    let env = TestEnv::with_skill(&valid_skill());
    let first = env.run_json();
    let second = env.run_json();
    assert_eq!(first, second);
}
