use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub skill_dir: PathBuf,
}

impl TestEnv {
    /// Builds an isolated skill directory holding `content` as SKILL.md.
    pub fn with_skill(content: &str) -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let skill_dir = tmp.path().join("my-skill");
        fs::create_dir_all(&skill_dir).expect("create skill dir");
        fs::write(skill_dir.join("SKILL.md"), content).expect("write SKILL.md");
        Self {
            _tmp: tmp,
            skill_dir,
        }
    }

    /// An empty directory with no SKILL.md at all.
    pub fn empty() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let skill_dir = tmp.path().join("my-skill");
        fs::create_dir_all(&skill_dir).expect("create skill dir");
        Self {
            _tmp: tmp,
            skill_dir,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("skillcheck").expect("binary built");
        cmd.arg(self.skill_dir.to_str().expect("skill dir utf8"));
        cmd
    }

    pub fn run_json(&self) -> serde_json::Value {
        let mut cmd = Command::cargo_bin("skillcheck").expect("binary built");
        let out = cmd
            .arg("--json")
            .arg(self.skill_dir.to_str().expect("skill dir utf8"))
            .assert()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }
}

pub fn valid_skill() -> String {
    "---\nname: my-skill\ndescription: Conventional commit helpers\n---\n\n# My Skill\n"
        .to_string()
}
