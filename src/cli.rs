use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "skillcheck", version, about = "Skill document validator")]
pub struct Cli {
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(help = "Skill directory containing SKILL.md")]
    pub skill_dir: String,
}
