use clap::error::ErrorKind;
use clap::Parser;
use skillcheck::cli::Cli;
use skillcheck::commands::handle_validate;

fn main() {
    // Wrong argument count is a usage error and must exit 1, not clap's
    // default 2. Help/version requests still exit 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            std::process::exit(code);
        }
    };

    let valid = match handle_validate(&cli) {
        Ok(valid) => valid,
        Err(e) => {
            eprintln!("error: {e}");
            false
        }
    };
    std::process::exit(if valid { 0 } else { 1 });
}
