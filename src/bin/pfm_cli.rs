use pfm::{
    cli::{run_cli_with, CliOptions},
    init,
};

const USAGE: &str = "usage: pfm_cli [--memory]";

fn main() {
    init();

    let mut options = CliOptions::default();
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--memory" => options.ephemeral = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return;
            }
            other => {
                eprintln!("Unknown argument `{other}`\n{USAGE}");
                std::process::exit(2);
            }
        }
    }

    if let Err(err) = run_cli_with(options) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
