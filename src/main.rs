use std::process::ExitCode;

fn main() -> ExitCode {
    rustyll_optional_front_matter::cli::run()
}
