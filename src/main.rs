use std::process::ExitCode;

fn main() -> ExitCode {
    match flagged_histogram::cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
