mod handlers;
mod logger;
pub mod parse;

use clap::Parser;
pub use handlers::plot;
pub use parse::Cli;

use crate::core::error::AppError;

pub fn run() -> Result<(), AppError> {
    let cli = parse::Cli::parse();
    logger::init(cli.log_level())?;
    match cli.cmd {
        parse::Command::Csv(a) => handlers::csv(&a),
        parse::Command::Demo(a) => handlers::demo(&a),
        parse::Command::Examples => {
            handlers::examples();
            Ok(())
        }
    }
}
