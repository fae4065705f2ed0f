mod cli;

use huisjacht::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
