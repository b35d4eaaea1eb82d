//! farmsheets main entrypoint.

use farmsheets::run;
use farmsheets::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
