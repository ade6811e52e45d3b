//! shotlog main entrypoint.

use shotlog::run;
use shotlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
