//! kmlog main entrypoint.

use kmlog::run;
use kmlog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
