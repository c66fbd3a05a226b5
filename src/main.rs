//! weightgoal main entrypoint.

use weightgoal::run;
use weightgoal::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
