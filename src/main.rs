//! punch main entrypoint.

use punchclock::run;
use punchclock::ui::messages;

fn main() {
    if let Err(e) = run() {
        messages::error(&e);
        std::process::exit(-1);
    }
}
