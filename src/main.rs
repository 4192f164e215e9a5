//! `astro` - Astronomer CLI
//!
//! Manages home and project configuration and deployment user roles.

use astro_cli::run;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
