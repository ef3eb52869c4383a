//! # Pet Shop Entry Point
//!
//! ## Startup Sequence
//! 1. Load configuration (`PETSHOP_*` environment variables)
//! 2. Initialize tracing (logging)
//! 3. Build the store and load sample data
//! 4. Print the dashboard as JSON

fn main() {
    // The actual setup is in lib.rs for better testability
    if let Err(err) = petshop_lib::run() {
        eprintln!("petshop: {err}");
        std::process::exit(1);
    }
}
