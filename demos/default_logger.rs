//! Default logger example
//!
//! Demonstrates the process-wide default instance and its forwarding free
//! functions. The default logger writes to stdout and lives for the whole
//! process.
//!
//! Run with: cargo run --example default_logger

use structlog::{Fields, LogLevel};

fn main() {
    println!("=== structlog - Default Logger Example ===\n");

    println!("1. Free functions forward to the default instance:");
    structlog::info("straight to stdout");
    structlog::warn("no logger value needed");

    println!("\n2. Configuring the default instance:");
    structlog::set_level(LogLevel::Debug);
    structlog::debug("visible after lowering the threshold");

    println!("\n3. Deriving from the default instance:");
    let request = structlog::with_field("req_id", "abc123");
    request.info("derived logger carries the field");
    structlog::info("the default instance itself is unchanged");

    let job = structlog::with_fields(
        Fields::new()
            .with_field("job", "cleanup")
            .with_field("attempt", 1),
    );
    job.info("merged field set");

    println!("\n=== Example completed successfully! ===");
}
