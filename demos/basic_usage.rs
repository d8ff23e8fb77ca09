//! Basic logger usage example
//!
//! Demonstrates leveled JSON logging to stdout and threshold filtering.
//!
//! Run with: cargo run --example basic_usage

use structlog::prelude::*;

fn main() {
    println!("=== structlog - Basic Usage Example ===\n");

    // Create a logger writing JSON lines to stdout
    let logger = Logger::new(Sink::stdout());

    // Log messages at different levels (threshold defaults to INFO)
    println!("1. Logging at different levels:");
    logger.debug("This debug message is hidden");
    logger.info("This is an info message");
    logger.warn("This is a warning message");
    logger.error("This is an error message");

    println!("\n2. Lowering the threshold to DEBUG:");
    logger.set_level(LogLevel::Debug);
    logger.debug("Debug messages are visible now");

    println!("\n3. Custom timestamp format:");
    logger.set_time_format("%Y-%m-%dT%H:%M:%S%z");
    logger.info("Timestamp now carries a timezone offset");

    println!("\n=== Example completed successfully! ===");
}
