//! Contextual fields example
//!
//! Demonstrates deriving child loggers that carry key/value fields on every
//! entry they emit, without touching the parent logger.
//!
//! Run with: cargo run --example contextual_fields

use structlog::prelude::*;

fn main() {
    println!("=== structlog - Contextual Fields Example ===\n");

    let logger = Logger::new(Sink::stdout());

    // A service-wide logger carrying deployment metadata
    let service = logger.with_fields(
        Fields::new()
            .with_field("service", "api-gateway")
            .with_field("version", "1.2.3"),
    );

    println!("1. Service-level fields on every line:");
    service.info("service starting");

    // Per-request derivation: the service logger is not modified
    println!("\n2. Per-request fields layered on top:");
    let request = service.with_field("req_id", "abc123");
    request.info("request accepted");
    request.warn("upstream responded slowly");

    println!("\n3. The parent logger stays clean:");
    service.info("still only service-level fields here");

    // Nested values are supported
    println!("\n4. Nested field values:");
    let tagged = service.with_field(
        "tags",
        FieldValue::Array(vec![FieldValue::from("beta"), FieldValue::from("canary")]),
    );
    tagged.info("nested array field");

    println!("\n=== Example completed successfully! ===");
}
