//! Boundary Lifting Example
//!
//! Demonstrates the intended flow:
//! - Raw lookups return `Option`s (and `Option<Option<_>>` for nullable fields)
//! - Values are lifted into `Optional` once, at the boundary
//! - The rest of the pipeline composes with `bind`, `map2` and `combine`
//! - Unwrapping is an explicit choice, and `get` on an absent value emits a
//!   `tracing` debug event
//!
//! Run with: cargo run --example boundary_lifting --features tracing

use std::collections::HashMap;

use presence::ops::{bind, combine, get, map2, of_nullable, of_undefinable, of_val, with_default};
use presence::Optional;

struct Record {
    fields: HashMap<&'static str, Option<&'static str>>,
}

impl Record {
    fn field(&self, key: &str) -> Option<Option<&'static str>> {
        self.fields.get(key).copied()
    }
}

fn parse_port(raw: &str) -> Optional<u16> {
    Optional::from(raw.parse::<u16>().ok())
}

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let record = Record {
        fields: HashMap::from([
            ("host", Some("db.internal")),
            ("port", Some("5432")),
            ("user", Some("")),
            ("password", None),
        ]),
    };

    println!("=== Lifting ===");
    let host = of_undefinable(record.field("host"));
    let port = bind(parse_port, of_undefinable(record.field("port")));
    let user = of_val(of_undefinable(record.field("user")), true);
    let password = of_undefinable(record.field("password"));
    let timeout = of_nullable(record.field("timeout").flatten());

    println!("host:     {:?}", host);
    println!("port:     {:?}", port);
    println!("user:     {:?} (empty string treated as absent)", user);
    println!("password: {:?} (explicit null)", password);
    println!("timeout:  {:?} (missing key)", timeout);

    println!("\n=== Combining ===");
    let addr = map2(|h: &str, p: u16| format!("{}:{}", h, p), host, port);
    println!("address: {}", with_default("<none>".to_string(), addr.clone()));

    let credentials = combine([user, password]);
    println!("credentials complete: {}", credentials.is_some());

    println!("\n=== Explicit unwrap ===");
    match get(password) {
        Ok(p) => println!("password: {}", p),
        Err(e) => println!("password: {}", e),
    }
    println!("address (get): {:?}", get(addr));
}
