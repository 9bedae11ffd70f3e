//! Legacy binary entrypoint.
//!
//! The service itself lives in `src/bin/web_server.rs`; this binary is
//! intentionally kept minimal to avoid breaking `[[bin]]` wiring in
//! Cargo.toml.

fn main() {
    println!("doc-verify: the verification server lives in the web_server binary.");
    println!("Run:");
    println!("  cargo run --bin web_server");
}
