//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `malkhana_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

fn main() {
    println!("malkhana_core version={}", malkhana_core::core_version());

    // Why: opening an in-memory store runs the whole migration chain, which
    // is the cheapest end-to-end probe of the persistence layer.
    match malkhana_core::db::open_db_in_memory() {
        Ok(_) => println!("malkhana_core schema=ok"),
        Err(err) => {
            eprintln!("malkhana_core schema=error {err}");
            std::process::exit(1);
        }
    }
}
