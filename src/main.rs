// This binary crate is intentionally minimal.
// All neural network logic lives in the library (src/lib.rs and its modules).
// Run examples with:
//   cargo run --example xor
fn main() {
    println!("axon-nn: a from-scratch feed-forward neural network in Rust.");
    println!("Run `cargo run --example xor` to see the XOR demo.");
}
