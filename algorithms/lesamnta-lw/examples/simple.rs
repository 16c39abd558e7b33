//! Lesamnta-LW Basic Example
//!
//! Minimal usage: `let hash = lesamnta_lw::hash(&data);`

#![allow(clippy::pedantic, clippy::nursery)]

fn main() {
    let data = b"Hello, World!";
    let hash = lesamnta_lw::hash(data);

    println!("Data: {:?}", String::from_utf8_lossy(data));
    println!("Hash: {}", hex::encode(hash));

    // Streaming, for data that arrives in pieces.
    let mut hasher = lesamnta_lw::Hasher::new();
    hasher.update(b"Hello, ");
    hasher.update(b"World!");
    assert_eq!(hasher.finalize(), hash);
}
