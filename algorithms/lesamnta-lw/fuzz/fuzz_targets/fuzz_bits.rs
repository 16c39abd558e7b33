#![no_main]

use libfuzzer_sys::fuzz_target;
use lesamnta_lw::{hash_bits, Hasher};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte picks how many trailing bits to drop, the rest is the message.
    let drop = u64::from(data[0] % 8);
    let msg = &data[1..];
    let bit_len = (msg.len() as u64 * 8).saturating_sub(drop);

    let reference_hash = hash_bits(256, msg, bit_len).unwrap();

    // Feed the same bit string one bit at a time.
    let mut hasher = Hasher::new();
    for i in 0..bit_len {
        let byte = msg[(i / 8) as usize];
        hasher.update_bits(&[byte << (i % 8)], 1);
    }

    assert_eq!(
        reference_hash,
        hasher.finalize(),
        "Bitwise streaming and one-shot differ!"
    );
});
