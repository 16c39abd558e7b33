use bolero::check;
use lesamnta_lw::{hash_bits, Hasher};

#[test]
fn fuzz_bit_split_consistency() {
    check!()
        .with_type::<(Vec<u8>, u8, u16)>()
        .for_each(|(data, drop_bits, split)| {
            if data.is_empty() {
                return;
            }

            // Message of 8*len - (0..=7) bits, split at an arbitrary bit.
            let bit_len = (data.len() as u64 * 8).saturating_sub(u64::from(drop_bits % 8));
            let expected = hash_bits(256, data, bit_len).unwrap();

            let split = u64::from(*split) % (bit_len + 1);
            let head_bytes = split.div_ceil(8) as usize;

            // Tail: re-align the remaining bits to start at bit 0.
            let shift = (split % 8) as u32;
            let start = (split / 8) as usize;
            let tail: Vec<u8> = (start..data.len())
                .map(|i| {
                    let hi = data[i] << shift;
                    let lo = if shift == 0 {
                        0
                    } else {
                        data.get(i + 1).map_or(0, |b| b >> (8 - shift))
                    };
                    hi | lo
                })
                .collect();

            let mut hasher = Hasher::new();
            hasher.update_bits(&data[..head_bytes], split);
            hasher.update_bits(&tail, bit_len - split);
            assert_eq!(hasher.finalize(), expected, "bit split at {split} of {bit_len}");
        });
}
