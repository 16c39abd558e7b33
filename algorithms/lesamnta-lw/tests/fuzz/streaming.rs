use bolero::check;
use lesamnta_lw::{hash, Hasher};

#[test]
fn fuzz_streaming_consistency() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =============================================================================
        // BASELINE (ONE-SHOT)
        // =============================================================================
        let expected = hash(data);

        // =============================================================================
        // STREAMING VARIATIONS
        // =============================================================================

        // 1. Single Update
        let mut hasher = Hasher::new();
        hasher.update(data);
        assert_eq!(hasher.finalize(), expected, "Streaming single update mismatch");

        // 2. Byte-by-Byte (Small Inputs Only)
        if data.len() < 256 {
            let mut hasher = Hasher::new();
            for b in data {
                hasher.update(&[*b]);
            }
            assert_eq!(hasher.finalize(), expected, "Byte-by-byte streaming mismatch");
        }

        // 3. Arbitrary Split Points
        if data.len() > 1 {
            for split_idx in [1, data.len() / 2, data.len() - 1] {
                let mut hasher = Hasher::new();
                let (first, second) = data.split_at(split_idx);
                hasher.update(first);
                hasher.update(second);
                assert_eq!(hasher.finalize(), expected, "Split at {split_idx} mismatch");
            }
        }

        // 4. Chunk size chosen by the input itself
        if let Some(&first) = data.first() {
            let chunk_size = usize::from(first % 40) + 1;
            let mut hasher = Hasher::new();
            for chunk in data.chunks(chunk_size) {
                hasher.update(chunk);
            }
            assert_eq!(hasher.finalize(), expected, "Chunked ({chunk_size}) mismatch");
        }
    });
}
