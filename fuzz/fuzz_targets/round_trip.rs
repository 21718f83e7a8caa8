#![no_main]

use libfuzzer_sys::fuzz_target;
use varint_codecs::Format;

fuzz_target!(|data: &[u8]| {
    let values: Vec<u64> = data
        .chunks_exact(8)
        .map(|chunk| {
            let mut buf = [0; 8];
            buf.copy_from_slice(chunk);
            u64::from_le_bytes(buf)
        })
        .collect();

    for format in Format::ALL {
        let encoded = format.encode(&values);
        let expected: usize = values.iter().map(|v| format.encoded_len(*v)).sum();
        assert_eq!(encoded.len(), expected);
        assert_eq!(format.decode(&encoded, values.len()).unwrap(), values);
    }
});
