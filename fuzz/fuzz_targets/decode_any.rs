#![no_main]

use libfuzzer_sys::fuzz_target;
use varint_codecs::{Codec, Format, LeSqlite, LeSqlite2, Leb128, PrefixVarint, VarIntBuf};

fn drain<C: Codec>(data: &[u8]) {
    // attempts to decode all the data, errors are ok, panics are not
    let mut src = data;
    while !src.is_empty() {
        if src.get_varint::<C>().is_err() {
            break;
        }
    }
}

fuzz_target!(|data: &[u8]| {
    drain::<Leb128>(data);
    drain::<PrefixVarint>(data);
    drain::<LeSqlite>(data);
    drain::<LeSqlite2>(data);

    for format in Format::ALL {
        let mut out = vec![0u64; data.len()];
        if let Ok(consumed) = format.decode_into(data, &mut out) {
            assert!(consumed <= data.len());
        }
    }
});
