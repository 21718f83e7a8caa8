#![no_main]

use std::io::BufReader;

use libfuzzer_sys::fuzz_target;
use varint_codecs::{read_varint, read_varint_buf, LeSqlite2, Leb128, PrefixVarint};

fuzz_target!(|data: &[u8]| {
    let mut reader = data;
    while read_varint::<Leb128>(&mut reader).is_ok() {}

    let mut reader = BufReader::with_capacity(8, data);
    while read_varint_buf::<PrefixVarint>(&mut reader).is_ok() {}

    let mut reader = BufReader::new(data);
    while read_varint_buf::<LeSqlite2>(&mut reader).is_ok() {}
});
