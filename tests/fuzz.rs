use varint_codecs::{Codec, DecodeError, Format, LeSqlite, LeSqlite2, Leb128, PrefixVarint, VarIntBuf};

#[test]
fn does_not_read_out_of_bounds() {
    // Top tier values ending exactly at the end of the buffer. A word-at-a-time load from B0 + 1
    // would run past the slice here.
    let decode_data = [250u8, 0xb2, 0x40, 0x08];
    assert_eq!(LeSqlite2::decode(&decode_data, 1), Ok(vec![540_850]));

    let decode_data = [249u8, 0xb9, 0x40];
    assert_eq!(LeSqlite::decode(&decode_data, 1), Ok(vec![16_569]));

    let decode_data = [0x02u8, 0x02];
    assert_eq!(PrefixVarint::decode(&decode_data, 1), Ok(vec![128]));
}

#[test]
fn returns_error_for_small_data() {
    for format in Format::ALL {
        let encoded = format.encode(&[u64::MAX]);
        assert_eq!(
            format.decode(&encoded[..1], 1),
            Err(DecodeError::TruncatedInput),
            "{}",
            format
        );
    }
}

#[test]
fn arbitrary_bytes_never_panic() {
    // Every leading byte followed by a short run of 0xff, decoded until the buffer runs dry.
    for format in Format::ALL {
        for tag in 0..=u8::MAX {
            for tail in 0..=9 {
                let mut data = vec![tag];
                data.extend(std::iter::repeat(0xff).take(tail));
                let mut out = [0u64; 4];
                let _ = format.decode_into(&data, &mut out);
            }
        }
    }
}

#[test]
fn iter_stops_after_error() {
    let data = [0x05u8, 0x80];
    let mut buf = &data[..];
    let values: Vec<_> = buf.iter_varint::<Leb128>().collect();
    assert_eq!(values, vec![Ok(5), Err(DecodeError::TruncatedInput)]);
    assert!(buf.is_empty());
}

#[test]
fn overlong_leb128_is_overflow() {
    let data = [0xffu8; 16];
    assert_eq!(Leb128::decode(&data, 1), Err(DecodeError::Overflow));
}
