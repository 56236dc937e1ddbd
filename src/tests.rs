use crate::{
    ALPHABET_94, Alphabet, AlphabetError, AlphabetRegistry, Decoder, Encoder, Error, PlaceValues,
    decode, decode_text, decode_text_with, decode_with, encode, encode_text, encode_text_with,
    encode_with,
};

fn get_alphabet(name: &str) -> Alphabet {
    let config = AlphabetRegistry::load_default().unwrap();
    config.build_alphabet(name).unwrap()
}

/// Deterministic xorshift bytes, enough for coverage without a dev-dependency.
fn pseudo_random(len: usize, seed: u64) -> Vec<u8> {
    let mut state = seed | 1;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 32) as u8
        })
        .collect()
}

fn round_trip(data: &[u8], alphabet: &Alphabet) {
    let encoded = encode(data, alphabet);
    assert!(
        encoded.chars().all(|c| alphabet.decode_char(c).is_some()),
        "foreign symbol in {:?}",
        encoded
    );
    let decoded = decode(&encoded, alphabet).unwrap();
    assert_eq!(decoded, data, "base {} len {}", alphabet.base(), data.len());
}

/// Feeds bytes that keep the interval pinned against a leading-digit boundary,
/// which is the case that exercises folding and deferred digits.
fn boundary_hugging(alphabet: &Alphabet, len: usize) -> Vec<u8> {
    use crate::encoders::algorithms::interval::Interval;

    let pv = PlaceValues::for_base(alphabet.base());
    let p1 = pv.get(1);
    let mut interval = Interval::full(pv);
    let mut data = Vec::with_capacity(len);
    for i in 0..len {
        let lead_lo = interval.lo / p1;
        let lead_hi = interval.hi / p1;
        let target = if lead_hi > lead_lo {
            lead_hi * p1
        } else {
            interval.lo + interval.width() / 2
        };
        let slice = interval.slice_of(target).saturating_sub((i % 3 == 2) as u64);
        let byte = slice.min(255) as u8;
        data.push(byte);
        interval.narrow(byte);
        while interval.step(pv) != crate::encoders::algorithms::interval::Step::Settled {}
    }
    data
}

#[test]
fn test_encode_decode_empty() {
    let alphabet = get_alphabet("base85");
    let encoded = encode(b"", &alphabet);
    assert_eq!(encoded, "0");
    assert!(decode(&encoded, &alphabet).unwrap().is_empty());
}

#[test]
fn test_encode_decode_zero() {
    let alphabet = get_alphabet("base10");
    round_trip(&[0], &alphabet);
    round_trip(&[0, 0, 0, 0], &alphabet);
}

#[test]
fn test_encode_decode_hello_world() {
    let alphabet = get_alphabet("base58");
    round_trip(b"Hello, World!", &alphabet);
}

#[test]
fn test_encode_decode_all_bytes() {
    let data: Vec<u8> = (0..=255).collect();
    for name in ["base2", "base16", "base32", "base64", "base94"] {
        round_trip(&data, &get_alphabet(name));
    }
}

#[test]
fn test_round_trip_every_base() {
    for base in 2..=94 {
        let alphabet = Alphabet::from_prefix(base).unwrap();
        for len in [0, 1, 2, 3, 5, 8, 13, 64, 257] {
            round_trip(&pseudo_random(len, (base * 1000 + len) as u64), &alphabet);
        }
    }
}

#[test]
fn test_round_trip_largest_alphabet() {
    // Every non-whitespace ASCII character: 128 minus the six whitespace codes
    let chars: String = (0u8..128)
        .map(char::from)
        .filter(|c| !c.is_whitespace())
        .collect();
    let alphabet = Alphabet::new(&chars).unwrap();
    assert_eq!(alphabet.base(), 122);
    for len in [0, 1, 7, 100, 1000] {
        round_trip(&pseudo_random(len, len as u64 + 7), &alphabet);
    }
}

#[test]
fn test_round_trip_extreme_bytes() {
    for base in [2, 3, 7, 10, 16, 85, 94] {
        let alphabet = Alphabet::from_prefix(base).unwrap();
        for len in [1, 2, 9, 33, 300] {
            round_trip(&vec![0x00; len], &alphabet);
            round_trip(&vec![0xff; len], &alphabet);
            let alternating: Vec<u8> = (0..len)
                .map(|i| if i % 2 == 0 { 0x00 } else { 0xff })
                .collect();
            round_trip(&alternating, &alphabet);
        }
    }
}

#[test]
fn test_round_trip_boundary_hugging_input() {
    for base in [2, 3, 10, 36, 85, 94] {
        let alphabet = Alphabet::from_prefix(base).unwrap();
        for len in [1, 4, 20, 120, 600] {
            round_trip(&boundary_hugging(&alphabet, len), &alphabet);
        }
    }
}

#[test]
fn test_every_single_byte_every_small_base() {
    for base in 2..=12 {
        let alphabet = Alphabet::from_prefix(base).unwrap();
        for byte in 0..=255u8 {
            round_trip(&[byte], &alphabet);
        }
    }
}

#[test]
fn test_every_byte_pair_base_85() {
    let alphabet = get_alphabet("base85");
    for a in (0..=255u8).step_by(5) {
        for b in 0..=255u8 {
            round_trip(&[a, b], &alphabet);
        }
    }
}

#[test]
fn test_deterministic() {
    let alphabet = get_alphabet("base62");
    let data = pseudo_random(512, 42);
    assert_eq!(encode(&data, &alphabet), encode(&data, &alphabet));
}

#[test]
fn test_output_length_near_optimal() {
    for base in [2, 3, 10, 16, 58, 85, 94] {
        let alphabet = Alphabet::from_prefix(base).unwrap();
        for len in [1, 10, 100, 1000, 4096] {
            let data = pseudo_random(len, (base + len) as u64);
            let encoded = encode(&data, &alphabet);
            let bound = (len as f64 * 8.0 / (base as f64).log2()).ceil() as usize;
            assert!(
                encoded.len() <= bound + 3,
                "base {} len {}: {} digits, bound {}",
                base,
                len,
                encoded.len(),
                bound
            );
        }
    }
}

#[test]
fn test_binary_output_of_empty() {
    assert_eq!(encode_with(&[], "01").unwrap(), "0");
    assert!(decode_with("0", "01").unwrap().is_empty());
}

#[test]
fn test_invalid_character_rejected() {
    let err = decode_with("Z", "01").unwrap_err();
    assert_eq!(err.character(), Some('Z'));
    assert!(matches!(err, Error::Decode(_)));
}

#[test]
fn test_alphabet_errors_through_spec() {
    assert_eq!(
        encode_with(b"x", "aa").unwrap_err(),
        Error::InvalidAlphabet(AlphabetError::Repeated('a'))
    );
    assert_eq!(
        encode_with(b"x", "a").unwrap_err(),
        Error::InvalidAlphabet(AlphabetError::TooShort(1))
    );
    assert_eq!(
        decode_with("a", "a b").unwrap_err(),
        Error::InvalidAlphabet(AlphabetError::Whitespace(' '))
    );
}

#[test]
fn test_alphabet_argument_forms_agree() {
    let text = &ALPHABET_94[..85];
    let alphabet = Alphabet::new(text).unwrap();
    let data = pseudo_random(100, 9);

    let built = encode_with(&data, &alphabet).unwrap();
    let raw = encode_with(&data, text).unwrap();
    let owned = encode_with(&data, &text.to_string()).unwrap();
    assert_eq!(built, raw);
    assert_eq!(built, owned);
    assert_eq!(decode_with(&raw, &alphabet).unwrap(), data);
}

#[test]
fn test_text_helpers() {
    let alphabet = Alphabet::new(&ALPHABET_94[..85]).unwrap();
    let encoded = encode_text("Hello, world!", &alphabet);
    assert_eq!(decode_text(&encoded, &alphabet).unwrap(), "Hello, world!");

    let encoded = encode_text_with("Hello, world!", "0123456789").unwrap();
    assert!(encoded.chars().all(|c| c.is_ascii_digit()));
    assert_eq!(
        decode_text_with(&encoded, "0123456789").unwrap(),
        "Hello, world!"
    );
}

#[test]
fn test_incremental_matches_one_shot() {
    let alphabet = get_alphabet("base36");
    let data = pseudo_random(1000, 77);
    let expected = encode(&data, &alphabet);

    let mut encoder = Encoder::new(&alphabet);
    for chunk in data.chunks(33) {
        encoder.update(chunk);
    }
    let encoded = encoder.finish();
    assert_eq!(encoded, expected);

    let mut decoder = Decoder::new(&alphabet);
    for chunk in encoded.as_bytes().chunks(17) {
        decoder.feed(std::str::from_utf8(chunk).unwrap()).unwrap();
    }
    assert_eq!(decoder.finish(), data);
}

#[test]
fn test_garbage_input_decodes_without_panic() {
    for base in [2, 3, 5, 10, 85] {
        let alphabet = Alphabet::from_prefix(base).unwrap();
        for len in 1..64 {
            let text: String = pseudo_random(len, (base * 31 + len) as u64)
                .into_iter()
                .map(|b| alphabet.encode_digit(b as usize % base).unwrap())
                .collect();
            let _ = decode(&text, &alphabet).unwrap();

            let highest = alphabet.encode_digit(base - 1).unwrap();
            let all_high: String = std::iter::repeat_n(highest, len).collect();
            let _ = decode(&all_high, &alphabet).unwrap();
        }
    }
}

#[test]
fn test_known_encodings() {
    let cases: [(&[u8], usize, &str); 7] = [
        (b"Hello, world!", 85, "O3I6e=*JfZCcbUkO@"),
        (b"Hello, world!", 10, "28279760024376843867018812452811"),
        (b"", 85, "0"),
        (&[0x00], 2, "000000000"),
        (&[0xff], 2, "111111110"),
        (&[0x00, 0x00, 0x00], 16, "0000000"),
        (&[0xff, 0xff, 0xff, 0xff], 94, "`````"),
    ];

    for (data, base, expected) in cases {
        let alphabet = Alphabet::new(&ALPHABET_94[..base]).unwrap();
        assert_eq!(encode(data, &alphabet), expected, "base {}", base);
        assert_eq!(decode(expected, &alphabet).unwrap(), data, "base {}", base);
    }
}
