use super::{encode_committee_hash, encode_setup_committee};

fn word(body: &[u8], i: usize) -> [u8; 32] {
    body[i * 32..(i + 1) * 32].try_into().expect("In range")
}

fn word_as_u64(body: &[u8], i: usize) -> u64 {
    let w = word(body, i);
    assert_eq!(w[..24], [0; 24], "High bytes of word {i} must be zero");
    u64::from_be_bytes(w[24..].try_into().expect("8 bytes"))
}

#[test]
fn setup_committee_layout() {
    let urls = ["a".to_string(), "bc".to_string()];
    let addr_bytes = [0x11u8; 40];

    let calldata = encode_setup_committee(2, &urls, &addr_bytes);
    let body = &calldata[4..];

    assert_eq!(body.len() % 32, 0);
    assert_eq!(body.len(), 416);

    // head
    assert_eq!(word_as_u64(body, 0), 2); // requiredAmountOfSignatures
    assert_eq!(word_as_u64(body, 1), 96); // offset of urls
    assert_eq!(word_as_u64(body, 2), 320); // offset of addrBytes

    // urls tail: length, element offsets relative to the offsets block
    assert_eq!(word_as_u64(body, 3), 2);
    assert_eq!(word_as_u64(body, 4), 64);
    assert_eq!(word_as_u64(body, 5), 128);

    // first element: "a", padded to a full word
    assert_eq!(word_as_u64(body, 6), 1);
    let mut expected = [0u8; 32];
    expected[0] = b'a';
    assert_eq!(word(body, 7), expected);

    // second element: "bc"
    assert_eq!(word_as_u64(body, 8), 2);
    let mut expected = [0u8; 32];
    expected[..2].copy_from_slice(b"bc");
    assert_eq!(word(body, 9), expected);

    // addrBytes tail: 40 bytes, padded to two words
    assert_eq!(word_as_u64(body, 10), 40);
    assert_eq!(body[11 * 32..11 * 32 + 40], [0x11; 40]);
    assert_eq!(body[11 * 32 + 40..], [0; 24]);
}

#[test]
fn word_aligned_addr_bytes_get_no_padding() {
    let calldata = encode_setup_committee(1, &["u".to_string()], &[0x22; 32]);
    let body = &calldata[4..];

    // head (3 words) + urls tail (4 words) + bytes len word + exactly one data word
    assert_eq!(body.len(), (3 + 4 + 1 + 1) * 32);
}

#[test]
fn committee_hash_is_selector_only() {
    let calldata = encode_committee_hash();

    assert_eq!(calldata.len(), 4);
    assert_ne!(calldata, &encode_setup_committee(1, &[], &[])[..4]);
}
