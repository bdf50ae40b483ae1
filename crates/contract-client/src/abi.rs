//! Minimal ABI encoding for the two committee contract entry points
//!
//! Only what `setupCommittee(uint256,string[],bytes)` and
//! `committeeHash()` need: the 4-byte selector plus standard head/tail
//! encoding of one static and two dynamic arguments.

use alloy_primitives::keccak256;

const WORD: usize = 32;

/// First 4 bytes of the keccak256 of the function signature
pub(crate) fn selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

fn push_u64_word(out: &mut Vec<u8>, value: u64) {
    let mut word = [0u8; WORD];
    word[WORD - 8..].copy_from_slice(&value.to_be_bytes());
    out.extend_from_slice(&word);
}

fn push_usize_word(out: &mut Vec<u8>, value: usize) {
    push_u64_word(out, u64::try_from(value).expect("Can't fail"));
}

/// Length-prefixed dynamic value, zero-padded up to a word boundary
fn push_padded_bytes(out: &mut Vec<u8>, bytes: &[u8]) {
    push_usize_word(out, bytes.len());
    out.extend_from_slice(bytes);
    let rem = bytes.len() % WORD;
    if rem != 0 {
        out.resize(out.len() + WORD - rem, 0);
    }
}

/// Calldata for `setupCommittee(uint256,string[],bytes)`
///
/// Head: threshold word plus offsets of the two dynamic tails,
/// measured from the start of the arguments (after the selector).
/// Element offsets inside the `string[]` tail are measured from the
/// start of its offsets block, per the ABI rules for dynamic arrays.
pub fn encode_setup_committee(
    required_signatures: u64,
    urls: &[String],
    addr_bytes: &[u8],
) -> Vec<u8> {
    let mut urls_tail = Vec::new();
    push_usize_word(&mut urls_tail, urls.len());
    let mut elements = Vec::new();
    for url in urls {
        push_usize_word(&mut urls_tail, urls.len() * WORD + elements.len());
        push_padded_bytes(&mut elements, url.as_bytes());
    }
    urls_tail.extend_from_slice(&elements);

    let head_len = 3 * WORD;

    let mut out = Vec::new();
    out.extend_from_slice(&selector("setupCommittee(uint256,string[],bytes)"));
    push_u64_word(&mut out, required_signatures);
    push_usize_word(&mut out, head_len);
    push_usize_word(&mut out, head_len + urls_tail.len());
    out.extend_from_slice(&urls_tail);
    push_padded_bytes(&mut out, addr_bytes);

    out
}

/// Calldata for the read-only `committeeHash()` view
pub fn encode_committee_hash() -> Vec<u8> {
    selector("committeeHash()").to_vec()
}

#[cfg(test)]
mod tests;
