pub mod attack;

pub fn fixed_xor(buf1: &[u8], buf2: &[u8]) -> Vec<u8> {
    assert_eq!(buf1.len(), buf2.len());
    buf1.iter()
        .zip(buf2.iter())
        .map(|(x, y)| x ^ y)
        .collect()
}

#[test]
fn test_fixed_xor() {
    let case_buf1 = hex!("1c0111001f010100061a024b53535009181c");
    let case_buf2 = hex!("686974207468652062756c6c277320657965");
    let expected = hex!("746865206b696420646f6e277420706c6179");
    let result = fixed_xor(&case_buf1, &case_buf2);
    assert_eq!(result, expected);
}

// A single-byte key is just a repeating one-byte key
pub fn byte_xor(buf: &[u8], b: u8) -> Vec<u8> {
    buf.iter()
        .map(|x| x ^ b)
        .collect()
}

#[test]
fn test_byte_xor_involution() {
    let case = b"the quick brown fox jumps over the lazy dog";
    assert_eq!(case.to_vec(), byte_xor(&byte_xor(case, 0x42), 0x42));
}

pub fn repeating_key_xor(buf: &[u8], key: &[u8]) -> Vec<u8> {
    assert!(!key.is_empty());
    buf.iter()
        .enumerate()
        .map(|(i, b)| b ^ key[i % key.len()])
        .collect()
}

#[test]
fn test_repeating_key_xor() {
    let case = b"Burning 'em, if you ain't quick and nimble\nI go crazy when I hear a cymbal";
    let key = b"ICE";
    let encoded = repeating_key_xor(case, key);
    let expected = hex!("0b3637272a2b2e63622c2e69692a23693a2a3c6324202d623d63343c2a26226324272765272a282b2f20430a652e2c652a3124333a653e2b2027630c692b20283165286326302e27282f");
    assert_eq!(encoded, expected);
}

pub fn hamming_distance(buf1: &[u8], buf2: &[u8]) -> u32 {
    assert_eq!(buf1.len(), buf2.len());
    buf1.iter()
        .zip(buf2.iter())
        .map(|(x, y)| x ^ y)
        .map(|z| z.count_ones())
        .sum()
}

#[test]
fn test_hamming_distance() {
    let s1 = "this is a test".to_string();
    let s2 = "wokka wokka!!!".to_string();
    let dist = hamming_distance(s1.as_bytes(), s2.as_bytes());
    assert_eq!(dist, 37);
}

// Per-bit distance, i.e. the fraction of differing bits
pub fn normalised_hamming_distance(buf1: &[u8], buf2: &[u8]) -> f64 {
    (hamming_distance(buf1, buf2) as f64) / ((buf1.len() * 8) as f64)
}

#[test]
fn test_normalised_hamming_distance() {
    assert_eq!(0.0, normalised_hamming_distance(b"abcd", b"abcd"));
    assert_eq!(1.0, normalised_hamming_distance(&[0x00], &[0xff]));
}
