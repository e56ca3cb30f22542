use base64::{engine::general_purpose, Engine as _};
use hex::FromHexError;

pub fn hex_to_b64(input: &str) -> Result<String, FromHexError> {
    hex::decode(input).map(|b| general_purpose::STANDARD.encode(b))
}

#[test]
fn test_hex_to_b64() {
    let case = "49276d206b696c6c696e6720796f757220627261696e206c696b65206120706f69736f6e6f7573206d757368726f6f6d";
    let expected = Ok(String::from(
        "SSdtIGtpbGxpbmcgeW91ciBicmFpbiBsaWtlIGEgcG9pc29ub3VzIG11c2hyb29t",
    ));
    let result = hex_to_b64(case);
    assert_eq!(result, expected);
}
