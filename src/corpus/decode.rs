// Text decoding with a legacy-encoding fallback.
//
// Knowledge-base files and pasted introductions mostly arrive as UTF-8,
// but material exported from older Windows tooling is still GBK. Decoding
// walks an ordered candidate list and takes the first clean decode; only
// when every candidate rejects the bytes does the caller see an error.

use encoding_rs::GBK;

use crate::error::DecodeError;

#[derive(Debug, Clone, Copy)]
enum Candidate {
    Utf8,
    Gbk,
}

impl Candidate {
    fn decode(self, raw: &[u8]) -> Option<String> {
        match self {
            Candidate::Utf8 => std::str::from_utf8(raw).ok().map(str::to_owned),
            Candidate::Gbk => {
                let (text, _, had_errors) = GBK.decode(raw);
                if had_errors {
                    None
                } else {
                    Some(text.into_owned())
                }
            }
        }
    }
}

/// Tried in order; first clean decode wins.
const CANDIDATES: [Candidate; 2] = [Candidate::Utf8, Candidate::Gbk];

/// Decode raw bytes as UTF-8, falling back to GBK.
pub fn decode_bytes(raw: &[u8]) -> Result<String, DecodeError> {
    CANDIDATES
        .iter()
        .find_map(|candidate| candidate.decode(raw))
        .ok_or(DecodeError)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_decodes_directly() {
        let raw = "各部门职责说明".as_bytes();
        assert_eq!(decode_bytes(raw).unwrap(), "各部门职责说明");
    }

    #[test]
    fn gbk_decodes_via_fallback() {
        // "中文" in GBK
        let raw = [0xD6, 0xD0, 0xCE, 0xC4];
        assert_eq!(decode_bytes(&raw).unwrap(), "中文");
    }

    #[test]
    fn undecodable_bytes_are_a_typed_error() {
        // 0xFF is not a valid lead byte in UTF-8 or GBK
        let raw = [0xFF, 0xFF];
        assert_eq!(decode_bytes(&raw), Err(DecodeError));
    }

    #[test]
    fn empty_input_is_empty_string() {
        assert_eq!(decode_bytes(&[]).unwrap(), "");
    }
}
