//! Button custom ids carrying an activity key, e.g. `bored_bot_transcript:42`.
//!
//! The API returns the same activity for the same key, so a click can re-fetch exactly what the
//! image showed.

use crate::error::NotAToken;

pub const TRANSCRIPT_PREFIX: &str = "bored_bot_transcript:";

pub fn encode(key: &str) -> String {
    format!("{}{}", TRANSCRIPT_PREFIX, key)
}

/// Strip the prefix.  Everything after it is the key, verbatim.
pub fn decode(token: &str) -> Result<&str, NotAToken> {
    token.strip_prefix(TRANSCRIPT_PREFIX).ok_or(NotAToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_with_prefix() {
        assert_eq!(encode("42"), "bored_bot_transcript:42");
    }

    #[test]
    fn decode_inverts_encode() {
        for key in ["42", "8264223", "", "a:b", ":", "bored_bot_transcript:7"] {
            assert_eq!(decode(&encode(key)), Ok(key));
        }
    }

    #[test]
    fn rejects_foreign_ids() {
        assert_eq!(decode("some_other_button"), Err(NotAToken));
        assert_eq!(decode("bored_bot_transcript"), Err(NotAToken));
        assert_eq!(decode("Bored_bot_transcript:42"), Err(NotAToken));
        assert_eq!(decode(" bored_bot_transcript:42"), Err(NotAToken));
    }
}
