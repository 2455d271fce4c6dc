//! Message bit packing.
//!
//! A message travels through the codecs as an ordered sequence of bits,
//! eight per byte with the most significant bit first, closed by one
//! all-zero byte that marks the end of the message on extraction.

const TERMINATOR: u8 = 0;

/// Convert a message into its embeddable bit sequence.
///
/// The terminator byte is always appended, so an empty message still
/// produces eight zero bits.
pub fn to_bits(message: &str) -> Vec<bool> {
    let bytes = message.as_bytes();
    let mut bits = Vec::with_capacity((bytes.len() + 1) * 8);
    for &byte in bytes.iter().chain(std::iter::once(&TERMINATOR)) {
        for shift in (0..8).rev() {
            bits.push((byte >> shift) & 1 == 1);
        }
    }
    bits
}

/// Decode a bit sequence back into a message.
///
/// Bits are grouped into bytes of eight. Decoding stops at the first
/// all-zero byte, or at input exhaustion when no terminator is present.
/// A trailing group of fewer than eight bits carries no complete character
/// and is dropped rather than zero-padded. Bytes that do not form valid
/// UTF-8 (a foreign carrier, or a wrong seed) decode lossily instead of
/// failing.
pub fn from_bits(bits: &[bool]) -> String {
    let mut bytes = Vec::with_capacity(bits.len() / 8);
    for chunk in bits.chunks_exact(8) {
        let byte = chunk
            .iter()
            .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit));
        if byte == TERMINATOR {
            break;
        }
        bytes.push(byte);
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_message_is_just_the_terminator() {
        assert_eq!(to_bits(""), vec![false; 8]);
    }

    #[test]
    fn bits_are_most_significant_first() {
        // 'A' = 0x41 = 0100_0001, followed by the terminator byte
        let expected = [
            false, true, false, false, false, false, false, true, // 'A'
            false, false, false, false, false, false, false, false, // NUL
        ];
        assert_eq!(to_bits("A"), expected);
    }

    #[test]
    fn round_trip() {
        assert_eq!(from_bits(&to_bits("hi")), "hi");
        assert_eq!(from_bits(&to_bits("Hello, World!")), "Hello, World!");
    }

    #[test]
    fn decoding_stops_at_the_terminator() {
        let mut bits = to_bits("ok");
        // bits after the terminator must never reach the caller
        bits.extend(to_bits("garbage"));
        assert_eq!(from_bits(&bits), "ok");
    }

    #[test]
    fn missing_terminator_returns_everything_decoded() {
        let bits = to_bits("hi");
        assert_eq!(from_bits(&bits[..16]), "hi");
    }

    #[test]
    fn partial_trailing_group_is_dropped() {
        // 15 bits hold exactly one complete byte
        let bits = to_bits("hi");
        assert_eq!(from_bits(&bits[..15]), "h");
    }

    #[test]
    fn fewer_than_eight_bits_decode_to_nothing() {
        let bits = to_bits("A");
        assert_eq!(from_bits(&bits[..1]), "");
        assert_eq!(from_bits(&bits[..7]), "");
    }
}
