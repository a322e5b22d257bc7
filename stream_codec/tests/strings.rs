mod common;
use common::{random_string, rng};
use rand::Rng;
use stream_codec::{
	string::{
		read_ascii, read_string, read_utf, utf_len, write_ascii, write_string, write_utf, MAX_UTF_LEN,
	},
	CodecError,
};

fn string_bytes(value: Option<&str>) -> Vec<u8> {
	let mut out = Vec::new();
	write_string(&mut out, value).unwrap();
	out
}

fn ascii_bytes(value: Option<&str>) -> Vec<u8> {
	let mut out = Vec::new();
	write_ascii(&mut out, value).unwrap();
	out
}

fn utf_bytes(value: &str) -> Vec<u8> {
	let mut out = Vec::new();
	write_utf(&mut out, value).unwrap();
	out
}

mod utf16 {
	use super::*;

	#[test]
	fn null_and_empty() {
		assert_eq!(string_bytes(None), [0xFF, 0xFF, 0xFF, 0xFF]);
		assert_eq!(string_bytes(Some("")), [0, 0, 0, 0]);
		assert_eq!(read_string(&mut &string_bytes(None)[..]).unwrap(), None);
		assert_eq!(read_string(&mut &string_bytes(Some(""))[..]).unwrap().as_deref(), Some(""));
	}

	#[test]
	fn code_units() {
		assert_eq!(string_bytes(Some("Ab")), [0, 0, 0, 2, 0x00, 0x41, 0x00, 0x62]);
		// Surrogate pair counts as 2 units
		assert_eq!(
			string_bytes(Some("😀")),
			[0, 0, 0, 2, 0xD8, 0x3D, 0xDE, 0x00]
		);
	}

	#[test]
	fn round_trip() {
		let mut rng = rng();
		for len in 0..200 {
			let value = random_string(&mut rng, len, 0..=0x10FFFF);
			let bytes = string_bytes(Some(&value));
			let mut input = bytes.as_slice();
			assert_eq!(read_string(&mut input).unwrap(), Some(value));
			assert!(input.is_empty());
		}
	}

	#[test]
	fn negative_length() {
		let mut input: &[u8] = &[0xFF, 0xFF, 0xFF, 0xFE];
		assert!(matches!(read_string(&mut input), Err(CodecError::MalformedLength(-2))));
	}

	#[test]
	fn truncated() {
		let mut input: &[u8] = &[0, 0, 0, 2, 0x00, 0x41];
		assert!(matches!(read_string(&mut input), Err(CodecError::EndOfInput)));

		let mut input: &[u8] = &[0, 0, 0, 1, 0x00];
		assert!(matches!(read_string(&mut input), Err(CodecError::EndOfInput)));
	}

	#[test]
	fn huge_length_without_data() {
		let mut input: &[u8] = &[0x7F, 0xFF, 0xFF, 0xFF, 0x00, 0x41];
		assert!(matches!(read_string(&mut input), Err(CodecError::EndOfInput)));
	}

	#[test]
	fn unpaired_surrogate() {
		let mut input: &[u8] = &[0, 0, 0, 2, 0x00, 0x41, 0xD8, 0x00];
		assert!(matches!(
			read_string(&mut input),
			Err(CodecError::InvalidUtf16 { position: 1 })
		));
	}
}

mod ascii {
	use super::*;

	#[test]
	fn null_and_empty() {
		assert_eq!(ascii_bytes(None), [0xFC]);
		assert_eq!(ascii_bytes(Some("")), [0x00]);
		assert_eq!(read_ascii(&mut &ascii_bytes(None)[..]).unwrap(), None);
		assert_eq!(read_ascii(&mut &ascii_bytes(Some(""))[..]).unwrap().as_deref(), Some(""));
	}

	#[test]
	fn one_byte_per_char() {
		assert_eq!(ascii_bytes(Some("hi")), [0x08, b'h', b'i']);
		assert_eq!(ascii_bytes(Some("café")), [0x10, b'c', b'a', b'f', 0xE9]);
		assert_eq!(ascii_bytes(Some("\u{0}\u{ff}")), [0x08, 0x00, 0xFF]);
	}

	#[test]
	fn round_trip() {
		let mut rng = rng();
		for len in 0..300 {
			let value = random_string(&mut rng, len, 0..=0xFF);
			let bytes = ascii_bytes(Some(&value));
			let mut input = bytes.as_slice();
			assert_eq!(read_ascii(&mut input).unwrap(), Some(value));
			assert!(input.is_empty());
		}
	}

	#[test]
	fn char_out_of_range() {
		let mut out = Vec::new();
		let result = write_ascii(&mut out, Some("abĀ"));
		assert!(matches!(
			result,
			Err(CodecError::CharOutOfRange { code: 0x100, position: 2 })
		));
		assert!(out.is_empty());

		assert!(matches!(
			write_ascii(&mut out, Some("€")),
			Err(CodecError::CharOutOfRange { code: 0x20AC, position: 0 })
		));
	}

	#[test]
	fn negative_length() {
		// VarInt -2
		let mut input: &[u8] = &[0xF8];
		assert!(matches!(read_ascii(&mut input), Err(CodecError::MalformedLength(-2))));
	}

	#[test]
	fn truncated() {
		let mut input: &[u8] = &[0x0C, b'a', b'b'];
		assert!(matches!(read_ascii(&mut input), Err(CodecError::EndOfInput)));
	}
}

mod utf {
	use super::*;

	#[test]
	fn encodings() {
		assert_eq!(utf_bytes(""), [0x00, 0x00]);
		assert_eq!(utf_bytes("A"), [0x00, 0x01, 0x41]);
		assert_eq!(utf_bytes("\u{0}"), [0x00, 0x02, 0xC0, 0x80]);
		assert_eq!(utf_bytes("é"), [0x00, 0x02, 0xC3, 0xA9]);
		assert_eq!(utf_bytes("\u{7ff}"), [0x00, 0x02, 0xDF, 0xBF]);
		assert_eq!(utf_bytes("€"), [0x00, 0x03, 0xE2, 0x82, 0xAC]);
		assert_eq!(utf_bytes("\u{ffff}"), [0x00, 0x03, 0xEF, 0xBF, 0xBF]);
		assert_eq!(
			utf_bytes("😀"),
			[0x00, 0x06, 0xED, 0xA0, 0xBD, 0xED, 0xB8, 0x80]
		);
	}

	#[test]
	fn no_zero_bytes_in_payload() {
		let bytes = utf_bytes("a\u{0}b\u{0}\u{0}");
		assert!(bytes[2..].iter().all(|&b| b != 0));
		assert_eq!(read_utf(&mut &bytes[..]).unwrap(), "a\u{0}b\u{0}\u{0}");
	}

	#[test]
	fn length_matches_payload() {
		let mut rng = rng();
		for len in 0..100 {
			let value = random_string(&mut rng, len, 0..=0xFFFF);
			let bytes = utf_bytes(&value);
			assert_eq!(bytes.len(), utf_len(&value) + 2);
			assert_eq!(u16::from_be_bytes([bytes[0], bytes[1]]) as usize, utf_len(&value));
		}
	}

	#[test]
	fn round_trip_bmp() {
		let mut rng = rng();
		for len in 0..300 {
			let value = random_string(&mut rng, len, 1..=0xFFFF);
			let bytes = utf_bytes(&value);
			let mut input = bytes.as_slice();
			assert_eq!(read_utf(&mut input).unwrap(), value);
			assert!(input.is_empty());
		}
	}

	#[test]
	fn round_trip_supplementary() {
		let mut rng = rng();
		for _ in 0..100 {
			let len = rng.gen_range(1..20);
			let value = random_string(&mut rng, len, 0..=0x10FFFF);
			assert_eq!(read_utf(&mut &utf_bytes(&value)[..]).unwrap(), value);
		}
	}

	#[test]
	fn bad_continuation_byte() {
		let mut input: &[u8] = &[0x00, 0x02, 0xC3, 0x29];
		assert!(matches!(
			read_utf(&mut input),
			Err(CodecError::MalformedEncoding { byte: 0x29, position: 1 })
		));

		let mut input: &[u8] = &[0x00, 0x05, 0x41, 0x42, 0xE2, 0x82, 0xC0];
		assert!(matches!(
			read_utf(&mut input),
			Err(CodecError::MalformedEncoding { byte: 0xC0, position: 4 })
		));
	}

	#[test]
	fn bad_lead_byte() {
		let mut input: &[u8] = &[0x00, 0x01, 0x80];
		assert!(matches!(
			read_utf(&mut input),
			Err(CodecError::MalformedEncoding { byte: 0x80, position: 0 })
		));

		let mut input: &[u8] = &[0x00, 0x02, 0x41, 0xF0];
		assert!(matches!(
			read_utf(&mut input),
			Err(CodecError::MalformedEncoding { byte: 0xF0, position: 1 })
		));
	}

	#[test]
	fn partial_sequence_at_end() {
		let mut input: &[u8] = &[0x00, 0x03, 0x41, 0xE2, 0x82];
		assert!(matches!(
			read_utf(&mut input),
			Err(CodecError::MalformedEncoding { byte: 0xE2, position: 1 })
		));
	}

	#[test]
	fn truncated_payload() {
		let mut input: &[u8] = &[0x00, 0x04, 0x41];
		assert!(matches!(read_utf(&mut input), Err(CodecError::EndOfInput)));
	}

	#[test]
	fn too_long() {
		let value = "a".repeat(MAX_UTF_LEN);
		assert_eq!(utf_bytes(&value).len(), MAX_UTF_LEN + 2);

		let value = "é".repeat(MAX_UTF_LEN / 2 + 1);
		let mut out = Vec::new();
		assert!(matches!(
			write_utf(&mut out, &value),
			Err(CodecError::StringTooLong { len: 65536, max: 65535 })
		));
		assert!(out.is_empty());
	}
}
