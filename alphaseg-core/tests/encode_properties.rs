//! Property tests for text encoding

use alphaseg_core::glyph::{encode, DECIMAL_POINT};
use alphaseg_core::text::continuous::{effective_len, rewrite};
use alphaseg_core::text::{cell_count, TextBuffer};
use proptest::prelude::*;

proptest! {
    #[test]
    fn fill_is_two_bytes_per_cell(text in "[ -~]{0,100}") {
        let mut buf = TextBuffer::<256>::new();
        let encoded = buf.encode(text.as_bytes());

        prop_assert!(!encoded.truncated);
        prop_assert_eq!(encoded.fill, 2 * cell_count(text.as_bytes()));
        prop_assert_eq!(buf.fill(), encoded.fill);
    }

    #[test]
    fn overflow_stops_at_last_full_cell(bytes in proptest::collection::vec(any::<u8>(), 0..200)) {
        let mut buf = TextBuffer::<32>::new();
        let encoded = buf.encode(&bytes);
        let cells = cell_count(&bytes);

        prop_assert_eq!(encoded.fill, (2 * cells).min(32));
        prop_assert_eq!(encoded.truncated, 2 * cells > 32);
        prop_assert_eq!(encoded.fill % 2, 0);
        prop_assert!(buf.as_bytes()[encoded.fill..].iter().all(|&b| b == 0));
    }

    #[test]
    fn dot_after_character_sets_decimal_point(c in "[!-\\-/-~]", rest in "[ -\\-/-~]{0,10}") {
        let text = format!("{}.{}", c, rest);
        let mut buf = TextBuffer::<64>::new();
        buf.encode(text.as_bytes());

        prop_assert_eq!(buf.cell(0), Some(encode(c.as_bytes()[0]) | DECIMAL_POINT));
        prop_assert_eq!(buf.fill(), 2 * (1 + rest.len()));
    }

    #[test]
    fn encode_is_idempotent(text in "[ -~]{0,40}", other in "[ -~]{0,40}") {
        let mut buf = TextBuffer::<48>::new();
        let first = buf.encode(text.as_bytes());
        let snapshot = buf.clone();

        // Something else in between must not leak into the re-encode
        buf.encode(other.as_bytes());
        let second = buf.encode(text.as_bytes());

        prop_assert_eq!(first, second);
        prop_assert_eq!(snapshot.as_bytes(), buf.as_bytes());
    }

    #[test]
    fn continuous_rewrite_shape(text in "[A-Z.]{0,40}", n in 1usize..12) {
        match rewrite::<256>(text.as_bytes(), b"***", n) {
            None => prop_assert!(effective_len(text.as_bytes()) <= n),
            Some(out) => {
                let head = format!("{} *** ", text);
                prop_assert!(!out.truncated);
                prop_assert!(out.text.starts_with(head.as_bytes()));
                let tail = &out.text[head.len()..];
                prop_assert_eq!(tail, &head.as_bytes()[..n.min(head.len())]);
            }
        }
    }
}
