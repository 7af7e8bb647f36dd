#![no_main]
use std::str;

use holdem_showdown::core::{Hand, Rankable};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = str::from_utf8(data) {
        if let Ok(h) = Hand::new_from_str(s) {
            // Every parsed card prints as one word.
            assert_eq!(h.len(), h.to_string().split_whitespace().count());
            if h.len() >= 5 {
                assert!(h.rank().is_ok());
            }
        }
    }
});
