#![no_main]

use libfuzzer_sys::fuzz_target;
use lldp_core::frame::classify;
use lldp_core::{Lldpdu, MacAddr};

fuzz_target!(|data: &[u8]| {
    if let Some(payload) = classify(data, MacAddr::default()) {
        assert_eq!(payload.len() + 14, data.len());
        let _ = Lldpdu::parse(payload);
    }
});
