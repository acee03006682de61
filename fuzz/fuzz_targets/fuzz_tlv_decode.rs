#![no_main]

use libfuzzer_sys::fuzz_target;
use lldp_core::Tlv;

fuzz_target!(|data: &[u8]| {
    if let Ok(tlv) = Tlv::decode(data) {
        assert_eq!(tlv.encoded_len(), data.len());
        assert_eq!(tlv.to_bytes().expect("decoded tlv must re-encode"), data);
    }
});
