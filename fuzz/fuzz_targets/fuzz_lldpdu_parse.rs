#![no_main]

use libfuzzer_sys::fuzz_target;
use lldp_core::Lldpdu;

fuzz_target!(|data: &[u8]| {
    if let Ok(pdu) = Lldpdu::parse(data) {
        let bytes = pdu.serialize().expect("parsed lldpdu must re-encode");
        assert_eq!(bytes.len(), pdu.encoded_len());
        assert_eq!(Lldpdu::parse(&bytes).expect("re-encoded lldpdu must parse"), pdu);
    }
});
