use lldp_core::frame::classify;
use lldp_core::{Lldpdu, MacAddr};
use std::fs;
use std::path::PathBuf;

// Source address none of the frame fixtures use.
const LOCAL: MacAddr = MacAddr([0x02, 0xff, 0xff, 0xff, 0xff, 0xff]);

struct Fixture {
    name: String,
    bytes: Vec<u8>,
}

impl Fixture {
    fn is_frame(&self) -> bool {
        self.name.starts_with("frame-")
    }

    /// The LLDPDU bytes, with the Ethernet envelope stripped for frames.
    fn lldpdu_bytes(&self) -> &[u8] {
        if self.is_frame() {
            classify(&self.bytes, LOCAL)
                .unwrap_or_else(|| panic!("{} is not an LLDP frame", self.name))
        } else {
            &self.bytes
        }
    }

    fn parse(&self) -> Lldpdu {
        Lldpdu::parse(self.lldpdu_bytes())
            .unwrap_or_else(|e| panic!("{} failed to parse: {e}", self.name))
    }
}

/// Hex octets separated by whitespace; `#` starts a comment running to the
/// end of the line.
fn decode_hex(name: &str, text: &str) -> Vec<u8> {
    text.lines()
        .map(|line| line.split('#').next().unwrap_or_default())
        .flat_map(str::split_whitespace)
        .map(|tok| {
            u8::from_str_radix(tok, 16)
                .unwrap_or_else(|_| panic!("{name}: bad hex octet {tok:?}"))
        })
        .collect()
}

fn load_corpus() -> Vec<Fixture> {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../fixtures/golden");
    let mut corpus: Vec<Fixture> = fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("cannot list {}: {e}", dir.display()))
        .map(|entry| entry.expect("readable dir entry").path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "hex"))
        .map(|path| {
            let name = path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string();
            let text = fs::read_to_string(&path).expect("fixture must be readable");
            let bytes = decode_hex(&name, &text);
            Fixture { name, bytes }
        })
        .collect();
    corpus.sort_by(|a, b| a.name.cmp(&b.name));
    assert!(!corpus.is_empty(), "no fixtures in {}", dir.display());
    corpus
}

#[test]
fn every_fixture_is_a_complete_lldpdu() {
    for fixture in load_corpus() {
        let pdu = fixture.parse();
        assert!(pdu.is_complete(), "{} is not complete", fixture.name);
        assert!(pdu.chassis_id().is_some());
        assert!(pdu.port_id().is_some());
        assert!(pdu.ttl().is_some());
    }
}

#[test]
fn every_fixture_reencodes_byte_for_byte() {
    for fixture in load_corpus() {
        let payload = fixture.lldpdu_bytes();
        let pdu = fixture.parse();
        let encoded = pdu.serialize().expect("parsed LLDPDU must re-encode");
        assert_eq!(
            encoded,
            &payload[..pdu.encoded_len()],
            "{} did not re-encode byte for byte",
            fixture.name
        );
        // Anything past End is padding.
        assert!(
            payload[pdu.encoded_len()..].iter().all(|b| *b == 0),
            "{} has non-zero bytes after End",
            fixture.name
        );
    }
}

#[test]
fn frame_fixtures_are_ignored_when_sent_from_ourselves() {
    for fixture in load_corpus().into_iter().filter(Fixture::is_frame) {
        let source = MacAddr(
            fixture.bytes[6..12]
                .try_into()
                .expect("frame fixture carries a source MAC"),
        );
        assert!(
            classify(&fixture.bytes, source).is_none(),
            "{} was accepted from its own source",
            fixture.name
        );
    }
}

#[test]
fn hex_comments_and_blank_lines_are_skipped() {
    let text = "# header\n\n06 02 # ttl\n00 3c\n";
    assert_eq!(decode_hex("inline", text), vec![0x06, 0x02, 0x00, 0x3c]);
}
