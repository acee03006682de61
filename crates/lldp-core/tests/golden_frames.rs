use lldp_core::frame::{build_frame, classify, LLDP_MULTICAST_NEAREST_BRIDGE};
use lldp_core::tlv::{
    ChassisId, EndOfLldpdu, IdValue, InterfaceNumbering, ManagementAddress,
    OrganizationallySpecific, PortDescription, PortId, PortIdSubtype, SystemCapabilities,
    SystemDescription, SystemName, Ttl,
};
use lldp_core::{Capabilities, ErrorCategory, Lldpdu, MacAddr, Tlv};

const MAC: MacAddr = MacAddr([0x02, 0x04, 0xdf, 0x88, 0xa2, 0xb4]);

fn minimal() -> Lldpdu {
    let mut pdu = Lldpdu::new();
    pdu.append(ChassisId::mac(MAC)).unwrap();
    pdu.append(PortId::interface_name("eth0").unwrap()).unwrap();
    pdu.append(Ttl::new(60)).unwrap();
    pdu.append(EndOfLldpdu).unwrap();
    pdu
}

#[test]
fn minimal_lldpdu_matches_fixture() {
    assert_eq!(
        minimal().serialize().unwrap(),
        vec![
            0x02, 0x07, 0x04, 0x02, 0x04, 0xdf, 0x88, 0xa2, 0xb4, // chassis id
            0x04, 0x05, 0x05, 0x65, 0x74, 0x68, 0x30, // port id
            0x06, 0x02, 0x00, 0x3c, // ttl
            0x00, 0x00, // end
        ]
    );
}

#[test]
fn end_to_end_build_serialize_parse() {
    let pdu = minimal();
    let parsed = Lldpdu::parse(&pdu.serialize().unwrap()).unwrap();

    assert!(parsed.is_complete());
    assert_eq!(parsed.len(), 4);

    let chassis = parsed.chassis_id().unwrap();
    assert_eq!(chassis.id(), &IdValue::Mac(MAC));
    let port = parsed.port_id().unwrap();
    assert_eq!(port.subtype(), PortIdSubtype::InterfaceName);
    assert_eq!(port.id(), &IdValue::Text("eth0".to_string()));
    assert_eq!(parsed.ttl().unwrap().seconds(), 60);
    assert_eq!(parsed.get(3), Some(&Tlv::EndOfLldpdu(EndOfLldpdu)));

    for (a, b) in pdu.iter().zip(parsed.iter()) {
        assert_eq!(a, b);
    }
}

#[test]
fn full_lldpdu_matches_fixture() {
    let mut pdu = Lldpdu::new();
    pdu.append(ChassisId::mac(MAC)).unwrap();
    pdu.append(PortId::interface_name("eth0").unwrap()).unwrap();
    pdu.append(Ttl::new(120)).unwrap();
    pdu.append(PortDescription::new("uplink").unwrap()).unwrap();
    pdu.append(SystemName::new("sw1").unwrap()).unwrap();
    pdu.append(SystemDescription::new("Linux 6.1").unwrap()).unwrap();
    pdu.append(
        SystemCapabilities::new(
            Capabilities::BRIDGE | Capabilities::ROUTER,
            Capabilities::ROUTER,
        )
        .unwrap(),
    )
    .unwrap();
    pdu.append(
        ManagementAddress::new(
            "192.0.2.1".parse().unwrap(),
            InterfaceNumbering::IfIndex,
            3,
            Vec::new(),
        )
        .unwrap(),
    )
    .unwrap();
    pdu.append(OrganizationallySpecific::new([0x00, 0x80, 0xc2], 1, vec![0x00, 0x01]).unwrap())
        .unwrap();
    pdu.append(EndOfLldpdu).unwrap();

    let bytes = pdu.serialize().unwrap();
    assert_eq!(
        &bytes[20..],
        &[
            0x08, 0x06, 0x75, 0x70, 0x6c, 0x69, 0x6e, 0x6b, // port description
            0x0a, 0x03, 0x73, 0x77, 0x31, // system name
            0x0c, 0x09, 0x4c, 0x69, 0x6e, 0x75, 0x78, 0x20, 0x36, 0x2e, 0x31, // system description
            0x0e, 0x04, 0x00, 0x14, 0x00, 0x10, // capabilities
            0x10, 0x0c, 0x05, 0x01, 0xc0, 0x00, 0x02, 0x01, 0x02, 0x00, 0x00, 0x00, 0x03,
            0x00, // management address
            0xfe, 0x06, 0x00, 0x80, 0xc2, 0x01, 0x00, 0x01, // org specific
            0x00, 0x00, // end
        ]
    );
    assert_eq!(bytes.len(), pdu.encoded_len());
    assert_eq!(Lldpdu::parse(&bytes).unwrap(), pdu);
}

#[test]
fn frame_roundtrip_through_envelope() {
    let pdu = minimal();
    let frame = build_frame(LLDP_MULTICAST_NEAREST_BRIDGE, MAC, &pdu).unwrap();
    assert_eq!(
        &frame[..14],
        &[0x01, 0x80, 0xc2, 0x00, 0x00, 0x0e, 0x02, 0x04, 0xdf, 0x88, 0xa2, 0xb4, 0x88, 0xcc]
    );

    assert!(classify(&frame, MAC).is_none());
    let peer = MacAddr([0x02, 0, 0, 0, 0, 9]);
    let payload = classify(&frame, peer).unwrap();
    assert_eq!(Lldpdu::parse(payload).unwrap(), pdu);
}

#[test]
fn failures_fall_into_distinct_categories() {
    let malformed = Lldpdu::parse(&[0x02, 0x07, 0x04, 0x02]).unwrap_err();
    assert_eq!(malformed.category(), ErrorCategory::Malformed);

    let unknown = Lldpdu::parse(&[0x12, 0x00]).unwrap_err();
    assert_eq!(unknown.category(), ErrorCategory::UnknownType);

    let ordering = Lldpdu::parse(&[0x06, 0x02, 0x00, 0x3c]).unwrap_err();
    assert_eq!(ordering.category(), ErrorCategory::Ordering);

    let semantic = Lldpdu::parse(&[
        0x02, 0x07, 0x04, 0x02, 0x04, 0xdf, 0x88, 0xa2, 0xb4, 0x04, 0x05, 0x05, 0x65, 0x74,
        0x68, 0x30, 0x06, 0x02, 0x00, 0x3c, 0x0e, 0x04, 0x00, 0x01, 0x00, 0x02,
    ])
    .unwrap_err();
    assert_eq!(semantic.category(), ErrorCategory::Semantic);

    let mut pdu = Lldpdu::try_from(minimal().tlvs()[..3].to_vec()).unwrap();
    let org = OrganizationallySpecific::new([0; 3], 0, vec![0; 507]).unwrap();
    pdu.append(org.clone()).unwrap();
    pdu.append(org.clone()).unwrap();
    let err = pdu.append(org).unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Size);
}

#[cfg(feature = "serde")]
#[test]
fn tlvs_serialize_to_tagged_json() {
    let json = serde_json::to_value(Tlv::Ttl(Ttl::new(60))).unwrap();
    assert_eq!(json, serde_json::json!({ "type": "ttl", "value": 60 }));

    let json = serde_json::to_value(minimal()).unwrap();
    assert_eq!(json["tlvs"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["tlvs"][0]["type"], "chassis_id");
}
