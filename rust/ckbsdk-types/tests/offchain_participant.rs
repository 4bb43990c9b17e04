use ckbsdk_molecule::table::encode_table;
use ckbsdk_molecule::{ErrorKind, prelude::*};
use ckbsdk_types::{
    Byte32, Bytes, OffChainParticipant, OffChainParticipantReader, SEC1EncodedPubKey, Script,
    ScriptHashType,
};

/// Canonical encoding of the default participant.
#[rustfmt::skip]
const DEFAULT_PARTICIPANT: [u8; 167] = [
    167, 0, 0, 0, 20, 0, 0, 0, 53, 0, 0, 0, 106, 0, 0, 0, 159, 0, 0, 0,
    // pub_key
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    // payment_script
    53, 0, 0, 0, 16, 0, 0, 0, 48, 0, 0, 0, 49, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0,
    // unlock_script
    53, 0, 0, 0, 16, 0, 0, 0, 48, 0, 0, 0, 49, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0,
    // payment_min_capacity
    0, 0, 0, 0, 0, 0, 0, 0,
];

fn sample_script(seed: u8) -> Script {
    Script::new_builder()
        .code_hash(Byte32::from([seed; 32]))
        .hash_type(ScriptHashType::Type.into())
        .args(Bytes::from(vec![seed; 20]))
        .build()
}

fn sample_participant() -> OffChainParticipant {
    let mut key = [0x02; 33];
    key[32] = 0x7f;
    OffChainParticipant::new_builder()
        .pub_key(SEC1EncodedPubKey::from(key))
        .payment_script(sample_script(1))
        .unlock_script(sample_script(2))
        .payment_min_capacity(6_100_000_000u64.into())
        .build()
}

#[test]
fn test_default_encoding() {
    let participant = OffChainParticipant::default();
    assert_eq!(participant.as_slice(), &DEFAULT_PARTICIPANT[..]);
    assert_eq!(participant.total_size(), 167);
    assert_eq!(participant.field_count(), 4);
    assert!(!participant.has_extra_fields());
    assert!(!participant.as_reader().is_empty());
    assert_eq!(OffChainParticipant::FIELD_COUNT, 4);

    let rebuilt = OffChainParticipant::new_builder().build();
    assert_eq!(rebuilt, participant);
    OffChainParticipant::from_slice(&DEFAULT_PARTICIPANT).unwrap();
}

#[test]
fn test_field_access() {
    let participant = sample_participant();
    let reader = OffChainParticipantReader::from_slice(participant.as_slice()).unwrap();
    assert_eq!(reader.pub_key().raw_data()[32], 0x7f);
    assert_eq!(reader.payment_script().to_entity(), sample_script(1));
    assert_eq!(
        reader.unlock_script().hash_type_kind().unwrap(),
        ScriptHashType::Type
    );
    assert_eq!(reader.payment_min_capacity().unpack(), 6_100_000_000);
    assert_eq!(participant.payment_min_capacity().unpack(), 6_100_000_000);
}

#[test]
fn test_rebuild_is_identity() {
    let participant = sample_participant();
    let rebuilt = participant.as_builder().build();
    assert_eq!(rebuilt.as_slice(), participant.as_slice());

    let changed = participant
        .as_builder()
        .payment_min_capacity(1u64.into())
        .build();
    assert_eq!(changed.payment_script(), participant.payment_script());
    assert_eq!(changed.payment_min_capacity().unpack(), 1);
    assert_eq!(changed.as_slice().len(), participant.as_slice().len());
}

fn with_extra_field(participant: &OffChainParticipant, extra: &[u8]) -> Vec<u8> {
    let reader = participant.as_reader();
    encode_table(&[
        reader.pub_key().as_slice(),
        reader.payment_script().as_slice(),
        reader.unlock_script().as_slice(),
        reader.payment_min_capacity().as_slice(),
        extra,
    ])
}

#[test]
fn test_extra_field_strict_and_compatible() {
    let participant = sample_participant();
    let extended = with_extra_field(&participant, b"v2 data");

    let e = OffChainParticipant::from_slice(&extended).unwrap_err();
    assert!(matches!(
        e.kind(),
        ErrorKind::FieldCountMismatch {
            expected: 4,
            actual: 5,
            compatible: false,
            ..
        }
    ));

    let decoded = OffChainParticipant::from_compatible_slice(&extended).unwrap();
    assert_eq!(decoded.field_count(), 5);
    assert!(decoded.has_extra_fields());
    assert_eq!(decoded.count_extra_fields(), 1);
    assert_eq!(decoded.unlock_script(), participant.unlock_script());
    assert_eq!(
        decoded.payment_min_capacity(),
        participant.payment_min_capacity()
    );
    let extra = decoded.as_reader().view().extra_fields().collect::<Vec<_>>();
    assert_eq!(extra, [b"v2 data".as_slice()]);

    // extra fields are dropped on the way through a builder
    assert_eq!(decoded.as_builder().build(), participant);
}

#[test]
fn test_missing_field_rejected_in_both_modes() {
    let participant = sample_participant();
    let reader = participant.as_reader();
    let short = encode_table(&[
        reader.pub_key().as_slice(),
        reader.payment_script().as_slice(),
        reader.unlock_script().as_slice(),
    ]);
    for compatible in [false, true] {
        let e = OffChainParticipant::decode(&short, compatible).unwrap_err();
        assert!(matches!(
            e.kind(),
            ErrorKind::FieldCountMismatch {
                expected: 4,
                actual: 3,
                ..
            }
        ));
    }
}

#[test]
fn test_empty_and_truncated_input() {
    assert!(matches!(
        OffChainParticipant::from_slice(&[]).unwrap_err().kind(),
        ErrorKind::HeaderTooShort { .. }
    ));

    fastrand::seed(167);
    let participant = sample_participant();
    let bytes = participant.as_slice();
    for _ in 0..100 {
        let len = fastrand::usize(..bytes.len());
        assert!(OffChainParticipant::from_compatible_slice(&bytes[..len]).is_err());
        assert!(OffChainParticipantReader::from_slice(&bytes[..len]).is_err());
    }
}

#[test]
fn test_corrupted_nested_script() {
    let participant = OffChainParticipant::default();
    let mut bytes = participant.into_vec();
    // args length of the payment script: 53 + 49
    bytes[102] = 1;
    let e = OffChainParticipant::from_slice(&bytes).unwrap_err();
    assert_eq!(e.field_path(), "payment_script.args");
    assert!(matches!(
        e.root_cause().kind(),
        ErrorKind::TotalSizeMismatch { .. }
    ));
}
