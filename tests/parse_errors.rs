mod common;

use midilane::prelude::*;
use pretty_assertions::assert_eq;

fn parse_err(bytes: &[u8]) -> (NoteChart, DecodeError) {
    let mut chart = NoteChart::new();
    let err = chart.parse(bytes).unwrap_err();
    (chart, err)
}

#[test]
fn truncated_header_fails_and_leaves_an_empty_chart() {
    // anything shorter than the 14-byte minimum header must be rejected
    let (chart, err) = parse_err(&common::header(0, 1, 96)[..13]);

    assert!(err.is_eof());
    assert_eq!(chart.channel_count(), 0);
    assert!(!chart.error().is_empty());
}

#[test]
fn empty_source_fails() {
    let (chart, err) = parse_err(&[]);
    assert!(err.is_eof());
    assert_eq!(chart.channel_count(), 0);
}

#[test]
fn zero_channel_count_is_a_format_error() {
    let (chart, err) = parse_err(&common::header(0, 0, 96));

    assert!(matches!(
        err.kind(),
        DecodeErrorKind::Format(FormatError::NoChannels)
    ));
    assert_eq!(chart.channel_count(), 0);
    assert!(!chart.error().is_empty());
}

#[test]
fn undersized_header_length_is_a_format_error() {
    let mut bytes = b"MThd".to_vec();
    bytes.extend(2u32.to_be_bytes());
    bytes.extend([0x00, 0x00]);

    let (_, err) = parse_err(&bytes);
    assert!(matches!(
        err.kind(),
        DecodeErrorKind::Format(FormatError::HeaderTooShort(2))
    ));
}

#[test]
fn unknown_system_status_is_rejected() {
    let body = [common::vlq(0), vec![0xF1, 0x00]].concat();
    let bytes = [common::header(0, 1, 96), common::track(&body)].concat();

    let (chart, err) = parse_err(&bytes);
    assert!(matches!(
        err.kind(),
        DecodeErrorKind::Format(FormatError::UnexpectedEvent(0xF1))
    ));
    assert_eq!(chart.channel_count(), 0);
}

#[test]
fn data_byte_before_any_status_is_rejected() {
    let body = [common::vlq(0), vec![0x42, 0x42]].concat();
    let bytes = [common::header(0, 1, 96), common::track(&body)].concat();

    let (_, err) = parse_err(&bytes);
    assert!(matches!(
        err.kind(),
        DecodeErrorKind::Format(FormatError::UnexpectedEvent(0x00))
    ));
}

#[test]
fn meta_length_beyond_the_chunk_is_rejected() {
    let body = [common::vlq(0), vec![0xFF, 0x7F], common::vlq(100)].concat();
    let bytes = [common::header(0, 1, 96), common::track(&body)].concat();

    let (_, err) = parse_err(&bytes);
    assert!(matches!(
        err.kind(),
        DecodeErrorKind::Format(FormatError::EventTooLong { length: 100, .. })
    ));
}

#[test]
fn sysex_length_beyond_the_chunk_is_rejected() {
    let body = [common::vlq(0), vec![0xF0], common::vlq(64)].concat();
    let bytes = [common::header(0, 1, 96), common::track(&body)].concat();

    let (_, err) = parse_err(&bytes);
    assert!(matches!(
        err.kind(),
        DecodeErrorKind::Format(FormatError::EventTooLong { length: 64, .. })
    ));
}

#[test]
fn tempo_meta_length_must_be_three() {
    let body = [common::vlq(0), vec![0xFF, 0x51, 0x02, 0x07, 0xA1]].concat();
    let bytes = [common::header(0, 1, 96), common::track(&body)].concat();

    let (_, err) = parse_err(&bytes);
    assert!(matches!(
        err.kind(),
        DecodeErrorKind::Format(FormatError::TempoLength(2))
    ));
}

#[test]
fn zero_tempo_is_rejected() {
    let body = common::tempo_meta(0, 0);
    let bytes = [common::header(0, 1, 96), common::track(&body)].concat();

    let (_, err) = parse_err(&bytes);
    assert!(matches!(
        err.kind(),
        DecodeErrorKind::Format(FormatError::ZeroTempo)
    ));
}

#[test]
fn track_shorter_than_declared_is_an_eof_error() {
    let mut bytes = [common::header(0, 1, 96), common::track(&[])].concat();
    // declare 16 body bytes, supply 2
    let len = bytes.len();
    bytes[len - 1] = 16;
    bytes.extend([0x00, 0x90]);

    let (_, err) = parse_err(&bytes);
    assert!(err.is_eof());
}

#[test]
fn missing_track_chunks_are_an_eof_error() {
    // header declares two channels, file has one track
    let bytes = [
        common::header(1, 2, 480),
        common::track(&common::note_on(0, 60, 100)),
    ]
    .concat();

    let (chart, err) = parse_err(&bytes);
    assert!(err.is_eof());
    assert_eq!(chart.channel_count(), 0);
}

#[test]
fn failed_parse_rolls_back_a_previously_full_chart() {
    let good = [
        common::header(0, 1, 96),
        common::track(&common::note_on(0, 60, 100)),
    ]
    .concat();

    let mut chart = NoteChart::new();
    chart.parse(good.as_slice()).unwrap();
    assert_eq!(chart.event_count(0), 1);

    chart.parse(&good[..5]).unwrap_err();
    assert_eq!(chart.channel_count(), 0);
    assert_eq!(chart.event_count(0), 0);
    assert_eq!(chart.tempo(), 120);
    assert_eq!(chart.division(), 0);
    assert!(!chart.error().is_empty());

    // a later successful parse wipes the recorded error
    chart.parse(good.as_slice()).unwrap();
    assert_eq!(chart.error(), "");
    assert_eq!(chart.event_count(0), 1);
}

#[test]
fn errors_carry_the_failing_byte_offset() {
    let bytes = common::header(0, 0, 96);
    let (_, err) = parse_err(&bytes);
    // the whole 14-byte header was consumed before the count was checked
    assert_eq!(err.position(), 14);
}

#[test]
fn out_of_range_queries_are_quiet() {
    let chart = NoteChart::new();
    assert_eq!(chart.event_count(7), 0);
    assert_eq!(chart.event(7, 0), None);
    assert!(chart.channel(7).is_none());
    assert_eq!(chart.error(), "");
}

#[test]
fn clear_is_safe_and_idempotent() {
    let mut chart = NoteChart::new();
    chart.clear();

    let bytes = [
        common::header(0, 1, 96),
        common::track(&common::note_on(0, 60, 100)),
    ]
    .concat();
    chart.parse(bytes.as_slice()).unwrap();

    chart.clear();
    chart.clear();
    assert_eq!(chart.channel_count(), 0);
    assert_eq!(chart.tempo(), 120);
    assert_eq!(chart.error(), "");
}

#[test]
fn unopenable_path_is_an_io_error() {
    let mut chart = NoteChart::new();
    let err = chart
        .parse_path("does/not/exist.mid")
        .unwrap_err();

    assert!(matches!(err.kind(), DecodeErrorKind::Io(_)));
    assert_eq!(chart.channel_count(), 0);
    assert!(!chart.error().is_empty());
}
