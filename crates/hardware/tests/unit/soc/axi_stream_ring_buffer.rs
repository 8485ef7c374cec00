//! # AXI-Stream Ring Buffer Tests
//!
//! The descriptor must reproduce the firmware's field table exactly, uphold the
//! packing invariants, and refuse extensions that break them.

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use rstest::rstest;
use ringbuf_regmap::common::{AccessMode, RegMapError};
use ringbuf_regmap::config::DeviceConfig;
use ringbuf_regmap::regmap::{Field, RegisterMap};
use ringbuf_regmap::soc::devices::axi_stream_ring_buffer::{self, offsets, status};
use ringbuf_regmap::soc::devices::AxiStreamRingBuffer;

use crate::common::{RING_BUFFER_TABLE, Row, init_tracing};

fn ring_buffer() -> AxiStreamRingBuffer {
    init_tracing();
    AxiStreamRingBuffer::new(DeviceConfig::default()).unwrap()
}

fn row_of(field: &Field) -> Row {
    let expected = RING_BUFFER_TABLE
        .iter()
        .find(|r| r.name == field.name())
        .copied()
        .unwrap();
    Row {
        name: expected.name,
        offset: field.offset(),
        bit_offset: field.bit_offset(),
        bit_size: field.bit_size(),
        mode: field.mode(),
        poll: field.poll_interval(),
    }
}

#[test]
fn test_default_name() {
    let dev = ring_buffer();
    assert_eq!(dev.name(), axi_stream_ring_buffer::DEFAULT_NAME);
    assert_eq!(dev.base(), 0);
}

#[test]
fn test_fields_match_reference_table() {
    let dev = ring_buffer();
    let rows: Vec<Row> = dev.list_fields().iter().map(row_of).collect();
    assert_eq!(rows, RING_BUFFER_TABLE.to_vec());
}

#[rstest]
#[case("BufferLength", "Length of ring buffer", None)]
#[case("RAM_ADDR_WIDTH_G", "Ring Buffer RAM Width configuration", Some("{:d}"))]
#[case("ExtBufferClear", "External Buffer Clear Status", None)]
#[case("ExtBufferEnable", "External Buffer Enable Status", None)]
#[case("TrigCnt", "current value of the trigger counter", None)]
#[case(
    "TrigBurst",
    "Used to burst N number of trigger frames from local triggering",
    None
)]
#[case(
    "ContinuousMode",
    "Sets local triggering into continuous trigger mode",
    None
)]
fn test_descriptions_and_display_hints(
    #[case] name: &str,
    #[case] description: &str,
    #[case] disp: Option<&str>,
) {
    let dev = ring_buffer();
    let field = dev.field(name).unwrap();
    assert_eq!(field.description(), description);
    assert_eq!(field.disp(), disp);
}

#[test]
fn test_every_field_fits_its_register() {
    for field in ring_buffer().list_fields() {
        assert!(
            field.bit_offset() + field.bit_size() <= 32,
            "{} overflows",
            field.name()
        );
    }
}

#[test]
fn test_fields_sharing_an_offset_do_not_overlap() {
    let dev = ring_buffer();
    let fields = dev.list_fields();
    for (i, a) in fields.iter().enumerate() {
        for b in &fields[i + 1..] {
            if a.offset() == b.offset() {
                assert!(
                    !a.bits().overlaps(b.bits()),
                    "{} overlaps {}",
                    a.name(),
                    b.name()
                );
            }
        }
    }
}

#[test]
fn test_names_are_unique() {
    let dev = ring_buffer();
    let names: HashSet<&str> = dev.list_fields().iter().map(Field::name).collect();
    assert_eq!(names.len(), dev.list_fields().len());
}

#[test]
fn test_list_fields_is_idempotent() {
    let dev = ring_buffer();
    let first = dev.list_fields().to_vec();
    let second = dev.list_fields().to_vec();
    assert_eq!(first.len(), 7);
    assert_eq!(first, second);
}

#[test]
fn test_duplicate_eighth_field_fails() {
    let mut builder = AxiStreamRingBuffer::builder(DeviceConfig::default()).unwrap();
    let err = builder
        .declare(
            Field::new("BufferLength")
                .with_offset(0x10)
                .with_mode(AccessMode::Ro),
        )
        .unwrap_err();
    assert!(matches!(err, RegMapError::DuplicateName { ref name, .. } if name == "BufferLength"));
    assert_eq!(builder.fields().len(), 7);
}

#[test]
fn test_overflowing_eighth_field_fails() {
    let mut builder = AxiStreamRingBuffer::builder(DeviceConfig::default()).unwrap();
    let err = builder
        .declare(
            Field::new("Overflow")
                .with_offset(0x10)
                .with_bit_offset(30)
                .with_bit_size(4),
        )
        .unwrap_err();
    assert!(matches!(err, RegMapError::BitRangeOverflow { .. }));
}

#[test]
fn test_unused_status_bits_accept_an_extension() {
    let mut builder = AxiStreamRingBuffer::builder(DeviceConfig::default()).unwrap();
    builder
        .declare(
            Field::new("Spare")
                .with_offset(offsets::STATUS)
                .with_bit_offset(30)
                .with_bit_size(2)
                .with_mode(AccessMode::Ro),
        )
        .unwrap();
    assert_eq!(builder.build().len(), 8);
}

#[test]
fn test_extension_overlapping_status_fails() {
    let mut builder = AxiStreamRingBuffer::builder(DeviceConfig::default()).unwrap();
    let err = builder
        .declare(
            Field::new("Clash")
                .with_offset(offsets::STATUS)
                .with_bit_offset(27)
                .with_bit_size(2),
        )
        .unwrap_err();
    assert!(matches!(err, RegMapError::BitOverlap { ref other, .. } if other == "RAM_ADDR_WIDTH_G"));
}

#[test]
fn test_registers_view() {
    let dev = ring_buffer();
    let regs = dev.registers();
    let offsets: Vec<u64> = regs.iter().map(|r| r.offset()).collect();
    assert_eq!(offsets, vec![0x0, 0x4, 0x8, 0xC]);
    assert_eq!(regs[0].fields().len(), 4);
    assert_eq!(regs[0].mask(), 0x3FFF_FFFF);
    assert_eq!(regs[0].mode(), AccessMode::Ro);
    assert_eq!(regs[2].mode(), AccessMode::Wo);
    assert_eq!(regs[2].poll_interval(), None);
    assert_eq!(
        regs[1].poll_interval(),
        Some(axi_stream_ring_buffer::STATUS_POLL_INTERVAL)
    );
}

#[test]
fn test_address_range_spans_four_words() {
    let dev = AxiStreamRingBuffer::new(DeviceConfig::default().at(0x0010_0000)).unwrap();
    assert_eq!(dev.address_range(), (0x0010_0000, 0x10));
}

#[test]
fn test_window_must_end_inside_address_space() {
    let err = AxiStreamRingBuffer::new(DeviceConfig::default().at(u64::MAX - 0xF)).unwrap_err();
    assert!(matches!(
        err,
        RegMapError::AddressOverflow { ref name, span: 0xC, .. } if name == "ContinuousMode"
    ));
    let dev = AxiStreamRingBuffer::new(DeviceConfig::default().at(u64::MAX - 0x10)).unwrap();
    assert_eq!(dev.address_range(), (u64::MAX - 0x10, 0x10));
}

#[test]
fn test_empty_instance_name_rejected() {
    let err = AxiStreamRingBuffer::new(DeviceConfig::named("")).unwrap_err();
    assert!(matches!(err, RegMapError::EmptyName));
}

#[test]
fn test_config_is_forwarded_unmodified() {
    let config = DeviceConfig::from_json(
        r#"{ "name": "RingBuf[3]", "offset": 12288, "enabled": false, "expand": false }"#,
    )
    .unwrap();
    let dev = AxiStreamRingBuffer::new(config.clone()).unwrap();
    assert_eq!(dev.name(), "RingBuf[3]");
    assert_eq!(dev.base(), 0x3000);
    assert_eq!(dev.device().config(), &config);
    assert!(!dev.device().enabled());
}

#[test]
fn test_status_word_decoding() {
    let word = 4096 | (12 << 20) | (1 << 28);
    assert_eq!(AxiStreamRingBuffer::buffer_length(word), 4096);
    assert_eq!(AxiStreamRingBuffer::ram_addr_width(word), 12);
    assert_eq!(status::EXT_BUFFER_CLEAR.extract(word), 1);
    assert_eq!(status::EXT_BUFFER_ENABLE.extract(word), 0);
}

#[test]
fn test_json_rendering_is_transparent() {
    let dev = ring_buffer();
    let wrapped = serde_json::to_value(&dev).unwrap();
    let inner = serde_json::to_value(dev.device()).unwrap();
    assert_eq!(wrapped, inner);
    assert_eq!(wrapped["fields"][1]["disp"], "{:d}");
    assert_eq!(wrapped["fields"][0]["pollInterval"], 1.0);
    assert!(wrapped["fields"][5].get("pollInterval").is_none());
}

#[test]
fn test_into_device_keeps_fields() {
    let dev = ring_buffer();
    let fields = dev.list_fields().to_vec();
    assert_eq!(dev.into_device().list_fields(), fields.as_slice());
}
