//! # Device Builder Tests
//!
//! Validation performed by `DeviceBuilder::declare`: every rejected
//! declaration must leave the builder exactly as it was.

use ringbuf_regmap::common::{AccessMode, RegMapError};
use ringbuf_regmap::regmap::{DeviceBuilder, Field, RegisterMap};

use crate::common::init_tracing;

fn status_builder() -> DeviceBuilder {
    init_tracing();
    let mut builder = DeviceBuilder::new("Dut").unwrap();
    builder
        .declare(
            Field::new("Low")
                .with_bit_size(16)
                .with_mode(AccessMode::Ro),
        )
        .unwrap();
    builder
}

#[test]
fn test_declare_records_in_order() {
    let mut builder = status_builder();
    builder
        .declare(Field::new("High").with_bit_offset(16).with_bit_size(16))
        .unwrap();
    builder.declare(Field::new("Next").with_offset(0x4)).unwrap();

    let names: Vec<_> = builder.fields().iter().map(Field::name).collect();
    assert_eq!(names, ["Low", "High", "Next"]);
}

#[test]
fn test_duplicate_name_rejected() {
    let mut builder = status_builder();
    let err = builder
        .declare(Field::new("Low").with_offset(0x8))
        .unwrap_err();
    assert!(matches!(
        err,
        RegMapError::DuplicateName { ref device, ref name } if device == "Dut" && name == "Low"
    ));
    assert_eq!(builder.fields().len(), 1);
}

#[test]
fn test_bit_range_overflow_rejected() {
    let mut builder = status_builder();
    let err = builder
        .declare(
            Field::new("Wide")
                .with_offset(0x4)
                .with_bit_offset(30)
                .with_bit_size(4),
        )
        .unwrap_err();
    assert!(matches!(
        err,
        RegMapError::BitRangeOverflow {
            bit_offset: 30,
            bit_size: 4,
            ..
        }
    ));
    assert_eq!(builder.fields().len(), 1);
}

#[test]
fn test_full_word_at_nonzero_offset_rejected() {
    let mut builder = DeviceBuilder::new("Dut").unwrap();
    let err = builder
        .declare(Field::new("Shifted").with_bit_offset(1))
        .unwrap_err();
    assert!(matches!(err, RegMapError::BitRangeOverflow { .. }));
}

#[test]
fn test_zero_width_rejected() {
    let mut builder = status_builder();
    let err = builder
        .declare(Field::new("Empty").with_offset(0x4).with_bit_size(0))
        .unwrap_err();
    assert!(matches!(err, RegMapError::ZeroWidth { ref name } if name == "Empty"));
}

#[test]
fn test_misaligned_offset_rejected() {
    let mut builder = status_builder();
    let err = builder
        .declare(Field::new("Odd").with_offset(0x6).with_bit_size(8))
        .unwrap_err();
    assert!(matches!(err, RegMapError::MisalignedOffset { offset: 0x6, .. }));
}

#[test]
fn test_overlap_in_same_register_rejected() {
    let mut builder = status_builder();
    let err = builder
        .declare(Field::new("Clash").with_bit_offset(15).with_bit_size(2))
        .unwrap_err();
    assert!(matches!(
        err,
        RegMapError::BitOverlap { ref other, offset: 0, .. } if other == "Low"
    ));
    assert_eq!(builder.fields().len(), 1);
}

#[test]
fn test_same_bits_in_other_register_accepted() {
    let mut builder = status_builder();
    builder
        .declare(Field::new("Mirror").with_offset(0x4).with_bit_size(16))
        .unwrap();
    assert_eq!(builder.fields().len(), 2);
}

#[test]
fn test_empty_name_rejected() {
    let mut builder = DeviceBuilder::new("Dut").unwrap();
    let err = builder.declare(Field::new("")).unwrap_err();
    assert!(matches!(err, RegMapError::EmptyName));
}

#[test]
fn test_rejected_name_can_be_reused() {
    let mut builder = status_builder();
    assert!(builder
        .declare(Field::new("Retry").with_offset(0x4).with_bit_size(0))
        .is_err());
    builder
        .declare(Field::new("Retry").with_offset(0x4).with_bit_size(8))
        .unwrap();
    assert_eq!(builder.fields().len(), 2);
}

#[test]
fn test_write_only_poll_interval_accepted_but_not_polled() {
    let mut builder = DeviceBuilder::new("Dut").unwrap();
    builder
        .declare(
            Field::new("Strobe")
                .with_mode(AccessMode::Wo)
                .with_poll_interval(std::time::Duration::from_secs(1)),
        )
        .unwrap();
    let device = builder.build();
    let strobe = device.field("Strobe").unwrap();
    assert!(strobe.poll_interval().is_some());
    assert!(!strobe.polled());
}

#[test]
fn test_build_freezes_fields() {
    let device = status_builder().build();
    assert_eq!(device.name(), "Dut");
    assert_eq!(device.len(), 1);
    assert_eq!(device.list_fields()[0].name(), "Low");
}

#[test]
fn test_empty_device_name_rejected() {
    let err = DeviceBuilder::new("").unwrap_err();
    assert!(matches!(err, RegMapError::EmptyName));
}

#[test]
fn test_last_word_of_address_space_rejected() {
    let mut builder = DeviceBuilder::new("Top").unwrap();
    let err = builder
        .declare(Field::new("Last").with_offset(u64::MAX - 3))
        .unwrap_err();
    assert!(matches!(
        err,
        RegMapError::AddressOverflow { ref name, base: 0, span } if name == "Last" && span == u64::MAX - 3
    ));
    assert!(builder.fields().is_empty());
    assert_eq!(builder.build().address_range(), (0, 0));
}

#[test]
fn test_highest_fitting_word_accepted() {
    let mut builder = DeviceBuilder::new("Top").unwrap();
    builder
        .declare(Field::new("Top").with_offset(u64::MAX - 7))
        .unwrap();
    assert_eq!(builder.build().address_range(), (0, u64::MAX - 3));
}
