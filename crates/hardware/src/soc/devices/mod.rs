//! Register map descriptors of concrete firmware blocks.
//!
//! Each device here declares its fixed field set once, at construction, on top
//! of the generic [`DeviceBuilder`](crate::regmap::DeviceBuilder).

/// AXI-Stream ring buffer control interface.
pub mod axi_stream_ring_buffer;

pub use axi_stream_ring_buffer::AxiStreamRingBuffer;

pub use crate::regmap::RegisterMap;
