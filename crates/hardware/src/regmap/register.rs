//! Per-register view of a field list.
//!
//! The host issues one bus transaction per 32-bit word, not per field, so it
//! needs the declared fields grouped by the register they are packed into.

use std::collections::BTreeMap;

use crate::common::AccessMode;

use super::field::Field;

/// All fields packed into one register word.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Register<'a> {
    offset: u64,
    fields: Vec<&'a Field>,
}

impl<'a> Register<'a> {
    /// Groups `fields` by offset, in ascending offset order.
    ///
    /// Inside each register the fields keep their declaration order.
    pub fn group<I>(fields: I) -> Vec<Self>
    where
        I: IntoIterator<Item = &'a Field>,
    {
        let mut by_offset: BTreeMap<u64, Vec<&'a Field>> = BTreeMap::new();
        for field in fields {
            by_offset.entry(field.offset()).or_default().push(field);
        }
        by_offset
            .into_iter()
            .map(|(offset, fields)| Self { offset, fields })
            .collect()
    }

    /// Byte offset of the register.
    pub const fn offset(&self) -> u64 {
        self.offset
    }

    /// Fields packed into the register, in declaration order.
    pub fn fields(&self) -> &[&'a Field] {
        &self.fields
    }

    /// Union of the masks of every packed field.
    pub fn mask(&self) -> u32 {
        self.fields.iter().fold(0, |acc, f| acc | f.bits().mask())
    }

    /// Combined access mode the host must support for this word.
    pub fn mode(&self) -> AccessMode {
        self.fields
            .iter()
            .map(|f| f.mode())
            .reduce(AccessMode::union)
            .unwrap_or_default()
    }

    /// Shortest poll interval among the readable fields, if any of them poll.
    pub fn poll_interval(&self) -> Option<std::time::Duration> {
        self.fields
            .iter()
            .filter(|f| f.polled())
            .filter_map(|f| f.poll_interval())
            .min()
    }
}
