//! Packed cell buffers: one bit per cell, row-major, LSB-first within each byte.

use crate::grid::GridSize;

/// Test bit `n` of a packed buffer.
///
/// `n` must address a byte inside `bytes`. Debug builds assert this; release
/// builds read a missing byte as all-dead instead of panicking.
#[inline]
pub fn is_alive(bytes: &[u8], n: usize) -> bool {
    debug_assert!(n >> 3 < bytes.len(), "cell index {n} outside packed buffer of {} bytes", bytes.len());
    let mask = 1u8 << (n & 7);
    bytes.get(n >> 3).is_some_and(|byte| byte & mask == mask)
}

/// Read-only view of an engine's cell buffer.
///
/// Borrows the engine, so it cannot outlive the next mutating call.
#[derive(Debug, Clone, Copy)]
pub struct CellView<'a> {
    bytes: &'a [u8],
    size: GridSize,
}

impl<'a> CellView<'a> {
    pub fn new(bytes: &'a [u8], size: GridSize) -> Self {
        debug_assert!(
            bytes.len() >= size.packed_len(),
            "packed buffer of {} bytes too short for {}x{} grid",
            bytes.len(),
            size.width,
            size.height
        );
        Self { bytes, size }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }

    #[inline]
    pub fn is_alive(&self, n: usize) -> bool {
        debug_assert!(n < self.size.cell_count(), "cell index {n} outside grid");
        is_alive(self.bytes, n)
    }

    #[inline]
    pub fn is_alive_at(&self, row: u32, column: u32) -> bool {
        debug_assert!(self.size.contains(row, column), "cell ({row},{column}) outside grid");
        self.is_alive(self.size.index(row, column))
    }

    pub fn live_count(&self) -> usize {
        (0..self.size.cell_count()).filter(|&n| self.is_alive(n)).count()
    }
}
