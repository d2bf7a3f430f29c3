use crate::prelude::*;

use async_trait::async_trait;

/// A pre-opened connection to a register-mapped device.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Writes a contiguous block of registers starting at `address`.
    async fn write_registers(&self, address: u16, values: &[u16]) -> Result<()>;

    /// Reads `count` input registers starting at `address`.
    async fn read_input_registers(&self, address: u16, count: u16) -> Result<Vec<u16>>;
}
