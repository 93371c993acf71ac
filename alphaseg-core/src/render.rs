//! Render sink
//!
//! Pushes the visible slice of the frame buffer to the display row, one
//! 8-byte chunk per window in row order.

use crate::traits::{command, DisplayWindow, WINDOW_BYTES};

/// Write `visible` across `windows`
///
/// Window `i` receives bytes `8*i..8*i+8`. Every window always gets a full
/// chunk; bytes missing from `visible` are sent as zero (blank cells). The
/// first transport error aborts the pass.
pub fn render_frame<W: DisplayWindow>(windows: &mut [W], visible: &[u8]) -> Result<(), W::Error> {
    for (i, window) in windows.iter_mut().enumerate() {
        let mut chunk = [0u8; WINDOW_BYTES];
        let src = visible.get(i * WINDOW_BYTES..).unwrap_or(&[]);
        let len = src.len().min(WINDOW_BYTES);
        chunk[..len].copy_from_slice(&src[..len]);
        window.send_command(command::SET_DDRAM_ADDR, &chunk)?;
    }
    Ok(())
}

/// Send the same payload-less command sequence to every window
pub fn broadcast<W: DisplayWindow>(windows: &mut [W], opcodes: &[u8]) -> Result<(), W::Error> {
    for window in windows.iter_mut() {
        for &opcode in opcodes {
            window.send_command(opcode, &[])?;
        }
    }
    Ok(())
}
