//! Input report tags and extension payload framing.

use crate::{ReportError, ReportResult};

/// Input report tags sent by the Wii Remote (first byte of every report).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum InputReport {
    /// Status information.
    Status = 0x20,
    /// Memory/register read data.
    ReadMem = 0x21,
    /// Acknowledgement of an output report.
    Acknowledge = 0x22,
    /// Core buttons only.
    BtnsOnly = 0x30,
    /// Core buttons + accelerometer.
    BtnsAcc = 0x31,
    /// Core buttons + 8 extension bytes.
    BtnsExt = 0x32,
    /// Core buttons + accelerometer + 12 IR bytes.
    BtnsAccIr = 0x33,
    /// Core buttons + 19 extension bytes.
    BtnsExtB = 0x34,
    /// Core buttons + accelerometer + 16 extension bytes.
    BtnsAccExt = 0x35,
    /// Core buttons + 10 IR bytes + 9 extension bytes.
    BtnsIrExt = 0x36,
    /// Core buttons + accelerometer + 10 IR bytes + 6 extension bytes.
    BtnsAccIrExt = 0x37,
    /// 21 extension bytes, no core buttons.
    ExtOnly = 0x3D,
    /// Interleaved core buttons + accelerometer + IR, first half.
    InterleaveA = 0x3E,
    /// Interleaved core buttons + accelerometer + IR, second half.
    InterleaveB = 0x3F,
}

impl InputReport {
    /// Classify a report tag byte. Returns `None` for bytes that are not
    /// input report tags.
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x20 => Some(Self::Status),
            0x21 => Some(Self::ReadMem),
            0x22 => Some(Self::Acknowledge),
            0x30 => Some(Self::BtnsOnly),
            0x31 => Some(Self::BtnsAcc),
            0x32 => Some(Self::BtnsExt),
            0x33 => Some(Self::BtnsAccIr),
            0x34 => Some(Self::BtnsExtB),
            0x35 => Some(Self::BtnsAccExt),
            0x36 => Some(Self::BtnsIrExt),
            0x37 => Some(Self::BtnsAccIrExt),
            0x3D => Some(Self::ExtOnly),
            0x3E => Some(Self::InterleaveA),
            0x3F => Some(Self::InterleaveB),
            _ => None,
        }
    }

    /// The raw tag byte.
    pub fn tag(self) -> u8 {
        self as u8
    }

    /// Byte offset at which the extension payload begins, or `None` when this
    /// report carries no extension data.
    pub fn extension_offset(self) -> Option<usize> {
        match self {
            Self::BtnsExt | Self::BtnsExtB => Some(3),
            Self::BtnsAccExt => Some(6),
            Self::BtnsIrExt => Some(13),
            Self::BtnsAccIrExt => Some(16),
            Self::ExtOnly => Some(1),
            _ => None,
        }
    }

    /// Whether bytes 1–2 of this report hold the core button state.
    pub fn has_core_buttons(self) -> bool {
        !matches!(self, Self::ExtOnly)
    }
}

/// Resolve the extension payload offset for a raw report.
///
/// Returns `Ok(None)` when the tag is unknown or carries no extension data;
/// that is not an error, the report simply has nothing for an extension
/// decoder this frame.
///
/// # Errors
///
/// Returns [`ReportError::Empty`] when `data` has no tag byte.
pub fn resolve_extension_offset(data: &[u8]) -> ReportResult<Option<usize>> {
    let tag = *data.first().ok_or(ReportError::Empty)?;
    Ok(InputReport::from_tag(tag).and_then(InputReport::extension_offset))
}

/// Check that `data` holds at least `expected` bytes.
///
/// # Errors
///
/// Returns [`ReportError::TooShort`] when it does not.
pub fn ensure_len(data: &[u8], expected: usize) -> ReportResult<()> {
    if data.len() < expected {
        return Err(ReportError::TooShort {
            expected,
            actual: data.len(),
        });
    }
    Ok(())
}
