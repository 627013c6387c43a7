//! Drum-kit payload layout constants and input names.

/// Device tag written at the head of calibration descriptors.
pub const DEVICE_TAG: &str = "drm";

/// Number of extension payload bytes the decoder reads.
pub const PAYLOAD_LEN: usize = 6;

/// Byte positions within the extension payload.
pub mod payload_bytes {
    /// Stick X (low 6 bits).
    pub const STICK_X: usize = 0;
    /// Stick Y (low 6 bits).
    pub const STICK_Y: usize = 1;
    /// Strike "which pad" code (bits 5:1).
    pub const STRIKE_CODE: usize = 2;
    /// Strike softness (bits 7:5).
    pub const STRIKE_SOFTNESS: usize = 3;
    /// Plus, minus and digital down.
    pub const BUTTONS: usize = 4;
    /// Pads, pedal and digital up.
    pub const PADS: usize = 5;
}

/// Bit masks within [`payload_bytes::PADS`]. Active-low.
pub mod pad_masks {
    pub const GREEN: u8 = 0x10;
    pub const RED: u8 = 0x40;
    pub const YELLOW: u8 = 0x20;
    pub const BLUE: u8 = 0x08;
    pub const ORANGE: u8 = 0x80;
    pub const BASS: u8 = 0x04;
    pub const DIGITAL_UP: u8 = 0x01;
}

/// Bit masks within [`payload_bytes::BUTTONS`]. Active-low.
pub mod button_masks {
    pub const PLUS: u8 = 0x04;
    pub const MINUS: u8 = 0x10;
    pub const DIGITAL_DOWN: u8 = 0x40;
}

/// "Which pad" codes reported alongside a strike.
pub mod strike_codes {
    pub const GREEN: u8 = 0x12;
    pub const RED: u8 = 0x19;
    pub const YELLOW: u8 = 0x11;
    pub const BLUE: u8 = 0x0F;
    pub const ORANGE: u8 = 0x0E;
    pub const BASS: u8 = 0x1B;
}

/// Softness value meaning "no strike".
pub const SOFTNESS_NO_HIT: u8 = 7;

/// Names under which the drum inputs are enumerated.
pub mod input_names {
    pub const GREEN: &str = "drmG";
    pub const RED: &str = "drmR";
    pub const YELLOW: &str = "drmY";
    pub const BLUE: &str = "drmB";
    pub const ORANGE: &str = "drmO";
    pub const BASS: &str = "drmBASS";

    pub const UP: &str = "drmUP";
    pub const DOWN: &str = "drmDOWN";
    pub const LEFT: &str = "drmLEFT";
    pub const RIGHT: &str = "drmRIGHT";

    pub const SELECT: &str = "drmSELECT";
    pub const START: &str = "drmSTART";
}
