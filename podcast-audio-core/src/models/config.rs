use super::error::ConvertError;

/// Bitrates the Layer III frame encoder accepts, in kbit/s.
pub const SUPPORTED_BITRATES_KBPS: [u32; 16] = [
    8, 16, 24, 32, 40, 48, 64, 80, 96, 112, 128, 160, 192, 224, 256, 320,
];

/// Configuration for blob-to-MP3 conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertConfig {
    /// Target MP3 bitrate in kbit/s (default: 128).
    pub bitrate_kbps: u32,
}

impl ConvertConfig {
    pub fn validate(&self) -> Result<(), ConvertError> {
        if SUPPORTED_BITRATES_KBPS.contains(&self.bitrate_kbps) {
            Ok(())
        } else {
            Err(ConvertError::UnsupportedBitrate(self.bitrate_kbps))
        }
    }
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self { bitrate_kbps: 128 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(ConvertConfig::default().bitrate_kbps, 128);
        assert!(ConvertConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_unsupported_bitrate() {
        let config = ConvertConfig { bitrate_kbps: 100 };
        assert_eq!(
            config.validate(),
            Err(ConvertError::UnsupportedBitrate(100))
        );
    }
}
