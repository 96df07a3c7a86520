//! Zone bitmask table.
//!
//! Every shutter channel of the remote is one bit (channel 1 = `1 << 0`).
//! A zone names a group of channels; the firmware drives them with the OR
//! of their bits.
//!
//! ```text
//! Parter  = B1 | B2 | B3        = 7
//! Front   = B1 | B6 | B7        = 97
//! ```

mod render;

pub use render::{JsonStyle, render};

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of channels on the remote.
pub const CHANNELS: u8 = 7;

/// Built-in zones: name and channel numbers.
const BUILTIN: &[(&str, &[u8])] = &[
    ("Parter", &[1, 2, 3]),
    ("Piętro", &[4, 5, 6, 7]),
    ("Front", &[1, 6, 7]),
    ("Ogrod", &[2, 3, 4, 5]),
    ("Salon", &[2, 3]),
    ("Sypialnia", &[4]),
    ("Hania", &[5]),
    ("Zuzia", &[6]),
    ("Biuro", &[7]),
    ("Kotłownia", &[1]),
    ("Salon L", &[2]),
    ("Salon R", &[3]),
];

/// Zone validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ZoneError {
    #[error("zone `{zone}` uses channel {channel}, valid channels are 1-{max}", max = CHANNELS)]
    InvalidChannel { zone: String, channel: u8 },

    #[error("zone `{0}` has no channels")]
    NoChannels(String),

    #[error("zone `{0}` is defined twice")]
    DuplicateName(String),
}

/// A named group of channels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub channels: Vec<u8>,
}

impl Zone {
    pub fn new(name: impl Into<String>, channels: &[u8]) -> Self {
        Self {
            name: name.into(),
            channels: channels.to_vec(),
        }
    }

    /// OR of the channel bits. Out-of-range channels contribute nothing.
    pub fn mask(&self) -> u32 {
        self.channels
            .iter()
            .filter(|&&ch| (1..=CHANNELS).contains(&ch))
            .fold(0, |mask, &ch| mask | 1 << (ch - 1))
    }
}

/// The zone table shipped with the firmware.
pub fn builtin() -> Vec<Zone> {
    BUILTIN
        .iter()
        .map(|(name, channels)| Zone::new(*name, channels))
        .collect()
}

/// Check channel ranges and name uniqueness.
pub fn validate(zones: &[Zone]) -> Result<(), ZoneError> {
    let mut names = FxHashSet::default();

    for zone in zones {
        if zone.channels.is_empty() {
            return Err(ZoneError::NoChannels(zone.name.clone()));
        }
        if let Some(&channel) = zone
            .channels
            .iter()
            .find(|&&ch| !(1..=CHANNELS).contains(&ch))
        {
            return Err(ZoneError::InvalidChannel {
                zone: zone.name.clone(),
                channel,
            });
        }
        if !names.insert(zone.name.as_str()) {
            return Err(ZoneError::DuplicateName(zone.name.clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_of(name: &str) -> u32 {
        builtin()
            .into_iter()
            .find(|z| z.name == name)
            .map(|z| z.mask())
            .unwrap()
    }

    #[test]
    fn test_builtin_masks() {
        assert_eq!(mask_of("Parter"), 7);
        assert_eq!(mask_of("Piętro"), 120);
        assert_eq!(mask_of("Front"), 97);
        assert_eq!(mask_of("Ogrod"), 30);
        assert_eq!(mask_of("Salon"), 6);
        assert_eq!(mask_of("Sypialnia"), 8);
        assert_eq!(mask_of("Hania"), 16);
        assert_eq!(mask_of("Zuzia"), 32);
        assert_eq!(mask_of("Biuro"), 64);
        assert_eq!(mask_of("Kotłownia"), 1);
        assert_eq!(mask_of("Salon L"), 2);
        assert_eq!(mask_of("Salon R"), 4);
    }

    #[test]
    fn test_builtin_is_valid_and_ordered() {
        let zones = builtin();
        assert_eq!(zones.len(), 12);
        assert_eq!(zones[0].name, "Parter");
        assert_eq!(zones[11].name, "Salon R");
        assert!(validate(&zones).is_ok());
    }

    #[test]
    fn test_floors_cover_all_channels() {
        assert_eq!(mask_of("Parter") | mask_of("Piętro"), (1 << CHANNELS) - 1);
        assert_eq!(mask_of("Parter") & mask_of("Piętro"), 0);
    }

    #[test]
    fn test_validate_channel_range() {
        let zones = vec![Zone::new("Hall", &[1, 8])];
        assert_eq!(
            validate(&zones),
            Err(ZoneError::InvalidChannel {
                zone: "Hall".to_string(),
                channel: 8
            })
        );

        let zones = vec![Zone::new("Hall", &[0])];
        assert!(matches!(validate(&zones), Err(ZoneError::InvalidChannel { channel: 0, .. })));
    }

    #[test]
    fn test_validate_duplicates_and_empty() {
        let zones = vec![Zone::new("Hall", &[1]), Zone::new("Hall", &[2])];
        assert_eq!(validate(&zones), Err(ZoneError::DuplicateName("Hall".to_string())));

        let zones = vec![Zone::new("Hall", &[])];
        assert_eq!(validate(&zones), Err(ZoneError::NoChannels("Hall".to_string())));
    }

    #[test]
    fn test_mask_ignores_out_of_range() {
        assert_eq!(Zone::new("x", &[0, 1, 9]).mask(), 1);
    }
}
