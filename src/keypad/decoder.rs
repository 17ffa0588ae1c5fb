//! Voltage band decoding for resistor-ladder channels.
//!
//! Readings are on the full 16-bit scale (`0..=65535`). The band edges are fixed
//! constants tuned to the reference keypad's resistor ladder; there is no
//! calibration step.

use super::VirtualKey;

/// Above this reading no key is pressed, whatever the layout.
const IDLE_THRESHOLD: u16 = 60800;

const TWO_KEY_IDLE: u16 = 48640;
const TWO_KEY_BANDS: [u16; 1] = [16384];

const THREE_KEY_IDLE: u16 = 54528;
const THREE_KEY_BANDS: [u16; 2] = [10880, 32704];

const FOUR_KEY_BANDS: [u16; 3] = [4864, 22528, 39552];

/// Ordered keys of a single ADC channel, one per voltage band from low to high.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelLayout {
    keys: Vec<VirtualKey>,
}

impl ChannelLayout {
    /// Create a new layout.
    ///
    /// Only 2, 3 or 4 keys can be decoded; any other length is accepted but the
    /// channel will never report a key press.
    pub fn new(keys: Vec<VirtualKey>) -> Self {
        if !Self::is_supported_len(keys.len()) {
            warn!(
                "Channel layout has {} keys, expected 2 to 4; no key will ever be reported",
                keys.len()
            );
        }
        Self { keys }
    }

    /// Layouts of the reference two-channel navigation keypad
    pub fn reference() -> [ChannelLayout; 2] {
        [
            Self::new(vec![
                VirtualKey::Right,
                VirtualKey::Left,
                VirtualKey::Select,
                VirtualKey::SoftA,
            ]),
            Self::new(vec![VirtualKey::Up, VirtualKey::Down, VirtualKey::SoftB]),
        ]
    }

    pub fn keys(&self) -> &[VirtualKey] {
        &self.keys
    }

    pub fn is_supported(&self) -> bool {
        Self::is_supported_len(self.keys.len())
    }

    /// Decode a raw reading against this layout
    pub fn decode(&self, raw: u16) -> VirtualKey {
        decode(raw, &self.keys)
    }

    fn is_supported_len(len: usize) -> bool {
        (2..=4).contains(&len)
    }
}

/// Map a raw reading to the key whose band contains it.
pub fn decode(raw: u16, keys: &[VirtualKey]) -> VirtualKey {
    // most polls see the idle voltage
    if raw > IDLE_THRESHOLD {
        return VirtualKey::None;
    }

    match keys.len() {
        2 if raw > TWO_KEY_IDLE => VirtualKey::None,
        2 => keys[band(raw, &TWO_KEY_BANDS)],
        3 if raw > THREE_KEY_IDLE => VirtualKey::None,
        3 => keys[band(raw, &THREE_KEY_BANDS)],
        4 => keys[band(raw, &FOUR_KEY_BANDS)],
        _ => VirtualKey::None,
    }
}

/// Index of the first band whose upper edge is above `raw`, or the last band.
fn band(raw: u16, edges: &[u16]) -> usize {
    edges
        .iter()
        .position(|&edge| raw < edge)
        .unwrap_or(edges.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> ChannelLayout {
        ChannelLayout::new(vec![
            VirtualKey::Right,
            VirtualKey::Left,
            VirtualKey::Select,
            VirtualKey::SoftA,
        ])
    }

    #[test]
    fn test_should_decode_four_key_bands() {
        let layout = four();
        assert_eq!(layout.decode(0), VirtualKey::Right);
        assert_eq!(layout.decode(4863), VirtualKey::Right);
        assert_eq!(layout.decode(4864), VirtualKey::Left);
        assert_eq!(layout.decode(22527), VirtualKey::Left);
        assert_eq!(layout.decode(22528), VirtualKey::Select);
        assert_eq!(layout.decode(39551), VirtualKey::Select);
        assert_eq!(layout.decode(39552), VirtualKey::SoftA);
        assert_eq!(layout.decode(60800), VirtualKey::SoftA);
        assert_eq!(layout.decode(60801), VirtualKey::None);
        assert_eq!(layout.decode(u16::MAX), VirtualKey::None);
    }

    #[test]
    fn test_should_partition_four_key_range_without_gaps() {
        let layout = four();
        let mut previous = layout.decode(0);
        let mut transitions = vec![previous];
        for raw in 1..=u16::MAX {
            let key = layout.decode(raw);
            if key != previous {
                transitions.push(key);
                previous = key;
            }
        }
        assert_eq!(
            transitions,
            vec![
                VirtualKey::Right,
                VirtualKey::Left,
                VirtualKey::Select,
                VirtualKey::SoftA,
                VirtualKey::None,
            ]
        );
    }

    #[test]
    fn test_should_decode_three_key_bands() {
        let layout = ChannelLayout::new(vec![VirtualKey::Up, VirtualKey::Down, VirtualKey::SoftB]);
        assert_eq!(layout.decode(0), VirtualKey::Up);
        assert_eq!(layout.decode(10879), VirtualKey::Up);
        assert_eq!(layout.decode(10880), VirtualKey::Down);
        assert_eq!(layout.decode(32703), VirtualKey::Down);
        assert_eq!(layout.decode(32704), VirtualKey::SoftB);
        assert_eq!(layout.decode(54528), VirtualKey::SoftB);
        assert_eq!(layout.decode(54529), VirtualKey::None);
    }

    #[test]
    fn test_should_decode_two_key_bands() {
        let layout = ChannelLayout::new(vec![VirtualKey::Up, VirtualKey::Down]);
        assert_eq!(layout.decode(16383), VirtualKey::Up);
        assert_eq!(layout.decode(16384), VirtualKey::Down);
        assert_eq!(layout.decode(48640), VirtualKey::Down);
        assert_eq!(layout.decode(48641), VirtualKey::None);
    }

    #[test]
    fn test_should_never_decode_unsupported_layout() {
        let single = ChannelLayout::new(vec![VirtualKey::Select]);
        assert!(!single.is_supported());
        assert_eq!(single.decode(0), VirtualKey::None);

        let empty = ChannelLayout::new(vec![]);
        assert_eq!(empty.decode(1000), VirtualKey::None);

        let five = ChannelLayout::new(vec![VirtualKey::Up; 5]);
        assert_eq!(five.decode(0), VirtualKey::None);
    }

    #[test]
    fn test_should_build_reference_layouts() {
        let [first, second] = ChannelLayout::reference();
        assert_eq!(first.keys().len(), 4);
        assert_eq!(second.keys(), &[VirtualKey::Up, VirtualKey::Down, VirtualKey::SoftB]);
    }
}
