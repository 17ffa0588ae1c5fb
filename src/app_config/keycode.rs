use std::str::FromStr;

use analog_keypad::VirtualKey;

/// Wrapper around [`VirtualKey`] to facilitate deserialization
#[derive(Debug, Clone, Copy)]
pub struct Keycode(VirtualKey);

impl Keycode {
    /// Get the underlying [`VirtualKey`]
    pub fn key(&self) -> VirtualKey {
        self.0
    }
}

impl FromStr for Keycode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RIGHT" => Ok(Keycode(VirtualKey::Right)),
            "LEFT" => Ok(Keycode(VirtualKey::Left)),
            "UP" => Ok(Keycode(VirtualKey::Up)),
            "DOWN" => Ok(Keycode(VirtualKey::Down)),
            "SELECT" | "SEL" => Ok(Keycode(VirtualKey::Select)),
            "SOFT_A" | "SOFTA" => Ok(Keycode(VirtualKey::SoftA)),
            "SOFT_B" | "SOFTB" => Ok(Keycode(VirtualKey::SoftB)),
            _ => Err("Unsupported keycode"),
        }
    }
}

impl<'de> serde::Deserialize<'de> for Keycode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Keycode::from_str(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_parse_keycodes() {
        assert_eq!(Keycode::from_str("right").unwrap().key(), VirtualKey::Right);
        assert_eq!(Keycode::from_str("Sel").unwrap().key(), VirtualKey::Select);
        assert_eq!(Keycode::from_str("SOFT_A").unwrap().key(), VirtualKey::SoftA);
        assert_eq!(Keycode::from_str("softb").unwrap().key(), VirtualKey::SoftB);
        assert!(Keycode::from_str("NONE").is_err());
        assert!(Keycode::from_str("ENTER").is_err());
    }
}
