use std::fmt;

/// Logical key symbols a keypad channel can produce.
///
/// [`VirtualKey::None`] is the rest state, reported while no key on the channel is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VirtualKey {
    #[default]
    None,
    Right,
    Left,
    Up,
    Down,
    Select,
    SoftA,
    SoftB,
}

impl VirtualKey {
    pub const fn name(self) -> &'static str {
        match self {
            VirtualKey::None => "None",
            VirtualKey::Right => "Right",
            VirtualKey::Left => "Left",
            VirtualKey::Up => "Up",
            VirtualKey::Down => "Down",
            VirtualKey::Select => "Select",
            VirtualKey::SoftA => "Soft A",
            VirtualKey::SoftB => "Soft B",
        }
    }

    /// Whether this symbol stands for a pressed key
    pub const fn is_pressed(self) -> bool {
        !matches!(self, VirtualKey::None)
    }
}

impl fmt::Display for VirtualKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_default_to_none() {
        assert_eq!(VirtualKey::default(), VirtualKey::None);
        assert!(!VirtualKey::None.is_pressed());
        assert!(VirtualKey::SoftB.is_pressed());
    }

    #[test]
    fn test_should_display_name() {
        assert_eq!(VirtualKey::SoftA.to_string(), "Soft A");
        assert_eq!(VirtualKey::Select.to_string(), "Select");
    }
}
