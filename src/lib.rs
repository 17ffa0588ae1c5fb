//! # analog-keypad
//!
//! Driver for resistor-ladder analog keypads: several keys share a single ADC line
//! and are told apart by the voltage band they pull the line into.
//!
//! The [`keypad::AnalogKeypad`] dispatcher is ticked from the host main loop at a
//! fixed cadence and turns raw readings into key down, key up, long press,
//! auto-repeat and inactivity callbacks on a [`keypad::KeypadListener`].

#[macro_use]
extern crate log;

pub mod keypad;

pub use self::keypad::{
    AnalogKeypad, Channel, ChannelLayout, KeypadConfig, KeypadListener, VirtualKey,
};
