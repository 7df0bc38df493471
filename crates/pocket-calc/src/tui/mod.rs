//! Terminal front-end
//!
//! A thin shell over [`Calculator`](crate::core::Calculator): keys become
//! tokens, the keypad is drawn from its descriptors.

mod app;
mod input;
mod keypad;
mod runner;
mod ui;

pub use app::CalculatorApp;
pub use input::{Direction, InputHandler, KeyAction};
pub use keypad::{swatch_color, KeypadWidget};
pub use runner::run;
pub use ui::{render, CalculatorUI};
