//! Front-end agnostic driver
//!
//! The verification routines at the bottom of this module encode the
//! calculator's observable behavior once and run against anything that
//! implements [`CalculatorDriver`]: the headless [`Calculator`] and the
//! terminal UI alike.

use crate::core::{CalcResult, Calculator, ERROR_DISPLAY};

/// Anything that accepts button presses and shows a display
pub trait CalculatorDriver {
    /// Presses the button with this label
    fn press(&mut self, label: &str) -> CalcResult<()>;

    /// Returns the current display text
    fn display(&self) -> String;

    /// Returns the calculator to its start-up state
    fn clear(&mut self);

    /// Presses each label in order, returning the display after each one
    fn press_sequence(&mut self, labels: &[&str]) -> CalcResult<Vec<String>> {
        labels
            .iter()
            .map(|label| {
                self.press(label)?;
                Ok(self.display())
            })
            .collect()
    }
}

impl CalculatorDriver for Calculator {
    fn press(&mut self, label: &str) -> CalcResult<()> {
        self.press_label(label).map(|_| ())
    }

    fn display(&self) -> String {
        Calculator::display(self).to_string()
    }

    fn clear(&mut self) {
        Calculator::clear(self);
    }
}

/// TUI driver: routes presses through the on-screen keypad
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::{CalcError, CalcResult, Variant};
    use crate::tui::CalculatorApp;

    /// Drives a [`CalculatorApp`] by focusing and activating keypad buttons
    #[derive(Debug)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl Default for TuiDriver {
        fn default() -> Self {
            Self::new()
        }
    }

    impl TuiDriver {
        /// Creates a driver over a basic calculator app
        #[must_use]
        pub fn new() -> Self {
            Self::with_variant(Variant::Basic)
        }

        /// Creates a driver over an app of the given variant
        #[must_use]
        pub fn with_variant(variant: Variant) -> Self {
            Self {
                app: CalculatorApp::new(variant),
            }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, label: &str) -> CalcResult<()> {
            let (row, col) = self
                .app
                .keypad()
                .position_of_label(label)
                .ok_or_else(|| CalcError::UnknownToken(label.to_string()))?;
            self.app.select(row, col);
            self.app.press_selected();
            Ok(())
        }

        fn display(&self) -> String {
            self.app.display().to_string()
        }

        fn clear(&mut self) {
            self.app.clear();
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Unified verification routines =====
// Each works with ANY CalculatorDriver implementation

/// `2 + 3 * 4 =` is evaluated left to right
pub fn verify_chained_evaluation<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    let steps = driver.press_sequence(&["2", "+", "3", "*", "4", "="])?;
    assert_eq!(steps[3], "5");
    assert_eq!(steps[5], "20");
    Ok(())
}

/// Division by zero shows the error and the next digit starts over
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_sequence(&["5", "/", "0", "="])?;
    assert_eq!(driver.display(), ERROR_DISPLAY);
    driver.press("7")?;
    assert_eq!(driver.display(), "7");
    driver.press("=")?;
    assert_eq!(driver.display(), "7");
    Ok(())
}

/// Pressing `=` again re-applies the last operation
pub fn verify_repeat_equals<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    let steps = driver.press_sequence(&["6", "+", "2", "=", "="])?;
    assert_eq!(steps[3], "8");
    assert_eq!(steps[4], "10");
    Ok(())
}

/// A second decimal point in the same numeral is ignored
pub fn verify_decimal_entry<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_sequence(&["1", ".", "2", ".", "3"])?;
    assert_eq!(driver.display(), "1.23");
    driver.clear();
    driver.press(".")?;
    assert_eq!(driver.display(), "0.");
    Ok(())
}

/// Whole results drop the fraction, others keep it
pub fn verify_formatting<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_sequence(&["4", "/", "2", "="])?;
    assert_eq!(driver.display(), "2");
    driver.clear();
    driver.press_sequence(&["1", "/", "3", "="])?;
    assert!(driver.display().starts_with("0.3333"));
    Ok(())
}

/// `%` divides by 100, `+/-` leaves zero alone
pub fn verify_percent_and_sign<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press("+/-")?;
    assert_eq!(driver.display(), "0");
    driver.press_sequence(&["5", "0", "%"])?;
    assert_eq!(driver.display(), "0.5");
    driver.press("+/-")?;
    assert_eq!(driver.display(), "-0.5");
    Ok(())
}

/// Scientific functions reject arguments outside their domain
///
/// Only meaningful for drivers over a scientific calculator.
pub fn verify_scientific_domain<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    driver.clear();
    driver.press_sequence(&["4", "+/-", "sqrt"])?;
    assert_eq!(driver.display(), ERROR_DISPLAY);
    driver.press_sequence(&["1", "0", "0", "log10"])?;
    assert_eq!(driver.display(), "2");
    driver.press("ln")?;
    assert!(driver.display().starts_with("0.693"));
    driver.press_sequence(&["AC", "ln"])?;
    assert_eq!(driver.display(), ERROR_DISPLAY);
    Ok(())
}

/// Runs every routine that applies to the basic keypad
pub fn verify_basic<D: CalculatorDriver>(driver: &mut D) -> CalcResult<()> {
    verify_chained_evaluation(driver)?;
    verify_division_by_zero(driver)?;
    verify_repeat_equals(driver)?;
    verify_decimal_entry(driver)?;
    verify_formatting(driver)?;
    verify_percent_and_sign(driver)
}
