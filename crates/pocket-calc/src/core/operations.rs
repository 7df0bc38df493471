//! Binary operators and scientific functions
//!
//! Operators are evaluated strictly left to right by the engine, so there is
//! no precedence or associativity here: just the arithmetic and its failure
//! modes.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Pending binary operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Operation {
    /// Addition (+), also the operator a fresh calculator starts with
    #[default]
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Power (x^y), scientific only
    Power,
}

impl Operation {
    /// All operators, in keypad order
    pub const ALL: [Self; 5] = [
        Self::Divide,
        Self::Multiply,
        Self::Subtract,
        Self::Add,
        Self::Power,
    ];

    /// Returns the button label for this operator
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "x^y",
        }
    }

    /// Parses a button label
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// True for operators only present on the scientific keypad
    #[must_use]
    pub const fn is_scientific(&self) -> bool {
        matches!(self, Self::Power)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Applies `op` to `a` and `b`
pub fn calculate(a: f64, b: f64, op: Operation) -> CalcResult<f64> {
    let result = match op {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
        Operation::Divide => {
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
        Operation::Power => a.powf(b),
    };
    check_finite(result)
}

/// Single-argument scientific function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryFunction {
    /// Sine, radians
    Sin,
    /// Cosine, radians
    Cos,
    /// Tangent, radians
    Tan,
    /// Natural logarithm
    Ln,
    /// Base-10 logarithm
    Log10,
    /// Square root
    Sqrt,
}

impl UnaryFunction {
    /// All functions, in keypad order
    pub const ALL: [Self; 6] = [
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Ln,
        Self::Log10,
        Self::Sqrt,
    ];

    /// Returns the button label
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Sqrt => "sqrt",
        }
    }

    /// Parses a button label
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.name() == name)
    }

    /// Evaluates the function, rejecting arguments outside its real domain
    pub fn apply(self, x: f64) -> CalcResult<f64> {
        let result = match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Ln | Self::Log10 if x <= 0.0 => return Err(self.domain_error(x)),
            Self::Ln => x.ln(),
            Self::Log10 => x.log10(),
            Self::Sqrt if x < 0.0 => return Err(self.domain_error(x)),
            Self::Sqrt => x.sqrt(),
        };
        check_finite(result)
    }

    fn domain_error(self, value: f64) -> CalcError {
        CalcError::Domain {
            function: self,
            value,
        }
    }
}

impl fmt::Display for UnaryFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

fn check_finite(result: f64) -> CalcResult<f64> {
    if result.is_finite() {
        Ok(result)
    } else {
        Err(CalcError::NonFinite(result))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // --- Operation enum tests ---

    #[test]
    fn test_operation_symbols() {
        assert_eq!(Operation::Add.symbol(), "+");
        assert_eq!(Operation::Subtract.symbol(), "-");
        assert_eq!(Operation::Multiply.symbol(), "*");
        assert_eq!(Operation::Divide.symbol(), "/");
        assert_eq!(Operation::Power.symbol(), "x^y");
    }

    #[test]
    fn test_operation_from_symbol() {
        for op in Operation::ALL {
            assert_eq!(Operation::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(Operation::from_symbol("^"), None);
        assert_eq!(Operation::from_symbol("%"), None);
    }

    #[test]
    fn test_operation_default_is_add() {
        assert_eq!(Operation::default(), Operation::Add);
    }

    #[test]
    fn test_only_power_is_scientific() {
        let scientific: Vec<_> = Operation::ALL
            .into_iter()
            .filter(Operation::is_scientific)
            .collect();
        assert_eq!(scientific, vec![Operation::Power]);
    }

    // --- calculate ---

    #[test]
    fn test_calculate_basic_arithmetic() {
        assert_eq!(calculate(2.0, 3.0, Operation::Add), Ok(5.0));
        assert_eq!(calculate(2.0, 3.0, Operation::Subtract), Ok(-1.0));
        assert_eq!(calculate(2.0, 3.0, Operation::Multiply), Ok(6.0));
        assert_eq!(calculate(3.0, 2.0, Operation::Divide), Ok(1.5));
        assert_eq!(calculate(2.0, 10.0, Operation::Power), Ok(1024.0));
    }

    #[test]
    fn test_calculate_divide_by_zero() {
        assert_eq!(
            calculate(5.0, 0.0, Operation::Divide),
            Err(CalcError::DivisionByZero)
        );
        assert_eq!(
            calculate(0.0, 0.0, Operation::Divide),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_calculate_divide_by_negative_zero() {
        assert_eq!(
            calculate(1.0, -0.0, Operation::Divide),
            Err(CalcError::DivisionByZero)
        );
    }

    #[test]
    fn test_calculate_overflow() {
        assert!(matches!(
            calculate(f64::MAX, f64::MAX, Operation::Add),
            Err(CalcError::NonFinite(_))
        ));
        assert!(matches!(
            calculate(10.0, 400.0, Operation::Power),
            Err(CalcError::NonFinite(_))
        ));
    }

    #[test]
    fn test_calculate_power_of_negative_base_fraction() {
        assert!(matches!(
            calculate(-8.0, 1.0 / 3.0, Operation::Power),
            Err(CalcError::NonFinite(_))
        ));
    }

    #[test]
    fn test_calculate_zero_to_negative_power() {
        assert!(calculate(0.0, -1.0, Operation::Power).is_err());
    }

    // --- UnaryFunction ---

    #[test]
    fn test_unary_names_round_trip() {
        for func in UnaryFunction::ALL {
            assert_eq!(UnaryFunction::from_name(func.name()), Some(func));
        }
        assert_eq!(UnaryFunction::from_name("log"), None);
    }

    #[test]
    fn test_trig_uses_radians() {
        assert_eq!(UnaryFunction::Sin.apply(0.0), Ok(0.0));
        assert_eq!(UnaryFunction::Cos.apply(0.0), Ok(1.0));
        let half_pi = UnaryFunction::Sin.apply(std::f64::consts::FRAC_PI_2).unwrap();
        assert!((half_pi - 1.0).abs() < 1e-12);
        assert_eq!(UnaryFunction::Tan.apply(0.0), Ok(0.0));
    }

    #[test]
    fn test_logarithms() {
        assert_eq!(UnaryFunction::Ln.apply(1.0), Ok(0.0));
        assert_eq!(UnaryFunction::Log10.apply(1000.0), Ok(3.0));
    }

    #[test]
    fn test_logarithm_domain() {
        for func in [UnaryFunction::Ln, UnaryFunction::Log10] {
            assert!(matches!(func.apply(0.0), Err(CalcError::Domain { .. })));
            assert!(matches!(func.apply(-1.0), Err(CalcError::Domain { .. })));
        }
    }

    #[test]
    fn test_sqrt() {
        assert_eq!(UnaryFunction::Sqrt.apply(16.0), Ok(4.0));
        assert_eq!(UnaryFunction::Sqrt.apply(0.0), Ok(0.0));
        assert_eq!(
            UnaryFunction::Sqrt.apply(-4.0),
            Err(CalcError::Domain {
                function: UnaryFunction::Sqrt,
                value: -4.0
            })
        );
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e12f64..1e12, b in -1e12f64..1e12) {
            prop_assert_eq!(
                calculate(a, b, Operation::Add),
                calculate(b, a, Operation::Add)
            );
        }

        #[test]
        fn prop_divide_by_nonzero_is_ok(a in -1e12f64..1e12, b in 1e-3f64..1e12) {
            prop_assert!(calculate(a, b, Operation::Divide).is_ok());
            prop_assert!(calculate(a, -b, Operation::Divide).is_ok());
        }

        #[test]
        fn prop_sqrt_nonnegative(x in 0f64..1e300) {
            let root = UnaryFunction::Sqrt.apply(x).unwrap();
            prop_assert!(root >= 0.0);
        }
    }
}
