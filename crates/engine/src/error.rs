// Error handling for the calculator engines
//
// Every engine surfaces its failures as a variant here; the CLI prints the
// Display form and exits non-zero. Errors are local validation failures,
// never fatal to the process.

use std::fmt;

/// Calculator engine error types
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// Identifier with no binding in the evaluation environment
    UndefinedVariable { name: String },

    /// Call to a function the evaluator does not know
    UnknownFunction { name: String },

    /// Known function called with the wrong number of arguments
    WrongArity {
        function: String,
        expected: usize,
        found: usize,
    },

    /// Element-wise matrix operation on differently shaped operands
    DimensionMismatch {
        operation: String,
        lhs: (usize, usize),
        rhs: (usize, usize),
    },

    /// Matrix dimensions outside the supported 1..=5 range
    DimensionOutOfRange { rows: usize, cols: usize },

    /// Determinant or inverse of a non-square matrix
    NotSquare { rows: usize, cols: usize },

    /// Inverse of a matrix whose determinant is zero
    SingularMatrix,

    /// Equation text did not parse into the requested form
    InvalidEquation { reason: String },

    /// Linear equation whose variable cancels out
    DegenerateLinear,

    /// 2x2 system with zero determinant
    NoUniqueSolution,

    /// Unit conversion against an unknown category
    UnknownCategory { name: String },

    /// Unit conversion against an unknown unit
    UnknownUnit { category: String, unit: String },

    /// Malformed input text (numbers, matrices, entries)
    InvalidInput { what: String, reason: String },

    /// A quantity that must be strictly positive was not
    NonPositive { what: String },

    /// A quantity that must be non-negative was not
    Negative { what: String },

    /// Payoff payment does not cover the first month's interest
    PaymentTooLow { minimum: f64 },

    /// Amortization ran past the iteration safety cap
    IterationCapExceeded { cap: u32 },

    /// Clock time outside 24-hour HH:MM format
    InvalidTime { text: String },

    /// An input collection that must not be empty was empty
    EmptyInput { what: String },

    /// General error with message
    General(String),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::UndefinedVariable { name } => {
                write!(f, "undefined variable '{}'", name)
            }
            EngineError::UnknownFunction { name } => {
                write!(f, "unknown function '{}'", name)
            }
            EngineError::WrongArity {
                function,
                expected,
                found,
            } => {
                write!(
                    f,
                    "{}() takes {} argument{}, found {}",
                    function,
                    expected,
                    if *expected == 1 { "" } else { "s" },
                    found
                )
            }
            EngineError::DimensionMismatch {
                operation,
                lhs,
                rhs,
            } => {
                write!(
                    f,
                    "cannot {} a {}x{} matrix and a {}x{} matrix",
                    operation, lhs.0, lhs.1, rhs.0, rhs.1
                )
            }
            EngineError::DimensionOutOfRange { rows, cols } => {
                write!(
                    f,
                    "matrix dimensions {}x{} are outside the supported 1..=5 range",
                    rows, cols
                )
            }
            EngineError::NotSquare { rows, cols } => {
                write!(f, "matrix must be square, got {}x{}", rows, cols)
            }
            EngineError::SingularMatrix => {
                write!(f, "matrix is not invertible (determinant is 0)")
            }
            EngineError::InvalidEquation { reason } => {
                write!(f, "invalid equation: {}", reason)
            }
            EngineError::DegenerateLinear => {
                write!(f, "not a valid linear equation: the variable cancels out")
            }
            EngineError::NoUniqueSolution => {
                write!(f, "no unique solution exists (determinant is 0)")
            }
            EngineError::UnknownCategory { name } => {
                write!(f, "unknown unit category '{}'", name)
            }
            EngineError::UnknownUnit { category, unit } => {
                write!(f, "unknown unit '{}' in category '{}'", unit, category)
            }
            EngineError::InvalidInput { what, reason } => {
                write!(f, "invalid {}: {}", what, reason)
            }
            EngineError::NonPositive { what } => {
                write!(f, "{} must be greater than zero", what)
            }
            EngineError::Negative { what } => {
                write!(f, "{} cannot be negative", what)
            }
            EngineError::PaymentTooLow { minimum } => {
                write!(
                    f,
                    "monthly payment is too low to pay off the debt; it must exceed the monthly interest of {:.2}",
                    minimum
                )
            }
            EngineError::IterationCapExceeded { cap } => {
                write!(f, "payoff would take more than {} months", cap)
            }
            EngineError::InvalidTime { text } => {
                write!(f, "invalid time '{}': use HH:MM in 24-hour format", text)
            }
            EngineError::EmptyInput { what } => {
                write!(f, "no {} entered", what)
            }
            EngineError::General(msg) => write!(f, "{}", msg),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
