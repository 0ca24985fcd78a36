// Scientific calculator state machine
//
// Key-driven state: a display string, one operand register, a pending
// binary operator, an optional memory register, and an append-only history
// log. Operators fold left to right as they are pressed, the way a
// pocket calculator chains "2 + 3 + 4".

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Operator::Add => a + b,
            Operator::Sub => a - b,
            Operator::Mul => a * b,
            Operator::Div => a / b,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Calculator {
    display: String,
    memory: Option<f64>,
    previous: Option<f64>,
    operation: Option<Operator>,
    clear_on_next: bool,
    history: Vec<String>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self {
            display: "0".to_string(),
            memory: None,
            previous: None,
            operation: None,
            clear_on_next: false,
            history: Vec::new(),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn memory(&self) -> Option<f64> {
        self.memory
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn current_value(&self) -> f64 {
        self.display.parse().unwrap_or(0.0)
    }

    /// Append a digit to the display; a leading "0" is replaced
    pub fn press_digit(&mut self, digit: char) -> EngineResult<()> {
        if !digit.is_ascii_digit() {
            return Err(EngineError::InvalidInput {
                what: "digit".to_string(),
                reason: format!("'{}' is not a digit", digit),
            });
        }

        if self.clear_on_next || self.display == "0" {
            self.display = digit.to_string();
            self.clear_on_next = false;
        } else {
            self.display.push(digit);
        }
        Ok(())
    }

    /// Append the decimal point; ignored when the display already has one
    pub fn press_decimal(&mut self) {
        if self.clear_on_next {
            self.display = "0.".to_string();
            self.clear_on_next = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Replace the display with a complete number
    pub fn enter_value(&mut self, text: &str) -> EngineResult<()> {
        let value: f64 = text.parse().map_err(|_| EngineError::InvalidInput {
            what: "number".to_string(),
            reason: format!("'{}' is not a number", text),
        })?;
        self.display = value.to_string();
        self.clear_on_next = false;
        Ok(())
    }

    /// Press a binary operator, folding any pending operation first
    pub fn press_operator(&mut self, symbol: char) -> EngineResult<()> {
        let op = Operator::from_symbol(symbol).ok_or_else(|| EngineError::InvalidInput {
            what: "operator".to_string(),
            reason: format!("'{}' is not one of + - * /", symbol),
        })?;

        let current = self.current_value();
        match (self.previous, self.operation) {
            (Some(previous), Some(pending)) => {
                let result = pending.apply(previous, current);
                self.history.push(format!(
                    "{} {} {} = {}",
                    previous,
                    pending.symbol(),
                    current,
                    result
                ));
                self.display = result.to_string();
                self.previous = Some(result);
            }
            _ => {
                self.history.push(format!("{} {}", current, op.symbol()));
                self.previous = Some(current);
            }
        }

        self.operation = Some(op);
        self.clear_on_next = true;
        Ok(())
    }

    /// Apply the pending operation and clear the registers.
    /// Without a pending operation this is a no-op.
    pub fn press_equals(&mut self) {
        let (Some(previous), Some(pending)) = (self.previous, self.operation) else {
            return;
        };

        let current = self.current_value();
        let result = pending.apply(previous, current);
        self.history.push(format!(
            "{} {} {} = {}",
            previous,
            pending.symbol(),
            current,
            result
        ));
        self.display = result.to_string();
        self.previous = None;
        self.operation = None;
        self.clear_on_next = true;
    }

    /// Apply a unary function button to the display value
    pub fn apply_function(&mut self, name: &str) -> EngineResult<()> {
        let value = self.current_value();
        let result = match name {
            "sin" => value.sin(),
            "cos" => value.cos(),
            "tan" => value.tan(),
            "asin" => value.asin(),
            "acos" => value.acos(),
            "atan" => value.atan(),
            "log" => value.log10(),
            "ln" => value.ln(),
            "sqrt" => value.sqrt(),
            "sqr" => value.powi(2),
            "cube" => value.powi(3),
            "recip" => 1.0 / value,
            _ => {
                return Err(EngineError::UnknownFunction {
                    name: name.to_string(),
                });
            }
        };

        self.history.push(format!("{}({}) = {}", name, value, result));
        self.display = result.to_string();
        self.clear_on_next = true;
        Ok(())
    }

    pub fn memory_add(&mut self) {
        let value = self.current_value();
        self.memory = Some(self.memory.unwrap_or(0.0) + value);
        self.history.push(format!("Memory + {}", value));
        self.clear_on_next = true;
    }

    pub fn memory_subtract(&mut self) {
        let value = self.current_value();
        self.memory = Some(self.memory.unwrap_or(0.0) - value);
        self.history.push(format!("Memory - {}", value));
        self.clear_on_next = true;
    }

    /// Recall memory into the display; a no-op when memory is empty
    pub fn memory_recall(&mut self) {
        if let Some(value) = self.memory {
            self.display = value.to_string();
            self.clear_on_next = true;
            self.history.push(format!("Memory Recall: {}", value));
        }
    }

    pub fn memory_clear(&mut self) {
        self.memory = None;
        self.history.push("Memory Clear".to_string());
    }

    /// Reset everything except memory and history
    pub fn clear(&mut self) {
        self.display = "0".to_string();
        self.previous = None;
        self.operation = None;
        self.clear_on_next = false;
        self.history.push("Clear".to_string());
    }
}
