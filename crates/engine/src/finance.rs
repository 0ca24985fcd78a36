// Financial calculators
//
// Savings-goal planning, credit-card payoff in both modes, and stock
// profit. Rates come in as percentages, the way the input fields hold
// them. Money results are rounded to cents.

use crate::error::{EngineError, EngineResult};

/// Iteration safety cap for the month-by-month payoff loop (100 years)
pub const PAYOFF_MONTH_CAP: u32 = 1200;

fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

// ==================== SAVINGS GOAL ====================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frequency {
    Monthly,
    Weekly,
    Biweekly,
}

impl Frequency {
    pub fn periods_per_year(self) -> f64 {
        match self {
            Frequency::Monthly => 12.0,
            Frequency::Weekly => 52.0,
            Frequency::Biweekly => 26.0,
        }
    }

    pub fn parse(text: &str) -> EngineResult<Self> {
        match text {
            "monthly" => Ok(Frequency::Monthly),
            "weekly" => Ok(Frequency::Weekly),
            "biweekly" | "bi-weekly" => Ok(Frequency::Biweekly),
            other => Err(EngineError::InvalidInput {
                what: "frequency".to_string(),
                reason: format!("'{}' is not monthly, weekly, or biweekly", other),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SavingsPlan {
    /// Amount to put aside each period
    pub per_period: f64,
    pub total_periods: f64,
    pub final_amount: f64,
    pub with_interest: bool,
}

/// How much to save per period to reach `goal` from `initial` over
/// `years`, at `annual_rate_pct` percent compounded per period.
pub fn savings_goal(
    goal: f64,
    initial: f64,
    years: f64,
    annual_rate_pct: f64,
    frequency: Frequency,
) -> EngineResult<SavingsPlan> {
    if !goal.is_finite() || goal <= 0.0 {
        return Err(EngineError::NonPositive {
            what: "goal amount".to_string(),
        });
    }
    if !initial.is_finite() || initial < 0.0 {
        return Err(EngineError::Negative {
            what: "initial amount".to_string(),
        });
    }
    if !years.is_finite() || years <= 0.0 {
        return Err(EngineError::NonPositive {
            what: "time frame".to_string(),
        });
    }
    if !annual_rate_pct.is_finite() || annual_rate_pct < 0.0 {
        return Err(EngineError::Negative {
            what: "interest rate".to_string(),
        });
    }

    let annual_rate = annual_rate_pct / 100.0;
    let periods_per_year = frequency.periods_per_year();
    let total_periods = years * periods_per_year;

    // Already there: nothing to save per period
    if initial >= goal {
        return Ok(SavingsPlan {
            per_period: 0.0,
            total_periods,
            final_amount: initial,
            with_interest: annual_rate > 0.0,
        });
    }

    let per_period = if annual_rate == 0.0 {
        (goal - initial) / total_periods
    } else {
        // Future value of an annuity with initial principal, solved for
        // the payment: F = P(1+r)^n + A((1+r)^n - 1)/r
        let r = annual_rate / periods_per_year;
        let growth = (1.0 + r).powf(total_periods);
        (goal - initial * growth) / ((growth - 1.0) / r)
    };

    Ok(SavingsPlan {
        per_period,
        total_periods,
        final_amount: goal,
        with_interest: annual_rate > 0.0,
    })
}

// ==================== CREDIT-CARD PAYOFF ====================

#[derive(Debug, Clone, PartialEq)]
pub struct FixedPaymentPayoff {
    pub months: u32,
    pub total_interest: f64,
}

/// Month-by-month amortization at a fixed payment. The payment must beat
/// the first month's interest, and the loop is capped at 1200 months.
pub fn payoff_with_payment(
    balance: f64,
    apr_pct: f64,
    payment: f64,
) -> EngineResult<FixedPaymentPayoff> {
    validate_balance_and_rate(balance, apr_pct)?;
    if !payment.is_finite() || payment <= 0.0 {
        return Err(EngineError::NonPositive {
            what: "monthly payment".to_string(),
        });
    }

    let monthly_rate = apr_pct / 100.0 / 12.0;
    let minimum = balance * monthly_rate;
    if payment <= minimum {
        return Err(EngineError::PaymentTooLow { minimum });
    }

    let mut current_balance = balance;
    let mut months = 0u32;
    let mut total_interest = 0.0;

    while current_balance > 0.0 {
        let interest = current_balance * monthly_rate;
        total_interest += interest;

        if current_balance + interest <= payment {
            // Last payment clears the balance
            months += 1;
            break;
        }

        current_balance = current_balance + interest - payment;
        months += 1;

        if months > PAYOFF_MONTH_CAP {
            return Err(EngineError::IterationCapExceeded {
                cap: PAYOFF_MONTH_CAP,
            });
        }
    }

    Ok(FixedPaymentPayoff {
        months,
        total_interest: round_cents(total_interest),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct FixedTermPayoff {
    pub payment: f64,
    pub total_interest: f64,
}

/// Closed-form annuity payment to clear the balance in `months`
pub fn payoff_in_months(balance: f64, apr_pct: f64, months: u32) -> EngineResult<FixedTermPayoff> {
    validate_balance_and_rate(balance, apr_pct)?;
    if months == 0 {
        return Err(EngineError::NonPositive {
            what: "number of months".to_string(),
        });
    }

    let monthly_rate = apr_pct / 100.0 / 12.0;
    let n = months as f64;

    let payment = if monthly_rate == 0.0 {
        balance / n
    } else {
        let growth = (1.0 + monthly_rate).powf(n);
        balance * monthly_rate * growth / (growth - 1.0)
    };

    Ok(FixedTermPayoff {
        payment: round_cents(payment),
        total_interest: round_cents(payment * n - balance),
    })
}

fn validate_balance_and_rate(balance: f64, apr_pct: f64) -> EngineResult<()> {
    if !balance.is_finite() || balance <= 0.0 {
        return Err(EngineError::NonPositive {
            what: "balance".to_string(),
        });
    }
    if !apr_pct.is_finite() || apr_pct < 0.0 {
        return Err(EngineError::Negative {
            what: "APR".to_string(),
        });
    }
    Ok(())
}

// ==================== STOCK PROFIT ====================

#[derive(Debug, Clone, PartialEq)]
pub struct StockOutcome {
    pub total_cost: f64,
    pub total_revenue: f64,
    pub profit: f64,
    pub percent_change: f64,
}

/// Profit or loss on a buy/sell round trip, fees included
pub fn stock_profit(
    buy_price: f64,
    sell_price: f64,
    shares: f64,
    buy_fee: f64,
    sell_fee: f64,
) -> EngineResult<StockOutcome> {
    for (value, what) in [
        (buy_price, "buying price"),
        (sell_price, "selling price"),
        (shares, "number of shares"),
        (buy_fee, "buying fee"),
        (sell_fee, "selling fee"),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(EngineError::Negative {
                what: what.to_string(),
            });
        }
    }

    let total_cost = buy_price * shares + buy_fee;
    if total_cost <= 0.0 {
        return Err(EngineError::NonPositive {
            what: "total buying cost".to_string(),
        });
    }

    let total_revenue = sell_price * shares - sell_fee;
    let profit = total_revenue - total_cost;

    Ok(StockOutcome {
        total_cost,
        total_revenue,
        profit,
        percent_change: profit / total_cost * 100.0,
    })
}
