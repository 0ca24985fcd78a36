mod repl;

use clap::{Parser, Subcommand};
use engine::eval::{evaluate, Environment};
use engine::finance::{self, Frequency};
use engine::graph::{self, ViewWindow};
use engine::matrix::Matrix;
use engine::polynomial::Polynomial;
use engine::solver::{self, QuadraticRoots};
use engine::stats;
use engine::timecard::{self, TimeEntry};
use engine::units;
use engine::EngineError;
use parser::ast::Expr;

#[derive(Parser)]
#[command(
    name = "mathkit",
    version,
    about = "Calculator toolkit: expressions, equations, matrices, polynomials, statistics, units, finance, and time cards"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Evaluate an arithmetic expression
    Eval {
        #[arg(allow_hyphen_values = true)]
        expression: String,

        /// Variable bindings, like -v x=2
        #[arg(short = 'v', long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
    },

    /// Plot one or more functions of x on a text canvas
    Graph {
        #[arg(required = true, allow_hyphen_values = true)]
        expressions: Vec<String>,

        #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
        x_min: f64,
        #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
        x_max: f64,
        #[arg(long, default_value_t = -10.0, allow_negative_numbers = true)]
        y_min: f64,
        #[arg(long, default_value_t = 10.0, allow_negative_numbers = true)]
        y_max: f64,

        /// Samples per function across the x range
        #[arg(long, default_value_t = graph::DEFAULT_SAMPLES)]
        samples: usize,

        #[arg(long, default_value_t = 61)]
        width: usize,
        #[arg(long, default_value_t = 21)]
        height: usize,

        /// Print sampled points instead of drawing
        #[arg(long)]
        table: bool,
    },

    /// Solve equations
    Solve {
        #[command(subcommand)]
        kind: SolveCommand,
    },

    /// Matrix operations on "1,2;3,4" row-major literals
    Matrix {
        #[command(subcommand)]
        operation: MatrixCommand,
    },

    /// Polynomial arithmetic on "2x^2 + 3x - 1" style input
    Poly {
        #[command(subcommand)]
        operation: PolyCommand,
    },

    /// Summary statistics for a list of numbers
    Stats {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Convert a value between units
    Convert {
        #[arg(allow_negative_numbers = true)]
        value: f64,

        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,

        /// Unit category; inferred from the units when omitted
        #[arg(long)]
        category: Option<String>,

        /// Decimal places in the result
        #[arg(long, default_value_t = 4)]
        precision: usize,
    },

    /// List unit categories and their units
    Units {
        category: Option<String>,
    },

    /// Credit-card payoff by fixed payment or fixed term
    Payoff {
        #[arg(long)]
        balance: f64,
        /// Annual percentage rate, in percent
        #[arg(long)]
        apr: f64,
        /// Fixed monthly payment
        #[arg(long)]
        payment: Option<f64>,
        /// Fixed number of months
        #[arg(long)]
        months: Option<u32>,
    },

    /// Per-period savings needed to reach a goal
    Savings {
        #[arg(long)]
        goal: f64,
        #[arg(long, default_value_t = 0.0)]
        initial: f64,
        #[arg(long)]
        years: f64,
        /// Annual interest rate, in percent
        #[arg(long, default_value_t = 0.0)]
        rate: f64,
        /// monthly, weekly, or biweekly
        #[arg(long, default_value = "monthly")]
        frequency: String,
    },

    /// Total hours and wages from DATE=IN-OUT entries, like mon=09:00-17:30
    Timecard {
        #[arg(required = true)]
        entries: Vec<String>,

        #[arg(long, default_value_t = 15.0)]
        wage: f64,
    },

    /// Profit or loss on a stock round trip
    Stock {
        #[arg(long)]
        buy: f64,
        #[arg(long)]
        sell: f64,
        #[arg(long)]
        shares: f64,
        #[arg(long, default_value_t = 0.0)]
        buy_fee: f64,
        #[arg(long, default_value_t = 0.0)]
        sell_fee: f64,
    },

    /// Interactive scientific calculator
    Repl,
}

#[derive(Subcommand)]
enum SolveCommand {
    /// Linear equation, like "2x + 4 = 10"
    Linear {
        #[arg(allow_hyphen_values = true)]
        equation: String,
        #[arg(long, default_value = "x")]
        var: String,
    },

    /// Quadratic equation, like "x^2 - 5x + 6 = 0"
    Quadratic {
        #[arg(allow_hyphen_values = true)]
        equation: String,
        #[arg(long, default_value = "x")]
        var: String,
    },

    /// 2x2 linear system of "ax + by = c" equations
    System {
        #[arg(allow_hyphen_values = true)]
        first: String,
        #[arg(allow_hyphen_values = true)]
        second: String,
    },
}

#[derive(Subcommand)]
enum MatrixCommand {
    Add {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    Sub {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    Mul {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Multiply every element by a scalar
    Scalar {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_negative_numbers = true)]
        k: f64,
    },
    Transpose {
        #[arg(allow_hyphen_values = true)]
        a: String,
    },
    Det {
        #[arg(allow_hyphen_values = true)]
        a: String,
    },
    Invert {
        #[arg(allow_hyphen_values = true)]
        a: String,
    },
}

#[derive(Subcommand)]
enum PolyCommand {
    Add {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    Sub {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    Mul {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(allow_hyphen_values = true)]
        b: String,
    },
    /// Evaluate a polynomial at a point
    Eval {
        #[arg(allow_hyphen_values = true)]
        a: String,
        #[arg(long, allow_negative_numbers = true)]
        x: f64,
    },
}

enum CliError {
    /// Already rendered to stderr (ariadne reports)
    Reported,
    Message(String),
}

impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        CliError::Message(e.to_string())
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(error) = run(cli.command) {
        if let CliError::Message(message) = error {
            eprintln!("error: {}", message);
        }
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Eval { expression, vars } => {
            let expr = parse_or_report(&expression)?;
            let mut env = Environment::new();
            for binding in &vars {
                let (name, value) = parse_binding(binding)?;
                env.set(name, value);
            }
            let value = evaluate(&expr, &env).map_err(CliError::from)?;
            println!("{}", value);
        }

        Command::Graph {
            expressions,
            x_min,
            x_max,
            y_min,
            y_max,
            samples,
            width,
            height,
            table,
        } => {
            let window = ViewWindow {
                x_min,
                x_max,
                y_min,
                y_max,
            };
            let mut series = Vec::new();
            for source in &expressions {
                let expr = parse_or_report(source)?;
                series.push(graph::sample(&expr, &window, samples)?);
            }

            if table {
                for (source, points) in expressions.iter().zip(&series) {
                    println!("# {}", source);
                    for (x, y) in points {
                        println!("{:.6}\t{:.6}", x, y);
                    }
                }
            } else {
                print!("{}", graph::render_ascii(&series, &window, width, height)?);
            }
        }

        Command::Solve { kind } => run_solve(kind)?,
        Command::Matrix { operation } => run_matrix(operation)?,
        Command::Poly { operation } => run_poly(operation)?,

        Command::Stats { values } => {
            let data = stats::parse_values(&values.join(" "))?;
            let summary = stats::summarize(&data)?;
            println!("Count: {}", summary.count);
            println!("Sum: {}", summary.sum);
            println!("Mean: {:.2}", summary.mean);
            println!("Median: {:.2}", summary.median);
            match &summary.mode {
                Some(values) => {
                    let formatted: Vec<String> =
                        values.iter().map(|v| format!("{}", v)).collect();
                    println!("Mode: {}", formatted.join(", "));
                }
                None => println!("Mode: No mode"),
            }
            println!("Std Dev: {:.4}", summary.std_dev);
            println!("Min: {}", summary.min);
            println!("Max: {}", summary.max);
        }

        Command::Convert {
            value,
            from,
            to,
            category,
            precision,
        } => {
            let result = match &category {
                Some(category) => units::convert(category, &from, &to, value)?,
                None => units::convert_inferred(&from, &to, value)?,
            };
            println!("{} {} = {:.*} {}", value, from, precision, result, to);
        }

        Command::Units { category } => match category {
            Some(key) => print_category(units::find_category(&key)?),
            None => {
                for category in units::CATEGORIES {
                    print_category(category);
                }
            }
        },

        Command::Payoff {
            balance,
            apr,
            payment,
            months,
        } => match (payment, months) {
            (Some(payment), None) => {
                let result = finance::payoff_with_payment(balance, apr, payment)?;
                println!("Months to pay off: {}", result.months);
                println!("Total interest: ${:.2}", result.total_interest);
            }
            (None, Some(months)) => {
                let result = finance::payoff_in_months(balance, apr, months)?;
                println!("Monthly payment: ${:.2}", result.payment);
                println!("Total interest: ${:.2}", result.total_interest);
            }
            _ => {
                return Err(CliError::Message(
                    "pass exactly one of --payment or --months".to_string(),
                ));
            }
        },

        Command::Savings {
            goal,
            initial,
            years,
            rate,
            frequency,
        } => {
            let frequency = Frequency::parse(&frequency)?;
            let plan = finance::savings_goal(goal, initial, years, rate, frequency)?;
            println!("Per-period savings: ${:.2}", plan.per_period);
            println!("Total periods: {}", plan.total_periods);
            println!("Final amount: ${:.2}", plan.final_amount);
            if !plan.with_interest {
                println!("(no interest applied)");
            }
        }

        Command::Timecard { entries, wage } => {
            let entries = entries
                .iter()
                .map(|text| parse_entry(text))
                .collect::<Result<Vec<_>, _>>()?;
            let sheet = timecard::tally(&entries, wage)?;
            for (date, hours) in &sheet.daily_hours {
                println!("{}: {:.2} hours", date, hours);
            }
            println!("Total hours: {:.2}", sheet.total_hours);
            println!("Total wages: ${:.2}", sheet.total_wages);
        }

        Command::Stock {
            buy,
            sell,
            shares,
            buy_fee,
            sell_fee,
        } => {
            let outcome = finance::stock_profit(buy, sell, shares, buy_fee, sell_fee)?;
            println!("Total cost: ${:.2}", outcome.total_cost);
            println!("Total revenue: ${:.2}", outcome.total_revenue);
            println!("Profit: ${:.2}", outcome.profit);
            println!("Change: {:.2}%", outcome.percent_change);
        }

        Command::Repl => repl::run().map_err(|e| CliError::Message(e.to_string()))?,
    }

    Ok(())
}

fn run_solve(kind: SolveCommand) -> Result<(), CliError> {
    match kind {
        SolveCommand::Linear { equation, var } => {
            let solution = solver::solve_linear(&equation, &var)?;
            println!("{} = {:.4}", var, solution);
        }
        SolveCommand::Quadratic { equation, var } => {
            match solver::solve_quadratic(&equation, &var)? {
                QuadraticRoots::NoRealRoots => println!("No real solutions"),
                QuadraticRoots::OneRoot(root) => println!("{} = {:.4}", var, root),
                QuadraticRoots::TwoRoots(first, second) => {
                    println!("{}1 = {:.4}, {}2 = {:.4}", var, first, var, second);
                }
            }
        }
        SolveCommand::System { first, second } => {
            let (x, y) = solver::solve_system(&first, &second, "x", "y")?;
            println!("x = {:.4}, y = {:.4}", x, y);
        }
    }
    Ok(())
}

fn run_matrix(operation: MatrixCommand) -> Result<(), CliError> {
    let result = match operation {
        MatrixCommand::Add { a, b } => Matrix::parse(&a)?.add(&Matrix::parse(&b)?)?,
        MatrixCommand::Sub { a, b } => Matrix::parse(&a)?.sub(&Matrix::parse(&b)?)?,
        MatrixCommand::Mul { a, b } => Matrix::parse(&a)?.mul(&Matrix::parse(&b)?)?,
        MatrixCommand::Scalar { a, k } => Matrix::parse(&a)?.scale(k),
        MatrixCommand::Transpose { a } => Matrix::parse(&a)?.transpose(),
        MatrixCommand::Invert { a } => Matrix::parse(&a)?.inverse()?,
        MatrixCommand::Det { a } => {
            let det = Matrix::parse(&a)?.determinant()?;
            println!("{}", det);
            return Ok(());
        }
    };
    print_matrix(&result);
    Ok(())
}

fn run_poly(operation: PolyCommand) -> Result<(), CliError> {
    let result = match operation {
        PolyCommand::Add { a, b } => Polynomial::parse(&a)?.add(&Polynomial::parse(&b)?),
        PolyCommand::Sub { a, b } => Polynomial::parse(&a)?.sub(&Polynomial::parse(&b)?),
        PolyCommand::Mul { a, b } => Polynomial::parse(&a)?.mul(&Polynomial::parse(&b)?),
        PolyCommand::Eval { a, x } => {
            println!("{}", Polynomial::parse(&a)?.eval(x));
            return Ok(());
        }
    };
    println!("{}", result);
    Ok(())
}

/// Parse an expression, rendering any failure as an ariadne report
fn parse_or_report(source: &str) -> Result<Expr, CliError> {
    parser::parse_expression(source).map_err(|errors| {
        parser::error::report_errors("expression", source, errors);
        CliError::Reported
    })
}

/// Parse a NAME=VALUE variable binding
fn parse_binding(text: &str) -> Result<(&str, f64), CliError> {
    let invalid = || CliError::Message(format!("invalid binding '{}': use NAME=VALUE", text));
    let (name, value_text) = text.split_once('=').ok_or_else(invalid)?;
    if name.is_empty() {
        return Err(invalid());
    }
    let value: f64 = value_text.parse().map_err(|_| invalid())?;
    Ok((name, value))
}

/// Parse a DATE=IN-OUT time-card entry
fn parse_entry(text: &str) -> Result<TimeEntry, CliError> {
    let invalid = || {
        CliError::Message(format!(
            "invalid entry '{}': use DATE=IN-OUT, like mon=09:00-17:30",
            text
        ))
    };
    let (date, times) = text.split_once('=').ok_or_else(invalid)?;
    let (clock_in, clock_out) = times.split_once('-').ok_or_else(invalid)?;
    Ok(TimeEntry {
        date: date.to_string(),
        clock_in: clock_in.to_string(),
        clock_out: clock_out.to_string(),
    })
}

fn print_matrix(matrix: &Matrix) {
    for i in 0..matrix.rows() {
        let cells: Vec<String> = matrix.row(i).iter().map(|v| format!("{:.2}", v)).collect();
        println!("{}", cells.join(" "));
    }
}

fn print_category(category: &units::Category) {
    println!("{} (base: {})", category.name, category.base_unit);
    for unit in category.units {
        println!("  {:<6} {} ({})", unit.key, unit.name, unit.symbol);
    }
}
