//! Text command parsing and execution
//!
//! One command per line:
//!
//! ```text
//! convert <value> <unit> <target>
//! add <value> <unit> <value> <unit> [target]
//! subtract <value> <unit> <value> <unit> [target]
//! divide <value> <unit> <value> <unit>
//! equal <value> <unit> <value> <unit>
//! units <category>
//! help
//! quit
//! ```
//!
//! The category comes from the first unit. Later units are looked up in
//! that category only, except for `equal`, which compares across
//! categories and answers `false`.

use serde::Serialize;
use metron_units::arithmetic::ArithmeticOp;
use metron_units::{list_units, parse_unit, Quantity, UnitCapability, UnitInfo};
use crate::category::{Category, CategoryTask};
use crate::error::CommandError;
use crate::input::parse_value;
use crate::service;

pub const HELP: &str = "\
Commands:
  convert <value> <unit> <target>
  add <value> <unit> <value> <unit> [target]
  subtract <value> <unit> <value> <unit> [target]
  divide <value> <unit> <value> <unit>
  equal <value> <unit> <value> <unit>
  units <category>
  help
  quit
Categories: length, weight, volume, temperature";

/// A value and the unit text it was written with
#[derive(Debug, Clone, PartialEq)]
pub struct Operand {
    pub value: f64,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Convert { operand: Operand, target: String },
    Arithmetic { op: ArithmeticOp, lhs: Operand, rhs: Operand, target: Option<String> },
    Equal { lhs: Operand, rhs: Operand },
    Units { category: Category },
    Help,
    Quit,
}

/// Successful result of a command
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Response {
    Quantity {
        value: f64,
        unit: &'static str,
        symbol: &'static str,
        display: String,
    },
    Ratio { value: f64 },
    Equality { equal: bool },
    Units { category: Category, units: Vec<UnitInfo> },
    Message { text: &'static str },
}

impl Response {
    fn quantity<U: UnitCapability>(q: &Quantity<U>) -> Self {
        Response::Quantity {
            value: q.value(),
            unit: q.unit().name(),
            symbol: q.unit().symbol(),
            display: q.to_string(),
        }
    }
}

/// Parse one command line; `None` for a blank line
pub fn parse(line: &str) -> Result<Option<Command>, CommandError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&name, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match name.to_lowercase().as_str() {
        "convert" => {
            expect_args("convert", "3", args, 3..=3)?;
            Command::Convert {
                operand: operand(args[0], args[1])?,
                target: args[2].to_string(),
            }
        }
        "add" => arithmetic("add", ArithmeticOp::Add, args)?,
        "subtract" | "sub" => arithmetic("subtract", ArithmeticOp::Subtract, args)?,
        "divide" | "div" => {
            expect_args("divide", "4", args, 4..=4)?;
            Command::Arithmetic {
                op: ArithmeticOp::Divide,
                lhs: operand(args[0], args[1])?,
                rhs: operand(args[2], args[3])?,
                target: None,
            }
        }
        "equal" | "eq" => {
            expect_args("equal", "4", args, 4..=4)?;
            Command::Equal {
                lhs: operand(args[0], args[1])?,
                rhs: operand(args[2], args[3])?,
            }
        }
        "units" => {
            expect_args("units", "1", args, 1..=1)?;
            Command::Units { category: args[0].parse()? }
        }
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(CommandError::UnknownCommand(other.to_string())),
    };

    Ok(Some(command))
}

fn expect_args(
    command: &'static str,
    expected: &'static str,
    args: &[&str],
    range: std::ops::RangeInclusive<usize>,
) -> Result<(), CommandError> {
    if range.contains(&args.len()) {
        Ok(())
    } else {
        Err(CommandError::ArgCount { command, expected, got: args.len() })
    }
}

fn operand(value: &str, unit: &str) -> Result<Operand, CommandError> {
    let value = parse_value(value).ok_or_else(|| CommandError::InvalidNumber(value.to_string()))?;
    Ok(Operand { value, unit: unit.to_string() })
}

fn arithmetic(command: &'static str, op: ArithmeticOp, args: &[&str]) -> Result<Command, CommandError> {
    expect_args(command, "4 or 5", args, 4..=5)?;
    Ok(Command::Arithmetic {
        op,
        lhs: operand(args[0], args[1])?,
        rhs: operand(args[2], args[3])?,
        target: args.get(4).map(|t| t.to_string()),
    })
}

/// Execute a parsed command. Stopping on `Quit` is left to the caller.
pub fn execute(command: &Command) -> Result<Response, CommandError> {
    match command {
        Command::Convert { operand, target } => {
            Category::of_unit(&operand.unit)?.dispatch(ConvertTask { operand, target })
        }
        Command::Arithmetic { op, lhs, rhs, target } => Category::of_unit(&lhs.unit)?.dispatch(ArithmeticTask {
            op: *op,
            lhs,
            rhs,
            target: target.as_deref(),
        }),
        Command::Equal { lhs, rhs } => {
            let lhs_category = Category::of_unit(&lhs.unit)?;
            let rhs_category = Category::of_unit(&rhs.unit)?;
            lhs_category.dispatch(EqualTask { lhs, rhs, rhs_category })
        }
        Command::Units { category } => Ok(Response::Units {
            category: *category,
            units: category.dispatch(ListTask),
        }),
        Command::Help => Ok(Response::Message { text: HELP }),
        Command::Quit => Ok(Response::Message { text: "Goodbye" }),
    }
}

fn quantity<U: UnitCapability>(operand: &Operand) -> Result<Quantity<U>, CommandError> {
    Ok(Quantity::new(operand.value, parse_unit::<U>(&operand.unit)?)?)
}

struct ConvertTask<'a> {
    operand: &'a Operand,
    target: &'a str,
}

impl CategoryTask for ConvertTask<'_> {
    type Output = Result<Response, CommandError>;

    fn run<U: UnitCapability>(self) -> Self::Output {
        let q = quantity::<U>(self.operand)?;
        let target = parse_unit::<U>(self.target)?;
        let converted = service::convert_value(Some(&q), Some(target))?;
        Ok(Response::quantity(&converted))
    }
}

struct ArithmeticTask<'a> {
    op: ArithmeticOp,
    lhs: &'a Operand,
    rhs: &'a Operand,
    target: Option<&'a str>,
}

impl CategoryTask for ArithmeticTask<'_> {
    type Output = Result<Response, CommandError>;

    fn run<U: UnitCapability>(self) -> Self::Output {
        let lhs = quantity::<U>(self.lhs)?;
        let rhs = quantity::<U>(self.rhs)?;
        let target = self.target.map(parse_unit::<U>).transpose()?;

        let response = match (self.op, target) {
            (ArithmeticOp::Add, None) => Response::quantity(&service::add_quantities(Some(&lhs), Some(&rhs))?),
            (ArithmeticOp::Add, target) => {
                Response::quantity(&service::add_quantities_with_target(Some(&lhs), Some(&rhs), target)?)
            }
            (ArithmeticOp::Subtract, None) => {
                Response::quantity(&service::subtract_quantities(Some(&lhs), Some(&rhs))?)
            }
            (ArithmeticOp::Subtract, target) => {
                Response::quantity(&service::subtract_quantities_with_target(Some(&lhs), Some(&rhs), target)?)
            }
            (ArithmeticOp::Divide, _) => Response::Ratio {
                value: service::divide_quantities(Some(&lhs), Some(&rhs))?,
            },
        };
        Ok(response)
    }
}

struct EqualTask<'a> {
    lhs: &'a Operand,
    rhs: &'a Operand,
    rhs_category: Category,
}

impl CategoryTask for EqualTask<'_> {
    type Output = Result<Response, CommandError>;

    fn run<U: UnitCapability>(self) -> Self::Output {
        let lhs = quantity::<U>(self.lhs)?;
        self.rhs_category.dispatch(CompareWith { lhs: &lhs, rhs: self.rhs })
    }
}

struct CompareWith<'a, U: UnitCapability> {
    lhs: &'a Quantity<U>,
    rhs: &'a Operand,
}

impl<U: UnitCapability> CategoryTask for CompareWith<'_, U> {
    type Output = Result<Response, CommandError>;

    fn run<V: UnitCapability>(self) -> Self::Output {
        let rhs = quantity::<V>(self.rhs)?;
        Ok(Response::Equality {
            equal: service::are_quantities_equal(Some(self.lhs), Some(&rhs)),
        })
    }
}

struct ListTask;

impl CategoryTask for ListTask {
    type Output = Vec<UnitInfo>;

    fn run<U: UnitCapability>(self) -> Vec<UnitInfo> {
        list_units::<U>()
    }
}
