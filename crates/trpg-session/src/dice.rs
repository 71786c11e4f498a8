//! Dice formulas of the form `NdM`, `NdM+X`, `NdM-X`, or `dM`.

use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Upper bound on the number of dice in one formula.
pub const MAX_DICE: u32 = 1000;

/// A parsed dice formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceFormula {
    /// Number of dice rolled.
    pub count: u32,
    /// Sides per die.
    pub sides: u32,
    /// Flat modifier added to the sum.
    pub modifier: i32,
}

impl DiceFormula {
    /// Roll every die and add the modifier.
    pub fn roll<R: Rng + ?Sized>(&self, rng: &mut R) -> FormulaRoll {
        let rolls: Vec<u32> = (0..self.count)
            .map(|_| rng.random_range(1..=self.sides))
            .collect();
        let total = rolls.iter().map(|&v| i64::from(v)).sum::<i64>() + i64::from(self.modifier);
        FormulaRoll {
            formula: *self,
            rolls,
            total,
        }
    }
}

impl FromStr for DiceFormula {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SessionError::InvalidFormula(s.to_string());
        let expr: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        let (dice, modifier) = match expr.find(|c: char| c == '+' || c == '-') {
            Some(i) => {
                let (dice, modifier) = expr.split_at(i);
                (dice, modifier.parse::<i32>().map_err(|_| invalid())?)
            }
            None => (expr.as_str(), 0),
        };

        let (count, sides) = dice.split_once('d').ok_or_else(invalid)?;
        let count = if count.is_empty() {
            1
        } else {
            count.parse::<u32>().map_err(|_| invalid())?
        };
        let sides = sides.parse::<u32>().map_err(|_| invalid())?;
        if count == 0 || sides == 0 || count > MAX_DICE {
            return Err(invalid());
        }

        Ok(Self {
            count,
            sides,
            modifier,
        })
    }
}

impl std::fmt::Display for DiceFormula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

/// The outcome of rolling a formula.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormulaRoll {
    /// The formula that was rolled.
    pub formula: DiceFormula,
    /// Individual die values, in roll order.
    pub rolls: Vec<u32>,
    /// Sum of the dice plus the modifier.
    pub total: i64,
}

impl std::fmt::Display for FormulaRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.rolls.iter().map(|v| v.to_string()).collect();
        write!(f, "{}: [{}]", self.formula, values.join(", "))?;
        match self.formula.modifier {
            0 => {}
            m if m > 0 => write!(f, " +{m}")?,
            m => write!(f, " {m}")?,
        }
        write!(f, " = {}", self.total)
    }
}
