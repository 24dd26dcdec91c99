//! Free-text ingredient line parsing.
//!
//! A line is lower-cased, unit synonyms are rewritten to their canonical form
//! and parenthetical asides are dropped. The remaining tokens are then handed
//! to an ordered list of matcher rules; the first rule that produces an
//! [`Ingredient`] wins and there is no backtracking.
//!
//! The parser is a heuristic. It never fails: a line no rule understands is
//! kept verbatim with no quantity.

use log::trace;

use crate::model::Ingredient;
use crate::units::UnitTable;

/// A matcher rule: a pure function from the tokens of a normalized line to an
/// ingredient, or `None` when the rule does not apply.
pub type MatchRule = fn(&[&str]) -> Option<Ingredient>;

pub struct IngredientParser {
    rules: Vec<(&'static str, MatchRule)>,
}

impl Default for IngredientParser {
    fn default() -> Self {
        Self {
            rules: vec![
                ("unit", match_unit as MatchRule),
                ("count", match_count as MatchRule),
                ("plain", match_plain as MatchRule),
            ],
        }
    }
}

impl IngredientParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse every non-empty line, preserving order
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Vec<Ingredient> {
        lines
            .iter()
            .filter_map(|line| self.parse_line(line.as_ref()))
            .collect()
    }

    /// Parse a single line; `None` only for blank lines
    pub fn parse_line(&self, line: &str) -> Option<Ingredient> {
        let normalized = normalize_line(line);
        let tokens: Vec<&str> = normalized.split_whitespace().collect();
        if tokens.is_empty() {
            return None;
        }

        self.rules.iter().find_map(|(name, rule)| {
            let parsed = rule(tokens.as_slice());
            if parsed.is_some() {
                trace!("'{}' matched rule '{}'", line, name);
            }
            parsed
        })
    }
}

/// Lower-case, drop parenthetical asides, canonicalize unit words and
/// collapse whitespace
pub fn normalize_line(line: &str) -> String {
    let lowered = line.to_lowercase();
    UnitTable::normalize(&strip_parentheticals(&lowered))
}

fn strip_parentheticals(text: &str) -> String {
    let mut out = text.to_string();
    while let Some(open) = out.find('(') {
        let Some(close) = out[open..].find(')').map(|offset| open + offset) else {
            break;
        };
        out.replace_range(open..=close, " ");
    }
    out
}

/// Numeric value of a quantity token
///
/// Accepts a vulgar fraction (`½`), an integer glued to one (`1½`), a
/// hyphenated mixed number (`1-1/2`), a textual fraction (`3/4`) and plain
/// integers or decimals. Anything else is not a quantity.
pub fn parse_fraction(token: &str) -> Option<f64> {
    let mut chars = token.chars();
    let last = chars.next_back()?;
    if let Some(fraction) = vulgar_fraction(last) {
        let whole = chars.as_str();
        if whole.is_empty() {
            return Some(fraction);
        }
        return parse_decimal(whole).map(|w| w + fraction);
    }

    if let Some((whole, fraction)) = token.split_once('-') {
        if !fraction.contains('/') {
            return None;
        }
        return Some(parse_decimal(whole)? + parse_ratio(fraction)?).filter(|v| v.is_finite());
    }

    if token.contains('/') {
        return parse_ratio(token);
    }

    parse_decimal(token)
}

fn parse_ratio(token: &str) -> Option<f64> {
    let (numerator, denominator) = token.split_once('/')?;
    let numerator = parse_decimal(numerator)?;
    let denominator = parse_decimal(denominator)?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator).filter(|v| v.is_finite())
}

// f64::from_str also takes "inf", "nan" and exponents, none of which are quantities.
// Overlong digit strings parse to infinity and are rejected too.
fn parse_decimal(token: &str) -> Option<f64> {
    let well_formed = token.chars().any(|c| c.is_ascii_digit())
        && token.chars().all(|c| c.is_ascii_digit() || c == '.');
    if !well_formed {
        return None;
    }
    token.parse().ok().filter(|v: &f64| v.is_finite())
}

fn vulgar_fraction(c: char) -> Option<f64> {
    let value = match c {
        '½' => 1.0 / 2.0,
        '⅓' => 1.0 / 3.0,
        '⅔' => 2.0 / 3.0,
        '¼' => 1.0 / 4.0,
        '¾' => 3.0 / 4.0,
        '⅕' => 1.0 / 5.0,
        '⅖' => 2.0 / 5.0,
        '⅗' => 3.0 / 5.0,
        '⅘' => 4.0 / 5.0,
        '⅙' => 1.0 / 6.0,
        '⅚' => 5.0 / 6.0,
        '⅛' => 1.0 / 8.0,
        '⅜' => 3.0 / 8.0,
        '⅝' => 5.0 / 8.0,
        '⅞' => 7.0 / 8.0,
        _ => return None,
    };
    Some(value)
}

fn sum_quantities(tokens: &[&str]) -> Option<f64> {
    tokens
        .iter()
        .map(|t| parse_fraction(t))
        .sum::<Option<f64>>()
        .filter(|v| v.is_finite())
}

/// Quantity tokens followed by a known unit: `1 1/2 cup flour`
pub fn match_unit(tokens: &[&str]) -> Option<Ingredient> {
    let unit_index = tokens.iter().position(|t| UnitTable::is_unit(t))?;
    if unit_index == 0 {
        return None;
    }
    let count = sum_quantities(&tokens[..unit_index])?;
    let ingredient = tokens[unit_index + 1..].join(" ");
    if ingredient.is_empty() {
        return None;
    }

    Some(Ingredient {
        count: Some(count),
        unit: tokens[unit_index].to_string(),
        ingredient,
    })
}

/// Quantity tokens followed by a word that is not a unit: `2 large eggs`
pub fn match_count(tokens: &[&str]) -> Option<Ingredient> {
    let quantity_len = tokens
        .iter()
        .take_while(|t| parse_fraction(t).is_some())
        .count();
    if quantity_len == 0 {
        return None;
    }
    let rest = &tokens[quantity_len..];
    match rest.first() {
        Some(first) if !UnitTable::is_unit(first) => {}
        _ => return None,
    }

    let count = sum_quantities(&tokens[..quantity_len])?;

    Some(Ingredient {
        count: Some(count),
        unit: String::new(),
        ingredient: rest.join(" "),
    })
}

/// Fallback: the whole normalized line, no quantity
pub fn match_plain(tokens: &[&str]) -> Option<Ingredient> {
    if tokens.is_empty() {
        return None;
    }
    Some(Ingredient {
        count: None,
        unit: String::new(),
        ingredient: tokens.join(" "),
    })
}
