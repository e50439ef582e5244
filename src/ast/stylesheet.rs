use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Px,
    Pct,
}

/// A length such as `10px` or `50%`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimension {
    pub value: i64,
    pub units: Units,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Box spacing, one dimension per side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Spacing {
    pub top: Dimension,
    pub right: Dimension,
    pub bottom: Dimension,
    pub left: Dimension,
}

impl Spacing {
    /// Expand the 1 to 4 value shorthand: all sides, vertical/horizontal,
    /// top/horizontal/bottom, or top/right/bottom/left.
    pub fn from_values(values: &[Dimension]) -> Option<Spacing> {
        match *values {
            [all] => Some(Spacing {
                top: all,
                right: all,
                bottom: all,
                left: all,
            }),
            [vertical, horizontal] => Some(Spacing {
                top: vertical,
                right: horizontal,
                bottom: vertical,
                left: horizontal,
            }),
            [top, horizontal, bottom] => Some(Spacing {
                top,
                right: horizontal,
                bottom,
                left: horizontal,
            }),
            [top, right, bottom, left] => Some(Spacing {
                top,
                right,
                bottom,
                left,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleValue {
    Dimension(Dimension),
    Color(Color),
    Spacing(Spacing),
}

/// A single `property: value;` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub property: String,
    pub value: RuleValue,
}

/// Rules grouped by selector. A selector that appears twice keeps the rules
/// of its last block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleSheet {
    pub selectors: BTreeMap<String, Vec<Rule>>,
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Units::Px => f.write_str("px"),
            Units::Pct => f.write_str("%"),
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.units)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

impl fmt::Display for Spacing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.top, self.right, self.bottom, self.left)
    }
}

impl fmt::Display for RuleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleValue::Dimension(dimension) => write!(f, "{dimension}"),
            RuleValue::Color(color) => write!(f, "{color}"),
            RuleValue::Spacing(spacing) => write!(f, "{spacing}"),
        }
    }
}

impl fmt::Display for StyleSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (selector, rules) in &self.selectors {
            writeln!(f, "{selector}:")?;
            for rule in rules {
                writeln!(f, "  {} = {}", rule.property, rule.value)?;
            }
        }
        Ok(())
    }
}
