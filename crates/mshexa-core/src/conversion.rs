//! Conversion Engine
//!
//! Mutual derivation between the exchange rate, NTD and Mesos fields.
//! The rate is entered in units of ten thousand Mesos per NTD.

use crate::chinese::format_chinese_money;
use crate::config::DEFAULT_UNIT_MULTIPLIER;
use crate::number::{format_number, group_digits, parse_number, parse_rate, round_to, to_fixed};

/// The field whose edit triggered a recomputation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Rate,
    Ntd,
    Mesos,
}

/// Raw text of the three inputs at the time of the edit
#[derive(Debug, Clone, Copy)]
pub struct ConversionInputs<'a> {
    pub rate: &'a str,
    pub ntd: &'a str,
    pub mesos: &'a str,
}

/// Writes produced by one recomputation. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConversionUpdate {
    pub ntd: Option<String>,
    pub mesos: Option<String>,
    /// Chinese magnitude display; `Some("")` clears it
    pub chinese: Option<String>,
}

impl ConversionUpdate {
    pub fn is_empty(&self) -> bool {
        self.ntd.is_none() && self.mesos.is_none() && self.chinese.is_none()
    }

    fn mesos_derived(mesos: f64) -> Self {
        Self {
            ntd: None,
            mesos: Some(format_number(mesos)),
            chinese: Some(format_chinese_money(mesos)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converter {
    multiplier: f64,
}

impl Default for Converter {
    fn default() -> Self {
        Self::new(DEFAULT_UNIT_MULTIPLIER)
    }
}

impl Converter {
    pub fn new(multiplier: f64) -> Self {
        Self { multiplier }
    }

    /// Entered rate scaled to Mesos per NTD
    pub fn scaled_rate(&self, rate_text: &str) -> f64 {
        parse_rate(rate_text) * self.multiplier
    }

    /// Recompute the dependent fields after `changed` was edited.
    ///
    /// A rate edit re-derives Mesos from NTD when NTD is set, otherwise NTD
    /// from Mesos. Invalid input reads as 0 and never raises.
    pub fn recompute(&self, inputs: &ConversionInputs<'_>, changed: Field) -> ConversionUpdate {
        let scaled = self.scaled_rate(inputs.rate);
        let ntd = parse_number(inputs.ntd);
        let mesos = parse_number(inputs.mesos);

        match changed {
            Field::Rate if ntd > 0.0 => {
                if scaled > 0.0 {
                    ConversionUpdate::mesos_derived(ntd * scaled)
                } else {
                    ConversionUpdate {
                        ntd: None,
                        mesos: Some("0".to_string()),
                        chinese: Some(String::new()),
                    }
                }
            }
            Field::Rate if mesos > 0.0 => {
                if scaled > 0.0 {
                    ConversionUpdate {
                        ntd: Some(group_digits(&to_fixed(mesos / scaled, 2))),
                        mesos: None,
                        chinese: Some(format_chinese_money(mesos)),
                    }
                } else {
                    ConversionUpdate {
                        ntd: Some("0".to_string()),
                        ..Default::default()
                    }
                }
            }
            Field::Rate => ConversionUpdate::default(),
            Field::Ntd if scaled > 0.0 => ConversionUpdate::mesos_derived(ntd * scaled),
            Field::Mesos if scaled > 0.0 => ConversionUpdate {
                ntd: Some(format_number(round_to(mesos / scaled, 4))),
                mesos: None,
                chinese: Some(format_chinese_money(mesos)),
            },
            Field::Ntd | Field::Mesos => ConversionUpdate::default(),
        }
    }
}

/// Re-format a quantity field when it loses focus
pub fn normalize_on_blur(text: &str) -> String {
    format_number(parse_number(text))
}

/// A lone `"0"` is cleared when the field gains focus
pub fn clear_zero_on_focus(text: &str) -> Option<String> {
    (text == "0").then(String::new)
}
