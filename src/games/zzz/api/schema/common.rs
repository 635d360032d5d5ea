use serde::Deserialize;

use crate::schema::normalized;

/// Additional stat granted on ascension
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExtraProp {
    #[serde(rename = "Prop")]
    pub id: u32,

    #[serde(rename = "Name", deserialize_with = "normalized")]
    pub name: String,

    /// Display format like `{0:0.#%}`
    #[serde(rename = "Format")]
    pub format: String,

    #[serde(rename = "Value")]
    pub value: f64
}

impl ExtraProp {
    /// `1200` with a percent format -> `12%`
    #[inline]
    pub fn formatted_value(&self) -> String {
        format_prop_value(&self.format, self.value)
    }
}

/// Percent values are stored multiplied by 100
pub(crate) fn format_prop_value(format: &str, value: f64) -> String {
    if !format.contains('%') {
        return format!("{}", value.round());
    }

    let percent = value / 100.0;

    if percent.fract() == 0.0 {
        format!("{percent:.0}%")
    } else {
        format!("{percent:.1}%")
    }
}
