//! Text post-processing of the in-game strings
//!
//! Upstream strings carry rich text markup (`<color=...>`, sprite presets,
//! ruby annotations, device-dependent layout words) and parameter
//! placeholders which are filled from numeric lists.

use regex::{Captures, Regex};

lazy_static::lazy_static! {
    static ref TAGS: Regex = Regex::new(r"<.*?>|\{SPRITE_PRESET#[^\}]+\}").expect("valid regex");
    static ref RUBY_BEGIN: Regex = Regex::new(r"\{RUBY_B#.*?\}").expect("valid regex");
    static ref DEVICE_PARAMS: Regex = Regex::new(r"(?:\{LAYOUT_[A-Z]+#[^\}]*\})+").expect("valid regex");
    static ref DEVICE_PARAM: Regex = Regex::new(r"\{LAYOUT_([A-Z]+)#([^\}]*)\}").expect("valid regex");
    static ref LAYOUT: Regex = Regex::new(r"\{LAYOUT.*?\}").expect("valid regex");
    static ref LAYOUT_WORD: Regex = Regex::new(r"\{LAYOUT.*?#(.*?)\}").expect("valid regex");
    static ref BRACES: Regex = Regex::new(r"\{[^\}]*\}").expect("valid regex");
    static ref PARAM: Regex = Regex::new(r"\{param(\d+):([^\}]*)\}").expect("valid regex");
    static ref PLACEHOLDER: Regex = Regex::new(r"#(\d+)\[(i|f\d)\](%?)").expect("valid regex");
}

/// Format a number with a fixed number of digits after the decimal point
#[inline]
pub fn format_num(digits: usize, value: f64) -> String {
    format!("{value:.digits$}")
}

/// Remove HTML-like tags and sprite presets, unescape `\n`
pub fn cleanup_text(text: &str) -> String {
    TAGS.replace_all(text, "").replace("\\n", "\n")
}

/// Remove `{RUBY_B#...}` and `{RUBY_E#}` annotations, keeping the base text
pub fn remove_ruby_tags(text: &str) -> String {
    RUBY_BEGIN.replace_all(text, "").replace("{RUBY_E#}", "")
}

/// Collapse runs of device dependent words into the PC one
///
/// `{LAYOUT_MOBILE#Tap}{LAYOUT_PC#Press}{LAYOUT_PS#Press}` -> `Press`
pub fn replace_device_params(text: &str) -> String {
    DEVICE_PARAMS.replace_all(text, |run: &Captures| {
        let mut first = None;

        for variant in DEVICE_PARAM.captures_iter(&run[0]) {
            let word = variant.get(2).map(|word| word.as_str()).unwrap_or_default();

            if &variant[1] == "PC" {
                return word.to_string();
            }

            first.get_or_insert(word);
        }

        first.unwrap_or_default().to_string()
    }).into_owned()
}

/// Replace a contiguous group of `{LAYOUT...#word}` brackets with the first word
pub fn replace_layout(text: &str) -> String {
    if !text.contains("LAYOUT") {
        return text.to_string();
    }

    let brackets = LAYOUT.find_iter(text)
        .map(|bracket| bracket.as_str())
        .collect::<Vec<_>>();

    let Some(first) = brackets.first() else {
        return text.to_string();
    };

    let Some(word) = LAYOUT_WORD.captures(first).and_then(|captures| captures.get(1)) else {
        return text.to_string();
    };

    text.replace(&brackets.concat(), word.as_str())
}

/// Format a single `{paramN:FORMAT}` value
fn format_param(format: &str, value: f64) -> Option<String> {
    match format {
        "P" => Some(format!("{}%", format_num(0, value * 100.0))),
        "I" => Some((value as i64).to_string()),

        _ => {
            let digits = format.strip_prefix('F')?;

            match digits.strip_suffix('P') {
                Some(digits) => Some(format!("{}%", format_num(digits.parse().ok()?, value * 100.0))),
                None => Some(format_num(digits.parse().ok()?, value))
            }
        }
    }
}

/// Fill `{paramN:FORMAT}` placeholders of a skill attribute
///
/// Result is split by `|`, which separates the attribute name from its value:
///
/// `1-Hit DMG|{param1:F1P}` with `[0.445]` -> `["1-Hit DMG", "44.5%"]`
pub fn replace_params(text: &str, params: &[f64]) -> Vec<String> {
    let mut text = text.to_string();

    let items = BRACES.find_iter(&text)
        .map(|item| item.as_str().to_string())
        .filter(|item| item.contains("param"))
        .collect::<Vec<_>>();

    for item in items {
        let Some(captures) = PARAM.captures(&item) else {
            continue;
        };

        let value = captures[1].parse::<usize>().ok()
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| params.get(index));

        let Some(value) = value else {
            tracing::trace!(?item, "Parameter index is out of range");

            continue;
        };

        if let Some(result) = format_param(&captures[2], *value) {
            text = text.replace(&item, &result);
        }
    }

    replace_layout(&text)
        .replace("{NON_BREAK_SPACE}", "")
        .replace('#', "")
        .split('|')
        .map(String::from)
        .collect()
}

/// Fill `#N[i]`, `#N[i]%` and `#N[fK]` placeholders from the parameters list
///
/// Percent values are multiplied by 100. Integer values are rounded half to even.
pub fn replace_placeholders(text: &str, params: &[f64]) -> String {
    PLACEHOLDER.replace_all(text, |captures: &Captures| {
        let value = captures[1].parse::<usize>().ok()
            .and_then(|index| index.checked_sub(1))
            .and_then(|index| params.get(index));

        let Some(mut value) = value.copied() else {
            return captures[0].to_string();
        };

        let percent = &captures[3] == "%";

        if percent {
            value *= 100.0;
        }

        let mut result = match captures[2].strip_prefix('f').and_then(|digits| digits.parse().ok()) {
            Some(digits) => format_num(digits, value),
            None => (value.round_ties_even() as i64).to_string()
        };

        if percent {
            result.push('%');
        }

        result
    }).into_owned()
}

/// Normalization applied to every name, description and story field
#[inline]
pub fn normalize_text(text: &str) -> String {
    replace_device_params(&remove_ruby_tags(&cleanup_text(text)))
}
