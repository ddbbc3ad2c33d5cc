/// An ordered list of literal substring rewrites.
///
/// Rules are applied one after another over the whole string, so every rule
/// sees the output of the rules before it.
#[derive(Debug, Clone, Copy)]
pub struct Replacer {
    rules: &'static [(&'static str, &'static str)],
}

impl Replacer {
    pub const fn new(rules: &'static [(&'static str, &'static str)]) -> Self {
        Self { rules }
    }

    pub fn replace(&self, input: &str) -> String {
        self.rules
            .iter()
            .fold(input.to_string(), |acc, (pattern, replacement)| {
                acc.replace(pattern, replacement)
            })
    }
}

/// Parses a registry value as a non-negative integer, falling back to 0.
///
/// Range values such as "44-252" and any other non-numeric text map to 0.
pub fn parse_value(value: &str) -> u32 {
    value.parse().unwrap_or(0)
}
