//! Number formatting for metric cards and result tables.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Insert `,` between groups of three digits.
#[must_use]
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Price in millions with one decimal, e.g. `$12.5M`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_price(price: i64) -> String {
    format!("${:.1}M", price as f64 / 1_000_000.0)
}

/// Signed price difference, `+` only for gains, e.g. `+$0.3M` / `$0.7M`.
#[must_use]
pub fn format_difference(difference: i64) -> String {
    let sign = if difference > 0 { "+" } else { "" };
    format!("{sign}{}", format_price(difference.abs()))
}

/// Compact magnitude: `2.9B`, `1.3M`, otherwise grouped digits.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_compact(value: u64) -> String {
    if value >= 1_000_000_000 {
        format!("{:.1}B", value as f64 / 1_000_000_000.0)
    } else if value >= 1_000_000 {
        format!("{:.1}M", value as f64 / 1_000_000.0)
    } else {
        group_thousands(value)
    }
}

/// Accuracy band used for cell colouring and the status badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccuracyTier {
    High,
    Medium,
    Low,
}

impl AccuracyTier {
    #[must_use]
    pub fn from_percent(accuracy: f64) -> Self {
        if accuracy >= 95.0 {
            Self::High
        } else if accuracy >= 90.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::High => "accuracy accuracy--high",
            Self::Medium => "accuracy accuracy--medium",
            Self::Low => "accuracy accuracy--low",
        }
    }

    /// Status badge text. Only the top band counts as excellent.
    #[must_use]
    pub fn badge(self) -> &'static str {
        match self {
            Self::High => "Excellent",
            Self::Medium | Self::Low => "Good",
        }
    }
}
