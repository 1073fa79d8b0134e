//! Formatting utilities for terminal output

use crate::core::{Band, EncodedRecord};

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Group digits in thousands: 54885 -> "54,885"
#[must_use]
pub fn format_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Record marks of one band, split into groups of ten for readability
#[must_use]
pub fn band_marks(record: &EncodedRecord, band: Band) -> String {
    let marks: Vec<char> = record.band_marks(band).iter().map(|m| m.to_char()).collect();
    marks
        .chunks(10)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        let bar = create_progress_bar(5.0, 0.0, 4);
        assert_eq!(bar, "░░░░");
    }

    #[test]
    fn thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(225), "225");
        assert_eq!(format_thousands(9000), "9,000");
        assert_eq!(format_thousands(54885), "54,885");
        assert_eq!(format_thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn band_marks_grouped() {
        let record = EncodedRecord::new("s");
        let text = band_marks(&record, Band::Medium);
        assert_eq!(text, ".......... .......... .......... ..........");
    }
}
