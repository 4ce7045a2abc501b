/// Renders an amount rounded to whole baht with thousands separators,
/// e.g. `3500.0` -> `3,500 บาท`. Halves round to even.
pub fn format_baht(amount: f64) -> String {
    let rounded = amount.round_ties_even();
    let digits = format!("{:.0}", rounded.abs());
    let mut text = group_digits(&digits);
    if rounded < 0.0 {
        text.insert(0, '-');
    }
    format!("{text} บาท")
}

fn group_digits(digits: &str) -> String {
    if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return digits.to_string();
    }

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_digits_in_threes() {
        assert_eq!(group_digits("0"), "0");
        assert_eq!(group_digits("999"), "999");
        assert_eq!(group_digits("1000"), "1,000");
        assert_eq!(group_digits("1234567"), "1,234,567");
        assert_eq!(format_baht(-25_000.0), "-25,000 บาท");
    }

    #[test]
    fn halves_round_to_even() {
        assert_eq!(format_baht(2500.5), "2,500 บาท");
        assert_eq!(format_baht(2501.5), "2,502 บาท");
        assert_eq!(format_baht(0.5), "0 บาท");
        assert_eq!(format_baht(-0.4), "0 บาท");
    }

    #[test]
    fn huge_amounts_are_not_capped() {
        assert_eq!(format_baht(1e20), "100,000,000,000,000,000,000 บาท");
        assert_eq!(format_baht(f64::INFINITY), "inf บาท");
    }

    #[test]
    fn rounds_to_whole_baht() {
        assert_eq!(format_baht(3500.0), "3,500 บาท");
        assert_eq!(format_baht(499.6), "500 บาท");
        assert_eq!(format_baht(12.2), "12 บาท");
    }
}
