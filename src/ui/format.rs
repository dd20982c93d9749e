/// Groups digits in thousands: `12500` → `12,500`.
pub fn grouped(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    let body: String = result.chars().rev().collect();
    if value < 0 {
        format!("-{body}")
    } else {
        body
    }
}

pub fn liters(value: i64) -> String {
    format!("{} L", grouped(value))
}

pub fn kilograms(value: i64) -> String {
    format!("{} kg", grouped(value))
}

pub fn dollars(value: i64) -> String {
    format!("${}", grouped(value))
}

pub fn price_per_kg(value: f64) -> String {
    format!("${value:.2}/kg")
}

/// Share of `total` as a whole percentage, for bar widths.
pub fn share_pct(value: i64, total: i64) -> i64 {
    if total <= 0 {
        return 0;
    }
    ((value as f64 / total as f64) * 100.0).round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(grouped(0), "0");
        assert_eq!(grouped(999), "999");
        assert_eq!(grouped(2160), "2,160");
        assert_eq!(grouped(1_234_567), "1,234,567");
        assert_eq!(grouped(-4500), "-4,500");
    }

    #[test]
    fn unit_suffixes() {
        assert_eq!(liters(12_000), "12,000 L");
        assert_eq!(kilograms(120), "120 kg");
        assert_eq!(dollars(2000), "$2,000");
        assert_eq!(price_per_kg(2.5), "$2.50/kg");
    }

    #[test]
    fn share_handles_zero_total() {
        assert_eq!(share_pct(10, 0), 0);
        assert_eq!(share_pct(1, 3), 33);
        assert_eq!(share_pct(5, 5), 100);
    }
}
