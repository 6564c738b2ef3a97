// Lenient number parsing for table cells.
// Both parsers read the longest numeric prefix and ignore trailing text, so
// "1.2s" is 1.2 and "4 gold" is 4. Text with no numeric prefix never errors:
// floats become NaN and integers become None.

pub fn parse_float(cell: &str) -> f64 {
    let s = cell.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+') | Some(b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

pub fn parse_int(cell: &str) -> Option<i64> {
    let s = cell.trim_start();
    let bytes = s.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+') | Some(b'-')));
    let digits = count_digits(&bytes[sign..]);
    if digits == 0 {
        return None;
    }
    s[..sign + digits].parse::<i64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_reads_numeric_prefix() {
        assert_eq!(parse_float("1.2"), 1.2);
        assert_eq!(parse_float("  0.75 "), 0.75);
        assert_eq!(parse_float("1.2abc"), 1.2);
        assert_eq!(parse_float("-3"), -3.0);
        assert_eq!(parse_float(".5"), 0.5);
        assert_eq!(parse_float("5."), 5.0);
        assert_eq!(parse_float("1e3"), 1000.0);
        assert_eq!(parse_float("2e"), 2.0);
        assert_eq!(parse_float("1,200"), 1.0);
        assert_eq!(parse_float("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn float_without_prefix_is_nan() {
        assert!(parse_float("").is_nan());
        assert!(parse_float("abc").is_nan());
        assert!(parse_float(".").is_nan());
        assert!(parse_float("-").is_nan());
    }

    #[test]
    fn int_truncates_at_first_non_digit() {
        assert_eq!(parse_int("4"), Some(4));
        assert_eq!(parse_int(" 4.5"), Some(4));
        assert_eq!(parse_int("12 gold"), Some(12));
        assert_eq!(parse_int("-2"), Some(-2));
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("N/A"), None);
        assert_eq!(parse_int("+"), None);
    }
}
