//! Decimal digit helpers.

/// Sum of the decimal digits of `value`.
pub const fn digit_sum(value: u64) -> u64 {
    let mut n = value;
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Decimal digits of `value`, most significant first. Zero yields `[0]`.
pub fn digits_of(value: u64) -> Vec<u8> {
    if value == 0 {
        return vec![0];
    }
    let mut out = Vec::with_capacity(20);
    let mut n = value;
    while n > 0 {
        out.push((n % 10) as u8);
        n /= 10;
    }
    out.reverse();
    out
}

/// ASCII digits appearing in `text`, in reading order.
pub fn digits_in_text(text: &str) -> Vec<u8> {
    text.bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect()
}

/// Sum of a digit slice.
pub fn sum_digits(digits: &[u8]) -> u64 {
    digits.iter().map(|&d| u64::from(d)).sum()
}
