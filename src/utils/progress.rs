// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 ApplyIQ contributors

/// Integer percentage of `filled` over `total`, rounded to nearest.
///
/// `total == 0` yields 0; callers that treat "nothing required" as
/// complete handle that case themselves.
pub fn percent(filled: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((filled * 200 + total) / (total * 2)) as u8
}

#[cfg(test)]
mod tests {
    use super::percent;

    #[test]
    fn rounds_to_nearest() {
        assert_eq!(percent(0, 4), 0);
        assert_eq!(percent(2, 4), 50);
        assert_eq!(percent(4, 4), 100);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
    }

    #[test]
    fn zero_total_is_zero() {
        assert_eq!(percent(0, 0), 0);
    }
}
