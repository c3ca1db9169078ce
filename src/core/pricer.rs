/// Price for acquiring slot `slot_number` under a linear schedule: the first
/// slot is free, the second costs `base`, and each one after that costs
/// `step` more than the previous.
///
/// The ordinal is floored and held at 2 before the formula runs, so
/// fractional or sub-2 inputs cannot reach it. The raw value is rounded to
/// the nearest integer and floored at zero, so a misconfigured negative
/// `step` can never produce a negative price. Total over finite inputs;
/// callers validate finiteness before handing values in.
pub fn slot_price(slot_number: f64, base: f64, step: f64) -> u64 {
    if slot_number <= 1.0 {
        return 0;
    }

    let n = slot_number.floor().max(2.0);
    let raw = base + step * (n - 2.0);

    raw.round().max(0.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_slot_is_free() {
        assert_eq!(slot_price(1.0, 100.0, 50.0), 0);
        assert_eq!(slot_price(0.0, 100.0, 50.0), 0);
        assert_eq!(slot_price(-3.0, 100.0, 50.0), 0);
        // Free even under negative configuration
        assert_eq!(slot_price(1.0, -100.0, -50.0), 0);
    }

    #[test]
    fn test_linear_schedule() {
        assert_eq!(slot_price(2.0, 100.0, 50.0), 100);
        assert_eq!(slot_price(3.0, 100.0, 50.0), 150);
        assert_eq!(slot_price(5.0, 100.0, 50.0), 250);
    }

    #[test]
    fn test_negative_raw_value_clamps_to_zero() {
        assert_eq!(slot_price(2.0, -10.0, 5.0), 0);
        assert_eq!(slot_price(4.0, 10.0, -50.0), 0);
    }

    #[test]
    fn test_fractional_ordinal_is_floored() {
        assert_eq!(slot_price(2.9, 100.0, 50.0), slot_price(2.0, 100.0, 50.0));
        assert_eq!(slot_price(5.001, 100.0, 50.0), 250);
    }

    #[test]
    fn test_sub_two_ordinals_above_one_price_as_slot_two() {
        // 1.5 is not free, floors to 1, and is then held at 2 by the
        // normalization
        assert_eq!(slot_price(1.5, 100.0, 50.0), 100);
    }

    #[test]
    fn test_price_is_rounded_to_nearest_integer() {
        assert_eq!(slot_price(2.0, 99.4, 0.0), 99);
        assert_eq!(slot_price(2.0, 99.5, 0.0), 100);
        assert_eq!(slot_price(3.0, 100.0, 0.25), 100);
    }

    #[test]
    fn test_monotonic_for_nonnegative_config() {
        let mut previous = slot_price(2.0, 100.0, 50.0);
        for n in 3..32 {
            let current = slot_price(n as f64, 100.0, 50.0);
            assert!(current >= previous, "price decreased at slot {}", n);
            previous = current;
        }
    }

    #[test]
    fn test_zero_step_flattens_schedule() {
        assert_eq!(slot_price(2.0, 75.0, 0.0), 75);
        assert_eq!(slot_price(10.0, 75.0, 0.0), 75);
    }
}
