/// ## Arithmetic on stack words
///
/// Stack words are 32 bits. Results wrap rather than overflow, and
/// comparisons treat both operands as signed.

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: i32, rhs: i32) -> i32 {
        (lhs as u32).wrapping_add(rhs as u32) as i32
    }

    pub fn not(val: i32) -> i32 {
        !val
    }

    pub fn less(lhs: i32, rhs: i32) -> i32 {
        if lhs < rhs {
            1
        } else {
            0
        }
    }

    /// Inline literals are read unsigned and reinterpreted, so
    /// 4294967295 is the same word as -1.
    pub fn literal(val: u32) -> i32 {
        val as i32
    }

    pub fn low_byte(val: i32) -> u8 {
        (val & 0xff) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_wraps() {
        assert_eq!(Operation::sum(2, 3), 5);
        assert_eq!(Operation::sum(-1, 1), 0);
        assert_eq!(Operation::sum(i32::max_value(), 1), i32::min_value());
        assert_eq!(Operation::sum(-1, -1), -2);
    }

    #[test]
    fn test_sum_commutes() {
        let samples = [0, 1, -1, 7, 255, i32::max_value(), i32::min_value(), -123_456];
        for a in samples.iter() {
            for b in samples.iter() {
                assert_eq!(Operation::sum(*a, *b), Operation::sum(*b, *a));
            }
        }
    }

    #[test]
    fn test_not() {
        assert_eq!(Operation::not(0), -1);
        assert_eq!(Operation::not(-1), 0);
        assert_eq!(Operation::not(5), -6);
    }

    #[test]
    fn test_less_is_signed() {
        assert_eq!(Operation::less(1, 2), 1);
        assert_eq!(Operation::less(2, 1), 0);
        assert_eq!(Operation::less(2, 2), 0);
        assert_eq!(Operation::less(-1, 0), 1);
        assert_eq!(Operation::less(Operation::literal(4_294_967_295), 0), 1);
    }

    #[test]
    fn test_low_byte() {
        assert_eq!(Operation::low_byte(-1), 255);
        assert_eq!(Operation::low_byte(0x141), 0x41);
    }
}
