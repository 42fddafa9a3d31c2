use std::fmt;
use term_macros::*;

choices! {
    pub enum Counting {
        Sum => "sum",
        Sqrt => "sqrt",
        Log => "log",
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightError {
    LogOfZero,
}

impl fmt::Display for WeightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightError::LogOfZero => write!(f, "can't take the logarithm of a zero count"),
        }
    }
}

impl std::error::Error for WeightError {}

impl Counting {
    pub fn weigh(&self, count: u64) -> Result<f64, WeightError> {
        let count = count as f64;
        match self {
            Counting::Sum => Ok(count),
            Counting::Sqrt => Ok(count.sqrt()),
            Counting::Log if count == 0.0 => Err(WeightError::LogOfZero),
            Counting::Log => Ok(count.log10()),
        }
    }
}

/// Weights are shown as whole numbers.
pub fn rounded(weight: f64) -> i64 {
    weight.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Counting; 3] = [Counting::Sum, Counting::Sqrt, Counting::Log];

    #[test]
    fn weights() {
        assert_eq!(Counting::Sum.weigh(6), Ok(6.0));
        assert_eq!(Counting::Sqrt.weigh(16), Ok(4.0));
        assert!((Counting::Log.weigh(1000).unwrap() - 3.0).abs() < 1e-12);
        assert_eq!(rounded(Counting::Sqrt.weigh(6).unwrap()), 2);
        assert_eq!(rounded(Counting::Sqrt.weigh(7).unwrap()), 3);
        assert_eq!(rounded(Counting::Log.weigh(1).unwrap()), 0);
        assert_eq!(rounded(Counting::Log.weigh(40).unwrap()), 2);
    }

    #[test]
    fn log_of_zero() {
        assert_eq!(Counting::Log.weigh(0), Err(WeightError::LogOfZero));
        assert_eq!(Counting::Sum.weigh(0), Ok(0.0));
        assert_eq!(Counting::Sqrt.weigh(0), Ok(0.0));
    }

    #[test]
    fn higher_counts_never_weigh_less() {
        for counting in ALL {
            for low in 1..200u64 {
                let a = rounded(counting.weigh(low + 1).unwrap());
                let b = rounded(counting.weigh(low).unwrap());
                assert!(a >= b, "{} {} {}", counting, low, a);
            }
        }
    }

    #[test]
    fn flag_values() {
        assert_eq!("sqrt".parse::<Counting>(), Ok(Counting::Sqrt));
        assert!("mean".parse::<Counting>().is_err());
    }
}
