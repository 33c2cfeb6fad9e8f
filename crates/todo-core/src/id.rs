//! Todo id generation.

/// Number of base-36 digits after the leading underscore
pub const ID_DIGITS: usize = 9;

/// Source of fresh record ids. Uniqueness is assumed, not checked.
pub trait IdSource {
    fn next_id(&self) -> String;
}

/// Format a sample in `[0, 1)` as `_` plus its first nine base-36
/// fractional digits, e.g. `_317kdlbkp`.
///
/// Out-of-range samples are folded into `[0, 1)`; non-finite ones become zero.
pub fn format_id(sample: f64) -> String {
    let mut frac = if sample.is_finite() {
        sample.abs().fract()
    } else {
        0.0
    };

    let mut id = String::with_capacity(ID_DIGITS + 1);
    id.push('_');
    for _ in 0..ID_DIGITS {
        frac *= 36.0;
        let digit = (frac.floor() as u32).min(35);
        frac -= f64::from(digit);
        id.push(char::from_digit(digit, 36).unwrap_or('0'));
    }
    id
}

/// Deterministic ids for tests: `_000000001`, `_000000002`, ...
#[cfg(test)]
#[derive(Default)]
pub(crate) struct SequentialIds {
    next: std::cell::Cell<u32>,
}

#[cfg(test)]
impl IdSource for SequentialIds {
    fn next_id(&self) -> String {
        let n = self.next.get() + 1;
        self.next.set(n);
        format!("_{:09}", n)
    }
}
