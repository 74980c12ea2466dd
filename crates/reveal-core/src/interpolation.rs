//! Piecewise-linear mapping from an input range to an output range.
//!
//! Everything offset-driven in a carousel (pill fade, pill slide, dot width)
//! is one of these evaluated against the current scroll offset. Evaluation is
//! pure, so the same offset always renders the same frame.

use smallvec::SmallVec;

use crate::{Error, Result};

type Points = SmallVec<[f32; 4]>;

/// What happens outside the first/last breakpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Extrapolate {
    /// Hold the nearest end output.
    #[default]
    Clamp,
    /// Continue the end segment's slope.
    Extend,
}

/// A validated breakpoint table.
#[derive(Clone, Debug, PartialEq)]
pub struct Interpolation {
    inputs: Points,
    outputs: Points,
    extrapolate: Extrapolate,
}

impl Interpolation {
    /// Builds a clamped interpolation, rejecting unusable breakpoints up front.
    pub fn new(inputs: &[f32], outputs: &[f32]) -> Result<Self> {
        Self::with_extrapolate(inputs, outputs, Extrapolate::Clamp)
    }

    pub fn with_extrapolate(
        inputs: &[f32],
        outputs: &[f32],
        extrapolate: Extrapolate,
    ) -> Result<Self> {
        validate(inputs, outputs)?;
        Ok(Self {
            inputs: SmallVec::from_slice(inputs),
            outputs: SmallVec::from_slice(outputs),
            extrapolate,
        })
    }

    pub fn eval(&self, x: f32) -> f32 {
        eval(x, &self.inputs, &self.outputs, self.extrapolate)
    }

    pub fn inputs(&self) -> &[f32] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[f32] {
        &self.outputs
    }
}

/// One-shot form of [`Interpolation::eval`]; validates on every call.
pub fn interpolate(
    x: f32,
    inputs: &[f32],
    outputs: &[f32],
    extrapolate: Extrapolate,
) -> Result<f32> {
    validate(inputs, outputs)?;
    Ok(eval(x, inputs, outputs, extrapolate))
}

fn validate(inputs: &[f32], outputs: &[f32]) -> Result<()> {
    if inputs.len() != outputs.len() {
        return Err(Error::config(format!(
            "breakpoint length mismatch: {} inputs, {} outputs",
            inputs.len(),
            outputs.len()
        )));
    }
    if inputs.len() < 2 {
        return Err(Error::config(format!(
            "need at least 2 breakpoints, got {}",
            inputs.len()
        )));
    }
    if let Some(bad) = inputs.iter().chain(outputs).find(|v| !v.is_finite()) {
        return Err(Error::config(format!("non-finite breakpoint {bad}")));
    }
    if let Some(w) = inputs.windows(2).find(|w| w[1] < w[0]) {
        return Err(Error::config(format!(
            "breakpoint inputs must be non-decreasing ({} then {})",
            w[0], w[1]
        )));
    }
    Ok(())
}

fn eval(x: f32, inputs: &[f32], outputs: &[f32], extrapolate: Extrapolate) -> f32 {
    let last = inputs.len() - 1;

    if x.is_nan() {
        return outputs[0];
    }
    if x < inputs[0] {
        return match extrapolate {
            Extrapolate::Clamp => outputs[0],
            Extrapolate::Extend => lerp_segment(x, inputs, outputs, 0).unwrap_or(outputs[0]),
        };
    }
    if x > inputs[last] {
        return match extrapolate {
            Extrapolate::Clamp => outputs[last],
            Extrapolate::Extend => {
                lerp_segment(x, inputs, outputs, last - 1).unwrap_or(outputs[last])
            }
        };
    }
    if x == inputs[last] {
        return outputs[last];
    }

    // inputs[0] <= x < inputs[last]; find the segment whose start is <= x.
    let i = inputs.partition_point(|&b| b <= x) - 1;
    if x == inputs[i] {
        return outputs[i];
    }
    lerp_segment(x, inputs, outputs, i).unwrap_or(outputs[i])
}

/// `None` for a zero-width segment (duplicate breakpoints).
fn lerp_segment(x: f32, inputs: &[f32], outputs: &[f32], i: usize) -> Option<f32> {
    let span = inputs[i + 1] - inputs[i];
    if span == 0.0 {
        return None;
    }
    let t = (x - inputs[i]) / span;
    Some(outputs[i] + (outputs[i + 1] - outputs[i]) * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_at_breakpoints() {
        let inputs = [-70.0, -50.0, 0.0, 13.7, 200.0];
        let outputs = [1.0, 0.0, 0.3, 0.77, -4.0];
        let f = Interpolation::new(&inputs, &outputs).unwrap();
        for (x, y) in inputs.iter().zip(outputs.iter()) {
            assert_eq!(f.eval(*x), *y);
        }
    }

    #[test]
    fn test_linear_between() {
        let f = Interpolation::new(&[0.0, 10.0], &[20.0, 0.0]).unwrap();
        assert!((f.eval(2.5) - 15.0).abs() < 1e-6);
        assert!((f.eval(5.0) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_clamps_outside_range() {
        let f = Interpolation::new(&[50.0, 70.0], &[0.0, 1.0]).unwrap();
        assert_eq!(f.eval(-1000.0), 0.0);
        assert_eq!(f.eval(49.9), 0.0);
        assert_eq!(f.eval(70.1), 1.0);
        assert_eq!(f.eval(f32::MAX), 1.0);
    }

    #[test]
    fn test_extend_extrapolates() {
        let f =
            Interpolation::with_extrapolate(&[0.0, 10.0], &[0.0, 1.0], Extrapolate::Extend)
                .unwrap();
        assert!((f.eval(20.0) - 2.0).abs() < 1e-6);
        assert!((f.eval(-10.0) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_three_point_peak() {
        // pagination-style peak: [prev, current, next] -> [8, 32, 8]
        let f = Interpolation::new(&[0.0, 100.0, 200.0], &[8.0, 32.0, 8.0]).unwrap();
        assert_eq!(f.eval(100.0), 32.0);
        assert!((f.eval(50.0) - 20.0).abs() < 1e-5);
        assert!((f.eval(150.0) - 20.0).abs() < 1e-5);
    }

    #[test]
    fn test_duplicate_breakpoints_step() {
        let f = Interpolation::new(&[0.0, 10.0, 10.0, 20.0], &[0.0, 1.0, 5.0, 6.0]).unwrap();
        assert_eq!(f.eval(10.0), 5.0);
        assert!((f.eval(5.0) - 0.5).abs() < 1e-6);
        assert!((f.eval(15.0) - 5.5).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_mismatched_lengths() {
        let err = Interpolation::new(&[0.0, 1.0, 2.0], &[0.0, 1.0]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_short_tables() {
        assert!(Interpolation::new(&[1.0], &[1.0]).is_err());
        assert!(interpolate(0.0, &[], &[], Extrapolate::Clamp).is_err());
    }

    #[test]
    fn test_rejects_decreasing_and_non_finite() {
        assert!(Interpolation::new(&[10.0, 0.0], &[0.0, 1.0]).is_err());
        assert!(Interpolation::new(&[0.0, f32::NAN], &[0.0, 1.0]).is_err());
        assert!(Interpolation::new(&[0.0, 1.0], &[f32::INFINITY, 1.0]).is_err());
    }

    #[test]
    fn test_free_function_matches_table() {
        let f = Interpolation::new(&[0.0, 4.0], &[1.0, 3.0]).unwrap();
        for x in [-1.0, 0.0, 1.0, 2.5, 4.0, 9.0] {
            assert_eq!(
                interpolate(x, &[0.0, 4.0], &[1.0, 3.0], Extrapolate::Clamp).unwrap(),
                f.eval(x)
            );
        }
    }
}
