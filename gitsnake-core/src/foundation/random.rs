use rand::Rng;

/// Uniform random source in `[0, 1)`.
///
/// Every random draw the engine makes (target order, synthetic activity) goes through
/// this trait, so a seeded generator or a [`ScriptedSource`] makes output reproducible.
pub trait RandomSource {
    /// Next value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;

    /// Uniform integer in `[0, upper]`.
    fn next_index(&mut self, upper: usize) -> usize {
        let u = self.next_unit().clamp(0.0, 1.0);
        ((u * (upper as f64 + 1.0)).floor() as usize).min(upper)
    }
}

impl<R: rand::RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Source replaying `values` in order.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Source whose every draw is `0.0`, which makes Fisher–Yates a rotation by one.
    pub fn zeros() -> Self {
        Self::new(vec![0.0])
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let v = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        v.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/random.rs"]
mod tests;
