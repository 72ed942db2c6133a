use std::fmt;

/// A scalar remapping function over the unit interval.
///
/// Implementations compute every derived constant in their constructor and
/// keep no mutable state, so a shaper can be shared freely across threads and
/// evaluated any number of times.
pub trait Shaper: fmt::Debug + Send + Sync {
    /// Human-readable name of the shaper family.
    fn name(&self) -> &'static str;

    /// A short description of the curve's shape and controls.
    fn info(&self) -> &'static str;

    /// Map an input, nominally in `[0, 1]`, to an output.
    ///
    /// Most shapers land in `[0, 1]` for in-domain input; whether they clamp
    /// is a per-family property.
    fn eval(&self, x: f64) -> f64;

    /// Map progress `t` onto the range `start..=end` through this shaper.
    fn interpolate(&self, start: f64, end: f64, t: f64) -> f64 {
        start + (end - start) * self.eval(t)
    }

    /// Evaluate at `steps + 1` evenly spaced inputs `i / steps`.
    ///
    /// A `steps` of zero yields the single sample at `x = 0`.
    fn sample(&self, steps: u32) -> Vec<(f64, f64)> {
        if steps == 0 {
            return vec![(0.0, self.eval(0.0))];
        }
        (0..=steps)
            .map(|i| {
                let x = f64::from(i) / f64::from(steps);
                (x, self.eval(x))
            })
            .collect()
    }
}

impl<S: Shaper + ?Sized> Shaper for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn info(&self) -> &'static str {
        (**self).info()
    }

    fn eval(&self, x: f64) -> f64 {
        (**self).eval(x)
    }
}

impl<S: Shaper + ?Sized> Shaper for &S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn info(&self) -> &'static str {
        (**self).info()
    }

    fn eval(&self, x: f64) -> f64 {
        (**self).eval(x)
    }
}

/// Adaptor methods available on every sized [`Shaper`].
pub trait ShaperExt: Shaper + Sized {
    /// Wrap the shaper so `hook(x, y)` runs after every evaluation.
    ///
    /// The wrapped shaper's output is returned unchanged.
    fn inspect<F>(self, hook: F) -> Inspect<Self, F>
    where
        F: Fn(f64, f64) + Send + Sync,
    {
        Inspect { inner: self, hook }
    }
}

impl<S: Shaper + Sized> ShaperExt for S {}

/// A shaper that reports each `(x, y)` pair to a callback.
///
/// Created by [`ShaperExt::inspect`].
pub struct Inspect<S, F> {
    /// The shaper doing the work.
    inner: S,
    /// Callback receiving every evaluated pair.
    hook: F,
}

impl<S, F> Inspect<S, F> {
    /// Unwrap the inner shaper, dropping the hook.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: fmt::Debug, F> fmt::Debug for Inspect<S, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inspect")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

impl<S, F> Shaper for Inspect<S, F>
where
    S: Shaper,
    F: Fn(f64, f64) + Send + Sync,
{
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn info(&self) -> &'static str {
        self.inner.info()
    }

    fn eval(&self, x: f64) -> f64 {
        let y = self.inner.eval(x);
        (self.hook)(x, y);
        y
    }
}
