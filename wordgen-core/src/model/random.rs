use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the uniform choices made during a walk.
///
/// The only contract is "pick one of N": `pick(n)` returns an index in
/// `0..n`. Callers never ask for `n == 0`.
pub trait RandomSource {
	fn pick(&mut self, n: usize) -> usize;

	/// Picks one element of a non-empty slice.
	fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T>
	where
		Self: Sized,
	{
		if items.is_empty() {
			return None;
		}
		items.get(self.pick(items.len()))
	}
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
	fn pick(&mut self, n: usize) -> usize {
		(**self).pick(n)
	}
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
	fn pick(&mut self, n: usize) -> usize {
		(**self).pick(n)
	}
}

/// The process-wide source: every pick goes to the thread-local `rand::rng()`.
///
/// Holds no state, so it is `Send` and each thread draws from its own generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSource;

impl RandomSource for ThreadSource {
	fn pick(&mut self, n: usize) -> usize {
		rand::rng().random_range(0..n)
	}
}

/// Adapts any `rand` generator to `RandomSource`.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
	/// A reproducible generator.
	pub fn seeded(seed: u64) -> Self {
		Self(StdRng::seed_from_u64(seed))
	}
}

impl<R: Rng> RandomSource for RngSource<R> {
	fn pick(&mut self, n: usize) -> usize {
		self.0.random_range(0..n)
	}
}

/// Replays a fixed list of indices, cycling when exhausted.
///
/// Each value is reduced modulo `n`, so a script of zeros always takes the
/// first option. Used to make walks fully deterministic.
#[derive(Debug, Clone)]
pub struct SequenceSource {
	values: Vec<usize>,
	position: usize,
}

impl SequenceSource {
	pub fn new(values: Vec<usize>) -> Self {
		Self { values, position: 0 }
	}

	/// Always picks index 0.
	pub fn zeros() -> Self {
		Self::new(vec![0])
	}
}

impl RandomSource for SequenceSource {
	fn pick(&mut self, n: usize) -> usize {
		if self.values.is_empty() {
			return 0;
		}
		let value = self.values[self.position % self.values.len()];
		self.position += 1;
		value % n
	}
}
