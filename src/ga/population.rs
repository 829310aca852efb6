//! Population storage for the steady-state GA.

/// Fixed-size population with a parallel fitness cache.
///
/// Solutions and their cached fitness live in two vectors of equal length
/// and are only ever replaced together, so `fitness()[i]` always belongs to
/// `solutions()[i]`.
#[derive(Debug, Clone)]
pub struct Population<S> {
    solutions: Vec<S>,
    fitness: Vec<f64>,
}

impl<S> Population<S> {
    /// Builds a population from evaluated `(solution, fitness)` pairs.
    pub fn from_evaluated(members: impl IntoIterator<Item = (S, f64)>) -> Self {
        let (solutions, fitness) = members.into_iter().unzip();
        Self { solutions, fitness }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    /// Whether the population has no members.
    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    /// Member solutions.
    pub fn solutions(&self) -> &[S] {
        &self.solutions
    }

    /// Cached fitness, index-aligned with [`solutions`](Self::solutions).
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    /// Solution at `index`.
    pub fn get(&self, index: usize) -> &S {
        &self.solutions[index]
    }

    /// Index of the lowest fitness. Ties go to the lowest index.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn best_index(&self) -> usize {
        extreme_index(&self.fitness, |candidate, current| candidate < current)
    }

    /// Index of the highest fitness. Ties go to the lowest index.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn worst_index(&self) -> usize {
        extreme_index(&self.fitness, |candidate, current| candidate > current)
    }

    /// Replaces the worst member with `solution` if `fitness` is strictly
    /// better than the worst cached fitness. Returns whether it did.
    pub fn replace_worst(&mut self, solution: S, fitness: f64) -> bool {
        let worst = self.worst_index();
        if fitness < self.fitness[worst] {
            self.solutions[worst] = solution;
            self.fitness[worst] = fitness;
            true
        } else {
            false
        }
    }

    /// Consumes the population, returning the best member.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn into_best(mut self) -> (S, f64) {
        let best = self.best_index();
        let fitness = self.fitness[best];
        (self.solutions.swap_remove(best), fitness)
    }
}

fn extreme_index(fitness: &[f64], better: impl Fn(f64, f64) -> bool) -> usize {
    assert!(!fitness.is_empty(), "population must not be empty");
    let mut index = 0;
    for (i, &f) in fitness.iter().enumerate().skip(1) {
        if better(f, fitness[index]) {
            index = i;
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population(fitness: &[f64]) -> Population<char> {
        Population::from_evaluated(
            fitness
                .iter()
                .enumerate()
                .map(|(i, &f)| ((b'a' + i as u8) as char, f)),
        )
    }

    #[test]
    fn test_best_and_worst() {
        let pop = population(&[4.0, 1.0, 9.0, 1.0, 9.0]);
        assert_eq!(pop.best_index(), 1);
        assert_eq!(pop.worst_index(), 2);
    }

    #[test]
    fn test_replace_worst_strictly_better() {
        let mut pop = population(&[4.0, 1.0, 9.0]);
        assert!(pop.replace_worst('z', 3.0));
        assert_eq!(pop.solutions(), &['a', 'b', 'z']);
        assert_eq!(pop.fitness(), &[4.0, 1.0, 3.0]);
    }

    #[test]
    fn test_replace_worst_rejects_equal() {
        let mut pop = population(&[4.0, 1.0, 9.0]);
        assert!(!pop.replace_worst('z', 9.0));
        assert!(!pop.replace_worst('z', 10.0));
        assert_eq!(pop.solutions(), &['a', 'b', 'c']);
    }

    #[test]
    fn test_into_best() {
        let pop = population(&[4.0, 1.0, 9.0]);
        assert_eq!(pop.len(), 3);
        assert_eq!(pop.into_best(), ('b', 1.0));
    }

    #[test]
    #[should_panic(expected = "population must not be empty")]
    fn test_empty_best_panics() {
        population(&[]).best_index();
    }
}
