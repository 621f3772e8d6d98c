//! Design Search Engine - randomized restarts toward a balanced design.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::domain::foundation::{AttributeSpec, Profile};

use super::{BalanceScorer, ChoiceTask, DesignError};

/// Knobs for one search run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchParameters {
    pub n_tasks: usize,
    pub profiles_per_task: usize,
    /// Minimum attribute difference between options of a task, already clamped.
    pub min_diff: usize,
    /// Random restarts; 0 is treated as 1.
    pub iterations: usize,
}

/// Best design found by a search run.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub choice_sets: Vec<ChoiceTask>,
    pub score: f64,
}

/// Randomized local search over choice tasks.
///
/// Each iteration builds a complete set of tasks from scratch and the lowest
/// balance score wins. Ties keep the earlier attempt. The engine never owns
/// randomness: callers pass a seeded generator so runs are reproducible.
pub struct DesignSearchEngine {
    params: SearchParameters,
}

impl DesignSearchEngine {
    pub fn new(params: SearchParameters) -> Self {
        Self { params }
    }

    /// Runs every iteration and returns the most balanced attempt.
    ///
    /// # Errors
    /// `InsufficientProfiles` when fewer profiles exist than options per task.
    pub fn generate<R: Rng>(
        &self,
        profiles: &[Profile],
        spec: &AttributeSpec,
        rng: &mut R,
    ) -> Result<SearchOutcome, DesignError> {
        if profiles.is_empty() || profiles.len() < self.params.profiles_per_task {
            return Err(DesignError::insufficient_profiles(
                profiles.len(),
                self.params.profiles_per_task,
            ));
        }

        let mut best: Option<(Vec<Vec<usize>>, f64)> = None;

        for iteration in 0..self.params.iterations.max(1) {
            let attempt = self.build_attempt(profiles, rng);
            let score = BalanceScorer::score_slots(
                attempt.iter().flatten().map(|&idx| &profiles[idx]),
                spec,
            );

            let improved = best.as_ref().map_or(true, |(_, best_score)| score < *best_score);
            if improved {
                debug!(iteration, score, "Found more balanced design");
                best = Some((attempt, score));
            }
        }

        let (tasks, score) = best.unwrap_or_default();
        let choice_sets = tasks
            .into_iter()
            .map(|task| ChoiceTask::new(task.into_iter().map(|idx| profiles[idx].clone()).collect()))
            .collect();

        Ok(SearchOutcome { choice_sets, score })
    }

    /// Builds one full set of tasks as indices into `profiles`.
    fn build_attempt<R: Rng>(&self, profiles: &[Profile], rng: &mut R) -> Vec<Vec<usize>> {
        let n = profiles.len();
        let mut pool: Vec<usize> = (0..n).collect();
        pool.shuffle(rng);

        let mut tasks = Vec::with_capacity(self.params.n_tasks);
        for _ in 0..self.params.n_tasks {
            if pool.is_empty() {
                pool = (0..n).collect();
                pool.shuffle(rng);
            }
            let first = pool.remove(rng.gen_range(0..pool.len()));
            tasks.push(self.build_task(profiles, first, rng));
        }
        tasks
    }

    /// Greedily fills a task under the min-diff rule, relaxing it if needed.
    fn build_task<R: Rng>(&self, profiles: &[Profile], first: usize, rng: &mut R) -> Vec<usize> {
        let n = profiles.len();
        let target = self.params.profiles_per_task;
        let mut task = vec![first];

        let mut candidates: Vec<usize> = (0..n).filter(|&idx| idx != first).collect();
        candidates.shuffle(rng);
        for candidate in candidates {
            if task.len() >= target {
                break;
            }
            let far_enough = task
                .iter()
                .all(|&member| profiles[candidate].diff_count(&profiles[member]) >= self.params.min_diff);
            if far_enough {
                task.push(candidate);
            }
        }

        if task.len() < target {
            let mut remaining: Vec<usize> = (0..n).filter(|idx| !task.contains(idx)).collect();
            remaining.shuffle(rng);
            for candidate in remaining {
                if task.len() >= target {
                    break;
                }
                task.push(candidate);
            }
        }

        task
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::design::ProfileEnumerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn spec_3x3x2() -> AttributeSpec {
        AttributeSpec::builder()
            .attribute("price", ["$10", "$20", "$30"])
            .attribute("brand", ["A", "B", "C"])
            .attribute("size", ["small", "large"])
            .build()
            .unwrap()
    }

    fn params(min_diff: usize) -> SearchParameters {
        SearchParameters {
            n_tasks: 6,
            profiles_per_task: 3,
            min_diff,
            iterations: 50,
        }
    }

    #[test]
    fn produces_requested_shape() {
        let spec = spec_3x3x2();
        let profiles = ProfileEnumerator::enumerate(&spec);
        let engine = DesignSearchEngine::new(params(2));

        let outcome = engine
            .generate(&profiles, &spec, &mut StdRng::seed_from_u64(1))
            .unwrap();

        assert_eq!(outcome.choice_sets.len(), 6);
        for task in &outcome.choice_sets {
            assert_eq!(task.len(), 3);
            assert!(task.is_pairwise_distinct());
        }
        assert!(outcome.score >= 0.0);
    }

    #[test]
    fn same_seed_is_deterministic() {
        let spec = spec_3x3x2();
        let profiles = ProfileEnumerator::enumerate(&spec);
        let engine = DesignSearchEngine::new(params(2));

        let a = engine
            .generate(&profiles, &spec, &mut StdRng::seed_from_u64(99))
            .unwrap();
        let b = engine
            .generate(&profiles, &spec, &mut StdRng::seed_from_u64(99))
            .unwrap();

        assert_eq!(a, b);
    }

    #[test]
    fn satisfiable_min_diff_is_honored() {
        let spec = spec_3x3x2();
        let profiles = ProfileEnumerator::enumerate(&spec);
        let engine = DesignSearchEngine::new(params(2));

        let outcome = engine
            .generate(&profiles, &spec, &mut StdRng::seed_from_u64(5))
            .unwrap();

        for task in &outcome.choice_sets {
            assert!(task.min_pairwise_diff().unwrap() >= 2);
        }
    }

    #[test]
    fn unsatisfiable_min_diff_relaxes_instead_of_failing() {
        // Only two levels per attribute: three options cannot all differ in
        // every attribute, so the search must fill with relaxed picks.
        let spec = AttributeSpec::builder()
            .attribute("price", ["low", "high"])
            .attribute("brand", ["X", "Y"])
            .build()
            .unwrap();
        let profiles = ProfileEnumerator::enumerate(&spec);
        let engine = DesignSearchEngine::new(SearchParameters {
            n_tasks: 4,
            profiles_per_task: 3,
            min_diff: 2,
            iterations: 10,
        });

        let outcome = engine
            .generate(&profiles, &spec, &mut StdRng::seed_from_u64(11))
            .unwrap();

        for task in &outcome.choice_sets {
            assert_eq!(task.len(), 3);
            assert!(task.is_pairwise_distinct());
        }
    }

    #[test]
    fn more_iterations_never_score_worse() {
        let spec = spec_3x3x2();
        let profiles = ProfileEnumerator::enumerate(&spec);

        let few = DesignSearchEngine::new(SearchParameters { iterations: 1, ..params(1) })
            .generate(&profiles, &spec, &mut StdRng::seed_from_u64(8))
            .unwrap();
        let many = DesignSearchEngine::new(SearchParameters { iterations: 200, ..params(1) })
            .generate(&profiles, &spec, &mut StdRng::seed_from_u64(8))
            .unwrap();

        assert!(many.score <= few.score);
    }

    #[test]
    fn zero_iterations_still_produces_a_design() {
        let spec = spec_3x3x2();
        let profiles = ProfileEnumerator::enumerate(&spec);
        let engine = DesignSearchEngine::new(SearchParameters { iterations: 0, ..params(1) });

        let outcome = engine
            .generate(&profiles, &spec, &mut StdRng::seed_from_u64(2))
            .unwrap();
        assert_eq!(outcome.choice_sets.len(), 6);
    }

    #[test]
    fn rejects_too_few_profiles() {
        let spec = AttributeSpec::builder()
            .attribute("price", ["low", "high"])
            .build()
            .unwrap();
        let profiles = ProfileEnumerator::enumerate(&spec);
        let engine = DesignSearchEngine::new(params(1));

        let result = engine.generate(&profiles, &spec, &mut StdRng::seed_from_u64(1));
        assert_eq!(result, Err(DesignError::insufficient_profiles(2, 3)));
    }

    #[test]
    fn pool_refills_when_tasks_exceed_profiles() {
        let spec = AttributeSpec::builder()
            .attribute("price", ["low", "high"])
            .attribute("brand", ["X", "Y"])
            .build()
            .unwrap();
        let profiles = ProfileEnumerator::enumerate(&spec);
        let engine = DesignSearchEngine::new(SearchParameters {
            n_tasks: 10,
            profiles_per_task: 2,
            min_diff: 1,
            iterations: 5,
        });

        let outcome = engine
            .generate(&profiles, &spec, &mut StdRng::seed_from_u64(4))
            .unwrap();
        assert_eq!(outcome.choice_sets.len(), 10);
    }
}
