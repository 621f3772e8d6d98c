//! Design Generator - runs the search once per design version.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use super::{
    ChoiceSetsDocument, DesignError, DesignSearchEngine, DesignSpec, DesignVersion,
    ProfileEnumerator, SearchParameters,
};

/// Produces every design version for a specification.
pub struct DesignGenerator;

impl DesignGenerator {
    /// Generates `n_versions` designs with `iterations` restarts each.
    ///
    /// Version `v` (0-based) draws from its own stream seeded with
    /// `seed + v`, so versions are reproducible and distinct. After the
    /// search, each task's option order is shuffled from the same stream.
    ///
    /// # Errors
    /// - `InvalidSpec` when task/option/version counts are out of range or
    ///   the full factorial exceeds `MAX_TOTAL_PROFILES`
    /// - `InsufficientProfiles` when one task needs more profiles than exist
    pub fn generate(
        spec: &DesignSpec,
        iterations: usize,
    ) -> Result<ChoiceSetsDocument, DesignError> {
        spec.validate()?;

        let profiles = ProfileEnumerator::enumerate_for_tasks(&spec.attributes, spec.profiles_per_task)?;

        let min_diff = spec.effective_min_diff();
        if min_diff != spec.min_attribute_diff {
            warn!(
                requested = spec.min_attribute_diff,
                applied = min_diff,
                n_attributes = spec.attributes.len(),
                "Minimum attribute difference exceeds attribute count, clamping"
            );
        }

        let engine = DesignSearchEngine::new(SearchParameters {
            n_tasks: spec.tasks_per_version,
            profiles_per_task: spec.profiles_per_task,
            min_diff,
            iterations,
        });

        let mut versions = Vec::with_capacity(spec.n_versions);
        for v in 0..spec.n_versions {
            let mut rng = StdRng::seed_from_u64(spec.seed.wrapping_add(v as u64));
            let mut outcome = engine.generate(&profiles, &spec.attributes, &mut rng)?;

            for task in &mut outcome.choice_sets {
                task.shuffle_presentation(&mut rng);
            }

            let version = DesignVersion::new(v + 1, outcome.score, outcome.choice_sets);
            info!(
                version = version.version,
                balance_score = version.balance_score,
                "Generated design version"
            );
            versions.push(version);
        }

        Ok(ChoiceSetsDocument::new(spec, profiles.len(), versions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::{AttributeSpec, ValidationError};

    fn spec_2x2(min_diff: usize) -> DesignSpec {
        let attributes = AttributeSpec::builder()
            .attribute("price", ["low", "high"])
            .attribute("brand", ["X", "Y"])
            .build()
            .unwrap();
        DesignSpec {
            tasks_per_version: 2,
            profiles_per_task: 2,
            n_versions: 1,
            min_attribute_diff: min_diff,
            seed: 1,
            ..DesignSpec::new(attributes)
        }
    }

    #[test]
    fn two_by_two_forces_full_difference() {
        let doc = DesignGenerator::generate(&spec_2x2(2), 100).unwrap();

        assert_eq!(doc.total_profiles, 4);
        assert_eq!(doc.versions.len(), 1);
        assert_eq!(doc.versions[0].version, 1);
        assert_eq!(doc.versions[0].choice_sets.len(), 2);
        for task in &doc.versions[0].choice_sets {
            assert_eq!(task.len(), 2);
            assert_eq!(task.min_pairwise_diff(), Some(2));
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let spec = DesignSpec {
            n_versions: 3,
            tasks_per_version: 4,
            ..spec_2x2(1)
        };
        let a = DesignGenerator::generate(&spec, 25).unwrap();
        let b = DesignGenerator::generate(&spec, 25).unwrap();

        assert_eq!(a, b);
        assert_eq!(
            serde_json::to_string(&a).unwrap(),
            serde_json::to_string(&b).unwrap()
        );
    }

    #[test]
    fn versions_are_numbered_from_one() {
        let spec = DesignSpec {
            n_versions: 3,
            ..spec_2x2(1)
        };
        let doc = DesignGenerator::generate(&spec, 5).unwrap();
        let numbers: Vec<_> = doc.versions.iter().map(|v| v.version).collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[test]
    fn clamps_min_diff_beyond_attribute_count() {
        // min_diff 5 on 2 attributes becomes 1, which a 2x2 design can satisfy.
        let doc = DesignGenerator::generate(&spec_2x2(5), 10).unwrap();
        assert_eq!(doc.min_attribute_diff, 5);
        for task in &doc.versions[0].choice_sets {
            assert!(task.min_pairwise_diff().unwrap() >= 1);
        }
    }

    #[test]
    fn fails_when_profiles_are_insufficient() {
        let spec = DesignSpec {
            profiles_per_task: 5,
            ..spec_2x2(1)
        };
        assert_eq!(
            DesignGenerator::generate(&spec, 10),
            Err(DesignError::insufficient_profiles(4, 5))
        );
    }

    #[test]
    fn fails_on_invalid_counts() {
        let spec = DesignSpec {
            tasks_per_version: 0,
            ..spec_2x2(1)
        };
        assert!(matches!(
            DesignGenerator::generate(&spec, 10),
            Err(DesignError::InvalidSpec(_))
        ));
    }

    #[test]
    fn fails_before_enumerating_oversized_factorial() {
        let levels: Vec<String> = (0..10).map(|l| l.to_string()).collect();
        let mut builder = AttributeSpec::builder();
        for i in 0..20 {
            builder = builder.attribute(format!("attr{}", i), levels.clone());
        }
        let spec = DesignSpec::new(builder.build().unwrap());

        assert!(matches!(
            DesignGenerator::generate(&spec, 1),
            Err(DesignError::InvalidSpec(ValidationError::OutOfRange { ref field, .. }))
                if field == "attributes"
        ));
    }

    #[test]
    fn echoes_spec_fields() {
        let spec = DesignSpec {
            include_none: true,
            ..spec_2x2(2)
        };
        let doc = DesignGenerator::generate(&spec, 3).unwrap();
        assert_eq!(doc.attributes, spec.attributes);
        assert_eq!(doc.tasks_per_version, 2);
        assert_eq!(doc.profiles_per_task, 2);
        assert_eq!(doc.n_versions, 1);
        assert_eq!(doc.seed, 1);
        assert!(doc.include_none);
    }
}
