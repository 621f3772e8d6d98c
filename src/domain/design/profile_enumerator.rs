//! Profile Enumerator - full factorial expansion of an attribute specification.

use crate::domain::foundation::{AttributeSpec, Profile};

use super::DesignError;

/// Expands attribute specifications into every possible profile.
pub struct ProfileEnumerator;

impl ProfileEnumerator {
    /// Returns the Cartesian product of all attribute levels.
    ///
    /// Order is nested iteration in specification order: the first attribute
    /// varies slowest and the last varies fastest.
    pub fn enumerate(spec: &AttributeSpec) -> Vec<Profile> {
        let mut profiles = vec![Profile::new()];

        for (attribute, levels) in spec.iter() {
            profiles = profiles
                .iter()
                .flat_map(|partial| {
                    levels
                        .iter()
                        .map(move |level| partial.clone().with(attribute, level.clone()))
                })
                .collect();
        }

        profiles
    }

    /// Enumerates profiles, failing if a task could not be filled.
    pub fn enumerate_for_tasks(
        spec: &AttributeSpec,
        profiles_per_task: usize,
    ) -> Result<Vec<Profile>, DesignError> {
        let profiles = Self::enumerate(spec);
        if profiles.len() < profiles_per_task {
            return Err(DesignError::insufficient_profiles(
                profiles.len(),
                profiles_per_task,
            ));
        }
        Ok(profiles)
    }
}
