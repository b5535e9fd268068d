#[cfg(test)]
#[path = "../../../tests/unit/format/problem/skills_test.rs"]
mod skills_test;

use super::*;
use rustc_hash::FxHashSet;

impl JobSkills {
    /// Checks whether vehicle with given skills can serve the job: vehicle must have all skills
    /// from `allOf`, at least one from `oneOf` and none from `noneOf`. An absent or empty
    /// condition is always satisfied.
    pub fn is_satisfied_by(&self, vehicle_skills: Option<&[String]>) -> bool {
        let vehicle_skills = vehicle_skills.into_iter().flatten().map(String::as_str).collect::<FxHashSet<_>>();

        let all_of = condition(&self.all_of)
            .is_none_or(|skills| skills.iter().all(|skill| vehicle_skills.contains(skill.as_str())));
        let one_of = condition(&self.one_of)
            .is_none_or(|skills| skills.iter().any(|skill| vehicle_skills.contains(skill.as_str())));
        let none_of = condition(&self.none_of)
            .is_none_or(|skills| !skills.iter().any(|skill| vehicle_skills.contains(skill.as_str())));

        all_of && one_of && none_of
    }

    /// Returns skills which are required and prohibited at the same time.
    pub fn get_contradictions(&self) -> Vec<&String> {
        let none_of = self.none_of.iter().flatten().collect::<FxHashSet<_>>();

        self.all_of.iter().flatten().filter(|skill| none_of.contains(skill)).collect()
    }
}

fn condition(skills: &Option<Vec<String>>) -> Option<&[String]> {
    skills.as_deref().filter(|skills| !skills.is_empty())
}

impl VehicleType {
    /// Checks whether vehicle type has skills required to serve the job.
    pub fn can_serve(&self, job: &Job) -> bool {
        job.skills.as_ref().is_none_or(|skills| skills.is_satisfied_by(self.skills.as_deref()))
    }
}
