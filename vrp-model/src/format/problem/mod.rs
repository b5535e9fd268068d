//! Specifies pragmatic problem model and logic to interpret some of its properties.

mod model;
pub use self::model::*;

mod breaks;
pub use self::breaks::BreakTime;

mod skills;

/// Reserved job ids which can be used within relations.
pub const RESERVED_JOB_IDS: [&str; 4] = ["departure", "arrival", "break", "reload"];

/// Checks whether given job id is one of reserved ones.
pub fn is_reserved_job_id(job_id: &str) -> bool {
    RESERVED_JOB_IDS.contains(&job_id)
}

/// Specifies a job task kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TaskKind {
    /// A pickup task.
    Pickup,
    /// A delivery task.
    Delivery,
    /// A replacement task.
    Replacement,
    /// A service task: it has no demand.
    Service,
}

impl TaskKind {
    /// Returns true if task of this kind must have a demand.
    pub fn has_demand(&self) -> bool {
        !matches!(self, TaskKind::Service)
    }
}

impl Job {
    /// Returns iterator over all tasks with their kinds in declaration order:
    /// pickups, deliveries, replacements, services.
    pub fn tasks_iter(&self) -> impl Iterator<Item = (TaskKind, &JobTask)> {
        fn with_kind(kind: TaskKind, tasks: &Option<Vec<JobTask>>) -> impl Iterator<Item = (TaskKind, &JobTask)> {
            tasks.iter().flatten().map(move |task| (kind, task))
        }

        with_kind(TaskKind::Pickup, &self.pickups)
            .chain(with_kind(TaskKind::Delivery, &self.deliveries))
            .chain(with_kind(TaskKind::Replacement, &self.replacements))
            .chain(with_kind(TaskKind::Service, &self.services))
    }

    /// Returns iterator over all tasks.
    pub fn all_tasks_iter(&self) -> impl Iterator<Item = &JobTask> {
        self.tasks_iter().map(|(_, task)| task)
    }

    /// Returns iterator over all places of all tasks.
    pub fn places_iter(&self) -> impl Iterator<Item = &JobPlace> {
        self.all_tasks_iter().flat_map(|task| task.places.iter())
    }

    /// Returns true if job has at least one task.
    pub fn has_tasks(&self) -> bool {
        self.all_tasks_iter().next().is_some()
    }
}

impl VehicleBreak {
    /// Returns break time as specified in the problem.
    pub fn time(&self) -> &str {
        match self {
            VehicleBreak::Optional { time, .. } | VehicleBreak::Required { time, .. } => time.as_str(),
        }
    }

    /// Returns true if break is required.
    pub fn is_required(&self) -> bool {
        matches!(self, VehicleBreak::Required { .. })
    }
}

impl VehicleResource {
    /// Returns resource id.
    pub fn id(&self) -> &str {
        match self {
            VehicleResource::Reload { id, .. } => id.as_str(),
        }
    }

    /// Returns resource capacity.
    pub fn capacity(&self) -> &[i32] {
        match self {
            VehicleResource::Reload { capacity, .. } => capacity.as_slice(),
        }
    }
}

impl Objective {
    /// Returns objective type name as it is used in json.
    pub fn name(&self) -> &'static str {
        match self {
            Objective::MinimizeCost => "minimize-cost",
            Objective::MinimizeDistance => "minimize-distance",
            Objective::MinimizeDuration => "minimize-duration",
            Objective::MinimizeTours => "minimize-tours",
            Objective::MaximizeTours => "maximize-tours",
            Objective::MaximizeValue { .. } => "maximize-value",
            Objective::MinimizeUnassigned { .. } => "minimize-unassigned",
            Objective::MinimizeArrivalTime => "minimize-arrival-time",
            Objective::FastService { .. } => "fast-service",
            Objective::TourOrder { .. } => "tour-order",
            Objective::CompactTour { .. } => "compact-tour",
            Objective::BalanceMaxLoad => "balance-max-load",
            Objective::BalanceActivities => "balance-activities",
            Objective::BalanceDistance => "balance-distance",
            Objective::BalanceDuration => "balance-duration",
            Objective::MultiObjective { .. } => "multi-objective",
        }
    }

    /// Returns true if objective is a multi objective.
    pub fn is_multi(&self) -> bool {
        matches!(self, Objective::MultiObjective { .. })
    }
}

impl Matrix {
    /// Returns matrix dimension: amount of rows (and columns) in square routing matrix, `None`
    /// when travel times or distances do not form a square matrix of the same size.
    pub fn size(&self) -> Option<usize> {
        let size = (self.travel_times.len() as f64).sqrt().round() as usize;

        (size * size == self.travel_times.len() && self.distances.len() == self.travel_times.len()).then_some(size)
    }
}
