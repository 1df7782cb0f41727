// Department matching — weighted quality scores against the department
// requirement table.

use serde::{Deserialize, Serialize};

use super::quality::{Quality, QualityCounts};

/// Required weight per quality for one department. Every department
/// defines all four weights.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct QualityWeights {
    pub courage: u32,
    pub prudence: u32,
    pub discipline: u32,
    pub justice: u32,
}

impl QualityWeights {
    pub fn get(&self, quality: Quality) -> u32 {
        match quality {
            Quality::Courage => self.courage,
            Quality::Prudence => self.prudence,
            Quality::Discipline => self.discipline,
            Quality::Justice => self.justice,
        }
    }
}

/// One department and its quality requirements. The table the matcher
/// receives is ordered; that order is the tie-break order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentProfile {
    pub name: String,
    pub weights: QualityWeights,
}

impl DepartmentProfile {
    /// Weighted dot product of applicant counts against this department's
    /// requirements.
    pub fn score(&self, counts: &QualityCounts) -> u32 {
        Quality::ALL
            .iter()
            .map(|&q| counts.get(q) * self.weights.get(q))
            .sum()
    }
}

/// Four-way discretization of a raw match score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitnessLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl FitnessLevel {
    /// Determine the level from a raw match score.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 25 => FitnessLevel::Critical,
            s if s >= 15 => FitnessLevel::High,
            s if s >= 5 => FitnessLevel::Medium,
            _ => FitnessLevel::Low,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitnessLevel::Low => "low",
            FitnessLevel::Medium => "medium",
            FitnessLevel::High => "high",
            FitnessLevel::Critical => "critical",
        }
    }

    /// Both extremes get routed to a human: a very poor fit needs
    /// redirection, an unusually strong one needs confirmation.
    pub fn needs_human_consult(&self) -> bool {
        matches!(self, FitnessLevel::Low | FitnessLevel::Critical)
    }
}

impl std::fmt::Display for FitnessLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sentinel used when no departments are configured. The resulting match
/// carries score 0 and Low fitness: a degenerate placeholder, not a
/// genuine recommendation.
pub const FALLBACK_DEPARTMENT: &str = "控制部";

/// The best-fit department for a set of quality counts.
#[derive(Debug, Clone, Serialize)]
pub struct MatchResult {
    pub department: String,
    pub raw_score: u32,
    pub fitness: FitnessLevel,
}

/// Pick the department with the highest weighted score.
///
/// Comparison is strict, so equal scores keep the first department in
/// table order. An empty table yields the sentinel fallback.
pub fn match_department(counts: &QualityCounts, departments: &[DepartmentProfile]) -> MatchResult {
    let mut best: Option<(&DepartmentProfile, u32)> = None;

    for dept in departments {
        let score = dept.score(counts);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((dept, score)),
        }
    }

    match best {
        Some((dept, score)) => MatchResult {
            department: dept.name.clone(),
            raw_score: score,
            fitness: FitnessLevel::from_score(score),
        },
        None => MatchResult {
            department: FALLBACK_DEPARTMENT.to_string(),
            raw_score: 0,
            fitness: FitnessLevel::Low,
        },
    }
}
