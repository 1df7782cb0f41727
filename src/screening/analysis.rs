// Applicant analysis — orchestrates quality scoring and department
// matching, then derives the narrative fields the HR tool shows.
//
// Given a well-formed introduction this is total: every "nothing stood
// out" case resolves to fixed narrative sentinels, never an error.

use serde::Serialize;
use tracing::info;

use crate::error::AnalysisError;
use crate::lexicon::Lexicon;

use super::department::{match_department, FitnessLevel};
use super::quality::{score_qualities, Quality};

/// The structured recommendation for one applicant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicantAnalysis {
    pub quality_analysis: String,
    pub fitness_level: FitnessLevel,
    pub recommended_department: String,
    pub possible_causes: Vec<String>,
    pub suggestions: Vec<String>,
    pub needs_human_consult: bool,
}

/// Minimum count before a quality is called out as a cause.
const PRONOUNCED_THRESHOLD: u32 = 2;

/// Analyze a self-introduction and recommend a department.
pub fn analyze_applicant(
    introduction: &str,
    lexicon: &Lexicon,
) -> Result<ApplicantAnalysis, AnalysisError> {
    if introduction.trim().is_empty() {
        return Err(AnalysisError::EmptyInput);
    }

    let counts = score_qualities(introduction, lexicon);
    let result = match_department(&counts, &lexicon.departments);

    let dominant: Vec<Quality> = counts
        .ranked()
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(quality, _)| quality)
        .collect();

    let quality_analysis = match dominant.as_slice() {
        [] => "您的特质表现不够明显".to_string(),
        [only] => format!("您的核心特质是{}", only.label()),
        [first, second, ..] => format!("您的核心特质是{}和{}", first.label(), second.label()),
    };

    let possible_causes: Vec<String> = Quality::ALL
        .iter()
        .filter(|&&q| counts.get(q) > PRONOUNCED_THRESHOLD)
        .map(|q| format!("您在自我介绍中体现了较强的{}特质", q.label()))
        .collect();

    let mut suggestions = vec![
        format!("推荐您进一步了解{}的职责要求", result.department),
        "建议准备相关面试材料，突出您的优势特质".to_string(),
    ];
    match result.fitness {
        FitnessLevel::Critical => {
            suggestions.push("您与推荐部门匹配度极高，请务必申请面试！".to_string());
        }
        FitnessLevel::Low => {
            suggestions.push("建议您重新考虑职业方向，或咨询HR获取更多指导".to_string());
        }
        FitnessLevel::Medium | FitnessLevel::High => {}
    }

    let needs_human_consult = result.fitness.needs_human_consult();

    info!(
        department = %result.department,
        score = result.raw_score,
        fitness = result.fitness.as_str(),
        consult = needs_human_consult,
        "Analyzed applicant"
    );

    Ok(ApplicantAnalysis {
        quality_analysis,
        fitness_level: result.fitness,
        recommended_department: result.department,
        possible_causes,
        suggestions,
        needs_human_consult,
    })
}
