// Unit tests for quality scoring and department matching.
//
// Tests isolated pure functions: FitnessLevel::from_score boundary
// conditions, score_qualities counting behavior, match_department
// tie-breaking, and the narrative fields of analyze_applicant.

use cerulean::error::AnalysisError;
use cerulean::lexicon::Lexicon;
use cerulean::screening::analysis::analyze_applicant;
use cerulean::screening::department::{
    match_department, DepartmentProfile, FitnessLevel, QualityWeights, FALLBACK_DEPARTMENT,
};
use cerulean::screening::quality::{score_qualities, Quality, QualityCounts};

// ============================================================
// FitnessLevel::from_score — boundary conditions
// ============================================================

#[test]
fn fitness_just_below_medium() {
    assert_eq!(FitnessLevel::from_score(4), FitnessLevel::Low);
}

#[test]
fn fitness_exact_boundary_medium() {
    assert_eq!(FitnessLevel::from_score(5), FitnessLevel::Medium);
}

#[test]
fn fitness_just_below_high() {
    assert_eq!(FitnessLevel::from_score(14), FitnessLevel::Medium);
}

#[test]
fn fitness_exact_boundary_high() {
    assert_eq!(FitnessLevel::from_score(15), FitnessLevel::High);
}

#[test]
fn fitness_just_below_critical() {
    assert_eq!(FitnessLevel::from_score(24), FitnessLevel::High);
}

#[test]
fn fitness_exact_boundary_critical() {
    assert_eq!(FitnessLevel::from_score(25), FitnessLevel::Critical);
}

#[test]
fn fitness_zero() {
    assert_eq!(FitnessLevel::from_score(0), FitnessLevel::Low);
}

#[test]
fn fitness_very_large() {
    assert_eq!(FitnessLevel::from_score(1000), FitnessLevel::Critical);
}

#[test]
fn fitness_as_str_all_variants() {
    assert_eq!(FitnessLevel::Low.as_str(), "low");
    assert_eq!(FitnessLevel::Medium.as_str(), "medium");
    assert_eq!(FitnessLevel::High.as_str(), "high");
    assert_eq!(FitnessLevel::Critical.as_str(), "critical");
}

#[test]
fn consult_flag_only_at_the_extremes() {
    assert!(FitnessLevel::Low.needs_human_consult());
    assert!(!FitnessLevel::Medium.needs_human_consult());
    assert!(!FitnessLevel::High.needs_human_consult());
    assert!(FitnessLevel::Critical.needs_human_consult());
}

// ============================================================
// score_qualities — counting behavior
// ============================================================

#[test]
fn counts_are_zero_for_unrelated_text() {
    let lexicon = Lexicon::default();
    let counts = score_qualities("今天天气不错，我吃了早饭", &lexicon);
    assert_eq!(counts, QualityCounts::default());
}

#[test]
fn repeated_keyword_counts_every_occurrence() {
    let lexicon = Lexicon::default();
    let counts = score_qualities("勇气，勇气，还是勇气", &lexicon);
    assert_eq!(counts.courage, 3);
    assert_eq!(counts.prudence, 0);
    assert_eq!(counts.discipline, 0);
    assert_eq!(counts.justice, 0);
}

#[test]
fn variants_sum_into_one_quality() {
    let lexicon = Lexicon::default();
    // 勇敢 and 果断 are both courage variants
    let counts = score_qualities("我很勇敢，做事果断", &lexicon);
    assert_eq!(counts.courage, 2);
}

#[test]
fn adding_occurrences_never_decreases_a_count() {
    let lexicon = Lexicon::default();
    let base = "我非常自律，也很有耐心";
    let extended = format!("{base}，坚持自律，严守纪律");

    let before = score_qualities(base, &lexicon);
    let after = score_qualities(&extended, &lexicon);

    for quality in Quality::ALL {
        assert!(
            after.get(quality) >= before.get(quality),
            "{quality} count decreased: {} -> {}",
            before.get(quality),
            after.get(quality)
        );
    }
    assert!(after.discipline > before.discipline);
}

#[test]
fn counts_are_not_normalized_by_length() {
    let lexicon = Lexicon::default();
    let short = score_qualities("勇气", &lexicon);
    let padded = score_qualities(
        "这是一段很长很长的自我介绍，其中只提到了一次勇气，其余都是无关的内容",
        &lexicon,
    );
    assert_eq!(short.courage, 1);
    assert_eq!(padded.courage, 1);
}

// ============================================================
// match_department — selection and tie-breaking
// ============================================================

fn two_depts() -> Vec<DepartmentProfile> {
    vec![
        DepartmentProfile {
            name: "甲部".to_string(),
            weights: QualityWeights {
                courage: 5,
                prudence: 1,
                discipline: 1,
                justice: 1,
            },
        },
        DepartmentProfile {
            name: "乙部".to_string(),
            weights: QualityWeights {
                courage: 1,
                prudence: 5,
                discipline: 1,
                justice: 1,
            },
        },
    ]
}

#[test]
fn highest_weighted_department_wins() {
    let counts = QualityCounts {
        prudence: 3,
        ..Default::default()
    };
    let result = match_department(&counts, &two_depts());
    assert_eq!(result.department, "乙部");
    assert_eq!(result.raw_score, 15);
    assert_eq!(result.fitness, FitnessLevel::High);
}

#[test]
fn all_zero_counts_tie_to_the_first_department() {
    let result = match_department(&QualityCounts::default(), &two_depts());
    assert_eq!(result.department, "甲部");
    assert_eq!(result.raw_score, 0);
    assert_eq!(result.fitness, FitnessLevel::Low);
}

#[test]
fn empty_table_is_the_documented_degenerate_case() {
    let counts = QualityCounts {
        courage: 9,
        ..Default::default()
    };
    let result = match_department(&counts, &[]);
    assert_eq!(result.department, FALLBACK_DEPARTMENT);
    assert_eq!(result.raw_score, 0);
    assert!(result.fitness.needs_human_consult());
}

// ============================================================
// analyze_applicant — narrative fields
// ============================================================

#[test]
fn blank_introduction_is_a_validation_error() {
    let lexicon = Lexicon::default();
    assert_eq!(
        analyze_applicant("   \n", &lexicon).unwrap_err(),
        AnalysisError::EmptyInput
    );
}

#[test]
fn courage_only_introduction_recommends_a_courage_department() {
    let lexicon = Lexicon::default();
    // 勇气 four times and nothing else. The courage-5 departments tie at
    // 4 * 5 = 20 and 安保部 comes first in table order.
    let analysis = analyze_applicant("勇气勇气勇气勇气", &lexicon).unwrap();
    assert_eq!(analysis.recommended_department, "安保部");
    assert_eq!(analysis.fitness_level, FitnessLevel::High);
    assert!(!analysis.needs_human_consult);
}

#[test]
fn two_dominant_qualities_are_named_in_order() {
    let lexicon = Lexicon::default();
    let analysis = analyze_applicant("我自律自律自律，也有勇气", &lexicon).unwrap();
    assert_eq!(analysis.quality_analysis, "您的核心特质是自律和勇气");
}

#[test]
fn one_dominant_quality_is_named_alone() {
    let lexicon = Lexicon::default();
    let analysis = analyze_applicant("我只有耐心", &lexicon).unwrap();
    assert_eq!(analysis.quality_analysis, "您的核心特质是谨慎");
}

#[test]
fn no_dominant_quality_gets_the_sentinel_narrative() {
    let lexicon = Lexicon::default();
    let analysis = analyze_applicant("我今天吃了早饭", &lexicon).unwrap();
    assert_eq!(analysis.quality_analysis, "您的特质表现不够明显");
    assert_eq!(analysis.fitness_level, FitnessLevel::Low);
    assert!(analysis.needs_human_consult);
    assert!(analysis.possible_causes.is_empty());
}

#[test]
fn pronounced_qualities_become_causes() {
    let lexicon = Lexicon::default();
    // courage 3 (> 2) and prudence 1 (not pronounced)
    let analysis = analyze_applicant("勇气勇气勇气，还有耐心", &lexicon).unwrap();
    assert_eq!(analysis.possible_causes.len(), 1);
    assert!(analysis.possible_causes[0].contains("勇气"));
}

#[test]
fn base_suggestions_are_always_present() {
    let lexicon = Lexicon::default();
    let analysis = analyze_applicant("我有勇气", &lexicon).unwrap();
    assert!(analysis.suggestions[0].contains(&analysis.recommended_department));
    assert!(analysis.suggestions[1].contains("面试材料"));
}

#[test]
fn critical_fit_appends_the_encouragement_line() {
    let lexicon = Lexicon::default();
    // courage 4 + justice 2: 安保部 scores 4*5 + 2*4 = 28 -> critical
    let analysis =
        analyze_applicant("勇气勇气勇气勇气，正义正义", &lexicon).unwrap();
    assert_eq!(analysis.fitness_level, FitnessLevel::Critical);
    assert!(analysis.needs_human_consult);
    assert!(analysis
        .suggestions
        .iter()
        .any(|s| s.contains("务必申请面试")));
}

#[test]
fn low_fit_appends_the_redirect_line() {
    let lexicon = Lexicon::default();
    let analysis = analyze_applicant("平平无奇的一天", &lexicon).unwrap();
    assert_eq!(analysis.fitness_level, FitnessLevel::Low);
    assert!(analysis
        .suggestions
        .iter()
        .any(|s| s.contains("重新考虑职业方向")));
}

#[test]
fn analysis_serializes_with_camel_case_fields() {
    let lexicon = Lexicon::default();
    let analysis = analyze_applicant("我有勇气", &lexicon).unwrap();
    let value = serde_json::to_value(&analysis).unwrap();

    let object = value.as_object().unwrap();
    assert!(object.contains_key("qualityAnalysis"));
    assert!(object.contains_key("fitnessLevel"));
    assert!(object.contains_key("recommendedDepartment"));
    assert!(object.contains_key("possibleCauses"));
    assert!(object.contains_key("suggestions"));
    assert!(object.contains_key("needsHumanConsult"));
    assert_eq!(object["fitnessLevel"], "medium");
}
