// Colored terminal output for answers and applicant analyses.
//
// This module handles all terminal-specific formatting; main.rs delegates
// here after calling into the core.

use colored::{ColoredString, Colorize};

use crate::screening::analysis::ApplicantAnalysis;
use crate::screening::department::FitnessLevel;

/// Display a knowledge-base answer.
pub fn display_answer(question: &str, answer: &str) {
    println!("\n{}", "=== 知识库问答 ===".bold());
    println!("  问：{question}");
    println!("  答：{answer}");
    println!();
}

/// Display a full applicant analysis.
pub fn display_analysis(analysis: &ApplicantAnalysis) {
    println!("\n{}", "=== 应聘者分析 ===".bold());
    println!(
        "  推荐部门: {}",
        analysis.recommended_department.as_str().bold()
    );
    println!("  匹配程度: {}", colorize_fitness(analysis.fitness_level));
    println!("  特质分析: {}", analysis.quality_analysis);

    if !analysis.possible_causes.is_empty() {
        println!("  依据:");
        for cause in &analysis.possible_causes {
            println!("    - {cause}");
        }
    }

    println!("  建议:");
    for suggestion in &analysis.suggestions {
        println!("    - {suggestion}");
    }

    if analysis.needs_human_consult {
        println!("\n  {}", "该结果已标记为需要人工复核".yellow());
    }
    println!();
}

fn colorize_fitness(level: FitnessLevel) -> ColoredString {
    match level {
        FitnessLevel::Low => level.as_str().red(),
        FitnessLevel::Medium => level.as_str().yellow(),
        FitnessLevel::High => level.as_str().green(),
        FitnessLevel::Critical => level.as_str().bright_green().bold(),
    }
}
