// The startup lexicon — organization vocabulary, quality keyword variants,
// and the department requirement table.
//
// The built-in defaults are the company's shipped configuration. A JSON
// file can replace the whole lexicon at startup; there is no partial
// override, so a loaded lexicon is one immutable snapshot like everything
// else the engines consume.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::screening::department::{DepartmentProfile, QualityWeights};
use crate::screening::quality::Quality;

/// Keyword variants per quality. Lists may share terms with each other;
/// the scorer counts such terms toward every quality that registers them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityKeywords {
    pub courage: Vec<String>,
    pub prudence: Vec<String>,
    pub discipline: Vec<String>,
    pub justice: Vec<String>,
}

impl QualityKeywords {
    pub fn for_quality(&self, quality: Quality) -> &[String] {
        match quality {
            Quality::Courage => &self.courage,
            Quality::Prudence => &self.prudence,
            Quality::Discipline => &self.discipline,
            Quality::Justice => &self.justice,
        }
    }
}

/// Everything the engines consume as startup configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lexicon {
    /// Domain terms registered in the segmenter dictionary with elevated
    /// salience (department names are added on top of these).
    pub vocabulary: Vec<String>,
    pub quality_keywords: QualityKeywords,
    /// Ordered: the matcher breaks score ties by position in this list.
    pub departments: Vec<DepartmentProfile>,
}

impl Lexicon {
    /// Load from a JSON override file, or fall back to the built-in
    /// defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading lexicon file {}", path.display()))?;
        let lexicon: Lexicon = serde_json::from_str(&raw)
            .with_context(|| format!("parsing lexicon file {}", path.display()))?;
        Ok(lexicon)
    }

    /// Terms to register in the segmenter dictionary: the vocabulary plus
    /// every configured department name.
    pub fn segmenter_vocabulary(&self) -> impl Iterator<Item = &str> {
        self.vocabulary
            .iter()
            .map(String::as_str)
            .chain(self.departments.iter().map(|d| d.name.as_str()))
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        let vocabulary = words(&[
            "青蓝公司",
            "年假",
            "愿景",
            "使命",
            "价值观",
            "EGO装备",
            "脑啡肽",
            "认知能量",
            "光之种",
            "异常收容",
            "能源提取",
            "中央本部",
        ]);

        let quality_keywords = QualityKeywords {
            courage: words(&[
                "勇气", "勇敢", "强壮", "积极", "上进", "外向", "果断", "无畏", "胆量", "冒险",
                "大胆", "敢闯",
            ]),
            prudence: words(&[
                "谨慎", "细心", "周密", "慎重", "稳妥", "内向", "善良", "温和", "耐心", "细致",
                "小心",
            ]),
            discipline: words(&[
                "自律", "约束", "纪律", "规矩", "坚持", "克制", "守时", "负责", "可靠", "专注",
                "自制", "恪守",
            ]),
            justice: words(&[
                "正义", "责任", "热情", "梦想", "公平", "公正", "助人", "奉献", "理想", "信念",
                "道德", "仁爱",
            ]),
        };

        let departments = vec![
            dept("控制部", 3, 5, 5, 3),
            dept("情报部", 2, 5, 4, 4),
            dept("培训部", 3, 4, 4, 5),
            dept("安保部", 5, 4, 4, 4),
            dept("中央本部一区", 3, 5, 5, 3),
            dept("中央本部二区", 3, 5, 5, 3),
            dept("福利部", 2, 4, 4, 5),
            dept("惩戒部", 5, 3, 5, 4),
            dept("记录部", 2, 5, 5, 3),
            dept("研发部", 4, 5, 4, 3),
            dept("构筑部", 5, 4, 5, 3),
        ];

        Self {
            vocabulary,
            quality_keywords,
            departments,
        }
    }
}

fn words(terms: &[&str]) -> Vec<String> {
    terms.iter().map(|t| t.to_string()).collect()
}

fn dept(name: &str, courage: u32, prudence: u32, discipline: u32, justice: u32) -> DepartmentProfile {
    DepartmentProfile {
        name: name.to_string(),
        weights: QualityWeights {
            courage,
            prudence,
            discipline,
            justice,
        },
    }
}
