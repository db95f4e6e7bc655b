use crate::error::ScoringError;

/// 难度等级
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// 获取大写代码
    pub fn code(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    /// 该难度对应的题目总分
    pub fn total_score(self) -> u32 {
        match self {
            Difficulty::Easy => 20,
            Difficulty::Medium => 25,
            Difficulty::Hard => 30,
        }
    }

    /// 解析难度（去除首尾空白，大小写不敏感）
    pub fn parse(level: &str) -> Result<Self, ScoringError> {
        match level.trim().to_uppercase().as_str() {
            "EASY" => Ok(Difficulty::Easy),
            "MEDIUM" => Ok(Difficulty::Medium),
            "HARD" => Ok(Difficulty::Hard),
            _ => Err(ScoringError::UnknownDifficulty {
                level: level.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive_and_trimmed() {
        assert_eq!(Difficulty::parse("Easy").unwrap(), Difficulty::Easy);
        assert_eq!(Difficulty::parse("  medium\n").unwrap(), Difficulty::Medium);
        assert_eq!(Difficulty::parse("HARD").unwrap(), Difficulty::Hard);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            Difficulty::parse("insane"),
            Err(ScoringError::UnknownDifficulty {
                level: "insane".to_string()
            })
        );
        assert!(Difficulty::parse("").is_err());
    }

    #[test]
    fn test_total_scores() {
        assert_eq!(Difficulty::Easy.total_score(), 20);
        assert_eq!(Difficulty::Medium.total_score(), 25);
        assert_eq!(Difficulty::Hard.total_score(), 30);
    }

    #[test]
    fn test_serializes_upper_case() {
        assert_eq!(serde_json::to_string(&Difficulty::Medium).unwrap(), "\"MEDIUM\"");
    }
}
