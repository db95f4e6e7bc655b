use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::difficulty::Difficulty;
use super::language::Language;
use super::test_case::TestCase;

/// 编程题文档（新建模式）
///
/// 字段顺序即输出 JSON 的键顺序。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodingQuestion {
    pub test_cases: Vec<TestCase>,
    pub total_score: u32,
    pub question_type: String,
    pub question_asked_by_companies_info: Vec<Value>,
    pub question: QuestionBody,
    pub coding_question_details: Vec<CodingQuestionDetail>,
    pub language_code_repository_details: Vec<LanguageCodeRepository>,
    pub solutions: Vec<Value>,
    pub hints: Vec<Value>,
    pub code_repository_details: Option<Value>,
    pub test_case_evaluation_metrics: Vec<EvaluationMetric>,
}

/// 题干
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBody {
    pub difficulty: Difficulty,
    pub content: String,
    pub short_text: String,
    pub multimedia: Vec<Value>,
    pub language: String,
    pub content_type: String,
    pub question_id: String,
    pub default_tag_names: Vec<String>,
    pub concept_tag_names: Vec<String>,
    pub metadata: Option<Value>,
}

/// 每种语言的代码模板（明文）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodingQuestionDetail {
    pub code_content: String,
    pub default_code: bool,
    pub language: Language,
    pub code_id: String,
    pub is_function_based: bool,
}

/// 每种语言的代码仓库（base64 编码的文件）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageCodeRepository {
    pub language: Language,
    pub file_path_to_execute: String,
    pub default_file_path_to_submit_code: String,
    pub code_repository: Vec<RepositoryFile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryFile {
    pub file_name: String,
    pub file_type: String,
    pub file_content: String,
}

/// 每种语言的评测时间限制
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvaluationMetric {
    pub language: Language,
    pub time_limit_to_execute_in_seconds: f64,
}

impl CodingQuestionDetail {
    pub fn new(language: Language, code_content: String, code_id: &str) -> Self {
        Self {
            code_content,
            default_code: language.is_default_code(),
            language,
            code_id: code_id.to_string(),
            is_function_based: true,
        }
    }
}

impl LanguageCodeRepository {
    /// 只包含入口文件的代码仓库
    pub fn single_file(language: Language, file_content: String) -> Self {
        Self {
            language,
            file_path_to_execute: language.file_path_to_execute().to_string(),
            default_file_path_to_submit_code: language.default_file_path_to_submit_code().to_string(),
            code_repository: vec![RepositoryFile {
                file_name: language.file_path_to_execute().to_string(),
                file_type: "FILE".to_string(),
                file_content,
            }],
        }
    }
}

impl EvaluationMetric {
    pub fn for_language(language: Language) -> Self {
        Self {
            language,
            time_limit_to_execute_in_seconds: language.time_limit_seconds(),
        }
    }
}
