//! 题目组装流程 - 流程层
//!
//! 定义"一道编程题文档"的新建与更新流程：
//! 1. 从源文本提取各区段
//! 2. 构建测试用例 → 分配权重
//! 3. 生成 / 保留标识 → 组装文档

use rand::Rng;
use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};
use crate::models::{
    CodingQuestion, CodingQuestionDetail, Difficulty, EvaluationMetric, Language, LanguageCodeRepository,
    QuestionBody, TestCase, TestCasesFile,
};
use crate::services::section_extractor::QuestionSections;
use crate::services::test_case_builder::build_test_cases;
use crate::services::weight_assigner::assign_weights;
use crate::utils::ids::new_id;
use crate::utils::logging::log_document_ready;

/// 新建题目文档
///
/// 返回单元素列表，这是下游系统约定的格式。
pub fn create_question<R: Rng + ?Sized>(
    source: &str,
    test_cases_file: &TestCasesFile,
    rng: &mut R,
) -> AppResult<Vec<CodingQuestion>> {
    let sections = QuestionSections::extract(source);
    let (test_cases, difficulty) = weighted_test_cases(&sections, test_cases_file, rng)?;

    let question_id = new_id();
    let code_id = new_id();
    info!("🆕 question_id: {}", question_id);
    info!("🆕 code_id: {}", code_id);

    let question = CodingQuestion {
        test_cases,
        total_score: difficulty.total_score(),
        question_type: "CODING".to_string(),
        question_asked_by_companies_info: Vec::new(),
        question: QuestionBody {
            difficulty,
            content: sections.description.clone(),
            short_text: sections.short_text.clone(),
            multimedia: Vec::new(),
            language: "ENGLISH".to_string(),
            content_type: "MARKDOWN".to_string(),
            question_id,
            default_tag_names: Vec::new(),
            concept_tag_names: Vec::new(),
            metadata: None,
        },
        coding_question_details: Language::ALL
            .iter()
            .map(|&lang| CodingQuestionDetail::new(lang, sections.code_content(lang).to_string(), &code_id))
            .collect(),
        language_code_repository_details: Language::ALL
            .iter()
            .map(|&lang| LanguageCodeRepository::single_file(lang, sections.code_base64(lang).to_string()))
            .collect(),
        solutions: Vec::new(),
        hints: Vec::new(),
        code_repository_details: None,
        test_case_evaluation_metrics: Language::ALL.map(EvaluationMetric::for_language).to_vec(),
    };

    log_document_ready(question.test_cases.len(), question.total_score);
    Ok(vec![question])
}

/// 用新的源文本和测试用例更新已有文档
///
/// - 新旧用例数量相同时，按顺序沿用旧用例的 id
/// - `question_id` 和 `code_id` 保持不变
/// - 文档中其余字段原样保留
pub fn update_question<R: Rng + ?Sized>(
    mut document: Value,
    source: &str,
    test_cases_file: &TestCasesFile,
    rng: &mut R,
) -> AppResult<Value> {
    let sections = QuestionSections::extract(source);
    let (test_cases, difficulty) = weighted_test_cases(&sections, test_cases_file, rng)?;

    let target = first_question_mut(&mut document)?;

    let existing_ids = existing_test_case_ids(target)?;
    let case_count = test_cases.len();
    let mut new_cases = serde_json::to_value(&test_cases)?;
    if existing_ids.len() == case_count {
        info!("♻️ 测试用例数量未变 ({})，沿用原有 id", case_count);
        let cases = new_cases.as_array_mut().into_iter().flatten();
        for (case, id) in cases.zip(existing_ids) {
            case["id"] = id?;
        }
    } else {
        info!("🆕 测试用例数量变化 {} → {}，使用新生成的 id", existing_ids.len(), case_count);
    }

    target.insert("test_cases".to_string(), new_cases);
    target.insert("total_score".to_string(), json!(difficulty.total_score()));

    let question = object_field_mut(target, "question")?;
    question.insert("difficulty".to_string(), json!(difficulty.code()));
    question.insert("content".to_string(), json!(sections.description));
    question.insert("short_text".to_string(), json!(sections.short_text));

    for detail in array_field_mut(target, "coding_question_details")? {
        let Some(lang) = detail_language(detail) else {
            warn!("⚠️ coding_question_details 中有未知语言，跳过: {:?}", detail.get("language"));
            continue;
        };
        if let Some(obj) = detail.as_object_mut() {
            obj.insert("code_content".to_string(), json!(sections.code_content(lang)));
            debug!("已更新 {} 代码模板", lang);
        }
    }

    for repo in array_field_mut(target, "language_code_repository_details")? {
        let Some(lang) = detail_language(repo) else {
            warn!("⚠️ language_code_repository_details 中有未知语言，跳过: {:?}", repo.get("language"));
            continue;
        };
        let file = repo
            .get_mut("code_repository")
            .and_then(Value::as_array_mut)
            .and_then(|files| files.first_mut())
            .and_then(Value::as_object_mut)
            .ok_or_else(|| {
                AppError::missing_field(format!("language_code_repository_details[{lang}].code_repository[0]"))
            })?;
        file.insert("file_content".to_string(), json!(sections.code_base64(lang)));
        debug!("已更新 {} 代码仓库", lang);
    }

    log_document_ready(case_count, difficulty.total_score());
    Ok(document)
}

/// 构建并加权测试用例，同时返回校验后的难度
fn weighted_test_cases<R: Rng + ?Sized>(
    sections: &QuestionSections,
    test_cases_file: &TestCasesFile,
    rng: &mut R,
) -> AppResult<(Vec<TestCase>, Difficulty)> {
    let mut test_cases = build_test_cases(&test_cases_file.test_cases)?;
    let difficulty = assign_weights(&mut test_cases, &sections.level, rng)?;
    info!("📊 难度 {}，总分 {}，{} 个测试用例", difficulty, difficulty.total_score(), test_cases.len());
    Ok((test_cases, difficulty))
}

/// 文档中的第一个（也是唯一一个）题目对象
fn first_question_mut(document: &mut Value) -> AppResult<&mut Map<String, Value>> {
    document
        .as_array_mut()
        .and_then(|items| items.first_mut())
        .and_then(Value::as_object_mut)
        .ok_or_else(|| AppError::missing_field("[0]"))
}

/// 已有文档中测试用例的 id（按顺序，原样保留 JSON 值）；个别 id 缺失只在需要沿用时才报错
fn existing_test_case_ids(target: &Map<String, Value>) -> AppResult<Vec<AppResult<Value>>> {
    let cases = target
        .get("test_cases")
        .and_then(Value::as_array)
        .ok_or_else(|| AppError::missing_field("test_cases"))?;

    Ok(cases
        .iter()
        .enumerate()
        .map(|(idx, case)| {
            case.get("id")
                .cloned()
                .ok_or_else(|| AppError::missing_field(format!("test_cases[{idx}].id")))
        })
        .collect())
}

fn object_field_mut<'a>(target: &'a mut Map<String, Value>, field: &str) -> AppResult<&'a mut Map<String, Value>> {
    target
        .get_mut(field)
        .and_then(Value::as_object_mut)
        .ok_or_else(|| AppError::missing_field(field))
}

fn array_field_mut<'a>(target: &'a mut Map<String, Value>, field: &str) -> AppResult<&'a mut Vec<Value>> {
    target
        .get_mut(field)
        .and_then(Value::as_array_mut)
        .ok_or_else(|| AppError::missing_field(field))
}

fn detail_language(entry: &Value) -> Option<Language> {
    entry.get("language").and_then(Value::as_str).and_then(Language::from_code)
}
