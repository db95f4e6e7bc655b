//! 标识重新生成流程 - 流程层
//!
//! 为已组装的题目文档换上全新的标识，其余内容原样保留

use serde_json::{json, Value};
use tracing::info;

use crate::error::{AppError, AppResult, InputError};
use crate::utils::ids::new_id;

/// 重新生成文档中的所有标识
///
/// - `question.question_id`：字段存在时替换
/// - `coding_question_details[*].code_id`：统一换成同一个新值
/// - `test_cases[*].id`：每个用例各自换成新值
pub fn regenerate_ids(mut document: Value) -> AppResult<Value> {
    let items = match document.as_array_mut() {
        Some(items) if !items.is_empty() => items,
        Some(_) => return Err(InputError::EmptyDocument { path: "<document>".to_string() }.into()),
        None => return Err(InputError::NotAList { path: "<document>".to_string() }.into()),
    };

    let question = items[0]
        .as_object_mut()
        .ok_or_else(|| AppError::missing_field("[0]"))?;

    if let Some(body) = question.get_mut("question").and_then(Value::as_object_mut) {
        if body.contains_key("question_id") {
            let question_id = new_id();
            info!("🆕 question_id: {}", question_id);
            body.insert("question_id".to_string(), json!(question_id));
        }
    }

    if let Some(details) = question.get_mut("coding_question_details").and_then(Value::as_array_mut) {
        let code_id = new_id();
        info!("🆕 code_id: {} (共 {} 个代码模板)", code_id, details.len());
        for detail in details.iter_mut().filter_map(Value::as_object_mut) {
            detail.insert("code_id".to_string(), json!(code_id));
        }
    }

    if let Some(test_cases) = question.get_mut("test_cases").and_then(Value::as_array_mut) {
        for test_case in test_cases.iter_mut().filter_map(Value::as_object_mut) {
            test_case.insert("id".to_string(), json!(new_id()));
        }
        info!("🆕 已为 {} 个测试用例生成新的 id", test_cases.len());
    }

    Ok(document)
}
