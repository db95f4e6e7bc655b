use crate::error::{AppResult, FileError, InputError};
use crate::models::test_case::TestCasesFile;
use serde_json::Value;
use std::fs;
use std::path::Path;

/// 读取整个源文本文件（UTF-8）
pub fn read_source_text(path: &Path) -> AppResult<String> {
    let content = fs::read_to_string(path).map_err(|e| FileError::from_io(path.display().to_string(), e))?;
    tracing::debug!("已读取 {}: {} 字节", path.display(), content.len());
    Ok(content)
}

/// 从 JSON 文件加载测试用例
///
/// 文件顶层必须是非空数组，只使用第一个元素的 `test_cases`。
pub fn load_test_cases(path: &Path) -> AppResult<TestCasesFile> {
    let content = read_source_text(path)?;
    parse_test_cases(&content, &path.display().to_string())
}

/// 解析测试用例 JSON 文本，`origin` 只用于错误信息（文件路径或上传字段名）
pub fn parse_test_cases(content: &str, origin: &str) -> AppResult<TestCasesFile> {
    let mut items = parse_list_document(content, origin)?;
    let first = items.swap_remove(0);

    let file: TestCasesFile = serde_json::from_value(first).map_err(|source| InputError::InvalidJson {
        path: origin.to_string(),
        source,
    })?;

    tracing::info!("✓ 加载了 {} 个测试用例", file.test_cases.len());
    Ok(file)
}

/// 加载已有的题目文档（保持原始 JSON 结构，未知字段原样保留）
pub fn load_question_document(path: &Path) -> AppResult<Value> {
    let content = read_source_text(path)?;
    parse_question_document(&content, &path.display().to_string())
}

/// 解析已有题目文档的 JSON 文本
pub fn parse_question_document(content: &str, origin: &str) -> AppResult<Value> {
    parse_list_document(content, origin).map(Value::Array)
}

/// 解析顶层为非空数组的 JSON 文本
fn parse_list_document(content: &str, origin: &str) -> AppResult<Vec<Value>> {
    let document: Value = serde_json::from_str(content).map_err(|source| InputError::InvalidJson {
        path: origin.to_string(),
        source,
    })?;

    match document {
        Value::Array(items) if items.is_empty() => Err(InputError::EmptyDocument { path: origin.to_string() }.into()),
        Value::Array(items) => Ok(items),
        _ => Err(InputError::NotAList { path: origin.to_string() }.into()),
    }
}
