//! 测试用例构建服务 - 业务能力层
//!
//! 把原始测试用例转换为带 id、顺序和可见性的规范化用例

use crate::error::{AppResult, InputError};
use crate::models::{EvaluationType, RawTestCase, TestCase};
use crate::utils::ids::new_id;

/// 前 N 个用例对考生可见，其余隐藏
pub const VISIBLE_TEST_CASES: usize = 2;

/// 按输入顺序构建规范化测试用例
///
/// - 每个用例生成新的 id
/// - `order` 从 1 开始连续编号
/// - `is_hidden = order > 2`
/// - 声明 `multiple_possible_output: true` 时必须提供 `outputs`
pub fn build_test_cases(raw_cases: &[RawTestCase]) -> AppResult<Vec<TestCase>> {
    raw_cases
        .iter()
        .enumerate()
        .map(|(idx, raw)| build_one(raw, idx + 1))
        .collect()
}

fn build_one(raw: &RawTestCase, order: usize) -> AppResult<TestCase> {
    let mut test_case = TestCase {
        id: new_id(),
        input: raw.input.clone(),
        output: raw.output.clone().unwrap_or_default(),
        is_hidden: order > VISIBLE_TEST_CASES,
        weightage: None,
        evaluation_type: EvaluationType::Default,
        display_text: None,
        criteria: None,
        tags: Vec::new(),
        order,
        multiple_possible_output: None,
        outputs: None,
    };

    if raw.multiple_possible_output == Some(true) {
        let outputs = raw.outputs.clone().ok_or(InputError::MissingOutputs { order })?;
        test_case.multiple_possible_output = Some(true);
        test_case.outputs = Some(outputs);
    }

    Ok(test_case)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use std::collections::HashSet;

    fn raw(input: &str, output: Option<&str>) -> RawTestCase {
        RawTestCase {
            input: input.to_string(),
            output: output.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_visibility_and_order() {
        let raws: Vec<_> = (0..5).map(|i| raw(&i.to_string(), Some("x"))).collect();
        let cases = build_test_cases(&raws).unwrap();

        let hidden: Vec<bool> = cases.iter().map(|c| c.is_hidden).collect();
        assert_eq!(hidden, vec![false, false, true, true, true]);

        let orders: Vec<usize> = cases.iter().map(|c| c.order).collect();
        assert_eq!(orders, vec![1, 2, 3, 4, 5]);

        let inputs: Vec<&str> = cases.iter().map(|c| c.input.as_str()).collect();
        assert_eq!(inputs, vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_ids_are_unique() {
        let raws: Vec<_> = (0..20).map(|i| raw(&i.to_string(), None)).collect();
        let cases = build_test_cases(&raws).unwrap();
        let ids: HashSet<&str> = cases.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.len(), 20);
    }

    #[test]
    fn test_output_defaults_to_empty() {
        let cases = build_test_cases(&[raw("1", None)]).unwrap();
        assert_eq!(cases[0].output, "");
        assert_eq!(cases[0].weightage, None);
        assert!(cases[0].tags.is_empty());
    }

    #[test]
    fn test_multiple_possible_output_is_propagated() {
        let mut multi = raw("4", None);
        multi.multiple_possible_output = Some(true);
        multi.outputs = Some(vec!["2 2".into(), "1 3".into()]);

        let mut declared_false = raw("5", Some("5"));
        declared_false.multiple_possible_output = Some(false);
        declared_false.outputs = Some(vec!["ignored".into()]);

        let cases = build_test_cases(&[multi, declared_false]).unwrap();
        assert_eq!(cases[0].multiple_possible_output, Some(true));
        assert_eq!(cases[0].outputs.as_deref(), Some(&["2 2".to_string(), "1 3".to_string()][..]));
        assert_eq!(cases[1].multiple_possible_output, None);
        assert_eq!(cases[1].outputs, None);
    }

    #[test]
    fn test_multiple_possible_output_requires_outputs() {
        let mut multi = raw("4", None);
        multi.multiple_possible_output = Some(true);
        let err = build_test_cases(&[raw("1", None), multi]).unwrap_err();
        assert!(matches!(err, AppError::Input(InputError::MissingOutputs { order: 2 })));
    }

    #[test]
    fn test_empty_input() {
        assert!(build_test_cases(&[]).unwrap().is_empty());
    }
}
