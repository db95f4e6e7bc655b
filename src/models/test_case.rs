use serde::{Deserialize, Serialize};

/// 测试用例文件中的一个原始用例
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTestCase {
    pub input: String,
    #[serde(default)]
    pub output: Option<String>,
    #[serde(default)]
    pub multiple_possible_output: Option<bool>,
    #[serde(default)]
    pub outputs: Option<Vec<String>>,
}

/// 测试用例文件的顶层元素：`[{"test_cases": [...]}]`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TestCasesFile {
    pub test_cases: Vec<RawTestCase>,
}

/// 测试用例的评测方式，目前只有默认评测
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EvaluationType {
    #[default]
    Default,
}

/// 规范化后的测试用例
///
/// 字段顺序即输出 JSON 的键顺序。`weightage` 在分配权重之前为 `null`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub input: String,
    pub output: String,
    pub is_hidden: bool,
    pub weightage: Option<f64>,
    pub evaluation_type: EvaluationType,
    pub display_text: Option<String>,
    pub criteria: Option<String>,
    pub tags: Vec<String>,
    pub order: usize,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub multiple_possible_output: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub outputs: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_defaults() {
        let raw: RawTestCase = serde_json::from_str(r#"{"input": "1 2"}"#).unwrap();
        assert_eq!(raw.input, "1 2");
        assert_eq!(raw.output, None);
        assert_eq!(raw.multiple_possible_output, None);
    }

    #[test]
    fn test_raw_requires_input() {
        assert!(serde_json::from_str::<RawTestCase>(r#"{"output": "3"}"#).is_err());
    }

    #[test]
    fn test_serialized_key_order() {
        let tc = TestCase {
            id: "x".into(),
            input: "1".into(),
            output: "2".into(),
            is_hidden: false,
            weightage: None,
            evaluation_type: EvaluationType::Default,
            display_text: None,
            criteria: None,
            tags: vec![],
            order: 1,
            multiple_possible_output: None,
            outputs: None,
        };
        assert_eq!(
            serde_json::to_string(&tc).unwrap(),
            r#"{"id":"x","input":"1","output":"2","is_hidden":false,"weightage":null,"evaluation_type":"DEFAULT","display_text":null,"criteria":null,"tags":[],"order":1}"#
        );
    }
}
