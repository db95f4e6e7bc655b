//! 区段提取服务 - 业务能力层
//!
//! 只负责"从源文本中取出一段标记包围的内容"，区段缺失时返回空字符串

use base64::{engine::general_purpose::STANDARD, Engine as _};
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};

use crate::models::Language;
use crate::utils::logging::truncate_text;

/// 源文本中的命名区段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    QuestionLevel,
    QuestionDescription,
    ShortText,
    /// 明文代码模板
    CodeContent(Language),
    /// 写入代码仓库的代码，输出前做 base64 编码
    CodeBase64(Language),
}

impl Section {
    /// 所有已知区段
    pub fn all() -> Vec<Section> {
        let mut sections = vec![Section::QuestionLevel, Section::QuestionDescription, Section::ShortText];
        sections.extend(Language::ALL.map(Section::CodeContent));
        sections.extend(Language::ALL.map(Section::CodeBase64));
        sections
    }

    /// 标记名，例如 `CODE_CONTENT_PYTHON`
    pub fn name(self) -> String {
        match self {
            Section::QuestionLevel => "QUESTION_LEVEL".to_string(),
            Section::QuestionDescription => "QUESTION_DESCRIPTION".to_string(),
            Section::ShortText => "SHORT_TEXT".to_string(),
            Section::CodeContent(lang) => format!("CODE_CONTENT_{}", lang.marker_name()),
            Section::CodeBase64(lang) => format!("CODE_BASE64_{}", lang.marker_name()),
        }
    }

    pub fn start_marker(self) -> String {
        format!("----------{}_START----------", self.name())
    }

    pub fn end_marker(self) -> String {
        format!("----------{}_END----------", self.name())
    }
}

/// 取出 `start_marker` 与其后第一个 `end_marker` 之间的内容（去除首尾空白）
///
/// 任一标记缺失时返回空字符串。
pub fn extract_section(content: &str, start_marker: &str, end_marker: &str) -> String {
    let Some(start) = content.find(start_marker) else {
        return String::new();
    };
    let body_start = start + start_marker.len();
    match content[body_start..].find(end_marker) {
        Some(len) => content[body_start..body_start + len].trim().to_string(),
        None => String::new(),
    }
}

/// 扫描源文本中出现的所有 `_START` 标记名（按出现顺序）
pub fn scan_markers(content: &str) -> Vec<String> {
    static MARKER_RE: OnceLock<Regex> = OnceLock::new();
    let re = MARKER_RE.get_or_init(|| {
        Regex::new(r"-{10}([A-Z0-9_]+?)_START-{10}").expect("区段标记正则表达式无效")
    });
    re.captures_iter(content).map(|caps| caps[1].to_string()).collect()
}

/// 一次性提取的全部题目区段
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuestionSections {
    /// 原始难度文本（尚未校验）
    pub level: String,
    pub description: String,
    pub short_text: String,
    /// 按 `Language::ALL` 顺序排列的明文代码
    pub code_content: [String; 3],
    /// 按 `Language::ALL` 顺序排列、已 base64 编码的仓库代码
    pub code_base64: [String; 3],
}

impl QuestionSections {
    /// 提取所有区段，并记录缺失或未知的区段
    pub fn extract(content: &str) -> Self {
        log_section_scan(content);

        let get = |section: Section| extract_section(content, &section.start_marker(), &section.end_marker());

        let sections = Self {
            level: get(Section::QuestionLevel),
            description: get(Section::QuestionDescription),
            short_text: get(Section::ShortText),
            code_content: Language::ALL.map(|lang| get(Section::CodeContent(lang))),
            code_base64: Language::ALL.map(|lang| encode_base64(&get(Section::CodeBase64(lang)))),
        };

        debug!("难度: {:?}", sections.level);
        debug!("题目描述: {}", truncate_text(&sections.description, 80));
        debug!("简述: {}", truncate_text(&sections.short_text, 80));
        sections
    }

    pub fn code_content(&self, language: Language) -> &str {
        &self.code_content[language_index(language)]
    }

    pub fn code_base64(&self, language: Language) -> &str {
        &self.code_base64[language_index(language)]
    }
}

/// 将代码编码为标准 base64
pub fn encode_base64(code: &str) -> String {
    STANDARD.encode(code.as_bytes())
}

fn language_index(language: Language) -> usize {
    match language {
        Language::Cpp => 0,
        Language::Python39 => 1,
        Language::Java => 2,
    }
}

fn log_section_scan(content: &str) {
    let found = scan_markers(content);
    debug!("发现 {} 个区段标记: {:?}", found.len(), found);

    let known: Vec<String> = Section::all().into_iter().map(Section::name).collect();
    for name in &known {
        if !found.contains(name) {
            warn!("⚠️ 缺少区段 {}，使用空内容", name);
        }
    }
    for name in &found {
        if !known.contains(name) {
            warn!("⚠️ 未知区段 {}，已忽略", name);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVEL_START: &str = "----------QUESTION_LEVEL_START----------";
    const LEVEL_END: &str = "----------QUESTION_LEVEL_END----------";

    #[test]
    fn test_extract_trims_content() {
        let text = format!("head\n{LEVEL_START}\n  Easy \n{LEVEL_END}\ntail");
        assert_eq!(extract_section(&text, LEVEL_START, LEVEL_END), "Easy");
    }

    #[test]
    fn test_missing_markers_give_empty_string() {
        assert_eq!(extract_section("no markers here", LEVEL_START, LEVEL_END), "");
        let only_start = format!("{LEVEL_START} Easy");
        assert_eq!(extract_section(&only_start, LEVEL_START, LEVEL_END), "");
        let only_end = format!("Easy {LEVEL_END}");
        assert_eq!(extract_section(&only_end, LEVEL_START, LEVEL_END), "");
    }

    #[test]
    fn test_end_before_start_gives_empty_string() {
        let text = format!("{LEVEL_END} x {LEVEL_START} Easy");
        assert_eq!(extract_section(&text, LEVEL_START, LEVEL_END), "");
    }

    #[test]
    fn test_first_occurrence_wins() {
        let text = format!("{LEVEL_START}a{LEVEL_END}{LEVEL_START}b{LEVEL_END}");
        assert_eq!(extract_section(&text, LEVEL_START, LEVEL_END), "a");
    }

    #[test]
    fn test_section_markers() {
        assert_eq!(
            Section::CodeContent(Language::Python39).start_marker(),
            "----------CODE_CONTENT_PYTHON_START----------"
        );
        assert_eq!(
            Section::CodeBase64(Language::Java).end_marker(),
            "----------CODE_BASE64_JAVA_END----------"
        );
        assert_eq!(Section::all().len(), 9);
    }

    #[test]
    fn test_scan_markers() {
        let text = format!(
            "{LEVEL_START}Easy{LEVEL_END}\n----------CODE_BASE64_CPP_START----------\nint main(){{}}\n----------CODE_BASE64_CPP_END----------"
        );
        assert_eq!(scan_markers(&text), vec!["QUESTION_LEVEL", "CODE_BASE64_CPP"]);
    }

    #[test]
    fn test_extract_all_sections() {
        let text = "\
----------QUESTION_LEVEL_START----------
Hard
----------QUESTION_LEVEL_END----------
----------QUESTION_DESCRIPTION_START----------
Sum two numbers.
----------QUESTION_DESCRIPTION_END----------
----------CODE_CONTENT_JAVA_START----------
class Solution {}
----------CODE_CONTENT_JAVA_END----------
----------CODE_BASE64_PYTHON_START----------
print(1)
----------CODE_BASE64_PYTHON_END----------
";
        let sections = QuestionSections::extract(text);
        assert_eq!(sections.level, "Hard");
        assert_eq!(sections.description, "Sum two numbers.");
        assert_eq!(sections.short_text, "");
        assert_eq!(sections.code_content(Language::Java), "class Solution {}");
        assert_eq!(sections.code_content(Language::Cpp), "");
        assert_eq!(sections.code_base64(Language::Python39), "cHJpbnQoMSk=");
        assert_eq!(sections.code_base64(Language::Cpp), "");
    }
}
