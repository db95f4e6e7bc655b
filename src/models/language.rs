/// 题目支持的编程语言
///
/// 每种语言带有固定的执行元数据（入口文件、提交文件、时间限制），
/// 以及在源文本中使用的区段标记名。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Language {
    #[serde(rename = "CPP")]
    Cpp,
    #[serde(rename = "PYTHON39")]
    Python39,
    #[serde(rename = "JAVA")]
    Java,
}

impl Language {
    /// 输出文档中的固定顺序
    pub const ALL: [Language; 3] = [Language::Cpp, Language::Python39, Language::Java];

    /// 文档中使用的语言代码
    pub fn code(self) -> &'static str {
        match self {
            Language::Cpp => "CPP",
            Language::Python39 => "PYTHON39",
            Language::Java => "JAVA",
        }
    }

    /// 源文本标记中的语言名（CODE_CONTENT_<名>_START）
    pub fn marker_name(self) -> &'static str {
        match self {
            Language::Cpp => "CPP",
            Language::Python39 => "PYTHON",
            Language::Java => "JAVA",
        }
    }

    pub fn file_path_to_execute(self) -> &'static str {
        match self {
            Language::Cpp => "main.cpp",
            Language::Python39 => "main.py",
            Language::Java => "Main.java",
        }
    }

    pub fn default_file_path_to_submit_code(self) -> &'static str {
        match self {
            Language::Cpp => "solution.cpp",
            Language::Python39 => "solution.py",
            Language::Java => "Solution.java",
        }
    }

    /// 执行时间限制（秒）
    pub fn time_limit_seconds(self) -> f64 {
        match self {
            Language::Cpp => 1.0,
            Language::Python39 => 4.0,
            Language::Java => 2.0,
        }
    }

    /// 只有 CPP 是默认展示的代码
    pub fn is_default_code(self) -> bool {
        self == Language::Cpp
    }

    /// Markdown 代码块的语言标签
    pub fn fence_tag(self) -> &'static str {
        match self {
            Language::Cpp => "cpp",
            Language::Python39 => "python",
            Language::Java => "java",
        }
    }

    /// 从文档中的语言代码解析
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
