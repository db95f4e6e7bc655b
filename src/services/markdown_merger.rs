//! 题解合并服务 - 业务能力层
//!
//! 把三种语言的题解源码合并成一个 Markdown 文档

use std::fs;
use std::path::Path;
use tracing::warn;

use crate::models::Language;

/// 读取源码文件，失败时返回占位注释而不是报错
pub fn read_file_content(path: &Path) -> String {
    let file_name = path
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string();

    match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("⚠️ 文件不存在: {}", path.display());
            not_found_placeholder(&file_name)
        }
        Err(e) => {
            warn!("⚠️ 读取文件失败 {}: {}", path.display(), e);
            read_error_placeholder(&file_name)
        }
    }
}

/// 源码缺失时的占位注释
pub fn not_found_placeholder(file_name: &str) -> String {
    format!("// File not found: {}\n", file_name)
}

/// 源码无法读取时的占位注释
pub fn read_error_placeholder(file_name: &str) -> String {
    format!("// Error reading file: {}\n", file_name)
}

/// 生成合并后的 Markdown 文档
///
/// `sources` 按 `Language::ALL` 顺序给出 CPP、Python、Java 的源码。
pub fn render_markdown(sources: [&str; 3]) -> String {
    let mut doc = String::from("### Code Implementation\n\n<MultiLanguageCodeBlock>\n\n");
    for (lang, code) in Language::ALL.iter().zip(sources) {
        doc.push_str(&format!("```{}\n{}\n```\n\n", lang.fence_tag(), code.trim()));
    }
    doc.push_str("</MultiLanguageCodeBlock>");
    doc
}

/// 读取三个题解文件并合并
pub fn merge_solutions(cpp_path: &Path, py_path: &Path, java_path: &Path) -> String {
    let sources = [cpp_path, py_path, java_path].map(read_file_content);
    render_markdown([sources[0].as_str(), sources[1].as_str(), sources[2].as_str()])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_render_layout() {
        let doc = render_markdown(["int main() {}\n", "\n  print(1)  \n", "class Main {}"]);
        let expected = "\
### Code Implementation

<MultiLanguageCodeBlock>

```cpp
int main() {}
```

```python
print(1)
```

```java
class Main {}
```

</MultiLanguageCodeBlock>";
        assert_eq!(doc, expected);
    }

    #[test]
    fn test_missing_file_placeholder() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("solution.py");
        assert_eq!(read_file_content(&missing), "// File not found: solution.py\n");
    }

    #[test]
    fn test_unreadable_file_placeholder() {
        let dir = tempdir().unwrap();
        // 目录无法按文件读取
        let as_dir = dir.path().join("Main.java");
        fs::create_dir(&as_dir).unwrap();
        assert_eq!(read_file_content(&as_dir), "// Error reading file: Main.java\n");
    }

    #[test]
    fn test_merge_with_one_missing_file() {
        let dir = tempdir().unwrap();
        let cpp = dir.path().join("a.cpp");
        let java = dir.path().join("A.java");
        fs::write(&cpp, "int x;\n").unwrap();
        fs::write(&java, "class A {}\n").unwrap();

        let doc = merge_solutions(&cpp, &dir.path().join("a.py"), &java);
        assert!(doc.contains("```cpp\nint x;\n```"));
        assert!(doc.contains("```python\n// File not found: a.py\n```"));
        assert!(doc.contains("```java\nclass A {}\n```"));
    }
}
