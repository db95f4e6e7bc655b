use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::models::{load_question_document, load_test_cases, read_source_text};
use crate::services::merge_solutions;
use crate::utils::json::to_pretty_json;
use crate::utils::logging;
use crate::workflow::{create_question, regenerate_ids, update_question};
use std::path::Path;
use std::process::ExitCode;
use tracing::error;

/// 命令行入口
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// 新建题目文档
    Create,
    /// 更新已有题目文档
    Update,
    /// 重新生成文档中的标识
    RegenerateIds,
    /// 合并三种语言的题解
    MergeSolutions,
}

impl Command {
    /// 可执行文件名
    pub fn program(self) -> &'static str {
        match self {
            Command::Create => "create_cq",
            Command::Update => "update_cq",
            Command::RegenerateIds => "regenerate_ids",
            Command::MergeSolutions => "merge_solutions",
        }
    }

    /// 位置参数名
    pub fn arg_names(self) -> &'static [&'static str] {
        match self {
            Command::Create => &["<source_file>", "<testcases_file>"],
            Command::Update => &["<existing_json_file>", "<source_file>", "<testcases_file>"],
            Command::RegenerateIds => &["<json_file>"],
            Command::MergeSolutions => &["<cpp_file>", "<py_file>", "<java_file>"],
        }
    }

    /// JSON 输出的缩进宽度
    pub fn json_indent(self) -> usize {
        match self {
            Command::RegenerateIds => 2,
            _ => 4,
        }
    }
}

/// 应用主结构
pub struct App {
    config: Config,
    command: Command,
    args: Vec<String>,
}

impl App {
    /// 初始化应用，参数数量不对时立即返回用法错误
    pub fn initialize(config: Config, command: Command, args: Vec<String>) -> AppResult<Self> {
        if args.len() != command.arg_names().len() {
            return Err(AppError::usage(command.program(), command.arg_names().join(" ")));
        }
        Ok(Self { config, command, args })
    }

    /// 运行命令，返回要写到标准输出的文档
    pub fn run(&self) -> AppResult<String> {
        logging::log_startup(self.command.program(), &self.args);
        let path = |idx: usize| Path::new(&self.args[idx]);

        match self.command {
            Command::Create => {
                let source = read_source_text(path(0))?;
                let test_cases = load_test_cases(path(1))?;
                let document = create_question(&source, &test_cases, &mut self.config.weight_rng())?;
                to_pretty_json(&document, self.command.json_indent())
            }
            Command::Update => {
                let existing = load_question_document(path(0))?;
                let source = read_source_text(path(1))?;
                let test_cases = load_test_cases(path(2))?;
                let document = update_question(existing, &source, &test_cases, &mut self.config.weight_rng())?;
                to_pretty_json(&document, self.command.json_indent())
            }
            Command::RegenerateIds => {
                let existing = load_question_document(path(0))?;
                let document = regenerate_ids(existing)?;
                to_pretty_json(&document, self.command.json_indent())
            }
            Command::MergeSolutions => Ok(merge_solutions(path(0), path(1), path(2))),
        }
    }
}

/// 可执行文件的统一入口
///
/// 成功时把文档写到 stdout；失败时只在 stderr 输出错误，并以按错误种类区分的非零码退出。
pub fn run(command: Command) -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = Config::from_env();

    let app = match App::initialize(config.clone(), command, args) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::from(e.exit_code());
        }
    };

    logging::init(&config);
    match app.run() {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("❌ {} 失败: {}", command.program(), e);
            eprintln!("错误: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_wrong_arg_count_is_usage_error() {
        let err = App::initialize(Config::default(), Command::Create, args(&["only_one"]))
            .err()
            .unwrap();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "用法: create_cq <source_file> <testcases_file>");

        assert!(App::initialize(Config::default(), Command::MergeSolutions, args(&[])).is_err());
        assert!(App::initialize(Config::default(), Command::RegenerateIds, args(&["a", "b"])).is_err());
    }

    #[test]
    fn test_missing_input_file() {
        let app = App::initialize(
            Config::default(),
            Command::RegenerateIds,
            args(&["/no/such/question.json"]),
        )
        .unwrap();
        assert_eq!(app.run().unwrap_err().exit_code(), 3);
    }

    #[test]
    fn test_seeded_create_is_reproducible() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("question.txt");
        let cases = dir.path().join("cases.json");
        fs::write(
            &source,
            "----------QUESTION_LEVEL_START----------\nMedium\n----------QUESTION_LEVEL_END----------\n",
        )
        .unwrap();
        fs::write(
            &cases,
            r#"[{"test_cases":[{"input":"1"},{"input":"2"},{"input":"3"},{"input":"4"}]}]"#,
        )
        .unwrap();

        let config = Config {
            weight_seed: Some(11),
            ..Config::default()
        };
        let run = || {
            let app = App::initialize(
                config.clone(),
                Command::Create,
                args(&[source.to_str().unwrap(), cases.to_str().unwrap()]),
            )
            .unwrap();
            let doc: serde_json::Value = serde_json::from_str(&app.run().unwrap()).unwrap();
            doc[0]["test_cases"]
                .as_array()
                .unwrap()
                .iter()
                .map(|tc| tc["weightage"].as_f64().unwrap())
                .collect::<Vec<f64>>()
        };

        let first = run();
        assert_eq!(first, run());
        let cents: i64 = first.iter().map(|w| (w * 100.0).round() as i64).sum();
        assert_eq!(cents, 2500);
    }

    #[test]
    fn test_regenerate_uses_two_space_indent() {
        let dir = tempdir().unwrap();
        let doc = dir.path().join("doc.json");
        fs::write(&doc, r#"[{"question":{"question_id":"q"}}]"#).unwrap();

        let app = App::initialize(Config::default(), Command::RegenerateIds, args(&[doc.to_str().unwrap()])).unwrap();
        let output = app.run().unwrap();
        assert!(output.starts_with("[\n  {\n    \"question\""));
    }
}
