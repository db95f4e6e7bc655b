//! # Coding Question Factory
//!
//! 把标记分隔的题目源文本和测试用例 JSON 转换为内容管理后台使用的编程题文档
//!
//! ## 架构设计
//!
//! 本系统采用分层结构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 难度、语言、测试用例、题目文档，以及文件加载
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个服务只做一件事
//! - `section_extractor` - 从源文本提取区段
//! - `test_case_builder` - 规范化测试用例
//! - `weight_assigner` - 按难度随机分配权重
//! - `markdown_merger` - 合并三种语言的题解
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份题目文档"的完整处理流程
//! - `question_assembler` - 新建 / 更新
//! - `id_regenerator` - 重新生成标识
//!
//! ### ④ 入口层（App）
//! - `app` - 参数校验、日志、输出与退出码；`src/bin/` 下每个可执行文件对应一个 `Command`
//! - `server` - 同样四个操作的 HTTP 上传接口（`serve_cq`）
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::{App, Command};
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{CodingQuestion, Difficulty, Language, TestCase};
pub use workflow::{create_question, regenerate_ids, update_question};
