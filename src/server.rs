//! HTTP 服务 - 入口层
//!
//! 把命令行的四个操作以 multipart 上传的方式提供给前端页面：
//! - `POST /api/process/create`：`luaFile` + `testcasesFile`
//! - `POST /api/process/update`：`existingJson` + `luaFile` + `testcasesFile`
//! - `POST /api/process/regenerate-ids`：`jsonFile`
//! - `POST /api/process/merge`：`cppFile` + `pyFile` + `javaFile`
//!
//! 上传内容只保存在内存中，请求结束即释放；处理逻辑与命令行完全相同。

use std::collections::HashMap;
use std::process::ExitCode;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::Router;
use serde::Serialize;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info};

use crate::app::Command;
use crate::config::Config;
use crate::error::{ApiError, AppError, AppResult, InputError};
use crate::models::{parse_question_document, parse_test_cases};
use crate::services::{not_found_placeholder, read_error_placeholder, render_markdown};
use crate::utils::json::to_pretty_json;
use crate::utils::logging;
use crate::workflow::{create_question, regenerate_ids, update_question};

/// 单个请求体的大小上限
const MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

type SharedConfig = Arc<Config>;

/// 构建路由
pub fn router(config: Config) -> Router {
    Router::new()
        .route("/api/process/create", post(create_handler))
        .route("/api/process/update", post(update_handler))
        .route("/api/process/regenerate-ids", post(regenerate_ids_handler))
        .route("/api/process/merge", post(merge_handler))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(CorsLayer::permissive())
        .with_state(Arc::new(config))
}

/// 监听配置的地址并处理请求，直到进程退出
pub async fn serve(config: Config) -> AppResult<()> {
    let addr = config.server_addr();
    let server_error = |source| AppError::Server {
        addr: addr.clone(),
        source,
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.map_err(server_error)?;
    info!("🚀 Coding Question Factory 服务已启动: http://{}", addr);

    axum::serve(listener, router(config)).await.map_err(server_error)
}

/// `serve_cq` 可执行文件的入口
pub async fn run() -> ExitCode {
    let config = Config::from_env();
    logging::init_with_default(&config, "info");

    match serve(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ 服务退出: {}", e);
            eprintln!("错误: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

async fn create_handler(State(config): State<SharedConfig>, multipart: Multipart) -> Result<Response, ApiError> {
    let uploads = Uploads::read(multipart).await?;
    uploads.require(&["luaFile", "testcasesFile"])?;

    let source = uploads.text("luaFile")?;
    let test_cases = parse_test_cases(&uploads.text("testcasesFile")?, "testcasesFile")?;
    let document = create_question(&source, &test_cases, &mut config.weight_rng())?;
    json_attachment(&document, Command::Create, "coding_questions.json")
}

async fn update_handler(State(config): State<SharedConfig>, multipart: Multipart) -> Result<Response, ApiError> {
    let uploads = Uploads::read(multipart).await?;
    uploads.require(&["existingJson", "luaFile", "testcasesFile"])?;

    let existing = parse_question_document(&uploads.text("existingJson")?, "existingJson")?;
    let source = uploads.text("luaFile")?;
    let test_cases = parse_test_cases(&uploads.text("testcasesFile")?, "testcasesFile")?;
    let document = update_question(existing, &source, &test_cases, &mut config.weight_rng())?;
    json_attachment(&document, Command::Update, "coding_questions.json")
}

async fn regenerate_ids_handler(multipart: Multipart) -> Result<Response, ApiError> {
    let uploads = Uploads::read(multipart).await?;
    uploads.require(&["jsonFile"])?;

    let existing = parse_question_document(&uploads.text("jsonFile")?, "jsonFile")?;
    let document = regenerate_ids(existing)?;
    json_attachment(&document, Command::RegenerateIds, "coding_questions_new_ids.json")
}

/// 缺失或无法解码的源码用占位注释代替，与命令行读文件的行为一致
async fn merge_handler(multipart: Multipart) -> Result<Response, ApiError> {
    let uploads = Uploads::read(multipart).await?;

    let sources = [
        ("cppFile", "solution.cpp"),
        ("pyFile", "solution.py"),
        ("javaFile", "solution.java"),
    ]
    .map(|(field, default_name)| uploads.text_or_placeholder(field, default_name));

    let markdown = render_markdown([sources[0].as_str(), sources[1].as_str(), sources[2].as_str()]);
    Ok(([(header::CONTENT_TYPE, "text/markdown; charset=utf-8")], markdown).into_response())
}

fn json_attachment<T: Serialize + ?Sized>(
    document: &T,
    command: Command,
    file_name: &str,
) -> Result<Response, ApiError> {
    let body = to_pretty_json(document, command.json_indent())?;
    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (header::CONTENT_DISPOSITION, format!("attachment; filename={}", file_name)),
    ];
    Ok((headers, body).into_response())
}

/// 一个上传的文件
struct Upload {
    file_name: Option<String>,
    bytes: Bytes,
}

/// 一次请求中上传的全部文件，按表单字段名索引
struct Uploads {
    files: HashMap<String, Upload>,
}

impl Uploads {
    async fn read(mut multipart: Multipart) -> Result<Self, ApiError> {
        let mut files = HashMap::new();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::Multipart(e.to_string()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let file_name = field.file_name().map(str::to_string);
            let bytes = field.bytes().await.map_err(|e| ApiError::Multipart(e.to_string()))?;
            debug!("收到上传字段 {} ({} 字节)", name, bytes.len());
            files.insert(name, Upload { file_name, bytes });
        }
        Ok(Self { files })
    }

    /// 任何一个必需字段缺失都视为请求无效
    fn require(&self, fields: &[&str]) -> Result<(), ApiError> {
        if fields.iter().all(|field| self.files.contains_key(*field)) {
            Ok(())
        } else {
            Err(ApiError::MissingFiles)
        }
    }

    fn text(&self, field: &str) -> Result<String, ApiError> {
        let upload = self.files.get(field).ok_or(ApiError::MissingFiles)?;
        let text = std::str::from_utf8(&upload.bytes).map_err(|_| {
            AppError::from(InputError::InvalidUtf8 {
                path: field.to_string(),
            })
        })?;
        Ok(text.to_string())
    }

    fn text_or_placeholder(&self, field: &str, default_name: &str) -> String {
        let Some(upload) = self.files.get(field) else {
            return not_found_placeholder(default_name);
        };
        let name = upload.file_name.as_deref().unwrap_or(default_name);
        match std::str::from_utf8(&upload.bytes) {
            Ok(text) => text.to_string(),
            Err(_) => read_error_placeholder(name),
        }
    }
}
