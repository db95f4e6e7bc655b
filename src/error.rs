use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 参数数量不正确（在任何文件读写之前报告）
    #[error("用法: {program} {usage}")]
    Usage { program: String, usage: String },
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 输入内容格式错误
    #[error("输入格式错误: {0}")]
    Input(#[from] InputError),
    /// 难度 / 分值错误
    #[error("分值错误: {0}")]
    Scoring(#[from] ScoringError),
    /// 输出文档序列化失败
    #[error("JSON序列化失败: {0}")]
    Serialize(#[from] serde_json::Error),
    /// 序列化结果不是合法的 UTF-8
    #[error("输出编码错误: {0}")]
    Encoding(#[source] std::str::Utf8Error),
    /// HTTP 服务无法监听或运行中断
    #[error("HTTP 服务错误 ({addr}): {source}")]
    Server {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// 输入内容错误（JSON 非法或缺少必需字段）
#[derive(Debug, Error)]
pub enum InputError {
    /// JSON 解析失败
    #[error("JSON解析失败 ({path}): {source}")]
    InvalidJson {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    /// 上传内容不是合法的 UTF-8 文本
    #[error("不是合法的 UTF-8 文本: {path}")]
    InvalidUtf8 { path: String },
    /// 顶层不是数组
    #[error("顶层必须是数组: {path}")]
    NotAList { path: String },
    /// 顶层数组为空
    #[error("顶层数组为空: {path}")]
    EmptyDocument { path: String },
    /// 缺少必需字段
    #[error("缺少必需字段: {field}")]
    MissingField { field: String },
    /// 声明了多个可能输出，但没有提供 outputs
    #[error("测试用例 {order} 声明了 multiple_possible_output，但缺少 outputs")]
    MissingOutputs { order: usize },
}

/// 难度与分值错误
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    /// 未知的难度等级
    #[error("未知的难度等级: {level:?}")]
    UnknownDifficulty { level: String },
    /// 总分不足以给每个测试用例分配最低权重
    #[error("总分 {total_score} 太小，无法为 {count} 个测试用例各分配最低权重 0.1")]
    ScoreTooSmall { total_score: u32, count: usize },
}

impl AppError {
    /// 创建参数错误
    pub fn usage(program: impl Into<String>, usage: impl Into<String>) -> Self {
        AppError::Usage {
            program: program.into(),
            usage: usage.into(),
        }
    }

    /// 创建缺少字段错误
    pub fn missing_field(field: impl Into<String>) -> Self {
        AppError::Input(InputError::MissingField {
            field: field.into(),
        })
    }

    /// 进程退出码，按错误种类区分
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::Usage { .. } => 2,
            AppError::File(_) => 3,
            AppError::Input(_) => 4,
            AppError::Scoring(_) => 5,
            AppError::Serialize(_) | AppError::Encoding(_) | AppError::Server { .. } => 1,
        }
    }
}

impl FileError {
    /// 根据 io 错误种类区分"不存在"与其他读取失败
    pub fn from_io(path: impl Into<String>, err: std::io::Error) -> Self {
        let path = path.into();
        if err.kind() == std::io::ErrorKind::NotFound {
            FileError::NotFound { path }
        } else {
            FileError::ReadFailed { path, source: err }
        }
    }
}

/// HTTP 接口错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 缺少必需的上传字段
    #[error("Missing required files.")]
    MissingFiles,
    /// multipart 请求体无法解析
    #[error("Multipart error: {0}")]
    Multipart(String),
    /// 上传内容处理失败
    #[error(transparent)]
    Processing(#[from] AppError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::MissingFiles | ApiError::Multipart(_) => {
                tracing::warn!("⚠️ 请求无效: {}", self);
                (StatusCode::BAD_REQUEST, self.to_string()).into_response()
            }
            ApiError::Processing(err) => {
                tracing::error!("❌ 处理上传文件失败: {}", err);
                let body = json!({
                    "message": "Failed to process files.",
                    "error": err.to_string(),
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
