use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{AppError, AppResult};

/// 以指定缩进宽度输出格式化的 JSON
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> AppResult<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut ser)?;
    String::from_utf8(buf).map_err(|e| AppError::Encoding(e.utf8_error()))
}
