use uuid::Uuid;

/// 生成新的唯一标识（UUID v4，小写连字符形式）
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}
