//! 启动 HTTP 服务

use coding_question_factory::server;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    server::run().await
}
