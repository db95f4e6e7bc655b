//! 更新已有题目文档

use coding_question_factory::app::{self, Command};
use std::process::ExitCode;

fn main() -> ExitCode {
    app::run(Command::Update)
}
