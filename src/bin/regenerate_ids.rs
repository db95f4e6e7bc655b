//! 重新生成题目文档中的标识

use coding_question_factory::app::{self, Command};
use std::process::ExitCode;

fn main() -> ExitCode {
    app::run(Command::RegenerateIds)
}
