//! # 交互确认工具
//!
//! yes/no 确认循环，其他输入会被拒绝并重新提示。
//!
//! ## 依赖关系
//! - 被 `commands/annotate.rs` 使用
//! - 使用 `console` crate 输出到终端

use console::{style, Term};
use std::io::{self, BufRead, Write};

/// 询问 yes/no，读到 EOF 视为 no
pub fn confirm<R: BufRead, W: Write>(
    question: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<bool> {
    loop {
        write!(output, "{} (yes/no): ", question)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output)?;
            return Ok(false);
        }

        match line.trim().to_lowercase().as_str() {
            "yes" => return Ok(true),
            "no" => return Ok(false),
            _ => writeln!(output, "Please enter 'yes' or 'no'.")?,
        }
    }
}

/// 在终端上询问（提示写到 stderr，回答读自 stdin）
pub fn confirm_on_terminal(question: &str) -> io::Result<bool> {
    let question = style(question).bold().to_string();
    let mut term = Term::stderr();
    let stdin = io::stdin();
    confirm(&question, &mut stdin.lock(), &mut term)
}
