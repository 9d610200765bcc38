//! 验证码关卡 - 业务能力层
//!
//! 验证码永远不自动识别，这是硬性约束。
//! 表单填好后流程在这里无限期挂起，交还给操作员：
//! 在浏览器里完成验证码，回到终端按回车继续。

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// 验证码关卡
///
/// 职责：
/// - 打印操作指引并挂起等待操作员确认
/// - 没有超时，没有自动兜底，只能由人或进程终止解除
pub struct CaptchaGate;

impl CaptchaGate {
    /// 创建新的验证码关卡
    pub fn new() -> Self {
        Self
    }

    /// 挂起等待操作员完成验证码
    pub async fn wait_for_operator(&self) -> Result<()> {
        println!("\n{}", ">".repeat(70));
        println!("  请在浏览器窗口中完成验证码");
        println!("  （不要点击查询按钮，提交由程序完成）");
        println!("{}", ">".repeat(70));
        print!("\n  >>> 验证码输入完成后，回到这里按回车继续 <<<\n");

        let mut line = String::new();
        let mut reader = BufReader::new(tokio::io::stdin());
        reader.read_line(&mut line).await?;

        info!("✓ 操作员已确认验证码，继续流程");
        Ok(())
    }
}

impl Default for CaptchaGate {
    fn default() -> Self {
        Self::new()
    }
}
