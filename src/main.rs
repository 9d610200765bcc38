use anyhow::Result;
use cause_list_scraper::orchestrator::App;
use cause_list_scraper::{logger, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志（控制台 + 文件）
    logger::init(&config.log_dir)?;

    // 初始化并运行应用
    App::initialize(config).await?.run().await?;

    Ok(())
}
