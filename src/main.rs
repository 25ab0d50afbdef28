use anyhow::Result;
use siyuan_auto_space::config::Config;
use siyuan_auto_space::logger;
use siyuan_auto_space::App;

#[tokio::main]
async fn main() -> Result<()> {
    // 加载配置
    let config = Config::from_env();

    // 初始化日志（文件 + 控制台）
    let _guard = logger::init(&config.log_dir)?;

    // 初始化并运行应用
    App::initialize(config).run().await;

    Ok(())
}
