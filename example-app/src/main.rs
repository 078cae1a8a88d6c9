//! # 示例应用程序
//!
//! 扫描 `example_app::service` 下的组件，构建应用上下文并调用 `userService`

mod service;

use anyhow::Context as _;
use clap::Parser;
use di_impl::ApplicationContext;
use infrastructure_common::ContainerConfig;
use service::UserApi;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "Lorn IoC 容器示例应用")]
struct Args {
    /// 组件扫描路径
    #[arg(short, long, default_value = "example_app::service")]
    root: String,

    /// 要调用的 Bean 名称
    #[arg(short, long, default_value = "userService")]
    bean: String,

    /// 容器配置文件路径，不存在时使用默认配置和环境变量
    #[arg(short, long, default_value = "config/container.toml")]
    config: PathBuf,

    /// 关闭单例预创建
    #[arg(long)]
    lazy: bool,

    /// 日志级别
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&args.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("启动 Lorn IoC 示例应用");

    let mut config = ContainerConfig::load(Some(args.config.as_path())).context("加载容器配置失败")?;
    if args.lazy {
        config = config.with_eager_init(false);
    }

    let context = ApplicationContext::builder()
        .scan(&args.root)
        .with_config(config)
        .build()
        .with_context(|| format!("构建应用上下文失败: {}", args.root))?;

    info!(
        context_id = %context.id(),
        singletons = context.singleton_count(),
        post_processors = context.post_processor_count(),
        "应用上下文就绪"
    );
    for name in context.bean_names() {
        let scope = context
            .bean_definition(&name)
            .map(|definition| definition.scope().to_string())
            .unwrap_or_default();
        println!("{name} ({scope})");
    }

    let user_api = context
        .get_bean_as::<dyn UserApi>(&args.bean)
        .with_context(|| format!("获取 Bean 失败: {}", args.bean))?;
    println!("{}", user_api.test());

    info!("应用已退出");
    Ok(())
}
