//! 容器配置
//!
//! 配置来源依次为：代码默认值、可选配置文件、`LORN_IOC__*` 环境变量

use crate::errors::ConfigurationResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 环境变量前缀
pub const ENV_PREFIX: &str = "LORN_IOC";

/// 容器配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainerConfig {
    /// 检测循环依赖并立即失败
    pub detect_circular_dependencies: bool,
    /// 依赖解析链的最大深度
    pub max_resolution_depth: usize,
    /// 上下文构建时是否预先创建所有单例
    pub eager_init_singletons: bool,
}

impl Default for ContainerConfig {
    fn default() -> Self {
        Self {
            detect_circular_dependencies: true,
            max_resolution_depth: 64,
            eager_init_singletons: true,
        }
    }
}

impl ContainerConfig {
    /// 从可选配置文件和默认前缀的环境变量加载
    pub fn load(path: Option<&Path>) -> ConfigurationResult<Self> {
        Self::load_with_prefix(path, ENV_PREFIX)
    }

    /// 从可选配置文件和指定前缀的环境变量加载
    pub fn load_with_prefix(path: Option<&Path>, env_prefix: &str) -> ConfigurationResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(false));
        }

        let settings = builder
            .add_source(
                config::Environment::with_prefix(env_prefix)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let loaded = settings.try_deserialize::<Self>()?;
        tracing::debug!(?loaded, "容器配置加载完成");
        Ok(loaded)
    }

    pub fn with_cycle_detection(mut self, enabled: bool) -> Self {
        self.detect_circular_dependencies = enabled;
        self
    }

    pub fn with_max_resolution_depth(mut self, depth: usize) -> Self {
        self.max_resolution_depth = depth;
        self
    }

    pub fn with_eager_init(mut self, enabled: bool) -> Self {
        self.eager_init_singletons = enabled;
        self
    }
}
