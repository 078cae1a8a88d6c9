//! 依赖解析抽象接口
//!
//! 注入阶段按字段名递归解析依赖，解析上下文记录当前解析链

use infrastructure_common::{Bean, ContainerConfig, DependencyError, DependencyResult};

/// Bean 解析器 trait
///
/// 外部调用方与注入阶段共用同一个入口
pub trait BeanResolver: Send + Sync {
    /// 在给定解析上下文中按名称获取 Bean
    fn resolve(&self, bean_name: &str, context: &mut ResolveContext) -> DependencyResult<Bean>;
}

/// 解析上下文
#[derive(Debug, Clone, Default)]
pub struct ResolveContext {
    /// 当前解析链，用于检测循环依赖
    chain: Vec<String>,
    /// 解析选项
    options: ResolveOptions,
}

impl ResolveContext {
    /// 创建新的解析上下文
    pub fn new(options: ResolveOptions) -> Self {
        Self {
            chain: Vec::new(),
            options,
        }
    }

    /// 进入一个 Bean 的创建
    pub fn enter(&mut self, bean_name: &str) -> DependencyResult<()> {
        if self.options.detect_cycles && self.chain.iter().any(|name| name == bean_name) {
            return Err(DependencyError::CircularDependency {
                chain: self.describe_with(bean_name),
            });
        }
        if self.chain.len() >= self.options.max_depth {
            return Err(DependencyError::ResolutionTooDeep {
                max_depth: self.options.max_depth,
                chain: self.describe_with(bean_name),
            });
        }
        self.chain.push(bean_name.to_string());
        tracing::trace!(bean_name, depth = self.chain.len(), "进入 Bean 解析");
        Ok(())
    }

    /// 离开当前 Bean 的创建
    pub fn exit(&mut self) {
        self.chain.pop();
    }

    /// 当前解析深度
    pub fn depth(&self) -> usize {
        self.chain.len()
    }

    /// 当前解析链，从最外层的 Bean 开始
    pub fn chain(&self) -> &[String] {
        &self.chain
    }

    fn describe_with(&self, bean_name: &str) -> String {
        self.chain
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(bean_name))
            .collect::<Vec<_>>()
            .join(" -> ")
    }
}

/// 解析选项
#[derive(Debug, Clone)]
pub struct ResolveOptions {
    /// 是否检测循环依赖
    pub detect_cycles: bool,
    /// 最大递归深度
    pub max_depth: usize,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self::from(&ContainerConfig::default())
    }
}

impl From<&ContainerConfig> for ResolveOptions {
    fn from(config: &ContainerConfig) -> Self {
        Self {
            detect_cycles: config.detect_circular_dependencies,
            max_depth: config.max_resolution_depth,
        }
    }
}
