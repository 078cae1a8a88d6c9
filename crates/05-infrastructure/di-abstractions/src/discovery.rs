//! 组件发现抽象接口

use infrastructure_common::{ComponentType, ConfigurationResult};

/// 组件发现服务 trait
///
/// 给定扫描路径，返回其中所有可发现的组件类型。每个类型最多出现一次，
/// 顺序不作保证，调用方只能依赖 Bean 名称的唯一性
pub trait ComponentDiscovery: Send + Sync {
    /// 发现器名称
    fn name(&self) -> &str;

    /// 发现组件，扫描路径无效时返回配置错误
    fn discover(&self, root: &str) -> ConfigurationResult<Vec<ComponentType>>;
}
