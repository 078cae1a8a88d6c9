//! Bean 定义注册表抽象接口

use infrastructure_common::{BeanDefinition, ComponentType, ConfigurationResult, DependencyResult};

/// Bean 定义注册表 trait
///
/// 启动时由发现结果一次性构建，之后只读
pub trait BeanDefinitionRegistry: Send + Sync {
    /// 由组件类型计算 Bean 定义并登记，名称重复时返回配置错误
    fn register(&mut self, component_type: ComponentType) -> ConfigurationResult<&BeanDefinition>;

    /// 按名称查找 Bean 定义
    fn lookup(&self, bean_name: &str) -> DependencyResult<&BeanDefinition>;

    /// 检查名称是否已登记
    fn contains(&self, bean_name: &str) -> bool;

    /// 按登记顺序返回所有 Bean 定义
    fn definitions(&self) -> Vec<&BeanDefinition>;

    /// 已登记的定义数量
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
