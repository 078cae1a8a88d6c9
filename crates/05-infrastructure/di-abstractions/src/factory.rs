//! Bean 工厂抽象接口

use crate::resolver::{BeanResolver, ResolveContext};
use infrastructure_common::{Bean, BeanDefinition, DependencyResult};

/// Bean 工厂 trait
///
/// 给定 Bean 定义，依次执行构造、注入、生命周期回调和后置处理，
/// 返回最终对外暴露的对象（可能是代理）
pub trait BeanFactory: Send + Sync {
    /// 创建 Bean
    ///
    /// 依赖通过 `resolver` 递归获取，任何阶段失败都不会产生部分初始化的 Bean
    fn create_bean(
        &self,
        definition: &BeanDefinition,
        resolver: &dyn BeanResolver,
        context: &mut ResolveContext,
    ) -> DependencyResult<Bean>;
}
