//! 后置处理器链抽象接口

use infrastructure_common::{Bean, Component, DependencyResult};

/// 后置处理器链 trait
///
/// 登记顺序即调用顺序，两个钩子都按同一顺序折叠
pub trait ProcessorChain: Send + Sync {
    /// 实例具备后置处理器能力时追加到链尾，返回是否追加
    fn register_if_processor(&self, bean: &Bean) -> bool;

    /// 依次执行前置钩子，每个处理器接收上一个处理器的返回值
    fn run_before(&self, bean_name: &str, bean: Box<dyn Component>) -> DependencyResult<Box<dyn Component>>;

    /// 依次执行后置钩子，每个处理器接收上一个处理器的返回值
    fn run_after(&self, bean_name: &str, bean: Bean) -> DependencyResult<Bean>;

    /// 已登记的处理器数量
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
