//! 后置处理器链实现

use di_abstractions::ProcessorChain;
use infrastructure_common::{Bean, BeanPostProcessor, Component, DependencyError, DependencyResult};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, info};

/// 后置处理器链
///
/// 登记只发生在上下文构建期间，之后每次调用都对快照折叠
///
/// 后置处理器自身的依赖在链完整之前创建，不会经过全部后置处理器，
/// 上下文构建时会对这类 Bean 输出警告
#[derive(Default)]
pub struct PostProcessorChain {
    processors: RwLock<Vec<Arc<dyn BeanPostProcessor>>>,
}

impl PostProcessorChain {
    /// 创建空的处理器链
    pub fn new() -> Self {
        Self::default()
    }

    /// 直接登记处理器
    pub fn register(&self, processor: Arc<dyn BeanPostProcessor>) {
        info!(processor = processor.name(), "登记后置处理器");
        self.processors.write().push(processor);
    }

    /// 已登记处理器的名称，按调用顺序
    pub fn names(&self) -> Vec<String> {
        self.processors
            .read()
            .iter()
            .map(|processor| processor.name().to_string())
            .collect()
    }

    fn snapshot(&self) -> Vec<Arc<dyn BeanPostProcessor>> {
        self.processors.read().clone()
    }
}

impl ProcessorChain for PostProcessorChain {
    fn register_if_processor(&self, bean: &Bean) -> bool {
        match bean.as_post_processor() {
            Some(processor) => {
                self.register(processor);
                true
            }
            None => false,
        }
    }

    fn run_before(&self, bean_name: &str, bean: Box<dyn Component>) -> DependencyResult<Box<dyn Component>> {
        self.snapshot().iter().try_fold(bean, |current, processor| {
            debug!(bean_name, processor = processor.name(), "执行前置处理");
            processor
                .post_process_before_initialization(bean_name, current)
                .map_err(|source| DependencyError::ProcessorFailed {
                    processor: processor.name().to_string(),
                    bean_name: bean_name.to_string(),
                    source,
                })
        })
    }

    fn run_after(&self, bean_name: &str, bean: Bean) -> DependencyResult<Bean> {
        self.snapshot().iter().try_fold(bean, |current, processor| {
            debug!(bean_name, processor = processor.name(), "执行后置处理");
            processor
                .post_process_after_initialization(bean_name, current)
                .map_err(|source| DependencyError::ProcessorFailed {
                    processor: processor.name().to_string(),
                    bean_name: bean_name.to_string(),
                    source,
                })
        })
    }

    fn len(&self) -> usize {
        self.processors.read().len()
    }
}
