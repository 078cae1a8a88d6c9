//! # 依赖注入具体实现
//!
//! 提供 Bean 定义注册表、Bean 工厂、后置处理器链、单例缓存以及应用上下文。
//!
//! ```ignore
//! let context = ApplicationContext::new("my_app::service")?;
//! let user_service = context.get_bean("userService")?;
//! ```

pub mod cache;
pub mod context;
pub mod discovery;
pub mod factory;
pub mod processor;
pub mod proxy;
pub mod registry;

#[cfg(test)]
mod testing;

pub use cache::SingletonCache;
pub use context::{ApplicationContext, ApplicationContextBuilder};
pub use discovery::{CatalogDiscovery, StaticDiscovery};
pub use factory::DefaultBeanFactory;
pub use processor::PostProcessorChain;
pub use proxy::{InvocationHandler, LoggingInvocationHandler, Proxy};
pub use registry::DefaultBeanDefinitionRegistry;
