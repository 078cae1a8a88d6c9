//! # Dependency Injection Abstractions
//!
//! 依赖注入抽象层，定义 Bean 注册、创建和依赖解析的核心接口。
//!
//! ## 核心接口
//!
//! - [`BeanDefinitionRegistry`] - Bean 定义注册表接口
//! - [`BeanFactory`] - Bean 创建状态机接口
//! - [`BeanResolver`] - 按名称解析依赖的接口
//! - [`ProcessorChain`] - 后置处理器链接口
//! - [`ComponentDiscovery`] - 组件发现服务接口

pub mod discovery;
pub mod factory;
pub mod processor;
pub mod registry;
pub mod resolver;

pub use discovery::*;
pub use factory::*;
pub use processor::*;
pub use registry::*;
pub use resolver::*;

pub use infrastructure_common::{
    Bean, BeanDefinition, BeanNameAware, BeanPostProcessor, BeanScope, Component, ComponentType,
    InitializingBean,
};
