//! # Infrastructure Common
//!
//! 这个 crate 提供了 Lorn IoC 容器的公共组件模型和工具。
//!
//! ## 核心组件
//!
//! - [`Component`] / [`Bean`] - 受管组件与 Bean 句柄
//! - [`TypeDescriptor`] / [`BeanDefinition`] - 组件元数据与创建计划
//! - [`BeanPostProcessor`] / [`BeanNameAware`] / [`InitializingBean`] - 可选能力接口
//! - [`ContainerConfig`] - 容器配置
//! - [`register_component`] - 组件目录注册入口
//!
//! ## 设计原则
//!
//! - 基于 Rust 类型系统的编译时安全，不依赖运行时反射
//! - 约定优于配置：类型名决定 Bean 名称，字段名决定依赖名称
//! - 能力按接口逐项检查，而不是依赖继承层次

pub mod component;
pub mod configuration;
pub mod conventions;
pub mod discovery;
pub mod errors;
pub mod lifecycle;
pub mod metadata;

pub use component::*;
pub use configuration::*;
pub use conventions::*;
pub use discovery::*;
pub use errors::*;
pub use lifecycle::*;
pub use metadata::*;
