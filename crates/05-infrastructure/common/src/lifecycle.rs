//! 组件生命周期管理
//!
//! 作用域、能力标记以及 Bean 在创建过程中可选实现的回调接口

use crate::component::{Bean, Component};
use crate::errors::{BoxError, ConfigurationError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Bean 作用域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BeanScope {
    /// 单例模式 - 每个上下文只创建一个实例
    #[default]
    Singleton,
    /// 原型模式 - 每次请求都创建新实例
    Prototype,
}

impl BeanScope {
    /// 作用域的文本形式
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Singleton => "singleton",
            Self::Prototype => "prototype",
        }
    }
}

impl fmt::Display for BeanScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BeanScope {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "singleton" => Ok(Self::Singleton),
            "prototype" => Ok(Self::Prototype),
            _ => Err(ConfigurationError::InvalidScope {
                value: s.to_string(),
            }),
        }
    }
}

/// 组件能力标记
///
/// 在类型描述符上静态声明，上下文据此在实例化之前识别后置处理器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// 实现了 [`BeanPostProcessor`]
    PostProcessor,
    /// 实现了 [`BeanNameAware`]
    BeanNameAware,
    /// 实现了 [`InitializingBean`]
    Initializing,
}

/// Bean 创建阶段
///
/// 阶段按固定顺序推进，不允许跳过或回退
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CreationStage {
    /// 通过无参构造函数实例化
    Construct,
    /// 按字段名注入依赖
    Inject,
    /// 调用 post-construct 方法
    PostConstruct,
    /// 后置处理器前置钩子
    PreProcess,
    /// Aware 回调
    AwareCallbacks,
    /// InitializingBean 回调
    InitializingCallback,
    /// 后置处理器后置钩子
    PostProcess,
    /// 创建完成
    Ready,
}

impl CreationStage {
    /// 下一个阶段，`Ready` 之后没有阶段
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Construct => Some(Self::Inject),
            Self::Inject => Some(Self::PostConstruct),
            Self::PostConstruct => Some(Self::PreProcess),
            Self::PreProcess => Some(Self::AwareCallbacks),
            Self::AwareCallbacks => Some(Self::InitializingCallback),
            Self::InitializingCallback => Some(Self::PostProcess),
            Self::PostProcess => Some(Self::Ready),
            Self::Ready => None,
        }
    }
}

impl fmt::Display for CreationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Construct => "construct",
            Self::Inject => "inject",
            Self::PostConstruct => "post-construct",
            Self::PreProcess => "pre-process",
            Self::AwareCallbacks => "aware",
            Self::InitializingCallback => "initializing",
            Self::PostProcess => "post-process",
            Self::Ready => "ready",
        };
        f.write_str(name)
    }
}

/// post-construct 方法的返回值
///
/// 允许生命周期方法返回 `()` 或 `Result<(), E>`
pub trait CallbackResult {
    fn into_callback_result(self) -> Result<(), BoxError>;
}

impl CallbackResult for () {
    fn into_callback_result(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<E: Into<BoxError>> CallbackResult for Result<(), E> {
    fn into_callback_result(self) -> Result<(), BoxError> {
        self.map_err(Into::into)
    }
}

/// Bean 名称感知 trait
pub trait BeanNameAware {
    /// 告知 Bean 在容器中的名称
    fn set_bean_name(&mut self, name: &str);
}

/// 初始化完成回调 trait
///
/// 在依赖注入和前置处理之后调用一次
pub trait InitializingBean {
    /// 所有属性设置完成
    fn after_properties_set(&mut self) -> Result<(), BoxError>;
}

/// Bean 后置处理器 trait
///
/// 每个 Bean 初始化前后都会经过所有已注册的后置处理器。
/// 钩子可以返回与传入对象不同的实例，这是代理替换的实现方式。
pub trait BeanPostProcessor: Send + Sync {
    /// 处理器名称
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// 前置处理，发生在依赖注入和 post-construct 之后、初始化回调之前
    fn post_process_before_initialization(
        &self,
        bean_name: &str,
        bean: Box<dyn Component>,
    ) -> Result<Box<dyn Component>, BoxError> {
        let _ = bean_name;
        Ok(bean)
    }

    /// 后置处理，发生在初始化回调之后
    fn post_process_after_initialization(
        &self,
        bean_name: &str,
        bean: Bean,
    ) -> Result<Bean, BoxError> {
        let _ = bean_name;
        Ok(bean)
    }
}
