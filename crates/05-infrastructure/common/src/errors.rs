//! 错误类型定义

use crate::lifecycle::CreationStage;
use thiserror::Error;

/// 通用错误装箱类型，用于承载组件自身抛出的错误
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 容器配置错误类型
///
/// 发生在上下文构建阶段，属于致命错误，上下文无法继续构建
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("组件扫描路径无效: {root}, 原因: {reason}")]
    InvalidDiscoveryRoot { root: String, reason: String },

    #[error("Bean 名称重复: {bean_name} (已注册 {existing}, 冲突 {duplicate})")]
    DuplicateBeanName {
        bean_name: String,
        existing: String,
        duplicate: String,
    },

    #[error("无效的作用域: {value}")]
    InvalidScope { value: String },

    #[error("Bean {bean_name} ({type_name}) 实现了后置处理器能力，但类型描述符未声明 PostProcessor")]
    UndeclaredPostProcessor { bean_name: String, type_name: String },

    #[error("容器配置加载失败: {source}")]
    LoadFailed {
        #[from]
        source: config::ConfigError,
    },
}

impl ConfigurationError {
    /// 创建扫描路径错误
    pub fn invalid_root(root: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidDiscoveryRoot {
            root: root.into(),
            reason: reason.into(),
        }
    }
}

/// 依赖注入错误类型
#[derive(Error, Debug)]
pub enum DependencyError {
    #[error("不存在名称为 {bean_name} 的 Bean")]
    UnknownBean { bean_name: String },

    #[error("Bean 实例化失败: {bean_name} ({type_name}), 原因: {message}")]
    Instantiation {
        bean_name: String,
        type_name: String,
        message: String,
    },

    #[error("Bean 创建失败: {bean_name} (阶段: {stage}), 原因: {source}")]
    BeanCreation {
        bean_name: String,
        stage: CreationStage,
        source: Box<DependencyError>,
    },

    #[error("检测到循环依赖: {chain}")]
    CircularDependency { chain: String },

    #[error("依赖解析深度超过上限 {max_depth}: {chain}")]
    ResolutionTooDeep { max_depth: usize, chain: String },

    #[error("依赖类型不匹配: 字段 {field} 期望 {expected}, 实际 {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    #[error("Bean 类型不匹配: {bean_name} 期望 {expected}, 实际 {actual}")]
    BeanTypeMismatch {
        bean_name: String,
        expected: String,
        actual: String,
    },

    #[error("组件 {type_name} 不存在可注入字段 {field}")]
    UnknownField { type_name: String, field: String },

    #[error("组件 {type_name} 不存在生命周期方法 {method}")]
    UnknownMethod { type_name: String, method: String },

    #[error("生命周期回调失败: {bean_name}.{callback}, 原因: {source}")]
    CallbackFailed {
        bean_name: String,
        callback: String,
        source: BoxError,
    },

    #[error("后置处理器 {processor} 处理 {bean_name} 失败: {source}")]
    ProcessorFailed {
        processor: String,
        bean_name: String,
        source: BoxError,
    },
}

impl DependencyError {
    /// 创建未知 Bean 错误
    pub fn unknown_bean(bean_name: impl Into<String>) -> Self {
        Self::UnknownBean {
            bean_name: bean_name.into(),
        }
    }

    /// 将底层错误包装为指定阶段的 Bean 创建错误
    pub fn creation_failed(bean_name: impl Into<String>, stage: CreationStage, cause: Self) -> Self {
        Self::BeanCreation {
            bean_name: bean_name.into(),
            stage,
            source: Box::new(cause),
        }
    }

    /// 穿透所有 `BeanCreation` 包装，返回最底层的错误
    pub fn root_cause(&self) -> &Self {
        let mut current = self;
        while let Self::BeanCreation { source, .. } = current {
            current = source.as_ref();
        }
        current
    }

    /// 根因是否为未知 Bean
    pub fn is_unknown_bean(&self) -> bool {
        matches!(self.root_cause(), Self::UnknownBean { .. })
    }
}

/// 容器错误类型
#[derive(Error, Debug)]
pub enum ContainerError {
    #[error("容器配置错误: {source}")]
    Configuration {
        #[from]
        source: ConfigurationError,
    },

    #[error("依赖注入错误: {source}")]
    Dependency {
        #[from]
        source: DependencyError,
    },
}

/// 结果类型别名
pub type ConfigurationResult<T> = Result<T, ConfigurationError>;
pub type DependencyResult<T> = Result<T, DependencyError>;
pub type ContainerResult<T> = Result<T, ContainerError>;
