//! 组件基础接口定义
//!
//! 所有受容器管理的类型都实现 [`Component`]，容器通过它完成注入、
//! 生命周期方法调用以及能力查询，不依赖运行时反射

use crate::errors::{BoxError, DependencyError};
use crate::lifecycle::{BeanNameAware, BeanPostProcessor, InitializingBean};
use crate::metadata::TypeDescriptor;
use std::any::{Any, TypeId};
use std::fmt;
use std::sync::Arc;

/// 组件基础 trait
///
/// 一般由 `#[derive(Component)]` 生成实现。`inject` 与 `invoke` 是显式的
/// 名称映射表，能力访问器默认表示“未实现该能力”。
pub trait Component: Send + Sync + 'static {
    /// 组件类型名称
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// 转换为 `Any`，用于具体类型访问
    fn as_any(&self) -> &dyn Any;

    /// 能力接口查询
    ///
    /// `id` 为 `TypeId::of::<Arc<T>>()`，命中时返回装箱的 `Arc<T>`
    fn interface(self: Arc<Self>, id: TypeId) -> Option<Box<dyn Any>>;

    /// 按字段名注入依赖
    fn inject(&mut self, field: &str, bean: Bean) -> Result<(), DependencyError> {
        let _ = bean;
        Err(DependencyError::UnknownField {
            type_name: self.type_name().to_string(),
            field: field.to_string(),
        })
    }

    /// 按方法名调用无参生命周期方法
    fn invoke(&mut self, method: &str) -> Result<(), BoxError> {
        Err(Box::new(DependencyError::UnknownMethod {
            type_name: self.type_name().to_string(),
            method: method.to_string(),
        }))
    }

    fn as_bean_name_aware(&mut self) -> Option<&mut dyn BeanNameAware> {
        None
    }

    fn as_initializing(&mut self) -> Option<&mut dyn InitializingBean> {
        None
    }

    fn as_post_processor(self: Arc<Self>) -> Option<Arc<dyn BeanPostProcessor>> {
        None
    }
}

/// 具体类型的能力查询辅助函数
///
/// 只响应 `Arc<T>` 自身的查询
pub fn expose<T: Component>(this: Arc<T>, id: TypeId) -> Option<Box<dyn Any>> {
    if id == TypeId::of::<Arc<T>>() {
        Some(Box::new(this))
    } else {
        None
    }
}

/// 容器管理的 Bean 句柄
///
/// 克隆开销只是一次引用计数
#[derive(Clone)]
pub struct Bean(Arc<dyn Component>);

impl Bean {
    pub fn new(component: Arc<dyn Component>) -> Self {
        Self(component)
    }

    /// 以具体类型或能力接口访问 Bean
    pub fn cast<T: ?Sized + 'static>(&self) -> Option<Arc<T>> {
        let any = Arc::clone(&self.0).interface(TypeId::of::<Arc<T>>())?;
        any.downcast::<Arc<T>>().ok().map(|boxed| *boxed)
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// 是否为同一个实例
    pub fn ptr_eq(&self, other: &Self) -> bool {
        std::ptr::eq(
            Arc::as_ptr(&self.0).cast::<()>(),
            Arc::as_ptr(&other.0).cast::<()>(),
        )
    }

    pub fn type_name(&self) -> &'static str {
        self.0.type_name()
    }

    pub fn as_post_processor(&self) -> Option<Arc<dyn BeanPostProcessor>> {
        Arc::clone(&self.0).as_post_processor()
    }

    pub fn as_component(&self) -> &Arc<dyn Component> {
        &self.0
    }
}

impl From<Box<dyn Component>> for Bean {
    fn from(component: Box<dyn Component>) -> Self {
        Self(Arc::from(component))
    }
}

impl From<Arc<dyn Component>> for Bean {
    fn from(component: Arc<dyn Component>) -> Self {
        Self(component)
    }
}

impl fmt::Debug for Bean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Bean").field(&self.type_name()).finish()
    }
}

/// 无参构造函数
pub type Constructor = fn() -> Result<Box<dyn Component>, BoxError>;

/// 可被发现的组件类型：类型描述符加可选的无参构造函数
///
/// 构造函数为 `None` 表示抽象类型或没有可访问的无参构造函数
#[derive(Clone)]
pub struct ComponentType {
    descriptor: Arc<TypeDescriptor>,
    constructor: Option<Constructor>,
}

impl ComponentType {
    pub fn new(descriptor: TypeDescriptor, constructor: Constructor) -> Self {
        Self {
            descriptor: Arc::new(descriptor),
            constructor: Some(constructor),
        }
    }

    /// 不可实例化的组件类型
    pub fn abstract_type(descriptor: TypeDescriptor) -> Self {
        Self {
            descriptor: Arc::new(descriptor),
            constructor: None,
        }
    }

    /// 由 `Discoverable` 类型创建
    pub fn of<T: Discoverable>() -> Self {
        T::component_type()
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        &self.descriptor
    }

    pub fn constructor(&self) -> Option<Constructor> {
        self.constructor
    }

    pub fn qualified_name(&self) -> &'static str {
        self.descriptor.qualified_name()
    }
}

impl fmt::Debug for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComponentType")
            .field("type", &self.descriptor.qualified_name())
            .field("instantiable", &self.constructor.is_some())
            .finish()
    }
}

/// 可发现组件 trait
///
/// `#[derive(Component)]` 会同时实现此 trait
pub trait Discoverable: Component + Default + Sized {
    /// 类型描述符
    fn type_descriptor() -> TypeDescriptor;

    /// 组件类型
    fn component_type() -> ComponentType {
        ComponentType::new(Self::type_descriptor(), construct_boxed::<Self>)
    }
}

/// 通过 `Default` 构造组件
pub fn construct_boxed<T: Component + Default>() -> Result<Box<dyn Component>, BoxError> {
    Ok(Box::new(T::default()))
}
