//! 拦截代理
//!
//! 代理是一个显式的装饰器：持有目标对象，实现与目标相同的能力接口，
//! 每次调用先经过 [`InvocationHandler`]，再转发给目标并原样返回结果。
//!
//! 为能力接口实现代理只需为 `Proxy<dyn Trait>` 实现该 trait：
//!
//! ```ignore
//! impl UserApi for Proxy<dyn UserApi> {
//!     fn test(&self) -> String {
//!         self.intercept("test", |target| target.test())
//!     }
//! }
//! ```

use infrastructure_common::{expose, Bean, Component};
use std::any::{Any, TypeId};
use std::sync::Arc;
use tracing::{debug, info};

/// 调用拦截处理器
pub trait InvocationHandler: Send + Sync {
    /// 转发给目标之前
    fn before(&self, bean_name: &str, method: &str) {
        let _ = (bean_name, method);
    }

    /// 目标返回之后
    fn after(&self, bean_name: &str, method: &str) {
        let _ = (bean_name, method);
    }
}

/// 记录每次调用的拦截处理器
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingInvocationHandler;

impl InvocationHandler for LoggingInvocationHandler {
    fn before(&self, bean_name: &str, method: &str) {
        info!(bean_name, method, "这是一个代理对象，拦截到方法调用");
    }

    fn after(&self, bean_name: &str, method: &str) {
        debug!(bean_name, method, "代理调用已转发给目标对象");
    }
}

/// 能力接口 `T` 的拦截代理
pub struct Proxy<T: ?Sized + Send + Sync + 'static> {
    target: Arc<T>,
    bean_name: String,
    handler: Arc<dyn InvocationHandler>,
    upcast: fn(Arc<Proxy<T>>) -> Arc<T>,
}

impl<T: ?Sized + Send + Sync + 'static> Proxy<T> {
    /// 创建代理
    ///
    /// `upcast` 把代理自身转换为能力接口，通常写作 `|proxy| proxy`
    pub fn new(
        bean_name: impl Into<String>,
        target: Arc<T>,
        handler: Arc<dyn InvocationHandler>,
        upcast: fn(Arc<Proxy<T>>) -> Arc<T>,
    ) -> Self {
        Self {
            target,
            bean_name: bean_name.into(),
            handler,
            upcast,
        }
    }

    /// 包装为 Bean
    pub fn into_bean(self) -> Bean {
        Bean::new(Arc::new(self))
    }

    /// 拦截一次调用
    pub fn intercept<R>(&self, method: &str, call: impl FnOnce(&T) -> R) -> R {
        self.handler.before(&self.bean_name, method);
        let result = call(&self.target);
        self.handler.after(&self.bean_name, method);
        result
    }

    /// 被代理的 Bean 名称
    pub fn bean_name(&self) -> &str {
        &self.bean_name
    }
}

impl<T: ?Sized + Send + Sync + 'static> Component for Proxy<T> {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn interface(self: Arc<Self>, id: TypeId) -> Option<Box<dyn Any>> {
        if id == TypeId::of::<Arc<T>>() {
            let upcast = self.upcast;
            return Some(Box::new(upcast(self)));
        }
        expose(self, id)
    }
}
