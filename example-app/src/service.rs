//! 示例组件
//!
//! `UserService` 依赖 `OrderService`，`ProxyingPostProcessor` 为 `userService` 生成日志代理

use component_macros::Component;
use di_impl::{LoggingInvocationHandler, Proxy};
use infrastructure_common::{Bean, BeanNameAware, BeanPostProcessor, BoxError};
use std::sync::Arc;
use tracing::info;

/// 用户服务对外接口
pub trait UserApi: Send + Sync {
    fn test(&self) -> String;
}

#[derive(Default, Component)]
#[component(post_construct = "init")]
pub struct OrderService;

impl OrderService {
    fn init(&mut self) {
        info!("OrderService 初始化完成");
    }

    pub fn place_order(&self, user: &str) -> String {
        format!("order placed for {user}")
    }
}

#[derive(Default, Component)]
#[component(post_construct = "init", provides(dyn UserApi), bean_name_aware)]
pub struct UserService {
    #[autowired]
    order_service: Option<Arc<OrderService>>,
    bean_name: String,
}

impl UserService {
    fn init(&mut self) -> Result<(), BoxError> {
        if self.order_service.is_none() {
            return Err("orderService 未注入".into());
        }
        info!("UserService 初始化完成");
        Ok(())
    }
}

impl BeanNameAware for UserService {
    fn set_bean_name(&mut self, name: &str) {
        self.bean_name = name.to_string();
    }
}

impl UserApi for UserService {
    fn test(&self) -> String {
        match &self.order_service {
            Some(orders) => format!("{}: {}", self.bean_name, orders.place_order("alice")),
            None => format!("{}: orderService missing", self.bean_name),
        }
    }
}

impl UserApi for Proxy<dyn UserApi> {
    fn test(&self) -> String {
        self.intercept("test", |target| target.test())
    }
}

/// 只为 `userService` 生成代理，其他 Bean 原样返回
#[derive(Default, Component)]
#[component(post_processor)]
pub struct ProxyingPostProcessor;

impl BeanPostProcessor for ProxyingPostProcessor {
    fn name(&self) -> &str {
        "proxyingPostProcessor"
    }

    fn post_process_after_initialization(&self, bean_name: &str, bean: Bean) -> Result<Bean, BoxError> {
        if bean_name != "userService" {
            return Ok(bean);
        }
        match bean.cast::<dyn UserApi>() {
            Some(target) => {
                info!(bean_name, "为 Bean 创建日志代理");
                Ok(Proxy::new(bean_name, target, Arc::new(LoggingInvocationHandler), |proxy| proxy).into_bean())
            }
            None => Ok(bean),
        }
    }
}
