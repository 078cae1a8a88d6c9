//! 应用上下文端到端测试
//!
//! 每个模块是一个独立的扫描路径，组件通过 `#[derive(Component)]` 注册到组件目录

use di_impl::ApplicationContext;
use infrastructure_common::{
    ConfigurationError, ContainerConfig, ContainerError, DependencyError,
};
use std::sync::{Arc, Barrier};
use std::thread;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("debug")
        .try_init();
}

mod shop {
    use component_macros::Component;
    use std::sync::Arc;

    #[derive(Default, Component)]
    pub struct OrderService;

    #[derive(Default, Component)]
    pub struct UserService {
        #[autowired]
        pub order_service: Option<Arc<OrderService>>,
    }
}

mod lifecycle {
    use component_macros::Component;
    use infrastructure_common::{BeanNameAware, BoxError, InitializingBean};
    use std::sync::Arc;

    #[derive(Default, Component)]
    pub struct Clock;

    #[derive(Default, Component)]
    #[component(post_construct = "init", post_construct = "verify", bean_name_aware, initializing)]
    pub struct Probe {
        #[autowired]
        pub clock: Option<Arc<Clock>>,
        pub events: Vec<String>,
        pub bean_name: String,
    }

    impl Probe {
        fn init(&mut self) {
            self.events.push(format!("init(clock={})", self.clock.is_some()));
        }

        fn verify(&mut self) -> Result<(), BoxError> {
            self.events.push("verify".to_string());
            Ok(())
        }
    }

    impl BeanNameAware for Probe {
        fn set_bean_name(&mut self, name: &str) {
            self.events.push("aware".to_string());
            self.bean_name = name.to_string();
        }
    }

    impl InitializingBean for Probe {
        fn after_properties_set(&mut self) -> Result<(), BoxError> {
            self.events.push("after_properties_set".to_string());
            Ok(())
        }
    }
}

mod tickets {
    use component_macros::Component;
    use std::sync::Arc;

    #[derive(Default, Component)]
    #[component(scope = "prototype")]
    pub struct Ticket;

    #[derive(Default, Component)]
    #[component(name = "office")]
    pub struct BoxOffice {
        #[autowired]
        pub ticket: Option<Arc<Ticket>>,
    }
}

mod proxied {
    use component_macros::Component;
    use di_impl::{LoggingInvocationHandler, Proxy};
    use infrastructure_common::{Bean, BeanPostProcessor, BoxError};
    use std::sync::Arc;

    pub trait UserApi: Send + Sync {
        fn test(&self) -> String;
    }

    #[derive(Default, Component)]
    pub struct OrderService;

    #[derive(Default, Component)]
    #[component(provides(dyn UserApi))]
    pub struct UserService {
        #[autowired]
        order_service: Option<Arc<OrderService>>,
    }

    impl UserApi for UserService {
        fn test(&self) -> String {
            format!("orderService wired: {}", self.order_service.is_some())
        }
    }

    impl UserApi for Proxy<dyn UserApi> {
        fn test(&self) -> String {
            self.intercept("test", |target| target.test())
        }
    }

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
            Ok(match bean.cast::<dyn UserApi>() {
                Some(target) => {
                    Proxy::new(bean_name, target, Arc::new(LoggingInvocationHandler), |proxy| proxy)
                        .into_bean()
                }
                None => bean,
            })
        }
    }
}

mod notifications {
    use component_macros::Component;
    use std::sync::Arc;

    pub trait Notifier: Send + Sync {
        fn channel(&self) -> &'static str;
    }

    #[derive(Default, Component)]
    #[component(name = "mailer", provides(dyn Notifier))]
    pub struct MailNotifier;

    impl Notifier for MailNotifier {
        fn channel(&self) -> &'static str {
            "mail"
        }
    }

    #[derive(Default, Component)]
    pub struct AlertService {
        #[autowired(name = "mailer")]
        pub notifier: Option<Arc<dyn Notifier>>,
    }
}

mod counted {
    use component_macros::Component;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

    #[derive(Default, Component)]
    #[component(post_construct = "count")]
    pub struct Expensive;

    impl Expensive {
        fn count(&mut self) {
            CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
            std::thread::sleep(std::time::Duration::from_millis(20));
        }
    }
}

mod broken {
    use component_macros::Component;
    use std::sync::Arc;

    #[derive(Default, Component)]
    pub struct Missing;

    #[derive(Default, Component)]
    pub struct Dangling {
        #[autowired(name = "missingBean")]
        pub missing: Option<Arc<Missing>>,
    }
}

mod cycle {
    use component_macros::Component;
    use std::sync::Arc;

    #[derive(Default, Component)]
    pub struct Alpha {
        #[autowired]
        pub beta: Option<Arc<Beta>>,
    }

    #[derive(Default, Component)]
    pub struct Beta {
        #[autowired]
        pub alpha: Option<Arc<Alpha>>,
    }
}

mod clash {
    pub mod first {
        use component_macros::Component;

        #[derive(Default, Component)]
        pub struct Report;
    }

    pub mod second {
        use component_macros::Component;

        #[derive(Default, Component)]
        pub struct Report;
    }
}

#[test]
fn test_default_names_and_shared_dependency() -> anyhow::Result<()> {
    init_tracing();
    let context = ApplicationContext::new("integration_test::shop")?;

    assert_eq!(context.bean_names(), vec!["orderService", "userService"]);

    let user_service = context.get_bean_as::<shop::UserService>("userService")?;
    let order_service = context.get_bean_as::<shop::OrderService>("orderService")?;
    assert!(Arc::ptr_eq(
        user_service.order_service.as_ref().expect("injected"),
        &order_service
    ));

    let again = context.get_bean("userService")?;
    assert!(again.ptr_eq(&context.get_bean("userService")?));
    Ok(())
}

#[test]
fn test_lifecycle_ordering() -> anyhow::Result<()> {
    init_tracing();
    let context = ApplicationContext::new("integration_test::lifecycle")?;

    let probe = context.get_bean_as::<lifecycle::Probe>("probe")?;
    assert_eq!(
        probe.events,
        vec!["init(clock=true)", "verify", "aware", "after_properties_set"]
    );
    assert_eq!(probe.bean_name, "probe");
    Ok(())
}

#[test]
fn test_prototype_freshness() -> anyhow::Result<()> {
    init_tracing();
    let context = ApplicationContext::new("integration_test::tickets")?;

    let first = context.get_bean("ticket")?;
    let second = context.get_bean("ticket")?;
    assert!(!first.ptr_eq(&second));
    assert!(!context.is_singleton("ticket")?);

    let office = context.get_bean_as::<tickets::BoxOffice>("office")?;
    let held = office.ticket.as_ref().expect("injected");
    assert!(!Arc::ptr_eq(held, &first.cast::<tickets::Ticket>().expect("ticket")));
    Ok(())
}

#[test]
fn test_proxy_only_wraps_user_service() -> anyhow::Result<()> {
    init_tracing();
    let context = ApplicationContext::new("integration_test::proxied")?;
    assert_eq!(context.post_processor_count(), 1);

    let user_bean = context.get_bean("userService")?;
    assert!(user_bean
        .downcast_ref::<di_impl::Proxy<dyn proxied::UserApi>>()
        .is_some());
    let api = context.get_bean_as::<dyn proxied::UserApi>("userService")?;
    assert_eq!(api.test(), "orderService wired: true");

    let order_bean = context.get_bean("orderService")?;
    assert!(order_bean.downcast_ref::<proxied::OrderService>().is_some());
    Ok(())
}

#[test]
fn test_injection_through_interface_and_explicit_name() -> anyhow::Result<()> {
    init_tracing();
    let context = ApplicationContext::new("integration_test::notifications")?;

    let alert = context.get_bean_as::<notifications::AlertService>("alertService")?;
    assert_eq!(alert.notifier.as_ref().expect("injected").channel(), "mail");
    Ok(())
}

#[test]
fn test_concurrent_first_access_constructs_once() {
    use std::sync::atomic::Ordering;

    init_tracing();
    const THREADS: usize = 8;
    let context = Arc::new(
        ApplicationContext::builder()
            .scan("integration_test::counted")
            .with_config(ContainerConfig::default().with_eager_init(false))
            .build()
            .unwrap(),
    );
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let context = Arc::clone(&context);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                context.get_bean("expensive").unwrap()
            })
        })
        .collect();
    let beans: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(counted::CONSTRUCTIONS.load(Ordering::SeqCst), 1);
    assert!(beans.iter().all(|bean| bean.ptr_eq(&beans[0])));
}

#[test]
fn test_missing_bean() {
    init_tracing();
    let context = ApplicationContext::new("integration_test::shop").unwrap();

    let err = context.get_bean("missingBean").unwrap_err();
    assert!(matches!(err, DependencyError::UnknownBean { ref bean_name } if bean_name == "missingBean"));
}

#[test]
fn test_unresolvable_dependency_aborts_startup() {
    init_tracing();
    match ApplicationContext::new("integration_test::broken") {
        Err(ContainerError::Dependency { source }) => {
            assert!(source.is_unknown_bean());
            assert!(matches!(source, DependencyError::BeanCreation { ref bean_name, .. } if bean_name == "dangling"));
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("context should not start"),
    }
}

#[test]
fn test_lazy_context_defers_failures_to_get_bean() {
    init_tracing();
    let context = ApplicationContext::builder()
        .scan("integration_test::broken")
        .with_config(ContainerConfig::default().with_eager_init(false))
        .build()
        .unwrap();

    assert!(context.get_bean("missing").is_ok());
    let err = context.get_bean("dangling").unwrap_err();
    assert!(err.is_unknown_bean());
    assert_eq!(context.singleton_count(), 1, "失败的 Bean 不会进入缓存");
}

#[test]
fn test_cycle_fails_fast() {
    init_tracing();
    match ApplicationContext::new("integration_test::cycle") {
        Err(ContainerError::Dependency { source }) => {
            assert!(matches!(
                source.root_cause(),
                DependencyError::CircularDependency { .. }
            ));
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("cycle was not detected"),
    }
}

#[test]
fn test_duplicate_names_are_fatal() {
    init_tracing();
    let result = ApplicationContext::new("integration_test::clash");
    assert!(matches!(
        result,
        Err(ContainerError::Configuration {
            source: ConfigurationError::DuplicateBeanName { .. }
        })
    ));
}

#[test]
fn test_invalid_roots_are_fatal() {
    init_tracing();
    for root in ["", "integration_test::nowhere", "integration_test.shop"] {
        assert!(
            matches!(
                ApplicationContext::new(root),
                Err(ContainerError::Configuration {
                    source: ConfigurationError::InvalidDiscoveryRoot { .. }
                })
            ),
            "root {root:?} should be rejected"
        );
    }
}

#[test]
fn test_contexts_are_isolated() -> anyhow::Result<()> {
    init_tracing();
    let first = ApplicationContext::new("integration_test::shop")?;
    let second = ApplicationContext::new("integration_test::shop")?;

    assert_ne!(first.id(), second.id());
    assert!(!first
        .get_bean("orderService")?
        .ptr_eq(&second.get_bean("orderService")?));
    Ok(())
}
