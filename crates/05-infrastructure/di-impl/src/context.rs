//! 应用上下文
//!
//! 构建时完成组件发现、Bean 定义登记、后置处理器实例化以及单例预创建，
//! 之后通过 [`ApplicationContext::get_bean`] 对外提供 Bean

use crate::cache::SingletonCache;
use crate::discovery::CatalogDiscovery;
use crate::factory::DefaultBeanFactory;
use crate::processor::PostProcessorChain;
use crate::registry::DefaultBeanDefinitionRegistry;
use chrono::{DateTime, Utc};
use di_abstractions::{
    BeanDefinitionRegistry, BeanFactory, BeanResolver, ComponentDiscovery, ProcessorChain,
    ResolveContext, ResolveOptions,
};
use infrastructure_common::{
    Bean, BeanDefinition, ConfigurationError, ContainerConfig, ContainerResult, DependencyError,
    DependencyResult,
};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// 应用上下文
///
/// 独占注册表、单例缓存和后置处理器链，多个上下文可以在同一进程内共存
pub struct ApplicationContext {
    id: Uuid,
    started_at: DateTime<Utc>,
    config: ContainerConfig,
    registry: DefaultBeanDefinitionRegistry,
    cache: SingletonCache,
    processors: Arc<PostProcessorChain>,
    factory: DefaultBeanFactory,
}

impl ApplicationContext {
    /// 扫描指定路径并构建上下文
    pub fn new(root: &str) -> ContainerResult<Self> {
        Self::builder().scan(root).build()
    }

    /// 创建上下文构建器
    pub fn builder() -> ApplicationContextBuilder {
        ApplicationContextBuilder::default()
    }

    /// 按名称获取 Bean
    pub fn get_bean(&self, bean_name: &str) -> DependencyResult<Bean> {
        let mut context = ResolveContext::new(ResolveOptions::from(&self.config));
        self.resolve(bean_name, &mut context).map_err(|err| {
            error!(bean_name, error = %err, "获取 Bean 失败");
            err
        })
    }

    /// 按名称获取 Bean 并转换为具体类型或能力接口
    pub fn get_bean_as<T: ?Sized + 'static>(&self, bean_name: &str) -> DependencyResult<Arc<T>> {
        let bean = self.get_bean(bean_name)?;
        bean.cast::<T>().ok_or_else(|| DependencyError::BeanTypeMismatch {
            bean_name: bean_name.to_string(),
            expected: std::any::type_name::<T>().to_string(),
            actual: bean.type_name().to_string(),
        })
    }

    /// 是否登记了指定名称的 Bean
    pub fn contains_bean(&self, bean_name: &str) -> bool {
        self.registry.contains(bean_name)
    }

    /// 所有 Bean 名称，按字典序
    pub fn bean_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .registry
            .definitions()
            .into_iter()
            .map(|definition| definition.bean_name().to_string())
            .collect();
        names.sort();
        names
    }

    /// 获取 Bean 定义
    pub fn bean_definition(&self, bean_name: &str) -> Option<&BeanDefinition> {
        self.registry.lookup(bean_name).ok()
    }

    /// 指定 Bean 是否为单例作用域
    pub fn is_singleton(&self, bean_name: &str) -> DependencyResult<bool> {
        self.registry
            .lookup(bean_name)
            .map(BeanDefinition::is_singleton)
    }

    /// 已注册的后置处理器数量
    pub fn post_processor_count(&self) -> usize {
        self.processors.len()
    }

    /// 已创建的单例数量
    pub fn singleton_count(&self) -> usize {
        self.cache.len()
    }

    /// 上下文标识
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// 上下文创建时间
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// 容器配置
    pub fn config(&self) -> &ContainerConfig {
        &self.config
    }

    fn create(&self, definition: &BeanDefinition, context: &mut ResolveContext) -> DependencyResult<Bean> {
        context.enter(definition.bean_name())?;
        let result = self.factory.create_bean(definition, self, context);
        context.exit();
        result
    }

    /// 按登记顺序实例化声明了后置处理器能力的 Bean
    ///
    /// 返回在处理器链完整之前就被创建的其他单例，它们不会经过全部后置处理器
    fn register_post_processors(&self) -> DependencyResult<Vec<String>> {
        let processor_names: Vec<&str> = self
            .registry
            .definitions()
            .into_iter()
            .filter(|definition| definition.is_post_processor())
            .map(BeanDefinition::bean_name)
            .collect();

        for name in &processor_names {
            let bean = self.get_bean(name)?;
            if !self.processors.register_if_processor(&bean) {
                warn!(bean_name = %name, type_name = bean.type_name(), "Bean 声明了后置处理器能力但未提供实现");
            }
        }

        let early: Vec<String> = self
            .cache
            .names()
            .into_iter()
            .filter(|name| !processor_names.contains(&name.as_str()))
            .collect();
        for name in &early {
            warn!(bean_name = %name, "Bean 在后置处理器链完整之前被创建，不会经过全部后置处理器");
        }
        Ok(early)
    }

    /// 预创建所有单例
    ///
    /// 实例实现了后置处理器能力而类型描述符未声明时，构建失败
    fn pre_instantiate_singletons(&self) -> ContainerResult<()> {
        for definition in self.registry.definitions() {
            if !definition.is_singleton() {
                continue;
            }
            let bean = self.get_bean(definition.bean_name())?;
            if bean.as_post_processor().is_some() && !definition.is_post_processor() {
                return Err(ConfigurationError::UndeclaredPostProcessor {
                    bean_name: definition.bean_name().to_string(),
                    type_name: bean.type_name().to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

impl BeanResolver for ApplicationContext {
    fn resolve(&self, bean_name: &str, context: &mut ResolveContext) -> DependencyResult<Bean> {
        let definition = self.registry.lookup(bean_name)?;
        if definition.is_singleton() {
            self.cache
                .get_or_create(bean_name, || self.create(definition, context))
        } else {
            self.create(definition, context)
        }
    }
}

impl std::fmt::Debug for ApplicationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApplicationContext")
            .field("id", &self.id)
            .field("started_at", &self.started_at)
            .field("beans", &self.registry.len())
            .field("singletons", &self.cache.len())
            .field("post_processors", &self.processors.len())
            .finish()
    }
}

/// 应用上下文构建器
#[derive(Default)]
pub struct ApplicationContextBuilder {
    roots: Vec<String>,
    discovery: Option<Box<dyn ComponentDiscovery>>,
    config: ContainerConfig,
}

impl ApplicationContextBuilder {
    /// 添加扫描路径
    pub fn scan(mut self, root: impl Into<String>) -> Self {
        self.roots.push(root.into());
        self
    }

    /// 替换发现服务，默认使用组件目录
    pub fn with_discovery(mut self, discovery: impl ComponentDiscovery + 'static) -> Self {
        self.discovery = Some(Box::new(discovery));
        self
    }

    /// 设置容器配置
    pub fn with_config(mut self, config: ContainerConfig) -> Self {
        self.config = config;
        self
    }

    /// 构建上下文
    pub fn build(self) -> ContainerResult<ApplicationContext> {
        let context = self.assemble()?;

        context.register_post_processors()?;
        if context.config.eager_init_singletons {
            context.pre_instantiate_singletons()?;
        }

        info!(
            context_id = %context.id,
            beans = context.registry.len(),
            singletons = context.cache.len(),
            post_processors = context.processors.len(),
            "应用上下文构建完成"
        );
        Ok(context)
    }

    /// 完成组件发现与 Bean 定义登记，尚未创建任何 Bean
    fn assemble(self) -> ContainerResult<ApplicationContext> {
        if self.roots.is_empty() {
            return Err(ConfigurationError::invalid_root("", "未指定扫描路径").into());
        }

        let discovery = self
            .discovery
            .unwrap_or_else(|| Box::new(CatalogDiscovery::new()));

        let mut registry = DefaultBeanDefinitionRegistry::new();
        let mut seen = HashSet::new();
        for root in &self.roots {
            for component_type in discovery.discover(root)? {
                if !seen.insert(component_type.qualified_name()) {
                    warn!(root = %root, type_name = component_type.qualified_name(), "组件类型已被其他扫描路径发现");
                    continue;
                }
                registry.register(component_type)?;
            }
        }
        info!(
            discovery = discovery.name(),
            roots = ?self.roots,
            beans = registry.len(),
            "组件发现完成"
        );

        let processors = Arc::new(PostProcessorChain::new());
        Ok(ApplicationContext {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            factory: DefaultBeanFactory::new(processors.clone()),
            processors,
            registry,
            cache: SingletonCache::new(),
            config: self.config,
        })
    }
}
