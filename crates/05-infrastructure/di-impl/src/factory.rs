//! Bean 工厂实现
//!
//! 创建状态机：构造 → 注入 → post-construct → 前置处理 → Aware 回调 →
//! 初始化回调 → 后置处理 → 就绪。阶段顺序固定，任何阶段失败都以
//! `BeanCreation` 错误返回，并标明失败阶段。

use di_abstractions::{BeanFactory, BeanResolver, ProcessorChain, ResolveContext};
use infrastructure_common::{
    Bean, BeanDefinition, Capability, Component, CreationStage, DependencyError,
    DependencyResult,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// 默认 Bean 工厂
pub struct DefaultBeanFactory {
    processors: Arc<dyn ProcessorChain>,
}

impl DefaultBeanFactory {
    /// 创建使用指定后置处理器链的工厂
    pub fn new(processors: Arc<dyn ProcessorChain>) -> Self {
        Self { processors }
    }

    fn construct(&self, definition: &BeanDefinition) -> DependencyResult<Box<dyn Component>> {
        let descriptor = definition.descriptor();
        let instantiation_error = |message: String| DependencyError::Instantiation {
            bean_name: definition.bean_name().to_string(),
            type_name: descriptor.qualified_name().to_string(),
            message,
        };

        let constructor = definition
            .component_type()
            .constructor()
            .ok_or_else(|| instantiation_error("没有可访问的无参构造函数".to_string()))?;
        constructor().map_err(|source| instantiation_error(source.to_string()))
    }

    fn inject(
        &self,
        definition: &BeanDefinition,
        instance: &mut dyn Component,
        resolver: &dyn BeanResolver,
        context: &mut ResolveContext,
    ) -> DependencyResult<()> {
        for field in definition.descriptor().injection_points() {
            let dependency_name = field.bean_name();
            debug!(
                bean_name = definition.bean_name(),
                field = field.name,
                dependency = %dependency_name,
                "注入依赖"
            );
            let dependency = resolver.resolve(&dependency_name, context)?;
            instance.inject(field.name, dependency)?;
        }
        Ok(())
    }

    fn post_construct(&self, definition: &BeanDefinition, instance: &mut dyn Component) -> DependencyResult<()> {
        for method in definition.descriptor().init_callbacks() {
            instance
                .invoke(method.name)
                .map_err(|source| DependencyError::CallbackFailed {
                    bean_name: definition.bean_name().to_string(),
                    callback: method.name.to_string(),
                    source,
                })?;
        }
        Ok(())
    }

    fn aware(&self, definition: &BeanDefinition, instance: &mut dyn Component) {
        let bean_name = definition.bean_name();
        if let Some(aware) = instance.as_bean_name_aware() {
            aware.set_bean_name(bean_name);
        } else if definition.descriptor().has_capability(Capability::BeanNameAware) {
            warn!(bean_name, "类型声明了 BeanNameAware 能力但实例未提供实现");
        }
    }

    fn initialize(&self, definition: &BeanDefinition, instance: &mut dyn Component) -> DependencyResult<()> {
        let bean_name = definition.bean_name();
        if let Some(initializing) = instance.as_initializing() {
            initializing
                .after_properties_set()
                .map_err(|source| DependencyError::CallbackFailed {
                    bean_name: bean_name.to_string(),
                    callback: "after_properties_set".to_string(),
                    source,
                })?;
        } else if definition.descriptor().has_capability(Capability::Initializing) {
            warn!(bean_name, "类型声明了 Initializing 能力但实例未提供实现");
        }
        Ok(())
    }
}

impl BeanFactory for DefaultBeanFactory {
    fn create_bean(
        &self,
        definition: &BeanDefinition,
        resolver: &dyn BeanResolver,
        context: &mut ResolveContext,
    ) -> DependencyResult<Bean> {
        let bean_name = definition.bean_name();
        let failed = |stage: CreationStage| {
            move |cause: DependencyError| DependencyError::creation_failed(bean_name, stage, cause)
        };

        debug!(bean_name, scope = %definition.scope(), "开始创建 Bean");

        let mut instance = self
            .construct(definition)
            .map_err(failed(CreationStage::Construct))?;
        self.inject(definition, instance.as_mut(), resolver, context)
            .map_err(failed(CreationStage::Inject))?;
        self.post_construct(definition, instance.as_mut())
            .map_err(failed(CreationStage::PostConstruct))?;

        let mut instance = self
            .processors
            .run_before(bean_name, instance)
            .map_err(failed(CreationStage::PreProcess))?;

        self.aware(definition, instance.as_mut());
        self.initialize(definition, instance.as_mut())
            .map_err(failed(CreationStage::InitializingCallback))?;

        let bean = self
            .processors
            .run_after(bean_name, Bean::from(instance))
            .map_err(failed(CreationStage::PostProcess))?;

        debug!(bean_name, stage = %CreationStage::Ready, type_name = bean.type_name(), "Bean 创建完成");
        Ok(bean)
    }
}
