//! Bean 定义注册表实现

use di_abstractions::BeanDefinitionRegistry;
use indexmap::map::Entry;
use indexmap::IndexMap;
use infrastructure_common::{
    BeanDefinition, ComponentType, ConfigurationError, ConfigurationResult, DependencyError,
    DependencyResult,
};
use tracing::debug;

/// 默认的 Bean 定义注册表
///
/// 保持登记顺序，上下文按此顺序识别后置处理器和预创建单例
#[derive(Debug, Default)]
pub struct DefaultBeanDefinitionRegistry {
    definitions: IndexMap<String, BeanDefinition>,
}

impl DefaultBeanDefinitionRegistry {
    /// 创建空注册表
    pub fn new() -> Self {
        Self::default()
    }
}

impl BeanDefinitionRegistry for DefaultBeanDefinitionRegistry {
    fn register(&mut self, component_type: ComponentType) -> ConfigurationResult<&BeanDefinition> {
        let definition = BeanDefinition::from_component(component_type);

        match self.definitions.entry(definition.bean_name().to_string()) {
            Entry::Occupied(existing) => Err(ConfigurationError::DuplicateBeanName {
                bean_name: existing.key().clone(),
                existing: existing.get().descriptor().qualified_name().to_string(),
                duplicate: definition.descriptor().qualified_name().to_string(),
            }),
            Entry::Vacant(slot) => {
                debug!(
                    bean_name = definition.bean_name(),
                    scope = %definition.scope(),
                    type_name = definition.descriptor().qualified_name(),
                    module_path = definition.descriptor().module_path(),
                    interfaces = ?definition.descriptor().interfaces(),
                    "登记 Bean 定义"
                );
                Ok(slot.insert(definition))
            }
        }
    }

    fn lookup(&self, bean_name: &str) -> DependencyResult<&BeanDefinition> {
        self.definitions
            .get(bean_name)
            .ok_or_else(|| DependencyError::unknown_bean(bean_name))
    }

    fn contains(&self, bean_name: &str) -> bool {
        self.definitions.contains_key(bean_name)
    }

    fn definitions(&self) -> Vec<&BeanDefinition> {
        self.definitions.values().collect()
    }

    fn len(&self) -> usize {
        self.definitions.len()
    }
}
