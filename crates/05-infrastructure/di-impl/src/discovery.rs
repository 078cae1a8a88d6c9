//! 组件发现服务实现

use di_abstractions::ComponentDiscovery;
use indexmap::IndexMap;
use infrastructure_common::{
    catalog_entries, is_under_root, is_valid_root, ComponentType, ConfigurationError,
    ConfigurationResult, Discoverable,
};
use std::collections::HashSet;
use tracing::{debug, warn};

fn validate_root(root: &str) -> ConfigurationResult<&str> {
    let root = root.trim();
    if root.is_empty() {
        return Err(ConfigurationError::invalid_root(root, "扫描路径为空"));
    }
    if !is_valid_root(root) {
        return Err(ConfigurationError::invalid_root(root, "不是合法的模块路径"));
    }
    Ok(root)
}

/// 按限定名去重，保持首次出现的顺序
fn dedup(root: &str, types: impl IntoIterator<Item = ComponentType>) -> Vec<ComponentType> {
    let mut seen = HashSet::new();
    types
        .into_iter()
        .filter(|component_type| {
            let first = seen.insert(component_type.qualified_name());
            if !first {
                warn!(
                    root,
                    type_name = component_type.qualified_name(),
                    "忽略重复发现的组件类型"
                );
            }
            first
        })
        .collect()
}

/// 基于进程级组件目录的发现服务
///
/// 扫描路径是模块路径前缀，例如 `my_app::service`
#[derive(Debug, Default, Clone, Copy)]
pub struct CatalogDiscovery;

impl CatalogDiscovery {
    /// 创建组件目录发现服务
    pub fn new() -> Self {
        Self
    }
}

impl ComponentDiscovery for CatalogDiscovery {
    fn name(&self) -> &str {
        "catalog"
    }

    fn discover(&self, root: &str) -> ConfigurationResult<Vec<ComponentType>> {
        let root = validate_root(root)?;
        let entries = catalog_entries(root);
        if entries.is_empty() {
            return Err(ConfigurationError::invalid_root(root, "扫描路径下没有注册任何组件"));
        }

        let types = dedup(root, entries.iter().map(|entry| (entry.component_type)()));
        debug!(root, count = types.len(), "组件目录扫描完成");
        Ok(types)
    }
}

/// 基于内存表的发现服务
///
/// 供测试和手工装配组件的宿主使用
#[derive(Debug, Default, Clone)]
pub struct StaticDiscovery {
    roots: IndexMap<String, Vec<ComponentType>>,
}

impl StaticDiscovery {
    /// 创建空的发现表
    pub fn new() -> Self {
        Self::default()
    }

    /// 在指定路径下登记组件类型
    pub fn with_component(mut self, root: impl Into<String>, component_type: ComponentType) -> Self {
        self.roots.entry(root.into()).or_default().push(component_type);
        self
    }

    /// 在指定路径下登记可发现类型
    pub fn with<T: Discoverable>(self, root: impl Into<String>) -> Self {
        self.with_component(root, T::component_type())
    }
}

impl ComponentDiscovery for StaticDiscovery {
    fn name(&self) -> &str {
        "static"
    }

    fn discover(&self, root: &str) -> ConfigurationResult<Vec<ComponentType>> {
        let root = validate_root(root)?;
        let matching: Vec<ComponentType> = self
            .roots
            .iter()
            .filter(|(path, _)| is_under_root(path, root))
            .flat_map(|(_, types)| types.iter().cloned())
            .collect();
        if matching.is_empty() {
            return Err(ConfigurationError::invalid_root(root, "扫描路径不存在"));
        }

        Ok(dedup(root, matching))
    }
}
