//! 组件目录
//!
//! `#[derive(Component)]` 生成的注册函数在程序启动时把组件类型写入进程级目录，
//! 之后目录只读，由发现服务按模块路径前缀查询

use crate::component::ComponentType;
use crate::conventions::is_under_root;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

/// 组件类型工厂函数
pub type ComponentTypeFn = fn() -> ComponentType;

/// 目录条目
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    /// 组件定义所在的模块路径
    pub module_path: &'static str,
    /// 组件类型工厂
    pub component_type: ComponentTypeFn,
}

static COMPONENT_CATALOG: Lazy<RwLock<Vec<CatalogEntry>>> = Lazy::new(|| RwLock::new(Vec::new()));

/// 注册组件类型
///
/// 由派生宏生成的启动函数调用，业务代码无需直接使用
pub fn register_component(module_path: &'static str, component_type: ComponentTypeFn) {
    COMPONENT_CATALOG.write().push(CatalogEntry {
        module_path,
        component_type,
    });
}

/// 查询扫描路径下的所有目录条目，保持注册顺序
pub fn catalog_entries(root: &str) -> Vec<CatalogEntry> {
    COMPONENT_CATALOG
        .read()
        .iter()
        .filter(|entry| is_under_root(entry.module_path, root))
        .copied()
        .collect()
}

/// 目录中的条目总数
pub fn catalog_len() -> usize {
    COMPONENT_CATALOG.read().len()
}
