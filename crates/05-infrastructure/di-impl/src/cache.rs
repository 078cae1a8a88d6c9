//! 单例缓存
//!
//! 命中时无锁读取；未命中时获取容器级锁，再次检查后创建并写入。
//! 锁是可重入的，因为注入阶段会在同一线程内递归获取依赖的单例。

use dashmap::DashMap;
use infrastructure_common::{Bean, DependencyResult};
use parking_lot::ReentrantMutex;
use tracing::trace;

/// 单例缓存
#[derive(Default)]
pub struct SingletonCache {
    instances: DashMap<String, Bean>,
    creation_lock: ReentrantMutex<()>,
}

impl SingletonCache {
    /// 创建空缓存
    pub fn new() -> Self {
        Self::default()
    }

    /// 快速路径查询
    pub fn get(&self, bean_name: &str) -> Option<Bean> {
        self.instances.get(bean_name).map(|entry| entry.value().clone())
    }

    /// 双重检查后创建
    ///
    /// `create` 失败时不写入任何条目
    pub fn get_or_create<F>(&self, bean_name: &str, create: F) -> DependencyResult<Bean>
    where
        F: FnOnce() -> DependencyResult<Bean>,
    {
        if let Some(bean) = self.get(bean_name) {
            return Ok(bean);
        }

        let _guard = self.creation_lock.lock();
        if let Some(bean) = self.get(bean_name) {
            trace!(bean_name, "等待锁期间单例已被创建");
            return Ok(bean);
        }

        let bean = create()?;
        self.instances.insert(bean_name.to_string(), bean.clone());
        Ok(bean)
    }

    /// 是否已缓存指定单例
    pub fn contains(&self, bean_name: &str) -> bool {
        self.instances.contains_key(bean_name)
    }

    /// 已缓存的单例数量
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// 缓存是否为空
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }

    /// 已缓存的单例名称，按字典序
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .instances
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        names.sort();
        names
    }
}
