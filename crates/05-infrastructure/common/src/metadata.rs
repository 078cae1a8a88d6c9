//! 元数据定义
//!
//! 类型描述符由组件发现产生，注册表据此计算 Bean 定义

use crate::component::ComponentType;
use crate::conventions::{decapitalize, field_bean_name, simple_type_name};
use crate::lifecycle::{BeanScope, Capability};

/// 字段描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// 字段名称
    pub name: &'static str,
    /// 声明类型
    pub declared_type: &'static str,
    /// 是否需要注入
    pub requires_injection: bool,
    /// 依赖的 Bean 名称，未指定时由字段名推导
    pub dependency_name: Option<String>,
}

impl FieldDescriptor {
    /// 创建需要注入的字段描述
    pub fn autowired(name: &'static str, declared_type: &'static str) -> Self {
        Self {
            name,
            declared_type,
            requires_injection: true,
            dependency_name: None,
        }
    }

    /// 创建普通字段描述
    pub fn plain(name: &'static str, declared_type: &'static str) -> Self {
        Self {
            name,
            declared_type,
            requires_injection: false,
            dependency_name: None,
        }
    }

    /// 显式指定依赖的 Bean 名称
    pub fn with_dependency_name(mut self, bean_name: impl Into<String>) -> Self {
        let bean_name = bean_name.into();
        self.dependency_name = if bean_name.trim().is_empty() {
            None
        } else {
            Some(bean_name)
        };
        self
    }

    /// 解析依赖的 Bean 名称
    pub fn bean_name(&self) -> String {
        self.dependency_name
            .clone()
            .unwrap_or_else(|| field_bean_name(self.name))
    }
}

/// 方法描述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// 方法名称
    pub name: &'static str,
    /// 是否为 post-construct 回调
    pub is_init_callback: bool,
}

impl MethodDescriptor {
    /// 创建 post-construct 回调描述
    pub fn init_callback(name: &'static str) -> Self {
        Self {
            name,
            is_init_callback: true,
        }
    }
}

/// 类型描述符
///
/// 发现阶段产生，产生后不可变
#[derive(Debug, Clone)]
pub struct TypeDescriptor {
    qualified_name: &'static str,
    module_path: &'static str,
    fields: Vec<FieldDescriptor>,
    methods: Vec<MethodDescriptor>,
    bean_name: Option<String>,
    scope: Option<BeanScope>,
    capabilities: Vec<Capability>,
    interfaces: Vec<&'static str>,
}

impl TypeDescriptor {
    /// 从类型创建描述符
    pub fn of<T: 'static>(module_path: &'static str) -> Self {
        Self {
            qualified_name: std::any::type_name::<T>(),
            module_path,
            fields: Vec::new(),
            methods: Vec::new(),
            bean_name: None,
            scope: None,
            capabilities: Vec::new(),
            interfaces: Vec::new(),
        }
    }

    /// 设置 Bean 名称，空白名称视为未设置
    pub fn with_bean_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.bean_name = if name.trim().is_empty() {
            None
        } else {
            Some(name)
        };
        self
    }

    /// 设置作用域
    pub fn with_scope(mut self, scope: BeanScope) -> Self {
        self.scope = Some(scope);
        self
    }

    /// 添加字段
    pub fn with_field(mut self, field: FieldDescriptor) -> Self {
        self.fields.push(field);
        self
    }

    /// 添加方法
    pub fn with_method(mut self, method: MethodDescriptor) -> Self {
        self.methods.push(method);
        self
    }

    /// 添加 post-construct 回调
    pub fn with_post_construct(self, name: &'static str) -> Self {
        self.with_method(MethodDescriptor::init_callback(name))
    }

    /// 声明能力
    pub fn with_capability(mut self, capability: Capability) -> Self {
        if !self.capabilities.contains(&capability) {
            self.capabilities.push(capability);
        }
        self
    }

    /// 声明对外暴露的能力接口
    pub fn provides<T: ?Sized + 'static>(mut self) -> Self {
        self.interfaces.push(std::any::type_name::<T>());
        self
    }

    /// 完整限定名
    pub fn qualified_name(&self) -> &'static str {
        self.qualified_name
    }

    /// 简单类型名（不含模块路径与泛型参数）
    pub fn simple_name(&self) -> &'static str {
        simple_type_name(self.qualified_name)
    }

    /// 定义所在的模块路径
    pub fn module_path(&self) -> &'static str {
        self.module_path
    }

    /// 全部字段，保持声明顺序
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// 需要注入的字段，保持声明顺序
    pub fn injection_points(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| field.requires_injection)
    }

    /// post-construct 回调，保持声明顺序
    pub fn init_callbacks(&self) -> impl Iterator<Item = &MethodDescriptor> {
        self.methods.iter().filter(|method| method.is_init_callback)
    }

    /// 显式声明的作用域
    pub fn scope_override(&self) -> Option<BeanScope> {
        self.scope
    }

    pub fn capabilities(&self) -> &[Capability] {
        &self.capabilities
    }

    /// 是否声明了指定能力
    pub fn has_capability(&self, capability: Capability) -> bool {
        self.capabilities.contains(&capability)
    }

    /// 通过 `provides` 声明的能力接口类型名
    pub fn interfaces(&self) -> &[&'static str] {
        &self.interfaces
    }

    /// 按默认命名规则计算的 Bean 名称
    pub fn default_bean_name(&self) -> String {
        match &self.bean_name {
            Some(name) => name.clone(),
            None => decapitalize(self.simple_name()),
        }
    }
}

/// Bean 定义
///
/// 容器为一个 Bean 制定的创建计划，由注册表独占
#[derive(Debug, Clone)]
pub struct BeanDefinition {
    bean_name: String,
    scope: BeanScope,
    component_type: ComponentType,
}

impl BeanDefinition {
    /// 由组件类型计算 Bean 定义，未声明作用域时为单例
    pub fn from_component(component_type: ComponentType) -> Self {
        let descriptor = component_type.descriptor();
        Self {
            bean_name: descriptor.default_bean_name(),
            scope: descriptor.scope_override().unwrap_or_default(),
            component_type,
        }
    }

    pub fn bean_name(&self) -> &str {
        &self.bean_name
    }

    pub fn scope(&self) -> BeanScope {
        self.scope
    }

    pub fn component_type(&self) -> &ComponentType {
        &self.component_type
    }

    pub fn descriptor(&self) -> &TypeDescriptor {
        self.component_type.descriptor()
    }

    pub fn is_singleton(&self) -> bool {
        self.scope == BeanScope::Singleton
    }

    pub fn is_post_processor(&self) -> bool {
        self.descriptor().has_capability(Capability::PostProcessor)
    }
}
