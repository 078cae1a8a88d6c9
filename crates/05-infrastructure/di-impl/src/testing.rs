//! 单元测试共用的组件

use infrastructure_common::{construct_boxed, Component, ComponentType, TypeDescriptor};

macro_rules! test_component {
    ($name:ident) => {
        #[derive(Default)]
        pub struct $name;

        impl infrastructure_common::Component for $name {
            fn as_any(&self) -> &dyn std::any::Any {
                self
            }

            fn interface(
                self: std::sync::Arc<Self>,
                id: std::any::TypeId,
            ) -> Option<Box<dyn std::any::Any>> {
                infrastructure_common::expose(self, id)
            }
        }
    };
}

pub(crate) use test_component;

test_component!(Plain);

/// 以类型默认描述符为基础构造组件类型
pub fn component_type<T: Component + Default>(
    customize: impl FnOnce(TypeDescriptor) -> TypeDescriptor,
) -> ComponentType {
    ComponentType::new(
        customize(TypeDescriptor::of::<T>(module_path!())),
        construct_boxed::<T>,
    )
}
