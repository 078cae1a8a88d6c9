//! # Component Macros
//!
//! 这个 crate 提供了 `#[derive(Component)]`，为结构体生成：
//!
//! - `Component` 实现：字段注入表、生命周期方法表、能力接口查询和能力访问器
//! - `Discoverable` 实现：类型描述符
//! - 启动时写入组件目录的注册函数（依赖 `ctor`）
//!
//! ## 使用示例
//!
//! ```ignore
//! use component_macros::Component;
//! use std::sync::Arc;
//!
//! #[derive(Default, Component)]
//! pub struct OrderService;
//!
//! #[derive(Default, Component)]
//! #[component(post_construct = "init", provides(dyn UserApi))]
//! pub struct UserService {
//!     #[autowired]
//!     order_service: Option<Arc<OrderService>>,
//! }
//! ```
//!
//! 使用方需要依赖 `infrastructure-common` 和 `ctor`。

use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod component;
mod injection;
mod lifecycle;
mod utils;

// Re-exports are not allowed in proc-macro crates

/// 组件派生宏
///
/// # 结构体参数 `#[component(...)]`
///
/// - `name = "customName"` - 自定义 Bean 名称，默认为首字母小写的类型名
/// - `scope = "singleton" | "prototype"` - 作用域，默认单例
/// - `post_construct = "method"` - post-construct 方法，可重复，按声明顺序调用
/// - `provides(dyn Trait, ...)` - 可通过 `Bean::cast` 访问的能力接口
/// - `bean_name_aware` / `initializing` / `post_processor` - 声明已实现的能力 trait
///
/// # 字段参数
///
/// - `#[autowired]` - 按字段名注入，`order_service` 对应 Bean `orderService`
/// - `#[autowired(name = "beanName")]` - 按指定名称注入
///
/// 注入字段必须是 `Option<Arc<T>>`，`T` 可以是具体类型或 `dyn Trait`。
/// 结构体必须实现 `Default`，作为无参构造函数。
#[proc_macro_derive(Component, attributes(component, autowired))]
pub fn derive_component(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    component::derive_component_impl(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
