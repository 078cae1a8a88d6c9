//! 约定规范定义
//!
//! Bean 命名、字段注入键以及扫描路径的约定

use heck::ToLowerCamelCase;

/// 去掉模块路径与泛型参数，返回简单类型名
pub fn simple_type_name(qualified_name: &str) -> &str {
    let without_generics = qualified_name
        .split_once('<')
        .map_or(qualified_name, |(head, _)| head);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

/// 首字母小写
///
/// 与 JavaBeans 约定一致：前两个字符都是大写时保持原样，例如 `URLService`
pub fn decapitalize(name: &str) -> String {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (None, _) => String::new(),
        (Some(first), Some(second)) if first.is_uppercase() && second.is_uppercase() => {
            name.to_string()
        }
        (Some(first), _) => first.to_lowercase().chain(name.chars().skip(1)).collect(),
    }
}

/// 由字段名推导依赖的 Bean 名称
///
/// `order_service` 转为 `orderService`，已是小驼峰的名称保持不变
pub fn field_bean_name(field_name: &str) -> String {
    let trimmed = field_name.trim_start_matches("r#");
    if trimmed.contains('_') {
        trimmed.to_lower_camel_case()
    } else {
        decapitalize(trimmed)
    }
}

/// 扫描路径是否为合法的模块路径，例如 `my_app::service`
pub fn is_valid_root(root: &str) -> bool {
    !root.is_empty()
        && root.split("::").all(|segment| {
            let mut chars = segment.chars();
            matches!(chars.next(), Some(c) if c == '_' || c.is_alphabetic())
                && chars.all(|c| c == '_' || c.is_alphanumeric())
        })
}

/// 模块路径是否位于扫描路径之下
pub fn is_under_root(module_path: &str, root: &str) -> bool {
    module_path == root
        || module_path
            .strip_prefix(root)
            .is_some_and(|rest| rest.starts_with("::"))
}
