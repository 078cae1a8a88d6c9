//! `#[autowired]` 字段解析

use crate::utils::{field_has_attribute, option_arc_inner};
use quote::ToTokens;
use syn::{Error, FieldsNamed, Ident, LitStr, Meta, Result, Type};

/// 需要注入的字段
pub struct InjectionPoint {
    pub ident: Ident,
    /// `Option<Arc<T>>` 中的 `T`
    pub inner: Type,
    pub declared_type: String,
    /// `#[autowired(name = "...")]` 指定的 Bean 名称
    pub bean_name: Option<String>,
}

/// 普通字段
pub struct PlainField {
    pub ident: Ident,
    pub declared_type: String,
}

/// 按声明顺序拆分注入字段与普通字段
pub fn collect_fields(fields: &FieldsNamed) -> Result<(Vec<InjectionPoint>, Vec<PlainField>)> {
    let mut points = Vec::new();
    let mut plain = Vec::new();

    for field in &fields.named {
        let Some(ident) = field.ident.clone() else {
            continue;
        };
        let declared_type = field.ty.to_token_stream().to_string();

        if !field_has_attribute(field, "autowired") {
            plain.push(PlainField { ident, declared_type });
            continue;
        }

        let inner = option_arc_inner(&field.ty).cloned().ok_or_else(|| {
            Error::new_spanned(&field.ty, "#[autowired] 字段必须是 Option<Arc<T>> 类型")
        })?;

        let mut bean_name = None;
        for attr in field.attrs.iter().filter(|attr| attr.path().is_ident("autowired")) {
            if !matches!(attr.meta, Meta::List(_)) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    bean_name = Some(lit.value());
                    Ok(())
                } else {
                    Err(meta.error("autowired 只支持 name 参数"))
                }
            })?;
        }

        points.push(InjectionPoint {
            ident,
            inner,
            declared_type,
            bean_name,
        });
    }

    Ok((points, plain))
}
