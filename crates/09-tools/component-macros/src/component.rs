//! 组件派生宏实现

use crate::injection::{collect_fields, InjectionPoint, PlainField};
use crate::lifecycle::{capability_accessors, invoke_table};
use crate::utils::registration_fn_name;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{
    punctuated::Punctuated, Attribute, Data, DeriveInput, Error, Fields, Ident, LitStr, Result,
    Token, Type,
};

/// `#[component(...)]` 参数
#[derive(Default)]
pub struct ComponentArgs {
    /// 自定义 Bean 名称
    pub name: Option<String>,
    /// 作用域，已规范化为小写
    pub scope: Option<String>,
    /// post-construct 方法，保持声明顺序
    pub post_construct: Vec<Ident>,
    /// 对外暴露的能力接口
    pub provides: Vec<Type>,
    pub bean_name_aware: bool,
    pub initializing: bool,
    pub post_processor: bool,
}

impl ComponentArgs {
    /// 解析结构体上的所有 `#[component]` 属性
    pub fn from_attrs(attrs: &[Attribute]) -> Result<Self> {
        let mut args = Self::default();

        for attr in attrs.iter().filter(|attr| attr.path().is_ident("component")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("name") {
                    let lit: LitStr = meta.value()?.parse()?;
                    args.name = Some(lit.value());
                } else if meta.path.is_ident("scope") {
                    let lit: LitStr = meta.value()?.parse()?;
                    let scope = lit.value().trim().to_ascii_lowercase();
                    if scope != "singleton" && scope != "prototype" {
                        return Err(Error::new(
                            lit.span(),
                            "scope 只能是 \"singleton\" 或 \"prototype\"",
                        ));
                    }
                    args.scope = Some(scope);
                } else if meta.path.is_ident("post_construct") {
                    let lit: LitStr = meta.value()?.parse()?;
                    args.post_construct.push(lit.parse::<Ident>()?);
                } else if meta.path.is_ident("provides") {
                    let content;
                    syn::parenthesized!(content in meta.input);
                    let types = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
                    args.provides.extend(types);
                } else if meta.path.is_ident("bean_name_aware") {
                    args.bean_name_aware = true;
                } else if meta.path.is_ident("initializing") {
                    args.initializing = true;
                } else if meta.path.is_ident("post_processor") {
                    args.post_processor = true;
                } else {
                    return Err(meta.error("不支持的 component 参数"));
                }
                Ok(())
            })?;
        }

        Ok(args)
    }
}

/// 实现 #[derive(Component)]
pub fn derive_component_impl(input: DeriveInput) -> Result<TokenStream> {
    let struct_name = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(Error::new_spanned(&input.generics, "组件类型不能带泛型参数"));
    }

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(named) => collect_fields(named)?,
            Fields::Unit => (Vec::new(), Vec::new()),
            Fields::Unnamed(_) => {
                return Err(Error::new_spanned(struct_name, "组件必须使用具名字段或单元结构体"));
            }
        },
        _ => return Err(Error::new_spanned(struct_name, "#[derive(Component)] 只支持结构体")),
    };
    let (injection_points, plain_fields) = fields;

    let args = ComponentArgs::from_attrs(&input.attrs)?;

    let interface_fn = interface_table(&args.provides);
    let inject_fn = inject_table(&injection_points);
    let invoke_fn = invoke_table(&args.post_construct);
    let accessors = capability_accessors(&args);
    let descriptor = type_descriptor(&args, &injection_points, &plain_fields);
    let registration = registration_code(struct_name);

    Ok(quote! {
        impl ::infrastructure_common::Component for #struct_name {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            #interface_fn

            #inject_fn

            #invoke_fn

            #accessors
        }

        impl ::infrastructure_common::Discoverable for #struct_name {
            fn type_descriptor() -> ::infrastructure_common::TypeDescriptor {
                #descriptor
            }
        }

        #registration
    })
}

/// 能力接口查询表
fn interface_table(provides: &[Type]) -> TokenStream {
    let arms = provides.iter().map(|interface| {
        quote! {
            if id == ::std::any::TypeId::of::<::std::sync::Arc<#interface>>() {
                let exposed: ::std::sync::Arc<#interface> = self;
                return ::std::option::Option::Some(::std::boxed::Box::new(exposed));
            }
        }
    });

    quote! {
        fn interface(
            self: ::std::sync::Arc<Self>,
            id: ::std::any::TypeId,
        ) -> ::std::option::Option<::std::boxed::Box<dyn ::std::any::Any>> {
            #(#arms)*
            ::infrastructure_common::expose(self, id)
        }
    }
}

/// 字段名到注入逻辑的显式映射表
fn inject_table(points: &[InjectionPoint]) -> TokenStream {
    if points.is_empty() {
        return TokenStream::new();
    }

    let arms = points.iter().map(|point| {
        let ident = &point.ident;
        let field_name = ident.to_string();
        let inner = &point.inner;
        quote! {
            #field_name => {
                let resolved = bean.cast::<#inner>().ok_or_else(|| {
                    ::infrastructure_common::DependencyError::TypeMismatch {
                        field: field.to_string(),
                        expected: ::std::any::type_name::<#inner>().to_string(),
                        actual: bean.type_name().to_string(),
                    }
                })?;
                self.#ident = ::std::option::Option::Some(resolved);
                ::std::result::Result::Ok(())
            }
        }
    });

    quote! {
        fn inject(
            &mut self,
            field: &str,
            bean: ::infrastructure_common::Bean,
        ) -> ::std::result::Result<(), ::infrastructure_common::DependencyError> {
            match field {
                #(#arms)*
                _ => ::std::result::Result::Err(::infrastructure_common::DependencyError::UnknownField {
                    type_name: ::std::any::type_name::<Self>().to_string(),
                    field: field.to_string(),
                }),
            }
        }
    }
}

/// 类型描述符构建链
fn type_descriptor(args: &ComponentArgs, points: &[InjectionPoint], plain: &[PlainField]) -> TokenStream {
    let name_call = args.name.as_ref().map(|name| quote!(.with_bean_name(#name)));
    let scope_call = args.scope.as_deref().map(|scope| match scope {
        "prototype" => quote!(.with_scope(::infrastructure_common::BeanScope::Prototype)),
        _ => quote!(.with_scope(::infrastructure_common::BeanScope::Singleton)),
    });

    let autowired = points.iter().map(|point| {
        let field_name = point.ident.to_string();
        let declared = &point.declared_type;
        let dependency = point
            .bean_name
            .as_ref()
            .map(|name| quote!(.with_dependency_name(#name)));
        quote! {
            .with_field(::infrastructure_common::FieldDescriptor::autowired(#field_name, #declared) #dependency)
        }
    });
    let plain = plain.iter().map(|field| {
        let field_name = field.ident.to_string();
        let declared = &field.declared_type;
        quote!(.with_field(::infrastructure_common::FieldDescriptor::plain(#field_name, #declared)))
    });
    let callbacks = args.post_construct.iter().map(|method| {
        let method = method.to_string();
        quote!(.with_post_construct(#method))
    });

    let mut capabilities = Vec::new();
    if args.post_processor {
        capabilities.push(quote!(PostProcessor));
    }
    if args.bean_name_aware {
        capabilities.push(quote!(BeanNameAware));
    }
    if args.initializing {
        capabilities.push(quote!(Initializing));
    }
    let interfaces = args.provides.iter();

    quote! {
        ::infrastructure_common::TypeDescriptor::of::<Self>(::std::module_path!())
            #name_call
            #scope_call
            #(#autowired)*
            #(#plain)*
            #(#callbacks)*
            #(.with_capability(::infrastructure_common::Capability::#capabilities))*
            #(.provides::<#interfaces>())*
    }
}

/// 程序启动时写入组件目录
fn registration_code(struct_name: &Ident) -> TokenStream {
    let registration_fn_name = registration_fn_name(struct_name);

    quote! {
        #[ctor::ctor]
        fn #registration_fn_name() {
            ::infrastructure_common::register_component(
                ::std::module_path!(),
                <#struct_name as ::infrastructure_common::Discoverable>::component_type,
            );
        }
    }
}
