//! 生命周期方法表与能力访问器生成

use crate::component::ComponentArgs;
use proc_macro2::TokenStream;
use quote::quote;
use syn::Ident;

/// post-construct 方法名到方法调用的映射表
///
/// 方法可以返回 `()` 或 `Result<(), E>`
pub fn invoke_table(methods: &[Ident]) -> TokenStream {
    if methods.is_empty() {
        return TokenStream::new();
    }

    let arms = methods.iter().map(|method| {
        let method_name = method.to_string();
        quote! {
            #method_name => ::infrastructure_common::CallbackResult::into_callback_result(self.#method()),
        }
    });

    quote! {
        fn invoke(&mut self, method: &str) -> ::std::result::Result<(), ::infrastructure_common::BoxError> {
            match method {
                #(#arms)*
                _ => ::std::result::Result::Err(::std::boxed::Box::new(
                    ::infrastructure_common::DependencyError::UnknownMethod {
                        type_name: ::std::any::type_name::<Self>().to_string(),
                        method: method.to_string(),
                    },
                )),
            }
        }
    }
}

/// 声明的能力对应的访问器
pub fn capability_accessors(args: &ComponentArgs) -> TokenStream {
    let bean_name_aware = args.bean_name_aware.then(|| {
        quote! {
            fn as_bean_name_aware(&mut self) -> ::std::option::Option<&mut dyn ::infrastructure_common::BeanNameAware> {
                ::std::option::Option::Some(self)
            }
        }
    });
    let initializing = args.initializing.then(|| {
        quote! {
            fn as_initializing(&mut self) -> ::std::option::Option<&mut dyn ::infrastructure_common::InitializingBean> {
                ::std::option::Option::Some(self)
            }
        }
    });
    let post_processor = args.post_processor.then(|| {
        quote! {
            fn as_post_processor(
                self: ::std::sync::Arc<Self>,
            ) -> ::std::option::Option<::std::sync::Arc<dyn ::infrastructure_common::BeanPostProcessor>> {
                ::std::option::Option::Some(self)
            }
        }
    });

    quote! {
        #bean_name_aware
        #initializing
        #post_processor
    }
}
