//! 派生宏生成代码的运行期行为

use component_macros::Component;
use infrastructure_common::{
    catalog_entries, BeanDefinition, BeanScope, Component as _, ComponentType, DependencyError,
    Discoverable,
};
use std::sync::Arc;

mod billing {
    use super::*;

    #[derive(Default, Component)]
    pub struct InvoiceRepository;

    #[derive(Default, Component)]
    #[component(scope = "Prototype", post_construct = "open")]
    pub struct InvoiceService {
        #[autowired]
        pub invoice_repository: Option<Arc<InvoiceRepository>>,
        pub opened: bool,
    }

    impl InvoiceService {
        fn open(&mut self) {
            self.opened = true;
        }
    }
}

mod naming {
    use super::*;

    #[derive(Default, Component)]
    pub struct URLService;

    #[derive(Default, Component)]
    #[component(name = "  ")]
    pub struct BlankName;
}

#[test]
fn test_components_register_under_their_module() {
    let entries = catalog_entries("derive_tests::billing");
    let mut names: Vec<&str> = entries
        .iter()
        .map(|entry| (entry.component_type)().descriptor().simple_name())
        .collect();
    names.sort_unstable();

    assert_eq!(names, vec!["InvoiceRepository", "InvoiceService"]);
    assert!(entries
        .iter()
        .all(|entry| entry.module_path == "derive_tests::billing"));
}

#[test]
fn test_descriptor_reflects_attributes() {
    let definition = BeanDefinition::from_component(ComponentType::of::<billing::InvoiceService>());

    assert_eq!(definition.bean_name(), "invoiceService");
    assert_eq!(definition.scope(), BeanScope::Prototype);

    let descriptor = definition.descriptor();
    let injected: Vec<&str> = descriptor.injection_points().map(|field| field.name).collect();
    assert_eq!(injected, vec!["invoice_repository"]);
    assert_eq!(descriptor.fields().len(), 2);
    assert_eq!(descriptor.init_callbacks().count(), 1);
}

#[test]
fn test_default_naming_rules() {
    assert_eq!(naming::URLService::type_descriptor().default_bean_name(), "URLService");
    assert_eq!(naming::BlankName::type_descriptor().default_bean_name(), "blankName");
}

#[test]
fn test_generated_constructor_and_tables() {
    let constructor = ComponentType::of::<billing::InvoiceService>()
        .constructor()
        .expect("derived components are constructible");
    let mut instance = constructor().unwrap();

    let repository: Arc<dyn infrastructure_common::Component> = Arc::new(billing::InvoiceRepository);
    instance.inject("invoice_repository", repository.into()).unwrap();
    instance.invoke("open").unwrap();

    let service = instance
        .as_any()
        .downcast_ref::<billing::InvoiceService>()
        .unwrap();
    assert!(service.invoice_repository.is_some());
    assert!(service.opened);
}

#[test]
fn test_injecting_wrong_type_is_reported() {
    let mut service = billing::InvoiceService::default();
    let wrong: Arc<dyn infrastructure_common::Component> = Arc::new(naming::URLService);

    let err = service.inject("invoice_repository", wrong.into()).unwrap_err();
    assert!(matches!(err, DependencyError::TypeMismatch { ref field, .. } if field == "invoice_repository"));

    let repository: Arc<dyn infrastructure_common::Component> = Arc::new(billing::InvoiceRepository);
    let err = service.inject("unknown", repository.into()).unwrap_err();
    assert!(matches!(err, DependencyError::UnknownField { .. }));
}
