use component_macros::Component;
use infrastructure_common::{BeanScope, Discoverable};

#[derive(Default, Component)]
pub struct OrderService;

#[derive(Default, Component)]
#[component(name = "auditLog", scope = "prototype")]
pub struct AuditLog;

fn main() {
    let descriptor = OrderService::type_descriptor();
    assert_eq!(descriptor.default_bean_name(), "orderService");

    let descriptor = AuditLog::type_descriptor();
    assert_eq!(descriptor.default_bean_name(), "auditLog");
    assert_eq!(descriptor.scope_override(), Some(BeanScope::Prototype));
}
