use component_macros::Component;
use infrastructure_common::{
    BeanNameAware, BoxError, Capability, Component as _, Discoverable, InitializingBean,
};

#[derive(Default, Component)]
#[component(post_construct = "init", post_construct = "warm_up", bean_name_aware, initializing)]
pub struct CacheWarmer {
    steps: Vec<&'static str>,
}

impl CacheWarmer {
    fn init(&mut self) {
        self.steps.push("init");
    }

    fn warm_up(&mut self) -> Result<(), BoxError> {
        self.steps.push("warm_up");
        Ok(())
    }
}

impl BeanNameAware for CacheWarmer {
    fn set_bean_name(&mut self, _name: &str) {
        self.steps.push("aware");
    }
}

impl InitializingBean for CacheWarmer {
    fn after_properties_set(&mut self) -> Result<(), BoxError> {
        self.steps.push("after_properties_set");
        Ok(())
    }
}

fn main() {
    let descriptor = CacheWarmer::type_descriptor();
    assert!(descriptor.has_capability(Capability::BeanNameAware));
    assert!(descriptor.has_capability(Capability::Initializing));
    assert!(!descriptor.has_capability(Capability::PostProcessor));

    let mut warmer = CacheWarmer::default();
    warmer.invoke("init").unwrap();
    warmer.invoke("warm_up").unwrap();
    assert!(warmer.invoke("missing").is_err());
    assert!(warmer.as_bean_name_aware().is_some());
    assert_eq!(warmer.steps, vec!["init", "warm_up"]);
}
