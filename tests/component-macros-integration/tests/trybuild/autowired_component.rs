use component_macros::Component;
use infrastructure_common::{Bean, Component as _, Discoverable};
use std::sync::Arc;

pub trait Repository: Send + Sync {
    fn table(&self) -> &'static str;
}

#[derive(Default, Component)]
#[component(provides(dyn Repository))]
pub struct UserRepository;

impl Repository for UserRepository {
    fn table(&self) -> &'static str {
        "users"
    }
}

#[derive(Default, Component)]
pub struct UserService {
    #[autowired(name = "userRepository")]
    repository: Option<Arc<dyn Repository>>,
    #[autowired]
    user_repository: Option<Arc<UserRepository>>,
    calls: u32,
}

fn main() {
    let descriptor = UserService::type_descriptor();
    let names: Vec<String> = descriptor.injection_points().map(|field| field.bean_name()).collect();
    assert_eq!(names, vec!["userRepository", "userRepository"]);

    let repository = Bean::from(Arc::new(UserRepository) as Arc<dyn infrastructure_common::Component>);
    let mut service = UserService::default();
    service.inject("repository", repository.clone()).unwrap();
    service.inject("user_repository", repository).unwrap();
    assert_eq!(service.repository.as_ref().unwrap().table(), "users");
    assert!(service.user_repository.is_some());
    assert_eq!(service.calls, 0);
}
