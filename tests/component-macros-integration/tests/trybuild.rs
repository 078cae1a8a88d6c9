//! trybuild 编译期测试

#[test]
fn trybuild_component_macros() {
    let t = trybuild::TestCases::new();
    t.pass("tests/trybuild/unit_component.rs");
    t.pass("tests/trybuild/autowired_component.rs");
    t.pass("tests/trybuild/lifecycle_component.rs");
}
