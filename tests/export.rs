use routegen::{DiscoveredClass, DiscoveredMethod, OwnerTag, RoutesGenerator};
use serde_json::Value;

fn user_controller() -> DiscoveredClass {
    DiscoveredClass::new(
        "UserController",
        vec![
            DiscoveredMethod {
                methods: vec!["GET".into()],
                ..DiscoveredMethod::new("list", vec!["/user/list".into()])
            },
            DiscoveredMethod::new("getOne", vec!["/user/get-one".into()]),
        ],
    )
}

fn order_controller() -> DiscoveredClass {
    DiscoveredClass::new(
        "OrderController",
        vec![DiscoveredMethod::new("list", vec!["/order/list".into()])],
    )
}

fn parse(json: &str) -> Value {
    serde_json::from_str(json).expect("exported tree is valid JSON")
}

fn routes(node: &Value) -> &Vec<Value> {
    node["routes"].as_array().expect("node has routes")
}

fn handlers(node: &Value) -> &Vec<Value> {
    node["handlers"].as_array().expect("node has handlers")
}

#[test]
fn end_to_end_controller_scenario() {
    let mut generator = RoutesGenerator::new("", "Controller");
    generator.register(user_controller());
    generator.register(order_controller());

    let tree = parse(&generator.routes().unwrap());
    assert_eq!(tree["name"], "@");
    assert!(tree.get("handlers").is_none());

    // classes merge in type-name order: OrderController before UserController
    let children = routes(&tree);
    assert_eq!(children.len(), 2);
    assert_eq!(children[0]["name"], "order");
    assert_eq!(children[1]["name"], "user");

    assert_eq!(handlers(&children[0]).len(), 1);
    let user_handlers = handlers(&children[1]);
    assert_eq!(user_handlers.len(), 2);

    assert_eq!(user_handlers[0]["name"], "list");
    assert_eq!(user_handlers[0]["url"], "/user/list");
    assert_eq!(user_handlers[0]["methods"], serde_json::json!(["GET"]));

    // absent constraint sets are omitted, not emitted empty
    assert!(user_handlers[0].get("params").is_none());
    assert!(user_handlers[1].get("methods").is_none());

    // construction-only bookkeeping never surfaces
    for child in children {
        assert!(child.get("path").is_none());
        assert!(child.get("owners").is_none());
    }
}

#[test]
fn shared_prefix_classes_collapse_into_one_group() {
    let mut generator = RoutesGenerator::new("", "Controller");
    generator.register(user_controller());
    generator.register(DiscoveredClass::new(
        "UserAccountController",
        vec![DiscoveredMethod::new("show", vec!["/user/account/show".into()])],
    ));

    let tree = parse(&generator.routes().unwrap());
    let children = routes(&tree);
    assert_eq!(children.len(), 1);

    // "/user" is both directly handled and a group with deeper sub-paths
    let user = &children[0];
    assert_eq!(user["name"], "user");
    assert_eq!(handlers(user).len(), 2);
    let nested = routes(user);
    assert_eq!(nested.len(), 1);
    assert_eq!(nested[0]["name"], "account");
    assert_eq!(handlers(&nested[0]).len(), 1);
}

#[test]
fn deep_class_names_become_nested_groups() {
    let mut generator = RoutesGenerator::new("", "Controller");
    generator.register(DiscoveredClass::new(
        "SystemAdminUserController",
        vec![DiscoveredMethod::new("list", vec!["/system/admin/user/list".into()])],
    ));

    let tree = parse(&generator.routes().unwrap());
    let system = &routes(&tree)[0];
    assert_eq!(system["name"], "system");
    assert!(system.get("handlers").is_none());
    let admin = &routes(system)[0];
    assert_eq!(admin["name"], "admin");
    assert!(admin.get("handlers").is_none());
    let user = &routes(admin)[0];
    assert_eq!(user["name"], "user");
    assert_eq!(handlers(user).len(), 1);
}

#[test]
fn owner_filter_restricts_export() {
    let mut generator = RoutesGenerator::new("", "Controller");
    generator.register(user_controller());
    generator.register(order_controller());
    generator.register(DiscoveredClass::new(
        "UserAccountController",
        vec![DiscoveredMethod::new("show", vec!["/user/account/show".into()])],
    ));

    let json = generator
        .routes_for(&[OwnerTag::new("UserAccountController")])
        .unwrap();
    let tree = parse(&json);

    let children = routes(&tree);
    assert_eq!(children.len(), 1);
    assert_eq!(children[0]["name"], "user");
    assert_eq!(routes(&children[0])[0]["name"], "account");

    // an empty filter exports everything
    let all = parse(&generator.routes().unwrap());
    assert_eq!(routes(&all).len(), 2);
}

#[test]
fn tree_is_frozen_after_first_export() {
    let mut generator = RoutesGenerator::new("", "Controller");
    generator.register(order_controller());

    let first = generator.routes().unwrap();
    // arrives after the build: ignored
    generator.register(user_controller());
    let second = generator.routes().unwrap();

    assert_eq!(first, second);
}

#[test]
fn empty_discovery_exports_bare_root() {
    let mut generator = RoutesGenerator::new("", "Controller");
    assert_eq!(generator.routes().unwrap(), r#"{"name":"@"}"#);
}
