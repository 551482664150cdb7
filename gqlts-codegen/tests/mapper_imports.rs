//! Import aggregation against real schemas.

use gqlts_codegen::{ImportModuleSet, pick_mapper};
use gqlts_config::{ConfigFile, ResolversConfig};
use gqlts_schema::Schema;

fn imports_for(sdl: &str, config_toml: &str) -> String {
    let schema = Schema::parse(sdl).expect("Failed to parse schema");
    let config = ResolversConfig::from_toml_str(config_toml).expect("Failed to parse config");
    ImportModuleSet::from_mappers(
        schema.types.iter().map(|t| t.name.as_str()),
        schema.interfaces.iter().map(|i| i.name.as_str()),
        &config.mappers,
        config.default_mapper.as_deref(),
    )
    .render()
}

#[test]
fn test_only_present_types_are_imported() {
    let imports = imports_for(
        r#"
        type User { id: ID! }
        type Post { id: ID! }
        "#,
        r#"
        [mappers]
        User = "./m#UserModel"
        Comment = "./m#CommentModel"
        "#,
    );
    insta::assert_snapshot!(imports, @"import { UserModel } from './m';");
}

#[test]
fn test_interfaces_and_default_mapper() {
    let imports = imports_for(
        r#"
        interface Node { id: ID! }
        type User implements Node { id: ID! }
        type Query { node: Node }
        "#,
        r#"
        defaultMapper = "./base#Base"

        [mappers]
        Node = "./node#NodeModel"
        User = "./base#Models.User"
        Query = "{}"
        "#,
    );
    insta::assert_snapshot!(imports, @r"
    import { Base, Models } from './base';
    import { NodeModel } from './node';
    ");
}

#[test]
fn test_pick_mapper_uses_config_order_and_default() {
    let config = ResolversConfig::from_json_str(
        r#"{ "mappers": { "User": "UserModel" }, "defaultMapper": "./m#Any" }"#,
    )
    .unwrap();

    let user = pick_mapper("User", &config.mappers, config.default_mapper.as_deref()).unwrap();
    assert!(!user.is_external);
    assert_eq!(user.ty, "UserModel");

    let post = pick_mapper("Post", &config.mappers, config.default_mapper.as_deref()).unwrap();
    assert!(post.is_external);
    assert_eq!(post.source.as_deref(), Some("./m"));
}
