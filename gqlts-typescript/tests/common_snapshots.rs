//! Snapshot tests for the typescript-common generator.

use gqlts_codegen::{Plugin, SymbolRegistry};
use gqlts_config::{CommonConfig, ConfigFile};
use gqlts_schema::Schema;
use gqlts_typescript::TypeScriptCommonPlugin;

fn generate(sdl: &str, config_toml: &str) -> String {
    let schema = Schema::parse(sdl).expect("Failed to parse schema");
    let config = CommonConfig::from_toml_str(config_toml).expect("Failed to parse config");
    TypeScriptCommonPlugin::new()
        .generate(&schema, &[], &config)
        .expect("Generation failed")
}

const SCHEMA: &str = r#"
    """A point in time"""
    scalar DateTime

    """Primary colors"""
    enum Color {
      RED
      """Grass"""
      GREEN
      DARK_BLUE
    }

    input UserFilter {
      """Match by name"""
      name: String
      ids: [ID!]!
      createdAfter: DateTime
      colors: [Color]
    }

    type Query {
      users(filter: UserFilter): [String]
    }
"#;

#[test]
fn test_default_config() {
    let output = generate(SCHEMA, "");
    insta::assert_snapshot!(output, @r#"
    export type Maybe<T> = T | null;

    /** A point in time */
    export type DateTime = any;

    /** Primary colors */
    export enum Color {
      Red = "RED",
      /** Grass */
      Green = "GREEN",
      DarkBlue = "DARK_BLUE",
    }

    export interface UserFilter {
      /** Match by name */
      name?: Maybe<string>;
      ids: string[];
      createdAfter?: Maybe<DateTime>;
      colors?: Maybe<Maybe<Color>[]>;
    }
    "#);
}

#[test]
fn test_enum_overrides_and_strict_shapes() {
    let output = generate(
        r#"
        scalar DateTime
        enum Color { RED GREEN }
        enum Role { ADMIN USER }
        input UserFilter {
          name: String
          colors: [Color!]
          since: DateTime!
        }
        "#,
        r##"
        constEnums = true
        immutableTypes = true
        avoidOptionals = true
        interfacePrefix = "I"
        optionalType = "undefined"

        [scalars]
        DateTime = "Date"

        [enums]
        Role = "./roles#RoleEnum"

        [enums.Color]
        RED = "#f00"
        "##,
    );
    insta::assert_snapshot!(output, @r##"
    import { RoleEnum as Role } from './roles';

    export type Maybe<T> = T | undefined;

    export type DateTime = Date;

    export const enum Color {
      Red = "#f00",
      Green = "GREEN",
    }

    export interface IUserFilter {
      readonly name: Maybe<string>;
      readonly colors: Maybe<ReadonlyArray<Color>>;
      readonly since: Date;
    }
    "##);
}

#[test]
fn test_enums_as_types_with_keep() {
    let schema = Schema::parse("enum Color { RED dark_blue }").unwrap();
    let config = CommonConfig::from_json_str(r#"{ "enumsAsTypes": true, "namingConvention": "keep" }"#)
        .unwrap();
    let output = TypeScriptCommonPlugin::new()
        .generate(&schema, &[], &config)
        .unwrap();
    insta::assert_snapshot!(output, @r#"
    export type Maybe<T> = T | null;

    export type Color = "RED" | "dark_blue";
    "#);
}

#[test]
fn test_registered_naming_function() {
    let mut symbols = SymbolRegistry::new();
    symbols.register("./naming#shout", |s: &str| s.to_uppercase());

    let schema = Schema::parse("enum color { red }\ninput user_input { _id: ID! }").unwrap();
    let config = CommonConfig::from_toml_str(
        r#"namingConvention = { typeNames = "./naming#shout", enumValues = "keep" }"#,
    )
    .unwrap();
    let output = TypeScriptCommonPlugin::with_symbols(symbols)
        .generate(&schema, &[], &config)
        .unwrap();
    insta::assert_snapshot!(output, @r#"
    export type Maybe<T> = T | null;

    export enum COLOR {
      red = "red",
    }

    export interface USER_INPUT {
      _id: string;
    }
    "#);
}

#[test]
fn test_unresolved_naming_function_fails() {
    let schema = Schema::parse("enum Color { RED }").unwrap();
    let config = CommonConfig::from_toml_str(r#"namingConvention = "./naming#missing""#).unwrap();
    let err = TypeScriptCommonPlugin::new()
        .generate(&schema, &[], &config)
        .unwrap_err();
    assert!(format!("{err:?}").contains("./naming#missing"));
}

#[test]
fn test_empty_naming_convention_keeps_names() {
    let output = generate("enum my_color { dark_red }", r#"namingConvention = """#);
    insta::assert_snapshot!(output, @r#"
    export type Maybe<T> = T | null;

    export enum my_color {
      dark_red = "dark_red",
    }
    "#);
}
