//! Import statements at the top of the resolvers output.

use gqlts_codegen::ImportModuleSet;
use gqlts_schema::Schema;
use gqlts_typescript::ast::Import;

use crate::helpers::ResolversTemplate;

/// Imports from `graphql`; scalar types are only pulled in when the schema
/// declares custom scalars.
pub fn graphql_import(schema: &Schema) -> Import {
    let import = Import::new("graphql").named("GraphQLResolveInfo");
    if schema.scalars.is_empty() {
        import
    } else {
        import
            .named("GraphQLScalarType")
            .named("GraphQLScalarTypeConfig")
    }
}

/// Imports for every external mapper that applies to the schema, one line
/// per module.
pub fn import_mappers(template: &ResolversTemplate<'_>) -> String {
    let schema = template.common().schema();
    let config = template.config();
    ImportModuleSet::from_mappers(
        schema.types.iter().map(|t| t.name.as_str()),
        schema.interfaces.iter().map(|i| i.name.as_str()),
        &config.mappers,
        config.default_mapper.as_deref(),
    )
    .render()
}

/// Import of the context type when `contextType` points into a module.
pub fn import_context(template: &ResolversTemplate<'_>) -> Option<Import> {
    let (module, symbol) = template.context_import()?;
    Some(Import::new(module).named(symbol))
}

#[cfg(test)]
mod tests {
    use gqlts_config::{ConfigFile, ResolversConfig};
    use gqlts_typescript::init_common_template;

    use super::*;

    #[test]
    fn test_graphql_import_without_scalars() {
        let schema = Schema::parse("type Query { a: Int }").unwrap();
        assert_eq!(
            graphql_import(&schema).build(),
            "import { GraphQLResolveInfo } from 'graphql';\n"
        );
    }

    #[test]
    fn test_graphql_import_with_scalars() {
        let schema = Schema::parse("scalar Date\ntype Query { a: Date }").unwrap();
        assert_eq!(
            graphql_import(&schema).build(),
            "import { GraphQLResolveInfo, GraphQLScalarType, GraphQLScalarTypeConfig } from 'graphql';\n"
        );
    }

    #[test]
    fn test_import_mappers_only_for_present_types() {
        let schema = Schema::parse("type User { id: ID! }\ntype Post { id: ID! }").unwrap();
        let config = ResolversConfig::from_toml_str(
            r#"
            [mappers]
            User = "./m#UserModel"
            Comment = "./m#CommentModel"
            "#,
        )
        .unwrap();
        let common = init_common_template(&schema, &config.common, &()).unwrap();
        let template = ResolversTemplate::new(common, &config);

        assert_eq!(import_mappers(&template), "import { UserModel } from './m';");
    }

    #[test]
    fn test_import_context() {
        let schema = Schema::parse("type Query { a: Int }").unwrap();
        let config = ResolversConfig::from_toml_str("contextType = \"./ctx#Context\"").unwrap();
        let common = init_common_template(&schema, &config.common, &()).unwrap();
        let template = ResolversTemplate::new(common, &config);

        assert_eq!(
            import_context(&template).map(|i| i.build()).as_deref(),
            Some("import { Context } from './ctx';\n")
        );
    }
}
