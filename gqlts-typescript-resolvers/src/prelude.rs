//! Resolver signature types every resolvers file starts with.

use gqlts_typescript::RawCode;

/// The fixed resolver, subscription, type-resolve and directive signatures,
/// with `context` as the default `TContext`.
pub fn prelude(context: &str) -> Vec<RawCode> {
    vec![
        RawCode::new(format!(
            "export type Resolver<Result, Parent = {{}}, TContext = {context}, Args = {{}}> = (
  parent: Parent,
  args: Args,
  context: TContext,
  info: GraphQLResolveInfo
) => Promise<Result> | Result;"
        )),
        RawCode::new(
            "export interface ISubscriptionResolverObject<Result, Parent, TContext, Args> {
  subscribe<R = Result, P = Parent>(
    parent: P,
    args: Args,
    context: TContext,
    info: GraphQLResolveInfo
  ): AsyncIterator<R | Result> | Promise<AsyncIterator<R | Result>>;
  resolve?<R = Result, P = Parent>(
    parent: P,
    args: Args,
    context: TContext,
    info: GraphQLResolveInfo
  ): R | Result | Promise<R | Result>;
}",
        ),
        RawCode::new(format!(
            "export type SubscriptionResolver<Result, Parent = {{}}, TContext = {context}, Args = {{}}> =
  | ((...args: any[]) => ISubscriptionResolverObject<Result, Parent, TContext, Args>)
  | ISubscriptionResolverObject<Result, Parent, TContext, Args>;"
        )),
        RawCode::new(format!(
            "export type TypeResolveFn<Types, Parent = {{}}, TContext = {context}> = (
  parent: Parent,
  context: TContext,
  info: GraphQLResolveInfo
) => Maybe<Types>;"
        )),
        RawCode::new("export type NextResolverFn<T> = () => Promise<T>;"),
        RawCode::new(format!(
            "export type DirectiveResolverFn<TResult, TArgs = {{}}, TContext = {context}> = (
  next: NextResolverFn<TResult>,
  source: any,
  args: TArgs,
  context: TContext,
  info: GraphQLResolveInfo
) => TResult | Promise<TResult>;"
        )),
    ]
}
